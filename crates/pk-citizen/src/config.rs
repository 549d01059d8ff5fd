//! Tunables for the parking AI.

use pk_core::{CoreError, CoreResult};
use pk_path::LaneQuery;

/// Parking-AI parameters consulted by the per-agent state machine.
///
/// Constructed by the host (typically deserialized with the `serde` feature)
/// and passed by reference into the operations that need it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParkingAiConfig {
    /// Search radius when snapping a building or parked car to the nearest
    /// pedestrian lane (default: 96).
    pub max_building_to_pedestrian_lane_distance: f32,

    /// Upper bound on the length of a return path (default: 20 000).
    pub max_return_path_length: f32,

    /// Occupied-on-arrival parking spaces tolerated before giving up
    /// (default: 3).
    pub max_parking_attempts: u32,
}

impl Default for ParkingAiConfig {
    fn default() -> Self {
        Self {
            max_building_to_pedestrian_lane_distance: 96.0,
            max_return_path_length: 20_000.0,
            max_parking_attempts: 3,
        }
    }
}

impl ParkingAiConfig {
    /// The lane query used to place both ends of a return path.
    pub fn pedestrian_lane_query(&self) -> LaneQuery {
        LaneQuery::pedestrian(self.max_building_to_pedestrian_lane_distance)
    }

    /// Reject non-finite or non-positive distances.
    pub fn validate(&self) -> CoreResult<()> {
        let d = self.max_building_to_pedestrian_lane_distance;
        if !d.is_finite() || d <= 0.0 {
            return Err(CoreError::Config(format!(
                "max_building_to_pedestrian_lane_distance must be positive, got {d}"
            )));
        }
        let l = self.max_return_path_length;
        if !l.is_finite() || l <= 0.0 {
            return Err(CoreError::Config(format!(
                "max_return_path_length must be positive, got {l}"
            )));
        }
        Ok(())
    }
}

//! Path request descriptor.

use std::fmt;

use pk_core::{LaneTypes, PathPosition, VehicleTypes};

/// Which path-finding subsystem a path belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtPathType {
    #[default]
    None,
    /// Pedestrian legs only (optionally riding public transport).
    WalkingOnly,
    /// Vehicle legs only.
    DrivingOnly,
}

impl ExtPathType {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtPathType::None        => "none",
            ExtPathType::WalkingOnly => "walking-only",
            ExtPathType::DrivingOnly => "driving-only",
        }
    }
}

impl fmt::Display for ExtPathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the path service needs to schedule one computation.
///
/// `start_b` / `end_b` are optional alternative endpoints (the opposite
/// lane of the same segment, for instance).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathRequest {
    pub path_type:      ExtPathType,
    pub start_a:        PathPosition,
    pub start_b:        Option<PathPosition>,
    pub end_a:          PathPosition,
    pub end_b:          Option<PathPosition>,
    pub lane_types:     LaneTypes,
    pub vehicle_types:  VehicleTypes,
    /// Upper bound on path length in world units.
    pub max_length:     f32,
    pub ignore_blocked: bool,
    pub ignore_flooded: bool,
    pub ignore_costs:   bool,
    pub random_parking: bool,
    pub stable_path:    bool,
    /// Place the request at the front of the service's queue.
    pub skip_queue:     bool,
}

impl PathRequest {
    /// A pedestrian path from `start` to `end`.
    ///
    /// Pedestrian and public-transport lanes, no vehicle, every flag off.
    pub fn walking_only(start: PathPosition, end: PathPosition, max_length: f32) -> Self {
        Self {
            path_type:      ExtPathType::WalkingOnly,
            start_a:        start,
            start_b:        None,
            end_a:          end,
            end_b:          None,
            lane_types:     LaneTypes::PEDESTRIAN | LaneTypes::PUBLIC_TRANSPORT,
            vehicle_types:  VehicleTypes::NONE,
            max_length,
            ignore_blocked: false,
            ignore_flooded: false,
            ignore_costs:   false,
            random_parking: false,
            stable_path:    false,
            skip_queue:     false,
        }
    }
}

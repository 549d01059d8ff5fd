//! Lane-position resolution: the `LocationResolver` trait and an R-tree
//! backed reference implementation.
//!
//! # Spatial index
//!
//! [`LaneIndex`] stores one [`LaneAnchor`] per resolvable lane point in an
//! R-tree (via `rstar`).  A query walks anchors in ascending distance from
//! the world point and returns the first one the [`LaneQuery`] accepts,
//! stopping as soon as the search radius is exceeded.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use pk_core::{LaneTypes, PathPosition, VehicleTypes, WorldPos};

// ── Service ───────────────────────────────────────────────────────────────────

/// Network service a lane belongs to.  Queries only match their own service.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Service {
    #[default]
    Road,
    PublicTransport,
    Beautification,
}

// ── LaneQuery ─────────────────────────────────────────────────────────────────

/// Filter for a nearest-lane lookup.
///
/// A lane matches on its primary masks, or on the secondary masks when
/// `secondary_lane_types` is non-empty.  An empty vehicle mask accepts any
/// vehicle type.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneQuery {
    pub service:                 Service,
    pub lane_types:              LaneTypes,
    pub vehicle_types:           VehicleTypes,
    pub secondary_lane_types:    LaneTypes,
    pub secondary_vehicle_types: VehicleTypes,
    pub allow_underground:       bool,
    /// Only accept lanes connected to the wider network.
    pub require_connect:         bool,
    /// Search radius in world units.
    pub max_distance:            f32,
}

impl LaneQuery {
    /// Road-service pedestrian lanes within `max_distance`, surface only,
    /// connectivity not required.
    pub fn pedestrian(max_distance: f32) -> Self {
        Self {
            service:                 Service::Road,
            lane_types:              LaneTypes::PEDESTRIAN,
            vehicle_types:           VehicleTypes::NONE,
            secondary_lane_types:    LaneTypes::NONE,
            secondary_vehicle_types: VehicleTypes::NONE,
            allow_underground:       false,
            require_connect:         false,
            max_distance,
        }
    }

    /// `true` if `anchor` satisfies every filter except distance.
    pub fn accepts(&self, anchor: &LaneAnchor) -> bool {
        if anchor.service != self.service {
            return false;
        }
        if anchor.underground && !self.allow_underground {
            return false;
        }
        if self.require_connect && !anchor.connected {
            return false;
        }
        let primary = lanes_match(anchor, self.lane_types, self.vehicle_types);
        primary
            || (!self.secondary_lane_types.is_empty()
                && lanes_match(anchor, self.secondary_lane_types, self.secondary_vehicle_types))
    }
}

#[inline]
fn lanes_match(anchor: &LaneAnchor, lanes: LaneTypes, vehicles: VehicleTypes) -> bool {
    anchor.lane_types.intersects(lanes)
        && (vehicles.is_empty() || anchor.vehicle_types.intersects(vehicles))
}

// ── LocationResolver trait ────────────────────────────────────────────────────

/// Maps a world point to the nearest usable lane position.
pub trait LocationResolver {
    /// Nearest lane position accepted by `query` within
    /// `query.max_distance`, or `None` if there is none.
    fn find_nearest_lane_position(&self, pos: WorldPos, query: &LaneQuery) -> Option<PathPosition>;
}

// ── LaneIndex ─────────────────────────────────────────────────────────────────

/// A resolvable point on a lane, with the attributes queries filter on.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneAnchor {
    pub pos:           WorldPos,
    pub position:      PathPosition,
    pub service:       Service,
    pub lane_types:    LaneTypes,
    pub vehicle_types: VehicleTypes,
    pub underground:   bool,
    pub connected:     bool,
}

impl LaneAnchor {
    /// A connected surface pedestrian lane on the road service.
    pub fn sidewalk(pos: WorldPos, position: PathPosition) -> Self {
        Self {
            pos,
            position,
            service:       Service::Road,
            lane_types:    LaneTypes::PEDESTRIAN,
            vehicle_types: VehicleTypes::NONE,
            underground:   false,
            connected:     true,
        }
    }
}

impl RTreeObject for LaneAnchor {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.pos.to_array())
    }
}

impl PointDistance for LaneAnchor {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        self.pos.sqr_distance(WorldPos::from(*point))
    }
}

/// R-tree of lane anchors implementing [`LocationResolver`].
pub struct LaneIndex {
    tree: RTree<LaneAnchor>,
}

impl LaneIndex {
    /// Bulk-load an index from `anchors`.
    pub fn new(anchors: Vec<LaneAnchor>) -> Self {
        Self { tree: RTree::bulk_load(anchors) }
    }

    pub fn empty() -> Self {
        Self { tree: RTree::new() }
    }

    pub fn insert(&mut self, anchor: LaneAnchor) {
        self.tree.insert(anchor);
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl LocationResolver for LaneIndex {
    fn find_nearest_lane_position(&self, pos: WorldPos, query: &LaneQuery) -> Option<PathPosition> {
        let max_d2 = query.max_distance * query.max_distance;
        let point = pos.to_array();
        self.tree
            .nearest_neighbor_iter(&point)
            .take_while(|a| a.distance_2(&point) <= max_d2)
            .find(|a| query.accepts(a))
            .map(|a| a.position)
    }
}

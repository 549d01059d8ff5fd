//! Unit tests for pk-path.
//!
//! All tests use hand-placed lane anchors and a small pool so they need no
//! map data.

#[cfg(test)]
mod helpers {
    use pk_core::{PathPosition, SegmentId, WorldPos};

    use crate::{LaneAnchor, LaneIndex, PathRequest};

    pub fn walk_request() -> PathRequest {
        PathRequest::walking_only(
            PathPosition::new(SegmentId(1), 0, 0),
            PathPosition::new(SegmentId(2), 0, 255),
            20_000.0,
        )
    }

    /// Three sidewalks along the x axis at x = 0, 50, 200.
    pub fn sidewalk_index() -> LaneIndex {
        LaneIndex::new(vec![
            LaneAnchor::sidewalk(WorldPos::new(0.0, 0.0, 0.0),   PathPosition::new(SegmentId(10), 1, 128)),
            LaneAnchor::sidewalk(WorldPos::new(50.0, 0.0, 0.0),  PathPosition::new(SegmentId(11), 1, 128)),
            LaneAnchor::sidewalk(WorldPos::new(200.0, 0.0, 0.0), PathPosition::new(SegmentId(12), 1, 128)),
        ])
    }
}

// ── PathRequest ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod request {
    use pk_core::{LaneTypes, VehicleTypes};

    use super::helpers::walk_request;
    use crate::ExtPathType;

    #[test]
    fn walking_only_defaults() {
        let r = walk_request();
        assert_eq!(r.path_type, ExtPathType::WalkingOnly);
        assert_eq!(r.lane_types, LaneTypes::PEDESTRIAN | LaneTypes::PUBLIC_TRANSPORT);
        assert_eq!(r.vehicle_types, VehicleTypes::NONE);
        assert_eq!(r.max_length, 20_000.0);
        assert!(r.start_b.is_none() && r.end_b.is_none());
        assert!(!r.ignore_blocked && !r.ignore_flooded && !r.ignore_costs);
        assert!(!r.random_parking && !r.stable_path && !r.skip_queue);
    }

    #[test]
    fn path_type_display() {
        assert_eq!(ExtPathType::DrivingOnly.to_string(), "driving-only");
        assert_eq!(ExtPathType::default(), ExtPathType::None);
    }
}

// ── PathUnitPool ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod pool {
    use pk_core::PathId;

    use super::helpers::walk_request;
    use crate::{PathError, PathFlags, PathService, PathUnitPool};

    #[test]
    fn ids_start_at_one() {
        let mut pool = PathUnitPool::new(4);
        let a = pool.submit_path(walk_request()).unwrap();
        let b = pool.submit_path(walk_request()).unwrap();
        assert_eq!(a, PathId(1));
        assert_eq!(b, PathId(2));
        assert_eq!(pool.in_use(), 2);
        assert_eq!(pool.pending().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn exhaustion_reports_capacity() {
        let mut pool = PathUnitPool::new(1);
        pool.submit_path(walk_request()).unwrap();
        let err = pool.submit_path(walk_request()).unwrap_err();
        assert_eq!(err, PathError::PoolExhausted { capacity: 1 });
    }

    #[test]
    fn capacity_capped_to_addressable_ids() {
        let pool = PathUnitPool::new(usize::MAX);
        assert_eq!(pool.capacity(), PathId::INVALID.index() - 1);
        assert_eq!(PathUnitPool::new(8).capacity(), 8);
    }

    #[test]
    fn release_frees_slot_for_reuse() {
        let mut pool = PathUnitPool::new(1);
        let a = pool.submit_path(walk_request()).unwrap();
        pool.release_path(a);
        assert!(pool.is_empty());
        assert_eq!(pool.pending_count(), 0);
        let b = pool.submit_path(walk_request()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn release_unknown_is_noop() {
        let mut pool = PathUnitPool::new(2);
        pool.release_path(PathId(0));
        pool.release_path(PathId(9));
        pool.release_path(PathId::INVALID);
        assert!(pool.is_empty());
    }

    #[test]
    fn double_release_does_not_duplicate_free_slot() {
        let mut pool = PathUnitPool::new(2);
        let a = pool.submit_path(walk_request()).unwrap();
        pool.release_path(a);
        pool.release_path(a);
        let b = pool.submit_path(walk_request()).unwrap();
        let c = pool.submit_path(walk_request()).unwrap();
        assert_ne!(b, c);
    }

    #[test]
    fn complete_and_fail_set_flags() {
        let mut pool = PathUnitPool::new(4);
        let a = pool.submit_path(walk_request()).unwrap();
        let b = pool.submit_path(walk_request()).unwrap();
        assert_eq!(pool.query_flags(a), PathFlags::PENDING);

        pool.complete(a).unwrap();
        pool.fail(b).unwrap();
        assert_eq!(pool.query_flags(a), PathFlags::READY);
        assert_eq!(pool.query_flags(b), PathFlags::FAILED);
        assert_eq!(pool.pending_count(), 0);
    }

    #[test]
    fn resolving_twice_errors() {
        let mut pool = PathUnitPool::new(1);
        let a = pool.submit_path(walk_request()).unwrap();
        pool.complete(a).unwrap();
        assert_eq!(pool.fail(a), Err(PathError::AlreadyResolved(a)));
        assert_eq!(pool.complete(PathId(5)), Err(PathError::UnknownPath(PathId(5))));
    }

    #[test]
    fn released_path_reports_no_flags() {
        let mut pool = PathUnitPool::new(1);
        let a = pool.submit_path(walk_request()).unwrap();
        pool.complete(a).unwrap();
        pool.release_path(a);
        assert_eq!(pool.query_flags(a), PathFlags::PENDING);
    }

    #[test]
    fn skip_queue_goes_first() {
        let mut pool = PathUnitPool::new(4);
        let a = pool.submit_path(walk_request()).unwrap();
        let mut urgent = walk_request();
        urgent.skip_queue = true;
        let b = pool.submit_path(urgent).unwrap();
        assert_eq!(pool.pending().collect::<Vec<_>>(), vec![b, a]);
    }
}

// ── LaneIndex ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use pk_core::{LaneTypes, PathPosition, SegmentId, VehicleTypes, WorldPos};

    use super::helpers::sidewalk_index;
    use crate::{LaneAnchor, LaneIndex, LaneQuery, LocationResolver, Service};

    #[test]
    fn nearest_within_radius() {
        let idx = sidewalk_index();
        let hit = idx.find_nearest_lane_position(WorldPos::new(40.0, 0.0, 0.0), &LaneQuery::pedestrian(96.0));
        assert_eq!(hit.map(|p| p.segment), Some(SegmentId(11)));
    }

    #[test]
    fn nothing_within_radius() {
        let idx = sidewalk_index();
        let hit = idx.find_nearest_lane_position(WorldPos::new(500.0, 0.0, 0.0), &LaneQuery::pedestrian(96.0));
        assert!(hit.is_none());
    }

    #[test]
    fn empty_index_resolves_nothing() {
        let idx = LaneIndex::empty();
        assert!(idx.is_empty());
        assert!(idx.find_nearest_lane_position(WorldPos::ORIGIN, &LaneQuery::pedestrian(1e6)).is_none());
    }

    #[test]
    fn skips_non_matching_lane_types() {
        let mut car_lane = LaneAnchor::sidewalk(WorldPos::new(1.0, 0.0, 0.0), PathPosition::new(SegmentId(30), 0, 0));
        car_lane.lane_types = LaneTypes::VEHICLE;
        car_lane.vehicle_types = VehicleTypes::CAR;
        let mut idx = sidewalk_index();
        idx.insert(car_lane);
        assert_eq!(idx.len(), 4);

        let hit = idx.find_nearest_lane_position(WorldPos::new(1.0, 0.0, 0.0), &LaneQuery::pedestrian(96.0));
        assert_eq!(hit.map(|p| p.segment), Some(SegmentId(10)));
    }

    #[test]
    fn underground_and_connectivity_filters() {
        let mut tunnel = LaneAnchor::sidewalk(WorldPos::new(0.0, -10.0, 0.0), PathPosition::new(SegmentId(40), 0, 0));
        tunnel.underground = true;
        let mut island = LaneAnchor::sidewalk(WorldPos::new(5.0, 0.0, 0.0), PathPosition::new(SegmentId(41), 0, 0));
        island.connected = false;
        let idx = LaneIndex::new(vec![tunnel, island]);

        let probe = WorldPos::new(0.0, -10.0, 0.0);
        let surface = LaneQuery::pedestrian(50.0);
        assert_eq!(idx.find_nearest_lane_position(probe, &surface).map(|p| p.segment), Some(SegmentId(41)));

        let any_level = LaneQuery { allow_underground: true, ..surface };
        assert_eq!(idx.find_nearest_lane_position(probe, &any_level).map(|p| p.segment), Some(SegmentId(40)));

        let connected_only = LaneQuery { require_connect: true, ..surface };
        assert!(idx.find_nearest_lane_position(probe, &connected_only).is_none());
    }

    #[test]
    fn secondary_masks_match() {
        let mut stop = LaneAnchor::sidewalk(WorldPos::ORIGIN, PathPosition::new(SegmentId(50), 0, 0));
        stop.lane_types = LaneTypes::PUBLIC_TRANSPORT;
        stop.vehicle_types = VehicleTypes::TRAM;
        let idx = LaneIndex::new(vec![stop]);

        let q = LaneQuery::pedestrian(10.0);
        assert!(idx.find_nearest_lane_position(WorldPos::ORIGIN, &q).is_none());

        let q = LaneQuery {
            secondary_lane_types:    LaneTypes::PUBLIC_TRANSPORT,
            secondary_vehicle_types: VehicleTypes::TRAM,
            ..q
        };
        assert!(idx.find_nearest_lane_position(WorldPos::ORIGIN, &q).is_some());
    }

    #[test]
    fn service_must_match() {
        let mut a = LaneAnchor::sidewalk(WorldPos::ORIGIN, PathPosition::new(SegmentId(60), 0, 0));
        a.service = Service::Beautification;
        let q = LaneQuery::pedestrian(10.0);
        assert!(!q.accepts(&a));
    }
}

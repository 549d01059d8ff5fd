//! Unit tests for pk-core primitives.

#[cfg(test)]
mod ids {
    use crate::{InstanceId, PathId, SegmentId};

    #[test]
    fn index_roundtrip() {
        let id = InstanceId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(InstanceId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn narrow_id_rejects_oversized_index() {
        assert!(InstanceId::try_from(70_000usize).is_err());
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(InstanceId::INVALID.0, u16::MAX);
        assert_eq!(SegmentId::INVALID.0, u16::MAX);
        assert_eq!(PathId::INVALID.0, u32::MAX);
        assert_eq!(PathId::default(), PathId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(PathId(7).to_string(), "PathId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::WorldPos;

    #[test]
    fn zero_distance() {
        let p = WorldPos::new(12.0, 3.0, -40.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn axis_distance() {
        let a = WorldPos::ORIGIN;
        let b = WorldPos::new(10.0, 0.0, 0.0);
        assert!((a.distance(b) - 10.0).abs() < 1e-6);
        assert!((a.sqr_distance(b) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn pythagorean() {
        let a = WorldPos::new(0.0, 0.0, 0.0);
        let b = WorldPos::new(3.0, 0.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn array_conversion() {
        let p = WorldPos::from([1.0, 2.0, 3.0]);
        assert_eq!(p.to_array(), [1.0, 2.0, 3.0]);
    }
}

#[cfg(test)]
mod lane {
    use crate::{LaneTypes, PathPosition, SegmentId, VehicleTypes};

    #[test]
    fn mask_union_and_intersection() {
        let walk = LaneTypes::PEDESTRIAN | LaneTypes::PUBLIC_TRANSPORT;
        assert!(walk.intersects(LaneTypes::PEDESTRIAN));
        assert!(!walk.intersects(LaneTypes::VEHICLE));
        assert!(walk.intersects(LaneTypes::PUBLIC_TRANSPORT));
        assert!(!(LaneTypes::VEHICLE | LaneTypes::PARKING).intersects(walk));
    }

    #[test]
    fn empty_mask() {
        assert!(VehicleTypes::NONE.is_empty());
        assert!(!VehicleTypes::NONE.intersects(VehicleTypes::CAR));
        assert_eq!(VehicleTypes::default(), VehicleTypes::NONE);
    }

    #[test]
    fn or_assign() {
        let mut m = VehicleTypes::CAR;
        m |= VehicleTypes::TRAM;
        assert_eq!(m, VehicleTypes(VehicleTypes::CAR.0 | VehicleTypes::TRAM.0));
    }

    #[test]
    fn path_position_display() {
        let p = PathPosition::new(SegmentId(12), 2, 128);
        assert_eq!(p.to_string(), "[seg=12 lane=2 off=128]");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn next_tick() {
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert_eq!(Tick(10).next(), Tick(11));
        assert_eq!(Tick(4).to_string(), "T4");
    }

    #[test]
    fn since_saturates() {
        assert_eq!(Tick(3).since(Tick(10)), 0);
        assert_eq!(Tick(10).since(Tick(3)), 7);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.gen_bool(0.5), r2.gen_bool(0.5));
        }
    }

    #[test]
    fn different_seeds_differ() {
        let draw = |seed| {
            let mut rng = SimRng::new(seed);
            (0..64).map(|_| rng.gen_bool(0.5)).collect::<Vec<_>>()
        };
        assert_ne!(draw(1), draw(2));
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.5)); // clamped
    }
}

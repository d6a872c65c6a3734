//! Property tests for the travel-time model and the wrap metric.
//!
//! These pin the ordering guarantees the matching engine relies on:
//! travel time is monotonic in distance and non-increasing in speed and
//! bonus level, and the toroidal metric is symmetric and never longer
//! than the flat one.

use muster_map::{EdgeBehavior, MapCoord, TravelModel, WorldGrid};
use proptest::prelude::*;

proptest! {
    #[test]
    fn travel_time_monotonic_in_distance(
        d1 in 0.0f64..500.0,
        d2 in 0.0f64..500.0,
        speed in 0.5f64..30.0,
        level in 0u32..25,
    ) {
        let m = TravelModel::standard();
        let (lo, hi) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        prop_assert!(m.travel_time(lo, speed, level) <= m.travel_time(hi, speed, level));
    }

    #[test]
    fn travel_time_non_increasing_in_bonus_level(
        distance in 0.0f64..500.0,
        speed in 0.5f64..30.0,
        level in 0u32..24,
    ) {
        let m = TravelModel::standard();
        prop_assert!(
            m.travel_time(distance, speed, level + 1) <= m.travel_time(distance, speed, level)
        );
    }

    #[test]
    fn travel_time_non_increasing_in_speed(
        distance in 0.0f64..500.0,
        s1 in 0.5f64..30.0,
        s2 in 0.5f64..30.0,
        level in 0u32..25,
    ) {
        let m = TravelModel::standard();
        let (slow, fast) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
        prop_assert!(
            m.travel_time(distance, fast, level) <= m.travel_time(distance, slow, level)
        );
    }

    #[test]
    fn wrap_distance_is_symmetric(
        size in 1u32..500,
        x1 in -1000i32..1000,
        y1 in -1000i32..1000,
        x2 in -1000i32..1000,
        y2 in -1000i32..1000,
    ) {
        let g = WorldGrid::new(size, EdgeBehavior::Wrap).unwrap();
        let a = MapCoord::new(x1, y1);
        let b = MapCoord::new(x2, y2);
        prop_assert_eq!(g.distance(a, b), g.distance(b, a));
    }

    #[test]
    fn wrap_axis_never_exceeds_half_size(
        size in 1u32..500,
        x1 in -1000i32..1000,
        x2 in -1000i32..1000,
    ) {
        let g = WorldGrid::new(size, EdgeBehavior::Wrap).unwrap();
        let d = g.distance(MapCoord::new(x1, 0), MapCoord::new(x2, 0));
        prop_assert!(d <= f64::from(size) / 2.0);
    }

    #[test]
    fn wrap_never_longer_than_bounded_in_range(
        size in 1u32..400,
        x1 in 0i32..10_000,
        y1 in 0i32..10_000,
        x2 in 0i32..10_000,
        y2 in 0i32..10_000,
    ) {
        let n = size as i32;
        let a = MapCoord::new(x1 % n, y1 % n);
        let b = MapCoord::new(x2 % n, y2 % n);
        let wrap = WorldGrid::new(size, EdgeBehavior::Wrap).unwrap();
        let flat = WorldGrid::new(size, EdgeBehavior::Bounded).unwrap();
        prop_assert!(wrap.distance(a, b) <= flat.distance(a, b) + 1e-9);
    }
}

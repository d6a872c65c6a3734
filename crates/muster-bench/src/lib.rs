//! Benchmark fixtures for the Muster planner.
//!
//! Provides deterministic, seed-driven snapshot populations so benchmark
//! runs (and the tests that sanity-check them) are comparable across
//! machines and revisions.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use muster_core::{
    CarrierRecord, PlanningSnapshot, SiegeAssetRecord, SnapshotId, StrikeForceRecord, TargetRecord,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Category labels cycled across generated targets, covering every tier.
const TARGET_CATEGORIES: [&str; 7] = [
    "Unique Trainer",
    "Unique",
    "Great Warehouse Plans",
    "Small Diet",
    "Small Boots",
    "Great Eyes",
    "Small",
];

/// Rating labels cycled across generated strike forces.
const FORCE_RATINGS: [&str; 3] = ["small", "great", "unique"];

fn coord(rng: &mut ChaCha8Rng, size: u32) -> i32 {
    (rng.gen::<f64>() * f64::from(size)) as i32
}

fn speed(rng: &mut ChaCha8Rng) -> f64 {
    3.0 + rng.gen::<f64>() * 12.0
}

fn level(rng: &mut ChaCha8Rng, max: u32) -> u32 {
    (rng.gen::<f64>() * f64::from(max)) as u32
}

/// Build a deterministic snapshot with `targets` targets and `per_pool`
/// records in each resource pool, placed on a `size`-tile map.
///
/// The same `(targets, per_pool, size, seed)` always yields the same
/// snapshot.
pub fn fixture_snapshot(targets: usize, per_pool: usize, size: u32, seed: u64) -> PlanningSnapshot {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let targets = (0..targets)
        .map(|i| TargetRecord {
            name: format!("target-{i}"),
            category: TARGET_CATEGORIES[i % TARGET_CATEGORIES.len()].to_string(),
            x: Some(coord(&mut rng, size)),
            y: Some(coord(&mut rng, size)),
        })
        .collect();

    let strike_forces = (0..per_pool)
        .map(|i| StrikeForceRecord {
            name: format!("force-{i}"),
            x: coord(&mut rng, size),
            y: coord(&mut rng, size),
            speed: speed(&mut rng),
            bonus_level: level(&mut rng, 20),
            category: FORCE_RATINGS[i % FORCE_RATINGS.len()].to_string(),
        })
        .collect();

    let siege_assets = (0..per_pool)
        .map(|i| SiegeAssetRecord {
            name: format!("siege-{i}"),
            x: coord(&mut rng, size),
            y: coord(&mut rng, size),
            speed: speed(&mut rng),
            bonus_level: level(&mut rng, 20),
            uses_remaining: SiegeAssetRecord::DEFAULT_USES,
        })
        .collect();

    let carriers = (0..per_pool)
        .map(|i| CarrierRecord {
            name: format!("carrier-{i}"),
            x: coord(&mut rng, size),
            y: coord(&mut rng, size),
            speed: speed(&mut rng),
            bonus_level: level(&mut rng, 20),
            eligibility_level: level(&mut rng, 30),
        })
        .collect();

    PlanningSnapshot {
        id: SnapshotId(seed),
        targets,
        strike_forces,
        siege_assets,
        carriers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muster_engine::Planner;

    #[test]
    fn fixture_is_deterministic() {
        let a = fixture_snapshot(50, 30, 401, 42);
        let b = fixture_snapshot(50, 30, 401, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = fixture_snapshot(50, 30, 401, 42);
        let b = fixture_snapshot(50, 30, 401, 43);
        assert_ne!(a, b);
    }

    #[test]
    fn fixture_plans_end_to_end() {
        let snapshot = fixture_snapshot(100, 60, 401, 7);
        let report = Planner::default().plan(&snapshot);
        assert_eq!(report.target_count(), 100);
    }
}

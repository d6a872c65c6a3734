//! Property tests for the matching engine.
//!
//! Random snapshots (including invalid categories, missing coordinates,
//! unreachable speeds, and zero-capacity assets) must always produce a
//! report that partitions the input, respects every capacity limit, and
//! is bit-for-bit reproducible.

use std::collections::HashMap;

use muster_core::{
    CarrierRecord, PlanningSnapshot, SiegeAssetRecord, SnapshotId, StrikeForceRecord,
    TargetRecord,
};
use muster_engine::Planner;
use proptest::prelude::*;

// ── Snapshot generator ───────────────────────────────────────────
//
// Names are unique by construction (index-derived), so counting uses by
// name below is exact.

fn arb_targets() -> impl Strategy<Value = Vec<TargetRecord>> {
    let category = prop::sample::select(vec![
        "Unique Trainer",
        "Unique",
        "Great Warehouse Plans",
        "Great Boots",
        "Small Diet",
        "Small Eyes",
        "Small",
        "mystery box",
        "",
    ]);
    prop::collection::vec(
        (
            category,
            prop::option::of(-50i32..50),
            prop::option::of(-50i32..50),
        ),
        0..16,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (category, x, y))| TargetRecord {
                name: format!("target-{i}"),
                category: category.to_string(),
                x,
                y,
            })
            .collect()
    })
}

fn arb_forces() -> impl Strategy<Value = Vec<StrikeForceRecord>> {
    let rating = prop::sample::select(vec!["small", "great", "unique", "unrated"]);
    prop::collection::vec(
        (rating, -50i32..50, -50i32..50, 0.0f64..15.0, 0u32..5),
        0..10,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (category, x, y, speed, bonus_level))| StrikeForceRecord {
                name: format!("force-{i}"),
                x,
                y,
                speed,
                bonus_level,
                category: category.to_string(),
            })
            .collect()
    })
}

fn arb_sieges() -> impl Strategy<Value = Vec<SiegeAssetRecord>> {
    prop::collection::vec((-50i32..50, -50i32..50, 0.0f64..10.0, 0u32..3), 0..8).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (x, y, speed, uses_remaining))| SiegeAssetRecord {
                    name: format!("siege-{i}"),
                    x,
                    y,
                    speed,
                    bonus_level: 0,
                    uses_remaining,
                })
                .collect()
        },
    )
}

fn arb_carriers() -> impl Strategy<Value = Vec<CarrierRecord>> {
    prop::collection::vec((-50i32..50, -50i32..50, 0.0f64..10.0, 0u32..40), 0..10).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (x, y, speed, eligibility_level))| CarrierRecord {
                    name: format!("carrier-{i}"),
                    x,
                    y,
                    speed,
                    bonus_level: 0,
                    eligibility_level,
                })
                .collect()
        },
    )
}

fn arb_snapshot() -> impl Strategy<Value = PlanningSnapshot> {
    (arb_targets(), arb_forces(), arb_sieges(), arb_carriers()).prop_map(
        |(targets, strike_forces, siege_assets, carriers)| PlanningSnapshot {
            id: SnapshotId(1),
            targets,
            strike_forces,
            siege_assets,
            carriers,
        },
    )
}

fn uses_by_name<'a>(names: impl Iterator<Item = &'a str>) -> HashMap<&'a str, u32> {
    let mut counts = HashMap::new();
    for name in names {
        *counts.entry(name).or_insert(0) += 1;
    }
    counts
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    /// Every input target appears exactly once across the two output sets.
    #[test]
    fn partition_completeness(snapshot in arb_snapshot()) {
        let report = Planner::default().plan(&snapshot);
        prop_assert_eq!(
            report.planned.len() + report.unplanned.len(),
            snapshot.targets.len()
        );

        let mut seen: Vec<&str> = report
            .planned
            .iter()
            .map(|p| p.target.as_str())
            .chain(report.unplanned.iter().map(|u| u.target.as_str()))
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<&str> =
            snapshot.targets.iter().map(|t| t.name.as_str()).collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    /// No strike force or carrier serves twice; no siege asset serves more
    /// than its remaining uses.
    #[test]
    fn capacity_respected(snapshot in arb_snapshot()) {
        let report = Planner::default().plan(&snapshot);

        let force_uses = uses_by_name(report.planned.iter().map(|p| p.strike_force.as_str()));
        prop_assert!(force_uses.values().all(|&n| n <= 1));

        let carrier_uses = uses_by_name(report.planned.iter().map(|p| p.carrier.as_str()));
        prop_assert!(carrier_uses.values().all(|&n| n <= 1));

        let siege_uses = uses_by_name(report.planned.iter().map(|p| p.siege_asset.as_str()));
        for asset in &snapshot.siege_assets {
            let used = siege_uses.get(asset.name.as_str()).copied().unwrap_or(0);
            prop_assert!(
                used <= asset.uses_remaining,
                "siege {} used {} of {}",
                asset.name,
                used,
                asset.uses_remaining
            );
        }
    }

    /// Two runs over the same snapshot produce identical reports.
    #[test]
    fn determinism(snapshot in arb_snapshot()) {
        let planner = Planner::default();
        let first = planner.plan(&snapshot);
        let second = planner.plan(&snapshot);
        prop_assert_eq!(first, second);
    }

    /// Every plan entry carries finite, non-negative legs and an arrival
    /// equal to the slowest leg.
    #[test]
    fn plan_entries_are_well_formed(snapshot in arb_snapshot()) {
        let report = Planner::default().plan(&snapshot);
        for entry in &report.planned {
            prop_assert!(entry.strike_force_eta.is_finite() && entry.strike_force_eta >= 0.0);
            prop_assert!(entry.siege_asset_eta.is_finite() && entry.siege_asset_eta >= 0.0);
            prop_assert!(entry.carrier_eta.is_finite() && entry.carrier_eta >= 0.0);
            let max = entry
                .strike_force_eta
                .max(entry.siege_asset_eta)
                .max(entry.carrier_eta);
            prop_assert_eq!(entry.arrival, max);
        }
        prop_assert_eq!(report.metrics.planned, report.planned.len());
        prop_assert_eq!(report.metrics.unplanned_total(), report.unplanned.len());
    }
}

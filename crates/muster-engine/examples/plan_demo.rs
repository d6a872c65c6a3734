//! Muster demo — plan a small raid from scratch.
//!
//! Demonstrates:
//!   1. Building a `PlanningSnapshot` from plain records
//!   2. Configuring the planner (toroidal map, custom travel constants)
//!   3. Reading the plan, the unplanned report, and the run metrics
//!
//! Run with:
//!   cargo run --example plan_demo

use muster_core::{
    CarrierRecord, PlanningSnapshot, SiegeAssetRecord, SnapshotId, StrikeForceRecord, TargetRecord,
};
use muster_engine::{Planner, PlannerConfig};
use muster_map::{EdgeBehavior, TravelModel, WorldGrid};

fn main() {
    let snapshot = PlanningSnapshot {
        id: SnapshotId(1),
        targets: vec![
            TargetRecord {
                name: "Trainer of the North".into(),
                category: "Unique Trainer".into(),
                x: Some(12),
                y: Some(44),
            },
            TargetRecord {
                name: "GW plans, south cluster".into(),
                category: "Great Warehouse Plans".into(),
                x: Some(370),
                y: Some(9),
            },
            TargetRecord {
                name: "Scouted boots".into(),
                category: "Small Boots".into(),
                x: None,
                y: None,
            },
        ],
        strike_forces: vec![
            StrikeForceRecord {
                name: "Hammer Alpha".into(),
                x: 0,
                y: 40,
                speed: 12.0,
                bonus_level: 2,
                category: "unique".into(),
            },
            StrikeForceRecord {
                name: "Hammer Beta".into(),
                x: 390,
                y: 390,
                speed: 9.0,
                bonus_level: 1,
                category: "great".into(),
            },
        ],
        siege_assets: vec![SiegeAssetRecord {
            name: "Ram Column".into(),
            x: 5,
            y: 50,
            speed: 4.0,
            bonus_level: 3,
            uses_remaining: SiegeAssetRecord::DEFAULT_USES,
        }],
        carriers: vec![
            CarrierRecord {
                name: "Vault Runner".into(),
                x: 20,
                y: 30,
                speed: 6.0,
                bonus_level: 1,
                eligibility_level: 20,
            },
            CarrierRecord {
                name: "Side Cart".into(),
                x: 350,
                y: 20,
                speed: 6.0,
                bonus_level: 0,
                eligibility_level: 20,
            },
        ],
    };

    // A toroidal 401-tile world: Hammer Beta at (390, 390) is close to
    // the south cluster across the seam.
    let config = PlannerConfig {
        grid: WorldGrid::new(401, EdgeBehavior::Wrap).expect("valid grid"),
        travel: TravelModel::standard(),
        ..PlannerConfig::default()
    };

    let report = Planner::new(config).plan(&snapshot);

    println!("planned runs (snapshot {}):", report.snapshot);
    for entry in &report.planned {
        println!(
            "  {} [{}] <- force {} ({:.2}h), siege {} ({:.2}h), carrier {} ({:.2}h), arrival {:.2}h",
            entry.target,
            entry.category,
            entry.strike_force,
            entry.strike_force_eta,
            entry.siege_asset,
            entry.siege_asset_eta,
            entry.carrier,
            entry.carrier_eta,
            entry.arrival,
        );
    }

    println!("unplanned:");
    for entry in &report.unplanned {
        println!("  {} — {}", entry.target, entry.reason);
    }

    let m = &report.metrics;
    println!(
        "metrics: {}/{} planned, siege uses {}, carriers used {}",
        m.planned, m.targets_total, m.siege_asset_uses, m.carrier_uses
    );
}

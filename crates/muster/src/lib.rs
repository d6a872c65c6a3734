//! Muster: a capacity-constrained greedy assignment planner for artifact raids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Muster sub-crates. For most users, adding `muster` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use muster::prelude::*;
//!
//! let snapshot = PlanningSnapshot {
//!     id: SnapshotId(1),
//!     targets: vec![TargetRecord {
//!         name: "Trainer of the North".into(),
//!         category: "Unique Trainer".into(),
//!         x: Some(10),
//!         y: Some(0),
//!     }],
//!     strike_forces: vec![StrikeForceRecord {
//!         name: "Hammer".into(),
//!         x: 0,
//!         y: 0,
//!         speed: 10.0,
//!         bonus_level: 1,
//!         category: "unique".into(),
//!     }],
//!     siege_assets: vec![SiegeAssetRecord {
//!         name: "Rams East".into(),
//!         x: 0,
//!         y: 0,
//!         speed: 3.0,
//!         bonus_level: 0,
//!         uses_remaining: SiegeAssetRecord::DEFAULT_USES,
//!     }],
//!     carriers: vec![CarrierRecord {
//!         name: "Vault Runner".into(),
//!         x: 5,
//!         y: 5,
//!         speed: 5.0,
//!         bonus_level: 0,
//!         eligibility_level: 20,
//!     }],
//! };
//!
//! let planner = Planner::new(PlannerConfig::default());
//! let report = planner.plan(&snapshot);
//! assert_eq!(report.planned.len(), 1);
//! assert!(report.unplanned.is_empty());
//! assert_eq!(report.planned[0].strike_force, "Hammer");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `muster-core` | Record contracts, categories, classifier, compatibility rules |
//! | [`map`] | `muster-map` | World grid, coordinates, travel-time model |
//! | [`pool`] | `muster-pool` | Capacity-tracked resource pools and handles |
//! | [`engine`] | `muster-engine` | The planner, its configuration, report, and metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Record contracts, categories, and classification rules (`muster-core`).
///
/// Contains the input/output record types, the canonical category model,
/// the keyword [`types::Classifier`], and the compatibility predicates.
pub use muster_core as types;

/// World-map geometry and travel time (`muster-map`).
///
/// Provides [`map::WorldGrid`] (flat or toroidal), [`map::MapCoord`], and
/// the two-leg [`map::TravelModel`].
pub use muster_map as map;

/// Capacity-tracked resource pools (`muster-pool`).
///
/// [`pool::ResourcePool`] with index-stable [`pool::PoolHandle`]s backs
/// the engine's reservation bookkeeping.
pub use muster_pool as pool;

/// The matching engine (`muster-engine`).
///
/// [`engine::Planner`] consumes a snapshot and produces an
/// [`engine::PlanReport`].
pub use muster_engine as engine;

/// Common imports for typical Muster usage.
///
/// ```rust
/// use muster::prelude::*;
/// ```
pub mod prelude {
    // Contracts
    pub use muster_core::{
        CarrierRecord, PlanEntry, PlanningSnapshot, SiegeAssetRecord, SnapshotId,
        StrikeForceRecord, TargetRecord, UnplannedEntry, UnplannedReason,
    };

    // Classification
    pub use muster_core::{ArtifactKind, Classifier, PriorityKey, SizeClass, TargetCategory};

    // Map
    pub use muster_map::{EdgeBehavior, MapCoord, TravelModel, WorldGrid};

    // Engine
    pub use muster_engine::{PlanReport, Planner, PlannerConfig, RunMetrics};
}

//! Core types for the Muster assignment planner.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data contracts exchanged with ingestion and presentation collaborators
//! (input records, plan and unplanned entries) and the pure classification
//! logic: the canonical category model, the keyword-driven priority
//! classifier, and the compatibility rules.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod category;
pub mod classify;
pub mod compat;
pub mod id;
pub mod priority;
pub mod record;
pub mod report;

pub use category::{ArtifactKind, SizeClass, TargetCategory};
pub use classify::Classifier;
pub use compat::{carrier_compatible, strike_force_compatible, CARRIER_ELIGIBILITY_THRESHOLD};
pub use id::SnapshotId;
pub use priority::PriorityKey;
pub use record::{
    CarrierRecord, PlanningSnapshot, SiegeAssetRecord, StrikeForceRecord, TargetRecord,
};
pub use report::{PlanEntry, UnplannedEntry, UnplannedReason};

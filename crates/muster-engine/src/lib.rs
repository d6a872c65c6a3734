//! The Muster matching engine.
//!
//! Consumes a [`muster_core::PlanningSnapshot`] — targets plus the three
//! resource pools — and produces a [`PlanReport`]: one plan entry per
//! matched target, one unplanned entry per target that could not be
//! matched, and the run's metrics. Single-threaded, single-pass, and
//! deterministic; see [`Planner::plan`] for the algorithm and its accepted
//! limitations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
mod normalize;
pub mod planner;
pub mod report;
mod search;

pub use config::PlannerConfig;
pub use metrics::RunMetrics;
pub use planner::Planner;
pub use report::PlanReport;

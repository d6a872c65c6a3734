//! Planning run output.

use muster_core::{PlanEntry, SnapshotId, UnplannedEntry};

use crate::metrics::RunMetrics;

/// The complete result of one planning run.
///
/// Every input target appears exactly once: either in `planned` or in
/// `unplanned`. `planned` is in priority order; `unplanned` lists
/// validation failures first (in input order), then starvation entries in
/// the order the targets were attempted.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanReport {
    /// The snapshot version this report was computed from.
    pub snapshot: SnapshotId,
    /// Successfully matched targets.
    pub planned: Vec<PlanEntry>,
    /// Targets that could not be matched, with reasons.
    pub unplanned: Vec<UnplannedEntry>,
    /// Run counters.
    pub metrics: RunMetrics,
}

impl PlanReport {
    /// Total targets covered by this report.
    pub fn target_count(&self) -> usize {
        self.planned.len() + self.unplanned.len()
    }
}

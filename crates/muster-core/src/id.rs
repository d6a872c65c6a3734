//! Snapshot identity.

use std::fmt;

/// Identifies the input snapshot a planning run was computed from.
///
/// The caller assigns these (typically incremented on every import or
/// interactive edit) and the engine echoes the value into its report, so a
/// rendered plan can always be traced to the exact input version it was
/// derived from. The engine itself never retains one across runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapshotId(pub u64);

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SnapshotId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

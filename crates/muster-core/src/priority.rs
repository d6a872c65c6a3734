//! Priority ordering of targets.

use std::fmt;

use crate::category::{ArtifactKind, SizeClass, TargetCategory};

/// Two-part priority key; lower tuples sort first.
///
/// The derived `Ord` compares `tier` before `subtier`, which is exactly
/// the required ordering, so the key can be handed directly to a stable
/// sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityKey {
    /// Major tier: 0 unique, 1 named special kinds, 2 plans, 3 catch-all.
    pub tier: u8,
    /// Order within tier 1: trainer, diet, boots, eyes.
    pub subtier: u8,
}

impl PriorityKey {
    /// Compute the key for a normalized category.
    ///
    /// Unique artifacts outrank every kind. Within tier 1 the order is
    /// trainer, diet, boots, eyes; plans form their own tier; everything
    /// else shares the catch-all tier. Total and deterministic — there is
    /// no error path.
    pub fn of(category: &TargetCategory) -> Self {
        if category.class == SizeClass::Unique {
            return Self { tier: 0, subtier: 0 };
        }
        match category.kind {
            ArtifactKind::Trainer => Self { tier: 1, subtier: 0 },
            ArtifactKind::Diet => Self { tier: 1, subtier: 1 },
            ArtifactKind::Boots => Self { tier: 1, subtier: 2 },
            ArtifactKind::Eyes => Self { tier: 1, subtier: 3 },
            ArtifactKind::Plans => Self { tier: 2, subtier: 0 },
            ArtifactKind::Other => Self { tier: 3, subtier: 0 },
        }
    }
}

impl fmt::Display for PriorityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.tier, self.subtier)
    }
}

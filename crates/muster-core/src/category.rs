//! The canonical target category model.
//!
//! The import layer hands the engine free-text category labels. Those are
//! normalized once, at the start of a run, into a closed enumeration: a
//! [`SizeClass`] that drives every compatibility rule and an
//! [`ArtifactKind`] that drives the priority sub-ordering.

use std::fmt;

/// Size class of an artifact, or the rating of a strike force.
///
/// The compatibility lattice over this enum is asymmetric: a resource rated
/// for a greater class can always stand in for a lesser one, never the
/// reverse (see [`crate::compat`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeClass {
    /// Small artifacts, servable by any rated resource.
    Small,
    /// Great (large) artifacts.
    Great,
    /// Unique artifacts, servable only by unique-capable resources.
    Unique,
}

impl SizeClass {
    /// Recognize a size class in a free-text label.
    ///
    /// Case-insensitive substring match, tolerant of the language-variant
    /// spellings seen in imported data ("gross"/"groß" for great, "klein"
    /// for small). Unique is checked first so "Unique Great Warehouse"
    /// style labels resolve to the stronger class. Returns `None` when no
    /// class keyword is present; callers must treat that as fail-closed.
    pub fn sniff(label: &str) -> Option<Self> {
        let label = label.to_lowercase();
        if label.contains("unique") || label.contains("einzigartig") {
            Some(Self::Unique)
        } else if label.contains("great")
            || label.contains("large")
            || label.contains("gross")
            || label.contains("groß")
        {
            Some(Self::Great)
        } else if label.contains("small") || label.contains("klein") {
            Some(Self::Small)
        } else {
            None
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => write!(f, "small"),
            Self::Great => write!(f, "great"),
            Self::Unique => write!(f, "unique"),
        }
    }
}

/// Effect kind of an artifact, the secondary priority axis.
///
/// Kinds that have no bearing on priority collapse into [`Other`](Self::Other).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArtifactKind {
    /// Hero trainer.
    Trainer,
    /// Troop diet / rations.
    Diet,
    /// Fast-troop boots.
    Boots,
    /// Scouting eyes.
    Eyes,
    /// Warehouse / granary building plans.
    Plans,
    /// Anything unrecognized; lowest priority, still plannable.
    Other,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trainer => write!(f, "trainer"),
            Self::Diet => write!(f, "diet"),
            Self::Boots => write!(f, "boots"),
            Self::Eyes => write!(f, "eyes"),
            Self::Plans => write!(f, "plans"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A fully normalized target category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetCategory {
    /// Compatibility axis.
    pub class: SizeClass,
    /// Priority axis.
    pub kind: ArtifactKind,
}

impl fmt::Display for TargetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ArtifactKind::Other => write!(f, "{}", self.class),
            kind => write!(f, "{} {kind}", self.class),
        }
    }
}

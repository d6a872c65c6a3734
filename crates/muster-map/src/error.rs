//! Error types for map and model construction.

use std::error::Error;
use std::fmt;

/// Errors arising from grid or travel-model construction.
#[derive(Clone, Debug, PartialEq)]
pub enum MapError {
    /// Attempted to construct a grid with zero tiles per side.
    EmptyGrid,
    /// Grid side length exceeds the coordinate range.
    SizeTooLarge {
        /// The requested side length.
        size: u32,
        /// The largest representable side length.
        max: u32,
    },
    /// A travel-model constant is out of range.
    InvalidModel {
        /// Which constant, and why.
        reason: String,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one tile per side"),
            Self::SizeTooLarge { size, max } => {
                write!(f, "grid size {size} exceeds maximum {max}")
            }
            Self::InvalidModel { reason } => write!(f, "invalid travel model: {reason}"),
        }
    }
}

impl Error for MapError {}

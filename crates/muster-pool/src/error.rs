//! Pool-specific error types.

use std::error::Error;
use std::fmt;

use crate::pool::PoolHandle;

/// Errors that can occur during pool operations.
///
/// Both variants indicate a caller bug rather than bad input: the matching
/// engine confirms availability before reserving and only uses handles
/// minted by the pool it queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// Attempted to reserve a record whose capacity is already zero.
    CapacityExhausted {
        /// The exhausted record.
        handle: PoolHandle,
    },
    /// A handle that does not belong to this pool.
    UnknownHandle {
        /// The foreign handle.
        handle: PoolHandle,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExhausted { handle } => {
                write!(f, "record {handle} has no capacity left")
            }
            Self::UnknownHandle { handle } => {
                write!(f, "handle {handle} does not belong to this pool")
            }
        }
    }
}

impl Error for PoolError {}

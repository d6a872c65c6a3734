//! Capacity-tracked resource pools for Muster.
//!
//! A [`ResourcePool`] holds records in insertion order and tracks a
//! remaining-use counter per record behind an index-stable [`PoolHandle`].
//! Exhausted records stay in place (handles never dangle) but drop out of
//! [`ResourcePool::available`], and capacity is never restored within a
//! run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pool;

pub use error::PoolError;
pub use pool::{PoolHandle, ResourcePool};

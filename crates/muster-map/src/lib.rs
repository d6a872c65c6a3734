//! World-map geometry and travel-time estimation for Muster.
//!
//! This crate is a leaf: it knows nothing about targets, pools, or plans.
//! It provides the two pure models every assignment decision rests on:
//!
//! - [`WorldGrid`]: a bounded square map with an optional toroidal wrap
//!   ([`EdgeBehavior::Wrap`]), and the Euclidean distance metric over it.
//! - [`TravelModel`]: the two-leg near/far travel-time formula, with
//!   `f64::INFINITY` as the unreachable sentinel for non-positive speeds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod grid;
pub mod travel;

pub use coord::MapCoord;
pub use error::MapError;
pub use grid::{EdgeBehavior, WorldGrid};
pub use travel::TravelModel;

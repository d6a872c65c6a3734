//! Planner configuration.

use muster_core::{Classifier, CARRIER_ELIGIBILITY_THRESHOLD};
use muster_map::{EdgeBehavior, TravelModel, WorldGrid};

/// Complete configuration for a planning run.
///
/// Geometry and model invariants are enforced by the respective
/// constructors ([`WorldGrid::new`], [`TravelModel::new`]), so every
/// representable config is valid and there is no separate validation pass.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// World map the coordinates live on.
    pub grid: WorldGrid,
    /// Travel-time model used for every ETA.
    pub travel: TravelModel,
    /// Keyword classifier for target categories.
    pub classifier: Classifier,
    /// Treasury level at and above which a carrier may serve any class.
    pub carrier_threshold: u32,
}

impl PlannerConfig {
    /// The classic world side length, in tiles.
    pub const DEFAULT_GRID_SIZE: u32 = 401;
}

impl Default for PlannerConfig {
    /// Canonical setup: 401-tile flat map, standard travel model and
    /// classifier, carrier threshold 20.
    fn default() -> Self {
        Self {
            grid: WorldGrid::new(Self::DEFAULT_GRID_SIZE, EdgeBehavior::Bounded)
                .expect("default grid size is valid"),
            travel: TravelModel::standard(),
            classifier: Classifier::standard(),
            carrier_threshold: CARRIER_ELIGIBILITY_THRESHOLD,
        }
    }
}

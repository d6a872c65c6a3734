//! Output contracts: plan entries and unplanned targets.

use std::fmt;

use crate::category::TargetCategory;

/// A successfully matched target with its three legs.
///
/// Created exactly once per matched target and immutable thereafter. ETAs
/// are hours; rounding for display is the presentation layer's business.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanEntry {
    /// Target name.
    pub target: String,
    /// Normalized category the match was computed against.
    pub category: TargetCategory,
    /// Chosen strike force.
    pub strike_force: String,
    /// Strike force ETA in hours.
    pub strike_force_eta: f64,
    /// Chosen siege asset.
    pub siege_asset: String,
    /// Siege asset ETA in hours.
    pub siege_asset_eta: f64,
    /// Chosen carrier.
    pub carrier: String,
    /// Carrier ETA in hours.
    pub carrier_eta: f64,
    /// Overall arrival: the max of the three leg ETAs.
    pub arrival: f64,
}

/// Why a target could not be planned.
///
/// Mutually exclusive with a [`PlanEntry`] for the same target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnplannedReason {
    /// No size class could be recognized in the category label or name.
    InvalidCategory,
    /// The target has no coordinate yet.
    MissingCoordinate,
    /// Every compatible strike force is exhausted, or none exists.
    NoEligibleStrikeForce,
    /// Every compatible siege asset is exhausted, or none exists.
    NoEligibleSiegeAsset,
    /// Every compatible carrier is exhausted, or none exists.
    NoEligibleCarrier,
}

impl fmt::Display for UnplannedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCategory => write!(f, "invalid category"),
            Self::MissingCoordinate => write!(f, "missing coordinate"),
            Self::NoEligibleStrikeForce => write!(f, "no eligible strike force"),
            Self::NoEligibleSiegeAsset => write!(f, "no eligible siege asset"),
            Self::NoEligibleCarrier => write!(f, "no eligible carrier"),
        }
    }
}

/// A target that could not be planned this run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnplannedEntry {
    /// Target name.
    pub target: String,
    /// Why it was left out.
    pub reason: UnplannedReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_display_is_human_readable() {
        assert_eq!(UnplannedReason::InvalidCategory.to_string(), "invalid category");
        assert_eq!(
            UnplannedReason::NoEligibleStrikeForce.to_string(),
            "no eligible strike force"
        );
    }
}

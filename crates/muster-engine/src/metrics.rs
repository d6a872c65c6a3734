//! Per-run planning metrics.

use muster_core::UnplannedReason;

/// Counters collected over a single planning run.
///
/// The engine populates these alongside the report; there is no logging
/// layer — callers that want telemetry read the struct.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Targets in the input snapshot.
    pub targets_total: usize,
    /// Targets that produced a plan entry.
    pub planned: usize,
    /// Targets rejected for an unrecognizable category.
    pub invalid_category: usize,
    /// Targets rejected for a missing coordinate.
    pub missing_coordinate: usize,
    /// Targets starved of a strike force.
    pub no_strike_force: usize,
    /// Targets starved of a siege asset.
    pub no_siege_asset: usize,
    /// Targets starved of a carrier.
    pub no_carrier: usize,
    /// Strike-force uses consumed.
    pub strike_force_uses: u64,
    /// Siege-asset uses consumed.
    pub siege_asset_uses: u64,
    /// Carrier uses consumed.
    pub carrier_uses: u64,
}

impl RunMetrics {
    /// Bump the counter for one unplanned reason.
    pub(crate) fn record_reason(&mut self, reason: UnplannedReason) {
        match reason {
            UnplannedReason::InvalidCategory => self.invalid_category += 1,
            UnplannedReason::MissingCoordinate => self.missing_coordinate += 1,
            UnplannedReason::NoEligibleStrikeForce => self.no_strike_force += 1,
            UnplannedReason::NoEligibleSiegeAsset => self.no_siege_asset += 1,
            UnplannedReason::NoEligibleCarrier => self.no_carrier += 1,
        }
    }

    /// Targets that ended up unplanned, across all reasons.
    pub fn unplanned_total(&self) -> usize {
        self.invalid_category
            + self.missing_coordinate
            + self.no_strike_force
            + self.no_siege_asset
            + self.no_carrier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.targets_total, 0);
        assert_eq!(m.planned, 0);
        assert_eq!(m.unplanned_total(), 0);
        assert_eq!(m.strike_force_uses, 0);
        assert_eq!(m.siege_asset_uses, 0);
        assert_eq!(m.carrier_uses, 0);
    }

    #[test]
    fn record_reason_bumps_matching_counter() {
        let mut m = RunMetrics::default();
        m.record_reason(UnplannedReason::InvalidCategory);
        m.record_reason(UnplannedReason::NoEligibleCarrier);
        m.record_reason(UnplannedReason::NoEligibleCarrier);
        assert_eq!(m.invalid_category, 1);
        assert_eq!(m.no_carrier, 2);
        assert_eq!(m.unplanned_total(), 3);
    }
}

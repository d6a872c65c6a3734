//! The greedy matching engine.

use muster_core::{
    carrier_compatible, strike_force_compatible, PlanEntry, PlanningSnapshot, UnplannedEntry,
    UnplannedReason,
};
use muster_map::MapCoord;
use muster_pool::ResourcePool;

use crate::config::PlannerConfig;
use crate::metrics::RunMetrics;
use crate::normalize::{
    normalize_carriers, normalize_forces, normalize_sieges, normalize_targets, ForceUnit,
};
use crate::report::PlanReport;
use crate::search::best_candidate;

/// The assignment planner.
///
/// Greedy and single-pass: targets are served strictly in priority order,
/// each one independently taking the minimum-ETA record from each pool,
/// and reservations are never revisited. An earlier, higher-priority
/// target can therefore starve a later one even when a different pairing
/// would have served both — accepted behavior, not a defect. A globally
/// optimal mode (min-cost matching across all targets) would be a separate
/// engine and is out of scope.
#[derive(Clone, Debug, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Create a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Run one planning pass over `snapshot`.
    ///
    /// Deterministic: identical snapshots yield identical reports. Every
    /// input target lands in exactly one of `planned` / `unplanned`, and
    /// no capacity is ever exceeded or restored mid-run.
    pub fn plan(&self, snapshot: &PlanningSnapshot) -> PlanReport {
        let mut metrics = RunMetrics {
            targets_total: snapshot.targets.len(),
            ..RunMetrics::default()
        };

        let (mut targets, mut unplanned) =
            normalize_targets(&snapshot.targets, &self.config.classifier);
        for entry in &unplanned {
            metrics.record_reason(entry.reason);
        }

        // Stable sort: equal priority keys keep snapshot order.
        targets.sort_by_key(|t| t.priority);

        let mut forces = ResourcePool::from_records(normalize_forces(&snapshot.strike_forces), |_| 1);
        let mut sieges = ResourcePool::from_records(normalize_sieges(&snapshot.siege_assets), |s| {
            s.uses_remaining
        });
        let mut carriers = ResourcePool::from_records(normalize_carriers(&snapshot.carriers), |_| 1);

        let mut planned = Vec::with_capacity(targets.len());

        for target in &targets {
            let eta = |coord: MapCoord, speed: f64, bonus_level: u32| {
                let distance = self.config.grid.distance(coord, target.coord);
                self.config.travel.travel_time(distance, speed, bonus_level)
            };

            // Pools are consulted in a fixed order; the first to come up
            // empty names the reason.
            let force = best_candidate(
                &forces,
                |f: &ForceUnit| {
                    f.class
                        .is_some_and(|class| strike_force_compatible(class, target.category.class))
                },
                |f| eta(f.coord, f.speed, f.bonus_level),
            );
            let Some(force) = force else {
                unplanned.push(UnplannedEntry {
                    target: target.name.clone(),
                    reason: UnplannedReason::NoEligibleStrikeForce,
                });
                metrics.record_reason(UnplannedReason::NoEligibleStrikeForce);
                continue;
            };

            let siege = best_candidate(&sieges, |_| true, |s| eta(s.coord, s.speed, s.bonus_level));
            let Some(siege) = siege else {
                unplanned.push(UnplannedEntry {
                    target: target.name.clone(),
                    reason: UnplannedReason::NoEligibleSiegeAsset,
                });
                metrics.record_reason(UnplannedReason::NoEligibleSiegeAsset);
                continue;
            };

            let carrier = best_candidate(
                &carriers,
                |c| {
                    carrier_compatible(
                        c.eligibility_level,
                        self.config.carrier_threshold,
                        target.category.class,
                    )
                },
                |c| eta(c.coord, c.speed, c.bonus_level),
            );
            let Some(carrier) = carrier else {
                unplanned.push(UnplannedEntry {
                    target: target.name.clone(),
                    reason: UnplannedReason::NoEligibleCarrier,
                });
                metrics.record_reason(UnplannedReason::NoEligibleCarrier);
                continue;
            };

            let strike_force = forces
                .record(force.handle)
                .expect("candidate handle from this pool")
                .name
                .clone();
            let siege_asset = sieges
                .record(siege.handle)
                .expect("candidate handle from this pool")
                .name
                .clone();
            let carrier_name = carriers
                .record(carrier.handle)
                .expect("candidate handle from this pool")
                .name
                .clone();

            // All three pools confirmed availability above, so the
            // reservations cannot fail; together they are atomic with
            // respect to this target.
            forces
                .reserve(force.handle)
                .expect("force availability checked");
            sieges
                .reserve(siege.handle)
                .expect("siege availability checked");
            carriers
                .reserve(carrier.handle)
                .expect("carrier availability checked");

            metrics.planned += 1;
            metrics.strike_force_uses += 1;
            metrics.siege_asset_uses += 1;
            metrics.carrier_uses += 1;

            planned.push(PlanEntry {
                target: target.name.clone(),
                category: target.category,
                strike_force,
                strike_force_eta: force.eta,
                siege_asset,
                siege_asset_eta: siege.eta,
                carrier: carrier_name,
                carrier_eta: carrier.eta,
                arrival: force.eta.max(siege.eta).max(carrier.eta),
            });
        }

        PlanReport {
            snapshot: snapshot.id,
            planned,
            unplanned,
            metrics,
        }
    }
}

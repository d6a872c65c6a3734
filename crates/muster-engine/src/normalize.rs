//! Input validation and normalization.
//!
//! Raw records become typed units exactly once, at the start of a run.
//! Targets that fail validation are routed straight to the unplanned
//! report and the run continues. Resource records cannot fail — their
//! coordinates are mandatory in the contract — but a strike force with an
//! unrecognizable rating keeps `class: None` and is compatible with
//! nothing (fail closed).

use muster_core::{
    CarrierRecord, Classifier, PriorityKey, SiegeAssetRecord, SizeClass, StrikeForceRecord,
    TargetCategory, TargetRecord, UnplannedEntry, UnplannedReason,
};
use muster_map::MapCoord;

/// A target that passed validation, ready to sort and match.
#[derive(Clone, Debug)]
pub(crate) struct ValidTarget {
    pub name: String,
    pub category: TargetCategory,
    pub coord: MapCoord,
    pub priority: PriorityKey,
}

/// A normalized strike force.
#[derive(Clone, Debug)]
pub(crate) struct ForceUnit {
    pub name: String,
    pub coord: MapCoord,
    pub speed: f64,
    pub bonus_level: u32,
    /// `None` when the rating label parsed to no size class.
    pub class: Option<SizeClass>,
}

/// A normalized siege asset.
#[derive(Clone, Debug)]
pub(crate) struct SiegeUnit {
    pub name: String,
    pub coord: MapCoord,
    pub speed: f64,
    pub bonus_level: u32,
    pub uses_remaining: u32,
}

/// A normalized pickup carrier.
#[derive(Clone, Debug)]
pub(crate) struct CarrierUnit {
    pub name: String,
    pub coord: MapCoord,
    pub speed: f64,
    pub bonus_level: u32,
    pub eligibility_level: u32,
}

/// Split raw targets into valid, sortable targets and immediate unplanned
/// entries.
///
/// The category is checked before the coordinate, so a target failing both
/// reports `InvalidCategory`.
pub(crate) fn normalize_targets(
    records: &[TargetRecord],
    classifier: &Classifier,
) -> (Vec<ValidTarget>, Vec<UnplannedEntry>) {
    let mut valid = Vec::with_capacity(records.len());
    let mut unplanned = Vec::new();
    for record in records {
        let Some(category) = classifier.classify(&record.category, &record.name) else {
            unplanned.push(UnplannedEntry {
                target: record.name.clone(),
                reason: UnplannedReason::InvalidCategory,
            });
            continue;
        };
        let (Some(x), Some(y)) = (record.x, record.y) else {
            unplanned.push(UnplannedEntry {
                target: record.name.clone(),
                reason: UnplannedReason::MissingCoordinate,
            });
            continue;
        };
        valid.push(ValidTarget {
            name: record.name.clone(),
            category,
            coord: MapCoord::new(x, y),
            priority: PriorityKey::of(&category),
        });
    }
    (valid, unplanned)
}

pub(crate) fn normalize_forces(records: &[StrikeForceRecord]) -> Vec<ForceUnit> {
    records
        .iter()
        .map(|r| ForceUnit {
            name: r.name.clone(),
            coord: MapCoord::new(r.x, r.y),
            speed: r.speed,
            bonus_level: r.bonus_level,
            class: SizeClass::sniff(&r.category),
        })
        .collect()
}

pub(crate) fn normalize_sieges(records: &[SiegeAssetRecord]) -> Vec<SiegeUnit> {
    records
        .iter()
        .map(|r| SiegeUnit {
            name: r.name.clone(),
            coord: MapCoord::new(r.x, r.y),
            speed: r.speed,
            bonus_level: r.bonus_level,
            uses_remaining: r.uses_remaining,
        })
        .collect()
}

pub(crate) fn normalize_carriers(records: &[CarrierRecord]) -> Vec<CarrierUnit> {
    records
        .iter()
        .map(|r| CarrierUnit {
            name: r.name.clone(),
            coord: MapCoord::new(r.x, r.y),
            speed: r.speed,
            bonus_level: r.bonus_level,
            eligibility_level: r.eligibility_level,
        })
        .collect()
}

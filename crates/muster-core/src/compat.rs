//! Compatibility rules between resources and targets.
//!
//! Pure predicates over parsed size classes. Anything unrecognized fails
//! closed: a strike force whose rating never parsed has no [`SizeClass`]
//! at all and is filtered out before these predicates are consulted.

use crate::category::SizeClass;

/// Canonical carrier eligibility threshold (treasury/storage level).
///
/// Carried in planner configuration; this constant is the default.
pub const CARRIER_ELIGIBILITY_THRESHOLD: u32 = 20;

/// Whether a strike force rated `force` may serve a target of class
/// `target`.
///
/// The lattice is asymmetric, not an equality check: Small serves Small
/// only; Great serves Great and Small; Unique-capable serves anything.
pub fn strike_force_compatible(force: SizeClass, target: SizeClass) -> bool {
    match force {
        SizeClass::Unique => true,
        SizeClass::Great => matches!(target, SizeClass::Great | SizeClass::Small),
        SizeClass::Small => matches!(target, SizeClass::Small),
    }
}

/// Whether a carrier with `eligibility_level` may serve a target of class
/// `target`, given the configured `threshold`.
///
/// Below the threshold a carrier is limited to Small targets; at or above
/// it, any class.
pub fn carrier_compatible(eligibility_level: u32, threshold: u32, target: SizeClass) -> bool {
    eligibility_level >= threshold || target == SizeClass::Small
}

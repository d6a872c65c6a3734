//! Input record contracts.
//!
//! These are the shapes ingestion collaborators (spreadsheet import,
//! coordinate scraping) must produce before invoking the engine. With the
//! `serde` feature enabled every record derives `Serialize`/`Deserialize`
//! so importers can decode straight into them.

use crate::id::SnapshotId;

#[cfg(feature = "serde")]
fn default_siege_uses() -> u32 {
    SiegeAssetRecord::DEFAULT_USES
}

/// An artifact target awaiting assignment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetRecord {
    /// Display name; also the identity reported back in plan entries.
    pub name: String,
    /// Free-text category label ("Unique Boots", "Great Warehouse Plans", ...).
    pub category: String,
    /// Map x coordinate; absent until enrichment delivers it.
    pub x: Option<i32>,
    /// Map y coordinate; absent until enrichment delivers it.
    pub y: Option<i32>,
}

/// A single-use offensive strike force.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeForceRecord {
    /// Name of the force or its owning village.
    pub name: String,
    /// Map x coordinate.
    pub x: i32,
    /// Map y coordinate.
    pub y: i32,
    /// Base travel speed in tiles per hour. Must be positive to be usable.
    pub speed: f64,
    /// Bonus-zone (tournament square) level accelerating the far leg.
    pub bonus_level: u32,
    /// Free-text rating label; parsed into a [`crate::SizeClass`].
    pub category: String,
}

/// A siege asset, reusable up to [`SiegeAssetRecord::DEFAULT_USES`] times.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiegeAssetRecord {
    /// Name of the asset or its owning village.
    pub name: String,
    /// Map x coordinate.
    pub x: i32,
    /// Map y coordinate.
    pub y: i32,
    /// Base travel speed in tiles per hour.
    pub speed: f64,
    /// Bonus-zone level accelerating the far leg.
    pub bonus_level: u32,
    /// Remaining uses; imports normally leave this at the default of 2.
    #[cfg_attr(feature = "serde", serde(default = "default_siege_uses"))]
    pub uses_remaining: u32,
}

impl SiegeAssetRecord {
    /// Default use count for a fresh siege asset.
    pub const DEFAULT_USES: u32 = 2;
}

/// A single-use pickup carrier gated by treasury level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarrierRecord {
    /// Name of the carrier or its owning village.
    pub name: String,
    /// Map x coordinate.
    pub x: i32,
    /// Map y coordinate.
    pub y: i32,
    /// Base travel speed in tiles per hour.
    pub speed: f64,
    /// Bonus-zone level accelerating the far leg.
    pub bonus_level: u32,
    /// Treasury/storage level gating which target classes it may serve.
    pub eligibility_level: u32,
}

/// One immutable input snapshot for a planning run.
///
/// Constructed fresh from the caller's current tables; the engine never
/// mutates it and holds nothing back between runs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanningSnapshot {
    /// Version of the input this snapshot was taken from.
    pub id: SnapshotId,
    /// Targets to plan, in caller order.
    pub targets: Vec<TargetRecord>,
    /// Strike force pool, in caller order.
    pub strike_forces: Vec<StrikeForceRecord>,
    /// Siege asset pool, in caller order.
    pub siege_assets: Vec<SiegeAssetRecord>,
    /// Carrier pool, in caller order.
    pub carriers: Vec<CarrierRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn siege_default_uses_is_two() {
        assert_eq!(SiegeAssetRecord::DEFAULT_USES, 2);
    }

    #[test]
    fn empty_snapshot_default() {
        let snap = PlanningSnapshot::default();
        assert_eq!(snap.id, SnapshotId(0));
        assert!(snap.targets.is_empty());
        assert!(snap.strike_forces.is_empty());
        assert!(snap.siege_assets.is_empty());
        assert!(snap.carriers.is_empty());
    }
}

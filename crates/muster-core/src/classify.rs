//! Keyword classification of free-text labels.
//!
//! The classifier owns the keyword→kind lookup table. It is built once and
//! treated as static configuration data; classification never reaches for
//! ad-hoc string heuristics outside this table and the size-class keywords
//! in [`SizeClass::sniff`].

use indexmap::IndexMap;

use crate::category::{ArtifactKind, SizeClass, TargetCategory};

/// Maps free-text category labels and names to canonical categories.
///
/// The keyword table is scanned in insertion order and the first matching
/// keyword wins, so the order is part of the contract and documented on
/// [`Classifier::standard`]. Matching is case-insensitive substring
/// containment, which tolerates the compound labels produced by imports
/// ("Great Warehouse Plans" matches "plan").
#[derive(Clone, Debug)]
pub struct Classifier {
    kinds: IndexMap<String, ArtifactKind>,
}

impl Classifier {
    /// The canonical keyword table.
    ///
    /// Scan order mirrors the priority sub-ordering, each kind with its
    /// language variants:
    /// trainer → diet (diaet, ration) → boots (stiefel) → eyes (augen) →
    /// plans (plan, lager).
    pub fn standard() -> Self {
        let mut table = Self {
            kinds: IndexMap::new(),
        };
        for (keyword, kind) in [
            ("trainer", ArtifactKind::Trainer),
            ("diet", ArtifactKind::Diet),
            ("diaet", ArtifactKind::Diet),
            ("ration", ArtifactKind::Diet),
            ("boots", ArtifactKind::Boots),
            ("stiefel", ArtifactKind::Boots),
            ("eyes", ArtifactKind::Eyes),
            ("augen", ArtifactKind::Eyes),
            ("plan", ArtifactKind::Plans),
            ("lager", ArtifactKind::Plans),
        ] {
            table.add_keyword(keyword, kind);
        }
        table
    }

    /// Add a keyword mapping. New keywords are scanned after existing ones;
    /// re-adding an existing keyword re-binds it in place.
    pub fn add_keyword(&mut self, keyword: &str, kind: ArtifactKind) {
        self.kinds.insert(keyword.to_lowercase(), kind);
    }

    /// Number of keywords in the table.
    pub fn keyword_count(&self) -> usize {
        self.kinds.len()
    }

    /// Normalize a target's free-text `category` label and `name`.
    ///
    /// The category label is inspected first, the name second — imports
    /// often leave the kind only in the name. Returns `None` when no size
    /// class can be recognized in either; the *kind* instead falls back to
    /// [`ArtifactKind::Other`] rather than failing, so an oddly-named small
    /// artifact still plans at the catch-all tier.
    pub fn classify(&self, category: &str, name: &str) -> Option<TargetCategory> {
        let class = SizeClass::sniff(category).or_else(|| SizeClass::sniff(name))?;
        let kind = self
            .sniff_kind(category)
            .or_else(|| self.sniff_kind(name))
            .unwrap_or(ArtifactKind::Other);
        Some(TargetCategory { class, kind })
    }

    fn sniff_kind(&self, label: &str) -> Option<ArtifactKind> {
        let label = label.to_lowercase();
        self.kinds
            .iter()
            .find(|(keyword, _)| label.contains(keyword.as_str()))
            .map(|(_, kind)| *kind)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}

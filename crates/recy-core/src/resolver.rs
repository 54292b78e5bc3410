//! Label → recycling guidance resolution.
//!
//! Resolution order for a label:
//! 1. Exclusion filter (exact lowercase match): excluded labels get `None`.
//! 2. Specific Items, in declared order, by lowercase substring containment.
//! 3. Material Classes, same rule.
//! 4. The catalog fallback (category Unknown).
//!
//! The first matching key wins, so table order is part of the data. The
//! resolver holds no mutable state and can be shared freely across threads.

use recy_common::{
    Catalog, CatalogKind, DetectedLabel, ExclusionFilter, RecyclingCategory, ResolvedLabel,
};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Why a label resolved the way it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Matched the exclusion set; no guidance.
    Excluded,
    /// Matched a Specific Items key.
    SpecificItem { key: String, index: usize },
    /// Matched a Material Classes key.
    MaterialClass { key: String, index: usize },
    /// No key matched; fallback guidance applies.
    Fallback,
}

impl Resolution {
    /// Matched catalog key, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Resolution::SpecificItem { key, .. } | Resolution::MaterialClass { key, .. } => {
                Some(key)
            }
            Resolution::Excluded | Resolution::Fallback => None,
        }
    }

    /// Table the key came from.
    pub fn catalog(&self) -> Option<CatalogKind> {
        match self {
            Resolution::SpecificItem { .. } => Some(CatalogKind::SpecificItems),
            Resolution::MaterialClass { .. } => Some(CatalogKind::MaterialClasses),
            Resolution::Excluded | Resolution::Fallback => None,
        }
    }

    /// Short human description ("specific item \"Bottle\"", "fallback", ...).
    pub fn describe(&self) -> String {
        match self {
            Resolution::Excluded => "excluded".to_string(),
            Resolution::SpecificItem { key, .. } => format!("specific item \"{key}\""),
            Resolution::MaterialClass { key, .. } => format!("material class \"{key}\""),
            Resolution::Fallback => "fallback".to_string(),
        }
    }
}

/// A label, its guidance, and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainedLabel {
    pub label: String,
    pub resolution: Resolution,
    /// Null when the label was excluded.
    pub recycling_info: Option<RecyclingCategory>,
}

/// Catalog plus exclusion filter, ready to answer queries.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    catalog: Cow<'a, Catalog>,
    exclusions: ExclusionFilter,
}

impl Resolver<'static> {
    /// Resolver over the compiled-in catalog and exclusions.
    pub fn builtin() -> Self {
        Resolver {
            catalog: Cow::Borrowed(Catalog::builtin()),
            exclusions: ExclusionFilter::builtin(),
        }
    }

    /// Resolver that owns a (typically overlaid) catalog.
    pub fn owned(catalog: Catalog, exclusions: ExclusionFilter) -> Self {
        Resolver {
            catalog: Cow::Owned(catalog),
            exclusions,
        }
    }
}

impl<'a> Resolver<'a> {
    /// Resolver borrowing an existing catalog.
    pub fn new(catalog: &'a Catalog, exclusions: ExclusionFilter) -> Self {
        Resolver {
            catalog: Cow::Borrowed(catalog),
            exclusions,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn exclusions(&self) -> &ExclusionFilter {
        &self.exclusions
    }

    /// False when the label names a person, a photographic style, or a room.
    pub fn is_physical_object(&self, label: &str) -> bool {
        self.exclusions.is_physical_object(label)
    }

    /// Guidance for a label, or `None` when it is excluded.
    pub fn resolve(&self, label: &str) -> Option<&RecyclingCategory> {
        let resolution = self.explain(label);
        self.guidance_for(&resolution)
    }

    /// Which rule decides this label.
    pub fn explain(&self, label: &str) -> Resolution {
        if !self.is_physical_object(label) {
            debug!(label, "label excluded");
            return Resolution::Excluded;
        }

        let lower = label.to_lowercase();

        for (index, entry) in self.catalog.specific_items().iter().enumerate() {
            if entry.matches_lowercase(&lower) {
                debug!(label, key = entry.key(), index, "matched specific item");
                return Resolution::SpecificItem {
                    key: entry.key().to_string(),
                    index,
                };
            }
        }

        for (index, entry) in self.catalog.material_classes().iter().enumerate() {
            if entry.matches_lowercase(&lower) {
                debug!(label, key = entry.key(), index, "matched material class");
                return Resolution::MaterialClass {
                    key: entry.key().to_string(),
                    index,
                };
            }
        }

        trace!(label, "no catalog key matched; using fallback");
        Resolution::Fallback
    }

    /// Guidance attached to a resolution.
    pub fn guidance_for(&self, resolution: &Resolution) -> Option<&RecyclingCategory> {
        match resolution {
            Resolution::Excluded => None,
            Resolution::SpecificItem { index, .. } => self
                .catalog
                .specific_items()
                .get(*index)
                .map(|e| e.guidance()),
            Resolution::MaterialClass { index, .. } => self
                .catalog
                .material_classes()
                .get(*index)
                .map(|e| e.guidance()),
            Resolution::Fallback => Some(self.catalog.fallback()),
        }
    }

    /// Guidance together with its explanation.
    pub fn explain_label(&self, label: &str) -> ExplainedLabel {
        let resolution = self.explain(label);
        let recycling_info = self.guidance_for(&resolution).cloned();
        ExplainedLabel {
            label: label.to_string(),
            resolution,
            recycling_info,
        }
    }

    /// Attach guidance to a detected label.
    pub fn resolve_label(&self, label: DetectedLabel) -> ResolvedLabel {
        let info = self.resolve(&label.name).cloned();
        ResolvedLabel::new(label, info)
    }

    /// Resolve a batch, preserving input order.
    pub fn resolve_all<I>(&self, labels: I) -> Vec<ResolvedLabel>
    where
        I: IntoIterator<Item = DetectedLabel>,
    {
        labels
            .into_iter()
            .map(|label| self.resolve_label(label))
            .collect()
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Static recycling catalog: specific items, material classes, and fallback.
//!
//! Each table is an ordered sequence of `(key, guidance)` pairs rather than a
//! hash map, because the resolver's tie-break is "first key in declaration
//! order that is contained in the label". Keys are unique per table after
//! lowercasing; [`Catalog::validate`] enforces that together with non-empty
//! keys and instructions.
//!
//! The compiled-in tables are validated once on first use and shared through
//! [`Catalog::builtin`]. Overlays from configuration produce a new catalog via
//! [`Catalog::with_overlay`]; nothing is mutated after construction.

mod items;
mod materials;

use crate::category::{Category, RecyclingCategory};
use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Schema version for the catalog tables.
pub const CATALOG_SCHEMA_VERSION: &str = "1.0.0";

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Compile-time row of a built-in table.
pub(crate) struct Seed {
    pub key: &'static str,
    pub category: Category,
    pub instructions: &'static str,
    pub additional_info: Option<&'static str>,
    pub preparation: &'static [&'static str],
    pub common_mistakes: &'static [&'static str],
}

impl Seed {
    fn guidance(&self) -> RecyclingCategory {
        RecyclingCategory {
            category: self.category,
            instructions: self.instructions.to_string(),
            additional_info: self.additional_info.map(str::to_string),
            preparation: self.preparation.iter().map(|s| s.to_string()).collect(),
            common_mistakes: self.common_mistakes.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn entry(&self) -> CatalogEntry {
        CatalogEntry::new(self.key, self.guidance())
    }
}

/// Which table an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    /// Concrete object names ("Bottle", "Laptop"). Searched first.
    SpecificItems,
    /// Broad material names ("Plastic", "Glass"). Searched second.
    MaterialClasses,
}

impl CatalogKind {
    /// Both tables in search order.
    pub fn all() -> &'static [CatalogKind] {
        &[CatalogKind::SpecificItems, CatalogKind::MaterialClasses]
    }

    /// Stable machine identifier.
    pub fn name(&self) -> &'static str {
        match self {
            CatalogKind::SpecificItems => "specific_items",
            CatalogKind::MaterialClasses => "material_classes",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog key mapped to its guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryRepr")]
pub struct CatalogEntry {
    key: String,
    #[serde(flatten)]
    guidance: RecyclingCategory,
    #[serde(skip)]
    needle: String,
}

#[derive(Deserialize)]
struct EntryRepr {
    key: String,
    #[serde(flatten)]
    guidance: RecyclingCategory,
}

impl From<EntryRepr> for CatalogEntry {
    fn from(repr: EntryRepr) -> Self {
        CatalogEntry::new(repr.key, repr.guidance)
    }
}

impl CatalogEntry {
    /// Create an entry; the lowercase match needle is derived from `key`.
    pub fn new(key: impl Into<String>, guidance: RecyclingCategory) -> Self {
        let key = key.into();
        let needle = key.to_lowercase();
        Self {
            key,
            guidance,
            needle,
        }
    }

    /// Key as declared (case preserved for display).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Guidance returned when this key matches.
    pub fn guidance(&self) -> &RecyclingCategory {
        &self.guidance
    }

    /// Lowercased key used for substring matching.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// True when the already-lowercased label contains this entry's key.
    pub fn matches_lowercase(&self, label_lower: &str) -> bool {
        label_lower.contains(self.needle.as_str())
    }

    /// Category of the attached guidance.
    pub fn category(&self) -> Category {
        self.guidance.category
    }
}

/// Where an overlay entry landed when merged into a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum MergeOutcome {
    /// An existing key's guidance was replaced; its position is unchanged.
    Replaced { kind: CatalogKind, index: usize },
    /// A new key was appended at the end of its table.
    Appended { kind: CatalogKind, index: usize },
}

/// The complete, validated recycling catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    specific_items: Vec<CatalogEntry>,
    material_classes: Vec<CatalogEntry>,
    fallback: RecyclingCategory,
}

impl Catalog {
    /// The compiled-in catalog, validated on first access.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            Self::from_tables(
                items::SPECIFIC_ITEMS.iter().map(Seed::entry).collect(),
                materials::MATERIAL_CLASSES.iter().map(Seed::entry).collect(),
                materials::FALLBACK.guidance(),
            )
            .expect("built-in recycling catalog failed validation")
        })
    }

    /// Build and validate a catalog from ordered tables.
    pub fn from_tables(
        specific_items: Vec<CatalogEntry>,
        material_classes: Vec<CatalogEntry>,
        fallback: RecyclingCategory,
    ) -> Result<Self> {
        let catalog = Catalog {
            specific_items,
            material_classes,
            fallback,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Specific items, in search order.
    pub fn specific_items(&self) -> &[CatalogEntry] {
        &self.specific_items
    }

    /// Material classes, in search order.
    pub fn material_classes(&self) -> &[CatalogEntry] {
        &self.material_classes
    }

    /// Entries of one table.
    pub fn table(&self, kind: CatalogKind) -> &[CatalogEntry] {
        match kind {
            CatalogKind::SpecificItems => &self.specific_items,
            CatalogKind::MaterialClasses => &self.material_classes,
        }
    }

    /// Guidance returned when no key matches.
    pub fn fallback(&self) -> &RecyclingCategory {
        &self.fallback
    }

    /// All entries in search order (specific items, then material classes).
    pub fn entries(&self) -> impl Iterator<Item = (CatalogKind, usize, &CatalogEntry)> {
        CatalogKind::all().iter().flat_map(move |kind| {
            self.table(*kind)
                .iter()
                .enumerate()
                .map(move |(index, entry)| (*kind, index, entry))
        })
    }

    /// Total number of keyed entries.
    pub fn len(&self) -> usize {
        self.specific_items.len() + self.material_classes.len()
    }

    /// True when both tables are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up an entry by exact key (case-insensitive).
    pub fn get(&self, kind: CatalogKind, key: &str) -> Option<&CatalogEntry> {
        let key = key.to_lowercase();
        self.table(kind).iter().find(|e| e.needle() == key)
    }

    /// Re-run construction-time checks.
    ///
    /// Rejects empty keys, empty instructions, and keys that collide after
    /// lowercasing within a table. The category set is closed by the type
    /// system, so no per-value category check is needed.
    pub fn validate(&self) -> Result<()> {
        if self.fallback.instructions.trim().is_empty() {
            return Err(Error::InvalidCatalog(
                "fallback guidance has empty instructions".to_string(),
            ));
        }

        for kind in CatalogKind::all() {
            let table = self.table(*kind);
            for (index, entry) in table.iter().enumerate() {
                if entry.key.trim().is_empty() {
                    return Err(Error::InvalidCatalog(format!(
                        "{} entry {} has an empty key",
                        kind, index
                    )));
                }
                if entry.guidance.instructions.trim().is_empty() {
                    return Err(Error::InvalidCatalog(format!(
                        "{} entry '{}' has empty instructions",
                        kind, entry.key
                    )));
                }
                if table[..index].iter().any(|e| e.needle() == entry.needle()) {
                    return Err(Error::DuplicateCatalogKey {
                        catalog: kind.name().to_string(),
                        key: entry.key.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Produce a new catalog with overlay entries merged in.
    ///
    /// An overlay key equal (case-insensitively) to an existing key replaces
    /// that entry's guidance in place, keeping its tie-break position. New
    /// keys are appended. Duplicate keys inside one overlay table are an error.
    pub fn with_overlay(
        &self,
        specific_items: Vec<CatalogEntry>,
        material_classes: Vec<CatalogEntry>,
    ) -> Result<(Catalog, Vec<MergeOutcome>)> {
        let mut merged = self.clone();
        let mut outcomes = Vec::new();

        for (kind, overlay) in [
            (CatalogKind::SpecificItems, specific_items),
            (CatalogKind::MaterialClasses, material_classes),
        ] {
            for (index, entry) in overlay.iter().enumerate() {
                if overlay[..index].iter().any(|e| e.needle() == entry.needle()) {
                    return Err(Error::DuplicateCatalogKey {
                        catalog: kind.name().to_string(),
                        key: entry.key.clone(),
                    });
                }
            }

            let table = match kind {
                CatalogKind::SpecificItems => &mut merged.specific_items,
                CatalogKind::MaterialClasses => &mut merged.material_classes,
            };
            for entry in overlay {
                match table.iter().position(|e| e.needle() == entry.needle()) {
                    Some(index) => {
                        table[index].guidance = entry.guidance;
                        outcomes.push(MergeOutcome::Replaced { kind, index });
                    }
                    None => {
                        table.push(entry);
                        outcomes.push(MergeOutcome::Appended {
                            kind,
                            index: table.len() - 1,
                        });
                    }
                }
            }
        }

        merged.validate()?;
        Ok((merged, outcomes))
    }
}

//! Recycling categories and the guidance record attached to each catalog key.
//!
//! The category set is closed: every piece of guidance the resolver hands out
//! carries exactly one of the five [`Category`] variants. Presentation order
//! is derived from [`Category::priority`], an exhaustive match, so adding a
//! sixth variant fails to compile until it is ranked.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Disposal category for a detected item.
///
/// Serialized with the display spelling (`"Special Disposal"`) so payloads
/// match what the presentation layer shows to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    /// Goes in the regular recycling bin after preparation.
    Recyclable,
    /// Organic matter suitable for compost.
    Compost,
    /// Not recyclable through standard streams.
    Landfill,
    /// Needs a drop-off point, hazardous handling, or a take-back program.
    #[serde(rename = "Special Disposal", alias = "special_disposal", alias = "SpecialDisposal")]
    SpecialDisposal,
    /// No catalog entry matched.
    #[default]
    Unknown,
}

impl Category {
    /// All categories in declaration order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Recyclable,
            Category::Compost,
            Category::Landfill,
            Category::SpecialDisposal,
            Category::Unknown,
        ]
    }

    /// Presentation priority (lower sorts first).
    ///
    /// Landfill and Unknown share the lowest rank.
    pub fn priority(&self) -> u8 {
        match self {
            Category::Recyclable => 0,
            Category::Compost => 1,
            Category::SpecialDisposal => 2,
            Category::Landfill => 3,
            Category::Unknown => 3,
        }
    }

    /// Stable machine identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Recyclable => "recyclable",
            Category::Compost => "compost",
            Category::Landfill => "landfill",
            Category::SpecialDisposal => "special_disposal",
            Category::Unknown => "unknown",
        }
    }

    /// Human-facing spelling.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Recyclable => "Recyclable",
            Category::Compost => "Compost",
            Category::Landfill => "Landfill",
            Category::SpecialDisposal => "Special Disposal",
            Category::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "recyclable" => Ok(Category::Recyclable),
            "compost" => Ok(Category::Compost),
            "landfill" => Ok(Category::Landfill),
            "specialdisposal" => Ok(Category::SpecialDisposal),
            "unknown" => Ok(Category::Unknown),
            _ => Err(format!("unknown recycling category: {}", s)),
        }
    }
}

/// Guidance for one catalog key (or the no-match fallback).
///
/// Immutable once built. `preparation` is an ordered list of steps;
/// `common_mistakes` keeps insertion order for stable presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RecyclingCategory {
    /// Disposal category.
    pub category: Category,

    /// What to do with the item. Never empty.
    pub instructions: String,

    /// Supplementary context, when there is any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,

    /// Preparation steps, in the order they should be performed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preparation: Vec<String>,

    /// Frequent disposal mistakes for this item.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_mistakes: Vec<String>,
}

impl RecyclingCategory {
    /// Create guidance with just a category and instructions.
    pub fn new(category: Category, instructions: impl Into<String>) -> Self {
        Self {
            category,
            instructions: instructions.into(),
            additional_info: None,
            preparation: Vec::new(),
            common_mistakes: Vec::new(),
        }
    }

    /// Attach supplementary context.
    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }

    /// Attach ordered preparation steps.
    pub fn with_preparation<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preparation = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Attach common mistakes.
    pub fn with_common_mistakes<I, S>(mut self, mistakes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_mistakes = mistakes.into_iter().map(Into::into).collect();
        self
    }

    /// Presentation priority of the carried category.
    pub fn priority(&self) -> u8 {
        self.category.priority()
    }
}

//! Exclusion filter for labels that do not name a physical object.
//!
//! Vision services happily label people, photographic styles, and rooms.
//! Those labels get no recycling guidance at all. Matching is exact equality
//! after lowercasing; surrounding whitespace is NOT trimmed, so `" Face "`
//! passes the filter and falls through to classification.

use serde::{Deserialize, Serialize};

/// Built-in exclusion terms, lowercase.
pub const BUILTIN_EXCLUSIONS: &[&str] = &[
    // Human descriptors
    "face",
    "head",
    "person",
    "adult",
    "male",
    "man",
    "body part",
    "neck",
    "hair",
    "beard",
    // Photography
    "photography",
    "portrait",
    "selfie",
    // Scenes and interiors
    "indoors",
    "interior design",
    "architecture",
    "room",
    "living room",
    "bedroom",
    "dining room",
];

/// Set of lowercase labels rejected before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionFilter {
    terms: Vec<String>,
}

impl ExclusionFilter {
    /// Filter with the built-in terms.
    pub fn builtin() -> Self {
        Self::with_terms(BUILTIN_EXCLUSIONS.iter().copied())
    }

    /// Filter with exactly the given terms (lowercased, deduplicated).
    pub fn with_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { terms: Vec::new() }.extend(terms)
    }

    /// Add terms, keeping first-seen order.
    pub fn extend<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            let term = term.as_ref().to_lowercase();
            if !self.terms.contains(&term) {
                self.terms.push(term);
            }
        }
        self
    }

    /// True unless the lowercased label is exactly an exclusion term.
    pub fn is_physical_object(&self, label: &str) -> bool {
        !self.is_excluded(label)
    }

    /// True when the lowercased label is exactly an exclusion term.
    pub fn is_excluded(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.terms.iter().any(|t| *t == label)
    }

    /// Terms in insertion order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::builtin()
    }
}

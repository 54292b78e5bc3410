//! Labels at the vision-service boundary.
//!
//! A [`DetectedLabel`] is what the upstream image-labeling collaborator
//! produces; the resolver only reads `name`. `confidence` and the opaque
//! `bounding_box` ride along untouched into the [`ResolvedLabel`].

use crate::category::{Category, RecyclingCategory};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A label reported by the image-labeling service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetectedLabel {
    /// Free-text label name, e.g. "Glass Bottle".
    pub name: String,

    /// Detection confidence in [0, 1].
    pub confidence: f64,

    /// Opaque region data from the vision service.
    #[serde(
        default,
        alias = "boundingBox",
        alias = "boundingBoxes",
        skip_serializing_if = "Option::is_none"
    )]
    pub bounding_box: Option<serde_json::Value>,
}

impl DetectedLabel {
    /// Create a label without region data.
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
            bounding_box: None,
        }
    }

    /// Attach opaque region data.
    pub fn with_bounding_box(mut self, bounding_box: serde_json::Value) -> Self {
        self.bounding_box = Some(bounding_box);
        self
    }

    /// Confidence rendered as a percentage with two decimals ("97.25%").
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

/// A detected label paired with its guidance.
///
/// `recycling_info` is `None` when the label was excluded as not being a
/// physical object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedLabel {
    /// The label as detected.
    #[serde(flatten)]
    pub label: DetectedLabel,

    /// Guidance, or null for excluded labels.
    pub recycling_info: Option<RecyclingCategory>,
}

impl ResolvedLabel {
    /// Pair a label with its resolution.
    pub fn new(label: DetectedLabel, recycling_info: Option<RecyclingCategory>) -> Self {
        Self {
            label,
            recycling_info,
        }
    }

    /// Label name.
    pub fn name(&self) -> &str {
        &self.label.name
    }

    /// True when the label was filtered out.
    pub fn is_excluded(&self) -> bool {
        self.recycling_info.is_none()
    }

    /// Category for ranking; excluded labels rank as Unknown.
    pub fn category(&self) -> Category {
        self.recycling_info
            .as_ref()
            .map(|info| info.category)
            .unwrap_or(Category::Unknown)
    }

    /// Presentation priority (lower sorts first).
    pub fn priority(&self) -> u8 {
        self.category().priority()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detected_label_accepts_camel_case_box() {
        let label: DetectedLabel = serde_json::from_value(json!({
            "name": "Bottle",
            "confidence": 0.97,
            "boundingBox": {"left": 0.1, "top": 0.2}
        }))
        .unwrap();
        assert_eq!(label.name, "Bottle");
        assert_eq!(label.bounding_box, Some(json!({"left": 0.1, "top": 0.2})));
    }

    #[test]
    fn test_confidence_percent() {
        assert_eq!(DetectedLabel::new("Cup", 0.875).confidence_percent(), "87.50%");
        assert_eq!(DetectedLabel::new("Cup", 1.0).confidence_percent(), "100.00%");
    }

    #[test]
    fn test_resolved_label_flattens_detected_fields() {
        let resolved = ResolvedLabel::new(
            DetectedLabel::new("Face", 0.99).with_bounding_box(json!([1, 2, 3, 4])),
            None,
        );
        let value = serde_json::to_value(&resolved).unwrap();
        assert_eq!(value["name"], "Face");
        assert_eq!(value["bounding_box"], json!([1, 2, 3, 4]));
        assert!(value["recycling_info"].is_null());

        let back: ResolvedLabel = serde_json::from_value(value).unwrap();
        assert_eq!(back, resolved);
    }

    #[test]
    fn test_excluded_label_ranks_as_unknown() {
        let resolved = ResolvedLabel::new(DetectedLabel::new("Selfie", 0.8), None);
        assert!(resolved.is_excluded());
        assert_eq!(resolved.category(), Category::Unknown);
        assert_eq!(resolved.priority(), Category::Unknown.priority());
    }

    #[test]
    fn test_resolved_category_from_info() {
        let resolved = ResolvedLabel::new(
            DetectedLabel::new("Pizza Box", 0.7),
            Some(RecyclingCategory::new(Category::Compost, "Compost it")),
        );
        assert!(!resolved.is_excluded());
        assert_eq!(resolved.name(), "Pizza Box");
        assert_eq!(resolved.category(), Category::Compost);
        assert_eq!(resolved.priority(), 1);
    }
}

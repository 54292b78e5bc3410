//! JSON Schema generation for payloads exchanged with collaborators.
//!
//! The vision service produces [`DetectedLabel`]s; presentation and history
//! consumers read [`ScanReport`], [`ResolvedLabel`] and [`ScanRecord`];
//! operators write [`CatalogOverlay`] and [`Settings`] files.
//!
//! ```bash
//! recy schema --list
//! recy schema ScanReport
//! recy schema --all
//! ```

use schemars::schema_for;
use serde_json::Value;
use std::collections::BTreeMap;

pub use crate::history::ScanRecord;
pub use crate::scan::{ScanReport, ScanSummary};
pub use recy_common::{Category, DetectedLabel, RecyclingCategory, ResolvedLabel, ScanId};
pub use recy_config::{CatalogOverlay, ConfigSnapshot, Settings};

/// Available schema types with their descriptions.
pub fn available_schemas() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Category", "Disposal category"),
        ("RecyclingCategory", "Guidance attached to a catalog key"),
        ("DetectedLabel", "Label from the image-labeling service"),
        ("ResolvedLabel", "Detected label with its guidance (null if excluded)"),
        ("ScanId", "Scan identifier"),
        ("ScanSummary", "Per-category counts for a scan"),
        ("ScanReport", "Ranked result of one scan"),
        ("ScanRecord", "One line of scan history"),
        ("CatalogOverlay", "catalog.json overlay file"),
        ("Settings", "settings.json file"),
        ("ConfigSnapshot", "Loaded configuration with file hashes"),
    ]
}

/// Generate the schema for a named type.
pub fn generate_schema(type_name: &str) -> Option<Value> {
    let schema = match type_name {
        "Category" => schema_for!(Category),
        "RecyclingCategory" => schema_for!(RecyclingCategory),
        "DetectedLabel" => schema_for!(DetectedLabel),
        "ResolvedLabel" => schema_for!(ResolvedLabel),
        "ScanId" => schema_for!(ScanId),
        "ScanSummary" => schema_for!(ScanSummary),
        "ScanReport" => schema_for!(ScanReport),
        "ScanRecord" => schema_for!(ScanRecord),
        "CatalogOverlay" => schema_for!(CatalogOverlay),
        "Settings" => schema_for!(Settings),
        "ConfigSnapshot" => schema_for!(ConfigSnapshot),
        _ => return None,
    };

    serde_json::to_value(schema).ok()
}

/// Generate all schemas as a map from type name to schema.
pub fn generate_all_schemas() -> BTreeMap<String, Value> {
    available_schemas()
        .into_iter()
        .filter_map(|(name, _)| generate_schema(name).map(|s| (name.to_string(), s)))
        .collect()
}

/// Schema output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact single-line JSON
    JsonCompact,
}

/// Format a schema value for output.
pub fn format_schema(schema: &Value, format: SchemaFormat) -> String {
    let rendered = match format {
        SchemaFormat::Json => serde_json::to_string_pretty(schema),
        SchemaFormat::JsonCompact => serde_json::to_string(schema),
    };
    // Serializing a Value cannot fail.
    rendered.unwrap_or_default()
}

//! Configuration snapshots and catalog fingerprints.
//!
//! A snapshot records exactly which files were loaded (path, source, SHA-256)
//! so that a scan can be attributed to the configuration that produced it.
//! The catalog fingerprint hashes the *effective* catalog and exclusion set,
//! not the overlay file, so the same built-in tables always fingerprint the
//! same regardless of where they came from.

use chrono::{DateTime, Utc};
use recy_common::{Catalog, ExclusionFilter};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::overlay::CatalogOverlay;
use crate::resolve::{ConfigPaths, ConfigSource};
use crate::settings::Settings;

/// A frozen snapshot of configuration state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ConfigSnapshot {
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,

    /// Schema version of the configuration.
    pub schema_version: String,

    #[serde(default)]
    pub settings_path: Option<String>,
    pub settings_source: String,
    /// SHA-256 of the settings file content.
    #[serde(default)]
    pub settings_hash: Option<String>,

    #[serde(default)]
    pub catalog_path: Option<String>,
    pub catalog_source: String,
    /// SHA-256 of the overlay file content.
    #[serde(default)]
    pub catalog_hash: Option<String>,

    /// Combined hash of both files (for quick comparison).
    pub combined_hash: String,

    /// Key configuration values for quick reference.
    pub summary: ConfigSummary,
}

/// Summary of key configuration values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigSummary {
    pub history_enabled: bool,
    pub history_max_size_bytes: u64,
    pub min_confidence: f64,
    /// Overlay rows for the Specific Items table.
    pub overlay_specific_items: usize,
    /// Overlay rows for the Material Classes table.
    pub overlay_material_classes: usize,
    /// Exclusion terms added by the overlay.
    pub overlay_exclusions: usize,
}

impl ConfigSnapshot {
    /// Create a snapshot from loaded configuration and the raw file contents.
    pub fn new(
        settings: &Settings,
        overlay: Option<&CatalogOverlay>,
        paths: &ConfigPaths,
        settings_json: Option<&str>,
        catalog_json: Option<&str>,
    ) -> Self {
        let settings_hash = settings_json.map(hash_content);
        let catalog_hash = catalog_json.map(hash_content);

        let combined = format!(
            "{}:{}",
            settings_hash.as_deref().unwrap_or("none"),
            catalog_hash.as_deref().unwrap_or("none")
        );

        ConfigSnapshot {
            timestamp: Utc::now(),
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            settings_path: paths.settings.as_ref().map(|p| p.display().to_string()),
            settings_source: paths.settings_source.to_string(),
            settings_hash,
            catalog_path: paths.catalog.as_ref().map(|p| p.display().to_string()),
            catalog_source: paths.catalog_source.to_string(),
            catalog_hash,
            combined_hash: hash_content(&combined),
            summary: ConfigSummary::new(settings, overlay),
        }
    }

    /// Snapshot with no files loaded.
    pub fn defaults_only() -> Self {
        Self::new(
            &Settings::default(),
            None,
            &ConfigPaths {
                settings_source: ConfigSource::BuiltinDefault,
                catalog_source: ConfigSource::BuiltinDefault,
                ..ConfigPaths::default()
            },
            None,
            None,
        )
    }

    /// True when both snapshots loaded identical file contents.
    pub fn matches(&self, other: &ConfigSnapshot) -> bool {
        self.combined_hash == other.combined_hash
    }

    /// First 12 chars of the combined hash.
    pub fn short_id(&self) -> &str {
        &self.combined_hash[..12.min(self.combined_hash.len())]
    }
}

impl ConfigSummary {
    fn new(settings: &Settings, overlay: Option<&CatalogOverlay>) -> Self {
        ConfigSummary {
            history_enabled: settings.history.enabled,
            history_max_size_bytes: settings.history.max_size_bytes,
            min_confidence: settings.scan.min_confidence,
            overlay_specific_items: overlay.map_or(0, |o| o.specific_items.len()),
            overlay_material_classes: overlay.map_or(0, |o| o.material_classes.len()),
            overlay_exclusions: overlay.map_or(0, |o| o.exclusions.len()),
        }
    }
}

/// Fingerprint of the effective catalog and exclusion set.
///
/// Hashes table name, key, and serialized guidance for every entry in search
/// order, then the fallback and exclusion terms. Any change in order or
/// content changes the fingerprint.
pub fn catalog_fingerprint(catalog: &Catalog, exclusions: &ExclusionFilter) -> String {
    let mut hasher = Sha256::new();
    for (kind, _, entry) in catalog.entries() {
        hasher.update(kind.name().as_bytes());
        hasher.update([0u8]);
        hasher.update(entry.key().as_bytes());
        hasher.update([0u8]);
        // RecyclingCategory is plain strings and enums; serialization cannot fail.
        if let Ok(json) = serde_json::to_vec(entry.guidance()) {
            hasher.update(&json);
        }
        hasher.update([b'\n']);
    }
    if let Ok(json) = serde_json::to_vec(catalog.fallback()) {
        hasher.update(&json);
    }
    for term in exclusions.terms() {
        hasher.update([0u8]);
        hasher.update(term.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Hash content with SHA-256 and return hex string.
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_snapshot() {
        let snapshot = ConfigSnapshot::defaults_only();
        assert_eq!(snapshot.schema_version, crate::CONFIG_SCHEMA_VERSION);
        assert!(snapshot.settings_hash.is_none());
        assert!(snapshot.catalog_hash.is_none());
        assert_eq!(snapshot.settings_source, "builtin default");
        assert!(snapshot.summary.history_enabled);
        assert_eq!(snapshot.short_id().len(), 12);
    }

    #[test]
    fn test_snapshot_matches_on_content() {
        let s1 = ConfigSnapshot::defaults_only();
        let s2 = ConfigSnapshot::defaults_only();
        assert!(s1.matches(&s2));

        let s3 = ConfigSnapshot::new(
            &Settings::default(),
            None,
            &ConfigPaths::default(),
            Some("{}"),
            None,
        );
        assert!(!s1.matches(&s3));
    }

    #[test]
    fn test_hash_content() {
        let hash = hash_content("test");
        assert_eq!(hash, hash_content("test"));
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_catalog_fingerprint_stable_and_sensitive() {
        let catalog = Catalog::builtin();
        let filter = ExclusionFilter::builtin();
        let a = catalog_fingerprint(catalog, &filter);
        assert_eq!(a, catalog_fingerprint(catalog, &filter));
        assert_eq!(a.len(), 64);

        let extended = ExclusionFilter::builtin().extend(["sky"]);
        assert_ne!(a, catalog_fingerprint(catalog, &extended));
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let snapshot = ConfigSnapshot::defaults_only();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: ConfigSnapshot = serde_json::from_str(&json).unwrap();
        assert!(snapshot.matches(&restored));
        assert_eq!(snapshot.summary, restored.summary);
    }
}

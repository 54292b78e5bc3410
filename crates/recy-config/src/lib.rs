//! Recycling resolver configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for settings.json and catalog.json (the catalog overlay)
//! - Config resolution (CLI → env → XDG → /etc → defaults)
//! - Semantic validation
//! - Config snapshots and catalog fingerprints for scan history

pub mod load;
pub mod overlay;
pub mod resolve;
pub mod settings;
pub mod snapshot;
pub mod validate;

pub use load::{load_config, load_overlay, load_settings, ConfigError, ConfigOptions, LoadedConfig};
pub use overlay::{CatalogOverlay, OverlayEntry};
pub use resolve::{resolve_config, ConfigPaths, ConfigSource};
pub use settings::Settings;
pub use snapshot::{catalog_fingerprint, ConfigSnapshot};
pub use validate::{ValidationError, ValidationResult};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";

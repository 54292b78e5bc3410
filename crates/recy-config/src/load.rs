//! Loading: resolve paths, read, parse, validate, snapshot.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::overlay::CatalogOverlay;
use crate::resolve::{resolve_config, ConfigPaths};
use crate::settings::Settings;
use crate::snapshot::ConfigSnapshot;
use crate::validate::{validate_overlay, validate_settings, ValidationError};

/// Errors that can occur during config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid JSON in config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation failed for {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("I/O error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Path of the file that failed.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::NotFound { path }
            | ConfigError::ParseError { path, .. }
            | ConfigError::Invalid { path, .. }
            | ConfigError::IoError { path, .. } => path,
        }
    }
}

/// Configuration loading options (usually straight from CLI flags).
#[derive(Debug, Default, Clone)]
pub struct ConfigOptions {
    /// Explicit settings file path.
    pub settings_path: Option<PathBuf>,
    /// Explicit catalog overlay path.
    pub catalog_path: Option<PathBuf>,
}

/// Loaded and validated configuration with provenance.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub settings: Settings,
    /// None when no overlay file was found.
    pub overlay: Option<CatalogOverlay>,
    pub paths: ConfigPaths,
    pub snapshot: ConfigSnapshot,
}

/// Load configuration with the standard resolution order.
pub fn load_config(options: &ConfigOptions) -> Result<LoadedConfig, ConfigError> {
    let paths = resolve_config(
        options.settings_path.as_deref(),
        options.catalog_path.as_deref(),
    );

    let (settings, settings_json) = match &paths.settings {
        Some(path) => {
            let raw = read_file(path)?;
            let settings = parse_settings(path, &raw)?;
            (settings, Some(raw))
        }
        None => (Settings::default(), None),
    };

    let (overlay, catalog_json) = match &paths.catalog {
        Some(path) => {
            let raw = read_file(path)?;
            let overlay = parse_overlay(path, &raw)?;
            (Some(overlay), Some(raw))
        }
        None => (None, None),
    };

    let snapshot = ConfigSnapshot::new(
        &settings,
        overlay.as_ref(),
        &paths,
        settings_json.as_deref(),
        catalog_json.as_deref(),
    );

    Ok(LoadedConfig {
        settings,
        overlay,
        paths,
        snapshot,
    })
}

/// Read, parse, and validate one overlay file.
pub fn load_overlay(path: &Path) -> Result<CatalogOverlay, ConfigError> {
    let raw = read_file(path)?;
    parse_overlay(path, &raw)
}

/// Read, parse, and validate one settings file.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let raw = read_file(path)?;
    parse_settings(path, &raw)
}

fn parse_settings(path: &Path, raw: &str) -> Result<Settings, ConfigError> {
    let settings: Settings =
        serde_json::from_str(raw).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
    validate_settings(&settings).map_err(|source| ConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(settings)
}

fn parse_overlay(path: &Path, raw: &str) -> Result<CatalogOverlay, ConfigError> {
    let overlay: CatalogOverlay =
        serde_json::from_str(raw).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
    validate_overlay(&overlay).map_err(|source| ConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(overlay)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::IoError {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

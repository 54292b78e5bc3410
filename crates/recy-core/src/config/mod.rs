//! Effective configuration for the resolver.
//!
//! Loads settings and the optional catalog overlay through `recy-config`,
//! merges the overlay into the built-in catalog, and computes the catalog
//! fingerprint recorded in scan history.

pub use recy_config::{
    load_config, load_overlay, load_settings, CatalogOverlay, ConfigError, ConfigOptions,
    ConfigSnapshot, LoadedConfig, Settings, ValidationError,
};

use recy_common::{Catalog, ExclusionFilter, MergeOutcome};
use recy_config::catalog_fingerprint;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

use crate::exit_codes::ExitCode;
use crate::resolver::Resolver;

/// Errors while assembling the effective configuration.
#[derive(Debug, Error)]
pub enum EffectiveConfigError {
    #[error(transparent)]
    Load(#[from] ConfigError),

    #[error("invalid catalog overlay {path}: {source}")]
    Overlay {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("catalog overlay rejected: {0}")]
    Catalog(#[from] recy_common::Error),
}

impl EffectiveConfigError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            EffectiveConfigError::Load(ConfigError::IoError { .. }) => ExitCode::IoError,
            EffectiveConfigError::Load(ConfigError::NotFound { .. }) => ExitCode::ArgsError,
            _ => ExitCode::ConfigError,
        }
    }
}

/// Loaded configuration plus the resolver it produces.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub loaded: LoadedConfig,
    pub resolver: Resolver<'static>,
    /// How each overlay entry landed in the catalog.
    pub merges: Vec<MergeOutcome>,
    /// Fingerprint of the effective catalog and exclusions.
    pub fingerprint: String,
}

impl EffectiveConfig {
    pub fn settings(&self) -> &Settings {
        &self.loaded.settings
    }

    pub fn snapshot(&self) -> &ConfigSnapshot {
        &self.loaded.snapshot
    }
}

/// Load configuration and build the resolver.
pub fn load_effective(options: &ConfigOptions) -> Result<EffectiveConfig, EffectiveConfigError> {
    let loaded = load_config(options)?;

    let (resolver, merges) = match &loaded.overlay {
        Some(overlay) => {
            let path = loaded.paths.catalog.clone().unwrap_or_default();
            build_resolver(overlay).map_err(|err| match err {
                BuildError::Overlay(source) => EffectiveConfigError::Overlay { path, source },
                BuildError::Catalog(err) => EffectiveConfigError::Catalog(err),
            })?
        }
        None => (Resolver::builtin(), Vec::new()),
    };

    let fingerprint = catalog_fingerprint(resolver.catalog(), resolver.exclusions());
    info!(
        settings = %loaded.paths.settings_source,
        catalog = %loaded.paths.catalog_source,
        catalog_entries = resolver.catalog().len(),
        exclusions = resolver.exclusions().terms().len(),
        fingerprint = &fingerprint[..12],
        "configuration loaded"
    );

    Ok(EffectiveConfig {
        loaded,
        resolver,
        merges,
        fingerprint,
    })
}

/// Why an overlay could not be applied.
#[derive(Debug)]
pub enum BuildError {
    Overlay(ValidationError),
    Catalog(recy_common::Error),
}

/// Merge an overlay into the built-in catalog and exclusions.
pub fn build_resolver(
    overlay: &CatalogOverlay,
) -> Result<(Resolver<'static>, Vec<MergeOutcome>), BuildError> {
    let (specific, materials) = overlay.entries().map_err(BuildError::Overlay)?;
    let (catalog, merges) = Catalog::builtin()
        .with_overlay(specific, materials)
        .map_err(BuildError::Catalog)?;
    for merge in &merges {
        debug!(?merge, "overlay entry merged");
    }
    let exclusions = ExclusionFilter::builtin().extend(&overlay.exclusions);
    Ok((Resolver::owned(catalog, exclusions), merges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use recy_common::{Category, CatalogKind};

    fn overlay(json: &str) -> CatalogOverlay {
        CatalogOverlay::from_str(json).unwrap()
    }

    #[test]
    fn test_overlay_replaces_in_place() {
        let (resolver, merges) = build_resolver(&overlay(
            r#"{"specific_items": [
                {"key": "bottle", "category": "Landfill", "instructions": "Bin it"}
            ]}"#,
        ))
        .unwrap();
        assert_eq!(
            merges,
            vec![MergeOutcome::Replaced {
                kind: CatalogKind::SpecificItems,
                index: 0
            }]
        );
        assert_eq!(
            resolver.resolve("Plastic Bottle").map(|g| g.category),
            Some(Category::Landfill)
        );
        // Key spelling of the built-in entry is kept.
        assert_eq!(resolver.explain("Plastic Bottle").key(), Some("Bottle"));
    }

    #[test]
    fn test_overlay_appends_and_excludes() {
        let (resolver, merges) = build_resolver(&overlay(
            r#"{
                "material_classes": [
                    {"key": "Ceramic", "category": "Landfill", "instructions": "Bin it"}
                ],
                "exclusions": ["Sky"]
            }"#,
        ))
        .unwrap();
        assert!(matches!(
            merges[0],
            MergeOutcome::Appended {
                kind: CatalogKind::MaterialClasses,
                ..
            }
        ));
        assert_eq!(
            resolver.resolve("ceramic plate").map(|g| g.category),
            Some(Category::Landfill)
        );
        assert!(resolver.resolve("sky").is_none());
    }

    #[test]
    fn test_overlay_bad_category_is_rejected() {
        let err = build_resolver(&overlay(
            r#"{"specific_items": [
                {"key": "Egg", "category": "Reusable", "instructions": "x"}
            ]}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, BuildError::Overlay(_)));
    }

    #[test]
    fn test_exit_code_mapping() {
        let err = EffectiveConfigError::Load(ConfigError::NotFound {
            path: PathBuf::from("/missing"),
        });
        assert_eq!(err.exit_code(), ExitCode::ArgsError);
        let err = EffectiveConfigError::Catalog(recy_common::Error::InvalidCatalog("x".into()));
        assert_eq!(err.exit_code(), ExitCode::ConfigError);
    }
}

//! Configuration resolution and path discovery.
//!
//! Resolution order: CLI arguments → environment variables → XDG paths → /etc → defaults.

use std::path::{Path, PathBuf};

/// Discovered configuration file paths.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Path to settings.json (or None if not found).
    pub settings: Option<PathBuf>,

    /// Path to catalog.json (or None if not found).
    pub catalog: Option<PathBuf>,

    /// Source of the settings file (for diagnostics).
    pub settings_source: ConfigSource,

    /// Source of the catalog overlay (for diagnostics).
    pub catalog_source: ConfigSource,
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Found in /etc/recycling-resolver/.
    SystemConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::SystemConfig => write!(f, "system config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Environment variable names.
pub const ENV_SETTINGS_PATH: &str = "RECY_SETTINGS";
pub const ENV_CATALOG_PATH: &str = "RECY_CATALOG";
pub const ENV_CONFIG_DIR: &str = "RECY_CONFIG_DIR";

/// Standard config file names.
pub const SETTINGS_FILENAME: &str = "settings.json";
pub const CATALOG_FILENAME: &str = "catalog.json";

/// Application name for XDG directories.
pub const APP_NAME: &str = "recycling-resolver";

/// Resolve configuration paths using the standard resolution order.
///
/// Resolution order for each config file:
/// 1. Explicit CLI path (returned even if missing, so loading reports it)
/// 2. Environment variable (RECY_SETTINGS, RECY_CATALOG)
/// 3. RECY_CONFIG_DIR environment variable + filename
/// 4. XDG config directory (~/.config/recycling-resolver/)
/// 5. System config (/etc/recycling-resolver/)
/// 6. Built-in defaults (None)
pub fn resolve_config(cli_settings: Option<&Path>, cli_catalog: Option<&Path>) -> ConfigPaths {
    let (settings, settings_source) =
        resolve_single_config(cli_settings, ENV_SETTINGS_PATH, SETTINGS_FILENAME);
    let (catalog, catalog_source) =
        resolve_single_config(cli_catalog, ENV_CATALOG_PATH, CATALOG_FILENAME);

    ConfigPaths {
        settings,
        catalog,
        settings_source,
        catalog_source,
    }
}

fn resolve_single_config(
    cli_path: Option<&Path>,
    env_var: &str,
    filename: &str,
) -> (Option<PathBuf>, ConfigSource) {
    // A path the user typed is never silently skipped.
    if let Some(path) = cli_path {
        return (Some(path.to_path_buf()), ConfigSource::CliArgument);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return (Some(path), ConfigSource::Environment);
        }
    }

    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(filename);
        if path.exists() {
            return (Some(path), ConfigSource::Environment);
        }
    }

    if let Some(dir) = xdg_config_dir() {
        let path = dir.join(filename);
        if path.exists() {
            return (Some(path), ConfigSource::XdgConfig);
        }
    }

    let system_path = system_config_dir().join(filename);
    if system_path.exists() {
        return (Some(system_path), ConfigSource::SystemConfig);
    }

    (None, ConfigSource::BuiltinDefault)
}

/// XDG config directory for the resolver.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// System config directory.
pub fn system_config_dir() -> PathBuf {
    PathBuf::from("/etc").join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::CliArgument.to_string(), "CLI argument");
        assert_eq!(ConfigSource::Environment.to_string(), "environment variable");
        assert_eq!(ConfigSource::BuiltinDefault.to_string(), "builtin default");
    }

    #[test]
    fn test_cli_path_kept_even_when_missing() {
        let missing = Path::new("/nonexistent/recy/settings.json");
        let paths = resolve_config(Some(missing), None);
        assert_eq!(paths.settings.as_deref(), Some(missing));
        assert_eq!(paths.settings_source, ConfigSource::CliArgument);
    }

    #[test]
    fn test_system_config_dir() {
        assert_eq!(
            system_config_dir(),
            PathBuf::from("/etc/recycling-resolver")
        );
    }

    #[test]
    fn test_xdg_config_dir() {
        if let Some(path) = xdg_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }
}

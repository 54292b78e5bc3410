//! Logging setup for the `recy` binary.
//!
//! stdout carries command payloads only; every log line goes to stderr,
//! either human-readable (ANSI when stderr is a terminal) or as JSON lines.
//!
//! ```ignore
//! use recy_core::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig::from_env(None, None);
//! init_logging(&config);
//! tracing::info!(scan_id = "scan-20260115-143022-a7xq", "scan started");
//! ```

pub mod config;

pub use config::{LevelSource, LogConfig, LogFormat, LogLevel, ENV_LOG_FORMAT, ENV_LOG_LEVEL};

use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Crates whose events pass the default filter.
const LOG_TARGETS: &[&str] = &["recy_core", "recy_config", "recy_common", "recy"];

/// Build the env filter: `RUST_LOG` when no level was chosen explicitly,
/// otherwise the configured level for this workspace's crates.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    if config.level_source == LevelSource::Default {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }
    let directives = LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={}", config.level))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

/// Install the global subscriber. Call once at startup; later calls are
/// ignored.
pub fn init_logging(config: &LogConfig) {
    let filter = build_filter(config);

    let result = match config.format {
        LogFormat::Human => {
            let use_ansi = std::io::stderr().is_terminal();
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_ansi(use_ansi);

            if !config.without_time {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer.without_time())
                    .try_init()
            }
        }
        LogFormat::Jsonl => {
            let json_layer = fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
        }
    };

    if let Err(err) = result {
        tracing::debug!(error = %err, "logging already initialized");
    }
}

/// Initialize logging from the environment only.
pub fn init_default_logging() {
    init_logging(&LogConfig::from_env(None, None));
}

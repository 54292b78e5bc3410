//! Recycling Resolver CLI
//!
//! The `recy` binary: resolve labels, run scans over vision-service
//! payloads, share guidance, and inspect history, catalog, configuration
//! and schemas.

use clap::{Args, Parser, Subcommand};
use recy_common::error::{format_error_human, StructuredError};
use recy_common::{CatalogKind, Error, OutputFormat, SCHEMA_VERSION};
use recy_core::config::{
    load_effective, load_overlay, load_settings, ConfigError, ConfigOptions, EffectiveConfig,
    EffectiveConfigError,
};
use recy_core::exit_codes::ExitCode;
use recy_core::history::{HistoryLog, HistoryLogConfig, ScanRecord};
use recy_core::logging::{init_logging, LogConfig, LogFormat};
use recy_core::output::{
    render_catalog, render_explained, render_history, render_report, to_json_pretty,
};
use recy_core::schema::{available_schemas, format_schema, generate_all_schemas, generate_schema, SchemaFormat};
use recy_core::{share, FileSink, ScanOptions, ScanPipeline, ShareOutcome, StdoutSink};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// Recycling Resolver - disposal guidance for detected objects
#[derive(Parser)]
#[command(name = "recy")]
#[command(
    author,
    version,
    about = "Recycling Resolver - disposal guidance for detected objects",
    long_about = None
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log format on stderr
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Settings file (overrides RECY_SETTINGS and config dirs)
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Catalog overlay file (overrides RECY_CATALOG and config dirs)
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Scan history directory
    #[arg(long, global = true, value_name = "PATH")]
    history_dir: Option<PathBuf>,

    /// Do not append scans to history
    #[arg(long, global = true)]
    no_history: bool,
}

impl GlobalOpts {
    fn config_options(&self) -> ConfigOptions {
        ConfigOptions {
            settings_path: self.settings.clone(),
            catalog_path: self.catalog.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more labels to disposal guidance
    Resolve(ResolveArgs),

    /// Resolve and rank a vision-service payload
    Scan(ScanArgs),

    /// Render shareable text for a label's guidance
    Share(ShareArgs),

    /// Inspect scan history
    History(HistoryArgs),

    /// Inspect the recycling catalog
    Catalog(CatalogArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Emit JSON schemas for exchanged payloads
    Schema(SchemaArgs),

    /// Print version information
    Version,
}

// ============================================================================
// Command argument structs
// ============================================================================

#[derive(Args, Debug)]
struct ResolveArgs {
    /// Labels as reported by the vision service
    #[arg(required = true, num_args = 1..)]
    labels: Vec<String>,
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// JSON payload file, or - for stdin
    #[arg(default_value = "-")]
    input: String,
}

#[derive(Args, Debug)]
struct ShareArgs {
    /// Label to look up
    label: String,

    /// Item name shown in the text (defaults to the label)
    #[arg(long)]
    name: Option<String>,

    /// Write the text to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct HistoryArgs {
    #[command(subcommand)]
    command: HistoryCommands,
}

#[derive(Subcommand, Debug)]
enum HistoryCommands {
    /// List recent scans, oldest first
    List {
        /// Maximum scans to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Print the history file path
    Path,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    #[command(subcommand)]
    command: CatalogCommands,
}

#[derive(Subcommand, Debug)]
enum CatalogCommands {
    /// List catalog entries in search order
    List {
        /// Only the Material Classes table
        #[arg(long, conflicts_with = "items")]
        materials: bool,

        /// Only the Specific Items table
        #[arg(long)]
        items: bool,
    },
    /// Validate the effective catalog
    Check,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show the effective configuration and where it came from
    Show,
    /// Validate configuration files
    Validate {
        /// A settings.json or catalog.json file (default: resolved files)
        path: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Type to emit
    type_name: Option<String>,

    /// List available types
    #[arg(long)]
    list: bool,

    /// Emit every schema
    #[arg(long, conflicts_with = "type_name")]
    all: bool,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

// ============================================================================
// Main entry point
// ============================================================================

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = if err.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Clean
            };
            std::process::exit(code.as_i32());
        }
    };

    let log_level = LogConfig::level_from_verbosity(cli.global.verbose, cli.global.quiet);
    init_logging(&LogConfig::from_env(log_level, cli.global.log_format));

    let exit_code = match &cli.command {
        Commands::Resolve(args) => run_resolve(&cli.global, args),
        Commands::Scan(args) => run_scan(&cli.global, args),
        Commands::Share(args) => run_share(&cli.global, args),
        Commands::History(args) => run_history(&cli.global, args),
        Commands::Catalog(args) => run_catalog(&cli.global, args),
        Commands::Config(args) => run_config(&cli.global, args),
        Commands::Schema(args) => run_schema(&cli.global, args),
        Commands::Version => {
            print_version(&cli.global);
            ExitCode::Clean
        }
    };

    std::process::exit(exit_code.as_i32());
}

// ============================================================================
// Command implementations
// ============================================================================

fn load(global: &GlobalOpts) -> Result<EffectiveConfig, ExitCode> {
    load_effective(&global.config_options()).map_err(|e| output_config_error(global, &e))
}

fn run_resolve(global: &GlobalOpts, args: &ResolveArgs) -> ExitCode {
    let config = match load(global) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let explained: Vec<_> = args
        .labels
        .iter()
        .map(|label| config.resolver.explain_label(label))
        .collect();

    println!("{}", render_explained(&explained, global.format));

    if explained.iter().all(|l| l.recycling_info.is_none()) {
        ExitCode::NothingResolvable
    } else {
        ExitCode::Clean
    }
}

fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(input)
    }
}

fn run_scan(global: &GlobalOpts, args: &ScanArgs) -> ExitCode {
    let config = match load(global) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let raw = match read_input(&args.input) {
        Ok(raw) => raw,
        Err(e) => {
            error!(input = %args.input, error = %e, "failed to read scan input");
            return output_error(global, &Error::Io(e));
        }
    };

    let options = ScanOptions {
        min_confidence: config.settings().scan.min_confidence,
    };
    let report = match ScanPipeline::new(&config.resolver, options).run_json(&raw) {
        Ok(report) => report,
        Err(e) => return output_error(global, &e),
    };

    println!("{}", render_report(&report, global.format));

    let history = &config.settings().history;
    if !global.no_history && history.enabled {
        let record = ScanRecord::from_report(&report, config.fingerprint.as_str());
        let appended = HistoryLog::open(HistoryLogConfig {
            max_size_bytes: history.max_size_bytes,
            dir: global.history_dir.clone().or_else(|| history.dir.clone()),
        })
        .and_then(|mut log| log.append(&record));
        if let Err(e) = appended {
            warn!(error = %e, "failed to append scan history");
            output_error(global, &e.into());
            return ExitCode::HistoryError;
        }
    }

    if report.has_guidance() {
        ExitCode::Clean
    } else {
        ExitCode::NothingResolvable
    }
}

fn run_share(global: &GlobalOpts, args: &ShareArgs) -> ExitCode {
    let config = match load(global) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let Some(guidance) = config.resolver.resolve(&args.label) else {
        eprintln!("{:?} is not a physical object; nothing to share", args.label);
        return ExitCode::NothingResolvable;
    };
    let name = args.name.as_deref().unwrap_or(&args.label);

    let outcome = match &args.out {
        Some(path) => {
            let outcome = share(&FileSink::new(path), name, guidance);
            match global.format {
                OutputFormat::Json => println!("{}", to_json_pretty(&outcome)),
                _ => {
                    if outcome.is_shared() {
                        println!("Shared {} to {}", name, path.display());
                    }
                }
            }
            outcome
        }
        None => share(&StdoutSink, name, guidance),
    };

    match outcome {
        ShareOutcome::Shared { .. } => ExitCode::Clean,
        ShareOutcome::Failed { reason, .. } => {
            output_error(global, &Error::ShareFailed(reason));
            ExitCode::ShareFailed
        }
    }
}

fn run_history(global: &GlobalOpts, args: &HistoryArgs) -> ExitCode {
    let history_dir = match &global.history_dir {
        Some(dir) => Some(dir.clone()),
        None => match load(global) {
            Ok(config) => config.settings().history.dir.clone(),
            Err(code) => return code,
        },
    };

    let log = match HistoryLog::open(HistoryLogConfig {
        dir: history_dir,
        ..HistoryLogConfig::default()
    }) {
        Ok(log) => log,
        Err(e) => {
            output_error(global, &e.into());
            return ExitCode::HistoryError;
        }
    };

    match &args.command {
        HistoryCommands::Path => {
            match global.format {
                OutputFormat::Json => println!(
                    "{}",
                    to_json_pretty(&serde_json::json!({ "path": log.path() }))
                ),
                _ => println!("{}", log.path().display()),
            }
            ExitCode::Clean
        }
        HistoryCommands::List { limit } => match log.read_all() {
            Ok(records) => {
                let start = records.len().saturating_sub(*limit);
                println!("{}", render_history(&records[start..], global.format));
                ExitCode::Clean
            }
            Err(e) => {
                output_error(global, &e.into());
                ExitCode::HistoryError
            }
        },
    }
}

fn run_catalog(global: &GlobalOpts, args: &CatalogArgs) -> ExitCode {
    let config = match load(global) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let catalog = config.resolver.catalog();

    match &args.command {
        CatalogCommands::List { materials, items } => {
            let kinds: &[CatalogKind] = if *materials {
                &[CatalogKind::MaterialClasses]
            } else if *items {
                &[CatalogKind::SpecificItems]
            } else {
                CatalogKind::all()
            };
            println!("{}", render_catalog(catalog, kinds, global.format));
            ExitCode::Clean
        }
        CatalogCommands::Check => match catalog.validate() {
            Ok(()) => {
                let response = serde_json::json!({
                    "schema_version": SCHEMA_VERSION,
                    "status": "ok",
                    "specific_items": catalog.specific_items().len(),
                    "material_classes": catalog.material_classes().len(),
                    "exclusions": config.resolver.exclusions().terms().len(),
                    "overlay_merges": &config.merges,
                    "fingerprint": &config.fingerprint,
                });
                match global.format {
                    OutputFormat::Json => println!("{}", to_json_pretty(&response)),
                    _ => println!(
                        "catalog check: OK ({} specific items, {} material classes, fingerprint {})",
                        catalog.specific_items().len(),
                        catalog.material_classes().len(),
                        short_fingerprint(&config.fingerprint)
                    ),
                }
                ExitCode::Clean
            }
            Err(e) => output_error(global, &e),
        },
    }
}

fn run_config(global: &GlobalOpts, args: &ConfigArgs) -> ExitCode {
    match &args.command {
        ConfigCommands::Show => run_config_show(global),
        ConfigCommands::Validate { path } => run_config_validate(global, path.as_deref()),
    }
}

/// Display the effective configuration (defaults when no files are present).
fn run_config_show(global: &GlobalOpts) -> ExitCode {
    let config = match load(global) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let snapshot = config.snapshot();

    let response = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "snapshot": snapshot,
        "settings": config.settings(),
        "overlay": &config.loaded.overlay,
        "catalog_fingerprint": &config.fingerprint,
    });

    match global.format {
        OutputFormat::Json => println!("{}", to_json_pretty(&response)),
        OutputFormat::Summary => {
            println!(
                "config: settings={} catalog={} fingerprint={}",
                snapshot.settings_path.as_deref().unwrap_or("built-in defaults"),
                snapshot.catalog_path.as_deref().unwrap_or("built-in catalog"),
                short_fingerprint(&config.fingerprint)
            );
        }
        _ => {
            println!("# recy config show");
            println!();
            println!("## Settings");
            match &snapshot.settings_path {
                Some(path) => {
                    println!("Source: {} ({})", path, snapshot.settings_source);
                    println!("Hash: {}", snapshot.settings_hash.as_deref().unwrap_or("n/a"));
                }
                None => println!("Source: **built-in defaults** (no settings.json found)"),
            }
            println!("History enabled: {}", snapshot.summary.history_enabled);
            println!("History max size: {} bytes", snapshot.summary.history_max_size_bytes);
            println!("Min confidence: {}", snapshot.summary.min_confidence);
            println!();
            println!("## Catalog");
            match &snapshot.catalog_path {
                Some(path) => {
                    println!("Overlay: {} ({})", path, snapshot.catalog_source);
                    println!("Hash: {}", snapshot.catalog_hash.as_deref().unwrap_or("n/a"));
                }
                None => println!("Overlay: none (built-in catalog)"),
            }
            println!(
                "Overlay rows: {} specific items, {} material classes, {} exclusions",
                snapshot.summary.overlay_specific_items,
                snapshot.summary.overlay_material_classes,
                snapshot.summary.overlay_exclusions
            );
            println!("Fingerprint: {}", config.fingerprint);
        }
    }

    ExitCode::Clean
}

/// Validate one file, or the resolved files when no path is given.
fn run_config_validate(global: &GlobalOpts, path: Option<&Path>) -> ExitCode {
    let result = match path {
        Some(path) => validate_file(path),
        None => load(global).map(|_| "resolved configuration".to_string()),
    };

    match result {
        Ok(what) => {
            match global.format {
                OutputFormat::Json => println!(
                    "{}",
                    to_json_pretty(&serde_json::json!({
                        "schema_version": SCHEMA_VERSION,
                        "status": "valid",
                        "validated": what,
                    }))
                ),
                _ => println!("config validate: OK ({what})"),
            }
            ExitCode::Clean
        }
        Err(code) => code,
    }
}

fn validate_file(path: &Path) -> Result<String, ExitCode> {
    let is_catalog = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.contains("catalog"));
    if is_catalog {
        load_overlay(path)
            .map(|_| format!("catalog overlay {}", path.display()))
            .map_err(|e| output_load_error(&e))
    } else {
        load_settings(path)
            .map(|_| format!("settings {}", path.display()))
            .map_err(|e| output_load_error(&e))
    }
}

fn run_schema(global: &GlobalOpts, args: &SchemaArgs) -> ExitCode {
    let format = if args.compact {
        SchemaFormat::JsonCompact
    } else {
        SchemaFormat::Json
    };

    if args.list {
        match global.format {
            OutputFormat::Json => {
                let list: Vec<_> = available_schemas()
                    .into_iter()
                    .map(|(name, description)| {
                        serde_json::json!({ "name": name, "description": description })
                    })
                    .collect();
                println!("{}", to_json_pretty(&list));
            }
            _ => {
                for (name, description) in available_schemas() {
                    println!("{:<20} {}", name, description);
                }
            }
        }
        return ExitCode::Clean;
    }

    if args.all {
        return match serde_json::to_value(generate_all_schemas()) {
            Ok(all) => {
                println!("{}", format_schema(&all, format));
                ExitCode::Clean
            }
            Err(e) => output_error(global, &Error::Json(e)),
        };
    }

    match args.type_name.as_deref() {
        Some(name) => match generate_schema(name) {
            Some(schema) => {
                println!("{}", format_schema(&schema, format));
                ExitCode::Clean
            }
            None => {
                eprintln!(
                    "unknown schema type {name:?}; run `recy schema --list` for available types"
                );
                ExitCode::ArgsError
            }
        },
        None => {
            eprintln!("specify a type, --list, or --all");
            ExitCode::ArgsError
        }
    }
}

fn print_version(global: &GlobalOpts) {
    let version_info = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "recy_version": env!("CARGO_PKG_VERSION"),
        "rust_version": env!("CARGO_PKG_RUST_VERSION"),
    });

    match global.format {
        OutputFormat::Json => println!("{}", to_json_pretty(&version_info)),
        _ => {
            println!("recy {}", env!("CARGO_PKG_VERSION"));
            println!("schema version: {}", SCHEMA_VERSION);
        }
    }
}

// ============================================================================
// Error output
// ============================================================================

/// Write an error to stderr in the requested format.
fn output_error(global: &GlobalOpts, err: &Error) -> ExitCode {
    match global.format {
        OutputFormat::Json => {
            let structured = StructuredError::from(err);
            eprintln!(
                "{}",
                to_json_pretty(&serde_json::json!({
                    "schema_version": SCHEMA_VERSION,
                    "status": "error",
                    "error": structured,
                }))
            );
        }
        OutputFormat::Summary => eprintln!("error [{}]: {}", err.code(), err),
        _ => eprintln!("{}", format_error_human(err, std::io::stderr().is_terminal())),
    }
    ExitCode::for_error(err)
}

fn output_config_error(global: &GlobalOpts, err: &EffectiveConfigError) -> ExitCode {
    let exit_code = err.exit_code();
    match global.format {
        OutputFormat::Json => {
            let mut body = serde_json::json!({
                "code": exit_code.as_i32(),
                "code_name": exit_code.code_name(),
                "message": err.to_string(),
            });
            if let EffectiveConfigError::Load(load) = err {
                body["path"] = serde_json::json!(load.path());
            }
            eprintln!(
                "{}",
                to_json_pretty(&serde_json::json!({
                    "schema_version": SCHEMA_VERSION,
                    "status": "error",
                    "error": body,
                }))
            );
        }
        _ => {
            eprintln!("# Configuration Error");
            eprintln!();
            eprintln!("Error: {}", err);
        }
    }
    exit_code
}

fn output_load_error(err: &ConfigError) -> ExitCode {
    eprintln!("config validate: {}", err);
    match err {
        ConfigError::IoError { .. } => ExitCode::IoError,
        ConfigError::NotFound { .. } => ExitCode::ArgsError,
        _ => ExitCode::ConfigError,
    }
}

fn short_fingerprint(fingerprint: &str) -> &str {
    fingerprint.get(..12).unwrap_or(fingerprint)
}

//! Recycling Resolver Core Library
//!
//! This library provides the core functionality for turning image labels
//! into disposal guidance:
//! - Label resolution against the recycling catalog
//! - Stable ranking of resolved labels for presentation
//! - The scan pipeline and append-only scan history
//! - Share text and share sinks
//! - Configuration, logging, exit codes, output rendering, JSON schemas
//!
//! The binary entry point is in `main.rs`.

pub mod config;
pub mod exit_codes;
pub mod history;
pub mod logging;
pub mod output;
pub mod ranker;
pub mod resolver;
pub mod scan;
pub mod schema;
pub mod share;

pub use ranker::rank;
pub use resolver::{ExplainedLabel, Resolution, Resolver};
pub use scan::{parse_scan_input, ScanOptions, ScanPipeline, ScanReport, ScanSummary};
pub use share::{share, share_text, FileSink, ShareError, ShareOutcome, ShareSink, StdoutSink};

//! Recycling resolver common types, catalog data, and errors.
//!
//! This crate provides foundational types shared across recy-config and recy-core:
//! - Recycling categories and the guidance record
//! - The built-in Category Catalog (specific items, material classes, fallback)
//! - The Exclusion Filter for non-object labels
//! - Detected/resolved label types at the vision-service boundary
//! - Scan IDs and schema versioning
//! - Common error types
//! - Output format specifications

pub mod catalog;
pub mod category;
pub mod error;
pub mod exclusion;
pub mod id;
pub mod label;
pub mod output;
pub mod schema;

pub use catalog::{Catalog, CatalogEntry, CatalogKind, MergeOutcome};
pub use category::{Category, RecyclingCategory};
pub use error::{Error, Result};
pub use exclusion::ExclusionFilter;
pub use id::ScanId;
pub use label::{DetectedLabel, ResolvedLabel};
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;

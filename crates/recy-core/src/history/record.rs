//! One line of scan history.

use chrono::{DateTime, Utc};
use recy_common::{ResolvedLabel, ScanId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scan::ScanReport;

/// Schema version for history records.
pub const HISTORY_SCHEMA_VERSION: &str = recy_common::SCHEMA_VERSION;

/// A completed scan as persisted in `history.jsonl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanRecord {
    pub schema_version: String,
    /// When the scan completed.
    pub ts: DateTime<Utc>,
    pub scan_id: ScanId,
    /// Fingerprint of the catalog and exclusions used.
    pub catalog_fingerprint: String,
    /// Ranked labels, as reported.
    pub labels: Vec<ResolvedLabel>,
}

impl ScanRecord {
    pub fn from_report(report: &ScanReport, catalog_fingerprint: impl Into<String>) -> Self {
        ScanRecord {
            schema_version: HISTORY_SCHEMA_VERSION.to_string(),
            ts: report.created_at,
            scan_id: report.scan_id.clone(),
            catalog_fingerprint: catalog_fingerprint.into(),
            labels: report.labels.clone(),
        }
    }

    /// Single-line JSON form.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

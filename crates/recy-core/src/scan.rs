//! Scan pipeline: vision payload in, ranked report out.
//!
//! parse → confidence filter → resolve each label → rank → report.
//! History persistence is left to the caller so the pipeline stays pure.

use chrono::{DateTime, Utc};
use recy_common::{Category, DetectedLabel, Error, ResolvedLabel, Result, ScanId, SCHEMA_VERSION};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::ranker::rank_owned;
use crate::resolver::Resolver;

/// Pipeline knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanOptions {
    /// Labels below this confidence are dropped before resolution.
    pub min_confidence: f64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            min_confidence: 0.0,
        }
    }
}

/// Per-category counts for a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanSummary {
    /// Labels received from the vision payload.
    pub detected: usize,
    /// Labels dropped for low confidence.
    pub below_confidence: usize,
    pub recyclable: usize,
    pub compost: usize,
    pub landfill: usize,
    pub special_disposal: usize,
    pub unknown: usize,
    /// Labels that are not physical objects.
    pub excluded: usize,
}

impl ScanSummary {
    fn tally(detected: usize, below_confidence: usize, labels: &[ResolvedLabel]) -> Self {
        let mut summary = ScanSummary {
            detected,
            below_confidence,
            ..ScanSummary::default()
        };
        for label in labels {
            match label.recycling_info.as_ref().map(|info| info.category) {
                None => summary.excluded += 1,
                Some(Category::Recyclable) => summary.recyclable += 1,
                Some(Category::Compost) => summary.compost += 1,
                Some(Category::Landfill) => summary.landfill += 1,
                Some(Category::SpecialDisposal) => summary.special_disposal += 1,
                Some(Category::Unknown) => summary.unknown += 1,
            }
        }
        summary
    }

    /// Labels that received guidance (matched or fallback).
    pub fn resolved(&self) -> usize {
        self.recyclable + self.compost + self.landfill + self.special_disposal + self.unknown
    }
}

/// Output of one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanReport {
    pub schema_version: String,
    pub scan_id: ScanId,
    pub created_at: DateTime<Utc>,
    /// Ranked labels.
    pub labels: Vec<ResolvedLabel>,
    pub summary: ScanSummary,
}

impl ScanReport {
    /// True when at least one label received guidance.
    pub fn has_guidance(&self) -> bool {
        self.summary.resolved() > 0
    }
}

/// Parse a vision payload: a bare label array or `{"labels": [...]}`.
///
/// Every label must carry a finite confidence in [0, 1]; the first offender
/// rejects the whole payload.
pub fn parse_scan_input(raw: &str) -> Result<Vec<DetectedLabel>> {
    let value: Value = serde_json::from_str(raw).map_err(|e| Error::InvalidScanInput {
        index: None,
        message: e.to_string(),
    })?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("labels") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(Error::InvalidScanInput {
                    index: None,
                    message: "\"labels\" must be an array".to_string(),
                })
            }
            None => {
                return Err(Error::InvalidScanInput {
                    index: None,
                    message: "expected an array of labels or an object with \"labels\""
                        .to_string(),
                })
            }
        },
        _ => {
            return Err(Error::InvalidScanInput {
                index: None,
                message: "expected an array of labels or an object with \"labels\"".to_string(),
            })
        }
    };

    let mut labels = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let label: DetectedLabel =
            serde_json::from_value(item).map_err(|e| Error::InvalidScanInput {
                index: Some(index),
                message: e.to_string(),
            })?;
        labels.push(label);
    }
    validate_labels(&labels)?;
    Ok(labels)
}

/// Reject labels whose confidence is NaN or outside [0, 1].
pub fn validate_labels(labels: &[DetectedLabel]) -> Result<()> {
    for (index, label) in labels.iter().enumerate() {
        if !(0.0..=1.0).contains(&label.confidence) {
            return Err(Error::InvalidScanInput {
                index: Some(index),
                message: format!(
                    "confidence {} for {:?} is outside [0, 1]",
                    label.confidence, label.name
                ),
            });
        }
    }
    Ok(())
}

/// Runs scans against a resolver.
#[derive(Debug, Clone)]
pub struct ScanPipeline<'r, 'c> {
    resolver: &'r Resolver<'c>,
    options: ScanOptions,
}

impl<'r, 'c> ScanPipeline<'r, 'c> {
    pub fn new(resolver: &'r Resolver<'c>, options: ScanOptions) -> Self {
        Self { resolver, options }
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Parse a raw payload and run it.
    pub fn run_json(&self, raw: &str) -> Result<ScanReport> {
        let labels = parse_scan_input(raw)?;
        Ok(self.run_labels(labels))
    }

    /// Run already-validated labels.
    pub fn run_labels(&self, labels: Vec<DetectedLabel>) -> ScanReport {
        let scan_id = ScanId::new();
        let detected = labels.len();
        info!(scan_id = %scan_id, detected, "scan started");

        let min = self.options.min_confidence;
        let kept: Vec<DetectedLabel> = labels
            .into_iter()
            .filter(|label| {
                let keep = label.confidence >= min;
                if !keep {
                    debug!(
                        label = %label.name,
                        confidence = label.confidence,
                        min_confidence = min,
                        "dropping low-confidence label"
                    );
                }
                keep
            })
            .collect();
        let below_confidence = detected - kept.len();

        let ranked = rank_owned(self.resolver.resolve_all(kept));
        let summary = ScanSummary::tally(detected, below_confidence, &ranked);

        info!(
            scan_id = %scan_id,
            resolved = summary.resolved(),
            excluded = summary.excluded,
            below_confidence,
            "scan completed"
        );

        ScanReport {
            schema_version: SCHEMA_VERSION.to_string(),
            scan_id,
            created_at: Utc::now(),
            labels: ranked,
            summary,
        }
    }
}

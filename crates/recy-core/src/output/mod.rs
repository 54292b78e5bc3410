//! Rendering of command payloads for the non-JSON output formats.
//!
//! JSON output is plain serde serialization and lives with the command; this
//! module owns the Markdown, one-line summary, and plain-text layouts.

use recy_common::{Catalog, CatalogKind, OutputFormat, RecyclingCategory, ResolvedLabel};
use serde::Serialize;
use std::fmt::Write as _;

use crate::history::ScanRecord;
use crate::resolver::ExplainedLabel;
use crate::scan::ScanReport;

/// Serialize to pretty JSON; a failure becomes a JSON error object so
/// stdout always carries valid JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| {
        serde_json::json!({ "error": "serialization_failed", "message": err.to_string() })
            .to_string()
    })
}

/// Escape a value for a Markdown table cell.
fn md_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

fn guidance_markdown(out: &mut String, guidance: &RecyclingCategory) {
    let _ = writeln!(out, "- **Category:** {}", guidance.category);
    let _ = writeln!(out, "- **Instructions:** {}", guidance.instructions);
    if let Some(info) = &guidance.additional_info {
        let _ = writeln!(out, "- **Additional info:** {info}");
    }
    if !guidance.preparation.is_empty() {
        let _ = writeln!(out, "- **Preparation:**");
        for (i, step) in guidance.preparation.iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", i + 1);
        }
    }
    if !guidance.common_mistakes.is_empty() {
        let _ = writeln!(out, "- **Common mistakes:**");
        for mistake in &guidance.common_mistakes {
            let _ = writeln!(out, "  - {mistake}");
        }
    }
}

fn guidance_text(out: &mut String, guidance: &RecyclingCategory) {
    let _ = writeln!(out, "  Category: {}", guidance.category);
    let _ = writeln!(out, "  Instructions: {}", guidance.instructions);
    if let Some(info) = &guidance.additional_info {
        let _ = writeln!(out, "  Additional info: {info}");
    }
    for step in &guidance.preparation {
        let _ = writeln!(out, "  • {step}");
    }
    for mistake in &guidance.common_mistakes {
        let _ = writeln!(out, "  ✗ {mistake}");
    }
}

/// Render `resolve` output.
pub fn render_explained(labels: &[ExplainedLabel], format: OutputFormat) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Json => out = to_json_pretty(&labels),
        OutputFormat::Summary => {
            let parts: Vec<String> = labels
                .iter()
                .map(|l| match &l.recycling_info {
                    Some(info) => format!("{}={}", l.label, info.category),
                    None => format!("{}=excluded", l.label),
                })
                .collect();
            let _ = write!(out, "resolve: {}", parts.join(", "));
        }
        OutputFormat::Md => {
            let _ = writeln!(out, "# Recycling guidance");
            for l in labels {
                let _ = writeln!(out);
                let _ = writeln!(out, "## {}", l.label);
                let _ = writeln!(out);
                let _ = writeln!(out, "_Matched: {}_", l.resolution.describe());
                let _ = writeln!(out);
                match &l.recycling_info {
                    Some(info) => guidance_markdown(&mut out, info),
                    None => {
                        let _ = writeln!(out, "Not a physical object; no guidance.");
                    }
                }
            }
        }
        OutputFormat::Text => {
            for (i, l) in labels.iter().enumerate() {
                if i > 0 {
                    let _ = writeln!(out);
                }
                let _ = writeln!(out, "{} ({})", l.label, l.resolution.describe());
                if let Some(info) = &l.recycling_info {
                    guidance_text(&mut out, info);
                }
            }
        }
    }
    out.trim_end().to_string()
}

fn label_line(label: &ResolvedLabel) -> String {
    let category = label
        .recycling_info
        .as_ref()
        .map(|info| info.category.to_string())
        .unwrap_or_else(|| "excluded".to_string());
    format!(
        "{} [{}] {}",
        label.name(),
        label.label.confidence_percent(),
        category
    )
}

/// Render a scan report.
pub fn render_report(report: &ScanReport, format: OutputFormat) -> String {
    let mut out = String::new();
    let s = &report.summary;
    match format {
        OutputFormat::Json => out = to_json_pretty(report),
        OutputFormat::Summary => {
            let _ = write!(
                out,
                "[{}] scan: {} labels, {} recyclable, {} compost, {} special, {} landfill, {} unknown, {} excluded",
                report.scan_id,
                s.detected,
                s.recyclable,
                s.compost,
                s.special_disposal,
                s.landfill,
                s.unknown,
                s.excluded
            );
        }
        OutputFormat::Md => {
            let _ = writeln!(out, "# Scan {}", report.scan_id);
            let _ = writeln!(out);
            let _ = writeln!(out, "Generated: {}", report.created_at.to_rfc3339());
            let _ = writeln!(out);
            let _ = writeln!(out, "| Label | Confidence | Category |");
            let _ = writeln!(out, "|-------|------------|----------|");
            for label in &report.labels {
                let category = label
                    .recycling_info
                    .as_ref()
                    .map(|info| info.category.to_string())
                    .unwrap_or_else(|| "—".to_string());
                let _ = writeln!(
                    out,
                    "| {} | {} | {} |",
                    md_cell(label.name()),
                    label.label.confidence_percent(),
                    category
                );
            }
            for label in report.labels.iter().filter(|l| !l.is_excluded()) {
                if let Some(info) = &label.recycling_info {
                    let _ = writeln!(out);
                    let _ = writeln!(out, "## {}", label.name());
                    let _ = writeln!(out);
                    guidance_markdown(&mut out, info);
                }
            }
            if s.below_confidence > 0 {
                let _ = writeln!(out);
                let _ = writeln!(
                    out,
                    "{} label(s) dropped below the confidence threshold.",
                    s.below_confidence
                );
            }
        }
        OutputFormat::Text => {
            let _ = writeln!(out, "Scan {}", report.scan_id);
            for label in &report.labels {
                let _ = writeln!(out, "{}", label_line(label));
                if let Some(info) = &label.recycling_info {
                    guidance_text(&mut out, info);
                }
            }
        }
    }
    out.trim_end().to_string()
}

/// Render history records (newest last).
pub fn render_history(records: &[ScanRecord], format: OutputFormat) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Json => out = to_json_pretty(&records),
        OutputFormat::Summary => {
            let _ = write!(out, "history: {} scan(s)", records.len());
        }
        OutputFormat::Md => {
            let _ = writeln!(out, "# Scan history");
            let _ = writeln!(out);
            let _ = writeln!(out, "| Scan | Time | Labels | Top category |");
            let _ = writeln!(out, "|------|------|--------|--------------|");
            for r in records {
                let top = r
                    .labels
                    .first()
                    .map(|l| l.category().to_string())
                    .unwrap_or_else(|| "—".to_string());
                let _ = writeln!(
                    out,
                    "| {} | {} | {} | {} |",
                    r.scan_id,
                    r.ts.to_rfc3339(),
                    r.labels.len(),
                    top
                );
            }
        }
        OutputFormat::Text => {
            for r in records {
                let names: Vec<&str> = r.labels.iter().map(|l| l.name()).collect();
                let _ = writeln!(out, "{} {} {}", r.scan_id, r.ts.to_rfc3339(), names.join(", "));
            }
        }
    }
    out.trim_end().to_string()
}

/// Render the catalog tables in search order.
pub fn render_catalog(catalog: &Catalog, kinds: &[CatalogKind], format: OutputFormat) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            let tables: serde_json::Map<String, serde_json::Value> = kinds
                .iter()
                .map(|kind| {
                    let rows: Vec<serde_json::Value> = catalog
                        .table(*kind)
                        .iter()
                        .map(|e| serde_json::json!({ "key": e.key(), "guidance": e.guidance() }))
                        .collect();
                    (kind.name().to_string(), serde_json::Value::Array(rows))
                })
                .collect();
            out = to_json_pretty(&tables);
        }
        OutputFormat::Summary => {
            let parts: Vec<String> = kinds
                .iter()
                .map(|kind| format!("{} {}", catalog.table(*kind).len(), kind))
                .collect();
            let _ = write!(out, "catalog: {}", parts.join(", "));
        }
        OutputFormat::Md => {
            for kind in kinds {
                let _ = writeln!(out, "## {}", kind);
                let _ = writeln!(out);
                let _ = writeln!(out, "| # | Key | Category |");
                let _ = writeln!(out, "|---|-----|----------|");
                for (i, e) in catalog.table(*kind).iter().enumerate() {
                    let _ = writeln!(out, "| {} | {} | {} |", i, md_cell(e.key()), e.category());
                }
                let _ = writeln!(out);
            }
        }
        OutputFormat::Text => {
            for kind in kinds {
                let _ = writeln!(out, "{}:", kind);
                for (i, e) in catalog.table(*kind).iter().enumerate() {
                    let _ = writeln!(out, "  {:>3} {:<24} {}", i, e.key(), e.category());
                }
            }
        }
    }
    out.trim_end().to_string()
}

//! Scan identifiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one capture-and-resolve run.
///
/// Format: `scan-YYYYMMDD-HHMMSS-XXXX`
/// Example: `scan-20260115-143022-a7xq`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ScanId(pub String);

const PREFIX: &str = "scan-";
const ID_LEN: usize = 25;

impl ScanId {
    /// Generate a new scan ID stamped with the current UTC time.
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        ScanId(format!(
            "{}{}-{}-{}",
            PREFIX,
            now.format("%Y%m%d"),
            now.format("%H%M%S"),
            generate_base32_suffix()
        ))
    }

    /// Parse an existing scan ID string.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != ID_LEN || !s.starts_with(PREFIX) {
            return None;
        }
        let bytes = s.as_bytes();
        if bytes.get(13) != Some(&b'-') || bytes.get(20) != Some(&b'-') {
            return None;
        }
        let date = &s[5..13];
        let time = &s[14..20];
        let suffix = &s[21..25];
        if !date.chars().all(|c| c.is_ascii_digit()) || !time.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }
        if !suffix.chars().all(|c| matches!(c, 'a'..='z' | '2'..='7')) {
            return None;
        }
        Some(ScanId(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ScanId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn generate_base32_suffix() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    let value = (((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | (bytes[2] as u32))
        & 0x000F_FFFF;
    let alphabet = b"abcdefghijklmnopqrstuvwxyz234567";
    let mut out = String::with_capacity(4);
    for shift in [15_u32, 10, 5, 0] {
        let idx = ((value >> shift) & 0x1F) as usize;
        out.push(alphabet[idx] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_id_format() {
        let id = ScanId::new();
        assert!(id.0.starts_with("scan-"));
        assert_eq!(id.0.len(), 25);
        assert_eq!(ScanId::parse(id.as_str()), Some(id));
    }

    #[test]
    fn test_scan_id_parse_rejects_malformed() {
        assert!(ScanId::parse("scan-20260115-143022-a7xq").is_some());
        assert!(ScanId::parse("pt-20260115-143022-a7xq").is_none());
        assert!(ScanId::parse("scan-2026011x-143022-a7xq").is_none());
        assert!(ScanId::parse("scan-20260115-143022-A7XQ").is_none());
        assert!(ScanId::parse("scan-20260115_143022-a7xq").is_none());
        assert!(ScanId::parse("").is_none());
    }

    #[test]
    fn test_scan_id_serializes_as_string() {
        let id = ScanId("scan-20260115-143022-a7xq".to_string());
        assert_eq!(id.to_string(), "scan-20260115-143022-a7xq");
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"scan-20260115-143022-a7xq\""
        );
    }
}

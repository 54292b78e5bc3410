//! Payload schema versioning.
//!
//! Scan reports and history records carry `schema_version`. The history
//! reader accepts any record with the same major version.

/// Current schema version for emitted payloads.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Major component of a semver-ish version string.
fn major(version: &str) -> Option<u64> {
    version.split('.').next()?.parse().ok()
}

/// True when `version` can be read by this build.
pub fn is_compatible(version: &str) -> bool {
    match (major(version), major(SCHEMA_VERSION)) {
        (Some(theirs), Some(ours)) => theirs == ours,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_major_is_compatible() {
        assert!(is_compatible(SCHEMA_VERSION));
        assert!(is_compatible("1.4.2"));
        assert!(!is_compatible("2.0.0"));
        assert!(!is_compatible("garbage"));
        assert!(!is_compatible(""));
    }
}

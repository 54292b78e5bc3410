//! Fuzz target for vision-service payload parsing.
//!
//! Malformed payloads should only produce errors; accepted payloads must run
//! through the pipeline.

#![no_main]

use libfuzzer_sys::fuzz_target;
use recy_core::{parse_scan_input, Resolver, ScanOptions, ScanPipeline};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(labels) = parse_scan_input(raw) {
        let resolver = Resolver::builtin();
        let count = labels.len();
        let report = ScanPipeline::new(&resolver, ScanOptions::default()).run_labels(labels);
        assert_eq!(report.labels.len(), count);
    }
});

//! Fuzz target for catalog.json overlays.
//!
//! Parsing and merging an overlay must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use recy_config::CatalogOverlay;
use recy_core::config::build_resolver;

fuzz_target!(|data: &[u8]| {
    if let Ok(overlay) = serde_json::from_slice::<CatalogOverlay>(data) {
        let _ = build_resolver(&overlay);
    }
});

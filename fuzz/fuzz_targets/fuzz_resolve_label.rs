//! Fuzz target for label resolution.
//!
//! Any UTF-8 label must resolve without panicking, and excluded labels must
//! never carry guidance.

#![no_main]

use libfuzzer_sys::fuzz_target;
use recy_core::Resolver;

fuzz_target!(|label: &str| {
    let resolver = Resolver::builtin();
    let guidance = resolver.resolve(label);
    assert_eq!(guidance.is_none(), !resolver.is_physical_object(label));
});

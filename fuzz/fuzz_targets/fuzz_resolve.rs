//! Fuzz target for paired-end resolution.
//!
//! Splits the input into lines, resolves them as paired-end files and checks
//! that the reported counts agree with the read sets.

#![no_main]

use libfuzzer_sys::fuzz_target;
use readsets::builder::Resolver;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let files: Vec<&str> = text.lines().collect();

    let resolution = Resolver::new().resolve_paired(&files);

    let paired = resolution.iter().filter(|(_, set)| set.is_paired()).count();
    assert_eq!(resolution.paired_count(), paired);
    assert_eq!(resolution.single_count() + paired, resolution.len());
    assert_eq!(resolution, Resolver::new().resolve_paired(&files));
});

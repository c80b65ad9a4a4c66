//! Fuzz target for file name decomposition and classification.
//!
//! Tests that:
//! 1. Parsing never panics on arbitrary UTF-8
//! 2. Stem plus extension reassembles the file name
//! 3. Classification never panics and returns slices of the stem

#![no_main]

use libfuzzer_sys::fuzz_target;
use readsets::config::Designators;
use readsets::filename::FileSpec;
use readsets::naming::{classify, Classification};

fuzz_target!(|data: &[u8]| {
    let Ok(path) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(spec) = FileSpec::parse(path) else {
        assert!(path.is_empty() || path.ends_with('/'));
        return;
    };

    assert!(
        path.ends_with(&spec.file_name()),
        "{path} does not end with {}",
        spec.file_name()
    );

    match classify(spec.stem(), &Designators::default()) {
        Classification::Mate { sample, .. } => assert!(spec.stem().starts_with(sample)),
        Classification::UnknownReadMarker(name) => {
            assert!(spec.stem().starts_with(name.sample));
            assert!(spec.stem().ends_with(name.tail));
        }
        Classification::Undetermined => {}
    }
});

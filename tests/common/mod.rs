//! Common test infrastructure for jzgrad integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

pub mod fixtures;

use std::io::Write;
use tempfile::NamedTempFile;

/// Write `yaml` to a temporary config file that lives as long as the handle.
pub fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(yaml.as_bytes()).expect("write temp config");
    file
}

/// Parse a `#rrggbb` string into bytes.
pub fn hex_bytes(hex: &str) -> [u8; 3] {
    let digits = hex.trim_start_matches('#');
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).expect("hex byte");
    [byte(0), byte(2), byte(4)]
}

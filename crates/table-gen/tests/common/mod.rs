//! Shared test helpers for `l2u_table_gen` integration tests.

#![allow(unreachable_pub)]

use std::path::PathBuf;

use l2u_table_gen::{GenConfig, OutputFormat};

/// Path of the bundled names list excerpt.
pub fn excerpt_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/NamesList-excerpt.txt")
}

/// Offline config reading the excerpt.
pub fn excerpt_config(format: OutputFormat) -> GenConfig {
    GenConfig {
        names_path: excerpt_path(),
        fetch: false,
        format,
        ..GenConfig::default()
    }
}

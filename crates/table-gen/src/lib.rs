//! l2u table generator: reads the Unicode character names list and derives
//! the accent mappings, Greek named symbols and styled math alphabets that
//! make up most of the built-in substitution table.
//!
//! This is a build-time tool. Conversion never calls into it.

#![warn(missing_docs)]

/// Rendering a generated table as Rust source or JSON.
pub mod emit;
/// Downloading `NamesList.txt` when it is not on disk.
pub mod fetch;
/// Deriving mappings and named symbols from a names index.
pub mod generate;
/// Parsing `NamesList.txt`.
pub mod names;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use l2u_tables::TableError;
use tracing::{info, warn};

pub use generate::generate_table;
pub use names::{NamesIndex, parse_names_list};

/// Where the Unicode consortium publishes the current names list.
pub const DEFAULT_NAMES_URL: &str = "https://unicode.org/Public/UNIDATA/NamesList.txt";

/// File name the list is read from and saved to by default.
pub const DEFAULT_NAMES_FILE: &str = "NamesList.txt";

// ── Errors ──────────────────────────────────────────────────────────────────

/// Failures while producing a table.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// The names file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The downloaded names file could not be saved.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The names file is missing and downloading is disabled.
    #[error("{} not found and fetching is disabled", .0.display())]
    MissingNames(PathBuf),

    /// Downloading the names file failed.
    #[error("failed to download {url}: {source}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// A generated mapping or symbol was rejected.
    #[error(transparent)]
    Table(#[from] TableError),
}

// ── Configuration ───────────────────────────────────────────────────────────

/// Output format for the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rust static slices in the layout of the built-in data module.
    #[default]
    Rust,
    /// The JSON form of a `SubstitutionTable`.
    Json,
}

/// Generator settings.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Path of the names list.
    pub names_path: PathBuf,
    /// Where to download the names list from when it is missing.
    pub url: String,
    /// Whether a missing names list may be downloaded.
    pub fetch: bool,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            names_path: PathBuf::from(DEFAULT_NAMES_FILE),
            url: DEFAULT_NAMES_URL.to_string(),
            fetch: true,
            format: OutputFormat::Rust,
        }
    }
}

/// Run the whole pipeline: make sure the names list is present, index it,
/// derive the table and render it in the configured format.
pub fn run(config: &GenConfig) -> Result<String, GenError> {
    fetch::ensure_names_file(config)?;

    let path = &config.names_path;
    let file = File::open(path).map_err(|source| GenError::Read {
        path: path.clone(),
        source,
    })?;
    let index = parse_names_list(BufReader::new(file)).map_err(|source| GenError::Read {
        path: path.clone(),
        source,
    })?;
    info!(names = index.len(), path = %path.display(), "indexed names list");

    let table = generate_table(&index)?;
    info!(
        named = table.named.len(),
        mappings = table.mappings.len(),
        "generated table"
    );
    for issue in table.check() {
        warn!(command = %issue.command, kind = ?issue.kind, "{}", issue.message);
    }

    Ok(match config.format {
        OutputFormat::Rust => emit::rust_source(&table),
        OutputFormat::Json => table.to_json()?,
    })
}

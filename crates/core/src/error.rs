//! Error type for conversions.

use std::io;

/// Conditions that stop a conversion.
///
/// Bad markup is never one of them; see [`crate::diag`] for how incomplete
/// input is reported.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the input or writing the output failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// [`ConvertConfig::math_command`](crate::ConvertConfig::math_command)
    /// names a mapping the table does not have.
    #[error("no mapping named {0} for math mode")]
    UnknownMathMapping(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

//! l2u core library.
//!
//! Streams LaTeX-like markup and writes the Unicode text it stands for:
//! `\alpha` becomes `α`, `x^{2}` becomes `x²`, `$x$` becomes `𝑥`. The main
//! entry points are [`convert`] for readers and writers and [`convert_str`]
//! for in-memory text.
//!
//! Markup errors never fail a conversion. When input ends while a command is
//! still waiting, an `(error:<command>)` marker is written and the problem is
//! recorded in the returned [`ConvertReport`].

#![warn(missing_docs)]

/// Conversion settings.
pub mod config;
/// Diagnostics and the conversion report.
pub mod diag;
/// Error type.
pub mod error;
/// The dispatching interpreter.
pub mod interp;
/// Lookahead over a byte source.
pub mod lookahead;
/// Output writer.
pub mod sink;
/// Byte sources.
pub mod source;
/// UTF-8 helpers.
pub mod utf8;

use std::io::{BufRead, Write};

// ── Convenience re-exports ──────────────────────────────────────────────────

pub use config::ConvertConfig;
pub use diag::{ConvertReport, Diagnostic, Severity, Span, codes};
pub use error::{Error, Result};
pub use interp::Interpreter;
pub use source::{ByteSource, ReadSource};

// Tables
pub use l2u_tables::{Mapping, NamedSymbol, SubstitutionTable};

/// Convert everything `reader` yields and write it to `writer`.
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    table: &SubstitutionTable,
    config: &ConvertConfig,
) -> Result<ConvertReport> {
    Interpreter::new(table, config, ReadSource::new(reader), writer)?.run()
}

/// Convert a string with the built-in table and default settings.
pub fn convert_str(input: &str) -> Result<String> {
    let (out, _) = convert_str_with(
        input,
        SubstitutionTable::builtin(),
        &ConvertConfig::default(),
    )?;
    Ok(out)
}

/// Convert a string and keep the report.
///
/// Input is valid UTF-8, so the output is too: only well-formed units are
/// passed through or substituted.
pub fn convert_str_with(
    input: &str,
    table: &SubstitutionTable,
    config: &ConvertConfig,
) -> Result<(String, ConvertReport)> {
    let mut out = Vec::with_capacity(input.len());
    let report = convert(input.as_bytes(), &mut out, table, config)?;
    Ok((String::from_utf8_lossy(&out).into_owned(), report))
}

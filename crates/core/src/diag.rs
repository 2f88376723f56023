//! Diagnostics collected during a conversion.
//!
//! The converter never aborts on bad markup. What it cannot finish is written
//! inline as `(error:<command>)` and also recorded here, so callers that
//! care can tell a clean run from a degraded one without scanning output.

use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Diagnostic ID constants.
pub mod codes {
    /// Input ended while a command, group or math span was still waiting
    /// for its argument or closing delimiter.
    pub const INCOMPLETE_COMMAND: &str = "L2U0001";
}

/// Short explanation for a diagnostic ID, if one exists.
pub fn explain(id: &str) -> Option<&'static str> {
    match id {
        codes::INCOMPLETE_COMMAND => Some(
            "the input ended before the active command received its argument; \
             close every `{` and `$` and give each command an argument",
        ),
        _ => None,
    }
}

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Output is incomplete.
    Warn,
    /// Informational note.
    Info,
}

/// Byte span in the input stream.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first byte (0-based).
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
}

impl Span {
    /// Create a zero-width span at the given position.
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

/// A diagnostic produced by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic code (e.g. `"L2U0001"`).
    pub id: Cow<'static, str>,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Where in the input the problem was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Machine-readable details (e.g. `command`).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, String>,
}

impl Diagnostic {
    /// Input ran out while `command` was active.
    pub fn incomplete_command(command: &str, offset: usize) -> Self {
        let mut context = BTreeMap::new();
        context.insert("command".to_string(), command.to_string());
        Self {
            id: Cow::Borrowed(codes::INCOMPLETE_COMMAND),
            severity: Severity::Warn,
            message: format!("unexpected end of input while {command} was active"),
            span: Some(Span::empty(offset)),
            context,
        }
    }

    /// Explanation text for this diagnostic's code.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConvertReport {
    /// Bytes read from the input.
    pub bytes_in: usize,
    /// Bytes written to the output.
    pub bytes_out: usize,
    /// Problems found along the way, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ConvertReport {
    /// True when no diagnostics were recorded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_command_carries_context() {
        let d = Diagnostic::incomplete_command("\\bb", 3);
        assert_eq!(d.id, codes::INCOMPLETE_COMMAND);
        assert_eq!(d.span, Some(Span::empty(3)));
        assert_eq!(d.context.get("command").map(String::as_str), Some("\\bb"));
        assert!(d.explain().is_some());
    }

    #[test]
    fn serializes_without_empty_fields() {
        let mut d = Diagnostic::incomplete_command("nul", 0);
        d.context.clear();
        d.span = None;
        let json = serde_json::to_string(&d).unwrap();
        assert!(!json.contains("span"));
        assert!(!json.contains("context"));
        assert!(json.contains("\"severity\":\"warn\""));
    }
}

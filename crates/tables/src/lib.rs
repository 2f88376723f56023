//! Substitution tables for the l2u converter.
//!
//! A [`SubstitutionTable`] holds the ordered [`NamedSymbol`]s and
//! [`Mapping`]s the interpreter dispatches on, plus the mapping used inside
//! math mode. Order matters: the interpreter tries named symbols first, then
//! mappings, each in table order, and the first trigger that matches wins.
//!
//! The built-in table is available through [`SubstitutionTable::builtin`].
//! Tables can also be round-tripped through JSON, which is what the table
//! generator emits with `--format json`.

#![warn(missing_docs)]

mod builtin;
mod check;

pub use check::{IssueKind, TableIssue};

use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::sync::OnceLock;

/// Current format version for the table JSON schema.
pub const TABLE_FORMAT_VERSION: &str = "0.1.0";

/// Trigger text reported for the identity mapping (e.g. in `(error:nul)`).
pub const IDENTITY_COMMAND: &str = "nul";

/// Errors raised while building or loading a table.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// `origs` and `replacement` decode to a different number of characters.
    #[error(
        "mapping {command}: {origs} source characters but {replacement} replacement characters"
    )]
    LengthMismatch {
        /// Trigger of the offending mapping.
        command: String,
        /// Number of characters in `origs`.
        origs: usize,
        /// Number of characters in `replacement`.
        replacement: usize,
    },

    /// A mapping or named symbol has an empty trigger, which would match
    /// without consuming input.
    #[error("empty trigger (text {0:?})")]
    EmptyTrigger(String),

    /// The JSON form of a table could not be read or written.
    #[error("table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ─── Custom serde for Vec<char> ─────────────────────────────────────────────
// Mappings keep their characters decoded so lookups compare scalar values,
// but the JSON form stores each side as a plain string.

fn serialize_chars<S>(chars: &[char], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&chars.iter().collect::<String>())
}

#[derive(Deserialize)]
struct RawMapping {
    command: String,
    origs: String,
    replacement: String,
}

impl TryFrom<RawMapping> for Mapping {
    type Error = TableError;

    fn try_from(raw: RawMapping) -> Result<Self, Self::Error> {
        Mapping::new(raw.command, &raw.origs, &raw.replacement)
    }
}

#[derive(Deserialize)]
struct RawNamed {
    text: String,
    command: String,
}

impl TryFrom<RawNamed> for NamedSymbol {
    type Error = TableError;

    fn try_from(raw: RawNamed) -> Result<Self, Self::Error> {
        NamedSymbol::new(raw.text, raw.command)
    }
}

/// A positional character substitution activated by a trigger.
///
/// `origs[i]` is replaced by `replacement[i]`. Both sequences always have the
/// same length. When a character occurs more than once in `origs`, the first
/// occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMapping")]
pub struct Mapping {
    command: Cow<'static, str>,
    #[serde(serialize_with = "serialize_chars")]
    origs: Vec<char>,
    #[serde(serialize_with = "serialize_chars")]
    replacement: Vec<char>,
}

static IDENTITY: Mapping = Mapping {
    command: Cow::Borrowed(IDENTITY_COMMAND),
    origs: Vec::new(),
    replacement: Vec::new(),
};

impl Mapping {
    /// Build a mapping from two UTF-8 strings of equal character length.
    pub fn new(
        command: impl Into<Cow<'static, str>>,
        origs: &str,
        replacement: &str,
    ) -> Result<Self, TableError> {
        let command = command.into();
        if command.is_empty() {
            return Err(TableError::EmptyTrigger(origs.to_string()));
        }
        let origs: Vec<char> = origs.chars().collect();
        let replacement: Vec<char> = replacement.chars().collect();
        if origs.len() != replacement.len() {
            return Err(TableError::LengthMismatch {
                command: command.into_owned(),
                origs: origs.len(),
                replacement: replacement.len(),
            });
        }
        Ok(Self {
            command,
            origs,
            replacement,
        })
    }

    /// The same pairs under another trigger.
    pub fn renamed(&self, command: impl Into<Cow<'static, str>>) -> Result<Self, TableError> {
        let command = command.into();
        if command.is_empty() {
            return Err(TableError::EmptyTrigger(self.command.to_string()));
        }
        Ok(Self {
            command,
            origs: self.origs.clone(),
            replacement: self.replacement.clone(),
        })
    }

    /// The mapping that substitutes nothing. Active outside any command.
    pub fn identity() -> &'static Mapping {
        &IDENTITY
    }

    /// Whether this is the identity mapping.
    pub fn is_identity(&self) -> bool {
        self.origs.is_empty() && self.command == IDENTITY_COMMAND
    }

    /// The trigger text, e.g. `\mathbb`.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Number of substitution pairs.
    pub fn len(&self) -> usize {
        self.origs.len()
    }

    /// Whether the mapping has no substitution pairs.
    pub fn is_empty(&self) -> bool {
        self.origs.is_empty()
    }

    /// `(orig, replacement)` pairs in table order.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.origs.iter().copied().zip(self.replacement.iter().copied())
    }

    /// Replacement for `ch`, scanning `origs` in order.
    pub fn lookup(&self, ch: char) -> Option<char> {
        self.origs
            .iter()
            .position(|&c| c == ch)
            .map(|i| self.replacement[i])
    }
}

/// A trigger that emits fixed text and leaves the active mapping alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNamed")]
pub struct NamedSymbol {
    text: Cow<'static, str>,
    command: Cow<'static, str>,
}

impl NamedSymbol {
    /// Pair `text` with its trigger `command`.
    pub fn new(
        text: impl Into<Cow<'static, str>>,
        command: impl Into<Cow<'static, str>>,
    ) -> Result<Self, TableError> {
        let text = text.into();
        let command = command.into();
        if command.is_empty() {
            return Err(TableError::EmptyTrigger(text.into_owned()));
        }
        Ok(Self { text, command })
    }

    /// The literal output, possibly several code points.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The trigger text, e.g. `\alpha`.
    pub fn command(&self) -> &str {
        &self.command
    }
}

/// Ordered named symbols and mappings, plus the math-mode mapping.
///
/// Deserialized from JSON or built from the compiled-in data; immutable once
/// handed to the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionTable {
    /// Table format version for compatibility checks.
    #[serde(default = "default_format_version")]
    pub format_version: String,
    /// Named symbols, in dispatch order.
    pub named: Vec<NamedSymbol>,
    /// Mappings, in dispatch order.
    pub mappings: Vec<Mapping>,
    /// Mapping active inside `$...$`.
    pub math: Mapping,
}

fn default_format_version() -> String {
    TABLE_FORMAT_VERSION.to_string()
}

impl SubstitutionTable {
    /// Create a table from its parts.
    pub fn new(named: Vec<NamedSymbol>, mappings: Vec<Mapping>, math: Mapping) -> Self {
        Self {
            format_version: default_format_version(),
            named,
            mappings,
            math,
        }
    }

    /// The compiled-in table, built on first access and shared thereafter.
    pub fn builtin() -> &'static SubstitutionTable {
        static BUILTIN: OnceLock<SubstitutionTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let named = builtin::NAMED
                .iter()
                .map(|&(text, command)| {
                    NamedSymbol::new(text, command).expect("built-in triggers are non-empty")
                })
                .collect();
            let mappings = builtin::MAPPINGS
                .iter()
                .map(|&triple| static_mapping(triple))
                .collect();
            SubstitutionTable::new(named, mappings, static_mapping(builtin::MATH_ITALIC))
        })
    }

    /// First mapping whose trigger is exactly `command`.
    pub fn find_mapping(&self, command: &str) -> Option<&Mapping> {
        self.mappings.iter().find(|m| m.command() == command)
    }

    /// First named symbol whose trigger is exactly `command`.
    pub fn find_named(&self, command: &str) -> Option<&NamedSymbol> {
        self.named.iter().find(|n| n.command() == command)
    }

    /// Load a table from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON form of the table.
    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn static_mapping((command, origs, replacement): (&'static str, &str, &str)) -> Mapping {
    Mapping::new(command, origs, replacement).expect("built-in mapping lengths agree")
}

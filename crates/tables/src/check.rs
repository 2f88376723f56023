//! Consistency checks for substitution tables.
//!
//! Dispatch is an ordered prefix match, so a table can be well-formed and
//! still contain entries that never fire. [`SubstitutionTable::check`] finds
//! them.

use serde::Serialize;
use std::collections::HashMap;

use crate::SubstitutionTable;

/// Characters the interpreter handles before consulting the table.
const RESERVED: [char; 3] = ['{', '}', '$'];

/// What is wrong with a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// An earlier-tried trigger is a prefix of this one.
    Shadowed,
    /// The trigger starts with a character the interpreter claims first.
    Reserved,
    /// The same source character maps to two different replacements.
    ConflictingDuplicate,
}

/// A single finding from [`SubstitutionTable::check`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableIssue {
    /// Category of the finding.
    pub kind: IssueKind,
    /// Trigger of the entry the finding is about.
    pub command: String,
    /// Human-readable description.
    pub message: String,
}

impl SubstitutionTable {
    /// Report unreachable triggers and conflicting substitutions.
    ///
    /// Named symbols are tried before mappings, so a named trigger can shadow
    /// a mapping but not the other way round. `$` only counts as reserved when
    /// no mapping is active, but a trigger starting with it would still be
    /// unusable at top level, so it is reported too.
    pub fn check(&self) -> Vec<TableIssue> {
        let mut issues = Vec::new();

        let triggers: Vec<&str> = self
            .named
            .iter()
            .map(|n| n.command())
            .chain(self.mappings.iter().map(|m| m.command()))
            .collect();

        for (i, trigger) in triggers.iter().enumerate() {
            if let Some(first) = trigger.chars().next()
                && RESERVED.contains(&first)
            {
                issues.push(TableIssue {
                    kind: IssueKind::Reserved,
                    command: trigger.to_string(),
                    message: format!("trigger starts with reserved character {first:?}"),
                });
                continue;
            }
            if let Some(earlier) = triggers[..i].iter().find(|e| trigger.starts_with(**e)) {
                issues.push(TableIssue {
                    kind: IssueKind::Shadowed,
                    command: trigger.to_string(),
                    message: format!("never matches: {earlier} is tried first"),
                });
            }
        }

        for mapping in &self.mappings {
            let mut seen: HashMap<char, char> = HashMap::new();
            for (orig, replacement) in mapping.pairs() {
                match seen.get(&orig) {
                    Some(&first) if first != replacement => issues.push(TableIssue {
                        kind: IssueKind::ConflictingDuplicate,
                        command: mapping.command().to_string(),
                        message: format!(
                            "{orig} maps to {first} and later to {replacement}; the later entry is ignored"
                        ),
                    }),
                    Some(_) => {}
                    None => {
                        seen.insert(orig, replacement);
                    }
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use crate::{IssueKind, Mapping, NamedSymbol, SubstitutionTable};

    fn table(named: &[(&'static str, &'static str)], mappings: Vec<Mapping>) -> SubstitutionTable {
        SubstitutionTable::new(
            named
                .iter()
                .map(|&(t, c)| NamedSymbol::new(t, c).unwrap())
                .collect(),
            mappings,
            Mapping::new("\\mathit", "", "").unwrap(),
        )
    }

    #[test]
    fn builtin_table_is_clean() {
        let issues = SubstitutionTable::builtin().check();
        assert!(issues.is_empty(), "unexpected issues: {issues:#?}");
    }

    #[test]
    fn shorter_trigger_first_shadows_longer() {
        let t = table(&[("∈", "\\in"), ("∞", "\\infty")], vec![]);
        let issues = t.check();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Shadowed);
        assert_eq!(issues[0].command, "\\infty");
    }

    #[test]
    fn named_symbols_shadow_mappings() {
        let t = table(
            &[("x", "\\b")],
            vec![Mapping::new("\\bb", "a", "𝕒").unwrap()],
        );
        let issues = t.check();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].command, "\\bb");
    }

    #[test]
    fn longer_named_before_mapping_prefix_is_fine() {
        let t = table(
            &[("°", "^\\circ")],
            vec![Mapping::new("^", "2", "²").unwrap()],
        );
        assert!(t.check().is_empty());
    }

    #[test]
    fn reserved_and_conflicts_are_reported() {
        let t = table(
            &[("x", "{x")],
            vec![Mapping::new("^", "nn", "ⁿN").unwrap()],
        );
        let kinds: Vec<IssueKind> = t.check().into_iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![IssueKind::Reserved, IssueKind::ConflictingDuplicate]
        );
    }

    #[test]
    fn identical_duplicates_are_tolerated() {
        let t = table(&[], vec![Mapping::new("^", "nin", "ⁿⁱⁿ").unwrap()]);
        assert!(t.check().is_empty());
    }
}

use std::fmt::Write as _;

use l2u_tables::{Mapping, SubstitutionTable};

/// A Rust string literal for `s`.
///
/// Text with a backslash or quote becomes a raw string so triggers read the
/// way they are typed.
pub fn rust_literal(s: &str) -> String {
    if !s.contains(['\\', '"']) {
        return format!("{s:?}");
    }
    let mut hashes = String::new();
    while s.contains(&format!("\"{hashes}")) {
        hashes.push('#');
    }
    format!("r{hashes}\"{s}\"{hashes}")
}

fn chars(m: &Mapping) -> (String, String) {
    m.pairs().unzip()
}

/// Rust source defining `NAMED`, `MAPPINGS` and `MATH` in the layout of the
/// compiled-in data module.
pub fn rust_source(table: &SubstitutionTable) -> String {
    let mut out = String::new();
    out.push_str("// Generated by l2u-table-gen from NamesList.txt.\n\n");

    out.push_str("pub(crate) static NAMED: &[(&str, &str)] = &[\n");
    for n in &table.named {
        let _ = writeln!(
            out,
            "    ({}, {}),",
            rust_literal(n.text()),
            rust_literal(n.command())
        );
    }
    out.push_str("];\n\n");

    out.push_str("pub(crate) static MAPPINGS: &[(&str, &str, &str)] = &[\n");
    for m in &table.mappings {
        push_mapping(&mut out, m, "    ", ",");
    }
    out.push_str("];\n\n");

    out.push_str("pub(crate) const MATH: (&str, &str, &str) = ");
    push_mapping(&mut out, &table.math, "", ";");
    out
}

fn push_mapping(out: &mut String, m: &Mapping, indent: &str, terminator: &str) {
    let (origs, replacement) = chars(m);
    let _ = writeln!(out, "{indent}(");
    let _ = writeln!(out, "{indent}    {},", rust_literal(m.command()));
    let _ = writeln!(out, "{indent}    {},", rust_literal(&origs));
    let _ = writeln!(out, "{indent}    {},", rust_literal(&replacement));
    let _ = writeln!(out, "{indent}){terminator}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use l2u_tables::NamedSymbol;

    #[test]
    fn literals() {
        assert_eq!(rust_literal("abc"), "\"abc\"");
        assert_eq!(rust_literal(r"\alpha"), r#"r"\alpha""#);
        assert_eq!(rust_literal(r#"\""#), r###"r#"\""#"###);
    }

    #[test]
    fn source_layout() {
        let table = SubstitutionTable::new(
            vec![NamedSymbol::new("α", r"\alpha").unwrap()],
            vec![Mapping::new(r"\'", "e", "é").unwrap()],
            Mapping::new(r"\mathit", "x", "𝑥").unwrap(),
        );
        let src = rust_source(&table);
        assert!(src.contains("    (\"α\", r\"\\alpha\"),\n"));
        assert!(src.contains("        r\"\\'\",\n        \"e\",\n        \"é\",\n    ),\n"));
        assert!(src.contains("pub(crate) const MATH: (&str, &str, &str) = (\n    r\"\\mathit\",\n"));
        assert!(src.ends_with(");\n"));
    }
}

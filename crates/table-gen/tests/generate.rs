//! Generator tests against a trimmed copy of `NamesList.txt`.

mod common;

use std::fs::File;
use std::io::BufReader;

use common::{excerpt_config, excerpt_path};
use l2u_table_gen::{OutputFormat, generate_table, parse_names_list, run};
use l2u_tables::{Mapping, SubstitutionTable};

fn excerpt_table() -> SubstitutionTable {
    let file = File::open(excerpt_path()).unwrap();
    let index = parse_names_list(BufReader::new(file)).unwrap();
    generate_table(&index).unwrap()
}

fn origs(m: &Mapping) -> String {
    m.pairs().map(|(o, _)| o).collect()
}

#[test]
fn accents_from_excerpt() {
    let table = excerpt_table();
    let acute = table.find_mapping(r"\'").unwrap();
    assert_eq!(origs(acute), "AEae");
    assert_eq!(acute.lookup('e'), Some('é'));
    assert_eq!(origs(table.find_mapping(r"\`").unwrap()), "Aa");
    assert_eq!(origs(table.find_mapping(r#"\""#).unwrap()), "Ao");
    assert_eq!(table.find_mapping(r"\^").unwrap().lookup('o'), Some('ô'));
}

#[test]
fn greek_names_skip_multi_word_letters() {
    let table = excerpt_table();
    let commands: Vec<&str> = table.named.iter().map(|n| n.command()).collect();
    assert_eq!(
        commands,
        [r"\Alpha", r"\Gamma", r"\Omega", r"\alpha", r"\gamma", r"\lamda", r"\omega"]
    );
    assert!(table.find_named(r"\final sigma").is_none());
}

#[test]
fn styled_alphabets_from_excerpt() {
    let table = excerpt_table();
    assert_eq!(origs(&table.math), "ΑαλaxA");
    assert_eq!(origs(table.find_mapping(r"\bf").unwrap()), "ΑΩαaxA");
    assert_eq!(origs(table.find_mapping(r"\cal").unwrap()), "xA");
    assert_eq!(
        table.find_mapping(r"\it").unwrap(),
        &table.math.renamed(r"\it").unwrap()
    );
}

#[test]
fn generated_pairs_agree_with_builtin() {
    let builtin = SubstitutionTable::builtin();
    for generated in &excerpt_table().mappings {
        let existing = builtin
            .find_mapping(generated.command())
            .unwrap_or_else(|| panic!("builtin lacks {}", generated.command()));
        for (orig, replacement) in generated.pairs() {
            assert_eq!(
                existing.lookup(orig),
                Some(replacement),
                "{} {orig}",
                generated.command()
            );
        }
    }
}

#[test]
fn generated_table_is_clean() {
    assert!(excerpt_table().check().is_empty());
}

#[test]
fn json_output_loads_back() {
    let json = run(&excerpt_config(OutputFormat::Json)).unwrap();
    let table = SubstitutionTable::from_json(&json).unwrap();
    assert_eq!(table, excerpt_table());
}

#[test]
fn rust_output_lists_every_command() {
    let src = run(&excerpt_config(OutputFormat::Rust)).unwrap();
    for command in [r"\'", r"\mathit", r"\it", r"\mathbf", r"\bf", r"\mathcal", r"\cal"] {
        assert!(src.contains(&format!("r\"{command}\"")), "{command}");
    }
    assert!(src.contains(r##"r#"\""#"##));
    assert!(src.contains("(\"λ\", r\"\\lamda\"),"));
}

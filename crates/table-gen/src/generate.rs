use l2u_tables::{Mapping, NamedSymbol, SubstitutionTable, TableError};
use tracing::debug;

use crate::names::NamesIndex;

const GREEK_CAPITAL: &str = "GREEK CAPITAL LETTER ";
const GREEK_SMALL: &str = "GREEK SMALL LETTER ";

/// Accent commands and the name suffix of the accented letters.
pub const ACCENTS: [(&str, &str); 4] = [
    (r"\'", " WITH ACUTE"),
    (r"\`", " WITH GRAVE"),
    (r#"\""#, " WITH DIAERESIS"),
    (r"\^", " WITH CIRCUMFLEX"),
];

/// Pair every character with its `name + suffix` sibling, in name order.
pub fn accent_mapping(
    index: &NamesIndex,
    command: &'static str,
    suffix: &str,
) -> Result<Mapping, TableError> {
    let mut origs = String::new();
    let mut replacement = String::new();
    for (name, ch) in index.iter() {
        if let Some(accented) = index.get(&format!("{name}{suffix}")) {
            origs.push(ch);
            replacement.push(accented);
        }
    }
    Mapping::new(command, &origs, &replacement)
}

/// A Greek letter name suffix (e.g. `ALPHA`) if `name` is a plain letter of
/// the given case.
fn greek_letter<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix)
        .filter(|letter| !letter.is_empty() && !letter.contains(' '))
}

/// `\Alpha`-style commands for capital letters, `\alpha` for small ones.
pub fn greek_named(index: &NamesIndex) -> Result<Vec<NamedSymbol>, TableError> {
    let mut named = Vec::new();
    for (name, ch) in index.iter() {
        let command = if let Some(letter) = greek_letter(name, GREEK_CAPITAL) {
            let mut chars = letter.chars();
            let first = chars.next().map(String::from).unwrap_or_default();
            format!("\\{first}{}", chars.as_str().to_lowercase())
        } else if let Some(letter) = greek_letter(name, GREEK_SMALL) {
            format!("\\{}", letter.to_lowercase())
        } else {
            continue;
        };
        named.push(NamedSymbol::new(ch.to_string(), command)?);
    }
    Ok(named)
}

/// Character pairs for one styled alphabet, collected before building the
/// mapping.
#[derive(Debug, Default)]
struct Alphabet {
    origs: String,
    replacement: String,
}

impl Alphabet {
    /// Add `ch` if the index has a character called `name`.
    fn add_if(&mut self, index: &NamesIndex, ch: char, name: &str) {
        match index.get(name) {
            Some(styled) => {
                debug!(%ch, name, "mapping");
                self.origs.push(ch);
                self.replacement.push(styled);
            }
            None => debug!(%ch, name, "not mapping"),
        }
    }

    fn into_mapping(self, command: &'static str) -> Result<Mapping, TableError> {
        Mapping::new(command, &self.origs, &self.replacement)
    }
}

/// The italic, bold and script math alphabets.
#[derive(Debug, Clone)]
pub struct StyledAlphabets {
    /// `MATHEMATICAL ITALIC` Greek and Latin letters.
    pub italic: Mapping,
    /// `MATHEMATICAL BOLD` Greek and Latin letters.
    pub bold: Mapping,
    /// `MATHEMATICAL SCRIPT` Latin letters.
    pub script: Mapping,
}

impl StyledAlphabets {
    /// Mappings under each of their command spellings, in table order.
    pub fn into_mappings(self) -> Result<Vec<Mapping>, TableError> {
        let mut out = Vec::with_capacity(6);
        for (m, short) in [(self.italic, r"\it"), (self.bold, r"\bf"), (self.script, r"\cal")] {
            let alias = m.renamed(short)?;
            out.push(m);
            out.push(alias);
        }
        Ok(out)
    }
}

/// Build the styled alphabets. Greek letters come first in name order, then
/// Latin small and capital letters.
pub fn styled_alphabets(index: &NamesIndex) -> Result<StyledAlphabets, TableError> {
    let mut italic = Alphabet::default();
    let mut bold = Alphabet::default();
    let mut script = Alphabet::default();

    for (name, ch) in index.iter() {
        let (case, letter) = if let Some(letter) = greek_letter(name, GREEK_CAPITAL) {
            ("CAPITAL", letter)
        } else if let Some(letter) = greek_letter(name, GREEK_SMALL) {
            ("SMALL", letter)
        } else {
            continue;
        };
        italic.add_if(index, ch, &format!("MATHEMATICAL ITALIC {case} {letter}"));
        bold.add_if(index, ch, &format!("MATHEMATICAL BOLD {case} {letter}"));
    }

    for (case, letters) in [("SMALL", 'a'..='z'), ("CAPITAL", 'A'..='Z')] {
        for ch in letters {
            let upper = ch.to_ascii_uppercase();
            italic.add_if(index, ch, &format!("MATHEMATICAL ITALIC {case} {upper}"));
            bold.add_if(index, ch, &format!("MATHEMATICAL BOLD {case} {upper}"));
            script.add_if(index, ch, &format!("MATHEMATICAL SCRIPT {case} {upper}"));
        }
    }

    Ok(StyledAlphabets {
        italic: italic.into_mapping(r"\mathit")?,
        bold: bold.into_mapping(r"\mathbf")?,
        script: script.into_mapping(r"\mathcal")?,
    })
}

/// Everything derivable from the names list, as a table.
///
/// Named symbols are the Greek letters; mappings are the four accents
/// followed by the styled alphabets; the math mapping is the italic one.
/// Hand-written entries (escapes, operators, sub/superscripts, blackboard
/// bold) are not part of the output.
pub fn generate_table(index: &NamesIndex) -> Result<SubstitutionTable, TableError> {
    let mut mappings = ACCENTS
        .iter()
        .map(|&(command, suffix)| accent_mapping(index, command, suffix))
        .collect::<Result<Vec<_>, _>>()?;

    let styled = styled_alphabets(index)?;
    let math = styled.italic.clone();
    mappings.extend(styled.into_mappings()?);

    Ok(SubstitutionTable::new(greek_named(index)?, mappings, math))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> NamesIndex {
        [
            ("LATIN SMALL LETTER E", 'e'),
            ("LATIN SMALL LETTER E WITH ACUTE", 'é'),
            ("LATIN SMALL LETTER A", 'a'),
            ("LATIN SMALL LETTER A WITH ACUTE", 'á'),
            ("LATIN SMALL LETTER A WITH GRAVE", 'à'),
            ("GREEK CAPITAL LETTER OMEGA", 'Ω'),
            ("GREEK SMALL LETTER ALPHA", 'α'),
            ("GREEK SMALL LETTER FINAL SIGMA", 'ς'),
            ("MATHEMATICAL ITALIC SMALL ALPHA", '𝛼'),
            ("MATHEMATICAL BOLD CAPITAL OMEGA", '𝛀'),
            ("MATHEMATICAL ITALIC SMALL X", '𝑥'),
            ("MATHEMATICAL SCRIPT CAPITAL A", '𝒜'),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn accent_pairs_follow_name_order() {
        let m = accent_mapping(&index(), r"\'", " WITH ACUTE").unwrap();
        let pairs: Vec<_> = m.pairs().collect();
        assert_eq!(pairs, [('a', 'á'), ('e', 'é')]);
        assert_eq!(m.command(), r"\'");
    }

    #[test]
    fn accent_without_siblings_is_empty() {
        let m = accent_mapping(&index(), r"\^", " WITH CIRCUMFLEX").unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn greek_commands_follow_case() {
        let named = greek_named(&index()).unwrap();
        let got: Vec<_> = named.iter().map(|n| (n.text(), n.command())).collect();
        assert_eq!(got, [("Ω", r"\Omega"), ("α", r"\alpha")]);
    }

    #[test]
    fn styled_alphabets_pick_up_greek_and_latin() {
        let styled = styled_alphabets(&index()).unwrap();
        assert_eq!(styled.italic.lookup('α'), Some('𝛼'));
        assert_eq!(styled.italic.lookup('x'), Some('𝑥'));
        assert_eq!(styled.bold.lookup('Ω'), Some('𝛀'));
        assert_eq!(styled.script.lookup('A'), Some('𝒜'));
        assert_eq!(styled.script.lookup('α'), None);
    }

    #[test]
    fn table_layout() {
        let table = generate_table(&index()).unwrap();
        let commands: Vec<_> = table.mappings.iter().map(Mapping::command).collect();
        assert_eq!(
            commands,
            [
                r"\'", r"\`", r#"\""#, r"\^", r"\mathit", r"\it", r"\mathbf", r"\bf",
                r"\mathcal", r"\cal"
            ]
        );
        assert_eq!(table.math.command(), r"\mathit");
        assert_eq!(table.find_mapping(r"\it").unwrap().lookup('x'), Some('𝑥'));
    }
}

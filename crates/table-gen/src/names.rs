use std::collections::BTreeMap;
use std::io::{self, BufRead};

use tracing::debug;

/// Character names from `NamesList.txt`, keyed and iterated by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamesIndex {
    by_name: BTreeMap<String, char>,
}

impl NamesIndex {
    /// The character with exactly this name.
    pub fn get(&self, name: &str) -> Option<char> {
        self.by_name.get(name).copied()
    }

    /// Record `name`, replacing any earlier character with the same name.
    pub fn insert(&mut self, name: impl Into<String>, ch: char) {
        self.by_name.insert(name.into(), ch);
    }

    /// `(name, char)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, char)> + '_ {
        self.by_name.iter().map(|(n, &c)| (n.as_str(), c))
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// True when no names were indexed.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, char)> for NamesIndex {
    fn from_iter<I: IntoIterator<Item = (S, char)>>(iter: I) -> Self {
        let mut index = Self::default();
        for (name, ch) in iter {
            index.insert(name, ch);
        }
        index
    }
}

/// Index the character entries of a names list.
///
/// Entry lines start with an ASCII letter or digit and hold
/// `<hex code point>\t<name>`. Everything else (headers, `@` block markers,
/// tab-indented annotations) is skipped, as are code points that are not
/// Unicode scalar values.
pub fn parse_names_list<R: BufRead>(reader: R) -> io::Result<NamesIndex> {
    let mut index = NamesIndex::default();
    for line in reader.lines() {
        let line = line?;
        if !line.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            continue;
        }
        let Some((codepoint, name)) = line.split_once('\t') else {
            continue;
        };
        let Some(ch) = u32::from_str_radix(codepoint, 16)
            .ok()
            .and_then(char::from_u32)
        else {
            debug!(codepoint, name, "skipping entry without a scalar value");
            continue;
        };
        index.insert(name, ch);
    }
    Ok(index)
}

//! Stopword list loading.
use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::Path;

use log::info;

use crate::error::Error;

/// Line boundaries of a stopword list: `\n`, `\r` (alone or in `\r\n`),
/// vertical tab, form feed, `\x1c`..=`\x1e`, NEL, U+2028 and U+2029.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Load a line-delimited stopword list.
///
/// Entries are taken verbatim, empty lines are ignored.
pub fn load_stopwords(path: &Path) -> Result<HashSet<String>, Error> {
    let content = read_to_string(path)?;
    let stopwords: HashSet<String> = content
        .split(is_line_boundary)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    info!("loaded {} stopwords from {:?}", stopwords.len(), path);
    Ok(stopwords)
}

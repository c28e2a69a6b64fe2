//! Dictionary loading utilities
//!
//! Reads hunspell-style `.dic` word lists from files or from the copy
//! embedded at build time.

use super::embedded::DICTIONARY_LINES;
use super::store::{CaseFolding, Dictionary};
use log::{info, trace};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    FileAccess { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileAccess { path, source } => {
                write!(f, "Cannot read dictionary {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileAccess { source, .. } => Some(source),
        }
    }
}

/// Extract the word from one raw line
///
/// Returns `None` for blank lines and `#` comments. Otherwise the affix flags
/// after the first `/` are dropped.
///
/// # Examples
/// ```
/// use slovak_words::dictionary::loader::parse_entry;
///
/// assert_eq!(parse_entry("  dom/SI  "), Some("dom"));
/// assert_eq!(parse_entry("ako"), Some("ako"));
/// assert_eq!(parse_entry("# comment"), None);
/// assert_eq!(parse_entry(""), None);
/// ```
#[must_use]
pub fn parse_entry(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let word = trimmed.split_once('/').map_or(trimmed, |(word, _)| word);
    Some(word)
}

/// Build a dictionary from raw `.dic` lines
///
/// Comment and blank lines are skipped and affix flags stripped. Every other
/// line is a candidate entry, including the hunspell count line, which only
/// ever matches a pool holding those digits.
pub fn from_lines<'a, I>(lines: I, case_folding: CaseFolding) -> Dictionary
where
    I: IntoIterator<Item = &'a str>,
{
    let entries = lines.into_iter().enumerate().filter_map(|(i, line)| {
        let entry = parse_entry(line);
        if entry.is_none() {
            trace!("Skipping line {}: {line:?}", i + 1);
        }
        entry
    });
    Dictionary::from_entries(entries, case_folding)
}

/// Load a dictionary from a file
///
/// The whole file is read before any entry is parsed, so an unreadable file
/// never yields a partial dictionary.
///
/// # Errors
///
/// Returns `DictionaryError::FileAccess` if the file cannot be opened or is
/// not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use slovak_words::dictionary::CaseFolding;
/// use slovak_words::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("sk_SK.dic", CaseFolding::Preserve).unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    case_folding: CaseFolding,
) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = from_lines(content.lines(), case_folding);
    info!(
        "Loaded {} words from {} ({case_folding})",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Build a dictionary from the word list embedded at compile time
///
/// # Examples
/// ```
/// use slovak_words::dictionary::CaseFolding;
/// use slovak_words::dictionary::loader::load_embedded;
///
/// let dict = load_embedded(CaseFolding::Preserve);
/// assert!(dict.contains("domov"));
/// ```
#[must_use]
pub fn load_embedded(case_folding: CaseFolding) -> Dictionary {
    let dictionary = from_lines(DICTIONARY_LINES.iter().copied(), case_folding);
    info!(
        "Loaded {} words from embedded list ({case_folding})",
        dictionary.len()
    );
    dictionary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entry_strips_affix_flags() {
        assert_eq!(parse_entry("domov/SI"), Some("domov"));
        assert_eq!(parse_entry("a/b/c"), Some("a"));
        assert_eq!(parse_entry("\tčaj/SI\r"), Some("čaj"));
    }

    #[test]
    fn parse_entry_skips_comments_and_blanks() {
        assert_eq!(parse_entry("#dom"), None);
        assert_eq!(parse_entry("   # indented comment"), None);
        assert_eq!(parse_entry("   "), None);
    }

    #[test]
    fn parse_entry_keeps_malformed_lines() {
        // Never rejected outright, only segmented
        assert_eq!(parse_entry("/XX"), Some(""));
        assert_eq!(parse_entry("dom ov"), Some("dom ov"));
    }

    #[test]
    fn from_lines_builds_ordered_set() {
        let lines = ["3", "# header", "", "dom/SI", "domov", "dom/A", "kocka/SZ", "/XX"];
        let dict = from_lines(lines, CaseFolding::Preserve);
        assert_eq!(dict.words(), ["3", "dom", "domov", "kocka"]);
    }

    #[test]
    fn from_lines_keeps_numeric_entries() {
        let dict = from_lines(["160", "dom", "42"], CaseFolding::Preserve);
        assert_eq!(dict.words(), ["160", "dom", "42"]);
    }

    #[test]
    fn from_lines_applies_case_policy() {
        let lines = ["Žilina/Z", "žilina"];
        assert_eq!(from_lines(lines, CaseFolding::Preserve).len(), 2);
        assert_eq!(from_lines(lines, CaseFolding::Lowercase).len(), 1);
    }

    #[test]
    fn load_missing_file_is_file_access_error() {
        let result = load_from_file("/definitely/not/here/sk_SK.dic", CaseFolding::Preserve);
        let err = result.unwrap_err();
        assert!(matches!(err, DictionaryError::FileAccess { .. }));
        assert!(err.to_string().contains("sk_SK.dic"));
    }

    #[test]
    fn load_from_file_reads_entries() {
        let path = std::env::temp_dir().join(format!(
            "slovak_words_loader_{}.dic",
            std::process::id()
        ));
        fs::write(&path, "2\nčaj/SI\n# comment\nkôň/SM\n").unwrap();

        let dict = load_from_file(&path, CaseFolding::Preserve).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dict.words(), ["2", "čaj", "kôň"]);
    }

    #[test]
    fn embedded_list_loads() {
        let dict = load_embedded(CaseFolding::Preserve);
        assert!(!dict.is_empty());
        assert!(dict.contains("dom"));
        assert!(dict.contains("čaj"));
        assert!(dict.contains("Žilina"));
        assert!(dict.contains("160"));
        assert!(dict.iter().all(|w| !w.contains('/') && !w.starts_with('#')));
    }
}

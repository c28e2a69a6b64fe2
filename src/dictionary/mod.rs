//! Dictionary store
//!
//! Loads a word list once and keeps it as an immutable, deduplicated set of
//! canonical word forms.

mod embedded;
pub mod loader;
mod store;

pub use embedded::{DICTIONARY_LINES, DICTIONARY_LINES_COUNT};
pub use loader::DictionaryError;
pub use store::{CaseFolding, Dictionary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_matches_const() {
        assert_eq!(DICTIONARY_LINES.len(), DICTIONARY_LINES_COUNT);
    }

    #[test]
    fn embedded_list_has_header_and_entries() {
        assert!(DICTIONARY_LINES[0].chars().all(|c| c.is_ascii_digit()));
        assert!(DICTIONARY_LINES.iter().any(|line| line.starts_with('#')));
        assert!(DICTIONARY_LINES.iter().any(|line| line.contains('/')));
    }

    #[test]
    fn embedded_list_keeps_diacritics() {
        assert!(DICTIONARY_LINES.iter().any(|line| line.starts_with("šťastie")));
        assert!(DICTIONARY_LINES.iter().any(|line| line.starts_with("kôň")));
    }
}

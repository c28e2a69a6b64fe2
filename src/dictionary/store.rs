//! In-memory dictionary of canonical word forms

use rustc_hash::FxHashSet;
use std::fmt;

/// Case policy applied to entries when the dictionary is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseFolding {
    /// Keep the original case and every diacritic (default)
    #[default]
    Preserve,
    /// Store lowercase forms only
    Lowercase,
}

impl CaseFolding {
    /// Apply the policy to an entry
    #[must_use]
    pub fn apply(self, word: &str) -> String {
        match self {
            Self::Preserve => word.to_string(),
            Self::Lowercase => word.to_lowercase(),
        }
    }
}

impl fmt::Display for CaseFolding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preserve => write!(f, "original case"),
            Self::Lowercase => write!(f, "lowercase"),
        }
    }
}

/// A deduplicated word set that remembers first-seen order
///
/// The order is the final tie-break when ranking matches, so results are
/// reproducible across runs. A dictionary is never mutated after it is built;
/// a new case policy means building a new one.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
    case_folding: CaseFolding,
}

impl Dictionary {
    /// Build a dictionary from already-extracted entries
    ///
    /// Entries are canonicalized with `case_folding` before deduplication, so
    /// `"Dom"` and `"dom"` collapse under [`CaseFolding::Lowercase`] but not
    /// under [`CaseFolding::Preserve`]. Empty entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use slovak_words::dictionary::{CaseFolding, Dictionary};
    ///
    /// let dict = Dictionary::from_entries(["dom", "Dom", "dom"], CaseFolding::Preserve);
    /// assert_eq!(dict.words(), ["dom", "Dom"]);
    ///
    /// let dict = Dictionary::from_entries(["dom", "Dom"], CaseFolding::Lowercase);
    /// assert_eq!(dict.words(), ["dom"]);
    /// ```
    pub fn from_entries<I, S>(entries: I, case_folding: CaseFolding) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self {
            words: Vec::new(),
            index: FxHashSet::default(),
            case_folding,
        };
        for entry in entries {
            dictionary.insert(entry.as_ref());
        }
        dictionary
    }

    fn insert(&mut self, entry: &str) -> bool {
        if entry.is_empty() {
            return false;
        }
        let word = self.case_folding.apply(entry);
        if self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Words in first-seen order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Exact lookup of a canonical form
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn case_folding(&self) -> CaseFolding {
        self.case_folding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let dict = Dictionary::from_entries(["kocka", "dom", "auto", "dom"], CaseFolding::Preserve);
        assert_eq!(dict.words(), ["kocka", "dom", "auto"]);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn preserve_keeps_case_and_diacritics() {
        let dict = Dictionary::from_entries(["Žilina", "čaj"], CaseFolding::Preserve);
        assert!(dict.contains("Žilina"));
        assert!(!dict.contains("žilina"));
        assert!(dict.contains("čaj"));
    }

    #[test]
    fn lowercase_folds_case_but_keeps_diacritics() {
        let dict = Dictionary::from_entries(["Žilina", "ŽILINA"], CaseFolding::Lowercase);
        assert_eq!(dict.words(), ["žilina"]);
        assert_eq!(dict.case_folding(), CaseFolding::Lowercase);
    }

    #[test]
    fn skips_empty_entries() {
        let dict = Dictionary::from_entries(["", "dom", ""], CaseFolding::Preserve);
        assert_eq!(dict.words(), ["dom"]);
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::from_entries(Vec::<String>::new(), CaseFolding::Preserve);
        assert!(dict.is_empty());
        assert_eq!(dict.iter().count(), 0);
    }

    #[test]
    fn case_folding_apply() {
        assert_eq!(CaseFolding::Preserve.apply("Ľubica"), "Ľubica");
        assert_eq!(CaseFolding::Lowercase.apply("Ľubica"), "ľubica");
        assert_eq!(CaseFolding::default(), CaseFolding::Preserve);
    }
}

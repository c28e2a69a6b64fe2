//! Letter pool and feasibility matching
//!
//! A `LetterPool` stores the normalized tiles of one query together with
//! their frequency table, so every dictionary word is checked in time linear
//! in its own length.

use super::diacritics::{AllowedDiacritics, normalized_chars};
use rustc_hash::FxHashMap;
use std::fmt;

/// The tiles available for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    normalized: String,
    length: usize,
    counts: FxHashMap<char, u32>,
    allowed: AllowedDiacritics,
}

impl LetterPool {
    /// Normalize the letters and build their frequency table
    ///
    /// # Examples
    /// ```
    /// use slovak_words::core::{AllowedDiacritics, LetterPool};
    ///
    /// let pool = LetterPool::new("DomOv", AllowedDiacritics::none());
    /// assert_eq!(pool.normalized(), "domov");
    /// assert_eq!(pool.len(), 5);
    /// assert_eq!(pool.count_of('o'), 2);
    /// ```
    #[must_use]
    pub fn new(letters: &str, allowed: AllowedDiacritics) -> Self {
        let normalized: String = normalized_chars(letters, allowed).collect();

        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        let mut length = 0;
        for c in normalized.chars() {
            *counts.entry(c).or_insert(0) += 1;
            length += 1;
        }

        Self {
            normalized,
            length,
            counts,
            allowed,
        }
    }

    /// Normalized form of the pool
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Number of tiles (characters, not bytes) after normalization
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// How many tiles of a (normalized) character the pool holds
    #[inline]
    #[must_use]
    pub fn count_of(&self, c: char) -> u32 {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Check whether `word` is a sub-multiset of the pool
    ///
    /// The word goes through the same normalization as the pool, so matching
    /// is case-insensitive and disallowed diacritics match their base letter.
    ///
    /// # Examples
    /// ```
    /// use slovak_words::core::{AllowedDiacritics, LetterPool};
    ///
    /// let pool = LetterPool::new("mdoovdkhjkl", AllowedDiacritics::none());
    /// assert!(pool.can_form("domov"));
    /// assert!(pool.can_form("Dom"));
    /// assert!(!pool.can_form("kocka"));
    /// ```
    #[must_use]
    pub fn can_form(&self, word: &str) -> bool {
        let mut needed: FxHashMap<char, u32> = FxHashMap::default();
        for c in normalized_chars(word, self.allowed) {
            let count = needed.entry(c).or_insert(0);
            *count += 1;
            if *count > self.count_of(c) {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

/// One-shot feasibility check
///
/// Builds the pool's frequency table on every call; use [`LetterPool`] when
/// checking many words against the same letters.
#[must_use]
pub fn can_form(letters: &str, word: &str, allowed: AllowedDiacritics) -> bool {
    LetterPool::new(letters, allowed).can_form(word)
}

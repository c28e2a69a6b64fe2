//! Main word generator interface

use super::config::QueryConfig;
use super::error::QueryError;
use super::results::{MatchResult, ResultSet};
use crate::core::{LetterPool, is_authorized, score};
use crate::dictionary::Dictionary;
use log::debug;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

/// Slovak word generator
///
/// Runs queries against a dictionary snapshot. The snapshot is shared behind
/// an `Arc` and never mutated; [`WordGenerator::replace_dictionary`] swaps in
/// a whole new one.
#[derive(Debug, Clone)]
pub struct WordGenerator {
    dictionary: Arc<Dictionary>,
}

impl WordGenerator {
    #[must_use]
    pub fn new(dictionary: impl Into<Arc<Dictionary>>) -> Self {
        Self {
            dictionary: dictionary.into(),
        }
    }

    /// The current dictionary snapshot
    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Replace the dictionary snapshot, returning the previous one
    ///
    /// Holders of the previous `Arc` keep reading a complete set.
    pub fn replace_dictionary(&mut self, dictionary: impl Into<Arc<Dictionary>>) -> Arc<Dictionary> {
        std::mem::replace(&mut self.dictionary, dictionary.into())
    }

    /// Find every dictionary word formable from `letters`
    ///
    /// Words with a diacritic outside `config.allowed` are omitted. The rest
    /// are matched against the pool after normalization, scored, and ranked
    /// by score, then length, then dictionary order. An empty result is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidPoolLength` if the normalized pool does not
    /// have exactly `config.target_length` characters.
    ///
    /// # Examples
    /// ```
    /// use slovak_words::dictionary::{CaseFolding, Dictionary};
    /// use slovak_words::engine::{QueryConfig, WordGenerator};
    ///
    /// let dict = Dictionary::from_entries(["dom", "domov", "kocka"], CaseFolding::Preserve);
    /// let generator = WordGenerator::new(dict);
    ///
    /// let results = generator.generate("mdoovdkhjkl", &QueryConfig::new(11)).unwrap();
    /// let words: Vec<&str> = results.iter().map(|r| r.word.as_str()).collect();
    /// assert_eq!(words, ["domov", "dom"]);
    ///
    /// assert!(generator.generate("dom", &QueryConfig::new(11)).is_err());
    /// ```
    pub fn generate(&self, letters: &str, config: &QueryConfig) -> Result<ResultSet, QueryError> {
        let pool = LetterPool::new(letters, config.allowed);
        if pool.len() != config.target_length {
            return Err(QueryError::InvalidPoolLength {
                expected: config.target_length,
                actual: pool.len(),
            });
        }

        let start = Instant::now();
        let allowed = config.allowed;

        let matches: Vec<MatchResult> = self
            .dictionary
            .words()
            .par_iter()
            .enumerate()
            .filter(|(_, word)| is_authorized(word, allowed) && pool.can_form(word))
            .map(|(position, word)| MatchResult::new(word.as_str(), score(word, allowed), position))
            .collect();

        let results = ResultSet::new(matches);
        debug!(
            "Pool '{pool}' (allowed: '{allowed}'): {} of {} words in {:.2?}",
            results.len(),
            self.dictionary.len(),
            start.elapsed()
        );

        Ok(results)
    }
}

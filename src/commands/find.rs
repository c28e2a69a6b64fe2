//! Word finding command
//!
//! Runs a single query and keeps the results for display in one view.

use crate::engine::{QueryConfig, QueryError, ResultSet, ResultView, WordGenerator};

/// Configuration for finding words
pub struct FindConfig {
    pub letters: String,
    pub query: QueryConfig,
    pub view: ResultView,
    /// Maximum rows per view (per group for the grouped view)
    pub top: usize,
}

impl FindConfig {
    #[must_use]
    pub fn new(letters: impl Into<String>, query: QueryConfig) -> Self {
        Self {
            letters: letters.into(),
            query,
            view: ResultView::default(),
            top: 20,
        }
    }
}

/// Result of finding words
pub struct FindResult {
    pub letters: String,
    pub query: QueryConfig,
    pub view: ResultView,
    pub top: usize,
    pub results: ResultSet,
}

/// Find all words formable from the configured letters
///
/// The letters are passed to the generator verbatim, so a pool accepted here
/// is exactly a pool the generator accepts.
///
/// # Errors
///
/// Returns `QueryError::InvalidPoolLength` if the normalized letters do not
/// have the configured length.
pub fn find_words(config: FindConfig, generator: &WordGenerator) -> Result<FindResult, QueryError> {
    let results = generator.generate(&config.letters, &config.query)?;

    Ok(FindResult {
        letters: config.letters,
        query: config.query,
        view: config.view,
        top: config.top,
        results,
    })
}

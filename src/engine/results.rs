//! Query results and their presentation views
//!
//! A `ResultSet` is computed once per query. Every view re-sorts references
//! into it, so switching views never re-runs the matcher.

use crate::core::{char_length, diacritic_count};
use std::cmp::Ordering;
use std::fmt;

/// One formable dictionary word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub word: String,
    pub score: u32,
    /// Length in characters
    pub length: usize,
    /// Number of diacritic letters in the word
    pub diacritics: usize,
    /// Position of the word in the dictionary, the last tie-break
    pub position: usize,
}

impl MatchResult {
    #[must_use]
    pub fn new(word: impl Into<String>, score: u32, position: usize) -> Self {
        let word = word.into();
        Self {
            length: char_length(&word),
            diacritics: diacritic_count(&word),
            word,
            score,
            position,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.score)
    }
}

fn by_score(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(b.length.cmp(&a.length))
        .then(a.position.cmp(&b.position))
}

fn by_length(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.length
        .cmp(&a.length)
        .then(b.score.cmp(&a.score))
        .then(a.position.cmp(&b.position))
}

fn by_diacritics(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.diacritics
        .cmp(&a.diacritics)
        .then(b.length.cmp(&a.length))
        .then(b.score.cmp(&a.score))
        .then(a.position.cmp(&b.position))
}

/// Ways of presenting a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultView {
    /// Highest score first (default)
    #[default]
    Score,
    /// Longest word first
    Length,
    /// Most diacritics first
    Diacritics,
    /// Grouped by exact length, longest group first
    Grouped,
}

impl ResultView {
    pub const ALL: [Self; 4] = [Self::Score, Self::Length, Self::Diacritics, Self::Grouped];

    /// Create a view from its name
    ///
    /// Supported names: "score", "length", "diacritics", "grouped".
    /// Defaults to score if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "length" | "longest" => Self::Length,
            "diacritics" | "accents" => Self::Diacritics,
            "grouped" | "groups" => Self::Grouped,
            _ => Self::Score,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Score => "Top by score",
            Self::Length => "Longest words",
            Self::Diacritics => "Most diacritics",
            Self::Grouped => "By length",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Score => 0,
            Self::Length => 1,
            Self::Diacritics => 2,
            Self::Grouped => 3,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Position among [`ResultView::ALL`], for tab widgets
    #[must_use]
    pub const fn position(self) -> usize {
        self.index()
    }
}

/// Matches of one word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthGroup<'a> {
    pub length: usize,
    pub matches: Vec<&'a MatchResult>,
}

/// All matches of one query, ranked by score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    matches: Vec<MatchResult>,
}

impl ResultSet {
    /// Rank matches by score, then length, then dictionary position
    #[must_use]
    pub fn new(mut matches: Vec<MatchResult>) -> Self {
        matches.sort_by(by_score);
        Self { matches }
    }

    /// Matches in ranked order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[MatchResult] {
        &self.matches
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchResult> {
        self.matches.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Highest-ranked match
    #[must_use]
    pub fn best(&self) -> Option<&MatchResult> {
        self.matches.first()
    }

    fn ranked_by(
        &self,
        n: usize,
        compare: fn(&MatchResult, &MatchResult) -> Ordering,
    ) -> Vec<&MatchResult> {
        let mut ranked: Vec<&MatchResult> = self.matches.iter().collect();
        ranked.sort_by(|a, b| compare(a, b));
        ranked.truncate(n);
        ranked
    }

    /// Top `n` by score, ties broken by length
    #[must_use]
    pub fn top_by_score(&self, n: usize) -> Vec<&MatchResult> {
        self.matches.iter().take(n).collect()
    }

    /// Top `n` by length, ties broken by score
    #[must_use]
    pub fn top_by_length(&self, n: usize) -> Vec<&MatchResult> {
        self.ranked_by(n, by_length)
    }

    /// Top `n` by diacritic count, ties broken by length then score
    #[must_use]
    pub fn top_by_diacritics(&self, n: usize) -> Vec<&MatchResult> {
        self.ranked_by(n, by_diacritics)
    }

    /// Group matches by exact length
    ///
    /// Groups are ordered longest first; each group is ordered by score.
    ///
    /// # Examples
    /// ```
    /// use slovak_words::engine::{MatchResult, ResultSet};
    ///
    /// let results = ResultSet::new(vec![
    ///     MatchResult::new("dom", 30, 0),
    ///     MatchResult::new("domov", 50, 1),
    ///     MatchResult::new("vod", 30, 2),
    /// ]);
    ///
    /// let groups = results.grouped_by_length();
    /// assert_eq!(groups.len(), 2);
    /// assert_eq!(groups[0].length, 5);
    /// assert_eq!(groups[1].matches.len(), 2);
    /// ```
    #[must_use]
    pub fn grouped_by_length(&self) -> Vec<LengthGroup<'_>> {
        let mut groups: Vec<LengthGroup<'_>> = Vec::new();
        // by_length orders lengths descending, then by score within a length
        for result in self.ranked_by(self.len(), by_length) {
            match groups.last_mut() {
                Some(group) if group.length == result.length => group.matches.push(result),
                _ => groups.push(LengthGroup {
                    length: result.length,
                    matches: vec![result],
                }),
            }
        }
        groups
    }

    /// Up to `n` matches in the order of a ranked view
    ///
    /// For [`ResultView::Grouped`] this is the concatenation of the groups.
    #[must_use]
    pub fn view(&self, view: ResultView, n: usize) -> Vec<&MatchResult> {
        match view {
            ResultView::Score => self.top_by_score(n),
            ResultView::Length => self.top_by_length(n),
            ResultView::Diacritics => self.top_by_diacritics(n),
            ResultView::Grouped => self
                .grouped_by_length()
                .into_iter()
                .flat_map(|group| group.matches)
                .take(n)
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a MatchResult;
    type IntoIter = std::slice::Iter<'a, MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(results: &[&MatchResult]) -> Vec<String> {
        results.iter().map(|r| r.word.clone()).collect()
    }

    fn sample() -> ResultSet {
        ResultSet::new(vec![
            MatchResult::new("dom", 30, 0),
            MatchResult::new("čaj", 32, 1),
            MatchResult::new("domov", 50, 2),
            MatchResult::new("kôň", 34, 3),
            MatchResult::new("vod", 30, 4),
            MatchResult::new("šťava", 54, 5),
        ])
    }

    #[test]
    fn match_result_derives_display_fields() {
        let result = MatchResult::new("šťava", 54, 0);
        assert_eq!(result.length, 5);
        assert_eq!(result.diacritics, 2);
        assert_eq!(result.to_string(), "šťava (54)");
    }

    #[test]
    fn new_sorts_by_score_then_length_then_position() {
        let results = sample();
        let order: Vec<&str> = results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(order, ["šťava", "domov", "kôň", "čaj", "dom", "vod"]);
    }

    #[test]
    fn score_ties_prefer_longer_words() {
        let results = ResultSet::new(vec![
            MatchResult::new("abc", 40, 0),
            MatchResult::new("abcd", 40, 1),
        ]);
        assert_eq!(results.best().unwrap().word, "abcd");
    }

    #[test]
    fn top_by_score_truncates() {
        let results = sample();
        assert_eq!(words(&results.top_by_score(2)), ["šťava", "domov"]);
        assert_eq!(results.top_by_score(100).len(), 6);
    }

    #[test]
    fn top_by_length_breaks_ties_by_score() {
        let results = sample();
        assert_eq!(
            words(&results.top_by_length(4)),
            ["šťava", "domov", "kôň", "čaj"]
        );
    }

    #[test]
    fn top_by_diacritics_breaks_ties_by_length_then_score() {
        let results = sample();
        assert_eq!(
            words(&results.top_by_diacritics(4)),
            ["šťava", "kôň", "čaj", "domov"]
        );
    }

    #[test]
    fn grouping_orders_groups_and_members() {
        let results = sample();
        let groups = results.grouped_by_length();

        let lengths: Vec<usize> = groups.iter().map(|g| g.length).collect();
        assert_eq!(lengths, [5, 3]);
        assert_eq!(words(&groups[0].matches), ["šťava", "domov"]);
        assert_eq!(words(&groups[1].matches), ["kôň", "čaj", "dom", "vod"]);
    }

    #[test]
    fn views_do_not_change_the_set() {
        let results = sample();
        let before = results.clone();
        let _ = results.top_by_length(3);
        let _ = results.top_by_diacritics(3);
        let _ = results.grouped_by_length();
        assert_eq!(results, before);
    }

    #[test]
    fn grouped_view_flattens_groups() {
        let results = sample();
        assert_eq!(
            words(&results.view(ResultView::Grouped, 3)),
            ["šťava", "domov", "kôň"]
        );
    }

    #[test]
    fn empty_set_views() {
        let results = ResultSet::default();
        assert!(results.is_empty());
        assert!(results.best().is_none());
        assert!(results.top_by_length(5).is_empty());
        assert!(results.grouped_by_length().is_empty());
    }

    #[test]
    fn view_names() {
        assert_eq!(ResultView::from_name("length"), ResultView::Length);
        assert_eq!(ResultView::from_name("diacritics"), ResultView::Diacritics);
        assert_eq!(ResultView::from_name("grouped"), ResultView::Grouped);
        assert_eq!(ResultView::from_name("anything"), ResultView::Score);
    }

    #[test]
    fn view_cycling_wraps() {
        assert_eq!(ResultView::Score.next(), ResultView::Length);
        assert_eq!(ResultView::Grouped.next(), ResultView::Score);
        assert_eq!(ResultView::Score.previous(), ResultView::Grouped);
        for view in ResultView::ALL {
            assert_eq!(view.next().previous(), view);
        }
    }
}

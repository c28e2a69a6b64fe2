//! Word scoring

use super::diacritics::AllowedDiacritics;

/// Points per character of a word
pub const LETTER_POINTS: u32 = 10;

/// Bonus per allowed diacritic in a word
pub const DIACRITIC_BONUS: u32 = 2;

/// Length of a word in characters
///
/// A diacritic letter counts once, however many bytes it takes in UTF-8.
#[inline]
#[must_use]
pub fn char_length(word: &str) -> usize {
    word.chars().count()
}

/// Score a word under an allowed-diacritics configuration
///
/// `10` points per character plus `2` for every character that is an allowed
/// diacritic. Recomputed per query since it depends on the allowed set.
///
/// # Examples
/// ```
/// use slovak_words::core::{AllowedDiacritics, score};
///
/// assert_eq!(score("domov", AllowedDiacritics::none()), 50);
/// assert_eq!(score("čaj", AllowedDiacritics::parse("č").unwrap()), 32);
/// ```
#[must_use]
pub fn score(word: &str, allowed: AllowedDiacritics) -> u32 {
    let (length, bonus) = word.chars().fold((0u32, 0u32), |(length, bonus), c| {
        (length + 1, bonus + u32::from(allowed.contains(c)))
    });
    LETTER_POINTS * length + DIACRITIC_BONUS * bonus
}

//! Slovak diacritics
//!
//! The fixed diacritic alphabet, its mapping to base Latin letters, the
//! per-query set of allowed diacritics and the normalization built on top.

use std::fmt;

/// The 17 Slovak letters that carry a diacritic mark, in alphabet order
pub const SLOVAK_DIACRITICS: [char; 17] = [
    'á', 'ä', 'č', 'ď', 'é', 'í', 'ĺ', 'ľ', 'ň', 'ó', 'ô', 'ŕ', 'š', 'ť', 'ú', 'ý', 'ž',
];

/// Map a diacritic letter (either case) to its base Latin letter
///
/// Case is preserved: `'Č'` maps to `'C'`. Returns `None` for any character
/// outside the Slovak diacritic alphabet.
///
/// # Examples
/// ```
/// use slovak_words::core::base_letter;
///
/// assert_eq!(base_letter('ľ'), Some('l'));
/// assert_eq!(base_letter('Ž'), Some('Z'));
/// assert_eq!(base_letter('x'), None);
/// ```
#[must_use]
pub const fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'á' | 'ä' => 'a',
        'Á' | 'Ä' => 'A',
        'č' => 'c',
        'Č' => 'C',
        'ď' => 'd',
        'Ď' => 'D',
        'é' => 'e',
        'É' => 'E',
        'í' => 'i',
        'Í' => 'I',
        'ĺ' | 'ľ' => 'l',
        'Ĺ' | 'Ľ' => 'L',
        'ň' => 'n',
        'Ň' => 'N',
        'ó' | 'ô' => 'o',
        'Ó' | 'Ô' => 'O',
        'ŕ' => 'r',
        'Ŕ' => 'R',
        'š' => 's',
        'Š' => 'S',
        'ť' => 't',
        'Ť' => 'T',
        'ú' => 'u',
        'Ú' => 'U',
        'ý' => 'y',
        'Ý' => 'Y',
        'ž' => 'z',
        'Ž' => 'Z',
        _ => return None,
    };
    Some(base)
}

/// Check whether a character is a Slovak diacritic letter (either case)
#[inline]
#[must_use]
pub const fn is_diacritic(c: char) -> bool {
    base_letter(c).is_some()
}

/// Count the diacritic letters in a word
#[must_use]
pub fn diacritic_count(word: &str) -> usize {
    word.chars().filter(|&c| is_diacritic(c)).count()
}

/// Error type for building an allowed-diacritics set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiacriticError {
    NotADiacritic(char),
}

impl fmt::Display for DiacriticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotADiacritic(c) => {
                write!(f, "'{c}' is not a Slovak diacritic letter")
            }
        }
    }
}

impl std::error::Error for DiacriticError {}

/// The diacritics a query treats as distinct letters
///
/// Stored as a bit set over [`SLOVAK_DIACRITICS`]. Membership is
/// case-insensitive: `'Š'` and `'š'` occupy the same slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AllowedDiacritics(u32);

impl AllowedDiacritics {
    /// No diacritics allowed: every diacritic collapses to its base letter
    #[must_use]
    pub const fn none() -> Self {
        Self(0)
    }

    /// Every Slovak diacritic allowed
    #[must_use]
    pub const fn all() -> Self {
        Self((1u32 << SLOVAK_DIACRITICS.len() as u32) - 1)
    }

    /// Parse a set from a string of diacritic letters
    ///
    /// Whitespace and commas are ignored so `"č,š"` and `"č š"` both work.
    ///
    /// # Errors
    /// Returns `DiacriticError::NotADiacritic` for the first character that
    /// is not a Slovak diacritic letter.
    ///
    /// # Examples
    /// ```
    /// use slovak_words::core::AllowedDiacritics;
    ///
    /// let allowed = AllowedDiacritics::parse("čŠ").unwrap();
    /// assert!(allowed.contains('č'));
    /// assert!(allowed.contains('š'));
    /// assert!(!allowed.contains('ž'));
    ///
    /// assert!(AllowedDiacritics::parse("čx").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, DiacriticError> {
        let mut allowed = Self::none();
        for c in text.chars().filter(|c| !c.is_whitespace() && *c != ',') {
            if !allowed.insert(c) {
                return Err(DiacriticError::NotADiacritic(c));
            }
        }
        Ok(allowed)
    }

    fn slot(c: char) -> Option<u32> {
        let lower = c.to_lowercase().next()?;
        SLOVAK_DIACRITICS
            .iter()
            .position(|&d| d == lower)
            .map(|i| i as u32)
    }

    /// Check membership, ignoring case
    #[inline]
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        Self::slot(c).is_some_and(|slot| self.0 & (1 << slot) != 0)
    }

    /// Add a diacritic to the set
    ///
    /// Returns `false` if `c` is not a diacritic letter.
    pub fn insert(&mut self, c: char) -> bool {
        match Self::slot(c) {
            Some(slot) => {
                self.0 |= 1 << slot;
                true
            }
            None => false,
        }
    }

    /// Remove a diacritic from the set
    pub fn remove(&mut self, c: char) {
        if let Some(slot) = Self::slot(c) {
            self.0 &= !(1 << slot);
        }
    }

    /// Flip membership of a diacritic, returning whether it is now allowed
    pub fn toggle(&mut self, c: char) -> bool {
        if self.contains(c) {
            self.remove(c);
            false
        } else {
            self.insert(c)
        }
    }

    /// Iterate the allowed diacritics in alphabet order (lowercase)
    pub fn iter(self) -> impl Iterator<Item = char> {
        SLOVAK_DIACRITICS
            .into_iter()
            .filter(move |&c| self.contains(c))
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<char> for AllowedDiacritics {
    /// Collect diacritics, silently skipping anything else
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut allowed = Self::none();
        for c in iter {
            allowed.insert(c);
        }
        allowed
    }
}

impl fmt::Display for AllowedDiacritics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Lowercase and fold disallowed diacritics, one character at a time
///
/// Shared by [`normalize`] and the letter-pool matcher so both sides of a
/// comparison go through exactly the same mapping.
pub(crate) fn normalized_chars(
    text: &str,
    allowed: AllowedDiacritics,
) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase).map(move |c| {
        if allowed.contains(c) {
            c
        } else {
            base_letter(c).unwrap_or(c)
        }
    })
}

/// Produce the canonical comparison form of a text
///
/// Lowercases the input, keeps allowed diacritics and replaces every other
/// diacritic with its base letter.
///
/// # Examples
/// ```
/// use slovak_words::core::{AllowedDiacritics, normalize};
///
/// let none = AllowedDiacritics::none();
/// assert_eq!(normalize("Čučoriedka", none), "cucoriedka");
///
/// let allowed = AllowedDiacritics::parse("č").unwrap();
/// assert_eq!(normalize("Čučoriedka", allowed), "čučoriedka");
/// ```
#[must_use]
pub fn normalize(text: &str, allowed: AllowedDiacritics) -> String {
    normalized_chars(text, allowed).collect()
}

/// Check that every diacritic in a word is allowed
///
/// Evaluated on the literal word, since normalization would erase the
/// diacritics being checked.
///
/// # Examples
/// ```
/// use slovak_words::core::{AllowedDiacritics, is_authorized};
///
/// assert!(!is_authorized("čaj", AllowedDiacritics::none()));
/// assert!(is_authorized("čaj", AllowedDiacritics::parse("č").unwrap()));
/// assert!(is_authorized("dom", AllowedDiacritics::none()));
/// ```
#[must_use]
pub fn is_authorized(word: &str, allowed: AllowedDiacritics) -> bool {
    word.chars()
        .all(|c| !is_diacritic(c) || allowed.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_diacritic_has_a_base_letter() {
        for c in SLOVAK_DIACRITICS {
            let base = base_letter(c).unwrap();
            assert!(base.is_ascii_lowercase(), "{c} maps to {base}");
        }
    }

    #[test]
    fn uppercase_diacritics_map_to_uppercase_base() {
        for c in SLOVAK_DIACRITICS {
            let upper = c.to_uppercase().next().unwrap();
            let base = base_letter(upper).unwrap();
            assert_eq!(base, base_letter(c).unwrap().to_ascii_uppercase());
        }
    }

    #[test]
    fn plain_letters_are_not_diacritics() {
        assert!(!is_diacritic('a'));
        assert!(!is_diacritic('Z'));
        assert!(!is_diacritic('ö')); // German, not Slovak
        assert!(!is_diacritic(' '));
    }

    #[test]
    fn diacritic_count_counts_both_cases() {
        assert_eq!(diacritic_count("dom"), 0);
        assert_eq!(diacritic_count("šťastie"), 2);
        assert_eq!(diacritic_count("ŽILINA"), 1);
    }

    #[test]
    fn allowed_set_basics() {
        let mut allowed = AllowedDiacritics::none();
        assert!(allowed.is_empty());

        assert!(allowed.insert('č'));
        assert!(allowed.insert('Š'));
        assert!(!allowed.insert('x'));

        assert_eq!(allowed.len(), 2);
        assert!(allowed.contains('Č'));
        assert!(allowed.contains('š'));
        assert!(!allowed.contains('c'));

        allowed.remove('č');
        assert!(!allowed.contains('č'));
        assert_eq!(allowed.len(), 1);
    }

    #[test]
    fn allowed_set_toggle() {
        let mut allowed = AllowedDiacritics::none();
        assert!(allowed.toggle('ô'));
        assert!(allowed.contains('ô'));
        assert!(!allowed.toggle('ô'));
        assert!(allowed.is_empty());
        assert!(!allowed.toggle('q'));
        assert!(allowed.is_empty());
    }

    #[test]
    fn allowed_set_all_covers_alphabet() {
        let all = AllowedDiacritics::all();
        assert_eq!(all.len(), SLOVAK_DIACRITICS.len());
        assert!(SLOVAK_DIACRITICS.iter().all(|&c| all.contains(c)));
    }

    #[test]
    fn allowed_set_parse_and_display() {
        let allowed = AllowedDiacritics::parse("ž, č ä").unwrap();
        assert_eq!(allowed.to_string(), "äčž");

        assert_eq!(
            AllowedDiacritics::parse("č1"),
            Err(DiacriticError::NotADiacritic('1'))
        );
        assert_eq!(AllowedDiacritics::parse(""), Ok(AllowedDiacritics::none()));
    }

    #[test]
    fn allowed_set_from_iter_skips_plain_letters() {
        let allowed: AllowedDiacritics = "ačbť".chars().collect();
        assert_eq!(allowed.to_string(), "čť");
    }

    #[test]
    fn normalize_lowercases_and_folds() {
        let none = AllowedDiacritics::none();
        assert_eq!(normalize("ŠŤASTIE", none), "stastie");
        assert_eq!(normalize("dom", none), "dom");
        assert_eq!(normalize("Kôň", none), "kon");
    }

    #[test]
    fn normalize_keeps_allowed_diacritics() {
        let allowed = AllowedDiacritics::parse("ô").unwrap();
        assert_eq!(normalize("Kôň", allowed), "kôn");
    }

    #[test]
    fn normalize_keeps_foreign_characters() {
        let none = AllowedDiacritics::none();
        assert_eq!(normalize("Größe-1", none), "größe-1");
    }

    #[test]
    fn authorization_checks_literal_word() {
        let none = AllowedDiacritics::none();
        assert!(!is_authorized("čaj", none));
        assert!(!is_authorized("Čaj", none));
        assert!(is_authorized("caj", none));

        let c_only = AllowedDiacritics::parse("č").unwrap();
        assert!(is_authorized("Čaj", c_only));
        assert!(!is_authorized("čučoriedka", AllowedDiacritics::parse("ô").unwrap()));
        assert!(!is_authorized("kľúč", c_only));
    }
}

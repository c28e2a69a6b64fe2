//! Per-query configuration

use crate::core::AllowedDiacritics;

/// Pool size used when none is configured
pub const DEFAULT_TARGET_LENGTH: usize = 10;

/// Pool sizes offered by the interactive mode
pub const LENGTH_PRESETS: [usize; 3] = [5, 10, 15];

/// Parameters of one query
///
/// Owned by the caller and passed into every generation; the engine keeps no
/// selection state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    /// Required number of tiles after normalization
    pub target_length: usize,
    /// Diacritics treated as distinct letters
    pub allowed: AllowedDiacritics,
}

impl QueryConfig {
    #[must_use]
    pub const fn new(target_length: usize) -> Self {
        Self {
            target_length,
            allowed: AllowedDiacritics::none(),
        }
    }

    #[must_use]
    pub const fn with_allowed(mut self, allowed: AllowedDiacritics) -> Self {
        self.allowed = allowed;
        self
    }

    /// Move to the next preset length, wrapping around
    ///
    /// A length outside the presets jumps to the first preset above it, or
    /// wraps to the smallest.
    pub fn cycle_length(&mut self) {
        self.target_length = LENGTH_PRESETS
            .iter()
            .copied()
            .find(|&preset| preset > self.target_length)
            .unwrap_or(LENGTH_PRESETS[0]);
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QueryConfig::default();
        assert_eq!(config.target_length, 10);
        assert!(config.allowed.is_empty());
    }

    #[test]
    fn with_allowed_sets_diacritics() {
        let allowed = AllowedDiacritics::parse("č").unwrap();
        let config = QueryConfig::new(5).with_allowed(allowed);
        assert_eq!(config.target_length, 5);
        assert_eq!(config.allowed, allowed);
    }

    #[test]
    fn cycle_length_walks_presets() {
        let mut config = QueryConfig::new(5);
        config.cycle_length();
        assert_eq!(config.target_length, 10);
        config.cycle_length();
        assert_eq!(config.target_length, 15);
        config.cycle_length();
        assert_eq!(config.target_length, 5);
    }

    #[test]
    fn cycle_length_from_custom_value() {
        let mut config = QueryConfig::new(11);
        config.cycle_length();
        assert_eq!(config.target_length, 15);

        let mut config = QueryConfig::new(20);
        config.cycle_length();
        assert_eq!(config.target_length, 5);
    }
}

//! Formatting utilities for terminal output

use crate::core::AllowedDiacritics;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score bar relative to the best score of a result set
#[must_use]
pub fn score_bar(score: u32, best: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(best), width)
}

/// Describe an allowed-diacritics set for humans
#[must_use]
pub fn describe_allowed(allowed: AllowedDiacritics) -> String {
    if allowed.is_empty() {
        "none".to_string()
    } else {
        allowed
            .iter()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// "1 letter", "5 letters"
#[must_use]
pub fn length_label(length: usize) -> String {
    if length == 1 {
        "1 letter".to_string()
    } else {
        format!("{length} letters")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_bar_scales_to_best() {
        assert_eq!(score_bar(30, 60, 4), "██░░");
        assert_eq!(score_bar(60, 60, 4), "████");
    }

    #[test]
    fn describe_allowed_sets() {
        assert_eq!(describe_allowed(AllowedDiacritics::none()), "none");
        let allowed = AllowedDiacritics::parse("šč").unwrap();
        assert_eq!(describe_allowed(allowed), "č š");
    }

    #[test]
    fn length_labels() {
        assert_eq!(length_label(1), "1 letter");
        assert_eq!(length_label(7), "7 letters");
    }
}

//! Core domain types for Slovak word search
//!
//! This module contains the diacritic alphabet, normalization, the letter
//! pool matcher and scoring. All functions here are pure and testable.

mod diacritics;
mod letter_pool;
mod scoring;

pub use diacritics::{
    AllowedDiacritics, DiacriticError, SLOVAK_DIACRITICS, base_letter, diacritic_count,
    is_authorized, is_diacritic, normalize,
};
pub use letter_pool::{LetterPool, can_form};
pub use scoring::{DIACRITIC_BONUS, LETTER_POINTS, char_length, score};

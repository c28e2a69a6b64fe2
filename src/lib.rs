//! Slovak Word Generator
//!
//! Finds every dictionary word that can be built from a fixed pool of letters,
//! with configurable handling of Slovak diacritics, and ranks the results.
//!
//! # Quick Start
//!
//! ```rust
//! use slovak_words::core::AllowedDiacritics;
//! use slovak_words::dictionary::{CaseFolding, Dictionary};
//! use slovak_words::engine::{QueryConfig, WordGenerator};
//!
//! let dictionary = Dictionary::from_entries(["dom", "domov", "čaj"], CaseFolding::Preserve);
//! let generator = WordGenerator::new(dictionary);
//!
//! let allowed = AllowedDiacritics::parse("č").unwrap();
//! let config = QueryConfig::new(8).with_allowed(allowed);
//!
//! let results = generator.generate("domovčaj", &config).unwrap();
//! for result in &results {
//!     println!("{} scores {}", result.word, result.score);
//! }
//! assert_eq!(results.best().unwrap().word, "domov");
//! ```

// Core domain types
pub mod core;

// Word list loading and storage
pub mod dictionary;

// Matching, scoring and ranking
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod log;

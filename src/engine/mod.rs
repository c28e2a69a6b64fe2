//! Match and score engine
//!
//! Runs letter-pool queries against a dictionary and ranks the results.

mod config;
mod error;
mod generator;
mod results;

pub use config::{DEFAULT_TARGET_LENGTH, LENGTH_PRESETS, QueryConfig};
pub use error::QueryError;
pub use generator::WordGenerator;
pub use results::{LengthGroup, MatchResult, ResultSet, ResultView};

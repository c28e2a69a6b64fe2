//! Command implementations

pub mod benchmark;
pub mod find;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, random_pool, run_benchmark};
pub use find::{FindConfig, FindResult, find_words};

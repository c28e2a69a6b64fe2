//! Benchmark command
//!
//! Runs the generator against random letter pools and summarizes timing and
//! hit rates.

use crate::engine::{MatchResult, QueryConfig, WordGenerator};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Tile bag weighted roughly by Slovak letter frequency
const LETTER_BAG: &str = "aaaaaaaaaooooooooeeeeeeeiiiiiinnnnnrrrrrssssstttttvvvvkkkkllllldddmmmpppujjuuyyzzbbhhcc";

/// Chance that a tile is replaced by one of the allowed diacritics
const DIACRITIC_TILE_CHANCE: f64 = 0.15;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub queries: usize,
    pub query: QueryConfig,
    /// Seed for reproducible pools; random when `None`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(queries: usize, query: QueryConfig) -> Self {
        Self {
            queries,
            query,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub total_matches: usize,
    pub empty_queries: usize,
    pub average_matches: f64,
    /// Best-scoring match over all queries and the pool that produced it
    pub best: Option<(String, MatchResult)>,
    /// Length of the longest match per query -> number of queries
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Draw a random letter pool of the configured length
///
/// Tiles come from [`LETTER_BAG`]; when diacritics are allowed, some tiles are
/// swapped for one of them so the pool exercises literal matching.
pub fn random_pool<R: Rng + ?Sized>(rng: &mut R, config: &QueryConfig) -> String {
    let bag: Vec<char> = LETTER_BAG.chars().collect();
    let diacritics: Vec<char> = config.allowed.iter().collect();

    (0..config.target_length)
        .map(|_| {
            let tile = if !diacritics.is_empty() && rng.random_bool(DIACRITIC_TILE_CHANCE) {
                diacritics.choose(rng)
            } else {
                bag.choose(rng)
            };
            tile.copied().unwrap_or('a')
        })
        .collect()
}

/// Run the generator on `config.queries` random pools
#[must_use]
pub fn run_benchmark(generator: &WordGenerator, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let pb = if config.show_progress {
        ProgressBar::new(config.queries as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut total_matches = 0;
    let mut empty_queries = 0;
    let mut best: Option<(String, MatchResult)> = None;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for _ in 0..config.queries {
        let pool = random_pool(&mut rng, &config.query);
        let Ok(results) = generator.generate(&pool, &config.query) else {
            // Pools are drawn at the target length, so this cannot happen
            continue;
        };

        total_matches += results.len();
        let longest = results.iter().map(|r| r.length).max().unwrap_or(0);
        *distribution.entry(longest).or_insert(0) += 1;

        match results.best() {
            None => empty_queries += 1,
            Some(top) => {
                if best.as_ref().is_none_or(|(_, current)| top.score > current.score) {
                    best = Some((pool.clone(), top.clone()));
                }
            }
        }

        pb.set_message(pool);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_queries = config.queries;

    BenchmarkResult {
        total_queries,
        total_matches,
        empty_queries,
        average_matches: if total_queries > 0 {
            total_matches as f64 / total_queries as f64
        } else {
            0.0
        },
        best,
        distribution,
        duration,
        queries_per_second: total_queries as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AllowedDiacritics, LetterPool};
    use crate::dictionary::CaseFolding;
    use crate::dictionary::loader::load_embedded;

    fn generator() -> WordGenerator {
        WordGenerator::new(load_embedded(CaseFolding::Preserve))
    }

    fn quiet(queries: usize, query: QueryConfig) -> BenchmarkConfig {
        let mut config = BenchmarkConfig::new(queries, query);
        config.seed = Some(7);
        config.show_progress = false;
        config
    }

    #[test]
    fn random_pool_has_target_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in [5, 10, 15] {
            let config = QueryConfig::new(length);
            let pool = random_pool(&mut rng, &config);
            assert_eq!(LetterPool::new(&pool, config.allowed).len(), length);
        }
    }

    #[test]
    fn random_pool_only_uses_allowed_diacritics() {
        let mut rng = StdRng::seed_from_u64(2);
        let allowed = AllowedDiacritics::parse("čš").unwrap();
        let config = QueryConfig::new(15).with_allowed(allowed);

        for _ in 0..50 {
            let pool = random_pool(&mut rng, &config);
            assert!(pool.chars().all(|c| LETTER_BAG.contains(c) || allowed.contains(c)));
        }
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&generator(), &quiet(20, QueryConfig::default()));

        assert_eq!(result.total_queries, 20);
        assert!(result.empty_queries <= 20);
        assert!(result.average_matches >= 0.0);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(&generator(), &quiet(25, QueryConfig::default()));

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_queries);
        assert_eq!(result.distribution.get(&0).copied().unwrap_or(0), result.empty_queries);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let generator = generator();
        let first = run_benchmark(&generator, &quiet(10, QueryConfig::new(15)));
        let second = run_benchmark(&generator, &quiet(10, QueryConfig::new(15)));

        assert_eq!(first.total_matches, second.total_matches);
        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn benchmark_zero_queries() {
        let result = run_benchmark(&generator(), &quiet(0, QueryConfig::default()));

        assert_eq!(result.total_queries, 0);
        assert_eq!(result.total_matches, 0);
        assert!(result.best.is_none());
    }
}

//! Slovak Word Generator - CLI
//!
//! Finds every dictionary word buildable from a pool of letters, with TUI and
//! CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slovak_words::{
    commands::{BenchmarkConfig, FindConfig, find_words, run_benchmark},
    core::AllowedDiacritics,
    dictionary::{
        CaseFolding, Dictionary,
        loader::{load_embedded, load_from_file},
    },
    engine::{DEFAULT_TARGET_LENGTH, QueryConfig, ResultView, WordGenerator},
    output::{print_benchmark_result, print_find_result},
};

#[derive(Parser)]
#[command(
    name = "slovak_words",
    about = "Find every Slovak word you can build from a pool of letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default, bundled sample) or path to a .dic file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Store dictionary words in lowercase instead of their original case
    #[arg(long, global = true)]
    lowercase: bool,

    /// Number of letters in the pool (presets: 5, 10, 15)
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_TARGET_LENGTH)]
    length: usize,

    /// Diacritics to treat as separate letters, e.g. "čšž" (default: none)
    #[arg(short = 'a', long, global = true, default_value = "")]
    allow: String,

    /// Enable debug logging (also: SLOVAK_WORDS_DEBUG=1)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Find all words for a pool of letters
    Find {
        /// The letters to build words from
        letters: String,

        /// View: score (default), length, diacritics, grouped
        #[arg(short, long, default_value = "score")]
        view: String,

        /// Maximum rows to show (per group in the grouped view)
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,
    },

    /// Benchmark the generator on random letter pools
    Benchmark {
        /// Number of random pools to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible pools
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary based on the -d flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": a hunspell-style .dic file
fn load_dictionary(source: &str, case_folding: CaseFolding) -> Result<Dictionary> {
    match source {
        "embedded" => Ok(load_embedded(case_folding)),
        path => load_from_file(path, case_folding)
            .with_context(|| format!("Failed to load dictionary '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Logs go to stderr, which would tear through the TUI
    let debug_enabled = cli.debug || std::env::var("SLOVAK_WORDS_DEBUG").is_ok();
    if !matches!(command, Commands::Play) || debug_enabled {
        slovak_words::log::init_logger(debug_enabled);
    }

    let allowed = AllowedDiacritics::parse(&cli.allow).context("Invalid --allow value")?;
    let query = QueryConfig::new(cli.length).with_allowed(allowed);

    let case_folding = if cli.lowercase {
        CaseFolding::Lowercase
    } else {
        CaseFolding::Preserve
    };
    let generator = WordGenerator::new(load_dictionary(&cli.dictionary, case_folding)?);

    match command {
        Commands::Play => run_play_command(generator, query),
        Commands::Find { letters, view, top } => {
            run_find_command(&generator, letters, query, &view, top)
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&generator, count, seed, query);
            Ok(())
        }
    }
}

fn run_find_command(
    generator: &WordGenerator,
    letters: String,
    query: QueryConfig,
    view: &str,
    top: usize,
) -> Result<()> {
    let mut config = FindConfig::new(letters, query);
    config.view = ResultView::from_name(view);
    config.top = top;

    let result = find_words(config, generator)?;
    print_find_result(&result);
    Ok(())
}

fn run_benchmark_command(
    generator: &WordGenerator,
    count: usize,
    seed: Option<u64>,
    query: QueryConfig,
) {
    println!(
        "Running benchmark on {count} random pools of {} letters...",
        query.target_length
    );

    let mut config = BenchmarkConfig::new(count, query);
    config.seed = seed;

    let result = run_benchmark(generator, &config);
    print_benchmark_result(&result);
}

fn run_play_command(generator: WordGenerator, query: QueryConfig) -> Result<()> {
    use slovak_words::interactive::{App, run_tui};

    let app = App::new(generator, query);
    run_tui(app)
}

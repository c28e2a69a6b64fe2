//! Display functions for command results

use super::formatters::{create_progress_bar, describe_allowed, length_label, score_bar};
use crate::commands::{BenchmarkResult, FindResult};
use crate::engine::{MatchResult, ResultView};
use colored::Colorize;

fn print_match_row(rank: usize, result: &MatchResult, best: u32) {
    println!(
        "  {:>3}. {:<18} {:>3} pts  {} {:>2} ch  {}",
        rank.to_string().bright_black(),
        result.word.bright_white().bold(),
        result.score.to_string().bright_yellow(),
        score_bar(result.score, best, 12).green(),
        result.length,
        if result.diacritics > 0 {
            format!("{} diacritics", result.diacritics).cyan().to_string()
        } else {
            String::new()
        }
    );
}

/// Print the result of finding words
pub fn print_find_result(result: &FindResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}   Allowed diacritics: {}",
        result.letters.to_uppercase().bright_yellow().bold(),
        describe_allowed(result.query.allowed)
    );
    println!("{}", "─".repeat(60).cyan());

    if result.results.is_empty() {
        println!("\n{}", "No words found.".yellow().bold());
        return;
    }

    println!(
        "\n{}  {}",
        format!("✅ Found {} words", result.results.len()).green().bold(),
        format!("[{}]", result.view.title()).bright_black()
    );

    let best = result.results.best().map_or(0, |r| r.score);

    if result.view == ResultView::Grouped {
        for group in result.results.grouped_by_length() {
            println!(
                "\n{} ({})",
                length_label(group.length).bright_cyan().bold(),
                group.matches.len()
            );
            for (i, entry) in group.matches.iter().take(result.top).enumerate() {
                print_match_row(i + 1, entry, best);
            }
            if group.matches.len() > result.top {
                println!("  {}", format!("… {} more", group.matches.len() - result.top).bright_black());
            }
        }
    } else {
        println!();
        for (i, entry) in result.results.view(result.view, result.top).iter().enumerate() {
            print_match_row(i + 1, entry, best);
        }
        if result.results.len() > result.top {
            println!(
                "  {}",
                format!("… {} more", result.results.len() - result.top).bright_black()
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries run:      {}", result.total_queries);
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches).bright_yellow().bold()
    );
    println!(
        "   Empty queries:    {}",
        format!("{}", result.empty_queries).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if let Some((pool, best)) = &result.best {
        println!(
            "   Best word:        {} ({} pts, pool {})",
            best.word.green().bold(),
            best.score,
            pool.to_uppercase()
        );
    }

    println!("\n📈 {}", "Longest word per query:".bright_cyan().bold());
    let mut lengths: Vec<_> = result.distribution.iter().collect();
    lengths.sort_unstable();
    for (&length, &count) in lengths {
        let pct = if result.total_queries > 0 {
            (count as f64 / result.total_queries as f64) * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {length:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

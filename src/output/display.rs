//! Display functions for command results
//!
//! Word lists own stdout, so everything printed around a `find` goes to stderr.

use super::formatters::{create_progress_bar, describe_letters, describe_lengths, percent};
use crate::commands::{BenchmarkResult, CheckResult, FindSummary};
use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::search::Query;
use colored::Colorize;

/// Print a warning line
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "(W)".yellow().bold());
}

/// Print an error line
pub fn print_error(message: &str) {
    eprintln!("{} {message}", "(E)".red().bold());
}

/// Print the bound adjustments and the letter and length summary of a query
pub fn print_query_header(query: &Query) {
    for adjustment in query.adjustments() {
        print_warning(&adjustment.to_string());
    }
    eprintln!("{}", describe_letters(query).bright_cyan());
    eprintln!("{}", describe_lengths(query).bright_cyan());
}

/// Print the counts of a finished search
pub fn print_find_summary(summary: &FindSummary) {
    eprintln!("\n{}", "─".repeat(60).cyan());
    eprintln!(
        "Found {} words in {:.3}s",
        summary.found.to_string().bright_yellow().bold(),
        summary.duration.as_secs_f64()
    );
    if summary.stats.stopped_early {
        eprintln!("{}", "Stopped at the word limit".yellow());
    }

    let max = summary.by_length.values().copied().max().unwrap_or(0);
    for len in MIN_WORD_LEN..=MAX_WORD_LEN {
        if let Some(&count) = summary.by_length.get(&len) {
            let bar = create_progress_bar(count as f64, max as f64, 30);
            eprintln!("   {len:2}: {} {count:5}", bar.green());
        }
    }

    let stats = &summary.stats;
    eprintln!(
        "   Candidates: {}  Pruned: {}  Dead ends: {}  Hit rate: {:.1}%",
        stats.candidates,
        stats.pruned,
        stats.dead_ends,
        stats.hit_rate() * 100.0
    );
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    let word = result.word.bright_yellow().bold();
    let membership = if result.in_vocabulary {
        "in vocabulary".green()
    } else {
        "not in vocabulary".red()
    };
    println!("{word}: {membership}");

    match result.violation {
        Some((pos, violation)) => println!(
            "   {} at position {}: {violation}",
            "pruned".yellow(),
            pos + 1
        ),
        None => println!("   {}", "passes the adjacency rules".green()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Racks searched:   {}", result.total_racks);
    println!(
        "   Words found:      {}",
        result.total_words.to_string().bright_yellow().bold()
    );
    println!(
        "   Fewest words:     {}",
        result.min_words.to_string().yellow()
    );
    println!(
        "   Most words:       {}",
        result.max_words.to_string().green()
    );
    if let Some((rack, count)) = &result.best_rack {
        println!("   Best rack:        {rack} ({count} words)");
    }
    println!("   Candidates:       {}", result.stats.candidates);
    println!("   Pruned letters:   {}", result.stats.pruned);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Racks/second:     {:.1}", result.racks_per_second);

    println!("\n📈 {}", "Words by length:".bright_cyan().bold());
    for len in MIN_WORD_LEN..=MAX_WORD_LEN {
        if let Some(&count) = result.distribution.get(&len) {
            let pct = percent(count, result.total_words);
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {len:2}: {bar} {count:6} ({pct:5.1}%)");
        }
    }
}

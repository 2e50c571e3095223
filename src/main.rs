//! Word generator - CLI
//!
//! Lists the vocabulary words that can be spelled from a set of letters or that
//! fit a template, pruning unlikely letter sequences on the way.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wordgen::{
    commands::{BenchmarkConfig, FindConfig, check_word, find_words, random_racks, run_benchmark},
    filter::{self, AdjacencyRules},
    output::{
        print_benchmark_result, print_check_result, print_error, print_find_summary,
        print_query_header,
    },
    search::WordSearch,
    vocabulary::{self, Vocabulary},
};

#[derive(Parser)]
#[command(
    name = "words",
    about = "Generate the words that can be spelled from a set of letters or match a pattern",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line (default: built-in vocabulary)
    #[arg(long, global = true)]
    vocab: Option<PathBuf>,

    /// Adjacency rules file (default: built-in English rules)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Suppress warnings and summaries on stderr
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the words buildable from LETTERS
    ///
    /// LETTERS containing any non-letter is a pattern over A-Z with unlimited
    /// repeats, e.g. 'b..k'.
    Find {
        /// Letters to use; each repeat allows one more use
        letters: String,

        /// Minimum length if it starts with a digit, otherwise a pattern like 'p...a.'
        min_or_pattern: Option<String>,

        /// Maximum length (with a minimum)
        max: Option<String>,

        /// Search each word length on its own thread
        #[arg(short, long)]
        parallel: bool,

        /// Stop after this many words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print search counters when done
        #[arg(short, long)]
        stats: bool,

        /// Disable adjacency pruning
        #[arg(long)]
        no_prune: bool,
    },

    /// Report whether words are in the vocabulary and survive pruning
    Check {
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Time searches over random racks drawn from the vocabulary
    Bench {
        /// Number of racks
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for rack generation
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Search racks on all cores
        #[arg(short, long)]
        parallel: bool,
    },
}

fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary> {
    match path {
        Some(path) => vocabulary::loader::load_from_file(path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display())),
        None => Ok(Vocabulary::embedded()),
    }
}

fn load_rules(path: Option<&Path>) -> Result<AdjacencyRules> {
    match path {
        Some(path) => filter::load_from_file(path)
            .with_context(|| format!("Failed to load rules from {}", path.display())),
        None => Ok(AdjacencyRules::english()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let vocabulary = load_vocabulary(cli.vocab.as_deref())?;
    let rules = load_rules(cli.rules.as_deref())?;

    match cli.command {
        Commands::Find {
            letters,
            min_or_pattern,
            max,
            parallel,
            limit,
            stats,
            no_prune,
        } => {
            let config = FindConfig {
                input: letters,
                min_or_pattern,
                max,
                limit,
                parallel,
            };
            let rules = if no_prune {
                AdjacencyRules::permissive()
            } else {
                rules
            };
            run_find_command(&config, &vocabulary, &rules, stats, cli.quiet)
        }
        Commands::Check { words } => run_check_command(&words, &vocabulary, &rules),
        Commands::Bench {
            count,
            seed,
            parallel,
        } => {
            let config = BenchmarkConfig {
                count,
                seed,
                parallel,
                show_progress: !cli.quiet,
                ..BenchmarkConfig::default()
            };
            run_bench_command(&config, &vocabulary, &rules);
            Ok(())
        }
    }
}

fn run_find_command(
    config: &FindConfig,
    vocabulary: &Vocabulary,
    rules: &AdjacencyRules,
    show_stats: bool,
    quiet: bool,
) -> Result<()> {
    let query = config.query()?;
    if !quiet {
        print_query_header(&query);
    }

    let search = WordSearch::new(vocabulary, rules);
    let mut out = io::stdout().lock();
    match find_words(&query, &search, config, &mut out) {
        Ok(summary) => {
            if show_stats && !quiet {
                print_find_summary(&summary);
            }
            Ok(())
        }
        // The reader went away (e.g. `| head`); nothing left to do
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e).context("Failed to write words"),
    }
}

fn run_check_command(
    words: &[String],
    vocabulary: &Vocabulary,
    rules: &AdjacencyRules,
) -> Result<()> {
    let mut invalid = 0;
    for word in words {
        match check_word(word, vocabulary, rules) {
            Ok(result) => print_check_result(&result),
            Err(e) => {
                print_error(&e);
                invalid += 1;
            }
        }
    }
    if invalid > 0 {
        bail!("{invalid} of {} words could not be checked", words.len());
    }
    Ok(())
}

fn run_bench_command(config: &BenchmarkConfig, vocabulary: &Vocabulary, rules: &AdjacencyRules) {
    let racks = random_racks(
        vocabulary,
        config.count,
        config.seed,
        config.rack_lengths.clone(),
    );
    let search = WordSearch::new(vocabulary, rules);
    let result = run_benchmark(&search, &racks, config);
    print_benchmark_result(&result);
}

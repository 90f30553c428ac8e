//! Word Ladder Solver - CLI
//!
//! Interactive and one-shot word ladder solving over a word list file, with an
//! embedded fallback dictionary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, list_neighbors, run_benchmark, run_simple, solve_ladder,
    },
    core::Dictionary,
    logging,
    output::{print_benchmark_result, print_neighbors_result, print_solve_result},
    wordlists::{DEFAULT_WORDLIST, loader::load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladder solver using breadth-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (whitespace separated); the built-in list is used if it can't be read
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log filter, e.g. "debug" or "word_ladder=trace" (overrides --verbose)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for a start and target word (default)
    Interactive,

    /// Solve a ladder between two words
    Solve {
        /// Word to start from
        start: String,

        /// Word to reach
        goal: String,

        /// Show each step and search statistics
        #[arg(short = 's', long)]
        stats: bool,
    },

    /// List the dictionary words one letter away from a word
    Neighbors {
        /// Word to inspect
        word: String,
    },

    /// Benchmark the search on random start/goal pairs
    Benchmark {
        /// Word length of the dictionary to draw pairs from
        #[arg(short = 'l', long, default_value = "3")]
        length: usize,

        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible pairs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);
    let wordlist = cli.wordlist;
    let load = |word_len| load_dictionary(&wordlist, word_len);

    match command {
        Commands::Interactive => run_interactive_command(load),
        Commands::Solve { start, goal, stats } => run_solve_command(start, goal, stats, load),
        Commands::Neighbors { word } => run_neighbors_command(&word, load),
        Commands::Benchmark {
            length,
            count,
            seed,
        } => {
            run_benchmark_command(length, count, seed, load);
            Ok(())
        }
    }
}

fn run_interactive_command(load: impl FnOnce(usize) -> Dictionary) -> Result<()> {
    // The session reports rejected pairs and missing ladders itself
    run_simple(load)?;
    Ok(())
}

fn run_solve_command(
    start: String,
    goal: String,
    stats: bool,
    load: impl FnOnce(usize) -> Dictionary,
) -> Result<()> {
    let config = SolveConfig::new(start, goal);
    let result = solve_ladder(&config, load)?;

    print_solve_result(&result, stats);
    Ok(())
}

fn run_neighbors_command(
    word: &str,
    load: impl FnOnce(usize) -> Dictionary,
) -> Result<()> {
    let result = list_neighbors(word, load)?;
    print_neighbors_result(&result);
    Ok(())
}

fn run_benchmark_command(
    length: usize,
    count: usize,
    seed: Option<u64>,
    load: impl FnOnce(usize) -> Dictionary,
) {
    let dictionary = load(length);
    println!(
        "Running benchmark on {count} random pairs from {} {length}-letter words...",
        dictionary.len()
    );

    let config = BenchmarkConfig {
        seed,
        ..BenchmarkConfig::new(count)
    };
    let result = run_benchmark(&dictionary, &config);
    print_benchmark_result(&result);
}

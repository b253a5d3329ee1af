//! Slovo Solver - CLI
//!
//! Helper for the Russian five-letter word game: interactive mode, one-shot
//! suggestions, self-play and benchmarks over the frequent word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slovo_solver::{
    commands::{
        SolveConfig, analyze_word, parse_history_entry, run_benchmark, run_simple,
        select_targets, solve_word, suggest,
    },
    output::{print_analysis_result, print_benchmark_result, print_solve_result, print_suggestions},
    solver::{Dictionary, Solver, SolverOptions},
    wordlists::{DEFAULT_FREQUENT_PATH, DEFAULT_JUNK_PATH, loader::load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "slovo_solver",
    about = "Russian five-letter word game helper using a frequency-weighted letter heuristic",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Frequent word list, one word per line, most common first
    #[arg(short, long, global = true, default_value = DEFAULT_FREQUENT_PATH)]
    frequent: String,

    /// Junk (rare) word list, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_JUNK_PATH)]
    junk: String,

    /// Number of candidates scored for the opening guess
    #[arg(
        long,
        global = true,
        default_value = "100",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    first_guess_limit: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Simple,

    /// Suggest the next guess for a feedback history
    Suggest {
        /// Previous rounds as GUESS:FEEDBACK, e.g. ВОДКА:ЗССЖС
        history: Vec<String>,

        /// Number of ranked guesses to show
        #[arg(short = 'n', long, default_value = "5")]
        top: usize,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },

    /// Show how a specific word is scored
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance over frequent words
    Benchmark {
        /// Number of frequent words to test
        #[arg(short = 'n', long, default_value = "500")]
        count: usize,

        /// Pick the words at random instead of the most frequent ones
        #[arg(short, long)]
        random: bool,

        /// Seed for random selection
        #[arg(short, long)]
        seed: Option<u64>,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.frequent, &cli.junk).with_context(|| {
        format!(
            "Failed to load word lists {} and {}",
            cli.frequent, cli.junk
        )
    })?;
    let options = SolverOptions::new(cli.first_guess_limit);

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&mut Solver::with_options(&dictionary, options)),
        Commands::Suggest { history, top } => run_suggest_command(&history, top, &dictionary, options),
        Commands::Solve {
            word,
            verbose,
            max_guesses,
        } => run_solve_command(word, verbose, max_guesses, &dictionary, options),
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            random,
            seed,
            max_guesses,
        } => {
            run_benchmark_command(count, random, seed, max_guesses, &dictionary, options);
            Ok(())
        }
    }
}

fn run_suggest_command(
    history: &[String],
    top: usize,
    dictionary: &Dictionary,
    options: SolverOptions,
) -> Result<()> {
    let history = history
        .iter()
        .map(|entry| parse_history_entry(entry))
        .collect::<Result<Vec<_>>>()?;

    let mut solver = Solver::with_options(dictionary, options);
    let result = suggest(&mut solver, &history, top);
    print_suggestions(&result);
    Ok(())
}

fn run_solve_command(
    word: String,
    verbose: bool,
    max_guesses: usize,
    dictionary: &Dictionary,
    options: SolverOptions,
) -> Result<()> {
    let mut config = SolveConfig::new(word);
    config.max_guesses = max_guesses;

    let mut solver = Solver::with_options(dictionary, options);
    let result = solve_word(&config, &mut solver)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    random: bool,
    seed: Option<u64>,
    max_guesses: usize,
    dictionary: &Dictionary,
    options: SolverOptions,
) {
    let targets = select_targets(dictionary, count, random, seed);
    if random {
        println!("Running benchmark on {} random frequent words...", targets.len());
    } else {
        println!("Running benchmark on the {} most frequent words...", targets.len());
    }

    let result = run_benchmark(dictionary, options, &targets, max_guesses);
    print_benchmark_result(&result);
}

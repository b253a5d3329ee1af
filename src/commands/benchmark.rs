//! Benchmark command
//!
//! Plays one game per target word and collects statistics. Games run in
//! parallel, each with its own solver over the shared dictionary.

use super::solve::play_game;
use crate::core::Word;
use crate::solver::{Dictionary, Solver, SolverOptions};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Number of solved games per guess count
    pub distribution: FxHashMap<usize, usize>,
    /// Targets that were not solved, in target order
    pub failed_words: Vec<String>,
    /// How often each word was used as the opening guess
    pub first_guesses: FxHashMap<String, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Outcome of one benchmark game
struct GameOutcome {
    target: String,
    first_guess: Option<String>,
    num_guesses: usize,
    success: bool,
}

/// Pick benchmark targets from the frequent list
///
/// Takes the first `count` frequent words, or a random sample of `count` when
/// `random` is set. A `seed` makes the sample reproducible.
#[must_use]
pub fn select_targets(
    dictionary: &Dictionary,
    count: usize,
    random: bool,
    seed: Option<u64>,
) -> Vec<Word> {
    let frequent = dictionary.frequent_words();
    if !random {
        return frequent.iter().take(count).cloned().collect();
    }

    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    frequent.choose_multiple(&mut rng, count).cloned().collect()
}

/// Run benchmark on a set of target words
pub fn run_benchmark(
    dictionary: &Dictionary,
    options: SolverOptions,
    target_words: &[Word],
    max_guesses: usize,
) -> BenchmarkResult {
    info!(
        "Benchmarking {} targets with up to {max_guesses} guesses",
        target_words.len()
    );

    let pb = ProgressBar::new(target_words.len() as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let outcomes: Vec<GameOutcome> = target_words
        .par_iter()
        .map(|target| {
            let mut solver = Solver::with_options(dictionary, options);
            let result = play_game(&mut solver, target, max_guesses);
            pb.inc(1);
            GameOutcome {
                target: result.target,
                first_guess: result.guesses.first().map(|step| step.word.clone()),
                num_guesses: result.guesses.len(),
                success: result.success,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    summarize(&outcomes, duration)
}

fn summarize(outcomes: &[GameOutcome], duration: Duration) -> BenchmarkResult {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut first_guesses: FxHashMap<String, usize> = FxHashMap::default();
    let mut failed_words = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for outcome in outcomes {
        if let Some(first) = &outcome.first_guess {
            *first_guesses.entry(first.clone()).or_insert(0) += 1;
        }

        if outcome.success {
            total_guesses += outcome.num_guesses;
            min_guesses = min_guesses.min(outcome.num_guesses);
            max_guesses = max_guesses.max(outcome.num_guesses);
            *distribution.entry(outcome.num_guesses).or_insert(0) += 1;
        } else {
            failed_words.push(outcome.target.clone());
        }
    }

    let total_words = outcomes.len();
    let solved = total_words - failed_words.len();

    BenchmarkResult {
        total_words,
        solved,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        failed_words,
        first_guesses,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, SuggestResult};
use crate::solver::Commonness;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word,
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {:.4}", step.score);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the ranked suggestions for the next guess
pub fn print_suggestions(result: &SuggestResult) {
    println!(
        "\n📊 {} candidates remaining ({} frequent)",
        result.candidate_count, result.frequent_count
    );

    if result.guesses.is_empty() {
        println!(
            "{}",
            "❌ No word is consistent with this feedback.".red().bold()
        );
        return;
    }

    let best = result.guesses[0].1;
    for (i, (word, score)) in result.guesses.iter().enumerate() {
        let bar = create_progress_bar(*score, best, 20);
        let word = if i == 0 {
            word.bright_yellow().bold()
        } else {
            word.normal()
        };
        println!("  {:>2}. {word} [{}] {score:.4}", i + 1, bar.green());
    }

    if result.candidate_count <= result.sample.len() {
        println!("\nRemaining candidates: {}", result.sample.join(", "));
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let status = match result.commonness {
        Commonness::Ranked(rank) => format!("frequent, rank {rank}"),
        Commonness::Unranked => "frequent, unranked".to_string(),
        Commonness::Rare if result.in_dictionary => "junk list only".to_string(),
        Commonness::Rare => "not in the word lists".to_string(),
    };
    println!("\n📖 {status}");

    let heaviest = result.max_letter_weight();
    println!("\n🔤 Letter weights:");
    for (letter, weight) in &result.letter_weights {
        let bar = create_progress_bar(*weight, heaviest, 20);
        println!("   {letter}  [{}] {weight:.4}", bar.green());
    }

    let top: Vec<String> = result
        .top_letters
        .iter()
        .map(|(letter, weight)| format!("{letter} {weight:.3}"))
        .collect();
    println!("   Most common: {}", top.join(", ").bright_black());

    let b = &result.breakdown;
    println!("\n🧮 Factors:");
    println!("   Letter sum:   {:.4}", b.letter_sum);
    println!("   Uniqueness:   × {:.2}", b.uniqueness);
    println!("   Vowels:       × {:.2}", b.vowel_factor);
    println!("   Commonness:   × {:.4}", b.commonness_factor);
    println!(
        "   Score:        {}",
        format!("{:.4}", b.total).bright_yellow().bold()
    );
    println!(
        "\n   Place {} of {} dictionary words",
        result.score_position, result.dictionary_size
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        percent(result.solved, result.total_words)
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = percent(count, result.total_words);
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    let mut openings: Vec<(&String, &usize)> = result.first_guesses.iter().collect();
    openings.sort_by(|(w1, c1), (w2, c2)| c2.cmp(c1).then(w1.cmp(w2)));
    if let Some((word, count)) = openings.first() {
        println!("\n🎯 Opening guess: {word} ({count} games)");
    }

    if !result.failed_words.is_empty() {
        println!(
            "\n❌ {} ({}):",
            "Not solved".red().bold(),
            result.failed_words.len()
        );
        for word in result.failed_words.iter().take(20) {
            println!("   • {word}");
        }
        if result.failed_words.len() > 20 {
            println!("   … and {} more", result.failed_words.len() - 20);
        }
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

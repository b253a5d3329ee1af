//! Simple interactive CLI mode
//!
//! Text-based interactive helper: suggests a guess, reads the game's feedback
//! and narrows the candidates.

use crate::core::{Feedback, Word};
use crate::output::formatters::colored_feedback;
use crate::solver::Solver;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// What the player typed at the feedback prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    NewGame,
    Undo,
    /// Feedback for `word`, or for the suggested guess when `word` is `None`
    Feedback {
        word: Option<Word>,
        feedback: Feedback,
    },
    Invalid(String),
}

/// Interpret one line typed at the feedback prompt
///
/// Accepts a command, a bare feedback string for the suggested word, or
/// `WORD FEEDBACK` when a different word was played.
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let mut tokens = line.split_whitespace();
    let (first, second, rest) = (tokens.next(), tokens.next(), tokens.next());

    match (first, second, rest) {
        (None, ..) => Input::Invalid("Empty input".to_string()),
        (Some(cmd), None, None) => match cmd.to_lowercase().as_str() {
            "quit" | "q" | "exit" | "выход" => Input::Quit,
            "new" | "n" | "заново" => Input::NewGame,
            "undo" | "u" | "отмена" => Input::Undo,
            "win" | "solved" | "да" => Input::Feedback {
                word: None,
                feedback: Feedback::SOLVED,
            },
            _ => match Feedback::parse(cmd) {
                Ok(feedback) => Input::Feedback {
                    word: None,
                    feedback,
                },
                Err(e) => Input::Invalid(e.to_string()),
            },
        },
        (Some(word), Some(feedback), None) => match (Word::new(word), Feedback::parse(feedback)) {
            (Ok(word), Ok(feedback)) => Input::Feedback {
                word: Some(word),
                feedback,
            },
            (Err(e), _) => Input::Invalid(e.to_string()),
            (_, Err(e)) => Input::Invalid(e.to_string()),
        },
        _ => Input::Invalid("Too many words; expected FEEDBACK or WORD FEEDBACK".to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(solver: &mut Solver<'_>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Слово - помощник для игры в 5 букв              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("After each guess, enter the feedback the game showed:\n");
    println!("  - З / G / 🟩  letter in place");
    println!("  - Ж / Y / 🟨  letter elsewhere in the word");
    println!("  - С / - / ⬜  letter not in the word");
    println!("  - Prefix with the word if you played something else: ПЕСНЯ ЗССЖС");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut history: Vec<(Word, Feedback)> = Vec::new();
    solver.reset();

    loop {
        let turn = history.len() + 1;
        let candidates_count = solver.candidate_count();

        let Some(guess) = solver.best_guess(history.is_empty()) else {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.as_deref().map(parse_input) {
                None | Some(Input::Quit) => return Ok(()),
                Some(Input::Undo) => undo(solver, &mut history),
                Some(Input::NewGame) => new_game(solver, &mut history),
                Some(_) => {}
            }
            continue;
        };

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}: {candidates_count} candidates remaining ({} frequent)",
            solver.frequent_count()
        );
        println!("────────────────────────────────────────────────────────────");
        println!(
            "\n📊 Suggested guess: {}",
            guess.text().bright_yellow().bold()
        );

        let alternatives = solver.ranked_guesses(history.is_empty(), 5);
        if alternatives.len() > 1 {
            println!("   Alternatives:");
            for (word, score) in alternatives.iter().skip(1) {
                println!("     {} {score:.4}", word.text());
            }
        }
        println!();

        if candidates_count <= 10 {
            println!("Remaining candidates:");
            for candidate in solver.candidates() {
                println!("  • {candidate}");
            }
            println!();
        }

        let (played, feedback) = loop {
            let Some(line) = get_user_input("Feedback (ЗЖС, 'win', or command)")? else {
                return Ok(());
            };

            match parse_input(&line) {
                Input::Quit => {
                    println!("\n👋 Удачи!\n");
                    return Ok(());
                }
                Input::NewGame => {
                    new_game(solver, &mut history);
                    break (None, None);
                }
                Input::Undo => {
                    undo(solver, &mut history);
                    break (None, None);
                }
                Input::Feedback { word, feedback } => {
                    break (Some(word.unwrap_or_else(|| guess.clone())), Some(feedback));
                }
                Input::Invalid(reason) => println!("❌ {reason}\n"),
            }
        };

        let (Some(played), Some(feedback)) = (played, feedback) else {
            continue;
        };

        solver.apply_feedback(&played, &feedback);
        history.push((played, feedback));

        if feedback.is_solved() {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                "    🎉  С Л О В О   О Т Г А Д А Н О !  🎉    "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
            println!(
                "\n  Solution found in {} {}",
                history.len().to_string().bright_cyan().bold(),
                if history.len() == 1 { "guess" } else { "guesses" }
            );

            println!("\n  Guess history:");
            for (i, (word, fb)) in history.iter().enumerate() {
                println!(
                    "    {}. {} {}",
                    (i + 1).to_string().bright_black(),
                    colored_feedback(word, fb),
                    fb.to_emoji()
                );
            }
            println!();

            match get_user_input("Play again? (yes/no)")?
                .map(|answer| answer.to_lowercase())
                .as_deref()
            {
                Some("yes" | "y" | "да" | "д") => new_game(solver, &mut history),
                _ => {
                    println!("\n👋 Удачи!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn new_game(solver: &mut Solver<'_>, history: &mut Vec<(Word, Feedback)>) {
    history.clear();
    solver.reset();
    println!("\n🔄 New game started!\n");
}

/// Drop the last round; filtering never re-adds words, so replay the rest
fn undo(solver: &mut Solver<'_>, history: &mut Vec<(Word, Feedback)>) {
    if history.pop().is_none() {
        println!("Nothing to undo!\n");
        return;
    }

    solver.reset();
    for (word, feedback) in history.iter() {
        solver.apply_feedback(word, feedback);
    }
    println!("✓ Undone! Back to turn {}\n", history.len() + 1);
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

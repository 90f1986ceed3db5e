//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI

use crate::game::GameEngine;
use crate::output::formatters::{score_bar, score_verdict, spaced_letters};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(engine: &mut GameEngine<R>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(stdout, "║                    Unscramble - CLI Mode                     ║")?;
    writeln!(stdout, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(stdout, "Unscramble the letters to find the word.")?;
    writeln!(stdout, "Commands: 'skip' to pass, 'restart' for a new game, 'quit' to exit\n")?;

    let scores = play(engine, stdin.lock(), &mut stdout)?;
    debug!(games = scores.len(), "simple mode finished");
    Ok(())
}

/// Drive sessions from `input` until the player quits or input ends
///
/// Returns the final score of every completed session.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<R: Rng, I: BufRead, O: Write>(
    engine: &mut GameEngine<R>,
    mut input: I,
    output: &mut O,
) -> io::Result<Vec<u32>> {
    let mut final_scores = Vec::new();

    loop {
        writeln!(output, "────────────────────────────────────────────────────────────")?;
        writeln!(
            output,
            "Word {} of {}  |  Score: {}",
            engine.current_word_count(),
            engine.max_words(),
            engine.score()
        )?;
        writeln!(output, "────────────────────────────────────────────────────────────")?;
        writeln!(
            output,
            "\n  {}\n",
            spaced_letters(engine.current_scrambled_word())
        )?;

        let Some(line) = read_line(&mut input, output, "Your guess")? else {
            return Ok(final_scores);
        };

        // A correct answer wins over a command spelled the same way
        let guess = line.to_lowercase();
        let round_over = if !guess.is_empty() && engine.is_user_word_correct(&guess) {
            writeln!(
                output,
                "{}\n",
                format!("✓ Correct! +{}", engine.config().score_increase).green()
            )?;
            true
        } else {
            match guess.as_str() {
                "quit" | "q" | "exit" => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(final_scores);
                }
                "restart" | "new" => {
                    engine.reset();
                    writeln!(output, "\n🔄 New game started!\n")?;
                    false
                }
                "skip" | "s" => {
                    writeln!(
                        output,
                        "⏭  Skipped. The word was {}\n",
                        engine.reveal().text().to_uppercase()
                    )?;
                    true
                }
                "" => {
                    writeln!(output, "Type a guess, or 'skip'.\n")?;
                    false
                }
                _ => {
                    writeln!(output, "{}\n", "✗ Try again!".red())?;
                    false
                }
            }
        };

        if round_over && !engine.next_word() {
            final_scores.push(engine.score());
            show_final_score(output, engine.score(), engine.config().max_score())?;

            let answer = read_line(&mut input, output, "Play again? (yes/no)")?;
            match answer.as_deref().map(str::to_lowercase).as_deref() {
                Some("yes" | "y") => {
                    engine.reset();
                    writeln!(output, "\n🔄 New game started!\n")?;
                }
                _ => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(final_scores);
                }
            }
        }
    }
}

fn show_final_score<O: Write>(output: &mut O, score: u32, max_score: u64) -> io::Result<()> {
    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "{}",
        "              🎉  C O N G R A T U L A T I O N S !  🎉"
            .bright_green()
            .bold()
    )?;
    writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "\n  You scored: {} / {max_score}",
        score.to_string().bright_yellow().bold()
    )?;
    writeln!(
        output,
        "  [{}] {}\n",
        score_bar(score, max_score, 20).green(),
        score_verdict(score, max_score)
    )?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

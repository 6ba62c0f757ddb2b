//! Display functions for game snapshots

use super::formatters::{create_progress_bar, spaced_letters, word_progress};
use crate::core::GameState;
use crate::engine::GuessOutcome;
use colored::Colorize;
use std::io::{self, Write};

/// Print the puzzle and running totals for a snapshot
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_state<W: Write>(
    out: &mut W,
    state: &GameState,
    round_length: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Word {}  [{}]  Score: {}",
        word_progress(state.word_count, round_length).bright_white(),
        create_progress_bar(state.word_count, round_length, 20).cyan(),
        state.score.to_string().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "\n   {}\n",
        spaced_letters(&state.scrambled_word).bright_green().bold()
    )?;
    Ok(())
}

/// Print feedback for a submitted guess
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: GuessOutcome,
    increment: u32,
) -> io::Result<()> {
    match outcome {
        GuessOutcome::Correct => {
            writeln!(out, "{}", format!("✅ Correct! +{increment}").green().bold())
        }
        GuessOutcome::Wrong => writeln!(out, "{}", "❌ Wrong guess! Try again.".red().bold()),
        GuessOutcome::Ignored => writeln!(out, "The game is over."),
    }
}

/// Print the end-of-game banner
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_game_over<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "    🎉  G A M E   O V E R  🎉    ".bright_green().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\n  Final score: {}",
        state.score.to_string().bright_yellow().bold()
    )?;
    writeln!(out, "  Words played: {}\n", state.word_count)?;
    Ok(())
}

/// Print the list of text-mode commands
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Type your guess and press Enter.")?;
    writeln!(out, "Commands: /skip to skip the word, /new for a new game,")?;
    writeln!(out, "          /help for this text, /quit to exit\n")?;
    Ok(())
}

//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. Reads guesses line by line and renders
//! each published snapshot.

use crate::core::GameState;
use crate::engine::GameEngine;
use crate::output::{write_game_over, write_help, write_outcome, write_state};
use anyhow::Result;
use rand::Rng;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

enum Command<'a> {
    Guess(&'a str),
    Skip,
    NewGame,
    Help,
    Quit,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "/skip" | "/s" => Self::Skip,
            "/new" | "/n" => Self::NewGame,
            "/help" | "/h" | "/?" => Self::Help,
            "/quit" | "/q" | "/exit" => Self::Quit,
            _ => Self::Guess(line),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Returns when the player quits, declines another game, or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// engine cannot pick a word.
pub fn run_simple<R, B, W>(engine: &mut GameEngine<R>, mut input: B, out: &mut W) -> Result<()>
where
    R: Rng,
    B: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Unscramble - Interactive Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    write_help(out)?;

    let pending: Rc<RefCell<Vec<GameState>>> = Rc::default();
    let sink = Rc::clone(&pending);
    let subscription = engine.subscribe(move |state| sink.borrow_mut().push(state.clone()));

    let result = play(engine, &pending, &mut input, out);

    engine.unsubscribe(subscription);
    result
}

fn play<R, B, W>(
    engine: &mut GameEngine<R>,
    pending: &RefCell<Vec<GameState>>,
    input: &mut B,
    out: &mut W,
) -> Result<()>
where
    R: Rng,
    B: BufRead,
    W: Write,
{
    loop {
        let latest = pending.borrow_mut().drain(..).last();
        if let Some(state) = latest {
            if state.is_game_over {
                write_game_over(out, &state)?;
                match prompt(input, out, "Play again? (yes/no)")?.as_deref() {
                    Some(answer) if is_yes(answer) => {
                        engine.reset_game()?;
                        continue;
                    }
                    _ => {
                        writeln!(out, "\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                }
            }
            write_state(out, &state, engine.round_length())?;
        }

        let Some(line) = prompt(input, out, "Your guess")? else {
            writeln!(out)?;
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Guess(text) => {
                engine.update_guess(text);
                let outcome = engine.check_user_guess()?;
                write_outcome(out, outcome, engine.config().score_increment)?;
            }
            Command::Skip => {
                writeln!(out, "⏭  Skipped.")?;
                engine.skip_word()?;
            }
            Command::NewGame => {
                writeln!(out, "\n🔄 New game started!")?;
                engine.reset_game()?;
            }
            Command::Help => write_help(out)?,
            Command::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Print a prompt and read one line without its line ending
///
/// Returns `None` at end of input.
fn prompt<B: BufRead, W: Write>(
    input: &mut B,
    out: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

//! Unscramble - CLI
//!
//! Word-scramble game with TUI and plain text modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use tracing::info;
use unscramble::{
    commands::{run_simple, scramble_word},
    core::WordList,
    engine::{DEFAULT_MAX_WORDS, DEFAULT_SCORE_INCREMENT, GameConfig, GameEngine},
    interactive::{App, run_tui},
    logging,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Unscramble shuffled words, one round at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Points awarded per correct guess
    #[arg(short = 's', long, global = true, default_value_t = DEFAULT_SCORE_INCREMENT)]
    score_increment: u32,

    /// Words per game (capped at the word list size)
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Seed for reproducible word order and scrambles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Print one scramble of a word
    Scramble {
        /// The word to scramble
        word: String,
    },
}

/// Load the word list based on the -w flag
fn load_words(wordlist: Option<&str>) -> Result<WordList> {
    match wordlist {
        Some(path) => load_from_file(path),
        None => words_from_slice(WORDS).context("Built-in word list is invalid"),
    }
}

fn build_engine(cli: &Cli) -> Result<GameEngine> {
    let words = load_words(cli.wordlist.as_deref())?;
    info!(words = words.len(), "loaded word list");

    let config = GameConfig::new(cli.score_increment, cli.max_words);
    let engine = match cli.seed {
        Some(seed) => GameEngine::seeded(words, config, seed),
        None => GameEngine::new(words, config),
    };
    engine.context("Failed to start game")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(build_engine(&cli)?)),
        Commands::Simple => {
            let mut engine = build_engine(&cli)?;
            run_simple(&mut engine, io::stdin().lock(), &mut io::stdout())
        }
        Commands::Scramble { word } => {
            let result = scramble_word(word, cli.seed).map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", result.scrambled);
            Ok(())
        }
    }
}

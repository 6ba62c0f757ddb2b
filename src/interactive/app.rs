//! TUI application state and logic

use crate::engine::{GameEngine, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            messages: vec![
                Message {
                    text: "Welcome! Unscramble the letters to find the word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter submits, TAB skips, ESC quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        if self.engine.state().is_game_over {
            InputMode::GameOver
        } else {
            InputMode::Guessing
        }
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot pick the next word.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode() {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('n' | 'N') | KeyCode::Enter => {
                    self.new_game()?;
                }
                _ => {
                    // Only new game or quit after the last word
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char(c) => {
                    let mut guess = self.engine.user_guess().to_string();
                    guess.push(c);
                    self.engine.update_guess(guess);
                }
                KeyCode::Backspace => {
                    let mut guess = self.engine.user_guess().to_string();
                    guess.pop();
                    self.engine.update_guess(guess);
                }
                KeyCode::Enter => {
                    self.submit()?;
                }
                KeyCode::Tab => {
                    self.skip()?;
                }
                _ => {}
            },
        }

        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        match self.engine.check_user_guess()? {
            GuessOutcome::Correct => {
                let increment = self.engine.config().score_increment;
                self.add_message(&format!("Correct! +{increment} points"), MessageStyle::Success);
            }
            GuessOutcome::Wrong => {
                self.add_message("Wrong guess! Try again.", MessageStyle::Error);
            }
            GuessOutcome::Ignored => {}
        }
        self.announce_game_over();
        Ok(())
    }

    fn skip(&mut self) -> Result<()> {
        self.engine.skip_word()?;
        self.add_message("Skipped.", MessageStyle::Info);
        self.announce_game_over();
        Ok(())
    }

    fn announce_game_over(&mut self) {
        let state = self.engine.state();
        if state.is_game_over {
            let text = format!(
                "Game over! Final score {} after {} words.",
                state.score, state.word_count
            );
            self.add_message(&text, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    /// Start over with a fresh word
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot pick a word.
    pub fn new_game(&mut self) -> Result<()> {
        self.engine.reset_game()?;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! TUI application state and logic

use crate::game::GameEngine;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App<R: Rng = StdRng> {
    pub engine: GameEngine<R>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Set after a wrong guess, cleared by the next correct guess or skip
    pub guess_error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    FinalScore,
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

/// Totals across the sessions played in this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: u32,
    pub total_score: u64,
    pub words_solved: usize,
    pub words_skipped: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / self.games_played as f64
        }
    }
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(engine: GameEngine<R>) -> Self {
        debug!(
            scrambled = engine.current_scrambled_word(),
            score = engine.score(),
            word_count = engine.current_word_count(),
            "app created"
        );

        Self {
            engine,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Unscramble the letters to find the word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter submits, Tab skips, Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            guess_error: false,
        }
    }

    /// Check the typed guess; on success move on or end the session
    pub fn on_submit_word(&mut self) {
        let player_word = self.input_buffer.trim().to_string();
        if player_word.is_empty() {
            return;
        }

        if self.engine.is_user_word_correct(&player_word) {
            self.set_error_text_field(false);
            self.stats.words_solved += 1;
            self.add_message(
                &format!(
                    "✓ {} is correct! +{}",
                    player_word.to_uppercase(),
                    self.engine.config().score_increase
                ),
                MessageStyle::Success,
            );
            if !self.engine.next_word() {
                self.show_final_score();
            }
        } else {
            self.set_error_text_field(true);
            self.add_message("✗ Try again!", MessageStyle::Error);
        }
    }

    /// Give up on the current word without scoring
    pub fn on_skip_word(&mut self) {
        let skipped = self.engine.reveal().text().to_uppercase();
        self.stats.words_skipped += 1;
        self.add_message(&format!("Skipped. The word was {skipped}"), MessageStyle::Info);

        if self.engine.next_word() {
            self.set_error_text_field(false);
        } else {
            self.show_final_score();
        }
    }

    pub fn restart_game(&mut self) {
        self.engine.reset();
        self.set_error_text_field(false);
        self.input_mode = InputMode::Guessing;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn exit_game(&mut self) {
        self.should_quit = true;
    }

    fn set_error_text_field(&mut self, error: bool) {
        self.guess_error = error;
        if !error {
            self.input_buffer.clear();
        }
    }

    fn show_final_score(&mut self) {
        let score = self.engine.score();
        self.stats.games_played += 1;
        self.stats.total_score += u64::from(score);
        self.stats.best_score = self.stats.best_score.max(score);
        self.input_mode = InputMode::FinalScore;
        self.input_buffer.clear();
        info!(score, games = self.stats.games_played, "final score shown");
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let KeyCode::Char('c') = key.code
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.exit_game();
            return;
        }

        match self.input_mode {
            InputMode::FinalScore => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.exit_game(),
                KeyCode::Char('r' | 'R') | KeyCode::Enter => self.restart_game(),
                _ => {
                    // The final score panel is not dismissable otherwise
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.exit_game(),
                KeyCode::Tab => self.on_skip_word(),
                KeyCode::Enter => self.on_submit_word(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) if c.is_alphabetic() => {
                    self.input_buffer.push(c);
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// Returns the statistics gathered over the run.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<Statistics> {
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

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::loader::words_from_slice;

    fn app(max_words: usize) -> App {
        let pool = words_from_slice(&["cat", "dog", "owl", "fox", "emu"]);
        let engine = GameEngine::seeded(pool, GameConfig::new(max_words, 20), 31).unwrap();
        App::new(engine)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_fills_buffer() {
        let mut app = app(3);
        type_word(&mut app, "ab1c");
        assert_eq!(app.input_buffer, "abc");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "ab");
    }

    #[test]
    fn wrong_guess_sets_error() {
        let mut app = app(3);
        type_word(&mut app, "zzz");
        press(&mut app, KeyCode::Enter);

        assert!(app.guess_error);
        assert_eq!(app.input_buffer, "zzz");
        assert_eq!(app.engine.score(), 0);
        assert_eq!(app.engine.current_word_count(), 1);
    }

    #[test]
    fn correct_guess_clears_error_and_advances() {
        let mut app = app(3);
        type_word(&mut app, "zzz");
        press(&mut app, KeyCode::Enter);

        app.input_buffer.clear();
        let answer = app.engine.reveal().text().to_uppercase();
        type_word(&mut app, &answer);
        press(&mut app, KeyCode::Enter);

        assert!(!app.guess_error);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.engine.score(), 20);
        assert_eq!(app.engine.current_word_count(), 2);
        assert_eq!(app.stats.words_solved, 1);
    }

    #[test]
    fn skipping_to_the_end_shows_final_score() {
        let mut app = app(2);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::Guessing);
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.input_mode, InputMode::FinalScore);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.words_skipped, 2);
        assert!(app.engine.is_complete());
    }

    #[test]
    fn final_score_ignores_typing() {
        let mut app = app(1);
        press(&mut app, KeyCode::Tab);
        type_word(&mut app, "abc");
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::FinalScore);
    }

    #[test]
    fn play_again_from_final_score() {
        let mut app = app(1);
        let answer = app.engine.reveal().text().to_string();
        type_word(&mut app, &answer);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::FinalScore);
        assert_eq!(app.stats.best_score, 20);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.engine.score(), 0);
        assert_eq!(app.engine.current_word_count(), 1);
    }

    #[test]
    fn exit_from_final_score() {
        let mut app = app(1);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn escape_quits_while_guessing() {
        let mut app = app(3);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app(3);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn empty_submit_is_ignored() {
        let mut app = app(3);
        press(&mut app, KeyCode::Enter);
        assert!(!app.guess_error);
        assert_eq!(app.engine.current_word_count(), 1);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(3);
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "msg 9");
    }

    #[test]
    fn average_score() {
        let stats = Statistics {
            games_played: 2,
            total_score: 100,
            ..Statistics::default()
        };
        assert!((stats.average_score() - 50.0).abs() < f64::EPSILON);
        assert!(Statistics::default().average_score().abs() < f64::EPSILON);
    }
}

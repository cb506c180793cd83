//! TUI application state and logic

use crate::game::{GameSession, GameState, GuessOutcome, Hangman};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub hangman: &'a Hangman,
    pub session: Option<GameSession<'a>>,
    pub input_mode: InputMode,
    pub length_input: String,
    pub retries_input: String,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    /// Word shown once a game is over
    pub secret: Option<String>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Length,
    Retries,
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub letter: char,
    pub outcome: GuessOutcome,
    pub pattern: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(hangman: &'a Hangman) -> Self {
        let lengths = hangman.dictionary().lengths();
        let default_length = if hangman.dictionary().has_length(6) {
            6
        } else {
            lengths.first().copied().unwrap_or(0)
        };

        Self {
            hangman,
            session: None,
            input_mode: InputMode::Length,
            length_input: default_length.to_string(),
            retries_input: hangman.config().max_allowed_retries.min(6).to_string(),
            history: Vec::new(),
            messages: vec![
                Message {
                    text: "Welcome! I'm thinking of a word... or am I?".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Choose a word length and press Enter".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            secret: None,
            should_quit: false,
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Length => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_digit() && self.length_input.len() < 3 => {
                    self.length_input.push(c);
                }
                KeyCode::Backspace => {
                    self.length_input.pop();
                }
                KeyCode::Enter => self.confirm_length(),
                _ => {}
            },
            InputMode::Retries => match key.code {
                KeyCode::Esc => self.input_mode = InputMode::Length,
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_digit() && self.retries_input.len() < 3 => {
                    self.retries_input.push(c);
                }
                KeyCode::Backspace => {
                    self.retries_input.pop();
                }
                KeyCode::Enter => self.start_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => {
                    self.session = None;
                    self.input_mode = InputMode::Length;
                    self.add_message("Game abandoned", MessageStyle::Info);
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    self.handle_guess(c.to_ascii_lowercase());
                }
                KeyCode::Char(c) => {
                    self.add_message(&format!("'{c}' is not a letter"), MessageStyle::Error);
                }
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => {
                    self.session = None;
                    self.input_mode = InputMode::Length;
                    self.add_message("Choose a word length and press Enter", MessageStyle::Info);
                }
                KeyCode::Char('r') => self.start_game(),
                _ => {}
            },
        }
    }

    fn confirm_length(&mut self) {
        match self.length_input.parse::<usize>() {
            Ok(length) if self.hangman.dictionary().has_length(length) => {
                self.input_mode = InputMode::Retries;
                self.add_message(
                    &format!(
                        "How many wrong guesses? (0-{})",
                        self.hangman.config().max_allowed_retries
                    ),
                    MessageStyle::Info,
                );
            }
            Ok(length) => self.add_message(
                &format!("No dictionary words have {length} letters"),
                MessageStyle::Error,
            ),
            Err(_) => self.add_message("Enter a word length", MessageStyle::Error),
        }
    }

    /// Start a game from the current length and retries inputs
    pub fn start_game(&mut self) {
        let hangman = self.hangman;
        let (Ok(length), Ok(retries)) = (
            self.length_input.parse::<usize>(),
            self.retries_input.parse::<i32>(),
        ) else {
            self.add_message("Enter a number of retries", MessageStyle::Error);
            return;
        };

        match hangman.new_game(length, retries) {
            Ok(session) => {
                let count = session.candidates().len();
                self.session = Some(session);
                self.history.clear();
                self.secret = None;
                self.input_mode = InputMode::Guessing;
                self.add_message(
                    &format!("New game: {length} letters, {count} possible words. Guess a letter!"),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Submit a letter to the running game
    pub fn handle_guess(&mut self, letter: char) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let candidates_before = session.candidates().len();
        let outcome = match session.submit_guess(letter) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let entry = HistoryEntry {
            letter,
            outcome,
            pattern: session.pattern().to_string(),
            candidates_before,
            candidates_after: session.candidates().len(),
        };
        let state = session.state();
        let remaining = session.remaining_retries();
        let final_word = match state {
            GameState::Won => Some(session.pattern().to_string()),
            GameState::Lost => session.pick_secret(&mut rand::rng()).map(str::to_string),
            GameState::Running => None,
        };
        self.history.push(entry);

        match state {
            GameState::Running if outcome.is_accepted() => {
                self.add_message(&format!("Yes! '{letter}' is in the word"), MessageStyle::Success);
            }
            GameState::Running => self.add_message(
                &format!("No '{letter}'. {remaining} tries left"),
                MessageStyle::Error,
            ),
            GameState::Won | GameState::Lost => self.finish_game(state, final_word),
        }
    }

    fn finish_game(&mut self, state: GameState, final_word: Option<String>) {
        self.stats.total_games += 1;
        let word = final_word.as_deref().unwrap_or("?").to_uppercase();
        if state == GameState::Won {
            self.stats.games_won += 1;
            self.add_message(&format!("🎉 You won! The word was {word}"), MessageStyle::Success);
        } else {
            self.add_message(
                &format!("💀 All retries finished! The word was {word}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game, 'r' to replay or 'q' to quit", MessageStyle::Info);
        self.secret = final_word;
        self.input_mode = InputMode::GameOver;
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

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.candidates().len())
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn hangman() -> Hangman {
        Hangman::init(&["last", "fast", "bets", "code"], GameConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn start(app: &mut App, length: &str, retries: &str) {
        app.length_input.clear();
        type_str(app, length);
        press(app, KeyCode::Enter);
        app.retries_input.clear();
        type_str(app, retries);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn defaults_to_first_available_length() {
        let hangman = hangman();
        let app = App::new(&hangman);
        assert_eq!(app.length_input, "4");
        assert_eq!(app.input_mode, InputMode::Length);
    }

    #[test]
    fn setup_starts_a_game() {
        let hangman = hangman();
        let mut app = App::new(&hangman);
        start(&mut app, "4", "2");

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.candidates_count(), 4);
    }

    #[test]
    fn unknown_length_stays_in_setup() {
        let hangman = hangman();
        let mut app = App::new(&hangman);
        app.length_input.clear();
        type_str(&mut app, "7");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Length);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn too_many_retries_is_reported() {
        let hangman = hangman();
        let mut app = App::new(&hangman);
        start(&mut app, "4", "11");

        assert_eq!(app.input_mode, InputMode::Retries);
        assert!(app.session.is_none());
    }

    #[test]
    fn winning_game_records_stats() {
        let hangman = hangman();
        let mut app = App::new(&hangman);
        start(&mut app, "4", "2");
        type_str(&mut app, "ABcode");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.secret.as_deref(), Some("code"));
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.history.len(), 6);
        assert_eq!(app.history[0].outcome, GuessOutcome::Missed);
        assert_eq!(app.history[0].candidates_after, 2);
    }

    #[test]
    fn losing_game_reveals_a_candidate() {
        let hangman = hangman();
        let mut app = App::new(&hangman);
        start(&mut app, "4", "0");
        type_str(&mut app, "z");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 0);
        let secret = app.secret.clone().unwrap();
        assert!(["last", "fast", "bets", "code"].contains(&secret.as_str()));
    }

    #[test]
    fn duplicate_letter_shows_error() {
        let hangman = hangman();
        let mut app = App::new(&hangman);
        start(&mut app, "4", "5");
        type_str(&mut app, "aa");

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn replay_restarts_with_same_settings() {
        let hangman = hangman();
        let mut app = App::new(&hangman);
        start(&mut app, "4", "0");
        type_str(&mut app, "z");
        press(&mut app, KeyCode::Char('r'));

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history.is_empty());
        assert_eq!(app.candidates_count(), 4);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let hangman = hangman();
        let mut app = App::new(&hangman);
        start(&mut app, "4", "5");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}

//! Single game state machine
//!
//! A session starts `Running` with every dictionary word of the chosen length as a
//! candidate and moves to `Won` or `Lost`; no transition leaves a terminal state.

use super::{GameConfig, GuessError, NewGameError};
use crate::core::{Dictionary, RevealedPattern};
use crate::engine::resolve_guess;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Lifecycle state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Running,
    Won,
    Lost,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Whether an accepted guess uncovered any slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The pattern changed; the letter is in the word
    Revealed,
    /// The pattern is unchanged; a retry was spent
    Missed,
}

impl GuessOutcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// One game against the adversarial engine
///
/// Borrows its candidate words from the [`Dictionary`] it was created from.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    expected_length: usize,
    allowed_retries: i32,
    remaining_retries: i32,
    used_letters: Vec<char>,
    candidates: Vec<&'a str>,
    pattern: RevealedPattern,
    state: GameState,
}

impl<'a> GameSession<'a> {
    /// Start a game with words of `expected_length` letters and `max_retries` wrong guesses
    ///
    /// # Errors
    /// Returns `NewGameError` if:
    /// - No dictionary word has `expected_length` letters
    /// - `max_retries` is negative or above the configured ceiling
    ///
    /// # Examples
    /// ```
    /// use adversarial_hangman::core::Dictionary;
    /// use adversarial_hangman::game::{GameConfig, GameSession, NewGameError};
    ///
    /// let dictionary = Dictionary::build(["last", "fast", "bets", "code"]);
    /// let config = GameConfig::default();
    ///
    /// let game = GameSession::new(&dictionary, &config, 4, 5).unwrap();
    /// assert_eq!(game.pattern().to_string(), "____");
    ///
    /// assert_eq!(
    ///     GameSession::new(&dictionary, &config, 5, 3).unwrap_err(),
    ///     NewGameError::InvalidLength(5)
    /// );
    /// ```
    pub fn new(
        dictionary: &'a Dictionary,
        config: &GameConfig,
        expected_length: usize,
        max_retries: i32,
    ) -> Result<Self, NewGameError> {
        let words = dictionary
            .words_of_length(expected_length)
            .filter(|words| !words.is_empty())
            .ok_or(NewGameError::InvalidLength(expected_length))?;

        if !config.allows_retries(max_retries) {
            return Err(NewGameError::InvalidRetries {
                requested: max_retries,
                max: config.max_allowed_retries,
            });
        }

        Ok(Self {
            expected_length,
            allowed_retries: max_retries,
            remaining_retries: max_retries,
            used_letters: Vec::new(),
            candidates: words.iter().map(String::as_str).collect(),
            pattern: RevealedPattern::unknown(expected_length),
            state: GameState::Running,
        })
    }

    /// Submit one guessed letter
    ///
    /// The letter is compared case-sensitively against the dictionary words.
    /// A miss spends a retry; the game is lost once retries drop below zero.
    /// A reveal that leaves no hidden slot wins the game.
    ///
    /// # Errors
    /// Returns `GuessError` if:
    /// - The game has already ended
    /// - `letter` was guessed before (the session is left untouched)
    pub fn submit_guess(&mut self, letter: char) -> Result<GuessOutcome, GuessError> {
        if self.state.is_terminal() {
            return Err(GuessError::InvalidState(self.state));
        }
        if self.used_letters.contains(&letter) {
            return Err(GuessError::DuplicateInput(letter));
        }

        self.used_letters.push(letter);

        let resolution = resolve_guess(&self.candidates, &self.pattern, letter);
        let revealed = resolution.is_reveal(&self.pattern);
        self.candidates = resolution.candidates;

        if !revealed {
            self.remaining_retries -= 1;
            if self.remaining_retries < 0 {
                self.state = GameState::Lost;
            }
            return Ok(GuessOutcome::Missed);
        }

        self.pattern = resolution.pattern;
        if self.pattern.is_complete() {
            self.state = GameState::Won;
        }
        Ok(GuessOutcome::Revealed)
    }

    /// Pick one remaining candidate to present as the secret word
    ///
    /// Any remaining candidate is consistent with every answer given, so the
    /// choice is made at random. Returns `None` only if no candidates remain.
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a str> {
        self.candidates.choose(rng).copied()
    }

    #[inline]
    #[must_use]
    pub const fn expected_length(&self) -> usize {
        self.expected_length
    }

    #[inline]
    #[must_use]
    pub const fn allowed_retries(&self) -> i32 {
        self.allowed_retries
    }

    /// Retries left; `-1` once the game is lost
    #[inline]
    #[must_use]
    pub const fn remaining_retries(&self) -> i32 {
        self.remaining_retries
    }

    /// Letters guessed so far, in guess order
    #[inline]
    #[must_use]
    pub fn used_letters(&self) -> &[char] {
        &self.used_letters
    }

    #[inline]
    #[must_use]
    pub fn has_used(&self, letter: char) -> bool {
        self.used_letters.contains(&letter)
    }

    /// Words still consistent with every answer
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[&'a str] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &RevealedPattern {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, GameState::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::build(["last", "fast", "bets", "code", "ox"])
    }

    #[test]
    fn new_game_starts_hidden_and_running() {
        let dictionary = dictionary();
        let game = GameSession::new(&dictionary, &GameConfig::default(), 4, 5).unwrap();

        assert_eq!(game.expected_length(), 4);
        assert_eq!(game.allowed_retries(), 5);
        assert_eq!(game.remaining_retries(), 5);
        assert_eq!(game.candidates(), &["last", "fast", "bets", "code"]);
        assert_eq!(game.pattern().unknown_count(), 4);
        assert!(game.used_letters().is_empty());
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn invalid_length_is_checked_first() {
        let dictionary = dictionary();
        let result = GameSession::new(&dictionary, &GameConfig::default(), 9, -4);
        assert_eq!(result.unwrap_err(), NewGameError::InvalidLength(9));
    }

    #[test]
    fn retries_outside_ceiling_are_rejected() {
        let dictionary = dictionary();
        let config = GameConfig::new(10);

        assert_eq!(
            GameSession::new(&dictionary, &config, 4, 11).unwrap_err(),
            NewGameError::InvalidRetries {
                requested: 11,
                max: 10
            }
        );
        assert!(GameSession::new(&dictionary, &config, 4, -1).is_err());
        assert!(GameSession::new(&dictionary, &config, 4, 0).is_ok());
        assert!(GameSession::new(&dictionary, &config, 4, 10).is_ok());
    }

    #[test]
    fn miss_spends_retry_and_narrows_candidates() {
        let dictionary = dictionary();
        let mut game = GameSession::new(&dictionary, &GameConfig::default(), 4, 5).unwrap();

        assert_eq!(game.submit_guess('a'), Ok(GuessOutcome::Missed));
        assert_eq!(game.remaining_retries(), 4);
        assert_eq!(game.pattern().to_string(), "____");
        assert_eq!(game.candidates(), &["bets", "code"]);
        assert_eq!(game.used_letters(), &['a']);
    }

    #[test]
    fn duplicate_guess_leaves_session_untouched() {
        let dictionary = dictionary();
        let mut game = GameSession::new(&dictionary, &GameConfig::default(), 4, 8).unwrap();
        game.submit_guess('i').unwrap();

        let before = game.clone();
        assert_eq!(game.submit_guess('i'), Err(GuessError::DuplicateInput('i')));
        assert_eq!(game.remaining_retries(), before.remaining_retries());
        assert_eq!(game.used_letters(), before.used_letters());
        assert_eq!(game.candidates(), before.candidates());
        assert_eq!(game.pattern(), before.pattern());
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn zero_retries_loses_on_first_miss() {
        let dictionary = dictionary();
        let mut game = GameSession::new(&dictionary, &GameConfig::default(), 4, 0).unwrap();

        assert_eq!(game.submit_guess('z'), Ok(GuessOutcome::Missed));
        assert_eq!(game.remaining_retries(), -1);
        assert_eq!(game.state(), GameState::Lost);
    }

    #[test]
    fn guesses_after_game_end_are_refused() {
        let dictionary = dictionary();
        let mut game = GameSession::new(&dictionary, &GameConfig::default(), 4, 0).unwrap();
        game.submit_guess('z').unwrap();

        assert_eq!(
            game.submit_guess('q'),
            Err(GuessError::InvalidState(GameState::Lost))
        );
        assert!(!game.has_used('q'));
    }

    #[test]
    fn revealing_every_slot_wins() {
        let dictionary = Dictionary::build(["ox"]);
        let mut game = GameSession::new(&dictionary, &GameConfig::default(), 2, 1).unwrap();

        assert_eq!(game.submit_guess('o'), Ok(GuessOutcome::Revealed));
        assert!(game.is_running());
        assert_eq!(game.submit_guess('x'), Ok(GuessOutcome::Revealed));
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.remaining_retries(), 1);
    }

    #[test]
    fn uppercase_guess_is_a_miss() {
        let dictionary = dictionary();
        let mut game = GameSession::new(&dictionary, &GameConfig::default(), 4, 5).unwrap();

        assert_eq!(game.submit_guess('C'), Ok(GuessOutcome::Missed));
        assert_eq!(game.candidates().len(), 4);
    }

    #[test]
    fn pick_secret_returns_a_candidate() {
        let dictionary = dictionary();
        let mut game = GameSession::new(&dictionary, &GameConfig::default(), 4, 5).unwrap();
        game.submit_guess('a').unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let secret = game.pick_secret(&mut rng).unwrap();
        assert!(game.candidates().contains(&secret));
    }
}

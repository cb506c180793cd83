//! Application context
//!
//! Holds the dictionary built at start-up and the game configuration. Sessions
//! borrow the dictionary, so it cannot be replaced while any game is in progress.

use super::{GameConfig, GameSession, NewGameError};
use crate::core::Dictionary;
use crate::wordlists::DEFAULT_WORDS;

/// Process-wide hangman state: one dictionary, many games
#[derive(Debug, Clone)]
pub struct Hangman {
    dictionary: Dictionary,
    config: GameConfig,
}

impl Hangman {
    #[must_use]
    pub const fn new(dictionary: Dictionary, config: GameConfig) -> Self {
        Self { dictionary, config }
    }

    /// Build the dictionary from `custom_words`, or the embedded default list if empty
    ///
    /// # Examples
    /// ```
    /// use adversarial_hangman::game::{GameConfig, Hangman};
    ///
    /// let hangman = Hangman::init(&["last", "fast", "bets", "code"], GameConfig::default());
    /// assert_eq!(hangman.dictionary().word_count(), 4);
    ///
    /// let default = Hangman::init::<&str>(&[], GameConfig::default());
    /// assert!(default.dictionary().word_count() > 100);
    /// ```
    #[must_use]
    pub fn init<S: AsRef<str>>(custom_words: &[S], config: GameConfig) -> Self {
        Self::new(build_dictionary(custom_words), config)
    }

    /// Rebuild the dictionary, fully replacing the previous one
    pub fn reinit<S: AsRef<str>>(&mut self, custom_words: &[S]) {
        self.dictionary = build_dictionary(custom_words);
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new game
    ///
    /// # Errors
    /// Returns `NewGameError` if no word has `expected_length` letters or
    /// `max_retries` is outside `0..=max_allowed_retries`.
    pub fn new_game(
        &self,
        expected_length: usize,
        max_retries: i32,
    ) -> Result<GameSession<'_>, NewGameError> {
        GameSession::new(&self.dictionary, &self.config, expected_length, max_retries)
    }
}

fn build_dictionary<S: AsRef<str>>(custom_words: &[S]) -> Dictionary {
    if custom_words.is_empty() {
        Dictionary::build(DEFAULT_WORDS)
    } else {
        Dictionary::build(custom_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_words_replace_default() {
        let hangman = Hangman::init(&["last", "fast"], GameConfig::default());
        assert_eq!(hangman.dictionary().lengths(), vec![4]);
    }

    #[test]
    fn empty_list_loads_default() {
        let hangman = Hangman::init::<String>(&[], GameConfig::default());
        assert_eq!(hangman.dictionary().word_count(), DEFAULT_WORDS.len());
        assert!(hangman.dictionary().rejected().is_empty());
    }

    #[test]
    fn reinit_discards_previous_words() {
        let mut hangman = Hangman::init(&["last", "fast"], GameConfig::default());
        hangman.reinit(&["ox", "axe"]);

        assert!(!hangman.dictionary().has_length(4));
        assert_eq!(hangman.new_game(4, 3).unwrap_err(), NewGameError::InvalidLength(4));
        assert!(hangman.new_game(3, 3).is_ok());
    }

    #[test]
    fn new_game_uses_configured_ceiling() {
        let hangman = Hangman::init(&["last"], GameConfig::new(2));
        assert!(hangman.new_game(4, 2).is_ok());
        assert_eq!(
            hangman.new_game(4, 3).unwrap_err(),
            NewGameError::InvalidRetries {
                requested: 3,
                max: 2
            }
        );
    }
}

//! Game error types
//!
//! Every error rejects a single call; none of them leaves a session modified.

use super::GameState;

/// Why a new game could not be created
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NewGameError {
    #[error("No dictionary words have {0} letters")]
    InvalidLength(usize),
    #[error("Retries must be between 0 and {max}, got {requested}")]
    InvalidRetries { requested: i32, max: i32 },
}

/// Why a guess was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("Game is not running (state: {0})")]
    InvalidState(GameState),
    #[error("Character '{0}' has been used. Please enter a new character.")]
    DuplicateInput(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            NewGameError::InvalidLength(7).to_string(),
            "No dictionary words have 7 letters"
        );
        assert_eq!(
            NewGameError::InvalidRetries {
                requested: 15,
                max: 10
            }
            .to_string(),
            "Retries must be between 0 and 10, got 15"
        );
        assert!(GuessError::DuplicateInput('q').to_string().contains("'q'"));
        assert_eq!(
            GuessError::InvalidState(GameState::Won).to_string(),
            "Game is not running (state: won)"
        );
    }
}

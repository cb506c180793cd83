//! Dictionary word validation
//!
//! A valid hangman word consists solely of ASCII letters (`^[a-zA-Z]+$`).

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word contains invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
}

/// Validate that `word` contains only ASCII letters
///
/// Case is not normalized or checked; `"Fast"` is as valid as `"fast"`.
///
/// # Errors
/// Returns `WordError` if:
/// - The word is empty
/// - Any character is not an ASCII letter
///
/// # Examples
/// ```
/// use adversarial_hangman::core::validate_word;
///
/// assert!(validate_word("hangman").is_ok());
/// assert!(validate_word("Hangman").is_ok());
/// assert!(validate_word("hang-man").is_err());
/// assert!(validate_word("").is_err());
/// ```
pub fn validate_word(word: &str) -> Result<(), WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }

    match word
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_alphabetic())
    {
        Some((position, ch)) => Err(WordError::InvalidCharacter { ch, position }),
        None => Ok(()),
    }
}

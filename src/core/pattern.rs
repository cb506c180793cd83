//! Revealed pattern representation
//!
//! A pattern is the guesser-visible template of the secret word. Each slot is
//! either a confirmed letter or the [`UNKNOWN`] placeholder.

use std::fmt;
use std::str::FromStr;

/// Placeholder for a slot the guesser has not uncovered yet
pub const UNKNOWN: char = '_';

/// The guesser-visible template of the secret word
///
/// Slots are stored as characters with [`UNKNOWN`] marking hidden positions, so the
/// derived ordering is the lexicographic ordering of the string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealedPattern {
    slots: Vec<char>,
}

/// Error type for unparseable pattern strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("Pattern must not be empty")]
    Empty,
    #[error("Invalid pattern character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },
}

impl RevealedPattern {
    /// Create a pattern of `len` hidden slots
    ///
    /// # Examples
    /// ```
    /// use adversarial_hangman::core::RevealedPattern;
    ///
    /// let pattern = RevealedPattern::unknown(4);
    /// assert_eq!(pattern.to_string(), "____");
    /// assert_eq!(pattern.unknown_count(), 4);
    /// ```
    #[must_use]
    pub fn unknown(len: usize) -> Self {
        Self {
            slots: vec![UNKNOWN; len],
        }
    }

    /// Number of slots (the target word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the confirmed letter at `position`, or `None` if it is still hidden
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<char> {
        match self.slots[position] {
            UNKNOWN => None,
            ch => Some(ch),
        }
    }

    /// Count the hidden slots
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.slots.iter().filter(|&&ch| ch == UNKNOWN).count()
    }

    /// Check if every slot has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.slots.contains(&UNKNOWN)
    }

    /// Check if `letter` has been revealed anywhere in the pattern
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        letter != UNKNOWN && self.slots.contains(&letter)
    }

    /// Calculate the pattern shown if `word` were the secret and `letter` the latest guess
    ///
    /// Every position where `word` has `letter` is revealed; all other slots keep
    /// their current value. A word without `letter` yields an identical pattern.
    ///
    /// # Examples
    /// ```
    /// use adversarial_hangman::core::RevealedPattern;
    ///
    /// let pattern = RevealedPattern::unknown(5);
    /// assert_eq!(pattern.reveal("sleep", 'e').to_string(), "__ee_");
    /// assert_eq!(pattern.reveal("crane", 'z'), pattern);
    /// ```
    #[must_use]
    pub fn reveal(&self, word: &str, letter: char) -> Self {
        debug_assert_eq!(word.chars().count(), self.len(), "word length mismatch");

        let mut slots = self.slots.clone();
        for (slot, ch) in slots.iter_mut().zip(word.chars()) {
            if ch == letter {
                *slot = ch;
            }
        }

        Self { slots }
    }

    /// Check if `word` agrees with every revealed slot
    ///
    /// Hidden slots match anything; lengths must be equal.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        word.chars().count() == self.len()
            && self
                .slots
                .iter()
                .zip(word.chars())
                .all(|(&slot, ch)| slot == UNKNOWN || slot == ch)
    }

    /// Iterate over the slots in their string form
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.slots.iter().copied()
    }
}

impl fmt::Display for RevealedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.slots.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

impl FromStr for RevealedPattern {
    type Err = PatternError;

    /// Parse a pattern like `"_a__"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        let slots = s
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                if ch == UNKNOWN || ch.is_ascii_alphabetic() {
                    Ok(ch)
                } else {
                    Err(PatternError::InvalidCharacter { ch, position })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slots })
    }
}

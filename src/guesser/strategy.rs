//! Guessing strategies
//!
//! Defines the Guesser trait and concrete implementations.

use crate::game::GameSession;

/// Letters of English text from most to least common
pub const ENGLISH_FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for choosing the next letter to guess
pub trait Guesser {
    /// Choose an unused letter for `session`
    ///
    /// Returns `None` if every letter has been guessed.
    fn next_letter(&self, session: &GameSession<'_>) -> Option<char>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of a guesser while maintaining static dispatch.
pub enum GuesserType {
    /// Most common letter among remaining candidates (default)
    Frequency(FrequencyGuesser),
    /// Fixed English letter-frequency order
    English(EnglishOrderGuesser),
    /// a, b, c, ...
    Alphabetical(AlphabeticalGuesser),
    /// Uniformly random unused letter
    Random(RandomGuesser),
}

impl Guesser for GuesserType {
    fn next_letter(&self, session: &GameSession<'_>) -> Option<char> {
        match self {
            Self::Frequency(g) => g.next_letter(session),
            Self::English(g) => g.next_letter(session),
            Self::Alphabetical(g) => g.next_letter(session),
            Self::Random(g) => g.next_letter(session),
        }
    }
}

impl GuesserType {
    /// Create guesser from name string
    ///
    /// Supported names: "frequency", "english", "alphabetical", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "english" | "etaoin" => Self::English(EnglishOrderGuesser),
            "alphabetical" | "abc" => Self::Alphabetical(AlphabeticalGuesser),
            "random" => Self::Random(RandomGuesser),
            _ => Self::Frequency(FrequencyGuesser),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::English(_) => "english",
            Self::Alphabetical(_) => "alphabetical",
            Self::Random(_) => "random",
        }
    }
}

fn unused_letters<'s>(session: &'s GameSession<'_>) -> impl Iterator<Item = char> + 's {
    ('a'..='z').filter(|&letter| !session.has_used(letter))
}

/// Guess the letter that appears in the most remaining candidates
///
/// The remaining candidates are exactly the dictionary words consistent with the
/// revealed pattern and the missed letters, so this is what an informed player
/// would compute from the dictionary. Ties go to the alphabetically first letter.
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter(&self, session: &GameSession<'_>) -> Option<char> {
        let mut counts = [0usize; 26];
        for word in session.candidates() {
            let mut seen = [false; 26];
            for byte in word.bytes().filter(u8::is_ascii_lowercase) {
                seen[usize::from(byte - b'a')] = true;
            }
            for (count, present) in counts.iter_mut().zip(seen) {
                *count += usize::from(present);
            }
        }

        unused_letters(session)
            .map(|letter| (letter, counts[(letter as u8 - b'a') as usize]))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(letter, _)| letter)
    }
}

/// Guess letters in English frequency order
pub struct EnglishOrderGuesser;

impl Guesser for EnglishOrderGuesser {
    fn next_letter(&self, session: &GameSession<'_>) -> Option<char> {
        ENGLISH_FREQUENCY_ORDER
            .chars()
            .find(|&letter| !session.has_used(letter))
    }
}

/// Guess letters from a to z
pub struct AlphabeticalGuesser;

impl Guesser for AlphabeticalGuesser {
    fn next_letter(&self, session: &GameSession<'_>) -> Option<char> {
        unused_letters(session).next()
    }
}

/// Guess a random unused letter
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_letter(&self, session: &GameSession<'_>) -> Option<char> {
        use rand::prelude::IndexedRandom;

        let letters: Vec<char> = unused_letters(session).collect();
        letters.choose(&mut rand::rng()).copied()
    }
}

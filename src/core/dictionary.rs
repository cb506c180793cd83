//! Length-indexed dictionary
//!
//! Built once from a raw word list and read-only afterwards, so a single
//! `Dictionary` can back any number of game sessions.

use super::word::{WordError, validate_word};
use rustc_hash::FxHashMap;

/// A word excluded from the dictionary, kept as a diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedWord {
    pub word: String,
    pub reason: WordError,
}

/// Immutable mapping from word length to the words of that length
///
/// Words keep their input order within each length; duplicates are preserved.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_length: FxHashMap<usize, Vec<String>>,
    rejected: Vec<RejectedWord>,
}

impl Dictionary {
    /// Build a dictionary from raw words
    ///
    /// Invalid words are skipped and recorded in [`rejected`](Self::rejected);
    /// the build itself never fails. No case normalization is applied.
    ///
    /// # Examples
    /// ```
    /// use adversarial_hangman::core::Dictionary;
    ///
    /// let dictionary = Dictionary::build(["last", "fast", "bets", "code", "n0pe"]);
    /// assert_eq!(dictionary.words_of_length(4).unwrap().len(), 4);
    /// assert_eq!(dictionary.rejected().len(), 1);
    /// ```
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_length: FxHashMap<usize, Vec<String>> = FxHashMap::default();
        let mut rejected = Vec::new();

        for word in words {
            let word = word.as_ref();
            match validate_word(word) {
                Ok(()) => by_length.entry(word.len()).or_default().push(word.to_string()),
                Err(reason) => rejected.push(RejectedWord {
                    word: word.to_string(),
                    reason,
                }),
            }
        }

        Self {
            by_length,
            rejected,
        }
    }

    /// Get all words of `len` letters, in input order
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> Option<&[String]> {
        self.by_length.get(&len).map(Vec::as_slice)
    }

    /// Check if any word has exactly `len` letters
    #[inline]
    #[must_use]
    pub fn has_length(&self, len: usize) -> bool {
        self.by_length.contains_key(&len)
    }

    /// All word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Total number of accepted words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }

    /// Words discarded during the build, with the reason for each
    #[must_use]
    pub fn rejected(&self) -> &[RejectedWord] {
        &self.rejected
    }
}

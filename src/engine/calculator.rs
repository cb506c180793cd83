//! Partition calculation
//!
//! Given a guessed letter and the candidate set, groups every candidate by the
//! pattern it would reveal.

use super::selector::{preference, select_winner};
use crate::core::RevealedPattern;
use rustc_hash::FxHashMap;

/// Candidates grouped by the pattern each would produce under one guess
///
/// Transient: computed fresh for every guess and discarded afterwards. Words keep
/// their candidate order inside each group.
#[derive(Debug, Clone)]
pub struct Partition<'w> {
    letter: char,
    groups: FxHashMap<RevealedPattern, Vec<&'w str>>,
    candidate_count: usize,
}

impl<'w> Partition<'w> {
    /// Group `candidates` by the pattern they reveal for `letter`
    ///
    /// Every candidate must have the same length as `pattern`.
    ///
    /// # Examples
    /// ```
    /// use adversarial_hangman::core::RevealedPattern;
    /// use adversarial_hangman::engine::Partition;
    ///
    /// let candidates = ["last", "fast", "bets", "code"];
    /// let partition = Partition::calculate(&candidates, &RevealedPattern::unknown(4), 'a');
    ///
    /// assert_eq!(partition.len(), 2);
    /// assert_eq!(partition.group(&"_a__".parse().unwrap()), Some(&["last", "fast"][..]));
    /// ```
    #[must_use]
    pub fn calculate(candidates: &[&'w str], pattern: &RevealedPattern, letter: char) -> Self {
        let mut groups: FxHashMap<RevealedPattern, Vec<&'w str>> = FxHashMap::default();

        for &word in candidates {
            groups
                .entry(pattern.reveal(word, letter))
                .or_default()
                .push(word);
        }

        Self {
            letter,
            groups,
            candidate_count: candidates.len(),
        }
    }

    /// The letter this partition was calculated for
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// Number of distinct patterns
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of candidates that were partitioned
    #[inline]
    #[must_use]
    pub const fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Get the words that would produce `pattern`
    #[must_use]
    pub fn group(&self, pattern: &RevealedPattern) -> Option<&[&'w str]> {
        self.groups.get(pattern).map(Vec::as_slice)
    }

    /// All groups, most preferred by the engine first
    #[must_use]
    pub fn ranked(&self) -> Vec<(&RevealedPattern, &[&'w str])> {
        let mut ranked: Vec<_> = self
            .groups
            .iter()
            .map(|(pattern, words)| (pattern, words.as_slice()))
            .collect();
        ranked.sort_by(|a, b| preference((b.0, b.1.len()), (a.0, a.1.len())));
        ranked
    }

    /// The group the engine would choose, or `None` if there were no candidates
    #[must_use]
    pub fn winner(&self) -> Option<(&RevealedPattern, &[&'w str])> {
        select_winner(&self.groups)
    }

    /// Consume the partition, keeping only the winning group
    #[must_use]
    pub fn into_winner(mut self) -> Option<(RevealedPattern, Vec<&'w str>)> {
        let chosen = self.winner()?.0.clone();
        self.groups.remove_entry(&chosen)
    }
}

//! Adversarial partition engine
//!
//! Resolves a guessed letter against a set of candidate words by splitting the set
//! into groups that would each show the same pattern, then keeping the group that
//! leaves the guesser worst off. The engine never commits to a secret word.

mod calculator;
mod selector;

pub use calculator::Partition;
pub use selector::{preference, select_winner};

use crate::core::RevealedPattern;

/// Result of resolving one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'w> {
    /// Candidates consistent with the chosen pattern
    pub candidates: Vec<&'w str>,
    /// Pattern to show the guesser
    pub pattern: RevealedPattern,
}

impl Resolution<'_> {
    /// Check if the guess uncovered at least one slot relative to `previous`
    #[must_use]
    pub fn is_reveal(&self, previous: &RevealedPattern) -> bool {
        self.pattern != *previous
    }
}

/// Resolve `letter` against `candidates` given the currently revealed `pattern`
///
/// Groups the candidates by the pattern each would produce and returns the winning
/// group: the largest one, then the one revealing the fewest slots, then the one
/// whose pattern string sorts first. If the winning pattern equals `pattern`, the
/// guess counts as a miss even when some discarded candidates contained `letter`.
///
/// An empty candidate list yields an empty resolution with `pattern` unchanged.
///
/// # Examples
/// ```
/// use adversarial_hangman::core::RevealedPattern;
/// use adversarial_hangman::engine::resolve_guess;
///
/// let candidates = ["last", "fast", "bets", "code"];
/// let pattern = RevealedPattern::unknown(4);
///
/// let resolution = resolve_guess(&candidates, &pattern, 'a');
/// assert_eq!(resolution.candidates, vec!["bets", "code"]);
/// assert!(!resolution.is_reveal(&pattern));
/// ```
#[must_use]
pub fn resolve_guess<'w>(
    candidates: &[&'w str],
    pattern: &RevealedPattern,
    letter: char,
) -> Resolution<'w> {
    Partition::calculate(candidates, pattern, letter)
        .into_winner()
        .map_or_else(
            || Resolution {
                candidates: Vec::new(),
                pattern: pattern.clone(),
            },
            |(pattern, candidates)| Resolution {
                candidates,
                pattern,
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 4] = ["last", "fast", "bets", "code"];

    #[test]
    fn largest_group_wins() {
        let candidates = ["tall", "ball", "bell", "cold"];
        let pattern = RevealedPattern::unknown(4);

        // "__ll" holds three words, "__l_" only "cold"
        let resolution = resolve_guess(&candidates, &pattern, 'l');
        assert_eq!(resolution.pattern.to_string(), "__ll");
        assert_eq!(resolution.candidates, vec!["tall", "ball", "bell"]);
        assert!(resolution.is_reveal(&pattern));
    }

    #[test]
    fn equal_sizes_prefer_fewer_reveals() {
        let pattern = RevealedPattern::unknown(4);

        // {last, fast} -> "_a__" and {bets, code} -> "____" are both size 2
        let resolution = resolve_guess(&WORDS, &pattern, 'a');
        assert_eq!(resolution.pattern, pattern);
        assert_eq!(resolution.candidates, vec!["bets", "code"]);
    }

    #[test]
    fn equal_sizes_and_reveals_prefer_smaller_pattern() {
        let candidates = ["bets", "code"];
        let pattern = RevealedPattern::unknown(4);

        // "___e" sorts before "_e__"
        let resolution = resolve_guess(&candidates, &pattern, 'e');
        assert_eq!(resolution.pattern.to_string(), "___e");
        assert_eq!(resolution.candidates, vec!["code"]);
    }

    #[test]
    fn letter_in_no_candidate_keeps_everything() {
        let pattern = RevealedPattern::unknown(4);
        let resolution = resolve_guess(&WORDS, &pattern, 'z');

        assert_eq!(resolution.pattern, pattern);
        assert_eq!(resolution.candidates, WORDS.to_vec());
    }

    #[test]
    fn resolution_is_deterministic() {
        let pattern = RevealedPattern::unknown(4);
        for letter in 'a'..='z' {
            let first = resolve_guess(&WORDS, &pattern, letter);
            let second = resolve_guess(&WORDS, &pattern, letter);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn result_is_consistent_and_never_grows() {
        let pattern = RevealedPattern::unknown(4);
        for letter in 'a'..='z' {
            let resolution = resolve_guess(&WORDS, &pattern, letter);
            assert!(resolution.candidates.len() <= WORDS.len());
            assert!(!resolution.candidates.is_empty());
            for word in &resolution.candidates {
                assert_eq!(pattern.reveal(word, letter), resolution.pattern);
            }
        }
    }

    #[test]
    fn builds_on_revealed_slots() {
        let candidates = ["code", "cove", "core"];
        let pattern: RevealedPattern = "co_e".parse().unwrap();

        let resolution = resolve_guess(&candidates, &pattern, 'v');
        assert_eq!(resolution.pattern.to_string(), "co_e");
        assert_eq!(resolution.candidates, vec!["code", "core"]);
    }

    #[test]
    fn empty_candidates_leave_pattern_unchanged() {
        let pattern = RevealedPattern::unknown(3);
        let resolution = resolve_guess(&[], &pattern, 'a');

        assert!(resolution.candidates.is_empty());
        assert_eq!(resolution.pattern, pattern);
    }
}

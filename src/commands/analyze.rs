//! Partition analysis command
//!
//! Shows how the engine would split the candidates for a letter, optionally after
//! replaying earlier guesses.

use crate::engine::Partition;
use crate::game::Hangman;
use anyhow::{Result, bail};

/// One group of a partition, summarized for display
pub struct GroupSummary {
    pub pattern: String,
    pub size: usize,
    pub hidden_slots: usize,
    pub sample: Vec<String>,
}

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub length: usize,
    pub letter: char,
    pub replayed: Vec<char>,
    pub starting_pattern: String,
    pub total_candidates: usize,
    /// Groups in engine preference order; the first one is chosen
    pub groups: Vec<GroupSummary>,
    pub accepted: bool,
}

/// Number of words listed per group
const SAMPLE_SIZE: usize = 8;

/// Analyze the last letter of `letters` in a fresh game of `length` letters
///
/// Earlier letters are submitted first, exactly as a player would.
///
/// # Errors
///
/// Returns an error if:
/// - `letters` is empty
/// - No dictionary word has `length` letters
/// - A letter repeats, or the game ends before the last letter
pub fn analyze_guess(hangman: &Hangman, length: usize, letters: &str) -> Result<AnalysisResult> {
    let letters: Vec<char> = letters.chars().collect();
    let Some((&letter, replayed)) = letters.split_last() else {
        bail!("At least one letter is required");
    };

    let retries = hangman.config().max_allowed_retries;
    let mut session = hangman.new_game(length, retries)?;
    for &previous in replayed {
        session.submit_guess(previous)?;
    }
    if !session.is_running() {
        bail!("Game ended ({}) before '{letter}' could be analyzed", session.state());
    }
    if session.has_used(letter) {
        bail!("Letter '{letter}' was already guessed");
    }

    let partition = Partition::calculate(session.candidates(), session.pattern(), letter);
    let groups: Vec<GroupSummary> = partition
        .ranked()
        .into_iter()
        .map(|(pattern, words)| GroupSummary {
            pattern: pattern.to_string(),
            size: words.len(),
            hidden_slots: pattern.unknown_count(),
            sample: words
                .iter()
                .take(SAMPLE_SIZE)
                .map(|w| (*w).to_string())
                .collect(),
        })
        .collect();

    let starting_pattern = session.pattern().to_string();
    let accepted = groups
        .first()
        .is_some_and(|winner| winner.pattern != starting_pattern);

    Ok(AnalysisResult {
        length,
        letter,
        replayed: replayed.to_vec(),
        starting_pattern,
        total_candidates: partition.candidate_count(),
        groups,
        accepted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn hangman() -> Hangman {
        Hangman::init(&["last", "fast", "bets", "code"], GameConfig::default())
    }

    #[test]
    fn analyze_first_guess() {
        let result = analyze_guess(&hangman(), 4, "a").unwrap();

        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.groups.len(), 2);
        assert_eq!(result.groups[0].pattern, "____");
        assert_eq!(result.groups[0].sample, vec!["bets", "code"]);
        assert_eq!(result.groups[1].pattern, "_a__");
        assert!(!result.accepted);
    }

    #[test]
    fn analyze_after_replay() {
        let result = analyze_guess(&hangman(), 4, "ae").unwrap();

        assert_eq!(result.replayed, vec!['a']);
        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.groups[0].pattern, "___e");
        assert_eq!(result.groups[0].hidden_slots, 3);
        assert!(result.accepted);
    }

    #[test]
    fn analyze_rejects_bad_input() {
        assert!(analyze_guess(&hangman(), 4, "").is_err());
        assert!(analyze_guess(&hangman(), 7, "a").is_err());
        assert!(analyze_guess(&hangman(), 4, "aa").is_err());
    }
}

//! Simulation command
//!
//! Plays automated guessers against the engine across word lengths and collects
//! win/loss statistics.

use crate::game::{GameState, Hangman, NewGameError};
use crate::guesser::{Guesser, GuesserType};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulateConfig {
    /// Word lengths to play; empty means every length in the dictionary
    pub lengths: Vec<usize>,
    pub retries: i32,
    /// Games per length
    pub games: usize,
    pub guesser: String,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(guesser: String, retries: i32) -> Self {
        Self {
            lengths: Vec::new(),
            retries,
            games: 1,
            guesser,
            show_progress: true,
        }
    }
}

/// Outcome of a single simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub length: usize,
    pub won: bool,
    pub guesses: Vec<char>,
    pub wrong_guesses: usize,
    pub final_pattern: String,
    pub remaining_candidates: usize,
}

/// Per-length aggregate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LengthStatistics {
    pub games: usize,
    pub wins: usize,
    pub total_wrong: usize,
}

impl LengthStatistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Result of a simulation run
pub struct SimulationResult {
    pub guesser: &'static str,
    pub retries: i32,
    pub records: Vec<GameRecord>,
    pub by_length: BTreeMap<usize, LengthStatistics>,
    pub wins: usize,
    pub losses: usize,
    /// Number of games that ended with `n` wrong guesses
    pub wrong_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn total_games(&self) -> usize {
        self.wins + self.losses
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            0.0
        } else {
            self.wins as f64 / total as f64
        }
    }
}

/// Play one game with `guesser` until it ends
///
/// # Errors
///
/// Returns an error if the game cannot be created for `length` and `retries`.
pub fn play_game<G: Guesser + ?Sized>(
    hangman: &Hangman,
    guesser: &G,
    length: usize,
    retries: i32,
) -> Result<GameRecord, NewGameError> {
    let mut session = hangman.new_game(length, retries)?;
    let mut guesses = Vec::new();
    let mut wrong_guesses = 0;

    while session.is_running() {
        let Some(letter) = guesser.next_letter(&session) else {
            break;
        };
        match session.submit_guess(letter) {
            Ok(outcome) => {
                guesses.push(letter);
                if !outcome.is_accepted() {
                    wrong_guesses += 1;
                }
            }
            Err(_) => break,
        }
    }

    Ok(GameRecord {
        length,
        won: session.state() == GameState::Won,
        guesses,
        wrong_guesses,
        final_pattern: session.pattern().to_string(),
        remaining_candidates: session.candidates().len(),
    })
}

/// Run the simulation described by `config`
///
/// Games run in parallel; the result is independent of scheduling order.
///
/// # Errors
///
/// Returns an error if a requested length has no dictionary words or the retry
/// count is outside the configured range.
pub fn run_simulation(
    hangman: &Hangman,
    config: &SimulateConfig,
) -> Result<SimulationResult, NewGameError> {
    let guesser = GuesserType::from_name(&config.guesser);
    let lengths = if config.lengths.is_empty() {
        hangman.dictionary().lengths()
    } else {
        config.lengths.clone()
    };

    // Fail fast on bad input before spinning up workers
    for &length in &lengths {
        hangman.new_game(length, config.retries)?;
    }

    let jobs: Vec<usize> = lengths
        .iter()
        .flat_map(|&length| std::iter::repeat_n(length, config.games))
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(jobs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(guesser.name());

    let start = Instant::now();
    let records = jobs
        .par_iter()
        .map(|&length| {
            let record = play_game(hangman, &guesser, length, config.retries);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut by_length: BTreeMap<usize, LengthStatistics> = BTreeMap::new();
    let mut wrong_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for record in &records {
        let stats = by_length.entry(record.length).or_default();
        stats.games += 1;
        stats.wins += usize::from(record.won);
        stats.total_wrong += record.wrong_guesses;
        *wrong_distribution.entry(record.wrong_guesses).or_insert(0) += 1;
    }

    let wins = records.iter().filter(|r| r.won).count();

    Ok(SimulationResult {
        guesser: guesser.name(),
        retries: config.retries,
        losses: records.len() - wins,
        wins,
        records,
        by_length,
        wrong_distribution,
        duration,
    })
}

//! Adversarial Hangman
//!
//! A hangman engine that never commits to a secret word. Every guess partitions
//! the remaining candidate words by the pattern they would reveal, and the game
//! keeps the largest family alive.
//!
//! # Quick Start
//!
//! ```rust
//! use adversarial_hangman::game::{GameConfig, GameState, Hangman};
//!
//! let hangman = Hangman::init(&["last", "fast", "bets", "code"], GameConfig::default());
//! let mut game = hangman.new_game(4, 2).unwrap();
//!
//! game.submit_guess('a').unwrap();
//! assert_eq!(game.pattern().to_string(), "____");
//! assert_eq!(game.candidates(), ["bets", "code"]);
//! assert_eq!(game.state(), GameState::Running);
//! ```

// Core domain types
pub mod core;

// Partition engine
pub mod engine;

// Game sessions and context
pub mod game;

// Automated letter guessers
pub mod guesser;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

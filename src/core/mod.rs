//! Core domain types for hangman
//!
//! This module contains the fundamental domain types: the revealed pattern shown
//! to the guesser, word validation, and the length-indexed dictionary.
//! Everything here is pure and performs no I/O.

mod dictionary;
mod pattern;
mod word;

pub use dictionary::{Dictionary, RejectedWord};
pub use pattern::{PatternError, RevealedPattern, UNKNOWN};
pub use word::{WordError, validate_word};

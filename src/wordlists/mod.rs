//! Word lists for hangman
//!
//! Provides the embedded default dictionary and a loader for custom word files.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

//! Automated guessers
//!
//! Letter-picking strategies used to play against the engine in simulations.

pub mod strategy;

pub use strategy::{
    AlphabeticalGuesser, ENGLISH_FREQUENCY_ORDER, EnglishOrderGuesser, FrequencyGuesser, Guesser,
    GuesserType, RandomGuesser,
};

//! Game lifecycle
//!
//! [`Hangman`] owns the dictionary and configuration for the whole process and
//! hands out [`GameSession`]s, one per game played.

mod config;
mod context;
mod error;
mod session;

pub use config::{DEFAULT_MAX_RETRIES, GameConfig};
pub use context::Hangman;
pub use error::{GuessError, NewGameError};
pub use session::{GameSession, GameState, GuessOutcome};

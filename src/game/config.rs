//! Game configuration

/// Default ceiling for the number of retries a game may allow
pub const DEFAULT_MAX_RETRIES: i32 = 10;

/// Settings shared by every game created from one [`Hangman`](super::Hangman)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Largest retry count a new game may request
    pub max_allowed_retries: i32,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_allowed_retries: i32) -> Self {
        Self {
            max_allowed_retries,
        }
    }

    /// Check if `retries` is within `0..=max_allowed_retries`
    #[must_use]
    pub const fn allows_retries(&self, retries: i32) -> bool {
        retries >= 0 && retries <= self.max_allowed_retries
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES)
    }
}

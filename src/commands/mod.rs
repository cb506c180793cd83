//! Command implementations

pub mod analyze;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, GroupSummary, analyze_guess};
pub use simple::{run_simple, run_simple_with};
pub use simulate::{GameRecord, SimulateConfig, SimulationResult, play_game, run_simulation};

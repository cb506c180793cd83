//! Formatting utilities for terminal output

use crate::core::RevealedPattern;

/// Format a pattern with spaces between slots, e.g. `c _ d _`
#[must_use]
pub fn spaced_pattern(pattern: &RevealedPattern) -> String {
    pattern
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many retries are left out of those allowed
///
/// A game with zero allowed retries shows a full bar until it is lost.
#[must_use]
pub fn retries_bar(remaining: i32, allowed: i32, width: usize) -> String {
    if allowed == 0 {
        return create_progress_bar(f64::from(i32::from(remaining >= 0)), 1.0, width);
    }
    create_progress_bar(f64::from(remaining.max(0)), f64::from(allowed), width)
}

/// Gallows drawing for the fraction of retries spent
///
/// Stage 0 is an empty gallows, stage 6 a complete figure.
#[must_use]
pub fn gallows(remaining: i32, allowed: i32) -> [String; 6] {
    const PARTS: usize = 6;
    let spent = (allowed - remaining).max(0) as usize;
    let total = allowed as usize + 1;
    let stage = if remaining < 0 {
        PARTS
    } else {
        (spent * PARTS / total).min(PARTS)
    };

    let head = if stage >= 1 { "O" } else { " " };
    let body = if stage >= 2 { "|" } else { " " };
    let left_arm = if stage >= 3 { "/" } else { " " };
    let right_arm = if stage >= 4 { "\\" } else { " " };
    let left_leg = if stage >= 5 { "/" } else { " " };
    let right_leg = if stage >= 6 { "\\" } else { " " };

    [
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {head}   |"),
        format!(" {left_arm}{body}{right_arm}  |"),
        format!(" {left_leg} {right_leg}  |"),
        "=======".to_string(),
    ]
}

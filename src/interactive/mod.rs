//! Interactive TUI interface
//!
//! Full-screen hangman built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui};

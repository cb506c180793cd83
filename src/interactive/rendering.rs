//! TUI rendering with ratatui
//!
//! Gallows, revealed pattern and game history panels.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{gallows, spaced_pattern};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 ADVERSARIAL HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Gallows
            Constraint::Min(4),    // Word and letters
        ])
        .split(area);

    render_gallows(f, app, chunks[0]);
    render_word(f, app, chunks[1]);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let (remaining, allowed) = app
        .session
        .as_ref()
        .map_or((0, 0), |s| (s.remaining_retries(), s.allowed_retries()));
    let color = if remaining < 0 {
        Color::Red
    } else {
        Color::White
    };

    let lines: Vec<Line> = gallows(remaining, allowed).into_iter().map(Line::from).collect();
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Word ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(session) = app.session.as_ref() else {
        let paragraph = Paragraph::new("No game in progress").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let word = match &app.secret {
        Some(secret) if app.input_mode == InputMode::GameOver => secret
            .chars()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" "),
        _ => spaced_pattern(session.pattern()).to_uppercase(),
    };

    let letters: Vec<Span> = ALPHABET
        .chars()
        .map(|c| {
            let style = if !session.has_used(c) {
                Style::default().fg(Color::White)
            } else if session.pattern().contains(c) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            Span::styled(format!("{} ", c.to_ascii_uppercase()), style)
        })
        .collect();

    let content = vec![
        Line::from(Span::styled(
            word,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(letters),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Retries gauge
            Constraint::Percentage(50), // History
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_retries(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_retries(f: &mut Frame, app: &App, area: Rect) {
    let (remaining, allowed) = app
        .session
        .as_ref()
        .map_or((0, 0), |s| (s.remaining_retries(), s.allowed_retries()));
    let ratio = if allowed > 0 {
        (f64::from(remaining.max(0)) / f64::from(allowed)).clamp(0.0, 1.0)
    } else {
        f64::from(i32::from(remaining >= 0 && app.session.is_some()))
    };
    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Retries ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{}/{allowed} left", remaining.max(0)));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(8)
        .enumerate()
        .map(|(i, entry)| {
            let (mark, color) = if entry.outcome.is_accepted() {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Red)
            };
            let content = format!(
                "{}: {} {mark} {} {} → {}",
                app.history.len() - i,
                entry.letter.to_ascii_uppercase(),
                entry.pattern,
                entry.candidates_before,
                entry.candidates_after
            );
            ListItem::new(content).style(Style::default().fg(color))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Length => (
            " Word Length | Enter to confirm ",
            app.length_input.as_str(),
            Color::Cyan,
        ),
        InputMode::Retries => (
            " Wrong Guesses Allowed | Enter to start, ESC to go back ",
            app.retries_input.as_str(),
            Color::Cyan,
        ),
        InputMode::Guessing => (
            " Type a letter to guess | ESC to abandon ",
            "",
            Color::Yellow,
        ),
        InputMode::GameOver => (
            " Game over | 'n' new game, 'r' replay, 'q' quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Length | InputMode::Retries => "Mode: Setup",
        InputMode::Guessing => "Mode: Playing",
        InputMode::GameOver => "Mode: Game Over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.candidates_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help = Paragraph::new("Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

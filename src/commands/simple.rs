//! Simple interactive CLI mode
//!
//! Line-based hangman without the TUI: prompt, read, resolve, prompt again.

use crate::engine::Partition;
use crate::game::{GameSession, GameState, GuessOutcome, Hangman};
use crate::output::formatters::{retries_bar, spaced_pattern};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(hangman: &Hangman, verbose: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(hangman, verbose, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the interactive loop against arbitrary input and output
///
/// Returns when the player declines a new game or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    hangman: &Hangman,
    verbose: bool,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                  Hangman - Interactive Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Dictionary: {} words, lengths {}\n",
        hangman.dictionary().word_count(),
        describe_lengths(&hangman.dictionary().lengths())
    )?;

    loop {
        let Some(answer) = prompt(input, output, "Do you want to play a new game? (y/n)")? else {
            break;
        };
        match answer.to_lowercase().as_str() {
            "n" | "no" | "q" | "quit" => break,
            "y" | "yes" => {}
            _ => {
                writeln!(output, "{}", "Invalid input, please enter y or n".red())?;
                continue;
            }
        }

        let Some(length) = prompt(input, output, "Enter the expected length of the word")? else {
            break;
        };
        let Ok(length) = length.parse::<usize>() else {
            writeln!(output, "{}", format!("Invalid length: {length}").red())?;
            continue;
        };

        let retries_prompt = format!(
            "Enter the number of retries (max allowed: {})",
            hangman.config().max_allowed_retries
        );
        let Some(retries) = prompt(input, output, &retries_prompt)? else {
            break;
        };
        let Ok(retries) = retries.parse::<i32>() else {
            writeln!(output, "{}", format!("Invalid number of retries: {retries}").red())?;
            continue;
        };

        let mut session = match hangman.new_game(length, retries) {
            Ok(session) => session,
            Err(e) => {
                writeln!(output, "{} Please try again!", e.to_string().red())?;
                continue;
            }
        };

        if !play_session(&mut session, verbose, input, output)? {
            break;
        }
    }

    writeln!(output, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Play one session to the end
///
/// Returns `false` if input ended before the game did.
fn play_session<R: BufRead, W: Write>(
    session: &mut GameSession<'_>,
    verbose: bool,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    while session.is_running() {
        writeln!(output, "\n   {}", spaced_pattern(session.pattern()).bright_white().bold())?;
        writeln!(
            output,
            "   Tries: [{}] {}",
            retries_bar(session.remaining_retries(), session.allowed_retries(), 10),
            session.remaining_retries()
        )?;

        let used: String = session.used_letters().iter().collect();
        let Some(letter) = read_letter(input, output, &used)? else {
            return Ok(false);
        };

        if verbose {
            print_partition(output, session, letter)?;
        }

        match session.submit_guess(letter) {
            Err(e) => writeln!(output, "{}", e.to_string().yellow())?,
            Ok(GuessOutcome::Revealed) if session.is_running() => {
                writeln!(output, "{}", "You guessed a right character!!".green())?;
            }
            Ok(GuessOutcome::Missed) if session.is_running() => writeln!(
                output,
                "{}",
                format!(
                    "Sorry, '{letter}' is not in the word. Remaining tries: {}",
                    session.remaining_retries()
                )
                .red()
            )?,
            Ok(_) => {}
        }
    }

    match session.state() {
        GameState::Won => {
            writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                output,
                "  {} The word was {}",
                "🎉 You won! Congratulations!!!".bright_green().bold(),
                session.pattern().to_string().to_uppercase().bright_yellow().bold()
            )?;
            writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
        }
        GameState::Lost => {
            let secret = session.pick_secret(&mut rand::rng()).unwrap_or("?");
            writeln!(
                output,
                "\n{} Chosen word was: {}",
                "All retries finished, you lose!!".red().bold(),
                secret.to_uppercase().bright_yellow().bold()
            )?;
        }
        GameState::Running => {}
    }

    Ok(true)
}

fn print_partition<W: Write>(
    output: &mut W,
    session: &GameSession<'_>,
    letter: char,
) -> io::Result<()> {
    if session.has_used(letter) {
        return Ok(());
    }

    let partition = Partition::calculate(session.candidates(), session.pattern(), letter);
    writeln!(
        output,
        "   {} '{letter}' splits {} candidates into {} groups:",
        "trace:".bright_black(),
        partition.candidate_count(),
        partition.len()
    )?;
    for (i, (pattern, words)) in partition.ranked().iter().enumerate() {
        let marker = if i == 0 { "→" } else { " " };
        writeln!(
            output,
            "   {marker} {pattern}  {:>5} words  {} hidden",
            words.len(),
            pattern.unknown_count()
        )?;
    }
    Ok(())
}

/// Read a single ASCII letter, re-prompting on invalid input
///
/// The letter is lower-cased to match the lower-cased dictionary.
fn read_letter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    used: &str,
) -> io::Result<Option<char>> {
    loop {
        let message = format!("Enter a character (previous characters: {used})");
        let Some(line) = prompt(input, output, &message)? else {
            return Ok(None);
        };

        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_alphabetic() => {
                return Ok(Some(ch.to_ascii_lowercase()));
            }
            _ => writeln!(
                output,
                "{}",
                "Invalid character, please input the character again".red()
            )?,
        }
    }
}

/// Print a prompt and read one trimmed line; `None` on end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn describe_lengths(lengths: &[usize]) -> String {
    match (lengths.first(), lengths.last()) {
        (Some(min), Some(max)) if min == max => min.to_string(),
        (Some(min), Some(max)) => format!("{min}-{max}"),
        _ => "none".to_string(),
    }
}

//! Adversarial Hangman - CLI
//!
//! Hangman against an opponent that keeps changing its mind, with TUI and CLI
//! modes plus analysis and simulation tools.

use adversarial_hangman::{
    commands::{SimulateConfig, analyze_guess, run_simple, run_simulation},
    game::{DEFAULT_MAX_RETRIES, GameConfig, Hangman},
    output::{print_analysis_result, print_dictionary_report, print_simulation_result},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "adversarial_hangman",
    about = "Hangman where the computer dodges every guess it can",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: built-in list)
    #[arg(short, long, global = true)]
    dictionary: Option<String>,

    /// Upper bound on wrong guesses a game may allow
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: i32,

    /// Report skipped dictionary words and engine decisions
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show how a guess splits the candidate words
    Analyze {
        /// Word length to start from
        length: usize,

        /// Letters to guess in order; the last one is analyzed
        letters: String,
    },

    /// Play automated guessers against the engine
    Simulate {
        /// Word lengths to play (default: every length in the dictionary)
        #[arg(short, long, value_delimiter = ',')]
        lengths: Vec<usize>,

        /// Wrong guesses allowed per game
        #[arg(short, long, default_value = "6")]
        retries: i32,

        /// Games per word length
        #[arg(short = 'n', long, default_value = "10")]
        games: usize,

        /// Guesser: frequency (default), english, alphabetical, random
        #[arg(short, long, default_value = "frequency")]
        guesser: String,
    },
}

/// Build the game context from the -d flag
///
/// A missing flag or a file without words falls back to the built-in list.
fn load_hangman(dictionary: Option<&str>, max_retries: i32) -> Result<Hangman> {
    use adversarial_hangman::wordlists::loader::load_from_file;

    let config = GameConfig::new(max_retries);
    let words = match dictionary {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read dictionary file '{path}'"))?,
        None => Vec::new(),
    };
    Ok(Hangman::init(words.as_slice(), config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.max_retries < 0 {
        anyhow::bail!("--max-retries must not be negative, got {}", cli.max_retries);
    }

    let hangman = load_hangman(cli.dictionary.as_deref(), cli.max_retries)?;
    print_dictionary_report(hangman.dictionary(), cli.verbose);
    if hangman.dictionary().is_empty() {
        anyhow::bail!("Dictionary contains no playable words");
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&hangman),
        Commands::Simple => run_simple(&hangman, cli.verbose),
        Commands::Analyze { length, letters } => {
            let result = analyze_guess(&hangman, length, &letters.to_lowercase())?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Simulate {
            lengths,
            retries,
            games,
            guesser,
        } => {
            let mut config = SimulateConfig::new(guesser, retries);
            config.lengths = lengths;
            config.games = games;
            run_simulate_command(&hangman, &config)
        }
    }
}

fn run_simulate_command(hangman: &Hangman, config: &SimulateConfig) -> Result<()> {
    println!(
        "Simulating {} game(s) per length with {} retries...",
        config.games, config.retries
    );
    let result = run_simulation(hangman, config)?;
    print_simulation_result(&result);
    Ok(())
}

fn run_play_command(hangman: &Hangman) -> Result<()> {
    use adversarial_hangman::interactive::{App, run_tui};

    let app = App::new(hangman);
    run_tui(app)
}

//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, SimulationResult};
use crate::core::Dictionary;
use colored::Colorize;

/// Report words discarded while building the dictionary on stderr
pub fn print_dictionary_report(dictionary: &Dictionary, verbose: bool) {
    let rejected = dictionary.rejected();
    if rejected.is_empty() {
        return;
    }

    eprintln!(
        "{} discarded {} invalid dictionary {}",
        "warning:".yellow().bold(),
        rejected.len(),
        if rejected.len() == 1 { "word" } else { "words" }
    );
    if verbose {
        for entry in rejected {
            eprintln!("  {} {:?}: {}", "-".bright_black(), entry.word, entry.reason);
        }
    }
}

/// Print the result of a partition analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} '{}' on {}-letter words",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.letter.to_string().bright_yellow().bold(),
        result.length
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.replayed.is_empty() {
        let replayed: String = result.replayed.iter().collect();
        println!("\n   Replayed:    {replayed}");
    }
    println!("   Pattern:     {}", result.starting_pattern);
    println!("   Candidates:  {}", result.total_candidates);
    println!("   Groups:      {}\n", result.groups.len());

    for (i, group) in result.groups.iter().enumerate() {
        let bar = create_progress_bar(group.size as f64, result.total_candidates as f64, 20);
        let line = format!(
            "{}  [{}] {:5} words, {} hidden",
            group.pattern, bar, group.size, group.hidden_slots
        );
        if i == 0 {
            println!(" → {}", line.green().bold());
        } else {
            println!("   {line}");
        }
        let mut sample = group.sample.join(", ");
        if group.size > group.sample.len() {
            sample.push_str(", ...");
        }
        println!("     {}", sample.bright_black());
    }

    println!();
    if result.accepted {
        println!("{}", "✅ The guess would be accepted".green().bold());
    } else {
        println!("{}", "❌ The guess would be rejected".red().bold());
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Guesser:          {}", result.guesser);
    println!("   Retries:          {}", result.retries);
    println!("   Games played:     {}", result.total_games());
    println!(
        "   Won:              {} {}",
        result.wins,
        format!("({:.1}%)", result.win_rate() * 100.0).green()
    );
    println!(
        "   Lost:             {} {}",
        result.losses,
        format!("({:.1}%)", (1.0 - result.win_rate()) * 100.0).red()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📏 {}", "By length:".bright_cyan().bold());
    for (length, stats) in &result.by_length {
        let avg_wrong = stats.total_wrong as f64 / stats.games.max(1) as f64;
        println!(
            "   {length:2} letters: {:4} games  {}  avg wrong {avg_wrong:.1}",
            stats.games,
            format!("{:5.1}% won", stats.win_rate() * 100.0).bright_yellow()
        );
    }

    println!("\n📈 {}", "Wrong guesses:".bright_cyan().bold());
    let total = result.total_games().max(1);
    for (wrong, &count) in &result.wrong_distribution {
        let pct = count as f64 / total as f64 * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {wrong:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}

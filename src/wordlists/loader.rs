//! Word list loading utilities
//!
//! Reads dictionary files with one word per line. Lines are trimmed and
//! lower-cased; validation is left to [`Dictionary::build`](crate::core::Dictionary::build).

use std::fs;
use std::io;
use std::path::Path;

/// Load raw words from a file
///
/// Blank lines are skipped. Invalid words are kept so the dictionary build can
/// report them.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use adversarial_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(normalize_lines(&content))
}

/// Split text into trimmed, lower-cased, non-empty lines
///
/// # Examples
/// ```
/// use adversarial_hangman::wordlists::loader::normalize_lines;
///
/// let words = normalize_lines("Last\n  fast \n\nBETS\r\n");
/// assert_eq!(words, vec!["last", "fast", "bets"]);
/// ```
#[must_use]
pub fn normalize_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn normalize_skips_blank_lines() {
        let words = normalize_lines("\n\n code \n\t\n");
        assert_eq!(words, vec!["code"]);
    }

    #[test]
    fn normalize_keeps_invalid_words_for_reporting() {
        let words = normalize_lines("it's\nc0de\nok");
        assert_eq!(words, vec!["it's", "c0de", "ok"]);
    }

    #[test]
    fn normalize_empty() {
        assert!(normalize_lines("").is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "adversarial_hangman_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "Last\nfast\n\nbets").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["last", "fast", "bets"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/a/dictionary.txt").is_err());
    }
}

//! Word list loading utilities
//!
//! Provides functions to parse word lists from text or load them from files.

use crate::core::Word;
use crate::solver::Dictionary;
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a word list from text
///
/// A leading byte order mark is ignored. Lines may end in `\n` or `\r\n`. Every line is upper-cased; lines that are
/// not exactly 5 characters long are skipped without error. No other trimming
/// is done, so a line with stray spaces is skipped too.
///
/// # Examples
/// ```
/// use slovo_solver::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("водка\r\nтабло\nлуч\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "ВОДКА");
/// assert_eq!(words[1].text(), "ТАБЛО");
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .strip_prefix('\u{FEFF}')
        .unwrap_or(content)
        .lines()
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Load words from a file
///
/// Returns the valid words in file order, skipping any malformed lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use slovo_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("RussianFreq.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);

    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load both lists and build a dictionary with ranks from the frequent list order
///
/// # Errors
///
/// Returns an I/O error if either file cannot be read.
pub fn load_dictionary<P: AsRef<Path>, Q: AsRef<Path>>(
    frequent_path: P,
    junk_path: Q,
) -> io::Result<Dictionary> {
    let frequent = load_from_file(frequent_path)?;
    let junk = load_from_file(junk_path)?;
    Ok(Dictionary::from_lists(frequent, junk))
}

/// Convert a string slice to a Word vector, skipping malformed entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

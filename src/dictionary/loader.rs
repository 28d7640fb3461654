//! Dictionary file loading utilities
//!
//! Replace any of the embedded lists with a plain text file, one entry per line.

use super::{DictionaryError, LetterGlyphs};
use crate::core::Word;
use std::fs;
use std::path::Path;

fn read(path: &Path) -> Result<String, DictionaryError> {
    fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use chat_wordle::dictionary::loader::load_words;
///
/// let words = load_words("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let content = read(path.as_ref())?;
    Ok(lines(&content).filter_map(|w| Word::new(w).ok()).collect())
}

/// Load a 78-line glyph table from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or has the wrong line count.
pub fn load_glyphs<P: AsRef<Path>>(path: P) -> Result<LetterGlyphs, DictionaryError> {
    let content = read(path.as_ref())?;
    LetterGlyphs::new(lines(&content).map(str::to_string).collect())
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use chat_wordle::dictionary::loader::words_from_slice;
/// use chat_wordle::dictionary::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

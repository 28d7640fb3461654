//! Dictionary store
//!
//! Solution words, acceptable guesses and letter glyphs. Built once, then only
//! read; the embedded copy is shared process-wide through [`Dictionary::shared`].

mod embedded;
pub mod loader;

use crate::core::{Feedback, Mark, Word};
use rustc_hash::FxHashSet;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

pub use embedded::{
    GUESSES, GUESSES_COUNT, LETTER_GLYPHS, LETTER_GLYPHS_COUNT, SOLUTIONS, SOLUTIONS_COUNT,
    SYMBOLS, WORD_FREQUENCY, WORD_FREQUENCY_COUNT,
};

/// Errors raised while assembling a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("solution list is empty")]
    NoSolutions,
    #[error("expected {expected} letter glyphs, got {actual}")]
    GlyphCount { expected: usize, actual: usize },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 26×3 glyphs used to render per-letter feedback
///
/// Row 0 holds absent letters, row 1 present letters, row 2 correct letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGlyphs(Vec<String>);

impl LetterGlyphs {
    /// Number of glyphs in a complete table
    pub const LEN: usize = 26 * 3;

    /// Build a glyph table from exactly 78 entries
    ///
    /// # Errors
    /// Returns `DictionaryError::GlyphCount` for any other number of entries.
    pub fn new(glyphs: Vec<String>) -> Result<Self, DictionaryError> {
        if glyphs.len() != Self::LEN {
            return Err(DictionaryError::GlyphCount {
                expected: Self::LEN,
                actual: glyphs.len(),
            });
        }
        Ok(Self(glyphs))
    }

    /// Glyph for a lowercase letter under a mark
    #[must_use]
    pub fn glyph(&self, letter: u8, mark: Mark) -> &str {
        &self.0[usize::from(letter - b'a') + 26 * mark.row()]
    }

    /// Render a guess as one glyph per letter
    #[must_use]
    pub fn render(&self, guess: &Word, feedback: Feedback) -> String {
        guess
            .chars()
            .iter()
            .zip(feedback.marks())
            .map(|(&letter, &mark)| self.glyph(letter, mark))
            .collect()
    }
}

/// Immutable word data for the game
#[derive(Debug, Clone)]
pub struct Dictionary {
    solutions: Vec<Word>,
    acceptable: FxHashSet<String>,
    glyphs: LetterGlyphs,
}

static EMBEDDED: LazyLock<Arc<Dictionary>> = LazyLock::new(|| {
    let glyphs = LETTER_GLYPHS.iter().map(|&g| g.to_string()).collect();
    Arc::new(Dictionary {
        solutions: loader::words_from_slice(SOLUTIONS),
        acceptable: SOLUTIONS
            .iter()
            .chain(GUESSES)
            .map(|&w| w.to_string())
            .collect(),
        glyphs: LetterGlyphs(glyphs),
    })
});

impl Dictionary {
    /// Assemble a dictionary
    ///
    /// Every solution is added to the acceptable guesses.
    ///
    /// # Errors
    /// Returns `DictionaryError::NoSolutions` if `solutions` is empty.
    pub fn new(
        solutions: Vec<Word>,
        guesses: impl IntoIterator<Item = String>,
        glyphs: LetterGlyphs,
    ) -> Result<Self, DictionaryError> {
        if solutions.is_empty() {
            return Err(DictionaryError::NoSolutions);
        }
        let mut acceptable: FxHashSet<String> = guesses.into_iter().collect();
        acceptable.extend(solutions.iter().map(|w| w.text().to_string()));
        Ok(Self {
            solutions,
            acceptable,
            glyphs,
        })
    }

    /// The embedded dictionary, loaded on first use
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(&EMBEDDED)
    }

    /// Words a solution may be drawn from
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Check whether a lowercase string is an acceptable guess
    #[inline]
    #[must_use]
    pub fn is_acceptable(&self, word: &str) -> bool {
        self.acceptable.contains(word)
    }

    /// Number of acceptable guesses
    #[must_use]
    pub fn acceptable_count(&self) -> usize {
        self.acceptable.len()
    }

    /// Acceptable guesses in sorted order
    #[must_use]
    pub fn acceptable_sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.acceptable.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Letter glyphs for feedback rendering
    #[must_use]
    pub const fn glyphs(&self) -> &LetterGlyphs {
        &self.glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
        assert_eq!(LETTER_GLYPHS.len(), LETTER_GLYPHS_COUNT);
        assert_eq!(WORD_FREQUENCY.len(), WORD_FREQUENCY_COUNT);
    }

    #[test]
    fn solutions_are_valid_words() {
        let dictionary = Dictionary::shared();
        assert_eq!(dictionary.solutions().len(), SOLUTIONS_COUNT);
    }

    #[test]
    fn guesses_are_lowercase_five_letters() {
        for &word in GUESSES {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn solutions_are_acceptable() {
        let dictionary = Dictionary::shared();
        for word in dictionary.solutions() {
            assert!(dictionary.is_acceptable(word.text()));
        }
        assert!(dictionary.is_acceptable("ayaya"));
        assert!(!dictionary.is_acceptable("thumbs"));
    }

    #[test]
    fn everyday_words_are_embedded() {
        let dictionary = Dictionary::shared();
        for word in ["grape", "tears", "zebra", "mango", "crane"] {
            assert!(dictionary.is_acceptable(word), "{word}");
        }
        assert!(SOLUTIONS_COUNT > 1500);
        assert!(dictionary.acceptable_count() > 10_000);
        assert!(WORD_FREQUENCY_COUNT > 50_000);
    }

    #[test]
    fn embedded_glyph_table_is_complete() {
        assert_eq!(LETTER_GLYPHS_COUNT, LetterGlyphs::LEN);
        let glyphs = Dictionary::shared().glyphs().clone();
        assert_eq!(glyphs.glyph(b'a', Mark::Absent), ":a_grey:");
        assert_eq!(glyphs.glyph(b'z', Mark::Present), ":z_yellow:");
        assert_eq!(glyphs.glyph(b'm', Mark::Correct), ":m_green:");
    }

    #[test]
    fn glyph_table_rejects_wrong_size() {
        let result = LetterGlyphs::new(vec!["x".to_string(); 26]);
        assert!(matches!(
            result,
            Err(DictionaryError::GlyphCount { actual: 26, .. })
        ));
    }

    #[test]
    fn render_uses_marks() {
        let dictionary = Dictionary::shared();
        let guess = Word::new("shark").unwrap();
        let solution = Word::new("spark").unwrap();
        let rendered = dictionary
            .glyphs()
            .render(&guess, Feedback::calculate(&guess, &solution));
        assert_eq!(rendered, ":s_green::h_grey::a_green::r_green::k_green:");
    }

    #[test]
    fn new_adds_solutions_to_acceptable() {
        let glyphs = Dictionary::shared().glyphs().clone();
        let dictionary =
            Dictionary::new(vec![Word::new("spark").unwrap()], Vec::new(), glyphs).unwrap();
        assert!(dictionary.is_acceptable("spark"));
        assert_eq!(dictionary.acceptable_count(), 1);
    }

    #[test]
    fn new_requires_solutions() {
        let glyphs = Dictionary::shared().glyphs().clone();
        assert!(matches!(
            Dictionary::new(Vec::new(), Vec::new(), glyphs),
            Err(DictionaryError::NoSolutions)
        ));
    }
}

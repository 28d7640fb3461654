//! Guess interpretation
//!
//! Reads arbitrary chat input as a five-letter word:
//! raw text → [`segment`] → [`explode`] per unit → [`resolve`].

mod explode;
mod frequency;
mod resolve;
mod segment;
mod symbols;

pub use explode::explode;
pub use frequency::{DEFAULT_COST, WordFrequency};
pub use resolve::{GuessError, MAX_UNITS, resolve};
pub use segment::{Segment, TextUnit, segment, segment_with};
pub use symbols::{SymbolName, SymbolTable};

use crate::core::Word;
use crate::dictionary::Dictionary;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Everything needed to read a guess, shared read-only
#[derive(Debug, Clone)]
pub struct Interpreter {
    dictionary: Arc<Dictionary>,
    symbols: Arc<SymbolTable>,
    frequency: Arc<WordFrequency>,
}

impl Interpreter {
    #[must_use]
    pub const fn new(
        dictionary: Arc<Dictionary>,
        symbols: Arc<SymbolTable>,
        frequency: Arc<WordFrequency>,
    ) -> Self {
        Self {
            dictionary,
            symbols,
            frequency,
        }
    }

    /// Interpreter over the embedded data
    #[must_use]
    pub fn shared() -> Self {
        Self::new(
            Dictionary::shared(),
            SymbolTable::shared(),
            WordFrequency::shared(),
        )
    }

    /// Same tables, different word lists
    #[must_use]
    pub fn with_dictionary(&self, dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    #[must_use]
    pub fn frequency(&self) -> &WordFrequency {
        &self.frequency
    }

    /// Split raw text into units using this interpreter's symbol table
    #[must_use]
    pub fn segment(&self, raw: &str) -> Vec<Segment> {
        segment_with(raw, &self.symbols)
    }

    /// Readings of one unit
    #[must_use]
    pub fn explode(&self, unit: &TextUnit) -> BTreeSet<String> {
        explode(unit, &self.symbols, &self.frequency)
    }

    /// Resolve already segmented units
    ///
    /// # Errors
    /// See [`resolve`].
    pub fn resolve(&self, units: &[TextUnit]) -> Result<Word, GuessError> {
        if units.is_empty() || units.len() > MAX_UNITS {
            return Err(GuessError::Length);
        }
        let readings: Vec<BTreeSet<String>> = units.iter().map(|u| self.explode(u)).collect();
        resolve(&readings, &self.dictionary, &self.frequency)
    }

    /// Read raw chat text as a word
    ///
    /// # Errors
    /// `GuessError::Length` or `GuessError::Invalid` when no acceptable
    /// five-letter reading exists.
    ///
    /// # Examples
    /// ```
    /// use chat_wordle::interpret::Interpreter;
    ///
    /// let interpreter = Interpreter::shared();
    /// assert_eq!(interpreter.parse_guess("s🐑r").unwrap().text(), "sewer");
    /// assert_eq!(interpreter.parse_guess("👩‍✈️").unwrap().text(), "pilot");
    /// ```
    pub fn parse_guess(&self, raw: &str) -> Result<Word, GuessError> {
        let units: Vec<TextUnit> = self.segment(raw).into_iter().map(|s| s.unit).collect();
        debug!(raw, units = units.len(), "parsing guess");
        self.resolve(&units)
    }
}

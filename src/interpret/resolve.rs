//! Interpretation resolver
//!
//! Combines the readings of every unit into whole-word interpretations and
//! picks one acceptable guess.

use super::frequency::WordFrequency;
use crate::core::{WORD_LENGTH, Word};
use crate::dictionary::Dictionary;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

/// Most units a guess may be made of
pub const MAX_UNITS: usize = WORD_LENGTH;

/// Why a guess could not be read as a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// No reading has five letters
    #[error("guess has no five-letter reading")]
    Length,
    /// Five-letter readings exist but none is an acceptable word
    #[error("guess is not an acceptable word")]
    Invalid,
}

/// Pick the best acceptable word from per-unit readings
///
/// A guess made of one unit resolves to its least common reading, a mixed
/// guess to its most common one. Equal costs keep the earliest interpretation
/// in enumeration order.
///
/// # Errors
/// `GuessError::Length` for zero units, more than [`MAX_UNITS`] units, or no
/// five-letter interpretation; `GuessError::Invalid` when no five-letter
/// interpretation is an acceptable guess.
pub fn resolve(
    readings: &[BTreeSet<String>],
    dictionary: &Dictionary,
    frequency: &WordFrequency,
) -> Result<Word, GuessError> {
    if readings.is_empty() || readings.len() > MAX_UNITS {
        return Err(GuessError::Length);
    }

    let interpretations = cartesian_concat(readings);
    debug!(count = interpretations.len(), "interpretations");

    let five_letter: Vec<&String> = interpretations
        .iter()
        .filter(|i| i.chars().count() == WORD_LENGTH)
        .collect();
    if five_letter.is_empty() {
        return Err(GuessError::Length);
    }

    let single_unit = readings.len() == 1;
    let mut best: Option<(&str, f64)> = None;
    for candidate in five_letter {
        if !dictionary.is_acceptable(candidate) {
            continue;
        }
        let cost = frequency.cost(candidate);
        let better = match best {
            None => true,
            Some((_, best_cost)) if single_unit => cost > best_cost,
            Some((_, best_cost)) => cost < best_cost,
        };
        if better {
            best = Some((candidate, cost));
        }
    }

    let (word, cost) = best.ok_or(GuessError::Invalid)?;
    debug!(word, cost, single_unit, "resolved guess");
    Word::new(word).map_err(|_| GuessError::Invalid)
}

/// Every concatenation of one reading per unit, in unit order
fn cartesian_concat(readings: &[BTreeSet<String>]) -> Vec<String> {
    readings.iter().fold(vec![String::new()], |prefixes, unit| {
        prefixes
            .iter()
            .flat_map(|prefix| unit.iter().map(move |r| format!("{prefix}{r}")))
            .collect()
    })
}

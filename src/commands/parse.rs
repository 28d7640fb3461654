//! Guess parsing command
//!
//! Shows how a raw guess is segmented, what each unit may read as, and which
//! word (if any) it resolves to.

use crate::core::Word;
use crate::interpret::{GuessError, Interpreter, TextUnit};
use std::collections::BTreeSet;

/// One segmented unit and its readings
pub struct UnitReport {
    pub unit: TextUnit,
    pub source: String,
    pub readings: BTreeSet<String>,
}

/// Result of parsing a guess
pub struct ParseReport {
    pub raw: String,
    pub units: Vec<UnitReport>,
    pub result: Result<Word, GuessError>,
    /// Commonness of the resolved word
    pub cost: Option<f64>,
}

/// Parse a raw guess, keeping every intermediate step
#[must_use]
pub fn parse_guess_report(raw: &str, interpreter: &Interpreter) -> ParseReport {
    let units: Vec<UnitReport> = interpreter
        .segment(raw)
        .into_iter()
        .map(|s| UnitReport {
            readings: interpreter.explode(&s.unit),
            source: raw[s.span].to_string(),
            unit: s.unit,
        })
        .collect();

    let result = interpreter.parse_guess(raw);
    let cost = result
        .as_ref()
        .ok()
        .map(|word| interpreter.frequency().cost(word.text()));

    ParseReport {
        raw: raw.to_string(),
        units,
        result,
        cost,
    }
}

//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use crate::interpret::TextUnit;
use colored::{ColoredString, Colorize};
use std::collections::BTreeSet;

/// Short label for a unit's kind
#[must_use]
pub const fn unit_label(unit: &TextUnit) -> &'static str {
    match unit {
        TextUnit::PlainText(_) => "text",
        TextUnit::StandardSymbol(_) => "symbol",
        TextUnit::CustomSymbolReference(_) => "custom",
        TextUnit::SpecialGlyphSequence(_) => "glyph",
    }
}

/// Join readings, keeping at most `max` and counting the rest
#[must_use]
pub fn readings_list(readings: &BTreeSet<String>, max: usize) -> String {
    let shown: Vec<&str> = readings
        .iter()
        .take(max)
        .map(|r| if r.is_empty() { "∅" } else { r.as_str() })
        .collect();
    let mut list = shown.join(", ");
    if readings.len() > max {
        list.push_str(&format!(" (+{} more)", readings.len() - max));
    }
    list
}

/// A guess drawn as colored letter tiles
#[must_use]
pub fn tile_row(guess: &Word, feedback: Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

fn tile(letter: char, mark: Mark) -> ColoredString {
    let face = format!(" {} ", letter.to_ascii_uppercase()).bold();
    match mark {
        Mark::Correct => face.black().on_green(),
        Mark::Present => face.black().on_yellow(),
        Mark::Absent => face.white().on_bright_black(),
    }
}

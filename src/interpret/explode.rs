//! Alias expansion
//!
//! Turns one text unit into the set of plain words it may stand for. Symbol
//! and reference names are broken into every plausible sub-word so that the
//! resolver can later pick whichever reading is a dictionary word.

use super::frequency::WordFrequency;
use super::segment::TextUnit;
use super::symbols::SymbolTable;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// A capital or lowercase letter followed by anything but capitals and underscores
static WORD_PIECE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z][^A-Z_]*").expect("valid regex"));

/// A capital or `+` followed by anything but lowercase, underscores and `$`,
/// e.g. the `AYAYA` in `trifAYAYA`
static CAPITAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z+][^a-z_$]+").expect("valid regex"));

/// Plain readings of a unit, lowercase ASCII letters only
///
/// An unmapped standard symbol reads as the empty string, so it adds nothing
/// to a concatenated interpretation.
///
/// # Examples
/// ```
/// use chat_wordle::interpret::{SymbolTable, TextUnit, WordFrequency, explode};
///
/// let symbols = SymbolTable::shared();
/// let frequency = WordFrequency::shared();
///
/// let unit = TextUnit::CustomSymbolReference("lawnmower".into());
/// let aliases = explode(&unit, &symbols, &frequency);
/// assert!(aliases.contains("lawn"));
/// assert!(aliases.contains("mower"));
/// assert!(aliases.contains("lawnmower"));
/// ```
#[must_use]
pub fn explode(
    unit: &TextUnit,
    symbols: &SymbolTable,
    frequency: &WordFrequency,
) -> BTreeSet<String> {
    match unit {
        TextUnit::PlainText(content) => BTreeSet::from([content.to_lowercase()]),
        TextUnit::StandardSymbol(symbol) => match symbols.lookup(symbol) {
            Some(name) => expand(name.all(), frequency),
            None => BTreeSet::from([String::new()]),
        },
        TextUnit::CustomSymbolReference(name) => {
            expand(std::iter::once(name.as_str()), frequency)
        }
        TextUnit::SpecialGlyphSequence(tag) => BTreeSet::from([tag.clone()]),
    }
}

fn expand<'a>(
    aliases: impl IntoIterator<Item = &'a str>,
    frequency: &WordFrequency,
) -> BTreeSet<String> {
    let mut readings: BTreeSet<&str> = BTreeSet::new();
    for alias in aliases {
        readings.insert(alias);
        readings.extend(WORD_PIECE.find_iter(alias).map(|m| m.as_str()));
        readings.extend(CAPITAL_RUN.find_iter(alias).map(|m| m.as_str()));
        readings.extend(frequency.split(alias));
    }

    let singulars: Vec<&str> = readings.iter().filter_map(|r| r.strip_suffix('s')).collect();
    readings.extend(singulars);

    readings.into_iter().map(letters_only).collect()
}

fn letters_only(reading: &str) -> String {
    reading
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases(unit: &TextUnit) -> Vec<String> {
        explode(unit, &SymbolTable::shared(), &WordFrequency::shared())
            .into_iter()
            .collect()
    }

    #[test]
    fn plain_text_is_only_lowercased() {
        assert_eq!(
            aliases(&TextUnit::PlainText("Thumbs".into())),
            ["thumbs"]
        );
        assert_eq!(
            aliases(&TextUnit::PlainText("a b!".into())),
            ["a b!"]
        );
    }

    #[test]
    fn special_sequence_is_its_tag() {
        assert_eq!(
            aliases(&TextUnit::SpecialGlyphSequence("shrug".into())),
            ["shrug"]
        );
    }

    #[test]
    fn unmapped_symbol_reads_as_nothing() {
        assert_eq!(
            aliases(&TextUnit::StandardSymbol("\u{2192}".into())),
            [""]
        );
    }

    #[test]
    fn symbol_names_are_split_and_singularized() {
        let readings = aliases(&TextUnit::StandardSymbol("👍🏻".into()));
        assert_eq!(
            readings,
            [
                "light",
                "skin",
                "thumb",
                "thumbs",
                "thumbsuplightskintone",
                "tone",
                "up"
            ]
        );
    }

    #[test]
    fn camel_case_reference_is_split() {
        let readings = aliases(&TextUnit::CustomSymbolReference("tetriuTea".into()));
        assert!(readings.contains(&"tea".to_string()));
        assert!(readings.contains(&"tetriutea".to_string()));
    }

    #[test]
    fn capital_runs_are_kept_together() {
        let readings = aliases(&TextUnit::CustomSymbolReference("trifAYAYA".into()));
        assert!(readings.contains(&"ayaya".to_string()));
    }

    #[test]
    fn capital_runs_start_at_plus_and_stop_at_dollar() {
        let runs: Vec<&str> = CAPITAL_RUN
            .find_iter("+1 GO$GO_NOw")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(runs, ["+1 GO", "GO", "NO"]);
    }

    #[test]
    fn readings_are_lowercase_letters() {
        for unit in [
            TextUnit::StandardSymbol("👩‍✈️".into()),
            TextUnit::CustomSymbolReference("AYAYAWeird".into()),
            TextUnit::CustomSymbolReference("a_grey".into()),
        ] {
            for reading in aliases(&unit) {
                assert!(reading.chars().all(|c| c.is_ascii_lowercase()), "{reading}");
            }
        }
    }
}

//! Guess segmentation
//!
//! Splits raw chat text into typed units in three passes. Each pass only
//! re-splits text the previous passes left unclassified:
//! 1. known symbols (whole grapheme clusters found in the [`SymbolTable`], so
//!    ZWJ and modifier sequences stay together)
//! 2. custom symbol references, `<:name:id>` or `<a:name:id>`
//! 3. the shrug idiom `¯\_(ツ)_/¯`, with optional markdown escapes

use super::symbols::SymbolTable;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static CUSTOM_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a?:([A-Za-z0-9_]+):[0-9]+>").expect("valid regex"));

/// Fixed idioms recognized verbatim, with the tag each one reads as
const SPECIAL_SEQUENCES: &[(&str, &str)] = &[(r"¯\_(ツ)_/¯", "shrug")];

/// Markdown escapes may appear before any character of an idiom
static SPECIAL_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    SPECIAL_SEQUENCES
        .iter()
        .map(|&(sequence, tag)| {
            let pattern: String = sequence
                .chars()
                .map(|c| format!(r"\\?{}", regex::escape(&c.to_string())))
                .collect();
            (Regex::new(&pattern).expect("valid regex"), tag)
        })
        .collect()
});

/// One typed unit of a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextUnit {
    /// Unmodified chat text
    PlainText(String),
    /// A symbol known to the symbol table, possibly several codepoints long
    StandardSymbol(String),
    /// A platform custom symbol reference, by name
    CustomSymbolReference(String),
    /// A fixed idiom mapped to a literal tag
    SpecialGlyphSequence(String),
}

/// A unit together with the byte range of the raw text it was cut from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub unit: TextUnit,
    pub span: Range<usize>,
}

impl Segment {
    fn new(unit: TextUnit, span: Range<usize>) -> Self {
        Self { unit, span }
    }
}

/// Split a raw guess into ordered, gap-free, non-overlapping segments
///
/// Uses the embedded symbol table. Empty input yields no segments.
///
/// # Examples
/// ```
/// use chat_wordle::interpret::{TextUnit, segment};
///
/// let segments = segment("s🐑r");
/// let units: Vec<_> = segments.into_iter().map(|s| s.unit).collect();
/// assert_eq!(
///     units,
///     [
///         TextUnit::PlainText("s".into()),
///         TextUnit::StandardSymbol("🐑".into()),
///         TextUnit::PlainText("r".into()),
///     ]
/// );
/// ```
#[must_use]
pub fn segment(raw: &str) -> Vec<Segment> {
    segment_with(raw, &SymbolTable::shared())
}

/// [`segment`] against a given symbol table
///
/// Grapheme clusters the table does not know stay in the surrounding
/// plain text, so `→` or `⌘` never become empty symbol units.
#[must_use]
pub fn segment_with(raw: &str, symbols: &SymbolTable) -> Vec<Segment> {
    // Unclassified spans are carried as `None` between passes
    let mut pending: Vec<(Option<TextUnit>, Range<usize>)> = split_symbols(raw, symbols);

    pending = refine(raw, pending, |text| {
        CUSTOM_REFERENCE
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?.as_str().to_string();
                Some((whole.range(), TextUnit::CustomSymbolReference(name)))
            })
            .collect()
    });

    pending = refine(raw, pending, |text| {
        let mut found: Vec<(Range<usize>, TextUnit)> = SPECIAL_PATTERNS
            .iter()
            .flat_map(|(pattern, tag)| {
                pattern
                    .find_iter(text)
                    .map(|m| (m.range(), TextUnit::SpecialGlyphSequence((*tag).to_string())))
            })
            .collect();
        found.sort_by_key(|(range, _)| range.start);
        found
    });

    pending
        .into_iter()
        .filter(|(_, span)| !span.is_empty())
        .map(|(unit, span)| {
            let unit = unit.unwrap_or_else(|| TextUnit::PlainText(raw[span.clone()].to_string()));
            Segment::new(unit, span)
        })
        .collect()
}

/// First pass: group grapheme clusters into symbols and unclassified runs
fn split_symbols(
    raw: &str,
    symbols: &SymbolTable,
) -> Vec<(Option<TextUnit>, Range<usize>)> {
    let mut spans = Vec::new();
    let mut run_start: Option<usize> = None;

    for (start, grapheme) in raw.grapheme_indices(true) {
        if symbols.is_symbol(grapheme) {
            if let Some(run) = run_start.take() {
                spans.push((None, run..start));
            }
            let end = start + grapheme.len();
            spans.push((
                Some(TextUnit::StandardSymbol(grapheme.to_string())),
                start..end,
            ));
        } else if run_start.is_none() {
            run_start = Some(start);
        }
    }
    if let Some(run) = run_start {
        spans.push((None, run..raw.len()));
    }

    spans
}

/// Re-split unclassified spans with `matcher`, leaving classified ones alone
///
/// `matcher` receives the span's text and returns sorted, non-overlapping
/// matches relative to that text.
fn refine<F>(
    raw: &str,
    pending: Vec<(Option<TextUnit>, Range<usize>)>,
    matcher: F,
) -> Vec<(Option<TextUnit>, Range<usize>)>
where
    F: Fn(&str) -> Vec<(Range<usize>, TextUnit)>,
{
    let mut refined = Vec::with_capacity(pending.len());

    for (unit, span) in pending {
        if unit.is_some() {
            refined.push((unit, span));
            continue;
        }

        let offset = span.start;
        let mut position = span.start;
        for (range, matched) in matcher(&raw[span.clone()]) {
            let (start, end) = (offset + range.start, offset + range.end);
            if start < position {
                continue;
            }
            if start > position {
                refined.push((None, position..start));
            }
            refined.push((Some(matched), start..end));
            position = end;
        }
        if position < span.end {
            refined.push((None, position..span.end));
        }
    }

    refined
}

//! Word-frequency oracle and statistical word splitting
//!
//! Costs follow Zipf's law over a ranked word list: the word at rank `r`
//! (0-based) in a list of `n` words costs `ln((r + 1) * ln(n))`. Lower cost
//! means more common.
//!
//! Splitting finds the segmentation of a run of letters with the lowest total
//! cost by dynamic programming, which recovers compound names such as
//! `lawnmower` → `lawn` + `mower`.

use crate::dictionary::WORD_FREQUENCY;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::{Arc, LazyLock};

/// Cost reported for words missing from the list
pub const DEFAULT_COST: f64 = 999.0;

/// Per-character cost of a split piece missing from the list
const UNKNOWN_CHAR_COST: f64 = 1000.0;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9']+").expect("valid regex"));

static SHARED: LazyLock<Arc<WordFrequency>> =
    LazyLock::new(|| Arc::new(WordFrequency::from_ranked(WORD_FREQUENCY.iter().copied())));

/// Ranked word costs
#[derive(Debug, Default)]
pub struct WordFrequency {
    costs: FxHashMap<String, f64>,
    max_len: usize,
}

impl WordFrequency {
    /// Build from words ordered most common first
    ///
    /// Later duplicates keep the earlier (lower) cost.
    pub fn from_ranked<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let words: Vec<&str> = words.into_iter().collect();
        let scale = (words.len().max(2) as f64).ln();

        let mut costs = FxHashMap::default();
        let mut max_len = 0;
        for (rank, word) in words.into_iter().enumerate() {
            let word = word.to_lowercase();
            max_len = max_len.max(word.len());
            costs
                .entry(word)
                .or_insert_with(|| ((rank + 1) as f64 * scale).ln());
        }

        Self { costs, max_len }
    }

    /// The embedded frequency list, loaded on first use
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// Commonness of a word, [`DEFAULT_COST`] when unknown
    #[must_use]
    pub fn cost(&self, word: &str) -> f64 {
        self.costs.get(word).copied().unwrap_or(DEFAULT_COST)
    }

    fn piece_cost(&self, piece: &str) -> f64 {
        self.costs
            .get(&piece.to_ascii_lowercase())
            .copied()
            .unwrap_or(UNKNOWN_CHAR_COST * piece.len() as f64)
    }

    /// Split text into its most probable words
    ///
    /// Characters other than ASCII letters, digits and apostrophes separate
    /// chunks and are dropped. Pieces keep their original case.
    ///
    /// # Examples
    /// ```
    /// use chat_wordle::interpret::WordFrequency;
    ///
    /// let frequency = WordFrequency::shared();
    /// assert_eq!(frequency.split("lawnmower"), ["lawn", "mower"]);
    /// assert_eq!(frequency.split("thumbs_up"), ["thumbs", "up"]);
    /// ```
    #[must_use]
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        NON_WORD
            .split(text)
            .filter(|chunk| !chunk.is_empty())
            .flat_map(|chunk| self.split_chunk(chunk))
            .collect()
    }

    /// Lowest-cost segmentation of one ASCII chunk
    fn split_chunk<'t>(&self, chunk: &'t str) -> Vec<&'t str> {
        let len = chunk.len();
        let max_len = self.max_len.max(1);

        // best[i] = (cost of chunk[..i], length of the last piece)
        let mut best: Vec<(f64, usize)> = Vec::with_capacity(len + 1);
        best.push((0.0, 0));
        for end in 1..=len {
            let choice = (1..=end.min(max_len))
                .map(|piece_len| {
                    let start = end - piece_len;
                    (best[start].0 + self.piece_cost(&chunk[start..end]), piece_len)
                })
                .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
                .unwrap_or((UNKNOWN_CHAR_COST, 1));
            best.push(choice);
        }

        let mut pieces = Vec::new();
        let mut end = len;
        while end > 0 {
            let piece_len = best[end].1;
            pieces.push(&chunk[end - piece_len..end]);
            end -= piece_len;
        }
        pieces.reverse();
        pieces
    }
}

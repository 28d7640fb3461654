//! Symbol name table
//!
//! Maps pictographic symbols to their English names. Keys are stored without
//! variation selectors (U+FE0F), so `🅰` and `🅰️` share one entry. Skin-tone
//! variants fall back to their base symbol with the tone appended to the name.

use crate::dictionary::SYMBOLS;
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

const VARIATION_SELECTOR: char = '\u{fe0f}';

const SKIN_TONES: [(char, &str); 5] = [
    ('\u{1f3fb}', "light_skin_tone"),
    ('\u{1f3fc}', "medium-light_skin_tone"),
    ('\u{1f3fd}', "medium_skin_tone"),
    ('\u{1f3fe}', "medium-dark_skin_tone"),
    ('\u{1f3ff}', "dark_skin_tone"),
];

/// Names for one symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolName {
    pub canonical: String,
    pub aliases: Vec<String>,
}

impl SymbolName {
    /// Canonical name followed by every alias
    pub fn all(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Lookup table from symbol to names
#[derive(Debug, Default)]
pub struct SymbolTable {
    names: FxHashMap<String, SymbolName>,
}

static SHARED: LazyLock<Arc<SymbolTable>> =
    LazyLock::new(|| Arc::new(SymbolTable::from_rows(SYMBOLS)));

fn normalize(symbol: &str) -> String {
    symbol.chars().filter(|&c| c != VARIATION_SELECTOR).collect()
}

impl SymbolTable {
    /// Build a table from `(symbol, canonical, aliases)` rows
    #[must_use]
    pub fn from_rows(rows: &[(&str, &str, &[&str])]) -> Self {
        let names = rows
            .iter()
            .map(|&(symbol, canonical, aliases)| {
                let name = SymbolName {
                    canonical: canonical.to_string(),
                    aliases: aliases.iter().map(|&a| a.to_string()).collect(),
                };
                (normalize(symbol), name)
            })
            .collect();
        Self { names }
    }

    /// The embedded table, loaded on first use
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// Number of symbols in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up the names of a symbol
    ///
    /// # Examples
    /// ```
    /// use chat_wordle::interpret::SymbolTable;
    ///
    /// let table = SymbolTable::shared();
    /// let name = table.lookup("👍🏻").unwrap();
    /// assert_eq!(name.canonical, ":thumbs_up_light_skin_tone:");
    /// ```
    #[must_use]
    pub fn lookup(&self, symbol: &str) -> Option<Cow<'_, SymbolName>> {
        let key = normalize(symbol);
        if let Some(name) = self.names.get(&key) {
            return Some(Cow::Borrowed(name));
        }

        let tone = key
            .chars()
            .find_map(|c| SKIN_TONES.iter().find(|(t, _)| *t == c))
            .map(|&(_, tone)| tone)?;
        let base: String = key
            .chars()
            .filter(|c| !SKIN_TONES.iter().any(|(t, _)| t == c))
            .collect();
        let base_name = self.names.get(&base)?;

        let canonical = match base_name.canonical.strip_suffix(':') {
            Some(stem) => format!("{stem}_{tone}:"),
            None => format!("{}_{tone}", base_name.canonical),
        };
        Some(Cow::Owned(SymbolName {
            canonical,
            aliases: Vec::new(),
        }))
    }

    /// Whether a grapheme cluster is a known symbol
    ///
    /// ASCII text never is.
    #[must_use]
    pub fn is_symbol(&self, grapheme: &str) -> bool {
        !grapheme.is_ascii() && self.lookup(grapheme).is_some()
    }
}

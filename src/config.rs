//! Game configuration
//!
//! Loaded from an optional TOML file. Missing keys keep their defaults:
//!
//! ```toml
//! games_per_day = 3
//! bonus_game_threshold = 2
//! free_play = false
//! min_guess_interval_ms = 3000
//! max_guesses = 6
//! # debug_solution = "debug"
//! ```

use crate::core::Word;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Tunables for every channel's game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rounds per UTC day
    pub games_per_day: u32,

    /// A win within this many guesses starts a bonus round right away
    pub bonus_game_threshold: usize,

    /// No per-player limit and a new round after every finish
    pub free_play: bool,

    /// Submissions closer together than this are dropped silently
    pub min_guess_interval_ms: u64,

    pub max_guesses: usize,

    /// Fixed solution for every round; also lifts the per-player limit
    pub debug_solution: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            games_per_day: 3,
            bonus_game_threshold: 2,
            free_play: false,
            min_guess_interval_ms: 3000,
            max_guesses: 6,
            debug_solution: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// `ConfigError::Parse` for malformed TOML, `ConfigError::Invalid` for
    /// out-of-range values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, or defaults when no path is given
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "loaded configuration from file");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// `ConfigError::Invalid` naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=1440).contains(&self.games_per_day) {
            return Err(ConfigError::Invalid(format!(
                "games_per_day must be between 1 and 1440, got {}",
                self.games_per_day
            )));
        }
        if self.max_guesses == 0 {
            return Err(ConfigError::Invalid("max_guesses must be at least 1".into()));
        }
        if let Some(word) = &self.debug_solution {
            Word::new(word).map_err(|e| {
                ConfigError::Invalid(format!("debug_solution {word:?}: {e}"))
            })?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn min_guess_interval(&self) -> Duration {
        Duration::from_millis(self.min_guess_interval_ms)
    }

    /// Whether one player may guess more than once per round
    #[must_use]
    pub const fn allows_repeat_players(&self) -> bool {
        self.free_play || self.debug_solution.is_some()
    }
}

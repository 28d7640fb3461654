//! Chat Wordle
//!
//! A Wordle game played in group chat channels. Guesses may be typed as
//! plain letters, emoji, custom platform symbols, or any mix of them; the
//! interpreter works out which five-letter word was meant.
//!
//! # Quick Start
//!
//! ```rust
//! use chat_wordle::core::{Feedback, Word};
//! use chat_wordle::interpret::Interpreter;
//!
//! let interpreter = Interpreter::shared();
//! let guess = interpreter.parse_guess("s🐑r").unwrap();
//! assert_eq!(guess.text(), "sewer");
//!
//! let feedback = Feedback::calculate(&guess, &Word::new("sweet").unwrap());
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists and glyphs
pub mod dictionary;

// Guess interpretation
pub mod interpret;

// Game configuration
pub mod config;

// Sessions, rounds and collaborators
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

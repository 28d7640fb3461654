//! Core domain types for the game
//!
//! Pure value types shared by the interpreter and the session state machine.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark, available_letters};
pub use word::{WORD_LENGTH, Word, WordError};

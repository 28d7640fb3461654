//! Feedback command
//!
//! Scores one guess against one solution, outside of any game.

use crate::core::{Feedback, Word, WordError};
use crate::dictionary::Dictionary;

/// Result of scoring a guess
pub struct FeedbackResult {
    pub guess: Word,
    pub solution: Word,
    pub feedback: Feedback,
    /// The row as it would appear on a game board
    pub glyph_row: String,
    /// Whether the game would accept the guess
    pub acceptable: bool,
}

/// Score `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_guess(
    guess: &str,
    solution: &str,
    dictionary: &Dictionary,
) -> Result<FeedbackResult, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    let feedback = Feedback::calculate(&guess, &solution);

    Ok(FeedbackResult {
        glyph_row: dictionary.glyphs().render(&guess, feedback),
        acceptable: dictionary.is_acceptable(guess.text()),
        guess,
        solution,
        feedback,
    })
}

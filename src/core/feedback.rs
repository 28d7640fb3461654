//! Per-letter feedback for a guess
//!
//! Each guessed letter is classified as:
//! - Absent (letter not in the solution, or all its occurrences already used)
//! - Present (letter in the solution, different position)
//! - Correct (letter in the same position)

use super::Word;
use super::word::WORD_LENGTH;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Mark {
    /// Index of this mark's row in a 26×3 glyph table
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self as usize
    }
}

/// Feedback for one guess against one solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark remaining letters present while the pool still holds them
    ///
    /// A letter that occurs once in the solution is never marked at two positions.
    ///
    /// # Examples
    /// ```
    /// use chat_wordle::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("eerie").unwrap();
    /// let solution = Word::new("sweet").unwrap();
    /// let feedback = Feedback::calculate(&guess, &solution);
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Present, Mark::Present, Mark::Absent, Mark::Absent, Mark::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut result = [Mark::Absent; WORD_LENGTH];
        let mut available = solution.char_counts();

        // Allow: Index needed to access guess[i], solution[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == solution.char_at(i) {
                result[i] = Mark::Correct;
                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Mark::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The mark for each guessed position
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Count the positions carrying `mark`
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert feedback to a colored-square string like "🟩⬜🟨🟩🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

/// Render the alphabet strip shown while a round is in play
///
/// Letters not guessed yet are listed plainly, guessed letters missing from the
/// solution are dropped, and guessed letters found in the solution are wrapped
/// in `**` runs.
///
/// # Examples
/// ```
/// use chat_wordle::core::{Word, available_letters};
///
/// let solution = Word::new("spark").unwrap();
/// let guesses = [Word::new("shark").unwrap()];
/// assert_eq!(
///     available_letters(&guesses, &solution),
///     "**a**bcdefgij**k**lmnopq**rs**tuvwxyz"
/// );
/// ```
#[must_use]
pub fn available_letters(guesses: &[Word], solution: &Word) -> String {
    let mut strip = String::with_capacity(40);
    let mut highlighting = false;

    for letter in b'a'..=b'z' {
        let guessed = guesses.iter().any(|g| g.has_letter(letter));
        if guessed && !solution.has_letter(letter) {
            continue;
        }
        let highlight = guessed;
        if highlight != highlighting {
            strip.push_str("**");
            highlighting = highlight;
        }
        strip.push(char::from(letter));
    }
    if highlighting {
        strip.push_str("**");
    }

    strip
}

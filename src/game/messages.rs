//! Reply texts
//!
//! Fixed lines plus the board posted after every accepted guess.

use super::session::{Outcome, Round};
use crate::core::{Feedback, available_letters};
use crate::dictionary::LetterGlyphs;
use std::fmt::Write;

pub const LENGTH_ERROR: &str = "Your guess must be 5 letters, a-z only.";
pub const ALREADY_GUESSED: &str = "Someone already guessed that. Try again.";
pub const REPEAT_PLAYER: &str =
    "It's more fun if everyone gets to guess. Please come play again later, though!";
pub const ENABLED: &str =
    "Wordle game enabled for this channel. Start guessing with \"guess [word]\".";
pub const DISABLED: &str = "Wordle game disabled.";

pub const INVALID_GUESS_RESPONSES: [&str; 11] = [
    "I don't know that word, sorry. Try again.",
    "Now you're just making things up.",
    "I've checked every book in the mansion, and your word is in none of them. Try again.",
    "Never heard of it. Try again.",
    "What? Maybe you should try something else.",
    "Is this what commoners say these days..? I'll let you have another try.",
    "Not a valid word. Try again.",
    "Is that supposed to be some kind of spell?",
    "Go to the library if you want to practice spell incantations.",
    "I'm not sure I know what you mean. Try again.",
    "English only, please.",
];

/// Praise by number of guesses used, the last line repeating for long rounds
const WIN_LINES: [&str; 6] = [
    "...wait, huh? You possess mysterious abilities.",
    "Excellent! It seems luck is on your side today.",
    "Well done!",
    "Not bad.",
    "You won!",
    "I was worried I made it too difficult. Good job.",
];

const FREE_PLAY_NOTE: &str = "I've got lots of time today, so play all you want.";
const BONUS_NOTE: &str =
    "Care for an extra round? I've got more time to play since you were so quick.";
const OVERTIME_WIN_NOTE: &str =
    "Would you like to play some more? I've already prepared the next round.";
const OVERTIME_LOSS_NOTE: &str =
    "Care to give it another try? I've got a new word ready for you.";
const OVERTIME_PLAYING_NOTE: &str =
    "I'd like to finish this round soon, so feel free to guess multiple times.";

#[must_use]
pub fn finished(next_game: &str) -> String {
    format!("I'm preparing for the next game. Come back at {next_game}!")
}

/// What happens after a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup {
    /// Free play: a new round starts right away
    FreePlay,
    /// Quick win: a bonus round starts right away
    Bonus,
    /// The round ran past its slot; the next one is already due
    Overtime,
    /// Wait for the next slot, described as text
    NextGame(String),
}

/// Everything needed to render the board after a guess
#[derive(Debug)]
pub struct Board<'a> {
    pub round: &'a Round,
    pub outcome: Outcome,
    pub max_guesses: usize,
    pub overtime: bool,
    /// Shown under a finished round
    pub followup: Option<Followup>,
}

impl Board<'_> {
    /// Render the full reply
    ///
    /// ```text
    /// **Wordle** - 2/6
    /// <row>
    /// <row>
    ///
    /// Excellent! It seems luck is on your side today.
    /// Care for an extra round? ...
    /// ```
    #[must_use]
    pub fn render(&self, glyphs: &LetterGlyphs) -> String {
        let round = self.round;
        let count = round.guesses().len();
        let mut text = match self.outcome {
            Outcome::Lost => format!("**Wordle** - X/{}\n", self.max_guesses),
            _ => format!("**Wordle** - {count}/{}\n", self.max_guesses),
        };

        let rows: Vec<String> = round
            .guesses()
            .iter()
            .map(|guess| glyphs.render(guess, Feedback::calculate(guess, round.solution())))
            .collect();
        text.push_str(&rows.join("\n"));
        text.push_str("\n\n");

        match self.outcome {
            Outcome::Won => {
                let line = WIN_LINES[count.clamp(1, WIN_LINES.len()) - 1];
                text.push_str(line);
                self.push_followup(&mut text, OVERTIME_WIN_NOTE);
            }
            Outcome::Lost => {
                let word = round.solution().text().to_uppercase();
                let _ = write!(text, "You lost. The word was **{word}**.");
                self.push_followup(&mut text, OVERTIME_LOSS_NOTE);
            }
            Outcome::Playing => {
                text.push_str("Available letters:\n");
                text.push_str(&available_letters(round.guesses(), round.solution()));
                if self.overtime {
                    text.push('\n');
                    text.push_str(OVERTIME_PLAYING_NOTE);
                }
            }
        }

        text
    }

    fn push_followup(&self, text: &mut String, overtime_note: &str) {
        let Some(followup) = &self.followup else {
            return;
        };
        text.push('\n');
        match followup {
            Followup::FreePlay => text.push_str(FREE_PLAY_NOTE),
            Followup::Bonus => text.push_str(BONUS_NOTE),
            Followup::Overtime => text.push_str(overtime_note),
            Followup::NextGame(when) => {
                let _ = write!(text, "Next game will be ready at {when}.");
            }
        }
    }
}

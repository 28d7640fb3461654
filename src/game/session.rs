//! Per-channel game state

use super::ports::{ChannelId, PlayerId};
use crate::core::Word;
use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use std::time::Duration;

/// Where a session is in its round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round drawn yet
    Idle,
    /// Unsolved with guesses left
    Active,
    /// Solved, or out of guesses
    Finished,
}

/// Classification of a round after an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    Playing,
}

/// One drawn word and the guesses made against it
#[derive(Debug, Clone)]
pub struct Round {
    solution: Word,
    start: DateTime<Utc>,
    guesses: Vec<Word>,
    participants: FxHashSet<PlayerId>,
}

impl Round {
    #[must_use]
    pub fn new(solution: Word, start: DateTime<Utc>) -> Self {
        Self {
            solution,
            start,
            guesses: Vec::new(),
            participants: FxHashSet::default(),
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Start of the slot this round was drawn in
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }

    #[must_use]
    pub fn has_participated(&self, player: PlayerId) -> bool {
        self.participants.contains(&player)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.guesses.last() == Some(&self.solution)
    }

    #[must_use]
    pub fn is_finished(&self, max_guesses: usize) -> bool {
        self.is_solved() || self.guesses.len() >= max_guesses
    }
}

/// Game state for the one enabled channel of a group
#[derive(Debug, Clone)]
pub struct Session {
    channel: ChannelId,
    round: Option<Round>,
    last_guess_at: Option<DateTime<Utc>>,
}

impl Session {
    #[must_use]
    pub const fn new(channel: ChannelId) -> Self {
        Self {
            channel,
            round: None,
            last_guess_at: None,
        }
    }

    #[must_use]
    pub const fn channel(&self) -> ChannelId {
        self.channel
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn round_start(&self) -> Option<DateTime<Utc>> {
        self.round.as_ref().map(Round::start)
    }

    #[must_use]
    pub const fn last_guess_at(&self) -> Option<DateTime<Utc>> {
        self.last_guess_at
    }

    #[must_use]
    pub fn state(&self, max_guesses: usize) -> RoundState {
        match &self.round {
            None => RoundState::Idle,
            Some(round) if round.is_finished(max_guesses) => RoundState::Finished,
            Some(_) => RoundState::Active,
        }
    }

    /// Whether a submission at `now` falls inside the debounce window
    #[must_use]
    pub fn is_debounced(&self, now: DateTime<Utc>, interval: Duration) -> bool {
        self.last_guess_at.is_some_and(|last| {
            (now - last)
                .to_std()
                .ok()
                .is_none_or(|elapsed| elapsed < interval)
        })
    }

    /// Draw a new round, discarding the previous one
    pub fn start_round(&mut self, solution: Word, start: DateTime<Utc>) -> &Round {
        self.round.insert(Round::new(solution, start))
    }

    /// Forget the current round; the next submission draws a new word
    ///
    /// The debounce timestamp survives a reset.
    pub fn reset(&mut self) {
        self.round = None;
    }

    /// Append an accepted guess and classify the round
    ///
    /// Returns `None` when no round is in progress.
    pub fn record(
        &mut self,
        guess: Word,
        player: PlayerId,
        now: DateTime<Utc>,
        max_guesses: usize,
    ) -> Option<Outcome> {
        let round = self.round.as_mut()?;
        round.guesses.push(guess);
        round.participants.insert(player);
        self.last_guess_at = Some(now);

        let outcome = if round.is_solved() {
            Outcome::Won
        } else if round.guesses.len() >= max_guesses {
            Outcome::Lost
        } else {
            Outcome::Playing
        };
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn new_session_is_idle() {
        let session = Session::new(ChannelId(1));
        assert_eq!(session.state(6), RoundState::Idle);
        assert_eq!(session.round_start(), None);
        assert!(!session.is_debounced(noon(), Duration::from_secs(3)));
    }

    #[test]
    fn win_finishes_round() {
        let mut session = Session::new(ChannelId(1));
        session.start_round(word("spark"), noon());
        assert_eq!(session.state(6), RoundState::Active);

        let outcome = session.record(word("shark"), PlayerId(1), noon(), 6);
        assert_eq!(outcome, Some(Outcome::Playing));
        let outcome = session.record(word("spark"), PlayerId(2), noon(), 6);
        assert_eq!(outcome, Some(Outcome::Won));
        assert_eq!(session.state(6), RoundState::Finished);
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let mut session = Session::new(ChannelId(1));
        session.start_round(word("spark"), noon());
        let words = ["crane", "slate", "robot", "floor", "spoon", "tease"];
        let outcomes: Vec<_> = words
            .iter()
            .enumerate()
            .map(|(i, w)| session.record(word(w), PlayerId(i as u64), noon(), 6))
            .collect();
        assert_eq!(outcomes[4], Some(Outcome::Playing));
        assert_eq!(outcomes[5], Some(Outcome::Lost));
        assert_eq!(session.state(6), RoundState::Finished);
    }

    #[test]
    fn record_tracks_participants_and_guesses() {
        let mut session = Session::new(ChannelId(1));
        session.start_round(word("spark"), noon());
        session.record(word("crane"), PlayerId(9), noon(), 6);

        let round = session.round().unwrap();
        assert!(round.has_participated(PlayerId(9)));
        assert!(!round.has_participated(PlayerId(8)));
        assert!(round.has_guessed(&word("crane")));
        assert_eq!(session.last_guess_at(), Some(noon()));
    }

    #[test]
    fn record_without_round_is_ignored() {
        let mut session = Session::new(ChannelId(1));
        assert_eq!(session.record(word("crane"), PlayerId(1), noon(), 6), None);
        assert_eq!(session.last_guess_at(), None);
    }

    #[test]
    fn debounce_window() {
        let mut session = Session::new(ChannelId(1));
        session.start_round(word("spark"), noon());
        session.record(word("crane"), PlayerId(1), noon(), 6);

        let interval = Duration::from_secs(3);
        assert!(session.is_debounced(noon() + TimeDelta::seconds(2), interval));
        assert!(!session.is_debounced(noon() + TimeDelta::seconds(3), interval));
        // A clock that went backwards still counts as too soon
        assert!(session.is_debounced(noon() - TimeDelta::seconds(1), interval));
    }

    #[test]
    fn reset_keeps_channel_and_debounce() {
        let mut session = Session::new(ChannelId(4));
        session.start_round(word("spark"), noon());
        session.record(word("spark"), PlayerId(1), noon(), 6);
        session.reset();

        assert_eq!(session.channel(), ChannelId(4));
        assert_eq!(session.state(6), RoundState::Idle);
        assert_eq!(session.last_guess_at(), Some(noon()));
    }
}

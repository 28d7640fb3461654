//! Per-group game registry and the guess submission path
//!
//! Each enabled group owns one [`Session`] behind its own mutex. A submission
//! holds that mutex from the debounce check to the ledger update, so two
//! guesses arriving together can never both pass the interval gate.

use super::messages::{self, Board, Followup};
use super::ports::{ChannelId, Clock, GroupId, PlayerId};
use super::session::{Outcome, RoundState, Session};
use super::slot::SlotSchedule;
use crate::config::{ConfigError, GameConfig};
use crate::core::{WORD_LENGTH, Word};
use crate::interpret::{GuessError, Interpreter};
use parking_lot::{Mutex, RwLock};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Join chat command arguments into one guess
///
/// A first argument of exactly five characters is the guess on its own and
/// anything after it is ignored. Otherwise every argument is concatenated,
/// since chat clients put spaces between adjacent symbols.
///
/// # Examples
/// ```
/// use chat_wordle::game::guess_text;
///
/// assert_eq!(guess_text(&["shark", "lol"]), "shark");
/// assert_eq!(guess_text(&["s", "🐑", "r"]), "s🐑r");
/// ```
#[must_use]
pub fn guess_text(args: &[&str]) -> String {
    match args.first() {
        Some(first) if first.chars().count() == WORD_LENGTH => (*first).to_string(),
        _ => args.concat(),
    }
}

/// All running games
pub struct Games {
    config: GameConfig,
    debug_solution: Option<Word>,
    schedule: SlotSchedule,
    interpreter: Interpreter,
    clock: Arc<dyn Clock>,
    rng: Mutex<StdRng>,
    sessions: RwLock<FxHashMap<GroupId, Arc<Mutex<Session>>>>,
}

impl Games {
    /// Create an empty registry
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` if the configuration fails validation.
    pub fn new(
        config: GameConfig,
        interpreter: Interpreter,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let debug_solution = config
            .debug_solution
            .as_deref()
            .map(Word::new)
            .transpose()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        Ok(Self {
            schedule: SlotSchedule::new(config.games_per_day),
            config,
            debug_solution,
            interpreter,
            clock,
            rng: Mutex::new(StdRng::from_os_rng()),
            sessions: RwLock::new(FxHashMap::default()),
        })
    }

    /// Replace the random source, e.g. with a seeded one
    #[must_use]
    pub fn with_rng(self, rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            ..self
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    #[must_use]
    pub const fn schedule(&self) -> &SlotSchedule {
        &self.schedule
    }

    /// Start a fresh session for `group` in `channel`, replacing any other
    pub fn install(&self, group: GroupId, channel: ChannelId) {
        let session = Arc::new(Mutex::new(Session::new(channel)));
        self.sessions.write().insert(group, session);
    }

    /// Drop the session of `group`, returning whether one existed
    pub fn remove(&self, group: GroupId) -> bool {
        self.sessions.write().remove(&group).is_some()
    }

    /// Channel the game runs in for `group`
    #[must_use]
    pub fn channel(&self, group: GroupId) -> Option<ChannelId> {
        let session = self.sessions.read().get(&group).cloned()?;
        let channel = session.lock().channel();
        Some(channel)
    }

    /// Copy of the session of `group`
    #[must_use]
    pub fn snapshot(&self, group: GroupId) -> Option<Session> {
        let session = self.sessions.read().get(&group).cloned()?;
        let copy = session.lock().clone();
        Some(copy)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    fn draw_solution(&self) -> Option<Word> {
        if let Some(word) = &self.debug_solution {
            return Some(word.clone());
        }
        let mut rng = self.rng.lock();
        self.interpreter
            .dictionary()
            .solutions()
            .choose(&mut *rng)
            .cloned()
    }

    fn invalid_response(&self) -> &'static str {
        let mut rng = self.rng.lock();
        messages::INVALID_GUESS_RESPONSES
            .choose(&mut *rng)
            .copied()
            .unwrap_or(messages::INVALID_GUESS_RESPONSES[0])
    }

    /// Handle a guess command
    ///
    /// `None` means the submission was dropped without a reply: the group has
    /// no game, the message came from another channel, or it arrived within
    /// the debounce window of the last accepted guess. Otherwise the reply text
    /// is returned, whether the guess was accepted or not.
    pub fn submit(
        &self,
        group: GroupId,
        channel: ChannelId,
        player: PlayerId,
        args: &[&str],
    ) -> Option<String> {
        let session = self.sessions.read().get(&group).cloned()?;
        let mut session = session.lock();
        if session.channel() != channel {
            return None;
        }

        let now = self.clock.now();
        if session.is_debounced(now, self.config.min_guess_interval()) {
            debug!(%group, %player, "guess dropped inside debounce window");
            return None;
        }

        let max_guesses = self.config.max_guesses;
        let slot = self.schedule.current_start(now);
        let mut overtime = false;
        if session.round_start() != Some(slot) {
            if session.state(max_guesses) == RoundState::Active {
                overtime = true;
            } else {
                let Some(solution) = self.draw_solution() else {
                    warn!(%group, "no solution words to draw from");
                    return None;
                };
                info!(%group, %slot, "new round");
                session.start_round(solution, slot);
            }
        }

        let round = session.round()?;
        if round.is_finished(max_guesses) {
            return Some(messages::finished(&self.schedule.describe_next(now)));
        }
        if round.has_participated(player) && !(overtime || self.config.allows_repeat_players()) {
            return Some(messages::REPEAT_PLAYER.to_string());
        }

        let word = match self.interpreter.parse_guess(&guess_text(args)) {
            Ok(word) => word,
            Err(GuessError::Length) => return Some(messages::LENGTH_ERROR.to_string()),
            Err(GuessError::Invalid) => return Some(self.invalid_response().to_string()),
        };
        if round.has_guessed(&word) {
            return Some(messages::ALREADY_GUESSED.to_string());
        }

        let outcome = session.record(word, player, now, max_guesses)?;
        let round = session.round()?;
        let count = round.guesses().len();

        let starts_new_round = match outcome {
            Outcome::Won => self.config.free_play || count <= self.config.bonus_game_threshold,
            Outcome::Lost => self.config.free_play,
            Outcome::Playing => false,
        };
        let followup = match outcome {
            Outcome::Playing => None,
            _ if self.config.free_play => Some(Followup::FreePlay),
            Outcome::Won if starts_new_round => Some(Followup::Bonus),
            _ if overtime => Some(Followup::Overtime),
            _ => Some(Followup::NextGame(self.schedule.describe_next(now))),
        };
        if outcome != Outcome::Playing {
            info!(%group, ?outcome, guesses = count, solution = %round.solution(), "round over");
        }

        let reply = Board {
            round,
            outcome,
            max_guesses,
            overtime,
            followup,
        }
        .render(self.interpreter.dictionary().glyphs());

        if starts_new_round {
            session.reset();
        }
        Some(reply)
    }
}

impl std::fmt::Debug for Games {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Games")
            .field("config", &self.config)
            .field("sessions", &self.len())
            .finish_non_exhaustive()
    }
}

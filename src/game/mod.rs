//! Per-channel game sessions
//!
//! Rounds are tied to fixed daily slots ([`SlotSchedule`]). Each group has at
//! most one enabled channel with one [`Session`]; [`Games`] owns them all and
//! is the entry point for guesses, while [`GameService`] adds persistence and
//! message delivery for the enable/disable commands.

mod games;
pub mod messages;
mod ports;
mod service;
mod session;
mod slot;
mod store;

pub use games::{Games, guess_text};
pub use messages::{Board, Followup};
pub use ports::{
    ChannelDirectory, ChannelId, ChannelStatus, Clock, GroupId, ManualClock, Outbound, PlayerId,
    SendError, SettingsStore, SystemClock,
};
pub use service::GameService;
pub use session::{Outcome, Round, RoundState, Session};
pub use slot::SlotSchedule;
pub use store::{JsonFileStore, MemoryStore, StoreError};

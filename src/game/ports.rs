//! Collaborators the game talks to
//!
//! Transport, persistence and wall-clock time live outside the game; these
//! traits are the seams.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// A community hosting channels; at most one of its channels runs a game
    GroupId
);
id_type!(
    /// A chat channel
    ChannelId
);
id_type!(
    /// A chat participant
    PlayerId
);

/// Failure to deliver a message
#[derive(Debug, Error)]
pub enum SendError {
    #[error("missing permission to send in channel {0}")]
    Forbidden(ChannelId),
    #[error("channel {0} does not exist")]
    UnknownChannel(ChannelId),
    #[error("send failed: {0}")]
    Transport(String),
}

/// Persisted per-group settings
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Channel the game is enabled in, if any
    async fn load_enabled_channel(
        &self,
        group: GroupId,
    ) -> Result<Option<ChannelId>, super::StoreError>;

    /// Record the enabled channel, or `None` to disable
    async fn save_enabled_channel(
        &self,
        group: GroupId,
        channel: Option<ChannelId>,
    ) -> Result<(), super::StoreError>;
}

/// Outgoing chat messages
#[async_trait]
pub trait Outbound: Send + Sync {
    async fn send(&self, channel: ChannelId, text: &str) -> Result<(), SendError>;
}

/// Whether the game may post in a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelStatus {
    Sendable,
    Missing,
    Forbidden,
}

/// Live view of the channels the bot can see
pub trait ChannelDirectory: Send + Sync {
    fn status(&self, channel: ChannelId) -> ChannelStatus;
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(Mutex::new(start))
    }

    pub fn advance(&self, by: TimeDelta) {
        *self.0.lock() += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.0.lock() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock()
    }
}

//! Command handlers wired to the collaborators
//!
//! Persistence writes happen before the in-memory registry changes, so a
//! failed write leaves the running games untouched. Send failures are logged
//! and never reach session state.

use super::games::Games;
use super::messages;
use super::ports::{
    ChannelDirectory, ChannelId, ChannelStatus, GroupId, Outbound, PlayerId, SettingsStore,
};
use super::store::StoreError;
use std::sync::Arc;
use tracing::{info, warn};

/// The game together with its store, outbound sender and channel view
pub struct GameService {
    games: Games,
    store: Arc<dyn SettingsStore>,
    outbound: Arc<dyn Outbound>,
    directory: Arc<dyn ChannelDirectory>,
}

impl GameService {
    #[must_use]
    pub fn new(
        games: Games,
        store: Arc<dyn SettingsStore>,
        outbound: Arc<dyn Outbound>,
        directory: Arc<dyn ChannelDirectory>,
    ) -> Self {
        Self {
            games,
            store,
            outbound,
            directory,
        }
    }

    #[must_use]
    pub const fn games(&self) -> &Games {
        &self.games
    }

    /// Restore enabled channels at startup
    ///
    /// Groups whose channel vanished or can no longer be posted to are
    /// skipped with a warning, as are groups whose settings fail to load.
    /// Returns how many games were restored.
    pub async fn load(&self, groups: &[GroupId]) -> usize {
        let mut loaded = 0;
        for &group in groups {
            let channel = match self.store.load_enabled_channel(group).await {
                Ok(Some(channel)) => channel,
                Ok(None) => continue,
                Err(e) => {
                    warn!(%group, error = %e, "failed to load settings; game skipped");
                    continue;
                }
            };
            match self.directory.status(channel) {
                ChannelStatus::Sendable => {
                    self.games.install(group, channel);
                    loaded += 1;
                }
                ChannelStatus::Missing => {
                    warn!(%group, %channel, "game channel doesn't exist; game disabled in group");
                }
                ChannelStatus::Forbidden => {
                    warn!(%group, %channel, "missing permissions for game channel; game disabled in group");
                }
            }
        }
        info!(loaded, "games ready");
        loaded
    }

    /// Turn the game on in `channel`
    ///
    /// Returns `Ok(false)` without replying when the channel cannot be posted
    /// to.
    ///
    /// # Errors
    /// Returns the store error if the setting could not be saved; the
    /// registry is left as it was.
    pub async fn enable(&self, group: GroupId, channel: ChannelId) -> Result<bool, StoreError> {
        if self.directory.status(channel) != ChannelStatus::Sendable {
            warn!(%group, %channel, "tried to enable game, but missing permissions in channel");
            return Ok(false);
        }
        self.store.save_enabled_channel(group, Some(channel)).await?;
        self.games.install(group, channel);
        info!(%group, %channel, "game enabled");
        self.send(channel, messages::ENABLED).await;
        Ok(true)
    }

    /// Turn the game off for `group`, replying in `channel`
    ///
    /// # Errors
    /// Returns the store error if the setting could not be saved; the
    /// running game is kept.
    pub async fn disable(&self, group: GroupId, channel: ChannelId) -> Result<(), StoreError> {
        self.store.save_enabled_channel(group, None).await?;
        if self.games.remove(group) {
            info!(%group, "game disabled");
        }
        self.send(channel, messages::DISABLED).await;
        Ok(())
    }

    /// Handle a guess command and post the reply, if any
    ///
    /// Returns the reply that was sent.
    pub async fn guess(
        &self,
        group: GroupId,
        channel: ChannelId,
        player: PlayerId,
        args: &[&str],
    ) -> Option<String> {
        let reply = self.games.submit(group, channel, player, args)?;
        self.send(channel, &reply).await;
        Some(reply)
    }

    async fn send(&self, channel: ChannelId, text: &str) {
        if let Err(e) = self.outbound.send(channel, text).await {
            warn!(%channel, error = %e, "failed to send message");
        }
    }
}

impl std::fmt::Debug for GameService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameService")
            .field("games", &self.games)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{ManualClock, MemoryStore, SendError};
    use crate::interpret::Interpreter;
    use async_trait::async_trait;
    use chrono::{TimeDelta, TimeZone, Utc};
    use parking_lot::Mutex;
    use rustc_hash::FxHashMap;

    /// Records sent messages; channels listed in `forbidden` reject sends
    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<(ChannelId, String)>>,
        forbidden: Vec<ChannelId>,
    }

    #[async_trait]
    impl Outbound for Recorder {
        async fn send(&self, channel: ChannelId, text: &str) -> Result<(), SendError> {
            if self.forbidden.contains(&channel) {
                return Err(SendError::Forbidden(channel));
            }
            self.sent.lock().push((channel, text.to_string()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct Directory(FxHashMap<ChannelId, ChannelStatus>);

    impl ChannelDirectory for Directory {
        fn status(&self, channel: ChannelId) -> ChannelStatus {
            self.0.get(&channel).copied().unwrap_or(ChannelStatus::Missing)
        }
    }

    /// A store whose writes always fail
    struct BrokenStore;

    #[async_trait]
    impl SettingsStore for BrokenStore {
        async fn load_enabled_channel(
            &self,
            _group: GroupId,
        ) -> Result<Option<ChannelId>, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }

        async fn save_enabled_channel(
            &self,
            _group: GroupId,
            _channel: Option<ChannelId>,
        ) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }
    }

    fn directory() -> Arc<Directory> {
        Arc::new(Directory(FxHashMap::from_iter([
            (ChannelId(10), ChannelStatus::Sendable),
            (ChannelId(20), ChannelStatus::Sendable),
            (ChannelId(30), ChannelStatus::Forbidden),
        ])))
    }

    fn service(store: Arc<dyn SettingsStore>) -> (GameService, Arc<Recorder>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        ));
        let config = GameConfig {
            debug_solution: Some("spark".into()),
            ..GameConfig::default()
        };
        let games = Games::new(config, Interpreter::shared(), clock.clone()).unwrap();
        let recorder = Arc::new(Recorder {
            forbidden: vec![ChannelId(20)],
            ..Recorder::default()
        });
        let service = GameService::new(games, store, recorder.clone(), directory());
        (service, recorder, clock)
    }

    #[tokio::test]
    async fn enable_persists_and_replies() {
        let store = Arc::new(MemoryStore::new());
        let (service, recorder, _) = service(store.clone());

        assert!(service.enable(GroupId(1), ChannelId(10)).await.unwrap());
        assert_eq!(
            store.load_enabled_channel(GroupId(1)).await.unwrap(),
            Some(ChannelId(10))
        );
        assert_eq!(service.games().channel(GroupId(1)), Some(ChannelId(10)));
        assert_eq!(
            recorder.sent.lock().as_slice(),
            [(ChannelId(10), messages::ENABLED.to_string())]
        );
    }

    #[tokio::test]
    async fn enable_refuses_unsendable_channels() {
        let store = Arc::new(MemoryStore::new());
        let (service, recorder, _) = service(store.clone());

        assert!(!service.enable(GroupId(1), ChannelId(30)).await.unwrap());
        assert!(!service.enable(GroupId(1), ChannelId(99)).await.unwrap());
        assert_eq!(store.load_enabled_channel(GroupId(1)).await.unwrap(), None);
        assert!(service.games().is_empty());
        assert!(recorder.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn disable_persists_and_drops_session() {
        let store = Arc::new(MemoryStore::new());
        let (service, recorder, _) = service(store.clone());
        service.enable(GroupId(1), ChannelId(10)).await.unwrap();

        service.disable(GroupId(1), ChannelId(10)).await.unwrap();
        assert_eq!(store.load_enabled_channel(GroupId(1)).await.unwrap(), None);
        assert!(service.games().is_empty());
        assert_eq!(
            recorder.sent.lock().last().map(|(_, text)| text.clone()),
            Some(messages::DISABLED.to_string())
        );
    }

    #[tokio::test]
    async fn failed_write_leaves_games_untouched() {
        let (service, recorder, _) = service(Arc::new(BrokenStore));
        service.games().install(GroupId(1), ChannelId(10));

        assert!(service.enable(GroupId(1), ChannelId(20)).await.is_err());
        assert_eq!(service.games().channel(GroupId(1)), Some(ChannelId(10)));

        assert!(service.disable(GroupId(1), ChannelId(10)).await.is_err());
        assert_eq!(service.games().channel(GroupId(1)), Some(ChannelId(10)));
        assert!(recorder.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn load_skips_drifted_channels() {
        let store = Arc::new(MemoryStore::new());
        for (group, channel) in [(1, 10), (2, 30), (3, 99)] {
            store
                .save_enabled_channel(GroupId(group), Some(ChannelId(channel)))
                .await
                .unwrap();
        }
        let (service, _, _) = service(store);

        let loaded = service
            .load(&[GroupId(1), GroupId(2), GroupId(3), GroupId(4)])
            .await;
        assert_eq!(loaded, 1);
        assert_eq!(service.games().channel(GroupId(1)), Some(ChannelId(10)));
        assert_eq!(service.games().channel(GroupId(2)), None);
        assert_eq!(service.games().channel(GroupId(3)), None);
    }

    #[tokio::test]
    async fn load_survives_store_errors() {
        let (service, _, _) = service(Arc::new(BrokenStore));
        assert_eq!(service.load(&[GroupId(1)]).await, 0);
    }

    #[tokio::test]
    async fn guess_sends_reply() {
        let store = Arc::new(MemoryStore::new());
        let (service, recorder, clock) = service(store);
        service.enable(GroupId(1), ChannelId(10)).await.unwrap();

        clock.advance(TimeDelta::seconds(5));
        let reply = service
            .guess(GroupId(1), ChannelId(10), PlayerId(1), &["shark"])
            .await
            .unwrap();
        assert_eq!(recorder.sent.lock().last().unwrap().1, reply);

        // Dropped submissions send nothing
        let before = recorder.sent.lock().len();
        assert!(service
            .guess(GroupId(1), ChannelId(10), PlayerId(2), &["crane"])
            .await
            .is_none());
        assert_eq!(recorder.sent.lock().len(), before);
    }

    #[tokio::test]
    async fn send_failures_do_not_affect_state() {
        let store = Arc::new(MemoryStore::new());
        let (service, recorder, clock) = service(store);
        // Channel 20 is sendable per the directory, but sends fail
        service.enable(GroupId(1), ChannelId(20)).await.unwrap();

        clock.advance(TimeDelta::seconds(5));
        let reply = service
            .guess(GroupId(1), ChannelId(20), PlayerId(1), &["shark"])
            .await;
        assert!(reply.is_some());
        assert!(recorder.sent.lock().is_empty());

        let session = service.games().snapshot(GroupId(1)).unwrap();
        assert_eq!(session.round().unwrap().guesses().len(), 1);
    }
}

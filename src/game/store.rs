//! Settings stores
//!
//! [`MemoryStore`] keeps everything in process; [`JsonFileStore`] writes a
//! small JSON object mapping group ids to channel ids.

use super::ports::{ChannelId, GroupId, SettingsStore};
use async_trait::async_trait;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Failure to read or write settings
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings store unavailable: {0}")]
    Unavailable(String),
}

/// In-process settings, lost on exit
#[derive(Debug, Default)]
pub struct MemoryStore {
    channels: Mutex<FxHashMap<GroupId, ChannelId>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn load_enabled_channel(&self, group: GroupId) -> Result<Option<ChannelId>, StoreError> {
        Ok(self.channels.lock().get(&group).copied())
    }

    async fn save_enabled_channel(
        &self,
        group: GroupId,
        channel: Option<ChannelId>,
    ) -> Result<(), StoreError> {
        let mut channels = self.channels.lock();
        match channel {
            Some(channel) => channels.insert(group, channel),
            None => channels.remove(&group),
        };
        Ok(())
    }
}

type ChannelMap = BTreeMap<GroupId, ChannelId>;

/// Settings kept in a JSON file
///
/// Every save rewrites the whole file; writes are serialized through an
/// async lock so concurrent saves cannot interleave.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    async fn read_all(&self) -> Result<ChannelMap, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(ChannelMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ChannelMap::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

#[async_trait]
impl SettingsStore for JsonFileStore {
    async fn load_enabled_channel(&self, group: GroupId) -> Result<Option<ChannelId>, StoreError> {
        Ok(self.read_all().await?.get(&group).copied())
    }

    async fn save_enabled_channel(
        &self,
        group: GroupId,
        channel: Option<ChannelId>,
    ) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut channels = self.read_all().await?;
        match channel {
            Some(channel) => channels.insert(group, channel),
            None => channels.remove(&group),
        };
        let json = serde_json::to_string_pretty(&channels)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), %group, "saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load_enabled_channel(GroupId(1)).await.unwrap(), None);

        store
            .save_enabled_channel(GroupId(1), Some(ChannelId(10)))
            .await
            .unwrap();
        assert_eq!(
            store.load_enabled_channel(GroupId(1)).await.unwrap(),
            Some(ChannelId(10))
        );

        store.save_enabled_channel(GroupId(1), None).await.unwrap();
        assert_eq!(store.load_enabled_channel(GroupId(1)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn json_store_persists_between_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load_enabled_channel(GroupId(7)).await.unwrap(), None);
        store
            .save_enabled_channel(GroupId(7), Some(ChannelId(70)))
            .await
            .unwrap();
        store
            .save_enabled_channel(GroupId(8), Some(ChannelId(80)))
            .await
            .unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.load_enabled_channel(GroupId(7)).await.unwrap(),
            Some(ChannelId(70))
        );

        reopened.save_enabled_channel(GroupId(7), None).await.unwrap();
        assert_eq!(store.load_enabled_channel(GroupId(7)).await.unwrap(), None);
        assert_eq!(
            store.load_enabled_channel(GroupId(8)).await.unwrap(),
            Some(ChannelId(80))
        );
    }

    #[tokio::test]
    async fn json_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load_enabled_channel(GroupId(1)).await,
            Err(StoreError::Json(_))
        ));
    }
}

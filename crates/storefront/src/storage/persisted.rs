//! Snapshot-on-write wrapper around a piece of state.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{KeyValueStorage, StorageError};

/// Version written into every snapshot envelope.
///
/// Snapshots are not migrated: a change to a persisted shape makes older
/// snapshots unreadable, and they are discarded at load time.
pub const SNAPSHOT_VERSION: u32 = 0;

/// On-disk envelope: `{"state": ..., "version": 0}`.
#[derive(Serialize)]
struct SnapshotRef<'a, S> {
    state: &'a S,
    version: u32,
}

#[derive(Deserialize)]
struct Snapshot<S> {
    state: S,
    #[allow(dead_code)]
    #[serde(default)]
    version: u32,
}

/// State of type `S` that is written to storage after every mutation.
///
/// The state is read once in [`Persisted::load`]. Afterwards the only way to
/// change it is [`Persisted::update`], which applies the mutation and then
/// flushes the full snapshot under the fixed key.
pub struct Persisted<S> {
    storage: Arc<dyn KeyValueStorage>,
    key: &'static str,
    state: S,
}

impl<S> std::fmt::Debug for Persisted<S>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.key)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<S> Persisted<S>
where
    S: Serialize + DeserializeOwned + Default + Clone,
{
    /// Rehydrate state from `storage`, or start from `S::default()`.
    ///
    /// A snapshot that no longer parses is logged and replaced by the
    /// default state rather than failing startup.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backend cannot be read.
    pub fn load(storage: Arc<dyn KeyValueStorage>, key: &'static str) -> Result<Self, StorageError> {
        let state = match storage.get_item(key)? {
            Some(raw) => match serde_json::from_str::<Snapshot<S>>(&raw) {
                Ok(snapshot) => {
                    tracing::debug!(key, "Rehydrated snapshot");
                    snapshot.state
                }
                Err(e) => {
                    tracing::warn!(key, error = %e, "Discarding unreadable snapshot");
                    S::default()
                }
            },
            None => S::default(),
        };

        Ok(Self {
            storage,
            key,
            state,
        })
    }

    /// Current state.
    #[must_use]
    pub const fn get(&self) -> &S {
        &self.state
    }

    /// Storage key this state is written under.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Apply `mutate` to a copy of the state, flush it, then commit it.
    ///
    /// If the flush fails the in-memory state is left as it was, so memory
    /// never runs ahead of storage.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be encoded or written.
    pub fn update<R>(&mut self, mutate: impl FnOnce(&mut S) -> R) -> Result<R, StorageError> {
        let mut next = self.state.clone();
        let result = mutate(&mut next);
        self.flush(&next)?;
        self.state = next;
        Ok(result)
    }

    fn flush(&self, state: &S) -> Result<(), StorageError> {
        let json = serde_json::to_string(&SnapshotRef {
            state,
            version: SNAPSHOT_VERSION,
        })?;
        self.storage.set_item(self.key, &json)
    }
}

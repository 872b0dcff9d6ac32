// Snapshot persistence
//
// The persisted subset of the state is written as one JSON document under a
// fixed key, wrapped in a versioned envelope. Loading is fail-open: anything
// unreadable means "no prior state".

use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use brightsteps_common::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::store::{AppState, PersistedState};

pub const SNAPSHOT_VERSION: u32 = 0;

/// Key-value storage for serialized snapshots.
pub trait SnapshotStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-process store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock().remove(key);
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    state: PersistedState,
    version: u32,
}

pub struct Persistence<S> {
    store: S,
    key: String,
}

impl<S: SnapshotStore> Persistence<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Hydrates the state from the snapshot, or returns defaults when there
    /// is no usable snapshot.
    pub fn load(&self) -> AppState {
        match self.try_load() {
            Ok(Some(persisted)) => {
                info!("Loaded snapshot '{}'", self.key);
                AppState::from_persisted(persisted)
            }
            Ok(None) => {
                debug!("No snapshot '{}', starting fresh", self.key);
                AppState::default()
            }
            Err(e) => {
                warn!("Discarding unreadable snapshot '{}': {}", self.key, e);
                AppState::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<PersistedState>> {
        let Some(raw) = self.store.load(&self.key)? else {
            return Ok(None);
        };
        let envelope: Envelope = serde_json::from_str(&raw)?;
        if envelope.version != SNAPSHOT_VERSION {
            warn!("Snapshot '{}' has unsupported version {}", self.key, envelope.version);
            return Ok(None);
        }
        Ok(Some(envelope.state))
    }

    pub fn save(&self, state: &AppState) -> Result<()> {
        let envelope = Envelope { state: state.to_persisted(), version: SNAPSHOT_VERSION };
        let raw = serde_json::to_string(&envelope)?;
        self.store.save(&self.key, &raw)?;
        debug!("Saved snapshot '{}' ({} bytes)", self.key, raw.len());
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.key)
    }
}

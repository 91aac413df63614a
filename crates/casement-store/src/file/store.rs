//! The [`FileStore`] handle.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use casement_common::{ContextId, StoreError};
use notify::RecommendedWatcher;
use tracing::{debug, info, warn};

use crate::backend::{check_key, Store};
use crate::events::{ChangeBus, StorageSubscription};

use super::watcher::{spawn_watcher, SeenValues};

/// A store whose keys are files in a shared directory.
///
/// Own writes are recorded as already seen before they hit the disk, so the
/// watcher never reports them back to this handle.
pub struct FileStore {
    dir: PathBuf,
    context: ContextId,
    seen: SeenValues,
    bus: ChangeBus,
    _watcher: Mutex<RecommendedWatcher>,
}

impl FileStore {
    /// Open (creating if needed) the shared directory and start watching it.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let seen: SeenValues = Arc::new(Mutex::new(HashMap::new()));
        let bus = ChangeBus::default();
        let watcher = spawn_watcher(&dir, Arc::clone(&seen), bus.clone())?;

        let context = ContextId::new();
        info!(dir = %dir.display(), ctx = context.short(), "opened file store");

        Ok(Self {
            dir,
            context,
            seen,
            bus,
            _watcher: Mutex::new(watcher),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn mark_seen(&self, key: &str, value: Option<String>) {
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        seen.insert(key.to_string(), value);
    }
}

impl Store for FileStore {
    fn context(&self) -> &ContextId {
        &self.context
    }

    fn get_item(&self, key: &str) -> Option<String> {
        if check_key(key).is_err() {
            return None;
        }
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, "failed to read store key: {e}");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        check_key(key)?;
        self.mark_seen(key, Some(value.to_string()));

        // Write beside the target, then rename over it, so readers never
        // observe a half-written value. Dot-prefixed names are ignored by
        // the watcher.
        let target = self.key_path(key);
        let tmp = self
            .dir
            .join(format!(".{key}.{}.tmp", self.context.short()));
        fs::write(&tmp, value).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &target).map_err(|source| StoreError::Io {
            path: target.clone(),
            source,
        })?;

        debug!(key, bytes = value.len(), "wrote store key");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        check_key(key)?;
        self.mark_seen(key, None);

        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "removed store key");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn subscribe(&self) -> StorageSubscription {
        // Foreign events carry no origin; self-suppression happens in the watcher.
        self.bus.subscribe(Some(self.context.clone()))
    }
}

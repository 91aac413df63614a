//! Directory watcher feeding the [`FileStore`](super::FileStore) change bus.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use casement_common::StoreError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, error, warn};

use crate::events::{ChangeBus, StorageEvent};

/// Last value this handle wrote or was told about, per key.
pub(super) type SeenValues = Arc<Mutex<HashMap<String, Option<String>>>>;

/// Start watching `dir`, publishing key changes that differ from `seen`.
pub(super) fn spawn_watcher(
    dir: &Path,
    seen: SeenValues,
    bus: ChangeBus,
) -> Result<RecommendedWatcher, StoreError> {
    let mut watcher = RecommendedWatcher::new(
        move |result: Result<Event, notify::Error>| match result {
            Ok(event) => handle_fs_event(&event, &seen, &bus),
            Err(e) => error!("store watcher error: {e}"),
        },
        notify::Config::default(),
    )
    .map_err(|e| StoreError::WatchError(format!("failed to create watcher: {e}")))?;

    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .map_err(|e| StoreError::WatchError(format!("failed to watch {}: {e}", dir.display())))?;

    Ok(watcher)
}

fn handle_fs_event(event: &Event, seen: &SeenValues, bus: &ChangeBus) {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return;
    }

    for path in &event.paths {
        let Some(key) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if key.starts_with('.') {
            continue;
        }

        let current = match fs::read_to_string(path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, "failed to read changed key: {e}");
                continue;
            }
        };

        if let Some(change) = record_change(seen, key, current) {
            debug!(key, "store key changed on disk");
            bus.publish(change);
        }
    }
}

/// Update `seen` and return an event when `current` is new to this handle.
pub(super) fn record_change(
    seen: &SeenValues,
    key: &str,
    current: Option<String>,
) -> Option<StorageEvent> {
    let mut seen = seen.lock().unwrap_or_else(PoisonError::into_inner);
    if seen.get(key) == Some(&current) {
        return None;
    }
    seen.insert(key.to_string(), current.clone());
    Some(StorageEvent {
        key: key.to_string(),
        new_value: current,
        origin: None,
    })
}

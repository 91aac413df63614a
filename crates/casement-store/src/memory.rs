//! In-process store shared by any number of simulated windows.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use casement_common::{ContextId, StoreError};
use tracing::trace;

use crate::backend::{check_key, Store};
use crate::events::{ChangeBus, StorageEvent, StorageSubscription};

#[derive(Debug, Default)]
struct HubInner {
    items: Mutex<HashMap<String, String>>,
    bus: ChangeBus,
}

/// The shared medium. Each window obtains its own handle with [`MemoryHub::connect`].
#[derive(Debug, Clone, Default)]
pub struct MemoryHub {
    inner: Arc<HubInner>,
}

impl MemoryHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new handle writing as a fresh context.
    pub fn connect(&self) -> MemoryStore {
        MemoryStore {
            hub: Arc::clone(&self.inner),
            context: ContextId::new(),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        lock(&self.inner.items).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One context's handle onto a [`MemoryHub`].
#[derive(Debug)]
pub struct MemoryStore {
    hub: Arc<HubInner>,
    context: ContextId,
}

fn lock(items: &Mutex<HashMap<String, String>>) -> MutexGuard<'_, HashMap<String, String>> {
    items.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryStore {
    fn publish(&self, key: &str, new_value: Option<String>) {
        let reached = self.hub.bus.publish(StorageEvent {
            key: key.to_string(),
            new_value,
            origin: Some(self.context.clone()),
        });
        trace!(key, reached, ctx = self.context.short(), "published change");
    }
}

impl Store for MemoryStore {
    fn context(&self) -> &ContextId {
        &self.context
    }

    fn get_item(&self, key: &str) -> Option<String> {
        lock(&self.hub.items).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        check_key(key)?;
        {
            let mut items = lock(&self.hub.items);
            // Unchanged values do not notify.
            if items.get(key).map(String::as_str) == Some(value) {
                return Ok(());
            }
            items.insert(key.to_string(), value.to_string());
        }
        self.publish(key, Some(value.to_string()));
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        check_key(key)?;
        let removed = lock(&self.hub.items).remove(key);
        if removed.is_some() {
            self.publish(key, None);
        }
        Ok(())
    }

    fn subscribe(&self) -> StorageSubscription {
        self.hub.bus.subscribe(Some(self.context.clone()))
    }
}

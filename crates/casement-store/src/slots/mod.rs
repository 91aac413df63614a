//! Typed access to the three persisted slots.
//!
//! Reads never fail: absent or malformed values degrade to the slot's
//! default (counter `0`, empty registry, no shared state).

mod codec;


pub use codec::{
    decode_counter, decode_registry, decode_shared_state, encode_counter, encode_registry,
    encode_shared_state,
};

use casement_common::{BrowserEntity, BrowserId, SharedState, SlotKind, SlotValue, StoreError};
use casement_config::{SlotKeys, StoreConfig};
use tracing::debug;

use crate::backend::Store;
use crate::events::StorageSubscription;

/// The counter, registry and shared-state slots over a raw [`Store`].
pub struct SlotStore<S> {
    store: S,
    keys: SlotKeys,
    skip_empty_registry: bool,
}

impl<S: Store> SlotStore<S> {
    /// Default key names; empty registries are written.
    pub fn new(store: S) -> Self {
        Self {
            store,
            keys: SlotKeys::default(),
            skip_empty_registry: false,
        }
    }

    pub fn from_config(store: S, config: &StoreConfig) -> Self {
        Self {
            store,
            keys: config.keys.clone(),
            skip_empty_registry: config.skip_empty_registry,
        }
    }

    pub fn with_keys(mut self, keys: SlotKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn skip_empty_registry(mut self, skip: bool) -> Self {
        self.skip_empty_registry = skip;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keys(&self) -> &SlotKeys {
        &self.keys
    }

    pub fn key(&self, kind: SlotKind) -> &str {
        match kind {
            SlotKind::Counter => &self.keys.counter,
            SlotKind::Registry => &self.keys.registry,
            SlotKind::SharedState => &self.keys.shared_state,
        }
    }

    /// Which slot, if any, a raw store key names.
    pub fn slot_for_key(&self, key: &str) -> Option<SlotKind> {
        SlotKind::ALL.into_iter().find(|kind| self.key(*kind) == key)
    }

    pub fn read_counter(&self) -> BrowserId {
        decode_counter(self.store.get_item(&self.keys.counter).as_deref())
    }

    pub fn read_registry(&self) -> Vec<BrowserEntity> {
        decode_registry(self.store.get_item(&self.keys.registry).as_deref())
    }

    pub fn read_shared_state(&self) -> Option<SharedState> {
        decode_shared_state(self.store.get_item(&self.keys.shared_state).as_deref())
    }

    pub fn read(&self, kind: SlotKind) -> SlotValue {
        match kind {
            SlotKind::Counter => SlotValue::Counter(self.read_counter()),
            SlotKind::Registry => SlotValue::Registry(self.read_registry()),
            SlotKind::SharedState => SlotValue::SharedState(self.read_shared_state()),
        }
    }

    pub fn write_counter(&self, id: BrowserId) -> Result<(), StoreError> {
        self.store.set_item(&self.keys.counter, &encode_counter(id))
    }

    /// Persist the whole registry. Returns `false` when an empty registry
    /// was skipped.
    pub fn write_registry(&self, registry: &[BrowserEntity]) -> Result<bool, StoreError> {
        if registry.is_empty() && self.skip_empty_registry {
            debug!("skipping write of empty registry");
            return Ok(false);
        }
        self.store
            .set_item(&self.keys.registry, &encode_registry(registry)?)?;
        Ok(true)
    }

    /// Full overwrite of the shared 3D state.
    pub fn write_shared_state(&self, state: &SharedState) -> Result<(), StoreError> {
        self.store
            .set_item(&self.keys.shared_state, &encode_shared_state(state)?)
    }

    /// Remove all three slots.
    pub fn clear(&self) -> Result<(), StoreError> {
        for kind in SlotKind::ALL {
            self.store.remove_item(self.key(kind))?;
        }
        Ok(())
    }

    pub fn subscribe(&self) -> StorageSubscription {
        self.store.subscribe()
    }
}

//! The per-window session.
//!
//! `Unregistered -> Registered` via [`WindowSession::add_browser`], a
//! self-loop via [`WindowSession::update`], and back to `Unregistered` via
//! [`WindowSession::remove_browser`].

mod bridge;
mod commander;
mod lifecycle;


use casement_common::{BrowserEntity, BrowserId, SlotKind, SlotValue, StoreError};
use casement_config::StoreConfig;
use casement_store::{SlotStore, StorageSubscription, Store};

use crate::geometry::GeometrySource;

/// One window's view of the shared registry.
///
/// The in-memory registry and counter are a cache of the store, refreshed
/// on every protocol step and whenever another window changes the registry.
pub struct WindowSession<S, G> {
    slots: SlotStore<S>,
    geometry: G,
    current: Option<BrowserEntity>,
    windows: Vec<BrowserEntity>,
    last_id: BrowserId,
    subscription: Option<StorageSubscription>,
}

impl<S: Store, G: GeometrySource> WindowSession<S, G> {
    /// Session with the default slot keys.
    pub fn new(store: S, geometry: G) -> Self {
        Self::with_slots(SlotStore::new(store), geometry)
    }

    pub fn from_config(store: S, geometry: G, config: &StoreConfig) -> Self {
        Self::with_slots(SlotStore::from_config(store, config), geometry)
    }

    pub fn with_slots(slots: SlotStore<S>, geometry: G) -> Self {
        Self {
            slots,
            geometry,
            current: None,
            windows: Vec::new(),
            last_id: BrowserId(0),
            subscription: None,
        }
    }

    /// This window's registry entry, while registered.
    pub fn current(&self) -> Option<&BrowserEntity> {
        self.current.as_ref()
    }

    /// Latest known registry snapshot.
    pub fn windows(&self) -> &[BrowserEntity] {
        &self.windows
    }

    pub fn last_id(&self) -> BrowserId {
        self.last_id
    }

    pub fn is_registered(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn slots(&self) -> &SlotStore<S> {
        &self.slots
    }

    pub fn geometry_source(&self) -> &G {
        &self.geometry
    }

    /// Raw decoded read of one slot, bypassing the local cache.
    pub fn get_storage(&self, kind: SlotKind) -> SlotValue {
        self.slots.read(kind)
    }

    /// Remove all three slots from the store.
    ///
    /// Local state is left untouched; other windows see the removals.
    pub fn dispose(&self) -> Result<(), StoreError> {
        tracing::info!("disposing shared store slots");
        self.slots.clear()
    }
}

//! Registration, removal and in-place geometry updates.

use casement_common::{BrowserEntity, StoreError};
use casement_store::Store;
use tracing::{debug, info, warn};

use crate::geometry::GeometrySource;
use crate::identity::{evict_same_browser, same_browser};

use super::WindowSession;

impl<S: Store, G: GeometrySource> WindowSession<S, G> {
    /// Register this window.
    ///
    /// Reads the counter and registry fresh, evicts every entry at this
    /// window's geometry, appends a new entry with the next id, persists
    /// both, elects a commander when needed and starts listening for
    /// registry changes from other windows.
    pub fn add_browser(&mut self) -> Result<BrowserEntity, StoreError> {
        if let Some(previous) = self.current {
            warn!(id = %previous.id, "window already registered, registering again");
        }

        self.last_id = self.slots.read_counter();
        self.windows = self.slots.read_registry();

        let fingerprint = self.geometry.geometry();
        let entity = BrowserEntity::new(self.last_id.next(), fingerprint);

        for stale in evict_same_browser(&mut self.windows, fingerprint) {
            debug!(id = %stale.id, geometry = %fingerprint, "evicted stale entry");
        }
        self.windows.push(entity);
        self.current = Some(entity);
        self.last_id = entity.id;

        self.slots.write_counter(entity.id)?;
        self.slots.write_registry(&self.windows)?;

        self.elect_commander(&entity)?;

        self.subscription = Some(self.slots.subscribe());
        info!(
            id = %entity.id,
            geometry = %fingerprint,
            windows = self.windows.len(),
            "window registered"
        );
        Ok(entity)
    }

    /// Unregister this window and stop listening for changes.
    ///
    /// A no-op while unregistered, so calling it twice is harmless.
    pub fn remove_browser(&mut self) -> Result<(), StoreError> {
        let Some(current) = self.current else {
            debug!("remove requested while unregistered");
            self.subscription = None;
            return Ok(());
        };

        self.windows = self.slots.read_registry();
        self.windows.retain(|w| w.id != current.id);
        self.slots.write_registry(&self.windows)?;

        self.subscription = None;
        self.current = None;
        info!(id = %current.id, windows = self.windows.len(), "window unregistered");
        Ok(())
    }

    /// Patch this window's entry after a move or resize.
    ///
    /// Returns `true` when the stored entry was updated. Nothing happens when
    /// unregistered, when the geometry is unchanged, or when the entry is no
    /// longer in the registry.
    pub fn update(&mut self) -> Result<bool, StoreError> {
        let Some(current) = self.current else {
            return Ok(false);
        };

        let fingerprint = self.geometry.geometry();
        if same_browser(fingerprint, &current) {
            return Ok(false);
        }

        self.last_id = self.slots.read_counter();
        self.windows = self.slots.read_registry();

        let Some(entry) = self.windows.iter_mut().find(|w| w.id == current.id) else {
            debug!(id = %current.id, "own entry missing from registry, not updating");
            return Ok(false);
        };
        *entry = entry.with_geometry(fingerprint);
        self.current = Some(*entry);

        self.slots.write_registry(&self.windows)?;
        debug!(id = %current.id, geometry = %fingerprint, "window geometry updated");
        Ok(true)
    }
}

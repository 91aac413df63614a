//! Applies registry changes made by other windows.
//!
//! The store never notifies the writer, so every protocol step updates the
//! local state itself; only foreign writes arrive here.

use casement_common::SlotKind;
use casement_store::{StorageEvent, StorageSubscription, Store};
use tracing::{debug, trace};

use crate::geometry::GeometrySource;

use super::WindowSession;

impl<S: Store, G: GeometrySource> WindowSession<S, G> {
    /// Apply one change notification. Returns `true` when the local
    /// registry view was refreshed.
    pub fn handle_event(&mut self, event: &StorageEvent) -> bool {
        match self.slots.slot_for_key(&event.key) {
            Some(SlotKind::Registry) => {
                self.windows = self.slots.read_registry();
                debug!(windows = self.windows.len(), "registry changed elsewhere");
                true
            }
            _ => {
                trace!(key = %event.key, "ignoring change");
                false
            }
        }
    }

    /// Drain pending notifications without waiting.
    pub fn poll_changes(&mut self) -> bool {
        let mut changed = false;
        while let Some(event) = self
            .subscription
            .as_mut()
            .and_then(StorageSubscription::try_next)
        {
            changed |= self.handle_event(&event);
        }
        changed
    }

    /// Wait for the next registry change from another window and apply it.
    ///
    /// Returns `None` immediately when not subscribed, or once the store
    /// has shut down.
    pub async fn next_change(&mut self) -> Option<StorageEvent> {
        loop {
            let event = self.subscription.as_mut()?.next().await?;
            if self.handle_event(&event) {
                return Some(event);
            }
        }
    }
}

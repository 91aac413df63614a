//! Commander election and the shared 3D state.

use casement_common::{BrowserEntity, BrowserId, SharedState, StoreError};
use casement_store::Store;
use tracing::info;

use crate::geometry::GeometrySource;

use super::WindowSession;

impl<S: Store, G: GeometrySource> WindowSession<S, G> {
    /// Runs after a registration has been persisted.
    ///
    /// With no shared state yet, the new window commands. Otherwise, if it
    /// is now the only window, the sole entry takes over. Removals never
    /// trigger an election.
    pub(super) fn elect_commander(
        &self,
        entity: &BrowserEntity,
    ) -> Result<Option<BrowserId>, StoreError> {
        let commander = match self.slots.read_shared_state() {
            None => entity.id,
            Some(_) if self.windows.len() == 1 => self.windows[0].id,
            Some(_) => return Ok(None),
        };

        self.save_3d_infos(&SharedState::commanded_by(commander))?;
        info!(id = %commander, "commander elected");
        Ok(Some(commander))
    }

    /// Overwrite the shared 3D state as a whole.
    pub fn save_3d_infos(&self, state: &SharedState) -> Result<(), StoreError> {
        self.slots.write_shared_state(state)
    }

    /// Current shared 3D state, read from the store.
    pub fn shared_state(&self) -> Option<SharedState> {
        self.slots.read_shared_state()
    }

    /// The commanding window, if the shared state names one that is in the
    /// local registry view.
    pub fn commander(&self) -> Option<BrowserEntity> {
        let id = self.shared_state()?.command?;
        self.windows.iter().find(|w| w.id == id).copied()
    }

    /// Whether this window is the current commander.
    pub fn is_commander(&self) -> bool {
        match (self.current, self.shared_state().and_then(|s| s.command)) {
            (Some(current), Some(id)) => current.id == id,
            _ => false,
        }
    }
}

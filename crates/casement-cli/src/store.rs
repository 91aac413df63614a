use std::sync::Arc;

use casement_common::StoreError;
use casement_config::{CasementConfig, StoreBackend};
use casement_store::{FileStore, MemoryHub, Store};
use tracing::warn;

/// Open the configured backend as a shareable handle.
pub fn open_store(config: &CasementConfig) -> Result<Arc<dyn Store>, StoreError> {
    match config.store.backend {
        StoreBackend::File => Ok(Arc::new(FileStore::open(config.store_dir())?)),
        StoreBackend::Memory => {
            warn!("memory backend is private to this process; other windows will not see it");
            Ok(Arc::new(MemoryHub::new().connect()))
        }
    }
}

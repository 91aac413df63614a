//! One-shot commands that read or reset the shared store.

use std::sync::Arc;

use casement_common::{Result, SharedState};
use casement_config::CasementConfig;
use casement_store::{SlotStore, Store};
use casement_sync::{FixedGeometry, WindowSession};
use tracing::info;

use crate::render;

fn slots(store: Arc<dyn Store>, config: &CasementConfig) -> SlotStore<Arc<dyn Store>> {
    SlotStore::from_config(store, &config.store)
}

pub fn list(store: Arc<dyn Store>, config: &CasementConfig) -> Result<()> {
    let slots = slots(store, config);
    let state = slots.read_shared_state();
    let snapshot = render::snapshot_json(
        slots.read_counter(),
        &slots.read_registry(),
        state.as_ref(),
    );
    let text = serde_json::to_string_pretty(&snapshot)
        .map_err(casement_common::StoreError::from)?;
    println!("{text}");
    Ok(())
}

pub fn save_state(store: Arc<dyn Store>, config: &CasementConfig, state: SharedState) -> Result<()> {
    slots(store, config).write_shared_state(&state)?;
    println!("{}", render::state_line(Some(&state)));
    Ok(())
}

pub fn reset(store: Arc<dyn Store>, config: &CasementConfig) -> Result<()> {
    WindowSession::with_slots(slots(store, config), FixedGeometry::default()).dispose()?;
    info!("shared store reset");
    Ok(())
}

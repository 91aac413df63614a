use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BrowserEntity, BrowserId, SharedState};

/// The three persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotKind {
    Counter,
    Registry,
    SharedState,
}

impl SlotKind {
    pub const ALL: [SlotKind; 3] = [SlotKind::Counter, SlotKind::Registry, SlotKind::SharedState];
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlotKind::Counter => "counter",
            SlotKind::Registry => "registry",
            SlotKind::SharedState => "shared-state",
        };
        f.write_str(name)
    }
}

/// A decoded slot, as returned by raw slot reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "slot", content = "value", rename_all = "kebab-case")]
pub enum SlotValue {
    Counter(BrowserId),
    Registry(Vec<BrowserEntity>),
    SharedState(Option<SharedState>),
}

impl SlotValue {
    pub fn kind(&self) -> SlotKind {
        match self {
            SlotValue::Counter(_) => SlotKind::Counter,
            SlotValue::Registry(_) => SlotKind::Registry,
            SlotValue::SharedState(_) => SlotKind::SharedState,
        }
    }

    /// True when the value equals the slot's decode default.
    pub fn is_empty(&self) -> bool {
        match self {
            SlotValue::Counter(id) => id.0 == 0,
            SlotValue::Registry(list) => list.is_empty(),
            SlotValue::SharedState(state) => state.is_none(),
        }
    }
}

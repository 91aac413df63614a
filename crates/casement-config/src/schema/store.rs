//! Shared store configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which key-value backend windows share.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// A directory of key files, watched for changes by every process.
    #[default]
    File,
    /// In-process only; useful for simulations.
    Memory,
}

/// Names of the three persisted slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlotKeys {
    pub counter: String,
    pub registry: String,
    pub shared_state: String,
}

impl Default for SlotKeys {
    fn default() -> Self {
        Self {
            counter: "lastID".into(),
            registry: "browsers".into(),
            shared_state: "infos3d".into(),
        }
    }
}

impl SlotKeys {
    pub fn as_array(&self) -> [&str; 3] {
        [
            self.counter.as_str(),
            self.registry.as_str(),
            self.shared_state.as_str(),
        ]
    }
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Shared directory for the file backend.
    pub dir: Option<PathBuf>,
    /// Never persist an empty registry over an existing one. The last
    /// window's entry then outlives it.
    pub skip_empty_registry: bool,
    pub keys: SlotKeys,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File,
            dir: None,
            skip_empty_registry: false,
            keys: SlotKeys::default(),
        }
    }
}

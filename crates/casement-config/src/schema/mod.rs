//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod store;
mod watch;

pub use logging::*;
pub use store::*;
pub use watch::*;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CasementConfig {
    pub store: StoreConfig,
    pub watch: WatchConfig,
    pub logging: LoggingConfig,
}

impl CasementConfig {
    /// Effective directory for the file backend.
    ///
    /// Falls back to `<data dir>/casement/store`, then to a directory under
    /// the system temp dir when the platform has no data dir.
    pub fn store_dir(&self) -> PathBuf {
        if let Some(dir) = &self.store.dir {
            return dir.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("casement")
            .join("store")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_sections() {
        let config = CasementConfig::default();
        assert_eq!(config.store.backend, StoreBackend::File);
        assert!(config.store.dir.is_none());
        assert!(!config.store.skip_empty_registry);
        assert_eq!(config.watch.poll_interval_ms, 250);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn store_dir_prefers_explicit_dir() {
        let mut config = CasementConfig::default();
        config.store.dir = Some(PathBuf::from("/srv/casement"));
        assert_eq!(config.store_dir(), PathBuf::from("/srv/casement"));
    }

    #[test]
    fn store_dir_default_ends_with_store() {
        let config = CasementConfig::default();
        let dir = config.store_dir();
        assert!(dir.ends_with("casement/store"));
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: CasementConfig = toml::from_str("").unwrap();
        assert_eq!(config.store.keys, SlotKeys::default());
        assert_eq!(config.watch.poll_interval_ms, 250);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let toml_str = r#"
[store]
backend = "memory"

[store.keys]
registry = "windows"
"#;
        let config: CasementConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.keys.registry, "windows");
        assert_eq!(config.store.keys.counter, "lastID");
        assert_eq!(config.store.keys.shared_state, "infos3d");
        assert!(!config.store.skip_empty_registry);
        assert_eq!(config.logging.level, "info");
    }
}

//! Casement configuration.
//!
//! TOML-based configuration for the shared window store: which backend to
//! use, where the shared directory lives, the slot key names, the geometry
//! poll period and the log level. Every section uses serde defaults so
//! partial files work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use casement_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    CasementConfig, LoggingConfig, SlotKeys, StoreBackend, StoreConfig, WatchConfig,
    CONFIG_SCHEMA_VERSION,
};

use casement_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file when none exists.
pub fn load_config() -> Result<CasementConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &CasementConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = CasementConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"store\""));
        assert!(json.contains("\"keys\""));
        assert!(json.contains("\"watch\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_to_json_contains_default_keys() {
        let json = config_to_json(&CasementConfig::default());
        assert!(json.contains("\"lastID\""));
        assert!(json.contains("\"browsers\""));
        assert!(json.contains("\"infos3d\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = CasementConfig::default();
        let json = config_to_json(&config);
        let parsed: CasementConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.store.keys.registry, "browsers");
        assert_eq!(parsed.watch.poll_interval_ms, 250);
        assert_eq!(parsed.logging.level, "info");
    }
}

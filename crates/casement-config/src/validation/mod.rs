//! Full configuration validation.
//!
//! Each check pushes onto a shared error list; the orchestrator joins them
//! into a single `ConfigError`.

mod helpers;


use crate::schema::{CasementConfig, LOG_LEVELS};
use casement_common::ConfigError;

use helpers::validate_range_u64;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CasementConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_keys(&mut errors, config);
    validate_range_u64(
        &mut errors,
        "watch.poll_interval_ms",
        config.watch.poll_interval_ms,
        10,
        60_000,
    );
    validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Slot keys must be usable as file names and must not collide.
fn validate_keys(errors: &mut Vec<String>, config: &CasementConfig) {
    let keys = &config.store.keys;
    let named = [
        ("store.keys.counter", keys.counter.as_str()),
        ("store.keys.registry", keys.registry.as_str()),
        ("store.keys.shared_state", keys.shared_state.as_str()),
    ];

    for (name, key) in named {
        if key.trim().is_empty() {
            errors.push(format!("{name} is empty"));
        } else if key.contains(['/', '\\']) || key.starts_with('.') {
            errors.push(format!("{name} = {key:?} is not a valid key name"));
        }
    }

    for (i, (name_a, key_a)) in named.iter().enumerate() {
        for (name_b, key_b) in named.iter().skip(i + 1) {
            if key_a == key_b {
                errors.push(format!("{name_a} and {name_b} both use {key_a:?}"));
            }
        }
    }
}

fn validate_logging(errors: &mut Vec<String>, config: &CasementConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}

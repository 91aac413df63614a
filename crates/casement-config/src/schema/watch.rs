use serde::{Deserialize, Serialize};

/// Geometry polling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// How often a window re-checks its own geometry (valid range: 10-60000).
    pub poll_interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 250,
        }
    }
}

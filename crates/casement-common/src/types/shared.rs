use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::BrowserId;

/// The shared 3D interaction record. Always written as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SharedState {
    pub target_point: f64,
    pub mesh_position: f64,
    pub mesh_rotation: f64,
    /// Commanding window; `-1` on the wire when nobody commands.
    #[serde(with = "command_sentinel")]
    pub command: Option<BrowserId>,
}

impl SharedState {
    pub const NO_COMMANDER: i64 = -1;

    /// All manipulation parameters zeroed, no commander.
    pub const fn blank() -> Self {
        Self {
            target_point: 0.0,
            mesh_position: 0.0,
            mesh_rotation: 0.0,
            command: None,
        }
    }

    /// Zero defaults with `id` as commander.
    pub const fn commanded_by(id: BrowserId) -> Self {
        Self {
            command: Some(id),
            ..Self::blank()
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::blank()
    }
}

mod command_sentinel {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<BrowserId>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(id) => s.serialize_u64(id.0),
            None => s.serialize_i64(SharedState::NO_COMMANDER),
        }
    }

    // Anything that is not a non-negative whole number means "no commander".
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<BrowserId>, D::Error> {
        let raw = Option::<f64>::deserialize(d)?;
        Ok(raw
            .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
            .map(|v| BrowserId(v as u64)))
    }
}

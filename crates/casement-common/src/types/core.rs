use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a registered window. Strictly increasing per counter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BrowserId(pub u64);

impl BrowserId {
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for BrowserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Screen position and viewport size of a window: its fingerprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// One registered window as persisted in the registry slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowserEntity {
    pub id: BrowserId,
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

impl BrowserEntity {
    pub fn new(id: BrowserId, geometry: Geometry) -> Self {
        Self {
            id,
            width: geometry.width,
            height: geometry.height,
            x: geometry.x,
            y: geometry.y,
        }
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.x, self.y, self.width, self.height)
    }

    /// Same id, new geometry.
    pub fn with_geometry(self, geometry: Geometry) -> Self {
        Self::new(self.id, geometry)
    }
}

//! Where a window is and how big it is.

use std::sync::{Arc, Mutex, PoisonError};

use casement_common::Geometry;

/// Queries the hosting environment for the current window's fingerprint.
pub trait GeometrySource {
    fn geometry(&self) -> Geometry;
}

impl<F: Fn() -> Geometry> GeometrySource for F {
    fn geometry(&self) -> Geometry {
        self()
    }
}

/// A geometry that callers set explicitly. Clones share the same value, so
/// one clone can be handed to a session while another moves the window.
#[derive(Debug, Clone, Default)]
pub struct FixedGeometry {
    inner: Arc<Mutex<Geometry>>,
}

impl FixedGeometry {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(geometry)),
        }
    }

    pub fn set(&self, geometry: Geometry) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = geometry;
    }
}

impl GeometrySource for FixedGeometry {
    fn geometry(&self) -> Geometry {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_geometry_clones_share_value() {
        let a = FixedGeometry::new(Geometry::new(0, 0, 800, 600));
        let b = a.clone();
        b.set(Geometry::new(5, 5, 640, 480));
        assert_eq!(a.geometry(), Geometry::new(5, 5, 640, 480));
    }

    #[test]
    fn closures_are_geometry_sources() {
        let source = || Geometry::new(1, 2, 3, 4);
        assert_eq!(source.geometry(), Geometry::new(1, 2, 3, 4));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(FixedGeometry::default().geometry(), Geometry::default());
    }
}

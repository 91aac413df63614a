//! Geometric identity of windows.
//!
//! Two windows with exactly the same position and size are treated as the
//! same logical browser; a reloaded tab shows up this way.

use casement_common::{BrowserEntity, Geometry};

/// Exact four-field equality, no tolerance.
pub fn same_browser(fingerprint: Geometry, entity: &BrowserEntity) -> bool {
    entity.geometry() == fingerprint
}

/// Remove every entry matching `fingerprint`, returning the evicted ones.
/// Order of the remaining entries is preserved.
pub fn evict_same_browser(
    registry: &mut Vec<BrowserEntity>,
    fingerprint: Geometry,
) -> Vec<BrowserEntity> {
    let (evicted, kept): (Vec<_>, Vec<_>) = registry
        .drain(..)
        .partition(|entity| same_browser(fingerprint, entity));
    *registry = kept;
    evicted
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_common::BrowserId;

    fn entity(id: u64, x: i32, y: i32, width: u32, height: u32) -> BrowserEntity {
        BrowserEntity::new(BrowserId(id), Geometry::new(x, y, width, height))
    }

    #[test]
    fn same_browser_requires_all_fields() {
        let fp = Geometry::new(10, 20, 800, 600);
        assert!(same_browser(fp, &entity(1, 10, 20, 800, 600)));
        assert!(!same_browser(fp, &entity(1, 11, 20, 800, 600)));
        assert!(!same_browser(fp, &entity(1, 10, 21, 800, 600)));
        assert!(!same_browser(fp, &entity(1, 10, 20, 801, 600)));
        assert!(!same_browser(fp, &entity(1, 10, 20, 800, 599)));
    }

    #[test]
    fn same_browser_ignores_id() {
        let fp = Geometry::new(0, 0, 100, 100);
        assert!(same_browser(fp, &entity(1, 0, 0, 100, 100)));
        assert!(same_browser(fp, &entity(99, 0, 0, 100, 100)));
    }

    #[test]
    fn evict_removes_every_match() {
        let mut registry = vec![
            entity(1, 0, 0, 800, 600),
            entity(2, 50, 50, 800, 600),
            entity(3, 0, 0, 800, 600),
        ];
        let evicted = evict_same_browser(&mut registry, Geometry::new(0, 0, 800, 600));
        assert_eq!(evicted.len(), 2);
        assert_eq!(registry, vec![entity(2, 50, 50, 800, 600)]);
    }

    #[test]
    fn evict_without_match_is_noop() {
        let mut registry = vec![entity(1, 0, 0, 800, 600), entity(2, 9, 9, 9, 9)];
        let evicted = evict_same_browser(&mut registry, Geometry::new(1, 1, 1, 1));
        assert!(evicted.is_empty());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry[0].id, BrowserId(1));
        assert_eq!(registry[1].id, BrowserId(2));
    }
}

//! Human-readable and JSON output.

use casement_common::{BrowserEntity, BrowserId, SharedState};
use serde_json::json;

/// One line per window; `*` marks this window, `C` the commander.
pub fn registry_lines(
    windows: &[BrowserEntity],
    current: Option<BrowserId>,
    commander: Option<BrowserId>,
) -> Vec<String> {
    windows
        .iter()
        .map(|w| {
            let me = if Some(w.id) == current { '*' } else { ' ' };
            let cmd = if Some(w.id) == commander { 'C' } else { ' ' };
            format!("{me}{cmd} #{:<4} {}", w.id.to_string(), w.geometry())
        })
        .collect()
}

pub fn state_line(state: Option<&SharedState>) -> String {
    match state {
        None => "shared state: empty".to_string(),
        Some(s) => format!(
            "shared state: command={} targetPoint={} meshPosition={} meshRotation={}",
            s.command
                .map(|id| id.to_string())
                .unwrap_or_else(|| "none".into()),
            s.target_point,
            s.mesh_position,
            s.mesh_rotation
        ),
    }
}

pub fn snapshot_json(
    counter: BrowserId,
    windows: &[BrowserEntity],
    state: Option<&SharedState>,
) -> serde_json::Value {
    json!({
        "lastID": counter,
        "browsers": windows,
        "infos3d": state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_common::Geometry;

    fn entity(id: u64, x: i32) -> BrowserEntity {
        BrowserEntity::new(BrowserId(id), Geometry::new(x, 0, 800, 600))
    }

    #[test]
    fn registry_lines_mark_self_and_commander() {
        let lines = registry_lines(
            &[entity(1, 0), entity(2, 800)],
            Some(BrowserId(2)),
            Some(BrowserId(1)),
        );
        assert_eq!(lines[0], " C #1    800x600+0+0");
        assert_eq!(lines[1], "*  #2    800x600+800+0");
    }

    #[test]
    fn state_line_formats() {
        assert_eq!(state_line(None), "shared state: empty");
        let line = state_line(Some(&SharedState::commanded_by(BrowserId(3))));
        assert!(line.starts_with("shared state: command=3 "));
        assert!(state_line(Some(&SharedState::blank())).contains("command=none"));
    }

    #[test]
    fn snapshot_uses_slot_names() {
        let value = snapshot_json(BrowserId(2), &[entity(2, 0)], None);
        assert_eq!(value["lastID"], 2);
        assert_eq!(value["browsers"][0]["width"], 800);
        assert!(value["infos3d"].is_null());
    }
}

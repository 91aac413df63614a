//! Text encodings of the slot values.

use casement_common::{BrowserEntity, BrowserId, SharedState};
use tracing::debug;

/// Leading decimal integer, ignoring leading whitespace and anything after
/// the digits (`"5.0"` and `"6abc"` read as 5 and 6). No digits, a negative
/// number or overflow read as `0`.
pub fn decode_counter(raw: Option<&str>) -> BrowserId {
    let Some(raw) = raw else {
        return BrowserId(0);
    };
    let text = raw.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() || negative {
        debug!(raw, "malformed counter, using 0");
        return BrowserId(0);
    }
    match digits.parse::<u64>() {
        Ok(n) => BrowserId(n),
        Err(e) => {
            debug!(raw, "counter out of range, using 0: {e}");
            BrowserId(0)
        }
    }
}

pub fn encode_counter(id: BrowserId) -> String {
    id.0.to_string()
}

/// JSON array of entities; anything unparseable is empty.
pub fn decode_registry(raw: Option<&str>) -> Vec<BrowserEntity> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    serde_json::from_str(raw).unwrap_or_else(|e| {
        debug!("malformed registry, using empty: {e}");
        Vec::new()
    })
}

pub fn encode_registry(registry: &[BrowserEntity]) -> Result<String, serde_json::Error> {
    serde_json::to_string(registry)
}

/// JSON object; absent, malformed, non-object and `{}` all mean no state.
pub fn decode_shared_state(raw: Option<&str>) -> Option<SharedState> {
    let value: serde_json::Value = match serde_json::from_str(raw?) {
        Ok(value) => value,
        Err(e) => {
            debug!("malformed shared state, treating as empty: {e}");
            return None;
        }
    };

    match value.as_object() {
        Some(map) if !map.is_empty() => {}
        _ => return None,
    }

    serde_json::from_value(value)
        .map_err(|e| debug!("unexpected shared state shape, treating as empty: {e}"))
        .ok()
}

pub fn encode_shared_state(state: &SharedState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

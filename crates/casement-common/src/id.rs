use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identifies one execution context (a window or a store handle).
///
/// Change notifications carry the writer's context so the writer can be
/// excluded from its own broadcasts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextId(String);

impl ContextId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for log lines.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn context_ids_are_unique() {
        let a = ContextId::new();
        let b = ContextId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn context_id_display_matches_str() {
        let cid = ContextId::new();
        assert_eq!(cid.to_string(), cid.as_str());
    }

    #[test]
    fn context_id_short_is_prefix() {
        let cid = ContextId::new();
        assert_eq!(cid.short().len(), 8);
        assert!(cid.as_str().starts_with(cid.short()));
    }

    #[test]
    fn context_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        let c1 = ContextId::new();
        set.insert(c1.clone());
        set.insert(c1);
        set.insert(ContextId::default());
        assert_eq!(set.len(), 2);
    }
}

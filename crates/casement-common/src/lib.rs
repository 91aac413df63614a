pub mod errors;
pub mod id;
pub mod types;

pub use errors::{CasementError, ConfigError, StoreError};
pub use id::{new_id, ContextId};
pub use types::{BrowserEntity, BrowserId, Geometry, SharedState, SlotKind, SlotValue};

pub type Result<T> = std::result::Result<T, CasementError>;

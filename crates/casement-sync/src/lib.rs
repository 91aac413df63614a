//! Window registry synchronization over a shared store.
//!
//! Every window of an application instance owns a [`WindowSession`]. The
//! session registers the window in the shared registry, evicts stale
//! entries left at the same screen position, elects a commander for the
//! shared 3D state, and keeps its view of the registry current by listening
//! to changes made by the other windows.
//!
//! There is no locking between windows. Two windows registering at the same
//! time can read the same counter and overwrite each other's registry; the
//! last writer wins. Likewise the commander may briefly name a window that
//! has already gone. Consumers should treat an unresolvable commander as
//! "no commander" (see [`WindowSession::commander`]).

pub mod geometry;
pub mod identity;
pub mod session;

pub use geometry::{FixedGeometry, GeometrySource};
pub use identity::{evict_same_browser, same_browser};
pub use session::WindowSession;

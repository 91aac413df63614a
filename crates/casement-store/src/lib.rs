//! Shared key-value storage for cooperating windows.
//!
//! A [`Store`] is a flat string map shared by every window of one
//! application instance. Writes are broadcast to the other windows as
//! [`StorageEvent`]s, never back to the writer. [`SlotStore`] layers the
//! three typed slots (counter, registry, shared 3D state) on top.

pub mod backend;
pub mod events;
pub mod file;
pub mod memory;
pub mod slots;

pub use backend::Store;
pub use events::{ChangeBus, StorageEvent, StorageSubscription};
pub use file::FileStore;
pub use memory::{MemoryHub, MemoryStore};
pub use slots::SlotStore;

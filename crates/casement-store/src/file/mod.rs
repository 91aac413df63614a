//! Directory-backed store shared between processes.
//!
//! Each key is a file inside one directory. A `notify` watcher on that
//! directory turns writes by other processes into [`StorageEvent`]s.
//!
//! [`StorageEvent`]: crate::events::StorageEvent

mod store;
mod watcher;


pub use store::FileStore;

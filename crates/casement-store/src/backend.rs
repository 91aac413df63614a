use std::sync::Arc;

use casement_common::{ContextId, StoreError};

use crate::events::StorageSubscription;

/// A string key-value store shared between execution contexts.
///
/// Implementations must deliver change notifications to every subscriber
/// except those belonging to the writing context.
pub trait Store: Send + Sync {
    /// The context this handle writes as.
    fn context(&self) -> &ContextId;

    /// Current value of `key`, or `None` when absent or unreadable.
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;

    /// Start receiving changes made by other contexts.
    fn subscribe(&self) -> StorageSubscription;
}

impl<T: Store + ?Sized> Store for Arc<T> {
    fn context(&self) -> &ContextId {
        (**self).context()
    }

    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }

    fn subscribe(&self) -> StorageSubscription {
        (**self).subscribe()
    }
}

/// Keys become file names in the file backend, so keep them plain.
pub(crate) fn check_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() || key.starts_with('.') || key.contains(['/', '\\']) {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

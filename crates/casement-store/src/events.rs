use casement_common::ContextId;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tracing::warn;

/// A key changed in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: String,
    /// `None` when the key was removed.
    pub new_value: Option<String>,
    /// Writing context, when the backend knows it.
    pub origin: Option<ContextId>,
}

/// Broadcast channel carrying [`StorageEvent`]s to subscribers.
#[derive(Debug, Clone)]
pub struct ChangeBus {
    sender: broadcast::Sender<StorageEvent>,
}

impl ChangeBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe on behalf of `own`; events originating from `own` are skipped.
    pub fn subscribe(&self, own: Option<ContextId>) -> StorageSubscription {
        StorageSubscription {
            rx: self.sender.subscribe(),
            own,
        }
    }

    /// Returns the number of receivers the event reached.
    pub fn publish(&self, event: StorageEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Receives changes made by other contexts. Dropping it unsubscribes.
#[derive(Debug)]
pub struct StorageSubscription {
    rx: broadcast::Receiver<StorageEvent>,
    own: Option<ContextId>,
}

impl StorageSubscription {
    fn is_own(&self, event: &StorageEvent) -> bool {
        matches!((&self.own, &event.origin), (Some(own), Some(origin)) if own == origin)
    }

    /// Next pending foreign event, without waiting.
    pub fn try_next(&mut self) -> Option<StorageEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) if self.is_own(&event) => continue,
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(n)) => {
                    warn!("storage subscription lagged by {n} events");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// Wait for the next foreign event. `None` once the store is gone.
    pub async fn next(&mut self) -> Option<StorageEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) if self.is_own(&event) => continue,
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(n)) => {
                    warn!("storage subscription lagged by {n} events");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

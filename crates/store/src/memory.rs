use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{EventEnvelope, EventLogError, Result};

/// Destination for domain events raised by the application services.
///
/// Publishing happens after the aggregate has been saved; implementations
/// must not assume they can veto the state change.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Appends a batch of events, preserving their order.
    async fn publish(&self, events: Vec<EventEnvelope>) -> Result<()>;
}

/// Append-only, in-memory event log.
///
/// Every clone shares the same log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventLog {
    events: Arc<RwLock<Vec<EventEnvelope>>>,
    fail_on_publish: Arc<AtomicBool>,
}

impl InMemoryEventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded event in append order.
    pub async fn all(&self) -> Vec<EventEnvelope> {
        self.events.read().await.clone()
    }

    /// Returns the events recorded for one aggregate, in append order.
    pub async fn events_for(&self, aggregate_id: Uuid) -> Vec<EventEnvelope> {
        self.events
            .read()
            .await
            .iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .cloned()
            .collect()
    }

    /// Returns the events of a given type, in append order.
    pub async fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.events
            .read()
            .await
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Returns the total number of events recorded.
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    /// Returns true if nothing has been recorded.
    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }

    /// Clears all recorded events.
    pub async fn clear(&self) {
        self.events.write().await.clear();
    }

    /// Makes every subsequent `publish` fail until switched back off.
    pub fn set_fail_on_publish(&self, fail: bool) {
        self.fail_on_publish.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventLog {
    async fn publish(&self, events: Vec<EventEnvelope>) -> Result<()> {
        if self.fail_on_publish.load(Ordering::SeqCst) {
            return Err(EventLogError::Unavailable(
                "event log rejected the append".to_string(),
            ));
        }

        let mut log = self.events.write().await;
        let mut next = log.len() as u64 + 1;
        for mut envelope in events {
            envelope.sequence = next;
            next += 1;
            log.push(envelope);
        }
        Ok(())
    }
}

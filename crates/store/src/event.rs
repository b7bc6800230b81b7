use chrono::{DateTime, Utc};
use domain::DomainEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random event ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A domain event along with the metadata needed to store and query it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// The type of the event (e.g., "CartCreated", "ItemAddedToCart").
    pub event_type: String,

    /// The aggregate this event belongs to.
    pub aggregate_id: Uuid,

    /// The type of aggregate (e.g., "Cart", "Customer").
    pub aggregate_type: String,

    /// Position in the log, assigned on append. Zero until then.
    pub sequence: u64,

    /// When the envelope was created.
    pub timestamp: DateTime<Utc>,

    /// The event payload as JSON.
    pub payload: serde_json::Value,
}

impl EventEnvelope {
    /// Wraps a domain event, serializing it into the payload.
    pub fn from_event<E: DomainEvent>(event: &E) -> Result<Self, serde_json::Error> {
        Ok(Self {
            event_id: EventId::new(),
            event_type: event.event_type().to_string(),
            aggregate_id: event.aggregate_id(),
            aggregate_type: event.aggregate_type().to_string(),
            sequence: 0,
            timestamp: Utc::now(),
            payload: serde_json::to_value(event)?,
        })
    }

    /// Wraps every event of a batch, in order.
    pub fn from_events<E: DomainEvent>(events: &[E]) -> Result<Vec<Self>, serde_json::Error> {
        events.iter().map(Self::from_event).collect()
    }

    /// Deserializes the payload back into a domain event.
    pub fn decode<E: DomainEvent>(&self) -> Result<E, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

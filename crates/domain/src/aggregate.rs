//! Domain event trait and the value-plus-events result of a state change.

use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;

    /// Returns the type name of the aggregate that emitted the event.
    fn aggregate_type(&self) -> &'static str;

    /// Returns the identifier of the aggregate that emitted the event.
    fn aggregate_id(&self) -> Uuid;
}

/// Outcome of a state-changing domain operation.
///
/// Aggregates never store the events they raise. Every factory and mutator
/// hands them back next to its result, and the caller decides where they go.
#[derive(Debug, Clone)]
pub struct Recorded<T, E> {
    /// The value produced by the operation.
    pub value: T,

    /// Events raised by the operation, oldest first.
    pub events: Vec<E>,
}

impl<T, E> Recorded<T, E> {
    /// Wraps a value with a single event.
    pub fn new(value: T, event: E) -> Self {
        Self {
            value,
            events: vec![event],
        }
    }

    /// Splits the outcome into its value and events.
    pub fn into_parts(self) -> (T, Vec<E>) {
        (self.value, self.events)
    }
}

use domain::DomainEvent;
use store::{EventEnvelope, EventPublisher};

/// Hands the events raised by a saved change to the publisher.
///
/// The change is already persisted when this runs, so failures are logged
/// and swallowed rather than returned to the caller.
pub(crate) async fn publish_events<E: DomainEvent>(publisher: &dyn EventPublisher, events: &[E]) {
    if events.is_empty() {
        return;
    }

    let envelopes = match EventEnvelope::from_events(events) {
        Ok(envelopes) => envelopes,
        Err(e) => {
            tracing::warn!(error = %e, "failed to serialize domain events");
            return;
        }
    };

    let count = envelopes.len();
    match publisher.publish(envelopes).await {
        Ok(()) => tracing::debug!(count, "domain events published"),
        Err(e) => tracing::warn!(error = %e, count, "failed to publish domain events"),
    }
}

use thiserror::Error;

/// Errors that can occur when recording domain events.
#[derive(Debug, Error)]
pub enum EventLogError {
    /// An event could not be serialized into an envelope.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The log refused the append.
    #[error("Event log unavailable: {0}")]
    Unavailable(String),
}

/// Result type for event log operations.
pub type Result<T> = std::result::Result<T, EventLogError>;

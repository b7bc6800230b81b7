//! Customer entity.

use chrono::{DateTime, Utc};
use common::CustomerId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::aggregate::{DomainEvent, Recorded};

/// Minimum length of a customer name, after trimming.
pub const MIN_NAME_LEN: usize = 8;

/// Errors that can occur when creating a customer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    /// The trimmed name is shorter than [`MIN_NAME_LEN`].
    #[error("invalid name")]
    InvalidName,
}

/// A customer who can own shopping carts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
}

impl Customer {
    /// Creates a customer with a fresh id.
    ///
    /// Leading and trailing whitespace is removed before the length check and
    /// the trimmed name is what gets stored.
    pub fn new(name: &str) -> Result<Recorded<Customer, CustomerEvent>, CustomerError> {
        let name = name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            return Err(CustomerError::InvalidName);
        }

        let customer = Customer {
            id: CustomerId::new(),
            name: name.to_string(),
        };
        let event = CustomerEvent::CustomerCreated {
            customer_id: customer.id,
            customer_name: customer.name.clone(),
            occurred_at: Utc::now(),
        };

        Ok(Recorded::new(customer, event))
    }

    /// Returns the customer id.
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Returns the trimmed display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Events raised by the customer entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CustomerEvent {
    /// A customer was registered.
    CustomerCreated {
        customer_id: CustomerId,
        customer_name: String,
        occurred_at: DateTime<Utc>,
    },
}

impl DomainEvent for CustomerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CustomerEvent::CustomerCreated { .. } => "CustomerCreated",
        }
    }

    fn aggregate_type(&self) -> &'static str {
        "Customer"
    }

    fn aggregate_id(&self) -> Uuid {
        match self {
            CustomerEvent::CustomerCreated { customer_id, .. } => customer_id.as_uuid(),
        }
    }
}

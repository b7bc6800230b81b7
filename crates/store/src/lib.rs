//! In-memory persistence for the shopping cart backend.
//!
//! Provides one repository per aggregate, implementing the contracts from
//! the `domain` crate, plus an append-only log for domain events.

pub mod cart;
pub mod customer;
pub mod error;
pub mod event;
pub mod memory;
pub mod product;

mod table;

pub use cart::InMemoryCartRepository;
pub use customer::InMemoryCustomerRepository;
pub use error::{EventLogError, Result};
pub use event::{EventEnvelope, EventId};
pub use memory::{EventPublisher, InMemoryEventLog};
pub use product::InMemoryProductRepository;

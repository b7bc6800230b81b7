//! Domain layer for the shopping cart backend.
//!
//! This crate provides:
//! - `Customer` and `Product` entities with validated construction
//! - the `Cart` aggregate, which owns its line items and computes totals
//! - `Money` for prices and totals
//! - domain events handed back by every state change
//! - repository contracts, one per aggregate

pub mod aggregate;
pub mod cart;
pub mod customer;
pub mod error;
pub mod money;
pub mod product;
pub mod repository;

pub use aggregate::{DomainEvent, Recorded};
pub use cart::{Cart, CartError, CartEvent, Item};
pub use common::{CartId, CustomerId, ProductId};
pub use customer::{Customer, CustomerError, CustomerEvent};
pub use error::RepositoryError;
pub use money::Money;
pub use product::{Product, ProductError, ProductEvent};
pub use repository::{CartRepository, CustomerRepository, ProductRepository};

//! Cart aggregate and related types.

mod aggregate;
mod events;
mod item;

pub use aggregate::Cart;
pub use events::CartEvent;
pub use item::Item;

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// A cart cannot exist without an owning customer.
    #[error("no customer provided")]
    MissingCustomer,

    /// No product was supplied.
    #[error("invalid product")]
    InvalidProduct,

    /// Quantity must be at least 1.
    #[error("invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: i64 },

    /// A line total or the cart total would not fit in a money amount.
    #[error("cart total out of range")]
    TotalOverflow,
}

//! Commands accepted by the application services.

use common::{CartId, CustomerId, ProductId};
use domain::Money;

/// Command to register a new customer.
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    /// Display name; trimmed before validation.
    pub customer_name: String,
}

impl CreateCustomer {
    /// Creates a new CreateCustomer command.
    pub fn new(customer_name: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
        }
    }
}

/// Command to add a product to the catalog.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    /// Product name; trimmed before validation.
    pub product_name: String,

    /// Price per unit.
    pub unit_price: Money,
}

impl CreateProduct {
    /// Creates a new CreateProduct command.
    pub fn new(product_name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            product_name: product_name.into(),
            unit_price,
        }
    }
}

/// Command to open a cart for an existing customer.
#[derive(Debug, Clone, Copy)]
pub struct CreateCart {
    /// The customer who will own the cart.
    pub customer_id: CustomerId,
}

impl CreateCart {
    /// Creates a new CreateCart command.
    pub fn new(customer_id: CustomerId) -> Self {
        Self { customer_id }
    }
}

/// Command to add a product and quantity to a cart.
#[derive(Debug, Clone, Copy)]
pub struct AddItemToCart {
    /// The cart to add to.
    pub cart_id: CartId,

    /// The product to add.
    pub product_id: ProductId,

    /// Amount to add. Must be at least 1.
    pub quantity: i64,
}

impl AddItemToCart {
    /// Creates a new AddItemToCart command.
    pub fn new(cart_id: CartId, product_id: ProductId, quantity: i64) -> Self {
        Self {
            cart_id,
            product_id,
            quantity,
        }
    }
}

//! Repository contracts, one per aggregate.
//!
//! Lookups fail with [`RepositoryError::NotFound`] when nothing is stored
//! under the id. `save` is an upsert keyed by the entity's own id.

use async_trait::async_trait;
use common::{CartId, CustomerId, ProductId};

use crate::cart::Cart;
use crate::customer::Customer;
use crate::error::RepositoryError;
use crate::product::Product;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Storage for customers.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Loads a customer by id.
    async fn find_by_id(&self, id: CustomerId) -> Result<Customer>;

    /// Inserts or replaces a customer.
    async fn save(&self, customer: &Customer) -> Result<()>;
}

/// Storage for products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Loads a product by id.
    async fn find_by_id(&self, id: ProductId) -> Result<Product>;

    /// Inserts or replaces a product.
    async fn save(&self, product: &Product) -> Result<()>;
}

/// Storage for carts, with a secondary index by owning customer.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Loads a cart by id.
    async fn find_by_id(&self, id: CartId) -> Result<Cart>;

    /// Inserts or replaces a cart and records it under its customer.
    async fn save(&self, cart: &Cart) -> Result<()>;

    /// Returns every cart saved for a customer, in first-saved order.
    ///
    /// A customer with no carts yields an empty list rather than an error.
    async fn get_customer_carts(&self, customer_id: CustomerId) -> Result<Vec<Cart>>;
}

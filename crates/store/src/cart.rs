//! In-memory cart repository with a by-customer index.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::{CartId, CustomerId};
use domain::repository::Result;
use domain::{Cart, CartRepository};
use tokio::sync::RwLock;

use crate::table::Table;

/// In-memory cart repository.
///
/// Besides the carts themselves it keeps, per customer, the ids of the carts
/// saved for them. The index holds each cart id once no matter how many
/// times the cart is saved.
#[derive(Debug, Clone)]
pub struct InMemoryCartRepository {
    carts: Table<CartId, Cart>,
    by_customer: Arc<RwLock<HashMap<CustomerId, Vec<CartId>>>>,
}

impl InMemoryCartRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            carts: Table::new("cart"),
            by_customer: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of stored carts.
    pub async fn len(&self) -> usize {
        self.carts.len().await
    }

    /// Makes every subsequent `save` fail until switched back off.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.carts.set_fail_on_save(fail);
    }
}

impl Default for InMemoryCartRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn find_by_id(&self, id: CartId) -> Result<Cart> {
        self.carts.get(id).await
    }

    async fn save(&self, cart: &Cart) -> Result<()> {
        self.carts.upsert(cart.id(), cart.clone()).await?;

        let mut index = self.by_customer.write().await;
        let cart_ids = index.entry(cart.customer_id()).or_default();
        if !cart_ids.contains(&cart.id()) {
            cart_ids.push(cart.id());
        }

        tracing::debug!(cart_id = %cart.id(), customer_id = %cart.customer_id(), "cart saved");
        Ok(())
    }

    async fn get_customer_carts(&self, customer_id: CustomerId) -> Result<Vec<Cart>> {
        let cart_ids = self
            .by_customer
            .read()
            .await
            .get(&customer_id)
            .cloned()
            .unwrap_or_default();

        Ok(self.carts.get_many(&cart_ids).await)
    }
}

//! In-memory product repository.

use async_trait::async_trait;
use common::ProductId;
use domain::repository::Result;
use domain::{Product, ProductRepository};

use crate::table::Table;

/// In-memory product repository.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Table<ProductId, Product>,
}

impl InMemoryProductRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            products: Table::new("product"),
        }
    }

    /// Returns the number of stored products.
    pub async fn len(&self) -> usize {
        self.products.len().await
    }

    /// Makes every subsequent `save` fail until switched back off.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.products.set_fail_on_save(fail);
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: ProductId) -> Result<Product> {
        self.products.get(id).await
    }

    async fn save(&self, product: &Product) -> Result<()> {
        self.products.upsert(product.id(), product.clone()).await
    }
}

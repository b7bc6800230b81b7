//! Product catalog.

use std::sync::Arc;

use common::ProductId;
use domain::{Product, ProductRepository};
use store::EventPublisher;

use crate::commands::CreateProduct;
use crate::dto::ProductDto;
use crate::error::Result;
use crate::publish::publish_events;

/// Service for adding products to the catalog and reading them back.
#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    events: Arc<dyn EventPublisher>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(products: Arc<dyn ProductRepository>, events: Arc<dyn EventPublisher>) -> Self {
        Self { products, events }
    }

    /// Adds a product to the catalog.
    #[tracing::instrument(skip(self))]
    pub async fn create_product(&self, cmd: CreateProduct) -> Result<ProductDto> {
        let (product, events) = Product::new(&cmd.product_name, cmd.unit_price)?.into_parts();

        self.products.save(&product).await?;
        publish_events(self.events.as_ref(), &events).await;

        metrics::counter!("products_created_total").increment(1);
        tracing::info!(
            product_id = %product.id(),
            unit_price = %product.unit_price(),
            "product created"
        );
        Ok(ProductDto::from(&product))
    }

    /// Looks up a product by id.
    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, product_id: ProductId) -> Result<ProductDto> {
        let product = self.products.find_by_id(product_id).await?;
        Ok(ProductDto::from(&product))
    }
}

//! Product entity.

use chrono::{DateTime, Utc};
use common::ProductId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::aggregate::{DomainEvent, Recorded};
use crate::money::Money;

/// Minimum length of a product name, after trimming.
pub const MIN_NAME_LEN: usize = 10;

/// Errors that can occur when creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// The name is too short or the price is not positive.
    #[error("invalid arguments")]
    InvalidArguments,
}

/// A product that can be added to carts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    unit_price: Money,
}

impl Product {
    /// Creates a product with a fresh id.
    ///
    /// Fails with [`ProductError::InvalidArguments`] when the trimmed name is
    /// shorter than [`MIN_NAME_LEN`] or the price is not above zero.
    pub fn new(
        name: &str,
        unit_price: Money,
    ) -> Result<Recorded<Product, ProductEvent>, ProductError> {
        let name = name.trim();
        if name.chars().count() < MIN_NAME_LEN || !unit_price.is_positive() {
            return Err(ProductError::InvalidArguments);
        }

        let product = Product {
            id: ProductId::new(),
            name: name.to_string(),
            unit_price,
        };
        let event = ProductEvent::ProductCreated {
            product_id: product.id,
            product_name: product.name.clone(),
            unit_price,
            occurred_at: Utc::now(),
        };

        Ok(Recorded::new(product, event))
    }

    /// Returns the product id.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the trimmed product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current unit price.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns a copy of this product carrying a different price, same id.
    ///
    /// Test support for exercising the cart's price snapshot.
    #[cfg(test)]
    pub(crate) fn with_unit_price(&self, unit_price: Money) -> Product {
        Product {
            unit_price,
            ..self.clone()
        }
    }
}

/// Events raised by the product entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ProductEvent {
    /// A product was added to the catalog.
    ProductCreated {
        product_id: ProductId,
        product_name: String,
        unit_price: Money,
        occurred_at: DateTime<Utc>,
    },
}

impl DomainEvent for ProductEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ProductEvent::ProductCreated { .. } => "ProductCreated",
        }
    }

    fn aggregate_type(&self) -> &'static str {
        "Product"
    }

    fn aggregate_id(&self) -> Uuid {
        match self {
            ProductEvent::ProductCreated { product_id, .. } => product_id.as_uuid(),
        }
    }
}

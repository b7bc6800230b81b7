//! Cart domain events.

use chrono::{DateTime, Utc};
use common::{CartId, CustomerId, ProductId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregate::DomainEvent;

/// Events raised by the cart aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CartEvent {
    /// A cart was opened for a customer.
    CartCreated {
        cart_id: CartId,
        customer_id: CustomerId,
        occurred_at: DateTime<Utc>,
    },

    /// A product was added to a cart.
    ///
    /// `quantity` is the amount added by this call, not the line's new total.
    ItemAddedToCart {
        cart_id: CartId,
        product_id: ProductId,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    },
}

impl CartEvent {
    pub(crate) fn cart_created(cart_id: CartId, customer_id: CustomerId) -> Self {
        CartEvent::CartCreated {
            cart_id,
            customer_id,
            occurred_at: Utc::now(),
        }
    }

    pub(crate) fn item_added(cart_id: CartId, product_id: ProductId, quantity: u32) -> Self {
        CartEvent::ItemAddedToCart {
            cart_id,
            product_id,
            quantity,
            occurred_at: Utc::now(),
        }
    }

    /// Returns the cart the event belongs to.
    pub fn cart_id(&self) -> CartId {
        match self {
            CartEvent::CartCreated { cart_id, .. } | CartEvent::ItemAddedToCart { cart_id, .. } => {
                *cart_id
            }
        }
    }
}

impl DomainEvent for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::CartCreated { .. } => "CartCreated",
            CartEvent::ItemAddedToCart { .. } => "ItemAddedToCart",
        }
    }

    fn aggregate_type(&self) -> &'static str {
        "Cart"
    }

    fn aggregate_id(&self) -> Uuid {
        self.cart_id().as_uuid()
    }
}

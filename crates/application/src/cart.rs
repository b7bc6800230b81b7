//! Cart use cases: opening carts and adding items to them.

use std::sync::Arc;

use common::{CartId, CustomerId};
use domain::{Cart, CartRepository, CustomerRepository, ProductRepository};
use store::EventPublisher;

use crate::commands::{AddItemToCart, CreateCart};
use crate::dto::CartDto;
use crate::error::Result;
use crate::locks::CartLocks;
use crate::publish::publish_events;

/// Service for managing shopping carts.
///
/// Cloning is cheap; all clones share the same repositories and the same
/// per-cart locks.
#[derive(Clone)]
pub struct CartService {
    carts: Arc<dyn CartRepository>,
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
    events: Arc<dyn EventPublisher>,
    locks: Arc<CartLocks>,
}

impl CartService {
    /// Creates a new cart service.
    pub fn new(
        carts: Arc<dyn CartRepository>,
        customers: Arc<dyn CustomerRepository>,
        products: Arc<dyn ProductRepository>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            carts,
            customers,
            products,
            events,
            locks: Arc::new(CartLocks::new()),
        }
    }

    /// Opens an empty cart for an existing customer.
    #[tracing::instrument(skip(self))]
    pub async fn create_new_cart(&self, cmd: CreateCart) -> Result<CartDto> {
        let customer = self.customers.find_by_id(cmd.customer_id).await?;

        let (cart, events) = Cart::create(Some(&customer))?.into_parts();

        self.carts.save(&cart).await?;
        publish_events(self.events.as_ref(), &events).await;

        metrics::counter!("carts_created_total").increment(1);
        tracing::info!(cart_id = %cart.id(), customer_id = %customer.id(), "cart created");
        Ok(CartDto::try_from(&cart)?)
    }

    /// Adds a quantity of a product to a cart.
    ///
    /// The product is resolved before the cart, so a request naming both a
    /// missing product and a missing cart reports the product.
    #[tracing::instrument(skip(self))]
    pub async fn add_item_to_cart(&self, cmd: AddItemToCart) -> Result<CartDto> {
        let product = self.products.find_by_id(cmd.product_id).await?;

        let _guard = self.locks.lock(cmd.cart_id).await;

        let mut cart = self.carts.find_by_id(cmd.cart_id).await?;
        let (item, events) = cart.add_item(Some(&product), cmd.quantity)?.into_parts();

        self.carts.save(&cart).await?;
        publish_events(self.events.as_ref(), &events).await;

        metrics::counter!("cart_items_added_total").increment(1);
        tracing::info!(
            cart_id = %cart.id(),
            product_id = %item.product_id(),
            quantity = item.quantity(),
            "item added to cart"
        );
        Ok(CartDto::try_from(&cart)?)
    }

    /// Returns a cart with its items and totals.
    #[tracing::instrument(skip(self))]
    pub async fn get_cart(&self, cart_id: CartId) -> Result<CartDto> {
        let cart = self.carts.find_by_id(cart_id).await?;
        Ok(CartDto::try_from(&cart)?)
    }

    /// Returns every cart opened by a customer, oldest first.
    ///
    /// A customer without carts, or an unknown customer, yields an empty list.
    #[tracing::instrument(skip(self))]
    pub async fn customer_carts(&self, customer_id: CustomerId) -> Result<Vec<CartDto>> {
        let carts = self.carts.get_customer_carts(customer_id).await?;
        let carts = carts
            .iter()
            .map(CartDto::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(carts)
    }
}

//! Cart aggregate implementation.

use std::collections::HashMap;

use common::{CartId, CustomerId, ProductId};
use serde::{Deserialize, Serialize};

use crate::aggregate::Recorded;
use crate::customer::Customer;
use crate::money::Money;
use crate::product::Product;

use super::{CartError, CartEvent, Item};

/// Cart aggregate root.
///
/// A cart belongs to exactly one customer and holds at most one [`Item`] per
/// product. The only way to change it is [`Cart::add_item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Unique cart identifier.
    id: CartId,

    /// Owner, fixed at creation.
    customer_id: CustomerId,

    /// Line items keyed by product ID.
    items: HashMap<ProductId, Item>,
}

// Command methods (return events)
impl Cart {
    /// Opens an empty cart for a customer.
    pub fn create(customer: Option<&Customer>) -> Result<Recorded<Cart, CartEvent>, CartError> {
        let customer = customer.ok_or(CartError::MissingCustomer)?;

        let cart = Cart {
            id: CartId::new(),
            customer_id: customer.id(),
            items: HashMap::new(),
        };
        let event = CartEvent::cart_created(cart.id, cart.customer_id);

        Ok(Recorded::new(cart, event))
    }

    /// Adds a product to the cart.
    ///
    /// The product is checked before the quantity. A product already in the
    /// cart has its quantity increased, while its unit price stays the one
    /// captured on first insertion. Returns the line as it is after the merge.
    ///
    /// Additions whose line total or cart total would not fit in [`Money`] are
    /// rejected with [`CartError::TotalOverflow`] and leave the cart unchanged.
    pub fn add_item(
        &mut self,
        product: Option<&Product>,
        quantity: i64,
    ) -> Result<Recorded<Item, CartEvent>, CartError> {
        let product = product.ok_or(CartError::InvalidProduct)?;

        let added = u32::try_from(quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or(CartError::InvalidQuantity { quantity })?;

        let product_id = product.id();
        let item = match self.items.get(&product_id) {
            Some(existing) => {
                if existing.quantity().checked_add(added).is_none() {
                    return Err(CartError::InvalidQuantity { quantity });
                }
                existing.with_added_quantity(added)
            }
            None => Item::new(product_id, product.unit_price(), added),
        };

        // The line total and the cart total must both stay representable.
        let line_total = item.total().ok_or(CartError::TotalOverflow)?;
        self.items
            .values()
            .filter(|other| other.product_id() != product_id)
            .try_fold(line_total, |acc, other| acc.checked_add(other.total()?))
            .ok_or(CartError::TotalOverflow)?;

        self.items.insert(product_id, item.clone());

        Ok(Recorded::new(
            item,
            CartEvent::item_added(self.id, product_id, added),
        ))
    }
}

// Query methods
impl Cart {
    /// Returns the cart ID.
    pub fn id(&self) -> CartId {
        self.id
    }

    /// Returns the owning customer.
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns all items in the cart, in no particular order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Returns the item for a product, if present.
    pub fn item(&self, product_id: &ProductId) -> Option<&Item> {
        self.items.get(product_id)
    }

    /// Returns true if nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the sum of all item quantities.
    pub fn size(&self) -> u64 {
        self.items.values().map(|item| u64::from(item.quantity())).sum()
    }

    /// Returns the sum of `unit_price * quantity` over all items.
    ///
    /// `add_item` refuses changes that would overflow, so this only fails for
    /// carts built some other way, such as deserialized by hand.
    pub fn total(&self) -> Result<Money, CartError> {
        self.items
            .values()
            .try_fold(Money::zero(), |acc, item| {
                acc.checked_add(item.total()?)
            })
            .ok_or(CartError::TotalOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::DomainEvent;

    fn customer() -> Customer {
        Customer::new("John Mayer").unwrap().value
    }

    fn product(name: &str, price: f64) -> Product {
        Product::new(name, Money::from_decimal(price).unwrap()).unwrap().value
    }

    fn create_cart() -> Cart {
        Cart::create(Some(&customer())).unwrap().value
    }

    #[test]
    fn test_create_cart() {
        let owner = customer();
        let (cart, events) = Cart::create(Some(&owner)).unwrap().into_parts();

        assert_eq!(cart.customer_id(), owner.id());
        assert_eq!(cart.size(), 0);
        assert!(cart.total().unwrap().is_zero());
        assert!(cart.is_empty());

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "CartCreated");
        assert_eq!(events[0].cart_id(), cart.id());
    }

    #[test]
    fn test_create_without_customer_fails() {
        let result = Cart::create(None);
        assert_eq!(result.unwrap_err(), CartError::MissingCustomer);
    }

    #[test]
    fn test_add_missing_product_fails_for_any_quantity() {
        let mut cart = create_cart();
        for quantity in [-1, 0, 1, 5] {
            let result = cart.add_item(None, quantity);
            assert_eq!(result.unwrap_err(), CartError::InvalidProduct);
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item_with_non_positive_quantity_fails() {
        let mut cart = create_cart();
        let rice = product("Arroz Blanco Gallo", 8.00);

        for quantity in [0, -1] {
            let result = cart.add_item(Some(&rice), quantity);
            assert_eq!(result.unwrap_err(), CartError::InvalidQuantity { quantity });
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item() {
        let mut cart = create_cart();
        let rice = product("Arroz Blanco Gallo", 8.00);

        let (item, events) = cart.add_item(Some(&rice), 1).unwrap().into_parts();

        assert_eq!(item.product_id(), rice.id());
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.unit_price().cents(), 800);
        assert_eq!(cart.size(), 1);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "ItemAddedToCart");
        assert_eq!(events[0].cart_id(), cart.id());
    }

    #[test]
    fn test_same_product_merges_into_one_item() {
        let mut cart = create_cart();
        let rice = product("Arroz Blanco Gallo", 8.10);

        cart.add_item(Some(&rice), 2).unwrap();
        let (item, events) = cart.add_item(Some(&rice), 3).unwrap().into_parts();

        assert_eq!(item.quantity(), 5);
        assert_eq!(cart.items().count(), 1);
        assert_eq!(cart.item(&rice.id()).unwrap().quantity(), 5);

        // The event carries the quantity added, not the running total.
        match &events[0] {
            CartEvent::ItemAddedToCart { quantity, .. } => assert_eq!(*quantity, 3),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_unit_price_is_captured_at_first_insertion() {
        let mut cart = create_cart();
        let rice = product("Arroz Blanco Gallo", 8.10);
        cart.add_item(Some(&rice), 1).unwrap();

        let repriced = rice.with_unit_price(Money::from_decimal(99.99).unwrap());
        let item = cart.add_item(Some(&repriced), 2).unwrap().value;

        assert_eq!(item.quantity(), 3);
        assert_eq!(item.unit_price(), Money::from_decimal(8.10).unwrap());
        assert_eq!(cart.total().unwrap(), Money::from_decimal(24.30).unwrap());
    }

    #[test]
    fn test_size_counts_quantities_not_lines() {
        let mut cart = create_cart();
        let rice = product("Arroz Blanco Gallo", 8.10);
        let beans = product("Porotos negros", 12.00);

        cart.add_item(Some(&rice), 1).unwrap();
        cart.add_item(Some(&rice), 2).unwrap();
        cart.add_item(Some(&beans), 2).unwrap();

        assert_eq!(cart.items().count(), 2);
        assert_eq!(cart.size(), 5);
    }

    #[test]
    fn test_total() {
        let mut cart = create_cart();
        let rice = product("Arroz Blanco Gallo", 8.10);
        let beans = product("Porotos negros", 12.00);

        cart.add_item(Some(&rice), 1).unwrap();
        cart.add_item(Some(&rice), 2).unwrap();
        cart.add_item(Some(&beans), 2).unwrap();

        assert_eq!(cart.total().unwrap(), Money::from_decimal(48.30).unwrap());
        assert_eq!(cart.total().unwrap().to_string(), "48.30");
    }

    #[test]
    fn test_quantity_overflow_is_rejected() {
        let mut cart = create_cart();
        let rice = product("Arroz Blanco Gallo", 1.00);
        cart.add_item(Some(&rice), i64::from(u32::MAX)).unwrap();

        let result = cart.add_item(Some(&rice), 1);
        assert_eq!(result.unwrap_err(), CartError::InvalidQuantity { quantity: 1 });
        assert_eq!(cart.size(), u64::from(u32::MAX));
    }

    #[test]
    fn test_line_total_overflow_is_rejected() {
        let mut cart = create_cart();
        let pricey = product("Departamento en Palermo", 30_000_000.00);

        let result = cart.add_item(Some(&pricey), 4_000_000_000);

        assert_eq!(result.unwrap_err(), CartError::TotalOverflow);
        assert!(cart.is_empty());
        assert!(cart.total().unwrap().is_zero());
    }

    #[test]
    fn test_merge_overflowing_line_total_is_rejected() {
        let mut cart = create_cart();
        let max_price = Product::new("Most expensive thing", Money::from_cents(i64::MAX))
            .unwrap()
            .value;
        cart.add_item(Some(&max_price), 1).unwrap();

        let result = cart.add_item(Some(&max_price), 1);

        assert_eq!(result.unwrap_err(), CartError::TotalOverflow);
        assert_eq!(cart.size(), 1);
        assert_eq!(cart.total().unwrap(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_cart_total_overflow_is_rejected() {
        let mut cart = create_cart();
        let half = Money::from_cents(i64::MAX / 2 + 1);
        let first = Product::new("First half of it", half).unwrap().value;
        let second = Product::new("Second half of it", half).unwrap().value;
        cart.add_item(Some(&first), 1).unwrap();

        let result = cart.add_item(Some(&second), 1);

        assert_eq!(result.unwrap_err(), CartError::TotalOverflow);
        assert_eq!(cart.items().count(), 1);
        assert_eq!(cart.total().unwrap(), half);
    }

    #[test]
    fn test_total_of_hand_built_cart_reports_overflow() {
        let product_id = ProductId::new();
        let json = format!(
            r#"{{"id":"{}","customer_id":"{}","items":{{"{product_id}":{{"product_id":"{product_id}","unit_price":1000000000.00,"quantity":4000000000}}}}}}"#,
            CartId::new(),
            CustomerId::new(),
        );
        let cart: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(cart.total().unwrap_err(), CartError::TotalOverflow);
    }

    #[test]
    fn test_serialization() {
        let mut cart = create_cart();
        let rice = product("Arroz Blanco Gallo", 8.10);
        cart.add_item(Some(&rice), 2).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        let deserialized: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, cart);
        assert_eq!(deserialized.total().unwrap().cents(), 1620);
    }
}

//! Cart line item.

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A line in a cart: one product, the price captured when it was first
/// added, and the accumulated quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    product_id: ProductId,
    unit_price: Money,
    quantity: u32,
}

impl Item {
    pub(crate) fn new(product_id: ProductId, unit_price: Money, quantity: u32) -> Self {
        Self {
            product_id,
            unit_price,
            quantity,
        }
    }

    /// Returns the product this line refers to.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the unit price captured at first insertion.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the accumulated quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `unit_price * quantity`, or `None` if it does not fit in [`Money`].
    pub fn total(&self) -> Option<Money> {
        self.unit_price.checked_mul(self.quantity)
    }

    /// Returns a copy with `quantity` added and the unit price untouched.
    pub(crate) fn with_added_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity: self.quantity + quantity,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_total() {
        let item = Item::new(ProductId::new(), Money::from_cents(810), 3);
        assert_eq!(item.total(), Some(Money::from_cents(2430)));
    }

    #[test]
    fn test_added_quantity_keeps_price() {
        let item = Item::new(ProductId::new(), Money::from_cents(810), 1);
        let merged = item.with_added_quantity(2);

        assert_eq!(merged.quantity(), 3);
        assert_eq!(merged.unit_price(), item.unit_price());
        assert_eq!(merged.product_id(), item.product_id());
    }
}

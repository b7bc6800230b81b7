//! Data transfer objects returned by the services.
//!
//! These are the shapes the HTTP layer serializes. Prices are written with
//! exactly two decimal places.

use common::{CartId, CustomerId, ProductId};
use domain::{Cart, CartError, Customer, Item, Money, Product};
use serde::{Deserialize, Serialize};

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: CustomerId,
    pub name: String,
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id(),
            name: customer.name().to_string(),
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Money,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            unit_price: product.unit_price(),
        }
    }
}

/// One line of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDto {
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: u32,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            product_id: item.product_id(),
            unit_price: item.unit_price(),
            quantity: item.quantity(),
        }
    }
}

/// A cart with all of its lines and computed totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartDto {
    pub id: CartId,
    pub customer_id: CustomerId,
    /// Lines ordered by product id so responses are stable.
    pub items: Vec<ItemDto>,
    /// Sum of all quantities.
    pub size: u64,
    /// Sum of `unit_price * quantity`.
    pub total: Money,
}

impl TryFrom<&Cart> for CartDto {
    type Error = CartError;

    fn try_from(cart: &Cart) -> Result<Self, Self::Error> {
        let mut items: Vec<ItemDto> = cart.items().map(ItemDto::from).collect();
        items.sort_by_key(|item| item.product_id);

        Ok(Self {
            id: cart.id(),
            customer_id: cart.customer_id(),
            items,
            size: cart.size(),
            total: cart.total()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_dto() {
        let customer = Customer::new("Grady Booch ").unwrap().value;
        let cart = Cart::create(Some(&customer)).unwrap().value;

        let dto = CartDto::try_from(&cart).unwrap();

        assert_eq!(dto.id, cart.id());
        assert_eq!(dto.customer_id, customer.id());
        assert!(dto.items.is_empty());
        assert_eq!(dto.size, 0);
        assert!(dto.total.is_zero());
    }

    #[test]
    fn cart_dto_json_shape() {
        let customer = Customer::new("Grady Booch").unwrap().value;
        let mut cart = Cart::create(Some(&customer)).unwrap().value;
        let book = Product::new("Implementing DDD Book", Money::from_cents(5000))
            .unwrap()
            .value;
        cart.add_item(Some(&book), 1).unwrap();

        let json = serde_json::to_string(&CartDto::try_from(&cart).unwrap()).unwrap();

        assert!(json.contains(&format!("\"id\":\"{}\"", cart.id())));
        assert!(json.contains(&format!("\"customer_id\":\"{}\"", customer.id())));
        assert!(json.contains(&format!(
            "\"items\":[{{\"product_id\":\"{}\",\"unit_price\":50.00,\"quantity\":1}}]",
            book.id()
        )));
        assert!(json.contains("\"total\":50.00"));
    }

    #[test]
    fn items_are_sorted_by_product_id() {
        let customer = Customer::new("Grady Booch").unwrap().value;
        let mut cart = Cart::create(Some(&customer)).unwrap().value;
        for i in 0..5 {
            let product = Product::new(&format!("Product number {i}"), Money::from_cents(100))
                .unwrap()
                .value;
            cart.add_item(Some(&product), 1).unwrap();
        }

        let dto = CartDto::try_from(&cart).unwrap();
        let ids: Vec<ProductId> = dto.items.iter().map(|i| i.product_id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn product_dto_round_trips_price() {
        let product = Product::new("Arroz yamani", Money::from_decimal(8.1).unwrap())
            .unwrap()
            .value;
        let json = serde_json::to_string(&ProductDto::from(&product)).unwrap();
        assert!(json.contains("\"unit_price\":8.10"));

        let back: ProductDto = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit_price, product.unit_price());
    }
}

//! Integration tests for the cart aggregate together with customers and
//! products, through the crate's public API only.

use domain::{
    Cart, CartError, CartEvent, Customer, CustomerError, CustomerEvent, DomainEvent, Money,
    Product, ProductError, ProductEvent,
};

fn customer() -> Customer {
    Customer::new("Grady Booch ").unwrap().value
}

fn product(name: &str, price: f64) -> Product {
    Product::new(name, Money::from_decimal(price).unwrap()).unwrap().value
}

mod factories {
    use super::*;

    #[test]
    fn customer_names() {
        for name in ["", "   ", "John"] {
            assert_eq!(Customer::new(name).unwrap_err(), CustomerError::InvalidName);
        }

        let recorded = Customer::new("  John Mayer  ").unwrap();
        assert_eq!(recorded.value.name(), "John Mayer");

        match &recorded.events[..] {
            [CustomerEvent::CustomerCreated {
                customer_id,
                customer_name,
                ..
            }] => {
                assert_eq!(*customer_id, recorded.value.id());
                assert_eq!(customer_name, "John Mayer");
            }
            other => panic!("unexpected events {other:?}"),
        }
    }

    #[test]
    fn product_arguments() {
        assert_eq!(
            Product::new("", Money::from_decimal(10.0).unwrap()).unwrap_err(),
            ProductError::InvalidArguments
        );
        assert_eq!(
            Product::new("Arroz yamani", Money::zero()).unwrap_err(),
            ProductError::InvalidArguments
        );

        let recorded = Product::new("Arroz yamani", Money::from_decimal(0.01).unwrap()).unwrap();
        assert_eq!(recorded.value.unit_price(), Money::from_cents(1));
        assert_eq!(recorded.events[0].event_type(), "ProductCreated");
        assert!(matches!(
            recorded.events[0],
            ProductEvent::ProductCreated { .. }
        ));
    }
}

mod cart_lifecycle {
    use super::*;

    #[test]
    fn fill_a_cart() {
        let owner = customer();
        let (mut cart, mut history) = Cart::create(Some(&owner)).unwrap().into_parts();

        let rice = product("Arroz yamani", 8.10);
        let cheese = product("Queso por salut", 12.0);

        history.extend(cart.add_item(Some(&rice), 1).unwrap().events);
        history.extend(cart.add_item(Some(&cheese), 2).unwrap().events);
        history.extend(cart.add_item(Some(&rice), 2).unwrap().events);

        assert_eq!(cart.customer_id(), owner.id());
        assert_eq!(cart.items().count(), 2);
        assert_eq!(cart.size(), 5);
        assert_eq!(cart.total().unwrap().to_string(), "48.30");

        let types: Vec<&str> = history.iter().map(DomainEvent::event_type).collect();
        assert_eq!(
            types,
            vec!["CartCreated", "ItemAddedToCart", "ItemAddedToCart", "ItemAddedToCart"]
        );
        assert!(history.iter().all(|e| e.cart_id() == cart.id()));
        assert!(
            history
                .iter()
                .all(|e| e.aggregate_id() == cart.id().as_uuid())
        );
    }

    #[test]
    fn failed_additions_leave_the_cart_untouched() {
        let mut cart = Cart::create(Some(&customer())).unwrap().value;
        let rice = product("Arroz yamani", 8.10);
        cart.add_item(Some(&rice), 1).unwrap();
        let before = cart.clone();

        assert_eq!(
            cart.add_item(None, 3).unwrap_err(),
            CartError::InvalidProduct
        );
        assert_eq!(
            cart.add_item(Some(&rice), 0).unwrap_err(),
            CartError::InvalidQuantity { quantity: 0 }
        );

        assert_eq!(cart, before);
    }

    #[test]
    fn huge_prices_and_quantities_never_break_the_total() {
        assert_eq!(Money::from_decimal(1e300), None);

        let mut cart = Cart::create(Some(&customer())).unwrap().value;
        let pricey = product("Departamento en Palermo", 30_000_000.00);
        let max_price = Product::new("Most expensive thing", Money::from_cents(i64::MAX))
            .unwrap()
            .value;

        assert_eq!(
            cart.add_item(Some(&pricey), 4_000_000_000).unwrap_err(),
            CartError::TotalOverflow
        );
        cart.add_item(Some(&max_price), 1).unwrap();
        assert_eq!(
            cart.add_item(Some(&max_price), 2).unwrap_err(),
            CartError::TotalOverflow
        );
        assert_eq!(
            cart.add_item(Some(&pricey), 1).unwrap_err(),
            CartError::TotalOverflow
        );

        assert_eq!(cart.size(), 1);
        assert_eq!(cart.total().unwrap(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn persisted_shape_survives_json() {
        let mut cart = Cart::create(Some(&customer())).unwrap().value;
        cart.add_item(Some(&product("Implementing DDD Book", 50.0)), 1)
            .unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, cart);
        assert_eq!(restored.total().unwrap(), Money::from_cents(5000));
    }

    #[test]
    fn events_survive_json() {
        let mut cart = Cart::create(Some(&customer())).unwrap().value;
        let event = cart
            .add_item(Some(&product("Implementing DDD Book", 50.0)), 3)
            .unwrap()
            .events
            .remove(0);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "ItemAddedToCart");
        assert_eq!(json["data"]["quantity"], 3);

        let decoded: CartEvent = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, event);
    }
}

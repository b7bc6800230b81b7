//! Shared application state.

use std::sync::Arc;

use application::{CartService, CustomerService, ProductService};
use store::{
    InMemoryCartRepository, InMemoryCustomerRepository, InMemoryEventLog,
    InMemoryProductRepository,
};

/// Services and stores accessible from all handlers.
pub struct AppState {
    pub customers: CustomerService,
    pub products: ProductService,
    pub carts: CartService,
    pub events: InMemoryEventLog,
}

impl AppState {
    /// Wires the services to fresh in-memory repositories and event log.
    pub fn in_memory() -> Self {
        let stores = InMemoryStores::default();
        Self::from_stores(&stores)
    }

    /// Wires the services to the given stores.
    ///
    /// Tests keep the stores to inspect or fault them afterwards.
    pub fn from_stores(stores: &InMemoryStores) -> Self {
        let customers = Arc::new(stores.customers.clone());
        let products = Arc::new(stores.products.clone());
        let carts = Arc::new(stores.carts.clone());
        let events = Arc::new(stores.events.clone());

        Self {
            customers: CustomerService::new(customers.clone(), events.clone()),
            products: ProductService::new(products.clone(), events.clone()),
            carts: CartService::new(carts, customers, products, events),
            events: stores.events.clone(),
        }
    }
}

/// The in-memory stores backing an [`AppState`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStores {
    pub customers: InMemoryCustomerRepository,
    pub products: InMemoryProductRepository,
    pub carts: InMemoryCartRepository,
    pub events: InMemoryEventLog,
}

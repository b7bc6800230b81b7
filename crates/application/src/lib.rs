//! Application layer for the shopping cart backend.
//!
//! Each service wires one use case to the repositories it needs:
//! - `CustomerService` registers customers
//! - `ProductService` adds products to the catalog
//! - `CartService` opens carts and adds items to them
//!
//! Services return DTOs, never entities, and publish the domain events the
//! entities raise once the change has been saved.

pub mod cart;
pub mod commands;
pub mod customer;
pub mod dto;
pub mod error;
pub mod locks;
pub mod product;

mod publish;

pub use cart::CartService;
pub use commands::{AddItemToCart, CreateCart, CreateCustomer, CreateProduct};
pub use customer::CustomerService;
pub use dto::{CartDto, CustomerDto, ItemDto, ProductDto};
pub use error::{ApplicationError, Result};
pub use locks::CartLocks;
pub use product::ProductService;

//! Shared types used across the shopping cart crates.

pub mod types;

pub use types::{CartId, CustomerId, ProductId};

//! In-memory customer repository.

use async_trait::async_trait;
use common::CustomerId;
use domain::repository::Result;
use domain::{Customer, CustomerRepository};

use crate::table::Table;

/// In-memory customer repository.
///
/// Cloning is cheap and every clone shares the same storage.
#[derive(Debug, Clone)]
pub struct InMemoryCustomerRepository {
    customers: Table<CustomerId, Customer>,
}

impl InMemoryCustomerRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            customers: Table::new("customer"),
        }
    }

    /// Returns the number of stored customers.
    pub async fn len(&self) -> usize {
        self.customers.len().await
    }

    /// Makes every subsequent `save` fail until switched back off.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.customers.set_fail_on_save(fail);
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> Result<Customer> {
        self.customers.get(id).await
    }

    async fn save(&self, customer: &Customer) -> Result<()> {
        self.customers.upsert(customer.id(), customer.clone()).await
    }
}

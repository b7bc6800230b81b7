//! Customer registration.

use std::sync::Arc;

use common::CustomerId;
use domain::{Customer, CustomerRepository};
use store::EventPublisher;

use crate::commands::CreateCustomer;
use crate::dto::CustomerDto;
use crate::error::Result;
use crate::publish::publish_events;

/// Service for registering and looking up customers.
#[derive(Clone)]
pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
    events: Arc<dyn EventPublisher>,
}

impl CustomerService {
    /// Creates a new customer service.
    pub fn new(customers: Arc<dyn CustomerRepository>, events: Arc<dyn EventPublisher>) -> Self {
        Self { customers, events }
    }

    /// Registers a new customer.
    #[tracing::instrument(skip(self))]
    pub async fn create_customer(&self, cmd: CreateCustomer) -> Result<CustomerDto> {
        let (customer, events) = Customer::new(&cmd.customer_name)?.into_parts();

        self.customers.save(&customer).await?;
        publish_events(self.events.as_ref(), &events).await;

        metrics::counter!("customers_created_total").increment(1);
        tracing::info!(customer_id = %customer.id(), "customer created");
        Ok(CustomerDto::from(&customer))
    }

    /// Looks up a customer by id.
    #[tracing::instrument(skip(self))]
    pub async fn get_customer(&self, customer_id: CustomerId) -> Result<CustomerDto> {
        let customer = self.customers.find_by_id(customer_id).await?;
        Ok(CustomerDto::from(&customer))
    }
}

//! Customer endpoints.

use std::sync::Arc;

use application::{CartDto, CreateCustomer, CustomerDto};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::CustomerId;
use domain::customer::MIN_NAME_LEN;
use serde::Deserialize;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::Validator;

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub customer_name: Option<String>,
}

/// POST /customers: register a customer.
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerDto>), ApiError> {
    let mut v = Validator::new();
    let name = v.text("customer_name", req.customer_name, MIN_NAME_LEN);
    let name = v.finish(name)?;

    let customer = state
        .customers
        .create_customer(CreateCustomer::new(name))
        .await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /customers/{id}
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CustomerDto>, ApiError> {
    let customer_id: CustomerId = parse_id(&id)?;
    Ok(Json(state.customers.get_customer(customer_id).await?))
}

/// GET /customers/{id}/carts: every cart the customer has opened.
#[tracing::instrument(skip(state))]
pub async fn carts(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CartDto>>, ApiError> {
    let customer_id: CustomerId = parse_id(&id)?;
    Ok(Json(state.carts.customer_carts(customer_id).await?))
}

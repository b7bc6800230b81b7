//! Cart endpoints.

use std::sync::Arc;

use application::{AddItemToCart, CartDto, CreateCart};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{CartId, CustomerId, ProductId};
use serde::{Deserialize, Serialize};
use store::EventEnvelope;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::Validator;

#[derive(Debug, Deserialize)]
pub struct CreateCartRequest {
    pub customer_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
}

/// A recorded cart event as returned by `/carts/{id}/events`.
#[derive(Serialize)]
pub struct EventEnvelopeResponse {
    pub event_id: String,
    pub event_type: String,
    pub aggregate_id: String,
    pub sequence: u64,
    pub timestamp: String,
    pub payload: serde_json::Value,
}

impl From<EventEnvelope> for EventEnvelopeResponse {
    fn from(e: EventEnvelope) -> Self {
        Self {
            event_id: e.event_id.to_string(),
            event_type: e.event_type,
            aggregate_id: e.aggregate_id.to_string(),
            sequence: e.sequence,
            timestamp: e.timestamp.to_rfc3339(),
            payload: e.payload,
        }
    }
}

/// POST /carts: open an empty cart for a customer.
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCartRequest>,
) -> Result<(StatusCode, Json<CartDto>), ApiError> {
    let mut v = Validator::new();
    let customer_id: Option<CustomerId> = v.id("customer_id", req.customer_id);
    let customer_id = v.finish(customer_id)?;

    let cart = state
        .carts
        .create_new_cart(CreateCart::new(customer_id))
        .await?;

    Ok((StatusCode::CREATED, Json(cart)))
}

/// POST /carts/{cart_id}: add a product and quantity to a cart.
#[tracing::instrument(skip(state))]
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    Path(cart_id): Path<String>,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<CartDto>, ApiError> {
    let mut v = Validator::new();
    let cart_id: Option<CartId> = v.id("cart_id", Some(cart_id));
    let product_id: Option<ProductId> = v.id("product_id", req.product_id);
    let quantity = v.positive("quantity", req.quantity, 0);
    let ((cart_id, product_id), quantity) = v.finish(cart_id.zip(product_id).zip(quantity))?;

    let cart = state
        .carts
        .add_item_to_cart(AddItemToCart::new(cart_id, product_id, quantity))
        .await?;

    Ok(Json(cart))
}

/// GET /carts/{id}
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CartDto>, ApiError> {
    let cart_id: CartId = parse_id(&id)?;
    Ok(Json(state.carts.get_cart(cart_id).await?))
}

/// GET /carts/{id}/events: the cart's event history in append order.
#[tracing::instrument(skip(state))]
pub async fn events(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<EventEnvelopeResponse>>, ApiError> {
    let cart_id: CartId = parse_id(&id)?;

    let events = state
        .events
        .events_for(cart_id.as_uuid())
        .await
        .into_iter()
        .map(EventEnvelopeResponse::from)
        .collect();

    Ok(Json(events))
}

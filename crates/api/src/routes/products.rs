//! Product catalog endpoints.

use std::sync::Arc;

use application::{CreateProduct, ProductDto};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::ProductId;
use domain::product::MIN_NAME_LEN;
use serde::Deserialize;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::Validator;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub product_name: Option<String>,
    pub unit_price: Option<f64>,
}

/// POST /products: add a product to the catalog.
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    let mut v = Validator::new();
    let name = v.text("product_name", req.product_name, MIN_NAME_LEN);
    let price = v.price("unit_price", req.unit_price);
    let (name, price) = v.finish(name.zip(price))?;

    let product = state
        .products
        .create_product(CreateProduct::new(name, price))
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products/{id}
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProductDto>, ApiError> {
    let product_id: ProductId = parse_id(&id)?;
    Ok(Json(state.products.get_product(product_id).await?))
}

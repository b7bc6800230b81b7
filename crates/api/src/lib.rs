//! HTTP API server with observability for the shopping cart backend.
//!
//! Provides REST endpoints for customers, products and carts, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod validation;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::{AppState, InMemoryStores};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/customers", post(routes::customers::create))
        .route("/customers/{id}", get(routes::customers::get))
        .route("/customers/{id}/carts", get(routes::customers::carts))
        .route("/products", post(routes::products::create))
        .route("/products/{id}", get(routes::products::get))
        .route("/carts", post(routes::carts::create))
        .route(
            "/carts/{id}",
            get(routes::carts::get).post(routes::carts::add_item),
        )
        .route("/carts/{id}/events", get(routes::carts::events))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by in-memory stores.
pub fn create_default_state() -> Arc<AppState> {
    Arc::new(AppState::in_memory())
}

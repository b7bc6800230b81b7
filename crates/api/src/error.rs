//! API error types with HTTP response mapping.

use application::ApplicationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// One rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub error: String,
}

impl FieldError {
    pub fn new(field: &'static str, error: impl Into<String>) -> Self {
        Self {
            field,
            error: error.into(),
        }
    }
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    message: &'static str,
    validation_errors: &'a [FieldError],
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// One or more request fields failed validation.
    Validation(Vec<FieldError>),
    /// Bad request from the client.
    BadRequest(String),
    /// Error returned by an application service.
    Application(ApplicationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(errors) => {
                let body = ValidationBody {
                    message: "there were validation errors",
                    validation_errors: &errors,
                };
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Application(err) => application_error_to_response(err),
        };

        let body = serde_json::json!({ "message": message });
        (status, Json(body)).into_response()
    }
}

fn application_error_to_response(err: ApplicationError) -> (StatusCode, String) {
    match &err {
        ApplicationError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        _ if err.is_invariant_violation() => (StatusCode::BAD_REQUEST, err.to_string()),
        _ => {
            tracing::error!(error = %err, "application error");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError::Application(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{CartError, RepositoryError};

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let err = ApplicationError::from(RepositoryError::not_found("cart", "abc"));
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "message": "cart with id abc not found" }));
    }

    #[tokio::test]
    async fn invariant_violation_maps_to_400() {
        let err = ApplicationError::from(CartError::InvalidProduct);
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "invalid product");
    }

    #[tokio::test]
    async fn repository_failure_maps_to_500() {
        let err = ApplicationError::from(RepositoryError::Unavailable("down".to_string()));
        let (status, _) = render(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn validation_body_shape() {
        let err = ApiError::Validation(vec![FieldError::new(
            "quantity",
            "quantity must be greater than 0",
        )]);
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({
                "message": "there were validation errors",
                "validation_errors": [
                    { "field": "quantity", "error": "quantity must be greater than 0" }
                ]
            })
        );
    }
}

//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use vitrine_commerce::validate::FieldError;
use vitrine_commerce::CommerceError;

/// An error surfaced to the HTTP client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or invalid request (400).
    #[error("{message}")]
    BadRequest {
        message: String,
        details: Option<Vec<FieldError>>,
    },

    /// Unknown resource (404).
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure (500). The message is a generic public string;
    /// internals go to the log, never to the client.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// A 400 without field detail.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            details: None,
        }
    }

    /// A 400 carrying field-level validation detail.
    pub fn validation(message: impl Into<String>, details: Vec<FieldError>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            details: Some(details),
        }
    }

    /// A 404 for an unknown resource.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// A 500 with a generic public message.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<CommerceError> for ApiError {
    fn from(err: CommerceError) -> Self {
        match err {
            // The offending id/value stays out of the response body.
            CommerceError::ProductNotFound(_) => ApiError::not_found("Product not found"),
            CommerceError::OrderNotFound(_) => ApiError::not_found("Order not found"),
            CommerceError::InvalidStatus(_) => ApiError::bad_request("Invalid status"),
        }
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<FieldError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest { message, details } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    details,
                },
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: message,
                    details: None,
                },
            ),
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: message,
                        details: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_details() {
        let err = ApiError::validation(
            "Invalid order data",
            vec![FieldError::new("customerEmail", "Required")],
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::not_found("Product not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = ApiError::internal("Failed to fetch products").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_domain_errors_map_without_leaking_values() {
        let err: ApiError = CommerceError::ProductNotFound("secret-id".to_string()).into();
        match err {
            ApiError::NotFound(message) => assert_eq!(message, "Product not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }

        let err: ApiError = CommerceError::InvalidStatus("shipped".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest { details: None, .. }));
    }
}

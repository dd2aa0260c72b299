use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::fulfillment::FulfillmentError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<FulfillmentError> for AppError {
    fn from(err: FulfillmentError) -> Self {
        match err {
            FulfillmentError::InvalidOrder(quantity) => {
                AppError::InvalidOrder(format!("order quantity must not be negative, got {quantity}"))
            }
            FulfillmentError::Configuration(msg) => AppError::Configuration(msg),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidSize(_) => AppError::Validation(err.to_string()),
            CatalogError::AlreadyExists(_) => AppError::Conflict(err.to_string()),
            CatalogError::NotFound(_) => AppError::NotFound(err.to_string()),
            CatalogError::Empty(_) => AppError::Configuration(err.to_string()),
            CatalogError::Io(_) | CatalogError::Format(_) => AppError::Storage(err.to_string()),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::InvalidOrder(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Configuration(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => ("CONFLICT", msg.clone()),
            AppError::InvalidOrder(msg) => ("INVALID_ORDER", msg.clone()),
            AppError::Configuration(msg) => {
                tracing::warn!("Configuration error: {msg}");
                ("CONFIGURATION_ERROR", msg.clone())
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (
                    "STORAGE_ERROR",
                    "The pack size catalog could not be saved".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fulfillment_errors_map_to_client_statuses() {
        let invalid: AppError = FulfillmentError::InvalidOrder(-3).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert!(invalid.to_string().contains("-3"));

        let config: AppError = FulfillmentError::Configuration("empty".into()).into();
        assert_eq!(config.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_catalog_errors_map_to_statuses() {
        assert_eq!(AppError::from(CatalogError::InvalidSize(0)).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::from(CatalogError::AlreadyExists(250)).status(), StatusCode::CONFLICT);
        assert_eq!(AppError::from(CatalogError::NotFound(7)).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::from(CatalogError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full"
            )))
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_status_matches_error() {
        let response = AppError::Conflict("dup".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}

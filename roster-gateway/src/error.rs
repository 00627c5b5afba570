//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RegistryError;
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An error propagated from the registry layer.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Registry(RegistryError::ActivityNotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            GatewayError::Registry(
                RegistryError::AlreadySignedUp { .. } | RegistryError::NotSignedUp { .. },
            ) => StatusCode::BAD_REQUEST,
            // RegistryError is non_exhaustive upstream.
            GatewayError::Registry(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}

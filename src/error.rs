//! Error types for the gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Gateway Error Enum ==
/// Unified error type for the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Invalid or missing configuration at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream request could not be sent or timed out
    #[error("Upstream request failed: {0}")]
    UpstreamRequest(#[from] reqwest::Error),

    /// Upstream responded with a non-success status code
    #[error("Upstream returned status {status} for {path}")]
    UpstreamStatus { status: u16, path: String },

    /// Upstream body could not be decoded
    #[error("Upstream returned malformed payload: {0}")]
    UpstreamDecode(#[from] serde_json::Error),

    /// Metrics registry failure
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

// == IntoResponse Implementation ==
/// All runtime failures surface to clients as a uniform 500 response.
/// Context is logged at the failure site, never leaked to the caller.
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new("Internal Server Error"));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;

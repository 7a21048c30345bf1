//! Response DTOs for the gateway API
//!
//! Movie payloads are opaque JSON passed through from upstream; only the
//! gateway's own responses have a fixed shape.

use serde::Serialize;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status message
    pub status: String,
}

impl HealthResponse {
    /// Creates the canonical healthy response.
    pub fn healthy() -> Self {
        Self {
            status: "OK, backend is running".to_string(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"status":"OK, backend is running"}"#);
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Internal Server Error");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Internal Server Error"));
    }
}

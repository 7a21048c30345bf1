//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query parameters for GET /movies/trending.
///
/// The window is kept as a raw string here; coercion to a supported value
/// happens in the handler, so an unknown window is never an error.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingQuery {
    /// Trending time window, `day` or `week`
    #[serde(default)]
    pub window: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_query_deserialize() {
        let query: TrendingQuery = serde_json::from_str(r#"{"window": "week"}"#).unwrap();
        assert_eq!(query.window.as_deref(), Some("week"));
    }

    #[test]
    fn test_trending_query_missing_window() {
        let query: TrendingQuery = serde_json::from_str("{}").unwrap();
        assert!(query.window.is_none());
    }
}

//! Upstream Client Module
//!
//! A single HTTP client bound to the TMDB API base URL. The credential and
//! language are injected into every call; callers only supply the path and
//! any extra query parameters.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{GatewayError, Result};

// == TMDB Client ==
/// Capability handle for the upstream movie-catalog API.
///
/// Carries an explicit per-call timeout so a slow upstream cannot hold a
/// request slot indefinitely. Failed calls are never retried.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    // == Constructor ==
    /// Creates a new client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout))
            .build()?;

        Ok(Self {
            http,
            base_url: config.tmdb_base_url.trim_end_matches('/').to_string(),
            api_key: config.tmdb_token.clone(),
        })
    }

    // == Call ==
    /// Issues one GET request against the upstream API.
    ///
    /// Returns the decoded JSON body, or an upstream error if the request
    /// could not be sent, timed out, or came back with a non-success status.
    pub async fn call(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Calling upstream");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
            ])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response.json::<Value>().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_config() {
        let config = Config::default();
        let client = TmdbClient::new(&config).unwrap();

        assert_eq!(client.base_url, "https://api.themoviedb.org/3");
        assert_eq!(client.api_key, "test-token");
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = Config {
            tmdb_base_url: "http://localhost:9999/".to_string(),
            ..Config::default()
        };
        let client = TmdbClient::new(&config).unwrap();

        assert_eq!(client.base_url, "http://localhost:9999");
    }
}

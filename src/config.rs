//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::error::{GatewayError, Result};

/// Default TMDB API base URL.
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Server configuration parameters.
///
/// `TMDB_TOKEN` is required; everything else has a sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    /// TMDB API credential, injected into every upstream call
    pub tmdb_token: String,
    /// Base URL of the upstream TMDB API
    pub tmdb_base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Cache TTL in seconds for stored responses
    pub cache_ttl: u64,
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Per-call timeout in seconds for upstream requests
    pub upstream_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Fails if `TMDB_TOKEN` is absent or empty; the process must refuse to
    /// start without a credential.
    ///
    /// # Environment Variables
    /// - `TMDB_TOKEN` - TMDB API credential (required)
    /// - `TMDB_BASE_URL` - Upstream base URL (default: TMDB v3 API)
    /// - `PORT` - HTTP server port (default: 5050)
    /// - `CACHE_TTL` - Response TTL in seconds (default: 60)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 30)
    /// - `UPSTREAM_TIMEOUT` - Upstream call timeout in seconds (default: 10)
    pub fn from_env() -> Result<Self> {
        let tmdb_token = env::var("TMDB_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                GatewayError::Config("TMDB_TOKEN is not set in environment variables".to_string())
            })?;

        Ok(Self {
            tmdb_token,
            tmdb_base_url: env::var("TMDB_BASE_URL")
                .ok()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string()),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5050),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            upstream_timeout: env::var("UPSTREAM_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_token: "test-token".to_string(),
            tmdb_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            server_port: 5050,
            cache_ttl: 60,
            max_entries: 1000,
            cleanup_interval: 30,
            upstream_timeout: 10,
        }
    }
}

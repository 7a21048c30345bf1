//! Movie Gateway - A caching aggregation layer for the TMDB catalog API
//!
//! Exposes simplified movie endpoints backed by a TTL response cache,
//! multi-page upstream aggregation, and Prometheus instrumentation.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod tasks;
pub mod tmdb;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;

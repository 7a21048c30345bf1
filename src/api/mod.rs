//! API Module
//!
//! HTTP handlers and routing for the gateway's REST API.
//!
//! # Endpoints
//! - `GET /movies/trending` - Trending movies aggregated across upstream pages
//! - `GET /movies/:id` - Single movie details
//! - `GET /metrics` - Prometheus text exposition
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

//! API Module
//!
//! Demo HTTP endpoints served behind the cache header stages.
//!
//! # Endpoints
//! - `GET /` - Index page
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

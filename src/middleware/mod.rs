//! Middleware Module
//!
//! The two cache header stages as axum middleware.
//!
//! # Stages
//! - Validation: `Last-Modified` / `ETag`, answers conditional GETs with 304
//! - Freshness: `Cache-Control` / `Expires`

mod freshness;
mod validation;

pub use freshness::{freshness_middleware, patch_cache_control, FreshnessStage};
pub use validation::{validation_middleware, ValidationStage};

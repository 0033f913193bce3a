//! Last Modified - freshness and validation cache headers for axum
//!
//! Adds `Cache-Control` / `Expires` to responses and answers conditional
//! requests from `Last-Modified` / `ETag` validators.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod pipeline;
pub mod resolver;
pub mod validators;

pub use auth::{Anonymous, AuthenticatedUser, AuthenticationCheck, ExtensionAuth};
pub use config::Config;
pub use error::{CacheHeaderError, ResolverError};
pub use pipeline::{CacheHeaders, CacheHeadersBuilder};
pub use resolver::{FileMtimeResolver, FixedResolver, LastModifiedResolver};
pub use validators::LastModifiedValue;

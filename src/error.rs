//! Error types for the cache header stages
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Resolver Error ==
/// Failure reported by a [`LastModifiedResolver`](crate::resolver::LastModifiedResolver).
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ResolverError(pub String);

impl ResolverError {
    /// Creates a new ResolverError from any displayable message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl From<std::io::Error> for ResolverError {
    fn from(err: std::io::Error) -> Self {
        Self(err.to_string())
    }
}

// == Cache Header Error Enum ==
/// Unified error type for the cache header stages.
#[derive(Error, Debug)]
pub enum CacheHeaderError {
    /// Validation stage enabled but no resolver was supplied
    #[error("Improperly configured: validation stage enabled without a last-modified resolver")]
    MissingResolver,

    /// The last-modified resolver failed for this request
    #[error("Last-modified resolver failed: {0}")]
    Resolver(#[from] ResolverError),

    /// A max-age so large that `Expires` cannot be written as an HTTP date
    #[error("Improperly configured: max-age {0} puts Expires past the year 9999")]
    InvalidMaxAge(u64),

    /// A timestamp outside years 0001 through 9999
    #[error("Timestamp {0} cannot be represented as an HTTP date")]
    InvalidTimestamp(i64),

    /// A derived value could not be encoded as a header value
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheHeaderError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string()
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache header stages.
pub type Result<T> = std::result::Result<T, CacheHeaderError>;

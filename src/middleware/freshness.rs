//! Freshness Stage
//!
//! Adds `Cache-Control` and `Expires` to every response. `max_age` tells
//! browsers how long they may reuse their copy without asking the origin,
//! `shared_max_age` does the same for shared caches. `Expires` is kept for
//! HTTP/1.0 caches.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::config::Config;
use crate::error::{CacheHeaderError, Result};
use crate::validators::{format_http_date, now, Timestamp, MAX_HTTP_TIMESTAMP};

/// Response stage for `Cache-Control` and `Expires`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessStage {
    max_age: u64,
    shared_max_age: u64,
}

impl FreshnessStage {
    /// Creates a new FreshnessStage with the given lifetimes in seconds.
    pub fn new(max_age: u64, shared_max_age: u64) -> Self {
        Self {
            max_age,
            shared_max_age,
        }
    }

    /// Creates a new FreshnessStage from the configured lifetimes.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_age, config.shared_max_age)
    }

    /// Returns the `max-age` directive value in seconds.
    pub fn max_age(&self) -> u64 {
        self.max_age
    }

    /// Returns the `s-maxage` directive value in seconds.
    pub fn shared_max_age(&self) -> u64 {
        self.shared_max_age
    }

    /// Checks that `Expires` for a response sent now is a four-digit-year date.
    ///
    /// Fails with `InvalidMaxAge` otherwise.
    pub fn validate(&self) -> Result<()> {
        let lifetime = i64::try_from(self.max_age).map_err(|_| self.invalid())?;
        match now().checked_add(lifetime) {
            Some(expires) if expires <= MAX_HTTP_TIMESTAMP => Ok(()),
            _ => Err(self.invalid()),
        }
    }

    /// `Expires` instant for a response sent at `sent`, capped at the last
    /// second of year 9999.
    pub fn expires_at(&self, sent: Timestamp) -> Timestamp {
        let lifetime = i64::try_from(self.max_age).unwrap_or(i64::MAX);
        sent.saturating_add(lifetime).min(MAX_HTTP_TIMESTAMP)
    }

    fn invalid(&self) -> CacheHeaderError {
        CacheHeaderError::InvalidMaxAge(self.max_age)
    }

    /// Merges the freshness directives into `Cache-Control` and sets `Expires`.
    pub fn stamp(&self, headers: &mut HeaderMap) -> Result<()> {
        let existing = headers
            .get_all(header::CACHE_CONTROL)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join(", ");

        let cache_control = patch_cache_control(&existing, self.max_age, self.shared_max_age);
        let expires = format_http_date(self.expires_at(now()))?;

        headers.insert(header::CACHE_CONTROL, to_header_value(&cache_control)?);
        headers.insert(header::EXPIRES, to_header_value(&expires)?);
        Ok(())
    }
}

fn to_header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| CacheHeaderError::InvalidHeader(e.to_string()))
}

/// Replaces `max-age` and `s-maxage` in a Cache-Control value, keeping every
/// other directive in its original order.
pub fn patch_cache_control(existing: &str, max_age: u64, shared_max_age: u64) -> String {
    let mut directives: Vec<String> = existing
        .split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .filter(|directive| {
            let name = directive.split('=').next().unwrap_or_default().trim();
            !name.eq_ignore_ascii_case("max-age") && !name.eq_ignore_ascii_case("s-maxage")
        })
        .map(str::to_owned)
        .collect();

    directives.push(format!("max-age={max_age}"));
    directives.push(format!("s-maxage={shared_max_age}"));
    directives.join(", ")
}

/// Axum middleware stamping freshness headers on the way out.
pub async fn freshness_middleware(
    State(stage): State<FreshnessStage>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let mut response = next.run(request).await;
    stage.stamp(response.headers_mut()).inspect_err(|e| {
        error!("Freshness stage failed: {}", e);
    })?;

    Ok(response)
}

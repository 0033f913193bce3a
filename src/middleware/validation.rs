//! Validation Stage
//!
//! Answers conditional requests with `304 Not Modified` before the handler
//! runs, and stamps `Last-Modified` / `ETag` on responses it lets through.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::auth::AuthenticationCheck;
use crate::error::{CacheHeaderError, Result};
use crate::resolver::LastModifiedResolver;
use crate::validators::{
    derive_validators, normalize, should_short_circuit, ConditionalHeaders, Validators,
};

/// Request/response stage for `Last-Modified` and `ETag`.
///
/// Cheap to clone; the resolver and auth check are shared.
#[derive(Clone)]
pub struct ValidationStage {
    resolver: Arc<dyn LastModifiedResolver>,
    auth: Arc<dyn AuthenticationCheck>,
}

impl ValidationStage {
    /// Creates a new ValidationStage from a resolver and an auth check.
    pub fn new(
        resolver: Arc<dyn LastModifiedResolver>,
        auth: Arc<dyn AuthenticationCheck>,
    ) -> Self {
        Self { resolver, auth }
    }

    /// Asks the resolver for the current instant and derives fresh validators.
    pub fn current_validators(&self) -> Result<Validators> {
        let value = self.resolver.last_modified()?;
        derive_validators(normalize(value)?)
    }

    /// Request phase. Returns true when the client's copy is still valid.
    pub fn is_not_modified(&self, request: &Request) -> Result<bool> {
        let validators = self.current_validators()?;
        let conditional = ConditionalHeaders::from_headers(request.headers());
        let authenticated = self.auth.is_authenticated(request);

        let not_modified = should_short_circuit(&conditional, &validators, authenticated);
        debug!(
            last_modified = %validators.last_modified_header,
            etag = %validators.etag,
            authenticated,
            not_modified,
            "Conditional request check"
        );

        Ok(not_modified)
    }

    /// Response phase. Re-resolves the validators and sets both headers.
    pub fn stamp(&self, headers: &mut HeaderMap) -> Result<()> {
        let validators = self.current_validators()?;

        headers.insert(
            header::LAST_MODIFIED,
            to_header_value(&validators.last_modified_header)?,
        );
        headers.insert(header::ETAG, to_header_value(&validators.etag)?);
        Ok(())
    }
}

impl std::fmt::Debug for ValidationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationStage").finish_non_exhaustive()
    }
}

fn to_header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| CacheHeaderError::InvalidHeader(e.to_string()))
}

/// Axum middleware running the validation stage around the handler.
pub async fn validation_middleware(
    State(stage): State<ValidationStage>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let not_modified = stage.is_not_modified(&request).inspect_err(|e| {
        error!("Validation stage failed before {}: {}", request.uri(), e);
    })?;

    if not_modified {
        debug!("Not modified: {}", request.uri());
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let mut response = next.run(request).await;
    stage.stamp(response.headers_mut()).inspect_err(|e| {
        error!("Validation stage failed stamping response: {}", e);
    })?;

    Ok(response)
}

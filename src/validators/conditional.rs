//! Conditional Comparator
//!
//! Decides whether a conditional GET can be answered with `304 Not Modified`.

use axum::http::{header, HeaderMap};

use super::derive::Validators;
use super::http_date::parse_http_date;

// == Conditional Headers ==
/// Conditional-request headers sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalHeaders {
    /// Raw `If-Modified-Since` value
    pub if_modified_since: Option<String>,
    /// Raw `If-None-Match` value
    pub if_none_match: Option<String>,
}

impl ConditionalHeaders {
    /// Reads the conditional headers from a request.
    ///
    /// Values that are not valid visible ASCII are treated as absent.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };

        Self {
            if_modified_since: read(header::IF_MODIFIED_SINCE),
            if_none_match: read(header::IF_NONE_MATCH),
        }
    }

    /// True if neither header was sent.
    pub fn is_empty(&self) -> bool {
        self.if_modified_since.is_none() && self.if_none_match.is_none()
    }

    /// `If-Modified-Since` matches when the resource is no newer than the
    /// client's date. Equal counts as not modified.
    pub fn modified_since_matches(&self, last_modified: i64) -> bool {
        self.if_modified_since
            .as_deref()
            .and_then(parse_http_date)
            .is_some_and(|since| last_modified <= since)
    }

    /// `If-None-Match` matches on exact string equality only.
    pub fn none_match_matches(&self, etag: &str) -> bool {
        self.if_none_match.as_deref() == Some(etag)
    }
}

/// Returns true when the request should be answered with 304.
///
/// Authenticated requests always get a full response.
pub fn should_short_circuit(
    conditional: &ConditionalHeaders,
    validators: &Validators,
    is_authenticated: bool,
) -> bool {
    if is_authenticated || conditional.is_empty() {
        return false;
    }

    conditional.modified_since_matches(validators.last_modified)
        || conditional.none_match_matches(&validators.etag)
}

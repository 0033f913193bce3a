//! Validator Derivation
//!
//! Builds the `Last-Modified` / `ETag` pair for a last-modification instant.

use md5::{Digest, Md5};

use super::http_date::format_http_date;
use super::time::Timestamp;
use crate::error::Result;

// == Validators ==
/// Validator pair for one request. Never cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validators {
    /// Last-modification instant the pair was derived from
    pub last_modified: Timestamp,
    /// `Last-Modified` header value
    pub last_modified_header: String,
    /// `ETag` header value, quotes included
    pub etag: String,
}

/// Derives both validators from an instant.
///
/// The ETag is the MD5 of the formatted date, not of the instant, so any two
/// instants that format identically share an ETag.
pub fn derive_validators(instant: Timestamp) -> Result<Validators> {
    let last_modified_header = format_http_date(instant)?;
    let etag = etag_for(&last_modified_header);

    Ok(Validators {
        last_modified: instant,
        last_modified_header,
        etag,
    })
}

/// Quoted lowercase-hex MD5 of an HTTP date string.
pub fn etag_for(http_date: &str) -> String {
    let digest = Md5::digest(http_date.as_bytes());
    format!("\"{digest:x}\"")
}

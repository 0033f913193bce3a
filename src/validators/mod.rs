//! Validators Module
//!
//! Derives `Last-Modified` / `ETag` validators and compares them against
//! conditional-request headers.

mod conditional;
mod derive;
mod http_date;
mod time;


// Re-export public types
pub use conditional::{should_short_circuit, ConditionalHeaders};
pub use derive::{derive_validators, etag_for, Validators};
pub use http_date::{format_http_date, parse_http_date};
pub use time::{
    normalize, now, to_datetime, LastModifiedValue, Timestamp, MAX_HTTP_TIMESTAMP,
    MIN_HTTP_TIMESTAMP,
};

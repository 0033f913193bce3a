//! Time Normalization
//!
//! Converts whatever a resolver hands back into a single Unix timestamp.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{CacheHeaderError, Result};

/// Unix timestamp in whole seconds.
pub type Timestamp = i64;

/// `Mon, 01 Jan 0001 00:00:00 GMT`, the earliest four-digit-year instant
pub const MIN_HTTP_TIMESTAMP: Timestamp = -62_135_596_800;

/// `Fri, 31 Dec 9999 23:59:59 GMT`, the latest four-digit-year instant
pub const MAX_HTTP_TIMESTAMP: Timestamp = 253_402_300_799;

// == Last Modified Value ==
/// A last-modification time as produced by a resolver.
///
/// Calendar values are always interpreted as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastModifiedValue {
    /// Timezone-aware date and time
    DateTime(DateTime<Utc>),
    /// Naive date and time, taken to be UTC
    Naive(NaiveDateTime),
    /// Calendar date, taken to be midnight UTC
    Date(NaiveDate),
    /// Seconds since the Unix epoch
    Timestamp(Timestamp),
}

impl From<DateTime<Utc>> for LastModifiedValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDateTime> for LastModifiedValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl From<NaiveDate> for LastModifiedValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Timestamp> for LastModifiedValue {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<SystemTime> for LastModifiedValue {
    fn from(value: SystemTime) -> Self {
        let secs = match value.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_secs() as i64,
            // Round towards the past for pre-epoch times with a fraction
            Err(before) => {
                let before = before.duration();
                let whole = before.as_secs() as i64;
                if before.subsec_nanos() > 0 {
                    -whole - 1
                } else {
                    -whole
                }
            }
        };
        Self::Timestamp(secs)
    }
}

// == Normalize ==
/// Normalizes a resolver value to a Unix timestamp.
///
/// Sub-second precision is dropped. Integer timestamps pass through but must
/// still fall in years 0001 through 9999, otherwise `InvalidTimestamp` is
/// returned.
pub fn normalize(value: LastModifiedValue) -> Result<Timestamp> {
    let secs = match value {
        LastModifiedValue::DateTime(dt) => dt.timestamp(),
        LastModifiedValue::Naive(naive) => naive.and_utc().timestamp(),
        LastModifiedValue::Date(date) => date.and_time(NaiveTime::MIN).and_utc().timestamp(),
        LastModifiedValue::Timestamp(secs) => secs,
    };

    to_datetime(secs)?;
    Ok(secs)
}

/// Converts a timestamp to a UTC date time.
///
/// Only years 0001 through 9999 are accepted, the range an HTTP date can
/// express.
pub fn to_datetime(secs: Timestamp) -> Result<DateTime<Utc>> {
    if !(MIN_HTTP_TIMESTAMP..=MAX_HTTP_TIMESTAMP).contains(&secs) {
        return Err(CacheHeaderError::InvalidTimestamp(secs));
    }
    DateTime::from_timestamp(secs, 0).ok_or(CacheHeaderError::InvalidTimestamp(secs))
}

/// Returns the current Unix timestamp in seconds.
pub fn now() -> Timestamp {
    Utc::now().timestamp()
}

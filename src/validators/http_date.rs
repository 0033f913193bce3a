//! HTTP date formatting and parsing
//!
//! Formatting always produces the IMF-fixdate form
//! (`Sun, 06 Nov 1994 08:49:37 GMT`). Parsing additionally accepts the
//! obsolete RFC 850 and asctime forms that clients may still send.

use chrono::NaiveDateTime;

use super::time::{to_datetime, Timestamp};
use crate::error::Result;

/// IMF-fixdate layout, minus the leading weekday.
const IMF_FIXDATE: &str = "%d %b %Y %H:%M:%S GMT";

/// Formats a timestamp as an IMF-fixdate in GMT.
///
/// Fails with `InvalidTimestamp` outside years 0001 through 9999.
pub fn format_http_date(secs: Timestamp) -> Result<String> {
    let dt = to_datetime(secs)?;
    Ok(dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
}

/// Parses any of the three HTTP-date forms into a timestamp.
///
/// Returns `None` for anything unrecognized. The weekday name is not
/// checked against the date.
pub fn parse_http_date(value: &str) -> Option<Timestamp> {
    let value = value.trim();

    parse_imf_fixdate(value)
        .or_else(|| parse_rfc850(value))
        .or_else(|| parse_asctime(value))
        .map(|naive| naive.and_utc().timestamp())
}

// Sun, 06 Nov 1994 08:49:37 GMT
fn parse_imf_fixdate(value: &str) -> Option<NaiveDateTime> {
    let (weekday, rest) = value.split_once(", ")?;
    if weekday.len() != 3 {
        return None;
    }
    NaiveDateTime::parse_from_str(rest, IMF_FIXDATE).ok()
}

// Sunday, 06-Nov-94 08:49:37 GMT
fn parse_rfc850(value: &str) -> Option<NaiveDateTime> {
    let (weekday, rest) = value.split_once(", ")?;
    if weekday.len() < 6 {
        return None;
    }

    let (date, time) = rest.split_once(' ')?;
    let mut parts = date.splitn(3, '-');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if year.len() != 2 {
        return None;
    }

    let year: u32 = year.parse().ok()?;
    let year = if year < 70 { 2000 + year } else { 1900 + year };

    NaiveDateTime::parse_from_str(&format!("{day} {month} {year} {time}"), IMF_FIXDATE).ok()
}

// Sun Nov  6 08:49:37 1994
fn parse_asctime(value: &str) -> Option<NaiveDateTime> {
    let (weekday, rest) = value.split_once(' ')?;
    if weekday.len() != 3 {
        return None;
    }

    let rest = rest.split_whitespace().collect::<Vec<_>>().join(" ");
    NaiveDateTime::parse_from_str(&rest, "%b %d %H:%M:%S %Y").ok()
}

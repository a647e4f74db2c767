//! UTC timestamp parsing and formatting.
//!
//! All instants in this crate are absolute points on a single UTC timeline,
//! exchanged as ISO-8601 text with second precision and a literal `Z`
//! suffix. There is no civil-time or DST handling anywhere.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{ScheduleError, ScheduleResult};

/// Absolute instant in UTC.
pub type Timestamp = DateTime<Utc>;

/// Timestamp text form: ISO-8601, UTC, second precision, literal `Z`.
pub const ISO_FMT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a timestamp string into a UTC instant.
///
/// Strict: fractional seconds, numeric offsets, and anything else outside
/// [`ISO_FMT`] are rejected.
pub fn parse_timestamp(s: &str) -> ScheduleResult<Timestamp> {
    NaiveDateTime::parse_from_str(s, ISO_FMT)
        .map(|naive| naive.and_utc())
        .map_err(|e| ScheduleError::InvalidTimestamp {
            input: s.to_string(),
            reason: e.to_string(),
        })
}

/// Format a UTC instant back to the [`ISO_FMT`] text form.
pub fn format_timestamp(t: &Timestamp) -> String {
    t.format(ISO_FMT).to_string()
}

/// Serde adapter keeping timestamp fields in the [`ISO_FMT`] text form.
///
/// Use with `#[serde(with = "crate::models::time::utc_second")]`.
pub mod utc_second {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_timestamp, parse_timestamp, Timestamp};

    pub fn serialize<S>(t: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(t))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_timestamp(&s).map_err(serde::de::Error::custom)
    }
}

//! ISO-8601 timestamps with millisecond precision, as stored on disk.
//!
//! Use with `#[serde(with = "timestamp")]` on `DateTime<Utc>` fields.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

/// Render a timestamp the way it is persisted (`2024-05-01T10:00:00.000Z`).
pub fn to_iso8601(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse any RFC 3339 timestamp, normalizing the offset to UTC.
pub fn parse_iso8601(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw.trim()).map(|value| value.with_timezone(&Utc))
}

pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_iso8601(value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_iso8601(&raw).map_err(|e| Error::custom(format!("invalid timestamp `{raw}`: {e}")))
}

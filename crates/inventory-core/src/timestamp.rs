//! API timestamps.
//!
//! The server writes local date-times without a zone
//! (`2024-03-01T10:15:00.123`). They are held as [`NaiveDateTime`]. RFC 3339
//! values with an offset are also read and converted to UTC.
//!
//! Use with `#[serde(with = "crate::timestamp")]`, or
//! `#[serde(default, with = "crate::timestamp::option")]` for optional fields.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Wire format of a zone-less timestamp. Fractional seconds are optional.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse a zone-less or RFC 3339 timestamp.
pub fn parse(value: &str) -> Option<NaiveDateTime> {
    if let Ok(ts) = NaiveDateTime::parse_from_str(value, WIRE_FORMAT) {
        return Some(ts);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|ts| ts.with_timezone(&Utc).naive_utc())
}

/// The current UTC time as a zone-less timestamp.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(WIRE_FORMAT))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

/// The same format for `Option<NaiveDateTime>` fields.
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => super::serialize(ts, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse(&raw).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid timestamp: {}", raw))
            }),
            None => Ok(None),
        }
    }
}

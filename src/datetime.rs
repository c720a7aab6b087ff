//! Serde helpers for the service's fixed date format.
//!
//! Every date-typed model field uses the single pattern
//! `YYYY-MM-DD HH:MM:SS`, interpreted as UTC with no locale dependence.
//! Declare fields as `#[serde(with = "declarest::datetime")]` (or
//! `"declarest::datetime::option"` for optional fields); any other textual
//! form fails decoding as corrupt data.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// The only supported wire pattern for date fields.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}

// The "invalid date" prefix is load-bearing: decode error classification
// keys on it to report corrupt data.
fn parse(s: &str) -> Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(s, FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|_| format!("invalid date {:?}, expected {}", s, FORMAT))
}

/// Same format over `Option<DateTime<Utc>>`.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => super::parse(&s).map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

//! Decoding of the `DD/MM/YYYY` dates used in Sirius payloads.
//!
//! Values leave this module as [`NaiveDate`], so nothing outside the decoding
//! boundary needs to know the wire format.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

pub const SIRIUS_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a Sirius date string.
pub fn parse(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, SIRIUS_DATE_FORMAT)
}

/// `deserialize_with` helper for required date fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|err| serde::de::Error::custom(format!("invalid date {raw:?}: {err}")))
}

/// `deserialize_with` helper for date fields that may be `null`.
///
/// Pair with `#[serde(default)]` so a missing field also yields `None`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse(&raw)
            .map(Some)
            .map_err(|err| serde::de::Error::custom(format!("invalid date {raw:?}: {err}"))),
        None => Ok(None),
    }
}

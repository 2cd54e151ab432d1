//! Lenient deserializers for legacy persisted data

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

/// Date wire format
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Treat an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a user-facing date: `YYYY-MM-DD`, or an RFC 3339 timestamp
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Optional date; empty string and `null` both mean absent
pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let parsed = parse_date(&raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        tracing::warn!(value = %raw, "dropping unparsable date");
    }
    Ok(parsed)
}

pub(crate) fn serialize_optional_date<S>(
    date: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2025, 7, 1);
        assert_eq!(parse_date("2025-07-01"), expected);
        assert_eq!(parse_date(" 2025-07-01 "), expected);
        assert_eq!(parse_date("2025-07-01T10:00:00.000Z"), expected);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
    }
}

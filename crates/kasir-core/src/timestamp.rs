//! # Transaction Timestamps
//!
//! JSON encoding for the `date` field of a transaction.
//!
//! Dates are naive local wall-clock values. No timezone is stored and no
//! normalization happens anywhere. Clients send whatever their POS terminal
//! produces, so decoding is lenient:
//!
//! ```text
//! "2024-05-01T10:15:00"            → 2024-05-01 10:15:00
//! "2024-05-01 10:15:00.250"        → 2024-05-01 10:15:00.250
//! "2024-05-01T10:15:00+07:00"      → 2024-05-01 10:15:00   (offset dropped)
//! "2024-05-01"                     → 2024-05-01 00:00:00
//! "0001-01-01T00:00:00Z"           → unset (zero timestamp)
//! null / "" / missing              → unset
//! ```
//!
//! Encoding always produces `YYYY-MM-DDTHH:MM:SS[.fff]`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Output format for encoded timestamps.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a timestamp string in any of the accepted shapes.
///
/// Returns `None` for the zero timestamp, which callers treat as "unset".
pub fn parse(value: &str) -> Result<Option<NaiveDateTime>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let parsed = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| format!("invalid timestamp: {}", value))?;

    Ok((!is_zero(&parsed)).then_some(parsed))
}

/// True for `0001-01-01 00:00:00`, the zero value some clients send for
/// "no date".
pub fn is_zero(dt: &NaiveDateTime) -> bool {
    dt.year() == 1
        && dt.ordinal() == 1
        && dt.num_seconds_from_midnight() == 0
        && dt.nanosecond() == 0
}

/// Serde adapter for `Option<NaiveDateTime>` fields.
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => s.serialize_str(&dt.format(super::FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(d)? {
            Some(raw) => super::parse(&raw).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(default, with = "option")]
        date: Option<NaiveDateTime>,
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_naive_formats() {
        assert_eq!(
            parse("2024-05-01T10:15:00").unwrap(),
            Some(at(2024, 5, 1, 10, 15, 0))
        );
        assert_eq!(
            parse("2024-05-01 10:15:00").unwrap(),
            Some(at(2024, 5, 1, 10, 15, 0))
        );
        assert_eq!(parse("2024-05-01").unwrap(), Some(at(2024, 5, 1, 0, 0, 0)));
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_clock() {
        assert_eq!(
            parse("2024-05-01T23:30:00+07:00").unwrap(),
            Some(at(2024, 5, 1, 23, 30, 0))
        );
        assert_eq!(
            parse("2024-05-01T08:00:00Z").unwrap(),
            Some(at(2024, 5, 1, 8, 0, 0))
        );
    }

    #[test]
    fn test_zero_timestamp_is_unset() {
        assert_eq!(parse("0001-01-01T00:00:00Z").unwrap(), None);
        assert_eq!(parse("").unwrap(), None);
        assert!(is_zero(&at(1, 1, 1, 0, 0, 0)));
        assert!(!is_zero(&at(1, 1, 1, 0, 0, 1)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("yesterday").is_err());
        assert!(parse("2024-13-01").is_err());
    }

    #[test]
    fn test_serde_adapter() {
        let holder: Holder = serde_json::from_str(r#"{"date": "2024-05-01 10:15:00"}"#).unwrap();
        assert_eq!(holder.date, Some(at(2024, 5, 1, 10, 15, 0)));

        let holder: Holder = serde_json::from_str(r#"{"date": null}"#).unwrap();
        assert_eq!(holder.date, None);

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(holder.date, None);

        let json = serde_json::to_string(&Holder {
            date: Some(at(2024, 5, 1, 10, 15, 0)),
        })
        .unwrap();
        assert_eq!(json, r#"{"date":"2024-05-01T10:15:00"}"#);
    }
}

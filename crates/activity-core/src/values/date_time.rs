//! xsd:dateTime
//!
//! Parsed as RFC 3339. Serialized with `Z` for UTC and a fractional part only
//! when the value has one.

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat};
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

pub fn serialize(value: &DateTime<FixedOffset>) -> JsonValue {
    JsonValue::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

pub fn deserialize(raw: &JsonValue) -> Result<DateTime<FixedOffset>> {
    let JsonValue::String(s) = raw else {
        return Err(Error::type_mismatch("a string for xsd:dateTime", raw));
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    // Some producers omit seconds: 2016-05-10T00:00Z
    if let Some(stripped) = s.strip_suffix('Z') {
        if let Ok(naive) = NaiveDateTime::parse_from_str(stripped, "%Y-%m-%dT%H:%M") {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    Err(Error::type_mismatch("a RFC 3339 string for xsd:dateTime", raw))
}

pub fn less(lhs: &DateTime<FixedOffset>, rhs: &DateTime<FixedOffset>) -> bool {
    lhs < rhs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_utc() {
        let dt = deserialize(&json!("2016-05-10T00:00:00Z")).unwrap();
        assert_eq!(serialize(&dt), json!("2016-05-10T00:00:00Z"));
    }

    #[test]
    fn test_fractional_seconds_survive() {
        let dt = deserialize(&json!("2016-05-10T00:00:00.250Z")).unwrap();
        assert_eq!(serialize(&dt), json!("2016-05-10T00:00:00.250Z"));
        assert_eq!(deserialize(&serialize(&dt)).unwrap(), dt);
    }

    #[test]
    fn test_offset_is_kept() {
        let dt = deserialize(&json!("2016-05-10T09:30:00+02:00")).unwrap();
        assert_eq!(serialize(&dt), json!("2016-05-10T09:30:00+02:00"));
    }

    #[test]
    fn test_missing_seconds() {
        let dt = deserialize(&json!("2016-05-10T00:00Z")).unwrap();
        assert_eq!(serialize(&dt), json!("2016-05-10T00:00:00Z"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(deserialize(&json!("yesterday")).is_err());
        assert!(deserialize(&json!(1462838400)).is_err());
    }

    #[test]
    fn test_less() {
        let a = deserialize(&json!("2016-05-10T00:00:00Z")).unwrap();
        let b = deserialize(&json!("2016-05-11T00:00:00Z")).unwrap();
        assert!(less(&a, &b));
        assert!(!less(&b, &a));
    }
}

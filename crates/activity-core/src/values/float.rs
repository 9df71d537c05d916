//! xsd:float

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

/// Non-finite values have no JSON form and serialize as `null`.
pub fn serialize(value: f64) -> JsonValue {
    JsonValue::from(value)
}

pub fn deserialize(raw: &JsonValue) -> Result<f64> {
    raw.as_f64()
        .ok_or_else(|| Error::type_mismatch("a float64 for xsd:float", raw))
}

pub fn less(lhs: f64, rhs: f64) -> bool {
    lhs < rhs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(1.5), 1.5)]
    #[case(json!(-90), -90.0)]
    #[case(json!(0), 0.0)]
    fn test_deserialize_numbers(#[case] raw: JsonValue, #[case] expected: f64) {
        assert_eq!(deserialize(&raw).unwrap(), expected);
    }

    #[rstest]
    #[case(json!("1.5"))]
    #[case(json!(null))]
    #[case(json!({"value": 1.5}))]
    fn test_rejects_non_numbers(#[case] raw: JsonValue) {
        assert!(matches!(deserialize(&raw), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serialize(36.75), json!(36.75));
        assert_eq!(serialize(f64::NAN), JsonValue::Null);
    }
}

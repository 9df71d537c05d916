//! xsd:nonNegativeInteger

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

pub fn serialize(value: u64) -> JsonValue {
    JsonValue::from(value)
}

/// Whole-valued floats such as `3.0` are accepted; fractions and negatives are not.
pub fn deserialize(raw: &JsonValue) -> Result<u64> {
    if let Some(n) = raw.as_u64() {
        return Ok(n);
    }
    match raw.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        _ => Err(Error::type_mismatch(
            "a non-negative integer for xsd:nonNegativeInteger",
            raw,
        )),
    }
}

pub fn less(lhs: u64, rhs: u64) -> bool {
    lhs < rhs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_negative_integer() {
        assert_eq!(deserialize(&json!(42)).unwrap(), 42);
        assert_eq!(deserialize(&json!(3.0)).unwrap(), 3);
        assert!(deserialize(&json!(-1)).is_err());
        assert!(deserialize(&json!(1.5)).is_err());
        assert!(deserialize(&json!("4")).is_err());
        assert_eq!(serialize(7), json!(7));
    }
}

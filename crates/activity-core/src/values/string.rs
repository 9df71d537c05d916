//! xsd:string

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

pub fn serialize(value: &str) -> JsonValue {
    JsonValue::String(value.to_string())
}

pub fn deserialize(raw: &JsonValue) -> Result<String> {
    match raw {
        JsonValue::String(s) => Ok(s.clone()),
        other => Err(Error::type_mismatch("a string for xsd:string", other)),
    }
}

pub fn less(lhs: &str, rhs: &str) -> bool {
    lhs < rhs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_codec() {
        assert_eq!(deserialize(&json!("hello")).unwrap(), "hello");
        assert_eq!(serialize("hello"), json!("hello"));
        assert!(deserialize(&json!(1.5)).is_err());
        assert!(less("a", "b"));
        assert!(!less("b", "b"));
    }
}

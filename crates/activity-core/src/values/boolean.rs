//! xsd:boolean
//!
//! Accepts JSON booleans, and the numbers `0` and `1`.

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

pub fn serialize(value: bool) -> JsonValue {
    JsonValue::Bool(value)
}

pub fn deserialize(raw: &JsonValue) -> Result<bool> {
    match raw {
        JsonValue::Bool(b) => Ok(*b),
        JsonValue::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => Ok(false),
            Some(f) if f == 1.0 => Ok(true),
            _ => Err(Error::type_mismatch("a bool for xsd:boolean", raw)),
        },
        other => Err(Error::type_mismatch("a bool for xsd:boolean", other)),
    }
}

/// `false` sorts before `true`.
pub fn less(lhs: bool, rhs: bool) -> bool {
    !lhs && rhs
}

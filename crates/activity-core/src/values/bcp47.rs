//! BCP47 language tags.
//!
//! Tags are carried as-is; no registry validation is performed.

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

pub fn serialize(value: &str) -> JsonValue {
    JsonValue::String(value.to_string())
}

pub fn deserialize(raw: &JsonValue) -> Result<String> {
    match raw {
        JsonValue::String(s) => Ok(s.clone()),
        other => Err(Error::type_mismatch("a string for bcp47 languagetag", other)),
    }
}

pub fn less(lhs: &str, rhs: &str) -> bool {
    lhs < rhs
}

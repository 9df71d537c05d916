//! xsd:anyURI
//!
//! A string is only an anyURI when it parses as an absolute reference with
//! a non-empty scheme.

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::iri::Iri;

pub fn serialize(value: &Iri) -> JsonValue {
    JsonValue::String(value.as_str().to_string())
}

pub fn deserialize(raw: &JsonValue) -> Result<Iri> {
    match raw {
        JsonValue::String(s) => Iri::parse(s),
        other => Err(Error::type_mismatch("a string for xsd:anyURI", other)),
    }
}

pub fn less(lhs: &Iri, rhs: &Iri) -> bool {
    lhs.as_str() < rhs.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_any_uri() {
        let iri = deserialize(&json!("https://example.com/a")).unwrap();
        assert_eq!(serialize(&iri), json!("https://example.com/a"));
        assert!(matches!(
            deserialize(&json!("no scheme")),
            Err(Error::InvalidIri { .. })
        ));
        assert!(matches!(
            deserialize(&json!(5)),
            Err(Error::TypeMismatch { .. })
        ));
    }
}

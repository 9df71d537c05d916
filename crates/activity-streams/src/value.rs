//! Property values and the vocabulary marker tying them to activity-core.

use activity_core::{Iri, KindRegistry, PropertyDef, PropertyList, TaggedValue, Vocabulary};
use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::kinds::Kind;
use crate::object::Object;

/// The ActivityStreams 2.0 vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityStreams;

impl Vocabulary for ActivityStreams {
    type Kind = Kind;
    type Value = Value;

    fn kind_of(value: &Value) -> Kind {
        value.kind()
    }
}

/// Value of a functional property.
pub type Functional = TaggedValue<ActivityStreams>;

/// Values of a non-functional property.
pub type NonFunctional = PropertyList<ActivityStreams>;

pub type PropertyDefinition = PropertyDef<ActivityStreams>;

pub type Registry = KindRegistry<ActivityStreams>;

/// A concrete value of one [`Kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    DateTime(DateTime<FixedOffset>),
    Duration(TimeDelta),
    Float(f64),
    AnyUri(Iri),
    Bcp47(String),
    NonNegativeInteger(u64),
    String(String),
    Object(Box<Object>),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Boolean(_) => Kind::Boolean,
            Value::DateTime(_) => Kind::DateTime,
            Value::Duration(_) => Kind::Duration,
            Value::Float(_) => Kind::Float,
            Value::AnyUri(_) => Kind::AnyUri,
            Value::Bcp47(_) => Kind::Bcp47,
            Value::NonNegativeInteger(_) => Kind::NonNegativeInteger,
            Value::String(_) => Kind::String,
            Value::Object(o) => Kind::Type(o.kind()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Bcp47(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::NonNegativeInteger(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Value::AnyUri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::NonNegativeInteger(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Iri> for Value {
    fn from(value: Iri) -> Self {
        Value::AnyUri(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::DateTime(value)
    }
}

impl From<TimeDelta> for Value {
    fn from(value: TimeDelta) -> Self {
        Value::Duration(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::TypeKind;

    #[test]
    fn test_accessors_match_variant() {
        let flag = Value::from(true);
        assert_eq!(flag.as_bool(), Some(true));
        assert_eq!(flag.kind(), Kind::Boolean);
        assert_eq!(flag.as_str(), None);

        let published = DateTime::parse_from_rfc3339("2015-01-25T12:34:56Z").unwrap();
        let value = Value::from(published);
        assert_eq!(value.as_date_time(), Some(&published));
        assert_eq!(value.as_bool(), None);

        assert_eq!(Value::from(3u64).as_u64(), Some(3));
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
    }

    #[test]
    fn test_object_accessors() {
        let mut value = Value::from(Object::new(TypeKind::Note));
        assert_eq!(value.kind(), Kind::Type(TypeKind::Note));
        assert!(value.as_object_mut().is_some());
        assert_eq!(value.as_object().map(Object::kind), Some(TypeKind::Note));
        assert_eq!(value.as_date_time(), None);
    }
}

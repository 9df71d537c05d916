//! Wiring every ActivityStreams kind into a [`Registry`].

use activity_core::values::{
    any_uri, bcp47, boolean, date_time, duration, float, non_negative_integer, string,
};
use activity_core::{Error, Iri, JsonLdContext, KindFns};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::kinds::{Kind, TypeKind};
use crate::object::Object;
use crate::value::{ActivityStreams, Registry, Value};

// Function table of a primitive kind backed by one of the value codecs.
// `copy` codecs take their argument by value, `ref` codecs by reference.
macro_rules! primitive {
    ($variant:ident, $codec:ident, $zero:expr, copy) => {
        KindFns {
            construct: |_| Value::$variant($zero),
            deserialize: |_, raw, _, _| $codec::deserialize(raw).map(Value::$variant),
            serialize: |value, _| match value {
                Value::$variant(v) => Ok($codec::serialize(*v)),
                other => Err(mismatch(Kind::$variant, other)),
            },
            less: |lhs, rhs, _| match (lhs, rhs) {
                (Value::$variant(a), Value::$variant(b)) => $codec::less(*a, *b),
                _ => false,
            },
            context: |_, _| JsonLdContext::new(),
        }
    };
    ($variant:ident, $codec:ident, $zero:expr, ref) => {
        KindFns {
            construct: |_| Value::$variant($zero),
            deserialize: |_, raw, _, _| $codec::deserialize(raw).map(Value::$variant),
            serialize: |value, _| match value {
                Value::$variant(v) => Ok($codec::serialize(v)),
                other => Err(mismatch(Kind::$variant, other)),
            },
            less: |lhs, rhs, _| match (lhs, rhs) {
                (Value::$variant(a), Value::$variant(b)) => $codec::less(a, b),
                _ => false,
            },
            context: |_, _| JsonLdContext::new(),
        }
    };
}

fn mismatch(expected: Kind, found: &Value) -> Error {
    Error::TypeMismatch {
        expected: "a value of the registered kind",
        found: format!("{} where {} was expected", found.kind(), expected),
    }
}

fn type_kind(kind: Kind) -> TypeKind {
    match kind {
        Kind::Type(t) => t,
        other => panic!("{} is not a vocabulary type", other),
    }
}

fn type_fns() -> KindFns<ActivityStreams> {
    KindFns {
        construct: |kind| Value::from(Object::new(type_kind(kind))),
        deserialize: |kind, raw, aliases, registry| {
            Object::deserialize(type_kind(kind), raw, aliases, registry).map(Value::from)
        },
        serialize: |value, registry| match value {
            Value::Object(object) => object.serialize(registry).map(JsonValue::Object),
            other => Err(mismatch(Kind::Type(TypeKind::Object), other)),
        },
        less: |lhs, rhs, registry| match (lhs, rhs) {
            (Value::Object(a), Value::Object(b)) => a.less_than(b, registry),
            _ => false,
        },
        context: |value, registry| match value {
            Value::Object(object) => object.jsonld_context(registry),
            _ => JsonLdContext::new(),
        },
    }
}

/// Build the registry holding every primitive and vocabulary type.
///
/// The result is immutable; share it by reference or behind an `Arc`.
pub fn build_registry() -> Registry {
    let mut builder = Registry::builder();
    builder
        .register(Kind::Boolean, primitive!(Boolean, boolean, false, copy))
        .register(
            Kind::DateTime,
            primitive!(DateTime, date_time, Default::default(), ref),
        )
        .register(
            Kind::Duration,
            primitive!(Duration, duration, chrono::TimeDelta::zero(), ref),
        )
        .register(Kind::Float, primitive!(Float, float, 0.0, copy))
        .register(Kind::AnyUri, primitive!(AnyUri, any_uri, Iri::default(), ref))
        .register(Kind::Bcp47, primitive!(Bcp47, bcp47, String::new(), ref))
        .register(
            Kind::NonNegativeInteger,
            primitive!(NonNegativeInteger, non_negative_integer, 0, copy),
        )
        .register(Kind::String, primitive!(String, string, String::new(), ref));
    for &kind in TypeKind::ALL {
        builder.register(Kind::Type(kind), type_fns());
    }
    debug!(kinds = TypeKind::ALL.len() + Kind::PRIMITIVES.len(), "activity streams registry wired");
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::CONTENT;
    use activity_core::AliasMap;
    use chrono::{DateTime, TimeDelta};
    use rstest::rstest;
    use serde_json::json;

    fn question() -> Value {
        let mut question = Object::new(TypeKind::Question);
        question.append(&CONTENT, "Which one?");
        Value::Object(Box::new(question))
    }

    #[test]
    fn test_every_kind_registered() {
        let registry = build_registry();
        for &kind in Kind::PRIMITIVES {
            assert!(registry.contains(kind), "{} missing", kind);
        }
        for &kind in TypeKind::ALL {
            assert!(registry.contains(Kind::Type(kind)), "{} missing", kind);
        }
    }

    #[test]
    fn test_construct_type_sets_discriminator() {
        let registry = build_registry();
        let value = registry.construct(Kind::Type(TypeKind::Question));
        let object = value.as_object().unwrap();
        assert_eq!(object.kind(), TypeKind::Question);
        assert_eq!(
            registry.serialize(&value).unwrap(),
            json!({"type": "Question"})
        );
    }

    #[test]
    fn test_type_kind_requires_exact_discriminator() {
        let registry = build_registry();
        let raw = json!({"type": "Note", "content": "hi"});
        let aliases = AliasMap::new();
        assert!(registry.deserialize(Kind::Type(TypeKind::Note), &raw, &aliases).is_ok());
        let err = registry
            .deserialize(Kind::Type(TypeKind::Object), &raw, &aliases)
            .unwrap_err();
        assert!(err.is_discriminator());
    }

    #[rstest]
    #[case(Value::Boolean(true))]
    #[case(Value::DateTime(DateTime::parse_from_rfc3339("2016-05-10T00:00:00.250Z").unwrap()))]
    #[case(Value::DateTime(DateTime::parse_from_rfc3339("2016-05-10T09:30:00+02:00").unwrap()))]
    #[case(Value::Duration(TimeDelta::minutes(90)))]
    #[case(Value::Duration(TimeDelta::milliseconds(1500)))]
    #[case(Value::Float(36.75))]
    #[case(Value::AnyUri(Iri::parse("https://example.com/a?b=c").unwrap()))]
    #[case(Value::Bcp47("en-US".into()))]
    #[case(Value::NonNegativeInteger(42))]
    #[case(Value::String("hello".into()))]
    #[case(question())]
    fn test_value_survives_registry_round_trip(#[case] value: Value) {
        let registry = build_registry();
        let raw = registry.serialize(&value).unwrap();
        let back = registry
            .deserialize(value.kind(), &raw, &AliasMap::new())
            .unwrap();
        assert_eq!(back, value);
    }
}

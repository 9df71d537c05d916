use activity_streams::properties::{ANY_OF, CLOSED, NAME, NS, ONE_OF, TYPE};
use activity_streams::{Codec, Kind, StreamsError, TypeKind, Value};
use serde_json::{json, Value as JsonValue};

fn question() -> JsonValue {
    json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "type": "Question",
        "id": "https://example.com/questions/1",
        "name": "What is the answer?",
        "oneOf": [
            {"type": "Note", "name": "Option A"},
            {"type": "Note", "name": "Option B"}
        ],
        "closed": "2016-05-10T00:00:00Z"
    })
}

#[test]
fn test_decode_question() -> anyhow::Result<()> {
    let codec = Codec::default();
    let q = codec.decode(&question())?;

    assert_eq!(q.kind(), TypeKind::Question);
    assert_eq!(
        q.id().map(|iri| iri.as_str()),
        Some("https://example.com/questions/1")
    );

    let one_of = q.list(&ONE_OF).expect("oneOf is set");
    assert_eq!(one_of.len(), 2);
    for option in one_of {
        assert_eq!(option.kind(), Some(Kind::Type(TypeKind::Note)));
    }
    let first = one_of.at(0).get().and_then(Value::as_object).unwrap();
    let name = first.list(&NAME).unwrap();
    assert_eq!(name.at(0).get(), Some(&Value::String("Option A".into())));

    let closed = q.list(&CLOSED).unwrap();
    assert!(closed.at(0).is_kind(Kind::DateTime));
    assert!(q.unknown_properties().is_empty());
    Ok(())
}

#[test]
fn test_question_round_trip() -> anyhow::Result<()> {
    let codec = Codec::default();
    let q = codec.decode(&question())?;
    assert_eq!(codec.encode(&q)?, question());

    let again = codec.decode_str(&codec.encode_string(&q)?)?;
    assert_eq!(again, q);
    Ok(())
}

#[test]
fn test_nested_questions() -> anyhow::Result<()> {
    let codec = Codec::default();
    let raw = json!({
        "type": "Question",
        "anyOf": [
            {"type": "Question", "name": "inner", "anyOf": {"type": "Note", "name": "leaf"}},
            "https://example.com/answers/2"
        ]
    });
    let q = codec.decode(&raw)?;
    let any_of = q.list(&ANY_OF).unwrap();
    let inner = any_of.at(0).get().and_then(Value::as_object).unwrap();
    assert_eq!(inner.kind(), TypeKind::Question);
    let leaf = inner.list(&ANY_OF).unwrap();
    assert_eq!(leaf.len(), 1);
    assert_eq!(leaf.at(0).kind(), Some(Kind::Type(TypeKind::Note)));
    assert!(any_of.at(1).is_iri());

    let encoded = codec.encode(&q)?;
    assert_eq!(encoded["anyOf"][0]["anyOf"], json!({"type": "Note", "name": "leaf"}));
    assert_eq!(encoded["anyOf"][1], json!("https://example.com/answers/2"));
    Ok(())
}

#[test]
fn test_multiple_types_resolve_by_priority() -> anyhow::Result<()> {
    let codec = Codec::default();
    let doc = codec.decode(&json!({"type": ["Question", "Note"], "name": "both"}))?;
    assert_eq!(doc.kind(), TypeKind::Note);
    let types = doc.list(&TYPE).unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(
        codec.encode(&doc)?["type"],
        json!(["Question", "Note"])
    );
    Ok(())
}

#[test]
fn test_alias_prefixed_document() -> anyhow::Result<()> {
    let codec = Codec::default();
    let raw = json!({
        "@context": [{"as": NS}],
        "type": "as:Question",
        "as:name": "Prefixed",
        "as:oneOf": {"type": "as:Note", "as:name": "only"},
        "name": "not a vocabulary key under this alias"
    });
    let q = codec.decode(&raw)?;
    assert_eq!(q.kind(), TypeKind::Question);
    assert_eq!(q.alias(), "as");

    let one_of = q.list(&ONE_OF).unwrap();
    let note = one_of.at(0).get().and_then(Value::as_object).unwrap();
    assert_eq!(note.alias(), "as");
    assert_eq!(one_of.qualified_name(), "as:oneOf");
    assert_eq!(q.unknown_properties().get("name"), Some(&json!("not a vocabulary key under this alias")));

    let encoded = codec.encode(&q)?;
    assert_eq!(encoded["@context"], json!({"as": NS}));
    assert_eq!(encoded["type"], json!("as:Question"));
    assert_eq!(encoded["as:name"], json!("Prefixed"));
    assert_eq!(encoded["as:oneOf"]["as:name"], json!("only"));
    assert_eq!(encoded["name"], json!("not a vocabulary key under this alias"));
    Ok(())
}

#[test]
fn test_wrong_shapes_are_rejected() {
    let codec = Codec::default();
    assert!(matches!(
        codec.decode(&json!(["Question"])),
        Err(StreamsError::Core(activity_core::Error::TypeMismatch { .. }))
    ));
    assert!(matches!(codec.decode_str("{not json"), Err(StreamsError::Json(_))));
    assert!(matches!(
        codec.decode(&json!({"type": "Emoji"})),
        Err(StreamsError::UnknownType(_))
    ));
}

//! The seam between the generic framework and a concrete vocabulary.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::fmt;
use std::hash::Hash;

/// Namespace URI -> alias in effect for a document.
///
/// An empty alias means the namespace is the default one and its property
/// names are written bare.
pub type AliasMap = IndexMap<String, String>;

/// A JSON object.
pub type JsonMap = serde_json::Map<String, JsonValue>;

/// A closed set of value kinds together with the sum type carrying them.
///
/// Implementors are zero-sized markers; all behaviour per kind lives in the
/// [`KindRegistry`](crate::KindRegistry) built for the vocabulary.
pub trait Vocabulary: fmt::Debug + Clone + PartialEq + Send + Sync + 'static {
    /// Tag identifying one kind of value.
    type Kind: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Payload holding a value of exactly one kind.
    type Value: Clone + fmt::Debug + PartialEq + Send + Sync;

    /// The kind of a payload.
    fn kind_of(value: &Self::Value) -> Self::Kind;
}

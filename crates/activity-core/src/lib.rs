//! Polymorphic property framework for JSON-LD vocabularies.
//!
//! A vocabulary property may hold one of many concrete value kinds, a bare
//! IRI reference, or a value nothing recognizes. This crate provides the
//! generic pieces shared by every property of such a vocabulary:
//!
//! - [`values`]: per-primitive codecs (string, float, anyURI, ...)
//! - [`TaggedValue`]: a single property value with exactly one active variant
//! - [`PropertyList`]: an ordered, index-addressable sequence of values
//! - [`KindRegistry`]: the per-kind function table used for dispatch
//! - [`JsonLdContext`]: namespace/alias accumulation for `@context`
//!
//! A concrete vocabulary plugs in through the [`Vocabulary`] trait.

pub mod context;
pub mod error;
pub mod iri;
pub mod property;
pub mod registry;
pub mod values;
pub mod vocabulary;

pub use context::{alias_for, alias_map_from_context, qualify, JsonLdContext};
pub use error::{Error, Result};
pub use iri::Iri;
pub use property::{
    Cursor, Property, PropertyDef, PropertyList, TaggedValue, IRI_KIND_INDEX, UNSET_KIND_INDEX,
};
pub use registry::{KindFns, KindRegistry, KindRegistryBuilder};
pub use vocabulary::{AliasMap, JsonMap, Vocabulary};

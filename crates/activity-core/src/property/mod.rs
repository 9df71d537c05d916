//! Polymorphic properties.
//!
//! A functional property holds one [`TaggedValue`]; a non-functional one
//! holds a [`PropertyList`]. Both implement [`Property`], which is the
//! contract the type layer uses to assemble and flatten whole objects.

mod def;
mod list;
mod tagged;

pub use def::PropertyDef;
pub use list::{Cursor, PropertyList};
pub use tagged::{TaggedValue, IRI_KIND_INDEX, UNSET_KIND_INDEX};

use serde_json::Value as JsonValue;
use std::cmp::Ordering;

use crate::context::JsonLdContext;
use crate::error::Result;
use crate::registry::KindRegistry;
use crate::vocabulary::{AliasMap, JsonMap, Vocabulary};

/// What every property exposes to the type layer.
pub trait Property<V: Vocabulary>: Sized {
    fn def(&self) -> &'static PropertyDef<V>;

    /// Alias the property was read or created with.
    fn alias(&self) -> &str;

    fn name(&self) -> &'static str {
        self.def().name
    }

    /// Key used in a JSON object: `alias:name`, or the bare name.
    fn qualified_name(&self) -> String {
        self.def().key(self.alias()).into_owned()
    }

    /// Read the property out of an object.
    ///
    /// Returns `Ok(None)` when the object does not carry the property.
    fn deserialize(
        def: &'static PropertyDef<V>,
        map: &JsonMap,
        aliases: &AliasMap,
        registry: &KindRegistry<V>,
    ) -> Result<Option<Self>>;

    fn serialize(&self, registry: &KindRegistry<V>) -> Result<JsonValue>;

    /// Canonical order; see [`TaggedValue::cmp_canonical`].
    fn cmp_canonical(&self, other: &Self, registry: &KindRegistry<V>) -> Ordering;

    fn less_than(&self, other: &Self, registry: &KindRegistry<V>) -> bool {
        self.cmp_canonical(other, registry) == Ordering::Less
    }

    fn jsonld_context(&self, registry: &KindRegistry<V>) -> JsonLdContext;
}

/// Raw JSON stored under the property's key for the document's aliases.
pub(crate) fn lookup_raw<'m, V: Vocabulary>(
    def: &PropertyDef<V>,
    map: &'m JsonMap,
    aliases: &AliasMap,
) -> Option<&'m JsonValue> {
    map.get(def.key(def.alias_in(aliases)).as_ref())
}

use serde_json::Value as JsonValue;
use std::cmp::Ordering;
use tracing::{debug, trace};

use super::{lookup_raw, Property, PropertyDef};
use crate::context::JsonLdContext;
use crate::error::Result;
use crate::iri::Iri;
use crate::registry::KindRegistry;
use crate::vocabulary::{AliasMap, JsonMap, Vocabulary};

/// [`TaggedValue::kind_index`] of an IRI.
pub const IRI_KIND_INDEX: isize = -2;

/// [`TaggedValue::kind_index`] of an unknown or empty value.
pub const UNSET_KIND_INDEX: isize = -1;

#[derive(Debug, Clone, PartialEq)]
enum Member<V: Vocabulary> {
    None,
    Kind(V::Value),
    Iri(Iri),
    /// Matched no kind; kept verbatim so it serializes back unchanged.
    Unknown(JsonValue),
}

/// A single property value.
///
/// At most one of {a kind's value, an IRI, an unknown payload} is held at
/// any time; every setter replaces whatever was there before.
#[derive(Debug, Clone)]
pub struct TaggedValue<V: Vocabulary> {
    def: &'static PropertyDef<V>,
    member: Member<V>,
    alias: String,
    /// Position inside the owning [`PropertyList`](super::PropertyList).
    position: Option<usize>,
}

impl<V: Vocabulary> TaggedValue<V> {
    /// An empty value for `def`.
    pub fn new(def: &'static PropertyDef<V>) -> Self {
        Self::with_alias(def, "")
    }

    pub fn with_alias(def: &'static PropertyDef<V>, alias: impl Into<String>) -> Self {
        Self {
            def,
            member: Member::None,
            alias: alias.into(),
            position: None,
        }
    }

    pub fn from_value(def: &'static PropertyDef<V>, value: V::Value) -> Self {
        let mut this = Self::new(def);
        this.set(value);
        this
    }

    pub fn from_iri(def: &'static PropertyDef<V>, iri: Iri) -> Self {
        let mut this = Self::new(def);
        this.set_iri(iri);
        this
    }

    pub fn def(&self) -> &'static PropertyDef<V> {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn qualified_name(&self) -> String {
        self.def.key(&self.alias).into_owned()
    }

    /// Position in the owning list, or `None` when standalone or detached.
    pub fn index(&self) -> Option<usize> {
        self.position
    }

    pub fn is_attached(&self) -> bool {
        self.position.is_some()
    }

    pub(super) fn attach(&mut self, position: usize) {
        self.position = Some(position);
    }

    pub(super) fn detach(&mut self) {
        self.position = None;
    }

    /// Kind of the held value, if a kind is set.
    pub fn kind(&self) -> Option<V::Kind> {
        match &self.member {
            Member::Kind(v) => Some(V::kind_of(v)),
            _ => None,
        }
    }

    pub fn is_kind(&self, kind: V::Kind) -> bool {
        self.kind() == Some(kind)
    }

    /// The value, when it is of `kind`.
    pub fn get_kind(&self, kind: V::Kind) -> Option<&V::Value> {
        match &self.member {
            Member::Kind(v) if V::kind_of(v) == kind => Some(v),
            _ => None,
        }
    }

    pub fn get(&self) -> Option<&V::Value> {
        match &self.member {
            Member::Kind(v) => Some(v),
            _ => None,
        }
    }

    /// Mutable access to the held value.
    ///
    /// The value may be edited in place but must keep its kind.
    pub fn get_mut(&mut self) -> Option<&mut V::Value> {
        match &mut self.member {
            Member::Kind(v) => Some(v),
            _ => None,
        }
    }

    /// Hold `value`, clearing any IRI or unknown payload.
    ///
    /// # Panics
    ///
    /// Panics if the property does not permit the value's kind.
    pub fn set(&mut self, value: V::Value) {
        self.def.assert_permits(V::kind_of(&value));
        self.member = Member::Kind(value);
    }

    pub fn is_iri(&self) -> bool {
        matches!(self.member, Member::Iri(_))
    }

    pub fn get_iri(&self) -> Option<&Iri> {
        match &self.member {
            Member::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn set_iri(&mut self, iri: Iri) {
        self.member = Member::Iri(iri);
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.member, Member::Unknown(_))
    }

    /// The raw JSON that matched no kind.
    pub fn unknown(&self) -> Option<&JsonValue> {
        match &self.member {
            Member::Unknown(raw) => Some(raw),
            _ => None,
        }
    }

    /// True iff a kind or an IRI is set.
    pub fn has_any(&self) -> bool {
        matches!(self.member, Member::Kind(_) | Member::Iri(_))
    }

    pub fn clear(&mut self) {
        self.member = Member::None;
    }

    /// Priority index of the held kind, [`IRI_KIND_INDEX`] for an IRI and
    /// [`UNSET_KIND_INDEX`] otherwise.
    pub fn kind_index(&self) -> isize {
        match &self.member {
            Member::Kind(v) => self
                .def
                .kind_index(V::kind_of(v))
                .map_or(UNSET_KIND_INDEX, |i| i as isize),
            Member::Iri(_) => IRI_KIND_INDEX,
            Member::None | Member::Unknown(_) => UNSET_KIND_INDEX,
        }
    }

    // IRIs first, then kinds by priority, then unknown/empty.
    fn rank(&self) -> usize {
        let unset = self.def.kinds.len() + 1;
        match &self.member {
            Member::Iri(_) => 0,
            Member::Kind(v) => self
                .def
                .kind_index(V::kind_of(v))
                .map_or(unset, |i| i + 1),
            Member::None | Member::Unknown(_) => unset,
        }
    }

    /// Deserialize one element by trial.
    ///
    /// 1. A string with a scheme is an IRI.
    /// 2. Otherwise each permitted kind is tried in priority order and the
    ///    first that accepts the value wins.
    /// 3. A value no kind accepts is kept verbatim as unknown.
    pub fn deserialize_value(
        def: &'static PropertyDef<V>,
        raw: &JsonValue,
        aliases: &AliasMap,
        registry: &KindRegistry<V>,
    ) -> Result<Self> {
        let mut this = Self::with_alias(def, def.alias_in(aliases));
        if let JsonValue::String(s) = raw {
            if let Ok(iri) = Iri::parse(s) {
                this.member = Member::Iri(iri);
                return Ok(this);
            }
        }
        for &kind in def.kinds {
            match registry.deserialize(kind, raw, aliases) {
                Ok(value) => {
                    this.member = Member::Kind(value);
                    return Ok(this);
                }
                Err(err) => {
                    trace!(property = def.name, %kind, error = %err, "kind did not match");
                }
            }
        }
        debug!(property = def.name, "no kind matched, keeping value as unknown");
        this.member = Member::Unknown(raw.clone());
        Ok(this)
    }

    /// JSON form of the value; `null` when nothing is held.
    pub fn serialize(&self, registry: &KindRegistry<V>) -> Result<JsonValue> {
        match &self.member {
            Member::Kind(v) => registry.serialize(v),
            Member::Iri(iri) => Ok(JsonValue::String(iri.as_str().to_string())),
            Member::Unknown(raw) => Ok(raw.clone()),
            Member::None => Ok(JsonValue::Null),
        }
    }

    /// Canonical order.
    ///
    /// IRIs sort before every kind and compare by their text. Kinds sort by
    /// priority index; two values of the same kind use that kind's
    /// comparator. Unknown and empty values sort last and are equal to each
    /// other. The order is arbitrary but stable, meant for normalizing
    /// multi-valued properties.
    pub fn cmp_canonical(&self, other: &Self, registry: &KindRegistry<V>) -> Ordering {
        match self.rank().cmp(&other.rank()) {
            Ordering::Equal => match (&self.member, &other.member) {
                (Member::Iri(a), Member::Iri(b)) => a.as_str().cmp(b.as_str()),
                (Member::Kind(a), Member::Kind(b)) => {
                    if registry.less(a, b) {
                        Ordering::Less
                    } else if registry.less(b, a) {
                        Ordering::Greater
                    } else {
                        Ordering::Equal
                    }
                }
                _ => Ordering::Equal,
            },
            ord => ord,
        }
    }

    pub fn less_than(&self, other: &Self, registry: &KindRegistry<V>) -> bool {
        self.cmp_canonical(other, registry) == Ordering::Less
    }

    /// Namespaces needed to round-trip this value.
    pub fn jsonld_context(&self, registry: &KindRegistry<V>) -> JsonLdContext {
        let mut ctx = JsonLdContext::with_namespace(self.def.namespace, self.alias.as_str());
        if let Member::Kind(v) = &self.member {
            ctx.merge(&registry.context(v));
        }
        ctx
    }
}

impl<V: Vocabulary> PartialEq for TaggedValue<V> {
    fn eq(&self, other: &Self) -> bool {
        self.def == other.def && self.alias == other.alias && self.member == other.member
    }
}

impl<V: Vocabulary> Property<V> for TaggedValue<V> {
    fn def(&self) -> &'static PropertyDef<V> {
        self.def
    }

    fn alias(&self) -> &str {
        &self.alias
    }

    fn deserialize(
        def: &'static PropertyDef<V>,
        map: &JsonMap,
        aliases: &AliasMap,
        registry: &KindRegistry<V>,
    ) -> Result<Option<Self>> {
        match lookup_raw(def, map, aliases) {
            Some(raw) => Self::deserialize_value(def, raw, aliases, registry)
                .map(Some)
                .map_err(|e| e.in_property(def.name)),
            None => Ok(None),
        }
    }

    fn serialize(&self, registry: &KindRegistry<V>) -> Result<JsonValue> {
        TaggedValue::serialize(self, registry)
    }

    fn cmp_canonical(&self, other: &Self, registry: &KindRegistry<V>) -> Ordering {
        TaggedValue::cmp_canonical(self, other, registry)
    }

    fn jsonld_context(&self, registry: &KindRegistry<V>) -> JsonLdContext {
        TaggedValue::jsonld_context(self, registry)
    }
}

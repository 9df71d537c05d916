//! Vocabulary objects.
//!
//! Every ActivityStreams type shares one representation: its [`TypeKind`],
//! the alias its namespace was read or created with, the known properties
//! that are set, and a bag of every other key found in the document. The
//! properties a kind may carry come from [`TypeKind::properties`].

use activity_core::{
    alias_for, qualify, AliasMap, Error, Iri, JsonLdContext, JsonMap, Property, Result,
};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::cmp::Ordering;
use tracing::trace;

use crate::kinds::TypeKind;
use crate::properties::{ID, NS, TYPE};
use crate::value::{Functional, NonFunctional, PropertyDefinition, Registry, Value};

/// A set property: one value, or a list of values.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Functional(Functional),
    NonFunctional(NonFunctional),
}

impl PropertyValue {
    pub fn def(&self) -> &'static PropertyDefinition {
        match self {
            PropertyValue::Functional(v) => v.def(),
            PropertyValue::NonFunctional(list) => list.def(),
        }
    }

    pub fn qualified_name(&self) -> String {
        match self {
            PropertyValue::Functional(v) => v.qualified_name(),
            PropertyValue::NonFunctional(list) => list.qualified_name(),
        }
    }

    pub fn as_functional(&self) -> Option<&Functional> {
        match self {
            PropertyValue::Functional(v) => Some(v),
            PropertyValue::NonFunctional(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&NonFunctional> {
        match self {
            PropertyValue::NonFunctional(list) => Some(list),
            PropertyValue::Functional(_) => None,
        }
    }

    fn deserialize(
        def: &'static PropertyDefinition,
        map: &JsonMap,
        aliases: &AliasMap,
        registry: &Registry,
    ) -> Result<Option<Self>> {
        if def.functional {
            Ok(Functional::deserialize(def, map, aliases, registry)?.map(PropertyValue::Functional))
        } else {
            Ok(NonFunctional::deserialize(def, map, aliases, registry)?
                .map(PropertyValue::NonFunctional))
        }
    }

    pub fn serialize(&self, registry: &Registry) -> Result<JsonValue> {
        match self {
            PropertyValue::Functional(v) => v.serialize(registry),
            PropertyValue::NonFunctional(list) => list.serialize(registry),
        }
    }

    pub fn cmp_canonical(&self, other: &Self, registry: &Registry) -> Ordering {
        match (self, other) {
            (PropertyValue::Functional(a), PropertyValue::Functional(b)) => {
                a.cmp_canonical(b, registry)
            }
            (PropertyValue::NonFunctional(a), PropertyValue::NonFunctional(b)) => {
                a.cmp_canonical(b, registry)
            }
            _ => Ordering::Equal,
        }
    }

    pub fn jsonld_context(&self, registry: &Registry) -> JsonLdContext {
        match self {
            PropertyValue::Functional(v) => v.jsonld_context(registry),
            PropertyValue::NonFunctional(list) => list.jsonld_context(registry),
        }
    }

    fn normalize(&mut self, registry: &Registry) {
        match self {
            PropertyValue::Functional(v) => {
                if let Some(Value::Object(object)) = v.get_mut() {
                    object.normalize(registry);
                }
            }
            PropertyValue::NonFunctional(list) => {
                for i in 0..list.len() {
                    if let Some(Value::Object(object)) = list.at_mut(i).get_mut() {
                        object.normalize(registry);
                    }
                }
                // The first `type` entry is the primary type; keep it first.
                if !list.def().keyword {
                    list.sort(registry);
                }
            }
        }
    }
}

/// An instance of an ActivityStreams type.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    kind: TypeKind,
    alias: String,
    properties: IndexMap<&'static str, PropertyValue>,
    unknown: JsonMap,
}

impl Object {
    /// An empty object whose `type` already names `kind`.
    pub fn new(kind: TypeKind) -> Self {
        Self::with_alias(kind, "")
    }

    pub fn with_alias(kind: TypeKind, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        let mut types = NonFunctional::with_alias(&TYPE, alias.as_str());
        types.append(Value::String(qualify(&alias, kind.name()).into_owned()));
        let mut properties = IndexMap::new();
        properties.insert(TYPE.name, PropertyValue::NonFunctional(types));
        Self {
            kind,
            alias,
            properties,
            unknown: JsonMap::new(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn extends(&self, other: TypeKind) -> bool {
        self.kind.extends(other)
    }

    pub fn is_extended_by(&self, other: TypeKind) -> bool {
        self.kind.is_extended_by(other)
    }

    pub fn is_disjoint_with(&self, other: TypeKind) -> bool {
        self.kind.is_disjoint_with(other)
    }

    /// Read an object of `kind` from raw JSON.
    ///
    /// Fails when the value is not a JSON object or its `type` does not
    /// name `kind`. Keys that are not properties of `kind` are kept as
    /// unknown properties.
    pub fn deserialize(
        kind: TypeKind,
        raw: &JsonValue,
        aliases: &AliasMap,
        registry: &Registry,
    ) -> Result<Self> {
        match raw {
            JsonValue::Object(map) => Self::deserialize_map(kind, map, aliases, registry),
            other => Err(Error::type_mismatch("a JSON object", other)),
        }
    }

    pub fn deserialize_map(
        kind: TypeKind,
        map: &JsonMap,
        aliases: &AliasMap,
        registry: &Registry,
    ) -> Result<Self> {
        let alias = alias_for(aliases, NS);
        let names = discriminator(map, alias)?;
        if !names.contains(&kind.name()) {
            return Err(Error::WrongDiscriminator {
                expected: kind.name().to_string(),
                found: names.join(", "),
            });
        }

        let mut properties = IndexMap::new();
        for def in kind.properties() {
            if let Some(value) = PropertyValue::deserialize(def, map, aliases, registry)? {
                properties.insert(def.name, value);
            }
        }

        let unknown: JsonMap = map
            .iter()
            .filter(|(key, _)| {
                key.as_str() != "@context"
                    && !kind.properties().any(|def| def.key(alias) == key.as_str())
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        trace!(
            kind = %kind,
            known = properties.len(),
            unknown = unknown.len(),
            "deserialized object"
        );
        Ok(Self {
            kind,
            alias: alias.to_string(),
            properties,
            unknown,
        })
    }

    /// JSON form of the object, without `@context`.
    ///
    /// `type` is always written. Unknown properties never overwrite known
    /// ones.
    pub fn serialize(&self, registry: &Registry) -> Result<JsonMap> {
        let mut map = JsonMap::new();
        // Replaced by the `type` property unless it was removed or emptied.
        map.insert(
            TYPE.name.to_string(),
            JsonValue::String(qualify(&self.alias, self.kind.name()).into_owned()),
        );
        for def in self.kind.properties() {
            let Some(property) = self.properties.get(def.name) else {
                continue;
            };
            let value = property
                .serialize(registry)
                .map_err(|e| e.in_property(def.name))?;
            let empty_keyword = def.keyword && value.as_array().is_some_and(Vec::is_empty);
            if value.is_null() || empty_keyword {
                continue;
            }
            map.insert(property.qualified_name(), value);
        }
        for (key, value) in &self.unknown {
            if !map.contains_key(key) {
                map.insert(key.clone(), value.clone());
            }
        }
        Ok(map)
    }

    /// Canonical order: kind priority first, then each property in
    /// definition order, an absent property sorting before a present one.
    /// Unknown properties are not compared.
    pub fn cmp_canonical(&self, other: &Self, registry: &Registry) -> Ordering {
        self.kind.cmp(&other.kind).then_with(|| {
            for def in self.kind.properties() {
                let ord = match (self.properties.get(def.name), other.properties.get(def.name)) {
                    (Some(lhs), Some(rhs)) => lhs.cmp_canonical(rhs, registry),
                    (None, Some(_)) => Ordering::Less,
                    (Some(_), None) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        })
    }

    pub fn less_than(&self, other: &Self, registry: &Registry) -> bool {
        self.cmp_canonical(other, registry) == Ordering::Less
    }

    /// Namespaces and aliases needed to round-trip this object.
    pub fn jsonld_context(&self, registry: &Registry) -> JsonLdContext {
        let mut ctx = JsonLdContext::with_namespace(NS, self.alias.as_str());
        for property in self.properties() {
            ctx.merge(&property.jsonld_context(registry));
        }
        ctx
    }

    /// Sort every multi-valued property, recursively, into canonical order.
    pub fn normalize(&mut self, registry: &Registry) {
        for property in self.properties.values_mut() {
            property.normalize(registry);
        }
    }

    /// Set properties, in definition order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyValue> {
        self.kind
            .properties()
            .filter_map(|def| self.properties.get(def.name))
    }

    pub fn get(&self, def: &PropertyDefinition) -> Option<&PropertyValue> {
        self.properties.get(def.name)
    }

    pub fn contains(&self, def: &PropertyDefinition) -> bool {
        self.properties.contains_key(def.name)
    }

    pub fn functional(&self, def: &PropertyDefinition) -> Option<&Functional> {
        self.get(def).and_then(PropertyValue::as_functional)
    }

    pub fn list(&self, def: &PropertyDefinition) -> Option<&NonFunctional> {
        self.get(def).and_then(PropertyValue::as_list)
    }

    /// The functional property `def`, created empty if absent.
    ///
    /// # Panics
    ///
    /// Panics if `def` is not a functional property of this object's type.
    pub fn functional_entry(&mut self, def: &'static PropertyDefinition) -> &mut Functional {
        self.check_property(def, true);
        let alias = self.alias.as_str();
        let entry = self
            .properties
            .entry(def.name)
            .or_insert_with(|| PropertyValue::Functional(Functional::with_alias(def, alias)));
        match entry {
            PropertyValue::Functional(v) => v,
            PropertyValue::NonFunctional(_) => unreachable!("{} stored as a list", def.name),
        }
    }

    /// The non-functional property `def`, created empty if absent.
    ///
    /// # Panics
    ///
    /// Panics if `def` is not a non-functional property of this object's type.
    pub fn list_entry(&mut self, def: &'static PropertyDefinition) -> &mut NonFunctional {
        self.check_property(def, false);
        let alias = self.alias.as_str();
        let entry = self
            .properties
            .entry(def.name)
            .or_insert_with(|| PropertyValue::NonFunctional(NonFunctional::with_alias(def, alias)));
        match entry {
            PropertyValue::NonFunctional(list) => list,
            PropertyValue::Functional(_) => unreachable!("{} stored as a single value", def.name),
        }
    }

    /// Set a functional property.
    pub fn set(&mut self, def: &'static PropertyDefinition, value: impl Into<Value>) {
        self.functional_entry(def).set(value.into());
    }

    pub fn set_iri(&mut self, def: &'static PropertyDefinition, iri: Iri) {
        self.functional_entry(def).set_iri(iri);
    }

    /// Append to a non-functional property.
    pub fn append(&mut self, def: &'static PropertyDefinition, value: impl Into<Value>) {
        self.list_entry(def).append(value.into());
    }

    pub fn append_iri(&mut self, def: &'static PropertyDefinition, iri: Iri) {
        self.list_entry(def).append_iri(iri);
    }

    pub fn remove(&mut self, def: &PropertyDefinition) -> Option<PropertyValue> {
        self.properties.shift_remove(def.name)
    }

    /// The `id` of the object.
    pub fn id(&self) -> Option<&Iri> {
        let id = self.functional(&ID)?;
        id.get_iri().or_else(|| id.get().and_then(Value::as_iri))
    }

    pub fn set_id(&mut self, iri: Iri) {
        self.set_iri(&ID, iri);
    }

    pub fn unknown_properties(&self) -> &JsonMap {
        &self.unknown
    }

    pub fn unknown_properties_mut(&mut self) -> &mut JsonMap {
        &mut self.unknown
    }

    fn check_property(&self, def: &PropertyDefinition, functional: bool) {
        assert!(
            self.kind.has_property(def),
            "{} has no property {:?}",
            self.kind,
            def.name
        );
        assert!(
            def.functional == functional,
            "property {:?} is {}functional",
            def.name,
            if def.functional { "" } else { "non-" }
        );
    }
}

/// Type names listed in a `type` discriminator, alias prefix removed.
pub(crate) fn discriminator<'m>(map: &'m JsonMap, alias: &str) -> Result<Vec<&'m str>> {
    let prefix = if alias.is_empty() {
        String::new()
    } else {
        format!("{}:", alias)
    };
    let strip = |s: &'m str| s.strip_prefix(prefix.as_str()).unwrap_or(s);
    match map.get(TYPE.name) {
        None => Err(Error::MissingDiscriminator),
        Some(JsonValue::String(s)) => Ok(vec![strip(s)]),
        Some(JsonValue::Array(items)) => Ok(items
            .iter()
            .filter_map(JsonValue::as_str)
            .map(strip)
            .collect()),
        Some(other) => Err(Error::UnrecognizedDiscriminator(other.to_string())),
    }
}

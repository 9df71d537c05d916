//! Kind registry.
//!
//! Kinds of a vocabulary refer to each other: a `Question` holds an `anyOf`
//! property whose values may themselves be `Question`s. Rather than having
//! kind implementations call each other directly, every kind publishes a
//! [`KindFns`] bundle into a [`KindRegistry`], and every per-kind function
//! receives the registry so it can dispatch to its peers.
//!
//! The registry is assembled once through [`KindRegistryBuilder`] and is
//! immutable afterwards. Sharing it between threads only needs a one-time
//! initialization barrier such as [`std::sync::OnceLock`].

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::fmt;
use tracing::debug;

use crate::context::JsonLdContext;
use crate::error::{Error, Result};
use crate::vocabulary::{AliasMap, Vocabulary};

/// Builds the zero value of a kind.
pub type Constructor<V> = fn(<V as Vocabulary>::Kind) -> <V as Vocabulary>::Value;

/// Interprets raw JSON as a value of the given kind.
pub type Deserializer<V> = fn(
    <V as Vocabulary>::Kind,
    &JsonValue,
    &AliasMap,
    &KindRegistry<V>,
) -> Result<<V as Vocabulary>::Value>;

pub type Serializer<V> = fn(&<V as Vocabulary>::Value, &KindRegistry<V>) -> Result<JsonValue>;

/// Strict weak ordering between two values of the same kind.
pub type Comparator<V> =
    fn(&<V as Vocabulary>::Value, &<V as Vocabulary>::Value, &KindRegistry<V>) -> bool;

pub type ContextAccessor<V> = fn(&<V as Vocabulary>::Value, &KindRegistry<V>) -> JsonLdContext;

/// The function table published for one kind.
pub struct KindFns<V: Vocabulary> {
    pub construct: Constructor<V>,
    pub deserialize: Deserializer<V>,
    pub serialize: Serializer<V>,
    pub less: Comparator<V>,
    pub context: ContextAccessor<V>,
}

impl<V: Vocabulary> Clone for KindFns<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Vocabulary> Copy for KindFns<V> {}

impl<V: Vocabulary> fmt::Debug for KindFns<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindFns").finish_non_exhaustive()
    }
}

/// Collects kind registrations during initialization.
pub struct KindRegistryBuilder<V: Vocabulary> {
    entries: IndexMap<V::Kind, KindFns<V>>,
}

impl<V: Vocabulary> Default for KindRegistryBuilder<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V: Vocabulary> KindRegistryBuilder<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the functions for `kind`.
    ///
    /// # Panics
    ///
    /// Registering the same kind twice is a wiring bug and panics.
    pub fn register(&mut self, kind: V::Kind, fns: KindFns<V>) -> &mut Self {
        if self.entries.insert(kind, fns).is_some() {
            panic!("kind {} registered twice", kind);
        }
        debug!(%kind, "registered kind");
        self
    }

    pub fn is_registered(&self, kind: V::Kind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Freeze the table.
    pub fn build(self) -> KindRegistry<V> {
        debug!(kinds = self.entries.len(), "kind registry built");
        KindRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable per-kind function table.
pub struct KindRegistry<V: Vocabulary> {
    entries: IndexMap<V::Kind, KindFns<V>>,
}

impl<V: Vocabulary> KindRegistry<V> {
    pub fn builder() -> KindRegistryBuilder<V> {
        KindRegistryBuilder::new()
    }

    pub fn get(&self, kind: V::Kind) -> Option<&KindFns<V>> {
        self.entries.get(&kind)
    }

    /// Fallible lookup for callers that prefer an error over a panic.
    pub fn try_lookup(&self, kind: V::Kind) -> Result<&KindFns<V>> {
        self.get(kind)
            .ok_or_else(|| Error::RegistryNotInitialized(kind.to_string()))
    }

    /// Look up the functions for `kind`.
    ///
    /// # Panics
    ///
    /// Panics if `kind` was never registered. Every kind a vocabulary uses
    /// must be wired before any (de)serialization happens.
    pub fn lookup(&self, kind: V::Kind) -> &KindFns<V> {
        match self.entries.get(&kind) {
            Some(fns) => fns,
            None => panic!("kind {} looked up before registration", kind),
        }
    }

    pub fn contains(&self, kind: V::Kind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = V::Kind> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zero value of `kind`.
    pub fn construct(&self, kind: V::Kind) -> V::Value {
        (self.lookup(kind).construct)(kind)
    }

    pub fn deserialize(
        &self,
        kind: V::Kind,
        raw: &JsonValue,
        aliases: &AliasMap,
    ) -> Result<V::Value> {
        (self.lookup(kind).deserialize)(kind, raw, aliases, self)
    }

    pub fn serialize(&self, value: &V::Value) -> Result<JsonValue> {
        (self.lookup(V::kind_of(value)).serialize)(value, self)
    }

    /// Compare two values through their kind's comparator.
    ///
    /// Values of different kinds are ordered by registration order; callers
    /// that care about a property's own kind priority compare kind indices
    /// first.
    pub fn less(&self, lhs: &V::Value, rhs: &V::Value) -> bool {
        let (lk, rk) = (V::kind_of(lhs), V::kind_of(rhs));
        if lk == rk {
            (self.lookup(lk).less)(lhs, rhs, self)
        } else {
            self.entries.get_index_of(&lk) < self.entries.get_index_of(&rk)
        }
    }

    pub fn context(&self, value: &V::Value) -> JsonLdContext {
        (self.lookup(V::kind_of(value)).context)(value, self)
    }
}

impl<V: Vocabulary> fmt::Debug for KindRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindRegistry")
            .field("kinds", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

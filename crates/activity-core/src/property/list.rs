use serde_json::Value as JsonValue;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use super::{lookup_raw, Property, PropertyDef, TaggedValue};
use crate::context::JsonLdContext;
use crate::error::Result;
use crate::iri::Iri;
use crate::registry::KindRegistry;
use crate::vocabulary::{AliasMap, JsonMap, Vocabulary};

/// Ordered values of a non-functional property.
///
/// Insertion order is the serialization order. Each element stores its own
/// position; every structural change re-synchronizes the positions of the
/// elements it moved. Elements that leave the list through [`remove`] or
/// [`set`] come back detached (their [`TaggedValue::index`] is `None`).
///
/// [`remove`]: PropertyList::remove
/// [`set`]: PropertyList::set
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyList<V: Vocabulary> {
    def: &'static PropertyDef<V>,
    alias: String,
    items: Vec<TaggedValue<V>>,
}

impl<V: Vocabulary> PropertyList<V> {
    pub fn new(def: &'static PropertyDef<V>) -> Self {
        Self::with_alias(def, "")
    }

    pub fn with_alias(def: &'static PropertyDef<V>, alias: impl Into<String>) -> Self {
        Self {
            def,
            alias: alias.into(),
            items: Vec::new(),
        }
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

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn at(&self, index: usize) -> &TaggedValue<V> {
        self.check_bounds(index);
        &self.items[index]
    }

    /// Mutable element at `index`. Edits must keep a permitted kind.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn at_mut(&mut self, index: usize) -> &mut TaggedValue<V> {
        self.check_bounds(index);
        &mut self.items[index]
    }

    pub fn get(&self, index: usize) -> Option<&TaggedValue<V>> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaggedValue<V>> {
        self.items.iter()
    }

    /// Cursor on the first element, or `None` when empty.
    pub fn begin(&self) -> Option<Cursor<'_, V>> {
        self.cursor(0)
    }

    pub fn cursor(&self, index: usize) -> Option<Cursor<'_, V>> {
        (index < self.items.len()).then_some(Cursor { list: self, index })
    }

    /// Element following `element`, if `element` belongs to this list.
    pub fn next_of(&self, element: &TaggedValue<V>) -> Option<&TaggedValue<V>> {
        let index = self.position_of(element)?;
        self.items.get(index + 1)
    }

    /// Element preceding `element`, if `element` belongs to this list.
    pub fn prev_of(&self, element: &TaggedValue<V>) -> Option<&TaggedValue<V>> {
        let index = self.position_of(element)?;
        index.checked_sub(1).and_then(|i| self.items.get(i))
    }

    fn position_of(&self, element: &TaggedValue<V>) -> Option<usize> {
        let index = element.index()?;
        let stored = self.items.get(index)?;
        std::ptr::eq(stored, element).then_some(index)
    }

    /// Append a value. Cursors and positions of existing elements stay valid.
    pub fn append(&mut self, value: V::Value) {
        let element = self.element_from_value(value);
        self.push_back(element);
    }

    pub fn append_iri(&mut self, iri: Iri) {
        let element = self.element_from_iri(iri);
        self.push_back(element);
    }

    /// Append an already built element, e.g. one taken from another list.
    ///
    /// # Panics
    ///
    /// Panics if `element` belongs to a different property.
    pub fn append_value(&mut self, element: TaggedValue<V>) {
        self.check_def(&element);
        self.push_back(element);
    }

    /// # Panics
    ///
    /// Panics if `element` belongs to a different property.
    pub fn prepend_value(&mut self, element: TaggedValue<V>) {
        self.check_def(&element);
        self.push_front(element);
    }

    /// Prepend a value. Every existing position shifts by one.
    pub fn prepend(&mut self, value: V::Value) {
        let element = self.element_from_value(value);
        self.push_front(element);
    }

    pub fn prepend_iri(&mut self, iri: Iri) {
        let element = self.element_from_iri(iri);
        self.push_front(element);
    }

    /// Replace the element at `index`, returning the detached old one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or the kind is not permitted.
    pub fn set(&mut self, index: usize, value: V::Value) -> TaggedValue<V> {
        self.check_bounds(index);
        let element = self.element_from_value(value);
        self.replace(index, element)
    }

    /// Replace the element at `index` with an IRI, returning the detached old one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_iri(&mut self, index: usize, iri: Iri) -> TaggedValue<V> {
        self.check_bounds(index);
        let element = self.element_from_iri(iri);
        self.replace(index, element)
    }

    /// Remove the element at `index`, shifting later elements down.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> TaggedValue<V> {
        self.check_bounds(index);
        let mut removed = self.items.remove(index);
        removed.detach();
        self.reindex_from(index);
        removed
    }

    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.check_bounds(i);
        self.check_bounds(j);
        self.items.swap(i, j);
        self.items[i].attach(i);
        self.items[j].attach(j);
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Priority index of the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn kind_index(&self, index: usize) -> isize {
        self.at(index).kind_index()
    }

    /// Canonical comparison of two elements of this list.
    pub fn less(&self, i: usize, j: usize, registry: &KindRegistry<V>) -> bool {
        self.at(i).less_than(self.at(j), registry)
    }

    /// Stable sort by canonical order.
    pub fn sort(&mut self, registry: &KindRegistry<V>) {
        self.items.sort_by(|a, b| a.cmp_canonical(b, registry));
        self.reindex_from(0);
    }

    /// Read a list from a property's raw JSON: an array, or a single scalar.
    pub fn deserialize_value(
        def: &'static PropertyDef<V>,
        raw: &JsonValue,
        aliases: &AliasMap,
        registry: &KindRegistry<V>,
    ) -> Result<Self> {
        let mut list = Self::with_alias(def, def.alias_in(aliases));
        match raw {
            JsonValue::Array(elements) => {
                for element in elements {
                    list.items.push(TaggedValue::deserialize_value(
                        def, element, aliases, registry,
                    )?);
                }
            }
            scalar => list
                .items
                .push(TaggedValue::deserialize_value(def, scalar, aliases, registry)?),
        }
        list.reindex_from(0);
        Ok(list)
    }

    /// JSON form in list order.
    ///
    /// A single element is written bare rather than as a one-element array;
    /// consumers commonly reject arrays for singleton fields such as `type`.
    pub fn serialize(&self, registry: &KindRegistry<V>) -> Result<JsonValue> {
        let mut out = Vec::with_capacity(self.items.len());
        for element in &self.items {
            out.push(element.serialize(registry)?);
        }
        if out.len() == 1 {
            return Ok(out.remove(0));
        }
        Ok(JsonValue::Array(out))
    }

    /// Position-wise canonical comparison; a strict prefix sorts first.
    pub fn cmp_canonical(&self, other: &Self, registry: &KindRegistry<V>) -> Ordering {
        for (lhs, rhs) in self.items.iter().zip(&other.items) {
            match lhs.cmp_canonical(rhs, registry) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.items.len().cmp(&other.items.len())
    }

    pub fn less_than(&self, other: &Self, registry: &KindRegistry<V>) -> bool {
        self.cmp_canonical(other, registry) == Ordering::Less
    }

    pub fn jsonld_context(&self, registry: &KindRegistry<V>) -> JsonLdContext {
        let mut ctx = JsonLdContext::with_namespace(self.def.namespace, self.alias.as_str());
        for element in &self.items {
            ctx.merge(&element.jsonld_context(registry));
        }
        ctx
    }

    fn element_from_value(&self, value: V::Value) -> TaggedValue<V> {
        let mut element = TaggedValue::with_alias(self.def, self.alias.as_str());
        element.set(value);
        element
    }

    fn element_from_iri(&self, iri: Iri) -> TaggedValue<V> {
        let mut element = TaggedValue::with_alias(self.def, self.alias.as_str());
        element.set_iri(iri);
        element
    }

    fn push_back(&mut self, mut element: TaggedValue<V>) {
        element.attach(self.items.len());
        self.items.push(element);
    }

    fn push_front(&mut self, element: TaggedValue<V>) {
        self.items.insert(0, element);
        self.reindex_from(0);
    }

    fn replace(&mut self, index: usize, mut element: TaggedValue<V>) -> TaggedValue<V> {
        element.attach(index);
        let mut old = std::mem::replace(&mut self.items[index], element);
        old.detach();
        old
    }

    fn reindex_from(&mut self, start: usize) {
        for (i, element) in self.items.iter_mut().enumerate().skip(start) {
            element.attach(i);
        }
    }

    fn check_def(&self, element: &TaggedValue<V>) {
        assert!(
            element.def() == self.def,
            "element of property {:?} added to property {:?}",
            element.name(),
            self.def.name
        );
    }

    fn check_bounds(&self, index: usize) {
        assert!(
            index < self.items.len(),
            "index {} out of range for property {:?} of length {}",
            index,
            self.def.name,
            self.items.len()
        );
    }
}

impl<'a, V: Vocabulary> IntoIterator for &'a PropertyList<V> {
    type Item = &'a TaggedValue<V>;
    type IntoIter = std::slice::Iter<'a, TaggedValue<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<V: Vocabulary> Property<V> for PropertyList<V> {
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
        PropertyList::serialize(self, registry)
    }

    fn cmp_canonical(&self, other: &Self, registry: &KindRegistry<V>) -> Ordering {
        PropertyList::cmp_canonical(self, other, registry)
    }

    fn jsonld_context(&self, registry: &KindRegistry<V>) -> JsonLdContext {
        PropertyList::jsonld_context(self, registry)
    }
}

/// Position-based traversal over a [`PropertyList`].
pub struct Cursor<'a, V: Vocabulary> {
    list: &'a PropertyList<V>,
    index: usize,
}

impl<'a, V: Vocabulary> Cursor<'a, V> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> &'a TaggedValue<V> {
        &self.list.items[self.index]
    }

    /// Cursor on the following element, `None` past the end.
    pub fn next(self) -> Option<Self> {
        self.list.cursor(self.index + 1)
    }

    /// Cursor on the preceding element, `None` before the start.
    pub fn prev(self) -> Option<Self> {
        self.index.checked_sub(1).and_then(|i| self.list.cursor(i))
    }
}

impl<V: Vocabulary> Clone for Cursor<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Vocabulary> Copy for Cursor<'_, V> {}

impl<V: Vocabulary> Deref for Cursor<'_, V> {
    type Target = TaggedValue<V>;

    fn deref(&self) -> &TaggedValue<V> {
        self.value()
    }
}

impl<V: Vocabulary> fmt::Debug for Cursor<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("property", &self.list.def.name)
            .field("index", &self.index)
            .finish()
    }
}

use std::borrow::Cow;
use std::fmt;

use crate::context::{alias_for, qualify};
use crate::vocabulary::{AliasMap, Vocabulary};

/// Static description of one vocabulary property.
///
/// `kinds` lists the kinds the property may hold, in priority order: the
/// position of a kind in this slice is its kind index, the order in which
/// deserialization tries it, and the key for canonical ordering.
pub struct PropertyDef<V: Vocabulary> {
    pub name: &'static str,
    /// Namespace URI the property belongs to.
    pub namespace: &'static str,
    /// Single-valued when `true`.
    pub functional: bool,
    /// JSON-LD keyword aliases (`id`, `type`) are never alias-qualified.
    pub keyword: bool,
    pub kinds: &'static [V::Kind],
}

impl<V: Vocabulary> PropertyDef<V> {
    pub const fn functional(
        name: &'static str,
        namespace: &'static str,
        kinds: &'static [V::Kind],
    ) -> Self {
        Self {
            name,
            namespace,
            functional: true,
            keyword: false,
            kinds,
        }
    }

    pub const fn non_functional(
        name: &'static str,
        namespace: &'static str,
        kinds: &'static [V::Kind],
    ) -> Self {
        Self {
            name,
            namespace,
            functional: false,
            keyword: false,
            kinds,
        }
    }

    /// Mark the property as a keyword alias written without prefix.
    pub const fn keyword(self) -> Self {
        Self {
            keyword: true,
            ..self
        }
    }

    /// Priority index of `kind`, if the property permits it.
    pub fn kind_index(&self, kind: V::Kind) -> Option<usize> {
        self.kinds.iter().position(|k| *k == kind)
    }

    pub fn permits(&self, kind: V::Kind) -> bool {
        self.kind_index(kind).is_some()
    }

    /// Alias this property's namespace has in `aliases`.
    pub fn alias_in<'a>(&self, aliases: &'a AliasMap) -> &'a str {
        alias_for(aliases, self.namespace)
    }

    /// JSON key under `alias`.
    pub fn key<'a>(&'a self, alias: &str) -> Cow<'a, str> {
        if self.keyword {
            Cow::Borrowed(self.name)
        } else {
            qualify(alias, self.name)
        }
    }

    pub(crate) fn assert_permits(&self, kind: V::Kind) {
        assert!(
            self.permits(kind),
            "property {:?} does not permit kind {}",
            self.name,
            kind
        );
    }
}

impl<V: Vocabulary> fmt::Debug for PropertyDef<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDef")
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("functional", &self.functional)
            .field("kinds", &self.kinds)
            .finish()
    }
}

impl<V: Vocabulary> PartialEq for PropertyDef<V> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.namespace == other.namespace
    }
}

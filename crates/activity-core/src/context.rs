//! JSON-LD context accumulation.
//!
//! Every property and value knows which namespaces it needs and under which
//! alias. Contexts are flat maps, merged first-writer-wins: the mappings are
//! fixed when the vocabulary is defined, so a later writer never carries a
//! different alias for the same namespace in practice.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::borrow::Cow;

use crate::vocabulary::AliasMap;

/// Namespace URI -> alias required to round-trip a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonLdContext {
    entries: IndexMap<String, String>,
}

impl JsonLdContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context holding a single namespace.
    pub fn with_namespace(namespace: impl Into<String>, alias: impl Into<String>) -> Self {
        let mut ctx = Self::new();
        ctx.insert(namespace, alias);
        ctx
    }

    /// Add a namespace unless it is already present.
    ///
    /// Returns `true` when the entry was added.
    pub fn insert(&mut self, namespace: impl Into<String>, alias: impl Into<String>) -> bool {
        let namespace = namespace.into();
        if self.entries.contains_key(&namespace) {
            return false;
        }
        self.entries.insert(namespace, alias.into());
        true
    }

    /// Merge `other` into `self`, keeping existing entries on collision.
    pub fn merge(&mut self, other: &JsonLdContext) {
        for (namespace, alias) in &other.entries {
            if !self.entries.contains_key(namespace) {
                self.entries.insert(namespace.clone(), alias.clone());
            }
        }
    }

    /// Consuming form of [`merge`](Self::merge).
    pub fn merged(mut self, other: &JsonLdContext) -> Self {
        self.merge(other);
        self
    }

    pub fn alias(&self, namespace: &str) -> Option<&str> {
        self.entries.get(namespace).map(String::as_str)
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.entries.contains_key(namespace)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as a `@context` value.
    ///
    /// Namespaces without an alias become plain strings, aliased ones become
    /// `{alias: namespace}` objects. A single entry is written as a scalar.
    pub fn to_json(&self) -> JsonValue {
        let mut items: Vec<JsonValue> = self
            .entries
            .iter()
            .map(|(namespace, alias)| {
                if alias.is_empty() {
                    JsonValue::String(namespace.clone())
                } else {
                    let mut m = serde_json::Map::new();
                    m.insert(alias.clone(), JsonValue::String(namespace.clone()));
                    JsonValue::Object(m)
                }
            })
            .collect();
        if items.len() == 1 {
            items.remove(0)
        } else {
            JsonValue::Array(items)
        }
    }
}

impl<'a> Extend<(&'a str, &'a str)> for JsonLdContext {
    fn extend<T: IntoIterator<Item = (&'a str, &'a str)>>(&mut self, iter: T) {
        for (namespace, alias) in iter {
            self.insert(namespace, alias);
        }
    }
}

/// Build an alias map from a document's `@context` value.
///
/// Only a single level is resolved: string entries are namespaces used
/// without alias, object entries map `alias -> namespace`, arrays are
/// walked element by element. Anything else is ignored.
pub fn alias_map_from_context(context: &JsonValue) -> AliasMap {
    let mut aliases = AliasMap::new();
    collect_aliases(context, &mut aliases);
    aliases
}

fn collect_aliases(context: &JsonValue, aliases: &mut AliasMap) {
    match context {
        JsonValue::String(namespace) => {
            aliases.entry(namespace.clone()).or_default();
        }
        JsonValue::Array(items) => {
            for item in items {
                collect_aliases(item, aliases);
            }
        }
        JsonValue::Object(m) => {
            for (alias, value) in m {
                if let JsonValue::String(namespace) = value {
                    aliases
                        .entry(namespace.clone())
                        .or_insert_with(|| alias.clone());
                }
            }
        }
        _ => {}
    }
}

/// The alias registered for `namespace`, or `""`.
pub fn alias_for<'a>(aliases: &'a AliasMap, namespace: &str) -> &'a str {
    aliases.get(namespace).map(String::as_str).unwrap_or("")
}

/// `alias:name`, or the bare name when there is no alias.
pub fn qualify<'a>(alias: &str, name: &'a str) -> Cow<'a, str> {
    if alias.is_empty() {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{}:{}", alias, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const AS: &str = "https://www.w3.org/ns/activitystreams";
    const SEC: &str = "https://w3id.org/security/v1";

    #[test]
    fn test_first_writer_wins() {
        let mut ctx = JsonLdContext::with_namespace(AS, "");
        assert!(!ctx.insert(AS, "as"));
        ctx.merge(&JsonLdContext::with_namespace(AS, "other"));
        assert_eq!(ctx.alias(AS), Some(""));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let nested = JsonLdContext::with_namespace(SEC, "sec");
        let once = JsonLdContext::with_namespace(AS, "").merged(&nested);
        let twice = once.clone().merged(&nested);
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_merge_is_associative() {
        let a = JsonLdContext::with_namespace(AS, "");
        let b = JsonLdContext::with_namespace(SEC, "sec");
        let c = JsonLdContext::with_namespace(AS, "as");
        let left = a.clone().merged(&b).merged(&c);
        let right = a.merged(&b.merged(&c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_to_json_single_entry_is_scalar() {
        let ctx = JsonLdContext::with_namespace(AS, "");
        assert_eq!(ctx.to_json(), json!(AS));
    }

    #[test]
    fn test_to_json_multiple_entries() {
        let ctx = JsonLdContext::with_namespace(AS, "").merged(&JsonLdContext::with_namespace(SEC, "sec"));
        assert_eq!(ctx.to_json(), json!([AS, {"sec": SEC}]));
    }

    #[test]
    fn test_alias_map_from_context() {
        let aliases = alias_map_from_context(&json!([AS, {"sec": SEC}, 42]));
        assert_eq!(alias_for(&aliases, AS), "");
        assert_eq!(alias_for(&aliases, SEC), "sec");
        assert_eq!(alias_for(&aliases, "https://unknown.example"), "");
    }

    #[test]
    fn test_alias_map_round_trips_to_json() {
        let ctx = JsonLdContext::with_namespace(AS, "as");
        let aliases = alias_map_from_context(&ctx.to_json());
        assert_eq!(alias_for(&aliases, AS), "as");
    }

    #[test]
    fn test_qualify() {
        assert_eq!(qualify("", "name"), "name");
        assert_eq!(qualify("as", "name"), "as:name");
    }
}

//! Reading and writing whole ActivityStreams documents.

use activity_core::{alias_map_from_context, Error};
use serde_json::Value as JsonValue;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

use crate::config::CodecConfig;
use crate::error::Result;
use crate::kinds::TypeKind;
use crate::object::Object;
use crate::registry::build_registry;
use crate::resolver::resolve;
use crate::value::Registry;

const CONTEXT_KEY: &str = "@context";

/// Decodes JSON documents into [`Object`]s and encodes them back.
///
/// The registry is built once and never changes; clones of a codec share it.
#[derive(Debug, Clone)]
pub struct Codec {
    registry: Arc<Registry>,
    config: CodecConfig,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self::with_registry(Arc::new(build_registry()), config)
    }

    /// Use an already built registry.
    pub fn with_registry(registry: Arc<Registry>, config: CodecConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// An empty object of `kind` using the configured alias.
    pub fn new_object(&self, kind: TypeKind) -> Object {
        Object::with_alias(kind, self.config.vocabulary_alias())
    }

    /// Decode a JSON document.
    ///
    /// Aliases come from the document's `@context` when present, otherwise
    /// from the configuration.
    pub fn decode(&self, raw: &JsonValue) -> Result<Object> {
        let JsonValue::Object(map) = raw else {
            return Err(Error::type_mismatch("a JSON object", raw).into());
        };
        let aliases = match map.get(CONTEXT_KEY) {
            Some(context) => alias_map_from_context(context),
            None => self.config.alias_map(),
        };
        let object = resolve(map, &aliases, &self.registry)?;
        debug!(kind = %object.kind(), "decoded document");
        Ok(object)
    }

    pub fn decode_str(&self, text: &str) -> Result<Object> {
        let raw: JsonValue = serde_json::from_str(text)?;
        self.decode(&raw)
    }

    /// Encode an object as a JSON document.
    pub fn encode(&self, object: &Object) -> Result<JsonValue> {
        let object = if self.config.sort_lists {
            let mut sorted = object.clone();
            sorted.normalize(&self.registry);
            Cow::Owned(sorted)
        } else {
            Cow::Borrowed(object)
        };
        let mut map = object.serialize(&self.registry)?;
        if self.config.emit_context {
            let context = object.jsonld_context(&self.registry);
            map.insert(CONTEXT_KEY.to_string(), context.to_json());
        }
        Ok(JsonValue::Object(map))
    }

    pub fn encode_string(&self, object: &Object) -> Result<String> {
        Ok(serde_json::to_string(&self.encode(object)?)?)
    }
}

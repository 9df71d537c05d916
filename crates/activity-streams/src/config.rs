//! Codec configuration, loaded from `activitystreams.toml` or JSON.

use activity_core::{alias_for, AliasMap};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StreamsError};
use crate::properties::NS;

/// Settings of a [`Codec`](crate::Codec).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CodecConfig {
    /// Namespace URI -> alias.
    ///
    /// Used to read documents that carry no `@context`, and as the alias of
    /// objects created through the codec.
    pub aliases: IndexMap<String, String>,

    /// Write an `@context` entry when encoding
    pub emit_context: bool,

    /// Sort multi-valued properties into canonical order when encoding
    pub sort_lists: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            aliases: IndexMap::new(),
            emit_context: true,
            sort_lists: false,
        }
    }
}

impl CodecConfig {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        // Detect format based on extension
        if path.extension().is_some_and(|ext| ext == "json") {
            let config: CodecConfig = serde_json::from_str(&content)?;
            return config.validated();
        }

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CodecConfig = toml::from_str(content)?;
        config.validated()
    }

    pub fn alias_map(&self) -> AliasMap {
        self.aliases.clone()
    }

    /// Alias configured for the ActivityStreams namespace.
    pub fn vocabulary_alias(&self) -> &str {
        alias_for(&self.aliases, NS)
    }

    fn validated(self) -> Result<Self> {
        for (namespace, alias) in &self.aliases {
            if namespace.is_empty() {
                return Err(StreamsError::Config("empty namespace in [aliases]".into()));
            }
            if alias.contains(':') {
                return Err(StreamsError::Config(format!(
                    "alias {:?} for {} must not contain ':'",
                    alias, namespace
                )));
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::from_toml_str("").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert!(config.emit_context);
        assert!(!config.sort_lists);
        assert_eq!(config.vocabulary_alias(), "");
    }

    #[test]
    fn test_load_toml() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("activitystreams.toml");
        std::fs::write(
            &path,
            r#"
sort_lists = true

[aliases]
"https://www.w3.org/ns/activitystreams" = "as"
"#,
        )?;

        let config = CodecConfig::load(&path)?;
        assert!(config.sort_lists);
        assert!(config.emit_context);
        assert_eq!(config.vocabulary_alias(), "as");
        Ok(())
    }

    #[test]
    fn test_load_json() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("activitystreams.json");
        std::fs::write(&path, r#"{"emit_context": false}"#)?;

        let config = CodecConfig::load(&path)?;
        assert!(!config.emit_context);
        Ok(())
    }

    #[test]
    fn test_rejects_alias_with_colon() {
        let err = CodecConfig::from_toml_str("[aliases]\n\"https://example.com/ns\" = \"a:b\"")
            .unwrap_err();
        assert!(matches!(err, StreamsError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CodecConfig::load(Path::new("/nonexistent/activitystreams.toml")).unwrap_err();
        assert!(matches!(err, StreamsError::Io(_)));
    }

    #[test]
    fn test_schema_lists_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(CodecConfig)).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("aliases").is_some());
        assert!(properties.get("emit_context").is_some());
        assert!(properties.get("sort_lists").is_some());
    }
}

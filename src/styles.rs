//! Named style bundles
//!
//! A template can pull shared CSS into a style block by name, as in
//! `<style include="shared-styles">`. The bundle contents belong to the host;
//! this module only maps names to CSS, loaded from TOML.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing style bundles
#[derive(Error, Debug)]
pub enum StylesError {
    #[error("Failed to read style bundle file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse style bundle TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Style bundles by name
#[derive(Debug, Clone)]
pub struct StyleBundles {
    /// Optional name for the bundle set
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Bundle name -> CSS
    pub bundles: HashMap<String, String>,
}

/// TOML structure for deserializing style bundles
#[derive(Deserialize)]
struct TomlStyleBundles {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    bundles: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default bundles: the console's shared styles on top of Lumo spacing tokens
const DEFAULT_BUNDLES: &str = r##"
[metadata]
name = "lumo"
description = "Shared console styles"

[bundles]
shared-styles = """
:host {
    --lumo-space-m: 1rem;
    font-family: var(--lumo-font-family, sans-serif);
}
"""
"##;

impl StyleBundles {
    /// Create an empty bundle set
    pub fn empty() -> Self {
        Self {
            name: None,
            description: None,
            bundles: HashMap::new(),
        }
    }

    /// Load style bundles from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load style bundles from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesError> {
        let parsed: TomlStyleBundles = toml::from_str(content)?;

        Ok(StyleBundles {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            bundles: parsed.bundles,
        })
    }

    /// Look up a bundle's CSS
    ///
    /// Returns None if the bundle is not defined in this set.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.bundles.get(name).map(|s| s.as_str())
    }

    /// Add bundles from another set, replacing bundles with the same name
    pub fn merge(mut self, other: StyleBundles) -> Self {
        self.bundles.extend(other.bundles);
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
        self
    }
}

impl Default for StyleBundles {
    fn default() -> Self {
        Self::from_str(DEFAULT_BUNDLES).expect("Default bundles should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bundles() {
        let styles = StyleBundles::default();
        assert_eq!(styles.name.as_deref(), Some("lumo"));
        assert!(styles.resolve("shared-styles").unwrap().contains("--lumo-space-m"));
    }

    #[test]
    fn test_resolve_missing_bundle() {
        let styles = StyleBundles::default();
        assert_eq!(styles.resolve("nonexistent"), None);
    }

    #[test]
    fn test_empty_bundles() {
        let empty = StyleBundles::empty();
        assert!(empty.resolve("shared-styles").is_none());
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Dark"
description = "A dark theme"

[bundles]
shared-styles = ":host { color: #fff; }"
"##;
        let styles = StyleBundles::from_str(toml_str).expect("Should parse");
        assert_eq!(styles.name, Some("Dark".to_string()));
        assert_eq!(styles.description, Some("A dark theme".to_string()));
        assert_eq!(styles.resolve("shared-styles"), Some(":host { color: #fff; }"));
    }

    #[test]
    fn test_parse_toml_without_bundles() {
        let styles = StyleBundles::from_str("[metadata]\nname = \"bare\"").expect("Should parse");
        assert!(styles.bundles.is_empty());
    }

    #[test]
    fn test_merge_overrides() {
        let custom = StyleBundles::from_str("[bundles]\nshared-styles = \"p { margin: 0; }\"").unwrap();
        let merged = StyleBundles::default().merge(custom);
        assert_eq!(merged.resolve("shared-styles"), Some("p { margin: 0; }"));
        assert_eq!(merged.name.as_deref(), Some("lumo"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = StyleBundles::from_str(invalid);
        assert!(result.is_err());
    }
}

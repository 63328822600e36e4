//! Component manifests
//!
//! Declares additional components in TOML, each with markup and an optional
//! property schema:
//!
//! ```toml
//! [[component]]
//! tag = "show-about"
//! template = "<h1>{{title}}</h1>"
//!
//! [component.properties.title]
//! type = "string"
//! default = "About"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::component::{define, ComponentError, PropertySchema, Render, Tag};
use crate::registry::Registry;

/// Errors that can occur when loading a manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse manifest TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A set of component declarations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewManifest {
    #[serde(default, rename = "component")]
    pub components: Vec<ComponentEntry>,
}

/// One declared component
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentEntry {
    pub tag: String,
    pub template: String,
    #[serde(default)]
    pub properties: PropertySchema,
}

impl ViewManifest {
    /// Load a manifest from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            components = manifest.components.len(),
            "loaded component manifest"
        );
        Ok(manifest)
    }

    /// Load a manifest from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(content)?)
    }

    /// Define and register every entry, stopping at the first failure
    pub fn register_into(&self, registry: &mut Registry) -> Result<Vec<Tag>, ComponentError> {
        let mut registered = Vec::with_capacity(self.components.len());
        for entry in &self.components {
            let definition = define(
                &entry.tag,
                Render::markup(entry.template.as_str()),
                Some(entry.properties.clone()),
            )?;
            let stored = registry.register(definition)?;
            registered.push(stored.tag().clone());
        }
        Ok(registered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Properties;

    const MANIFEST: &str = r#"
[[component]]
tag = "show-about"
template = "<h1>{{title}}</h1><p>Version {{version}}</p>"

[component.properties.title]
type = "string"
default = "About"

[component.properties.version]
type = "number"
default = 3

[[component]]
tag = "show-footer"
template = "<footer>Apache-2.0</footer>"
"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = ViewManifest::from_str(MANIFEST).expect("Should parse");
        assert_eq!(manifest.components.len(), 2);
        assert_eq!(manifest.components[0].properties.len(), 2);
        assert!(manifest.components[1].properties.is_empty());
    }

    #[test]
    fn test_register_into() {
        let manifest = ViewManifest::from_str(MANIFEST).unwrap();
        let mut registry = Registry::new();
        let tags = manifest.register_into(&mut registry).expect("Should register");

        assert_eq!(tags.len(), 2);
        let about = registry.lookup("show-about").unwrap();
        let template = about.render(&Properties::new()).unwrap();
        assert_eq!(template.text_content(), "AboutVersion 3");
    }

    #[test]
    fn test_register_into_duplicate() {
        let manifest = ViewManifest::from_str(
            r#"
[[component]]
tag = "show-home"
template = "<p>shadow</p>"
"#,
        )
        .unwrap();
        let mut registry = Registry::with_builtin_views().unwrap();
        let err = manifest.register_into(&mut registry).unwrap_err();
        assert!(matches!(err, ComponentError::DuplicateTag { .. }));
    }

    #[test]
    fn test_register_into_invalid_tag() {
        let manifest = ViewManifest::from_str("[[component]]\ntag = \"about\"\ntemplate = \"<p/>\"").unwrap();
        let err = manifest.register_into(&mut Registry::new()).unwrap_err();
        assert!(matches!(err, ComponentError::InvalidTag { .. }));
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = ViewManifest::from_str("").unwrap();
        assert!(manifest.components.is_empty());
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(ViewManifest::from_str("[[component]]\ntag = ").is_err());
    }
}

//! Registry for component definitions

use std::collections::HashMap;
use std::sync::Arc;

use crate::component::{ComponentDefinition, ComponentError, Tag};

/// Mapping from tag to component definition
///
/// Write-once per tag: registering an existing tag fails and never replaces
/// the stored definition. There is no removal. Each registry is an explicit
/// value, so tests and hosts can keep isolated namespaces.
#[derive(Debug, Default)]
pub struct Registry {
    definitions: HashMap<Tag, Arc<ComponentDefinition>>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in views
    pub fn with_builtin_views() -> Result<Self, ComponentError> {
        let mut registry = Self::new();
        crate::views::register_builtin(&mut registry)?;
        Ok(registry)
    }

    /// Register a definition, returning the shared handle stored for it
    pub fn register(
        &mut self,
        definition: ComponentDefinition,
    ) -> Result<Arc<ComponentDefinition>, ComponentError> {
        if self.definitions.contains_key(definition.tag()) {
            return Err(ComponentError::DuplicateTag {
                tag: definition.tag().to_string(),
            });
        }

        let tag = definition.tag().clone();
        let definition = Arc::new(definition);
        tracing::debug!(%tag, properties = definition.schema().len(), "registered component");
        self.definitions.insert(tag, Arc::clone(&definition));
        Ok(definition)
    }

    /// Get the definition registered under a tag
    pub fn lookup(&self, tag: &str) -> Option<Arc<ComponentDefinition>> {
        self.definitions.get(tag).cloned()
    }

    /// Check if a tag is registered
    pub fn contains(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }

    /// Get all registered tags, sorted
    pub fn tags(&self) -> Vec<&Tag> {
        let mut tags: Vec<_> = self.definitions.keys().collect();
        tags.sort();
        tags
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{define, Render};

    fn definition(tag: &str, text: &str) -> ComponentDefinition {
        define(tag, Render::markup(format!("<p>{}</p>", text)), None).expect("Should define")
    }

    #[test]
    fn test_registry_register_and_lookup() {
        let mut registry = Registry::new();
        let stored = registry.register(definition("x-box", "box")).expect("Should register");

        assert!(registry.contains("x-box"));
        let found = registry.lookup("x-box").expect("Should be registered");
        assert!(Arc::ptr_eq(&stored, &found));
    }

    #[test]
    fn test_registry_duplicate_error() {
        let mut registry = Registry::new();
        let original = registry
            .register(definition("x-box", "first"))
            .expect("First register should succeed");

        let result = registry.register(definition("x-box", "second"));
        assert_eq!(
            result.unwrap_err(),
            ComponentError::DuplicateTag {
                tag: "x-box".to_string()
            }
        );
        assert!(Arc::ptr_eq(&original, &registry.lookup("x-box").unwrap()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_missing_is_none() {
        let registry = Registry::new();
        assert!(registry.lookup("x-missing").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_tags_sorted() {
        let mut registry = Registry::new();
        registry.register(definition("x-b", "b")).unwrap();
        registry.register(definition("x-a", "a")).unwrap();
        let tags: Vec<&str> = registry.tags().into_iter().map(|t| t.as_str()).collect();
        assert_eq!(tags, vec!["x-a", "x-b"]);
    }

    #[test]
    fn test_with_builtin_views() {
        let registry = Registry::with_builtin_views().expect("Built-ins should register");
        assert!(registry.contains("show-home"));
    }
}

//! View Registry - named view components rendered from templates
//!
//! This library provides a component registry, an inline markup parser, and a
//! renderer that mounts components and serializes them to HTML.
//!
//! # Example
//!
//! ```rust
//! use view_registry::render;
//!
//! let html = render("show-home").unwrap();
//! assert!(html.contains("SAPL PDP-Server CE"));
//! ```

pub mod component;
pub mod error;
pub mod manifest;
pub mod markup;
pub mod registry;
pub mod renderer;
pub mod styles;
pub mod template;
pub mod views;

pub use component::{
    define, ComponentDefinition, ComponentError, Properties, PropertyDecl, PropertySchema,
    PropertyType, Render, Tag,
};
pub use error::ParseError;
pub use manifest::{ManifestError, ViewManifest};
pub use registry::Registry;
pub use renderer::{
    render_component_html, HtmlConfig, MemorySurface, MountHandle, MountState, Renderer, Surface,
};
pub use styles::{StyleBundles, StylesError};
pub use template::{Template, TemplateBuilder, Value};

use std::path::Path;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum ViewError {
    /// Error defining, registering or mounting a component
    #[error(transparent)]
    Component(#[from] ComponentError),

    /// No component is registered under the requested tag
    #[error("no component registered for tag '{tag}'")]
    UnknownTag { tag: String },

    /// Error loading a component manifest
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Error loading style bundles
    #[error("styles error: {0}")]
    Styles(#[from] StylesError),

    /// Error reading a property file
    #[error("failed to read properties: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a property file
    #[error("invalid properties: {0}")]
    Properties(#[from] toml::de::Error),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Style bundles for `<style include>` resolution
    pub styles: StyleBundles,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Set the style bundles
    pub fn with_styles(mut self, styles: StyleBundles) -> Self {
        self.styles = styles;
        self
    }
}

/// Built-in views plus the components of an optional manifest
pub fn load_registry(manifest: Option<&Path>) -> Result<Registry, ViewError> {
    let mut registry = Registry::with_builtin_views()?;
    if let Some(path) = manifest {
        ViewManifest::from_file(path)?.register_into(&mut registry)?;
    }
    Ok(registry)
}

/// Default style bundles, overridden by an optional bundle file
pub fn load_styles(path: Option<&Path>) -> Result<StyleBundles, ViewError> {
    let styles = StyleBundles::default();
    match path {
        Some(path) => Ok(styles.merge(StyleBundles::from_file(path)?)),
        None => Ok(styles),
    }
}

/// Property values from an optional TOML file
pub fn load_properties(path: Option<&Path>) -> Result<Properties, ViewError> {
    match path {
        Some(path) => Ok(Properties::from_toml(&std::fs::read_to_string(path)?)?),
        None => Ok(Properties::new()),
    }
}

/// Render a built-in view to HTML with default configuration
///
/// # Example
///
/// ```rust
/// use view_registry::render;
///
/// let html = render("show-home").unwrap();
/// assert!(html.starts_with("<show-home>"));
/// assert!(html.contains("Community Edition"));
/// ```
pub fn render(tag: &str) -> Result<String, ViewError> {
    let registry = Registry::with_builtin_views()?;
    render_with_config(&registry, tag, &Properties::new(), &RenderConfig::default())
}

/// Render a registered component to HTML with custom configuration
///
/// The component is mounted on a fresh in-memory surface, serialized and
/// unmounted again.
///
/// # Example
///
/// ```rust
/// use view_registry::{
///     define, render_with_config, HtmlConfig, Properties, PropertyDecl, PropertySchema,
///     PropertyType, Registry, Render, RenderConfig,
/// };
///
/// let mut registry = Registry::new();
/// let schema = PropertySchema::new().with("name", PropertyDecl::new(PropertyType::String, "world"));
/// registry
///     .register(define("x-hello", Render::markup("<p>Hello {{name}}</p>"), Some(schema)).unwrap())
///     .unwrap();
///
/// let config = RenderConfig::new().with_html(HtmlConfig::new().with_pretty_print(false));
/// let html = render_with_config(&registry, "x-hello", &Properties::new(), &config).unwrap();
/// assert_eq!(html, "<x-hello><p>Hello world</p></x-hello>");
/// ```
pub fn render_with_config(
    registry: &Registry,
    tag: &str,
    properties: &Properties,
    config: &RenderConfig,
) -> Result<String, ViewError> {
    let definition = registry.lookup(tag).ok_or_else(|| ViewError::UnknownTag {
        tag: tag.to_string(),
    })?;

    let mut renderer = Renderer::new(MemorySurface::new());
    let handle = renderer.mount(&definition, properties)?;
    let html = match renderer.surface().get(&handle) {
        Some(dom) => render_component_html(definition.tag(), dom, &config.html, &config.styles),
        None => String::new(),
    };
    renderer.unmount(&handle)?;

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_show_home() {
        let html = render("show-home").unwrap();
        assert!(html.starts_with("<show-home>"));
        assert!(html.ends_with("</show-home>"));
        assert!(html.contains("<h1>SAPL PDP-Server CE</h1>"));
        assert!(html.contains("Community Edition"));
    }

    #[test]
    fn test_render_inlines_shared_styles() {
        let html = render("show-home").unwrap();
        assert!(html.contains("--lumo-space-m: 1rem;"));
        assert!(!html.contains("include="));
    }

    #[test]
    fn test_render_unknown_tag_error() {
        let err = render("show-nothing").unwrap_err();
        assert!(matches!(err, ViewError::UnknownTag { ref tag } if tag == "show-nothing"));
    }

    #[test]
    fn test_render_with_properties() {
        let mut registry = Registry::new();
        let schema = PropertySchema::new()
            .with("count", PropertyDecl::new(PropertyType::Number, 0.0));
        registry
            .register(define("x-counter", Render::markup("<span>{{count}}</span>"), Some(schema)).unwrap())
            .unwrap();
        let config = RenderConfig::new().with_html(HtmlConfig::new().with_wrap_host(false));

        let html = render_with_config(
            &registry,
            "x-counter",
            &Properties::new().with("count", 7.0),
            &config,
        )
        .unwrap();
        assert_eq!(html, "<span>7</span>");
    }

    #[test]
    fn test_render_property_type_mismatch() {
        let mut registry = Registry::new();
        let schema = PropertySchema::new()
            .with("count", PropertyDecl::new(PropertyType::Number, 0.0));
        registry
            .register(define("x-counter", Render::markup("<span>{{count}}</span>"), Some(schema)).unwrap())
            .unwrap();

        let err = render_with_config(
            &registry,
            "x-counter",
            &Properties::new().with("count", "seven"),
            &RenderConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ViewError::Component(ComponentError::Render { .. })));
    }

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("view-registry-{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_registry_with_manifest() {
        let path = temp_file(
            "manifest.toml",
            "[[component]]\ntag = \"show-about\"\ntemplate = \"<h1>About</h1>\"\n",
        );
        let registry = load_registry(Some(&path)).unwrap();
        assert!(registry.contains("show-home"));
        assert!(registry.contains("show-about"));
    }

    #[test]
    fn test_load_errors_are_view_errors() {
        let missing = std::env::temp_dir().join("view-registry-does-not-exist.toml");
        assert!(matches!(load_registry(Some(&missing)), Err(ViewError::Manifest(_))));
        assert!(matches!(load_styles(Some(&missing)), Err(ViewError::Styles(_))));
        assert!(matches!(load_properties(Some(&missing)), Err(ViewError::Io(_))));

        let invalid = temp_file("props.toml", "title = ");
        assert!(matches!(load_properties(Some(&invalid)), Err(ViewError::Properties(_))));
    }

    #[test]
    fn test_load_defaults_without_paths() {
        assert_eq!(load_registry(None).unwrap().len(), 1);
        assert!(load_styles(None).unwrap().resolve("shared-styles").is_some());
        assert!(load_properties(None).unwrap().is_empty());
    }

    #[test]
    fn test_render_without_styles() {
        let config = RenderConfig::new().with_styles(StyleBundles::empty());
        let registry = Registry::with_builtin_views().unwrap();
        let html = render_with_config(&registry, "show-home", &Properties::new(), &config).unwrap();
        assert!(html.contains(r#"<style include="shared-styles">"#));
    }
}

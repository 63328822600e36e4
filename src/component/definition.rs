//! Component definitions

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::markup::{self, Markup};
use crate::template::Template;

use super::{ComponentError, Properties, PropertySchema, Tag};

/// Error type returned by render functions
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A compiled render function
pub type RenderFn = Arc<dyn Fn(&Properties) -> Result<Template, BoxError> + Send + Sync>;

/// Source of a component's render function
pub enum Render {
    /// A Rust function producing the template
    Function(RenderFn),
    /// Inline markup, parsed when the component is defined
    Markup(String),
}

impl Render {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Properties) -> Result<Template, BoxError> + Send + Sync + 'static,
    {
        Render::Function(Arc::new(f))
    }

    /// A render function that ignores its properties and returns a fixed template
    pub fn fixed(template: Template) -> Self {
        Render::function(move |_| Ok(template.clone()))
    }

    pub fn markup(source: impl Into<String>) -> Self {
        Render::Markup(source.into())
    }

    fn compile(self, tag: &str, schema: &PropertySchema) -> Result<RenderFn, ComponentError> {
        match self {
            Render::Function(f) => Ok(f),
            Render::Markup(source) => {
                let markup = compile_markup(tag, &source, schema)?;
                Ok(Arc::new(
                    move |properties: &Properties| -> Result<Template, BoxError> {
                        Ok(markup.render(properties))
                    },
                ))
            }
        }
    }
}

impl fmt::Debug for Render {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Render::Function(_) => f.write_str("Render::Function(..)"),
            Render::Markup(source) => f.debug_tuple("Render::Markup").field(source).finish(),
        }
    }
}

fn compile_markup(tag: &str, source: &str, schema: &PropertySchema) -> Result<Markup, ComponentError> {
    let markup = markup::parse(source).map_err(|errors| {
        for error in &errors {
            tracing::warn!(tag, "invalid markup\n{}", error.format(source, tag));
        }
        let reason = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        ComponentError::invalid_render(tag, reason)
    })?;

    if markup.is_empty() {
        return Err(ComponentError::invalid_render(tag, "markup is empty"));
    }

    if let Some(name) = markup.bindings().into_iter().find(|name| !schema.contains(name)) {
        return Err(ComponentError::invalid_render(
            tag,
            format!("binding '{}' does not name a declared property", name),
        ));
    }

    Ok(markup)
}

/// A named component: tag, property schema and render function
///
/// Immutable once built. Shared between the registry and mounts via `Arc`.
#[derive(Clone)]
pub struct ComponentDefinition {
    tag: Tag,
    schema: PropertySchema,
    render: RenderFn,
}

impl ComponentDefinition {
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn schema(&self) -> &PropertySchema {
        &self.schema
    }

    /// Whether the component declares no properties
    pub fn is_stateless(&self) -> bool {
        self.schema.is_empty()
    }

    /// Resolve properties against the schema and invoke the render function
    ///
    /// A render function that panics fails like one that returns an error.
    pub fn render(&self, properties: &Properties) -> Result<Template, ComponentError> {
        let resolved = self.schema.resolve(self.tag.as_str(), properties)?;
        match panic::catch_unwind(AssertUnwindSafe(|| (self.render)(&resolved))) {
            Ok(result) => {
                result.map_err(|e| ComponentError::render(self.tag.as_str(), e.to_string()))
            }
            Err(payload) => Err(ComponentError::render(
                self.tag.as_str(),
                format!("render function panicked: {}", panic_message(payload.as_ref())),
            )),
        }
    }
}

impl fmt::Debug for ComponentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDefinition")
            .field("tag", &self.tag)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}

/// Build a component definition
///
/// Validates the tag and compiles the render source. Registration is a
/// separate step (see [`crate::Registry::register`]).
pub fn define(
    tag: &str,
    render: Render,
    schema: Option<PropertySchema>,
) -> Result<ComponentDefinition, ComponentError> {
    let tag = Tag::parse(tag)?;
    let schema = schema.unwrap_or_default();
    schema.check_defaults(tag.as_str())?;
    let render = render.compile(tag.as_str(), &schema)?;
    Ok(ComponentDefinition {
        tag,
        schema,
        render,
    })
}

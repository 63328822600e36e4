//! Component definitions
//!
//! A component is plain data: a validated [`Tag`], a [`PropertySchema`] and a
//! render function producing a [`crate::template::Template`]. Definitions are
//! built with [`define`] and handed to a [`crate::Registry`].

mod definition;
mod error;
mod schema;
mod tag;

pub use definition::{define, BoxError, ComponentDefinition, Render, RenderFn};
pub use error::ComponentError;
pub use schema::{Properties, PropertyDecl, PropertySchema, PropertyType};
pub use tag::Tag;

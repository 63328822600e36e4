//! Template values
//!
//! A [`Template`] is an immutable markup tree plus the ordered list of values
//! interpolated into it. Two templates with equal nodes and equal values
//! produce equal output, which makes rendering referentially transparent.
//!
//! # Example
//!
//! ```rust
//! use view_registry::template::{Element, TemplateBuilder};
//!
//! let mut builder = TemplateBuilder::new();
//! let title = builder.interpolate("Welcome");
//! builder.push(Element::new("h1").child(title));
//! let template = builder.build();
//!
//! assert_eq!(template.values().len(), 1);
//! assert!(template.validate().is_ok());
//! ```

mod node;
mod value;

use thiserror::Error;

pub use node::{is_valid_name, AttrValue, Attribute, Element, Node};
pub use value::Value;

/// Structural problems found while validating a template
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemplateError {
    #[error("slot {index} is out of range ({len} interpolated values)")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("invalid element name '{name}'")]
    InvalidElementName { name: String },

    #[error("invalid attribute name '{name}' on element '{element}'")]
    InvalidAttributeName { element: String, name: String },
}

/// Markup plus interpolated values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    nodes: Vec<Node>,
    values: Vec<Value>,
}

impl Template {
    /// Create a template with no interpolations
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            values: Vec::new(),
        }
    }

    /// Create a template from raw parts; use [`Template::validate`] to check it
    pub fn from_parts(nodes: Vec<Node>, values: Vec<Value>) -> Self {
        Self { nodes, values }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value bound to a slot
    pub fn value(&self, slot: usize) -> Option<&Value> {
        self.values.get(slot)
    }

    /// Check that every slot refers to a value and every name is well formed
    pub fn validate(&self) -> Result<(), TemplateError> {
        self.nodes
            .iter()
            .try_for_each(|node| validate_node(node, self.values.len()))
    }

    /// Concatenated text content, with slots replaced by their values
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            self.collect_text(node, &mut out);
        }
        out
    }

    fn collect_text(&self, node: &Node, out: &mut String) {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Slot(index) => {
                if let Some(value) = self.values.get(*index) {
                    out.push_str(&value.to_string());
                }
            }
            Node::Element(element) => {
                for child in &element.children {
                    self.collect_text(child, out);
                }
            }
        }
    }
}

fn validate_node(node: &Node, len: usize) -> Result<(), TemplateError> {
    match node {
        Node::Text(_) => Ok(()),
        Node::Slot(index) if *index < len => Ok(()),
        Node::Slot(index) => Err(TemplateError::SlotOutOfRange { index: *index, len }),
        Node::Element(element) => {
            if !is_valid_name(&element.name) {
                return Err(TemplateError::InvalidElementName {
                    name: element.name.clone(),
                });
            }
            for attr in &element.attributes {
                if !is_valid_name(&attr.name) {
                    return Err(TemplateError::InvalidAttributeName {
                        element: element.name.clone(),
                        name: attr.name.clone(),
                    });
                }
                if let AttrValue::Slot(index) = attr.value {
                    if index >= len {
                        return Err(TemplateError::SlotOutOfRange { index, len });
                    }
                }
            }
            element
                .children
                .iter()
                .try_for_each(|child| validate_node(child, len))
        }
    }
}

/// Incrementally build a template, allocating slots for interpolated values
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    nodes: Vec<Node>,
    values: Vec<Value>,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value and return the slot node referring to it
    pub fn interpolate(&mut self, value: impl Into<Value>) -> Node {
        Node::Slot(self.slot(value))
    }

    /// Store a value and return its slot index (for attribute bindings)
    pub fn slot(&mut self, value: impl Into<Value>) -> usize {
        self.values.push(value.into());
        self.values.len() - 1
    }

    /// Append a top-level node
    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    pub fn build(self) -> Template {
        Template {
            nodes: self.nodes,
            values: self.values,
        }
    }
}

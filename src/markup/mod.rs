//! Inline template markup
//!
//! Components may declare their template as markup text, the way a
//! custom element carries an inline template block:
//!
//! ```text
//! <style include="shared-styles">:host { display: block; }</style>
//! <vaadin-vertical-layout theme="spacing">
//!   <h1>{{ title }}</h1>Community Edition
//! </vaadin-vertical-layout>
//! ```
//!
//! The markup is parsed once when the component is defined. Rendering only
//! substitutes property values into the already-parsed tree.

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::parse;

use crate::component::Properties;
use crate::template::{AttrValue, Attribute, Element, Node, Template, TemplateBuilder, Value};

impl Markup {
    /// Produce a template, interpolating bound properties in document order
    pub fn render(&self, properties: &Properties) -> Template {
        let mut builder = TemplateBuilder::new();
        for node in &self.nodes {
            let lowered = lower(node, properties, &mut builder);
            builder.push(lowered);
        }
        builder.build()
    }
}

fn lower(node: &MarkupNode, properties: &Properties, builder: &mut TemplateBuilder) -> Node {
    match node {
        MarkupNode::Text(text) => Node::Text(text.clone()),
        MarkupNode::Binding(name) => builder.interpolate(bound_value(properties, name)),
        MarkupNode::Element(element) => {
            let attributes = element
                .attributes
                .iter()
                .map(|attr| Attribute {
                    name: attr.name.clone(),
                    value: match &attr.value {
                        MarkupAttrValue::Literal(s) => AttrValue::Literal(s.clone()),
                        MarkupAttrValue::Binding(name) => {
                            AttrValue::Slot(builder.slot(bound_value(properties, name)))
                        }
                        MarkupAttrValue::Flag => AttrValue::Flag,
                    },
                })
                .collect();
            let children = element
                .children
                .iter()
                .map(|child| lower(child, properties, builder))
                .collect();
            Node::Element(Element {
                name: element.name.clone(),
                attributes,
                children,
            })
        }
    }
}

fn bound_value(properties: &Properties, name: &str) -> Value {
    properties.get(name).cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_static_markup() {
        let markup = parse("<h1>SAPL PDP-Server CE</h1>Community Edition").expect("Should parse");
        let template = markup.render(&Properties::new());
        assert!(template.values().is_empty());
        assert_eq!(template.text_content(), "SAPL PDP-Server CECommunity Edition");
    }

    #[test]
    fn test_render_interpolates_in_document_order() {
        let markup = parse(r#"<a title="{{hint}}">{{label}}</a>"#).expect("Should parse");
        let properties = Properties::new()
            .with("label", "Docs")
            .with("hint", "Read the docs");
        let template = markup.render(&properties);

        assert_eq!(
            template.values(),
            &[Value::from("Read the docs"), Value::from("Docs")]
        );
        assert!(template.validate().is_ok());
        assert_eq!(template.text_content(), "Docs");
    }

    #[test]
    fn test_render_missing_property_is_null() {
        let markup = parse("<p>{{missing}}</p>").expect("Should parse");
        let template = markup.render(&Properties::new());
        assert_eq!(template.values(), &[Value::Null]);
    }
}

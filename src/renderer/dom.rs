//! Materialized element trees

use crate::template::{AttrValue, Node, Template, TemplateError};

/// A materialized tree, ready to attach to a surface
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dom {
    pub nodes: Vec<DomNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomNode {
    Element(DomElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    pub name: String,
    /// Attribute name and value; `None` for valueless attributes
    pub attributes: Vec<(String, Option<String>)>,
    pub children: Vec<DomNode>,
}

impl DomElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(n, _)| n == name)
    }
}

impl Dom {
    /// Concatenated text of all text nodes, depth first
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.nodes, &mut out);
        out
    }

    /// First element with the given name, depth first
    pub fn find(&self, name: &str) -> Option<&DomElement> {
        find_in(&self.nodes, name)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn collect_text(nodes: &[DomNode], out: &mut String) {
    for node in nodes {
        match node {
            DomNode::Text(text) => out.push_str(text),
            DomNode::Element(element) => collect_text(&element.children, out),
        }
    }
}

fn find_in<'a>(nodes: &'a [DomNode], name: &str) -> Option<&'a DomElement> {
    nodes.iter().find_map(|node| match node {
        DomNode::Element(element) if element.name == name => Some(element),
        DomNode::Element(element) => find_in(&element.children, name),
        DomNode::Text(_) => None,
    })
}

/// Validate a template and replace its slots with their values
pub fn materialize(template: &Template) -> Result<Dom, TemplateError> {
    template.validate()?;
    Ok(Dom {
        nodes: materialize_nodes(template.nodes(), template),
    })
}

fn materialize_nodes(nodes: &[Node], template: &Template) -> Vec<DomNode> {
    let mut out: Vec<DomNode> = Vec::with_capacity(nodes.len());
    for node in nodes {
        let next = match node {
            Node::Text(text) => DomNode::Text(text.clone()),
            Node::Slot(index) => DomNode::Text(display(template, *index)),
            Node::Element(element) => DomNode::Element(DomElement {
                name: element.name.clone(),
                attributes: element
                    .attributes
                    .iter()
                    .map(|attr| {
                        let value = match &attr.value {
                            AttrValue::Literal(s) => Some(s.clone()),
                            AttrValue::Slot(index) => Some(display(template, *index)),
                            AttrValue::Flag => None,
                        };
                        (attr.name.clone(), value)
                    })
                    .collect(),
                children: materialize_nodes(&element.children, template),
            }),
        };

        // Adjacent text (literal text next to an interpolation) becomes one node
        if let DomNode::Text(text) = &next {
            if let Some(DomNode::Text(prev)) = out.last_mut() {
                prev.push_str(text);
                continue;
            }
        }
        out.push(next);
    }
    out
}

fn display(template: &Template, index: usize) -> String {
    template
        .value(index)
        .map(|v| v.to_string())
        .unwrap_or_default()
}

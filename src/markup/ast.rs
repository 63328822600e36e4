//! Syntax tree for inline template markup

/// A parsed markup document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Markup {
    pub nodes: Vec<MarkupNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Element(MarkupElement),
    Text(String),
    /// `{{ name }}` in content
    Binding(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkupElement {
    pub name: String,
    pub attributes: Vec<MarkupAttribute>,
    pub children: Vec<MarkupNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkupAttribute {
    pub name: String,
    pub value: MarkupAttrValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkupAttrValue {
    Literal(String),
    /// `attr="{{ name }}"`
    Binding(String),
    Flag,
}

impl Markup {
    /// Names of all properties referenced by bindings, in document order
    pub fn bindings(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for node in &self.nodes {
            collect_bindings(node, &mut names);
        }
        names
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn collect_bindings<'a>(node: &'a MarkupNode, names: &mut Vec<&'a str>) {
    match node {
        MarkupNode::Binding(name) => names.push(name),
        MarkupNode::Text(_) => {}
        MarkupNode::Element(element) => {
            for attr in &element.attributes {
                if let MarkupAttrValue::Binding(name) = &attr.value {
                    names.push(name);
                }
            }
            for child in &element.children {
                collect_bindings(child, names);
            }
        }
    }
}

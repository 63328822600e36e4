//! Structural markup nodes

/// A node in a template tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Index into the template's interpolated values
    Slot(usize),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a literal attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: AttrValue::Literal(value.into()),
        });
        self
    }

    /// Add an attribute bound to an interpolated value
    pub fn attr_slot(mut self, name: impl Into<String>, slot: usize) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: AttrValue::Slot(slot),
        });
        self
    }

    /// Add a valueless attribute
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: AttrValue::Flag,
        });
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttrValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Literal(String),
    Slot(usize),
    Flag,
}

/// Check an element or attribute name: a letter followed by letters, digits,
/// `-`, `_`, `.` or `:`
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

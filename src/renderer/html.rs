//! HTML generation from materialized trees

use crate::component::Tag;
use crate::styles::StyleBundles;

use super::dom::{Dom, DomElement, DomNode};
use super::HtmlConfig;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose content is emitted without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &["style", "script"];

/// Build HTML output line by line
pub struct HtmlBuilder<'a> {
    config: &'a HtmlConfig,
    styles: &'a StyleBundles,
    lines: Vec<String>,
    indent: usize,
}

impl<'a> HtmlBuilder<'a> {
    /// Create a new HTML builder
    pub fn new(config: &'a HtmlConfig, styles: &'a StyleBundles) -> Self {
        Self {
            config,
            styles,
            lines: vec![],
            indent: 0,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            " ".repeat(self.indent * self.config.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn push_line(&mut self, content: String) {
        let line = format!("{}{}", self.indent_str(), content);
        self.lines.push(line);
    }

    /// Open an element and indent its content
    pub fn start_element(&mut self, name: &str, attributes: &[(String, Option<String>)]) {
        self.push_line(format!("<{}{}>", name, format_attributes(attributes)));
        self.indent += 1;
    }

    /// Close an element opened with [`HtmlBuilder::start_element`]
    pub fn end_element(&mut self, name: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.push_line(format!("</{}>", name));
    }

    /// Add a list of nodes at the current depth
    pub fn add_nodes(&mut self, nodes: &[DomNode]) {
        for node in nodes {
            match node {
                // Own-line text is trimmed; the line break stands in for edge spaces
                DomNode::Text(text) if self.config.pretty_print => {
                    self.push_line(escape_text(text.trim()))
                }
                DomNode::Text(text) => self.push_line(escape_text(text)),
                DomNode::Element(element) => self.add_element(element),
            }
        }
    }

    /// Add an element and its subtree
    pub fn add_element(&mut self, element: &DomElement) {
        let name = element.name.as_str();

        if RAW_TEXT_ELEMENTS.contains(&name) {
            let (attributes, chunks) = if name == "style" {
                self.resolve_style(element)
            } else {
                (element.attributes.clone(), raw_text(element))
            };
            self.add_raw(name, &attributes, &chunks);
            return;
        }

        let attrs = format_attributes(&element.attributes);
        match element.children.as_slice() {
            [] if VOID_ELEMENTS.contains(&name) => self.push_line(format!("<{}{}>", name, attrs)),
            [] => self.push_line(format!("<{}{}></{}>", name, attrs, name)),
            [DomNode::Text(text)] => self.push_line(format!(
                "<{}{}>{}</{}>",
                name,
                attrs,
                escape_text(text),
                name
            )),
            children => {
                self.start_element(name, &element.attributes);
                self.add_nodes(children);
                self.end_element(name);
            }
        }
    }

    fn add_raw(&mut self, name: &str, attributes: &[(String, Option<String>)], chunks: &[String]) {
        let attrs = format_attributes(attributes);
        let chunks: Vec<String> = chunks.iter().map(|c| escape_raw(c)).collect();
        match chunks.as_slice() {
            [] => self.push_line(format!("<{}{}></{}>", name, attrs, name)),
            [chunk] => self.push_line(format!("<{}{}>{}</{}>", name, attrs, chunk, name)),
            chunks => {
                self.start_element(name, attributes);
                for chunk in chunks {
                    self.push_line(chunk.clone());
                }
                self.end_element(name);
            }
        }
    }

    /// Inline the CSS of included bundles ahead of the element's own text
    fn resolve_style(&self, element: &DomElement) -> (Vec<(String, Option<String>)>, Vec<String>) {
        let include = match element.attribute("include") {
            Some(include) if self.config.inline_styles => include,
            _ => return (element.attributes.clone(), raw_text(element)),
        };

        let mut chunks = Vec::new();
        let mut unresolved = Vec::new();
        for bundle in include.split_whitespace() {
            match self.styles.resolve(bundle) {
                Some(css) => chunks.push(collapse_whitespace(css)),
                None => {
                    tracing::warn!(bundle, "style bundle not found, leaving include in place");
                    unresolved.push(bundle);
                }
            }
        }
        chunks.extend(raw_text(element));

        let attributes = element
            .attributes
            .iter()
            .filter_map(|(attr, value)| {
                if attr != "include" {
                    Some((attr.clone(), value.clone()))
                } else if unresolved.is_empty() {
                    None
                } else {
                    Some((attr.clone(), Some(unresolved.join(" "))))
                }
            })
            .collect();

        (attributes, chunks.into_iter().filter(|c| !c.is_empty()).collect())
    }

    /// Finish and return the HTML string
    pub fn build(self) -> String {
        self.lines.join(self.newline())
    }
}

/// Render a tree to HTML
pub fn render_html(dom: &Dom, config: &HtmlConfig, styles: &StyleBundles) -> String {
    let mut builder = HtmlBuilder::new(config, styles);
    builder.add_nodes(&dom.nodes);
    builder.build()
}

/// Render a component's tree, wrapped in its host tag when configured
pub fn render_component_html(
    tag: &Tag,
    dom: &Dom,
    config: &HtmlConfig,
    styles: &StyleBundles,
) -> String {
    let mut builder = HtmlBuilder::new(config, styles);
    if config.wrap_host {
        builder.start_element(tag.as_str(), &[]);
        builder.add_nodes(&dom.nodes);
        builder.end_element(tag.as_str());
    } else {
        builder.add_nodes(&dom.nodes);
    }
    builder.build()
}

fn raw_text(element: &DomElement) -> Vec<String> {
    element
        .children
        .iter()
        .filter_map(|child| match child {
            DomNode::Text(text) => Some(text.clone()),
            DomNode::Element(_) => None,
        })
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn format_attributes(attributes: &[(String, Option<String>)]) -> String {
    attributes
        .iter()
        .map(|(name, value)| match value {
            Some(value) => format!(r#" {}="{}""#, name, escape_attr(value)),
            None => format!(" {}", name),
        })
        .collect()
}

/// Escape special characters in text content
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Keep raw text from closing its element early
///
/// `<\/` reads the same as `</` inside CSS and script strings.
fn escape_raw(s: &str) -> String {
    s.replace("</", "<\\/")
}

/// Escape special characters in attribute values
fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::dom::materialize;
    use crate::template::{Element, Template};

    fn dom(nodes: Vec<Element>) -> Dom {
        materialize(&Template::new(nodes.into_iter().map(Into::into).collect())).unwrap()
    }

    fn compact() -> HtmlConfig {
        HtmlConfig::new().with_pretty_print(false)
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b"), "a &lt; b");
        assert_eq!(escape_text("a & b"), "a &amp; b");
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_inline_single_text_child() {
        let html = render_html(
            &dom(vec![Element::new("h1").text("Fish & Chips")]),
            &HtmlConfig::default(),
            &StyleBundles::empty(),
        );
        assert_eq!(html, "<h1>Fish &amp; Chips</h1>");
    }

    #[test]
    fn test_void_and_empty_elements() {
        let html = render_html(
            &dom(vec![Element::new("hr"), Element::new("div").flag("hidden")]),
            &compact(),
            &StyleBundles::empty(),
        );
        assert_eq!(html, "<hr><div hidden></div>");
    }

    #[test]
    fn test_pretty_nested_indentation() {
        let html = render_html(
            &dom(vec![Element::new("ul")
                .child(Element::new("li").text("one"))
                .child(Element::new("li").text("two"))]),
            &HtmlConfig::default(),
            &StyleBundles::empty(),
        );
        assert_eq!(html, "<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>");
    }

    #[test]
    fn test_style_include_inlined() {
        let styles = StyleBundles::from_str("[bundles]\nbase = \"p {\\n  margin: 0;\\n}\"").unwrap();
        let html = render_html(
            &dom(vec![Element::new("style")
                .attr("include", "base")
                .text(":host { display: block; }")]),
            &compact(),
            &styles,
        );
        assert_eq!(html, "<style>p { margin: 0; }:host { display: block; }</style>");
    }

    #[test]
    fn test_style_unknown_include_kept() {
        let html = render_html(
            &dom(vec![Element::new("style")
                .attr("include", "missing")
                .text("a > b { color: red; }")]),
            &compact(),
            &StyleBundles::empty(),
        );
        assert_eq!(html, r#"<style include="missing">a > b { color: red; }</style>"#);
    }

    #[test]
    fn test_style_not_inlined_when_disabled() {
        let html = render_html(
            &dom(vec![Element::new("style").attr("include", "shared-styles")]),
            &compact().with_inline_styles(false),
            &StyleBundles::default(),
        );
        assert_eq!(html, r#"<style include="shared-styles"></style>"#);
    }

    #[test]
    fn test_raw_text_cannot_close_element() {
        let html = render_html(
            &dom(vec![
                Element::new("style").text("</style><script>alert(1)</script>"),
                Element::new("p").text("ok"),
            ]),
            &compact(),
            &StyleBundles::empty(),
        );
        assert_eq!(
            html,
            r"<style><\/style><script>alert(1)<\/script></style><p>ok</p>"
        );
    }

    #[test]
    fn test_pretty_trims_own_line_text() {
        let html = render_html(
            &dom(vec![Element::new("p")
                .text("Click ")
                .child(Element::new("a").text("here"))
                .text(" now")]),
            &HtmlConfig::default(),
            &StyleBundles::empty(),
        );
        assert_eq!(html, "<p>\n  Click\n  <a>here</a>\n  now\n</p>");
    }

    #[test]
    fn test_host_wrapping() {
        let tag = Tag::parse("x-card").unwrap();
        let tree = dom(vec![Element::new("p").text("body")]);

        let wrapped = render_component_html(&tag, &tree, &HtmlConfig::default(), &StyleBundles::empty());
        assert_eq!(wrapped, "<x-card>\n  <p>body</p>\n</x-card>");

        let bare = render_component_html(
            &tag,
            &tree,
            &HtmlConfig::default().with_wrap_host(false),
            &StyleBundles::empty(),
        );
        assert_eq!(bare, "<p>body</p>");
    }
}

//! Configuration for HTML rendering

/// Configuration options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Whether to format output with newlines and indentation
    pub pretty_print: bool,

    /// Spaces per indentation level
    pub indent: usize,

    /// Whether to inline the CSS of style bundles named by `<style include>`
    pub inline_styles: bool,

    /// Whether to wrap the output in the component's own tag
    pub wrap_host: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            pretty_print: true,
            indent: 2,
            inline_styles: true,
            wrap_host: true,
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the indentation width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether style bundles are inlined
    pub fn with_inline_styles(mut self, inline: bool) -> Self {
        self.inline_styles = inline;
        self
    }

    /// Set whether output is wrapped in the host tag
    pub fn with_wrap_host(mut self, wrap: bool) -> Self {
        self.wrap_host = wrap;
        self
    }
}

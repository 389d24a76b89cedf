//! Indented HTML rendering for element trees.
//!
//! Rules:
//! - Attributes are emitted sorted by key; bare attributes have no `=`
//! - Void elements end right after the start tag
//! - Children take precedence over content: when an element has children,
//!   its content list is not rendered
//! - Children go on their own lines, indented one level deeper
//! - A single content item renders inline; several content items render one
//!   per line, indented one level deeper
//! - Inline elements inside content render with no leading indentation
//! - Raw text escapes `&`, `<` and `>`

use crate::element::{Content, Element};
use std::fmt::{self, Write};

/// Options for HTML rendering.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Spaces added per nesting level (default: 2)
    pub indent_width: usize,
    /// Whether to escape `&`, `<`, `>` and `"` in attribute values (default: true).
    /// When false, values are written verbatim and a `"` produces malformed markup.
    pub escape_attribute_values: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            escape_attribute_values: true,
        }
    }
}

impl RenderOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of spaces per nesting level.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Write attribute values verbatim, without escaping.
    pub fn raw_attribute_values(mut self) -> Self {
        self.escape_attribute_values = false;
        self
    }
}

/// Escape raw text: `&` first, then `<` and `>`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let _ = write_text_escaped(&mut out, text);
    out
}

/// Escape an attribute value for use inside double quotes.
pub fn escape_attribute_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let _ = write_attr_value_escaped(&mut out, value);
    out
}

fn write_text_escaped<W: Write>(out: &mut W, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

fn write_attr_value_escaped<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

struct Renderer<'a, W: Write> {
    out: &'a mut W,
    options: &'a RenderOptions,
}

impl<'a, W: Write> Renderer<'a, W> {
    fn new(out: &'a mut W, options: &'a RenderOptions) -> Self {
        Self { out, options }
    }

    fn write_padding(&mut self, width: usize) -> fmt::Result {
        write!(self.out, "{:width$}", "")
    }

    fn write_start_tag(&mut self, elem: &Element) -> fmt::Result {
        write!(self.out, "<{}", elem.tag())?;

        let mut attrs: Vec<_> = elem.attributes().collect();
        attrs.sort_by_key(|(k, _)| *k);
        for (name, value) in attrs {
            write!(self.out, " {}", name)?;
            let Some(value) = value else {
                continue;
            };
            self.out.write_str("=\"")?;
            if self.options.escape_attribute_values {
                write_attr_value_escaped(self.out, value)?;
            } else {
                self.out.write_str(value)?;
            }
            self.out.write_char('"')?;
        }

        self.out.write_char('>')
    }

    fn write_element(&mut self, elem: &Element, padding: usize) -> fmt::Result {
        trace!(tag = elem.tag(), padding, "rendering element");

        self.write_padding(padding)?;
        self.write_start_tag(elem)?;

        if elem.is_void() {
            return Ok(());
        }

        let nested = padding + self.options.indent_width;

        if !elem.children().is_empty() {
            for child in elem.children() {
                self.out.write_char('\n')?;
                self.write_element(child, nested)?;
            }
            self.out.write_char('\n')?;
            self.write_padding(padding)?;
        } else {
            let content = elem.content();
            let multiline = content.len() > 1;
            for item in content {
                if multiline {
                    self.out.write_char('\n')?;
                    self.write_padding(nested)?;
                }
                match item {
                    Content::Inline(inner) => self.write_element(inner, 0)?,
                    Content::RawText(text) => write_text_escaped(self.out, text)?,
                }
            }
            if multiline {
                self.out.write_char('\n')?;
                self.write_padding(padding)?;
            }
        }

        write!(self.out, "</{}>", elem.tag())
    }
}

// =============================================================================
// Convenience methods on Element
// =============================================================================

impl Element {
    /// Render this element with `indent_level` leading spaces and default options.
    pub fn render(&self, indent_level: usize) -> String {
        self.render_with_options(indent_level, &RenderOptions::default())
    }

    /// Render this element with custom options.
    pub fn render_with_options(&self, indent_level: usize, opts: &RenderOptions) -> String {
        let mut out = String::new();
        let _ = self.write_html(&mut out, indent_level, opts);
        out
    }

    /// Render into any [`fmt::Write`] sink. Errors come only from the sink.
    pub fn write_html<W: Write>(
        &self,
        out: &mut W,
        indent_level: usize,
        opts: &RenderOptions,
    ) -> fmt::Result {
        Renderer::new(out, opts).write_element(self, indent_level)
    }

    /// Render this element at the top level.
    pub fn to_html(&self) -> String {
        self.render(0)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(f, 0, &RenderOptions::default())
    }
}

// =============================================================================
// Tests
// =============================================================================

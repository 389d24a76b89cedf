//! Element tree: block and inline elements with attributes, children and
//! inline content.
//!
//! An [`Element`] carries two containers:
//! - `children`: block-level nesting, rendered one per line and indented
//! - `content`: inline nesting, a list of [`Content`] items (inline elements
//!   or raw text)
//!
//! When both are populated, rendering uses `children` and ignores `content`.

use facet::Facet;
use indexmap::IndexMap;
use std::fmt;

/// Wildcard replaced by inline elements in [`Element::set_content`].
pub const PLACEHOLDER: &str = "@@@";

/// Structural category of an element, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum Category {
    /// May contain other blocks; typically starts on a new line.
    Block,
    /// Flows within text; may not embed blocks in its content.
    Inline,
}

/// Errors raised while composing an element tree.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum CompositionError {
    /// cannot add block '{child}' tag to inline '{parent}' tag
    InvalidComposition { child: String, parent: String },
}

/// One unit of an element's inline body.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
#[repr(u8)]
pub enum Content {
    /// Nested inline markup, rendered without block indentation.
    Inline(Element),
    /// Literal text, escaped on render.
    RawText(String),
}

impl Content {
    /// Get as element reference.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Content::Inline(e) => Some(e),
            Content::RawText(_) => None,
        }
    }

    /// Get as text reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::RawText(t) => Some(t.as_str()),
            Content::Inline(_) => None,
        }
    }
}

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct Element {
    category: Category,
    tag: String,
    is_void: bool,
    /// `None` values render as bare attributes (`hidden`, `checked`).
    attrs: IndexMap<String, Option<String>>,
    children: Vec<Element>,
    content: Vec<Content>,
}

/// Build an element from its fixed configuration.
pub fn make_element(category: Category, tag: impl Into<String>, is_void: bool) -> Element {
    Element {
        category,
        tag: tag.into(),
        is_void,
        attrs: IndexMap::new(),
        children: Vec::new(),
        content: Vec::new(),
    }
}

impl Element {
    /// Create a new element with a closing tag.
    pub fn new(category: Category, tag: impl Into<String>) -> Self {
        make_element(category, tag, false)
    }

    /// Create a new void element (no closing tag, no body).
    pub fn new_void(category: Category, tag: impl Into<String>) -> Self {
        make_element(category, tag, true)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_void(&self) -> bool {
        self.is_void
    }

    pub fn is_block(&self) -> bool {
        self.category == Category::Block
    }

    pub fn is_inline(&self) -> bool {
        self.category == Category::Inline
    }

    /// Iterate over attributes in insertion order.
    ///
    /// Rendering sorts by key; this iterator does not.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Get an attribute value. Bare attributes and missing ones both yield `None`;
    /// use [`Element::has_attribute`] to tell them apart.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(|v| v.as_deref())
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn content(&self) -> &[Content] {
        &self.content
    }

    // =========================================================================
    // Tree mutation
    // =========================================================================

    /// Add a block-level child. Any category is accepted.
    pub fn append_child(&mut self, element: Element) {
        self.children.push(element);
    }

    /// Replace all children with a single one.
    pub fn set_child(&mut self, element: Element) {
        self.children.clear();
        self.children.push(element);
    }

    /// Set an attribute value, overwriting any previous value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), Some(value.into()));
    }

    /// Set a bare attribute such as `checked` or `hidden`.
    pub fn set_bare_attribute(&mut self, key: impl Into<String>) {
        self.attrs.insert(key.into(), None);
    }

    /// Remove an attribute. Returns the old value if the key was present.
    pub fn remove_attribute(&mut self, key: &str) -> Option<Option<String>> {
        self.attrs.shift_remove(key)
    }

    /// Append an inline element to the content list.
    ///
    /// Fails when `self` is inline and `element` is a block.
    pub fn add_element(&mut self, element: Element) -> Result<(), CompositionError> {
        let item = self.embed(element)?;
        self.content.push(item);
        Ok(())
    }

    /// Wrap `element` as a content item of `self`, rejecting blocks inside inlines.
    fn embed(&self, element: Element) -> Result<Content, CompositionError> {
        if self.is_inline() && element.is_block() {
            debug!(
                child = %element.tag,
                parent = %self.tag,
                "rejected block element inside inline element"
            );
            return Err(CompositionError::InvalidComposition {
                child: element.tag,
                parent: self.tag.clone(),
            });
        }
        Ok(Content::Inline(element))
    }

    /// Append a raw text item to the content list.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content.push(Content::RawText(text.into()));
    }

    /// Replace the whole content list with a single raw text item.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content.clear();
        self.content.push(Content::RawText(text.into()));
    }

    /// Append formatted text: `el.add_text_fmt(format_args!("{n} items"))`.
    pub fn add_text_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.add_text(fmt::format(args));
    }

    /// Replace the content list with formatted text.
    pub fn set_text_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.set_text(fmt::format(args));
    }

    /// Replace the content list with `template`, substituting each
    /// [`PLACEHOLDER`] with the next element from `elements`.
    ///
    /// Placeholders left without an element stay as literal text. Elements
    /// left without a placeholder are appended at the end. On error the
    /// content list is left as it was.
    pub fn set_content(
        &mut self,
        template: &str,
        elements: impl IntoIterator<Item = Element>,
    ) -> Result<(), CompositionError> {
        let mut items = Vec::new();
        let mut elements = elements.into_iter();
        let mut pending = String::new();
        let mut segments = template.split(PLACEHOLDER).peekable();

        while let Some(segment) = segments.next() {
            pending.push_str(segment);
            if segments.peek().is_none() {
                break;
            }
            match elements.next() {
                Some(element) => {
                    if !pending.is_empty() {
                        items.push(Content::RawText(std::mem::take(&mut pending)));
                    }
                    items.push(self.embed(element)?);
                }
                None => pending.push_str(PLACEHOLDER),
            }
        }

        if !pending.is_empty() {
            items.push(Content::RawText(pending));
        }
        for element in elements {
            items.push(self.embed(element)?);
        }

        self.content = items;
        Ok(())
    }

    // =========================================================================
    // Global attributes
    // =========================================================================

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.set_attribute("id", id);
    }

    /// Add a class token, keeping the ones already present.
    pub fn add_class(&mut self, class: &str) {
        match self.attrs.get_mut("class") {
            Some(Some(existing)) => {
                existing.push(' ');
                existing.push_str(class);
            }
            _ => self.set_attribute("class", class),
        }
    }

    pub fn add_classes<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) {
        for class in classes {
            self.add_class(class);
        }
    }

    /// Replace the class attribute with the given tokens.
    pub fn set_class_list<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) {
        let list = classes.into_iter().collect::<Vec<_>>().join(" ");
        self.set_attribute("class", list);
    }

    /// Set a `data-*` attribute. `userId` becomes `data-user-id`.
    pub fn set_data(&mut self, key: &str, value: impl Into<String>) {
        self.set_attribute(format!("data-{}", kebab_case(key)), value);
    }

    pub fn set_hidden(&mut self) {
        self.set_bare_attribute("hidden");
    }

    // =========================================================================
    // Builder forms
    // =========================================================================

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_child(mut self, element: Element) -> Self {
        self.append_child(element);
        self
    }
}

/// `camelCase` to `kebab-case`: a hyphen goes between an ASCII lowercase
/// letter or digit and a following ASCII uppercase letter, then the whole
/// key is lowercased.
fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('-');
        }
        out.push(c);
        prev = Some(c);
    }
    out.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline(tag: &str) -> Element {
        Element::new(Category::Inline, tag)
    }

    fn block(tag: &str) -> Element {
        Element::new(Category::Block, tag)
    }

    #[test]
    fn test_inline_rejects_block_content() {
        let mut a = inline("a");
        let err = a.add_element(block("div")).unwrap_err();
        assert_eq!(
            err,
            CompositionError::InvalidComposition {
                child: "div".to_string(),
                parent: "a".to_string(),
            }
        );
        assert_eq!(err.to_string(), "cannot add block 'div' tag to inline 'a' tag");
        assert!(a.content().is_empty());
    }

    #[test]
    fn test_inline_accepts_inline_content() {
        let mut a = inline("a");
        a.add_element(inline("strong")).unwrap();
        assert_eq!(a.content().len(), 1);
        assert_eq!(a.content()[0].as_element().map(Element::tag), Some("strong"));
    }

    #[test]
    fn test_block_accepts_any_content() {
        let mut p = block("p");
        p.add_element(block("div")).unwrap();
        p.add_element(inline("em")).unwrap();
        assert_eq!(p.content().len(), 2);
    }

    #[test]
    fn test_append_child_accepts_any_category() {
        let mut span = inline("span");
        span.append_child(block("div"));
        assert_eq!(span.children().len(), 1);
    }

    #[test]
    fn test_set_child_replaces_children() {
        let mut div = block("div");
        div.append_child(block("p"));
        div.append_child(block("p"));
        div.set_child(block("section"));
        assert_eq!(div.children().len(), 1);
        assert_eq!(div.children()[0].tag(), "section");
    }

    #[test]
    fn test_set_text_replaces_content() {
        let mut p = block("p");
        p.add_text("one");
        p.add_element(inline("br")).unwrap();
        p.set_text("two");
        assert_eq!(p.content(), &[Content::RawText("two".to_string())]);
    }

    #[test]
    fn test_text_fmt() {
        let mut p = block("p");
        p.set_text_fmt(format_args!("{} of {}", 1, 3));
        p.add_text_fmt(format_args!(" ({}%)", 33));
        assert_eq!(p.content()[0].as_text(), Some("1 of 3"));
        assert_eq!(p.content()[1].as_text(), Some(" (33%)"));
    }

    #[test]
    fn test_attribute_overwrite() {
        let mut div = block("div");
        div.set_attribute("title", "first");
        div.set_attribute("title", "second");
        assert_eq!(div.attribute("title"), Some("second"));
        assert_eq!(div.attributes().count(), 1);
    }

    #[test]
    fn test_bare_attribute() {
        let mut input = block("input");
        input.set_bare_attribute("checked");
        assert!(input.has_attribute("checked"));
        assert_eq!(input.attribute("checked"), None);
        assert_eq!(input.remove_attribute("checked"), Some(None));
        assert!(!input.has_attribute("checked"));
    }

    #[test]
    fn test_add_class_accumulates() {
        let mut div = block("div");
        div.add_class("bookmark");
        div.add_classes(["bold", "wide"]);
        assert_eq!(div.attribute("class"), Some("bookmark bold wide"));
    }

    #[test]
    fn test_add_class_over_bare_class() {
        let mut div = block("div");
        div.set_bare_attribute("class");
        div.add_class("x");
        assert_eq!(div.attribute("class"), Some("x"));
    }

    #[test]
    fn test_set_class_list_replaces() {
        let mut div = block("div");
        div.add_class("old");
        div.set_class_list(["a", "b"]);
        assert_eq!(div.attribute("class"), Some("a b"));
    }

    #[test]
    fn test_set_data_kebab_case() {
        let mut div = block("div");
        div.set_data("userId", "7");
        div.set_data("item2Name", "x");
        div.set_data("URLValue", "y");
        div.set_data("plain", "z");
        assert_eq!(div.attribute("data-user-id"), Some("7"));
        assert_eq!(div.attribute("data-item2-name"), Some("x"));
        assert_eq!(div.attribute("data-urlvalue"), Some("y"));
        assert_eq!(div.attribute("data-plain"), Some("z"));
    }

    #[test]
    fn test_set_hidden() {
        let mut div = block("div");
        div.set_hidden();
        assert!(div.has_attribute("hidden"));
    }

    #[test]
    fn test_set_content_interleaves() {
        let mut p = block("p");
        p.add_text("discarded");
        p.set_content("Click @@@ to open", [inline("a")]).unwrap();
        assert_eq!(p.content().len(), 3);
        assert_eq!(p.content()[0].as_text(), Some("Click "));
        assert_eq!(p.content()[1].as_element().map(Element::tag), Some("a"));
        assert_eq!(p.content()[2].as_text(), Some(" to open"));
    }

    #[test]
    fn test_set_content_skips_empty_segments() {
        let mut p = block("p");
        p.set_content("@@@@@@", [inline("a"), inline("b")]).unwrap();
        assert_eq!(p.content().len(), 2);
        assert!(p.content().iter().all(|c| c.as_element().is_some()));
    }

    #[test]
    fn test_set_content_surplus_placeholders_stay_literal() {
        let mut p = block("p");
        p.set_content("a @@@ b @@@ c", [inline("em")]).unwrap();
        assert_eq!(p.content().len(), 3);
        assert_eq!(p.content()[2].as_text(), Some(" b @@@ c"));
    }

    #[test]
    fn test_set_content_surplus_elements_appended() {
        let mut p = block("p");
        p.set_content("no wildcard", [inline("em")]).unwrap();
        assert_eq!(p.content().len(), 2);
        assert_eq!(p.content()[1].as_element().map(Element::tag), Some("em"));
    }

    #[test]
    fn test_set_content_inline_rejects_block() {
        let mut span = inline("span");
        span.set_text("original");
        let result = span.set_content("x @@@ y", [block("div")]);
        assert!(matches!(
            result,
            Err(CompositionError::InvalidComposition { .. })
        ));
        assert_eq!(span.content(), &[Content::RawText("original".to_string())]);
    }

    #[test]
    fn test_set_content_surplus_block_leaves_content() {
        let mut span = inline("span");
        span.add_text("a");
        span.add_element(inline("em")).unwrap();
        let result = span.set_content("see @@@", [inline("b"), block("div")]);
        assert!(result.is_err());
        assert_eq!(span.content().len(), 2);
        assert_eq!(span.content()[0].as_text(), Some("a"));
        assert_eq!(span.content()[1].as_element().map(Element::tag), Some("em"));
    }

    #[test]
    fn test_builder_forms() {
        let div = block("div")
            .with_id("main")
            .with_class("a")
            .with_class("b")
            .with_attribute("role", "note")
            .with_child(block("p").with_text("hi"));
        assert_eq!(div.attribute("id"), Some("main"));
        assert_eq!(div.attribute("class"), Some("a b"));
        assert_eq!(div.attribute("role"), Some("note"));
        assert_eq!(div.children()[0].content()[0].as_text(), Some("hi"));
    }

    #[test]
    fn test_make_element_config() {
        let br = make_element(Category::Inline, "br", true);
        assert!(br.is_void());
        assert!(br.is_inline());
        assert_eq!(br.tag(), "br");
        assert!(Element::new_void(Category::Block, "hr").is_void());
        assert!(!Element::new(Category::Block, "div").is_void());
    }
}

//! Concrete tag configurations and typed attribute setters.
//!
//! A [`Tag`] fixes the category, name and void-ness of an element. The
//! factory functions below build the common ones; [`Tag::lookup`] resolves
//! any tag in the built-in table by name, and [`Tag::custom`] covers the rest.

use crate::element::{Category, Element, make_element};

/// Fixed configuration of a concrete element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    pub name: &'static str,
    pub category: Category,
    pub is_void: bool,
}

impl Tag {
    const fn block(name: &'static str) -> Self {
        Self {
            name,
            category: Category::Block,
            is_void: false,
        }
    }

    const fn inline(name: &'static str) -> Self {
        Self {
            name,
            category: Category::Inline,
            is_void: false,
        }
    }

    const fn void_block(name: &'static str) -> Self {
        Self {
            name,
            category: Category::Block,
            is_void: true,
        }
    }

    const fn void_inline(name: &'static str) -> Self {
        Self {
            name,
            category: Category::Inline,
            is_void: true,
        }
    }

    /// Configuration for a tag outside the built-in table.
    ///
    /// Names must be known at compile time; for a tag name built at runtime,
    /// use [`make_element`] directly.
    pub const fn custom(name: &'static str, category: Category, is_void: bool) -> Self {
        Self {
            name,
            category,
            is_void,
        }
    }

    /// Find a built-in tag by name (ASCII case-insensitive).
    pub fn lookup(name: &str) -> Option<Tag> {
        KNOWN_TAGS
            .iter()
            .find(|tag| tag.name.eq_ignore_ascii_case(name))
            .copied()
    }

    /// Create an empty element with this configuration.
    pub fn build(self) -> Element {
        make_element(self.category, self.name, self.is_void)
    }
}

macro_rules! known_tags {
    ($($const_name:ident, $fn_name:ident => $kind:ident($name:literal);)*) => {
        $(
            pub const $const_name: Tag = Tag::$kind($name);
        )*

        /// Built-in tags.
        pub const KNOWN_TAGS: &[Tag] = &[$($const_name),*];

        $(
            #[doc = concat!("Creates an empty `<", $name, ">` element.")]
            pub fn $fn_name() -> Element {
                $const_name.build()
            }
        )*
    };
}

known_tags! {
    // Document structure
    HTML, html => block("html");
    HEAD, head => block("head");
    BODY, body => block("body");
    TITLE, title => block("title");
    META, meta => void_block("meta");
    LINK, link => void_block("link");
    STYLE, style => block("style");
    SCRIPT, script => block("script");
    // Sections and grouping
    DIV, div => block("div");
    MAIN, main => block("main");
    SECTION, section => block("section");
    ARTICLE, article => block("article");
    ASIDE, aside => block("aside");
    NAV, nav => block("nav");
    HEADER, header => block("header");
    FOOTER, footer => block("footer");
    H1, h1 => block("h1");
    H2, h2 => block("h2");
    H3, h3 => block("h3");
    H4, h4 => block("h4");
    H5, h5 => block("h5");
    H6, h6 => block("h6");
    P, p => block("p");
    PRE, pre => block("pre");
    BLOCKQUOTE, blockquote => block("blockquote");
    UL, ul => block("ul");
    OL, ol => block("ol");
    LI, li => block("li");
    TABLE, table => block("table");
    TR, tr => block("tr");
    TD, td => block("td");
    TH, th => block("th");
    FORM, form => block("form");
    HR, hr => void_block("hr");
    // Phrasing
    A, a => inline("a");
    SPAN, span => inline("span");
    STRONG, strong => inline("strong");
    EM, em => inline("em");
    CODE, code => inline("code");
    SMALL, small => inline("small");
    LABEL, label => inline("label");
    BUTTON, button => inline("button");
    BR, br => void_inline("br");
    IMG, img => void_inline("img");
    INPUT, input => void_inline("input");
}

/// Heading rank, `h1` through `h6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn tag(self) -> Tag {
        match self {
            HeadingLevel::H1 => H1,
            HeadingLevel::H2 => H2,
            HeadingLevel::H3 => H3,
            HeadingLevel::H4 => H4,
            HeadingLevel::H5 => H5,
            HeadingLevel::H6 => H6,
        }
    }

    pub fn tag_name(self) -> &'static str {
        self.tag().name
    }
}

pub fn heading(level: HeadingLevel) -> Element {
    level.tag().build()
}

// =============================================================================
// Typed attribute setters
// =============================================================================

impl Element {
    /// Anchor destination (`href`).
    pub fn set_reference(&mut self, url: impl Into<String>) {
        self.set_attribute("href", url);
    }

    /// Browsing context for links and forms, e.g. `_blank`.
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.set_attribute("target", target);
    }

    /// Image source (`src`).
    pub fn set_source(&mut self, url: impl Into<String>) {
        self.set_attribute("src", url);
    }

    pub fn set_alt(&mut self, alt: impl Into<String>) {
        self.set_attribute("alt", alt);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.set_attribute("name", name);
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.set_attribute("value", value);
    }

    /// Input kind (`type`), e.g. `checkbox`.
    pub fn set_input_type(&mut self, kind: impl Into<String>) {
        self.set_attribute("type", kind);
    }

    pub fn set_checked(&mut self) {
        self.set_bare_attribute("checked");
    }

    /// Advisory tooltip (`title` attribute, not the `<title>` element).
    pub fn set_title_attribute(&mut self, title: impl Into<String>) {
        self.set_attribute("title", title);
    }
}

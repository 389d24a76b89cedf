//! Programmatic HTML builder.
//!
//! gizmo provides:
//! - **Element tree**: block and inline elements holding attributes, child
//!   elements and inline content (nested inline elements or raw text)
//! - **Rendering**: deterministic, indented HTML output with text escaping
//!   and void element handling
//! - **Tags**: ready-made configurations for common HTML tags
//! - **Documents**: a wrapper assembling doctype, head and body around content
//!
//! # Example
//!
//! ```rust
//! use gizmo::tags::{self, HeadingLevel};
//!
//! let mut content = tags::div();
//! content.set_id("content");
//!
//! let mut title = tags::heading(HeadingLevel::H1);
//! title.set_text("Title");
//! content.append_child(title);
//!
//! assert_eq!(
//!     content.render(0),
//!     "<div id=\"content\">\n  <h1>Title</h1>\n</div>"
//! );
//! ```
//!
//! Inline elements refuse block content:
//!
//! ```rust
//! use gizmo::tags;
//!
//! let mut link = tags::a();
//! assert!(link.add_element(tags::div()).is_err());
//! assert!(link.add_element(tags::strong()).is_ok());
//! ```

#[macro_use]
mod tracing_macros;

pub mod document;
pub mod element;
pub mod render;
pub mod tags;

pub use document::Document;
pub use element::{Category, CompositionError, Content, Element, PLACEHOLDER, make_element};
pub use render::{RenderOptions, escape_attribute_value, escape_text};
pub use tags::{HeadingLevel, Tag};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

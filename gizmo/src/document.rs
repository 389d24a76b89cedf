//! Full HTML documents: doctype, head and body around page content.

use crate::element::Element;
use crate::tags;
use std::fmt;

/// A complete HTML document.
///
/// ```rust
/// use gizmo::{Document, tags};
///
/// let mut doc = Document::new("Demo");
/// doc.set_content(tags::p().with_text("Hello"));
/// assert!(doc.render().starts_with("<!DOCTYPE html>\n<html>"));
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    lang: Option<String>,
    head: Vec<Element>,
    body: Vec<Element>,
}

impl Document {
    pub const DOCTYPE: &'static str = "<!DOCTYPE html>";

    /// Create an empty document with the given `<title>`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: None,
            head: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the `lang` attribute of the root element.
    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = Some(lang.into());
    }

    /// Add an arbitrary element to `<head>`, after the title.
    pub fn add_head_element(&mut self, element: Element) {
        self.head.push(element);
    }

    /// Link a stylesheet.
    pub fn add_stylesheet(&mut self, href: impl Into<String>) {
        let mut link = tags::link();
        link.set_attribute("rel", "stylesheet");
        link.set_reference(href);
        self.add_head_element(link);
    }

    /// Add a named `<meta>` entry, e.g. `description`.
    pub fn add_meta(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let mut meta = tags::meta();
        meta.set_name(name);
        meta.set_attribute("content", content);
        self.add_head_element(meta);
    }

    /// Replace the body content with a single element.
    pub fn set_content(&mut self, element: Element) {
        self.body.clear();
        self.body.push(element);
    }

    /// Append an element to the body.
    pub fn append_content(&mut self, element: Element) {
        self.body.push(element);
    }

    pub fn content(&self) -> &[Element] {
        &self.body
    }

    /// Assemble the `<html>` element.
    pub fn build(&self) -> Element {
        let mut html = tags::html();
        if let Some(lang) = &self.lang {
            html.set_attribute("lang", lang.as_str());
        }

        let mut head = tags::head();
        let mut charset = tags::meta();
        charset.set_attribute("charset", "utf-8");
        head.append_child(charset);
        head.append_child(tags::title().with_text(self.title.as_str()));
        for element in &self.head {
            head.append_child(element.clone());
        }
        html.append_child(head);

        let mut body = tags::body();
        for element in &self.body {
            body.append_child(element.clone());
        }
        html.append_child(body);

        html
    }

    /// Render the doctype line followed by the document tree.
    pub fn render(&self) -> String {
        let html = self.build().render(0);
        debug!(title = %self.title, bytes = html.len(), "rendered document");

        let mut out = String::with_capacity(Self::DOCTYPE.len() + 1 + html.len());
        out.push_str(Self::DOCTYPE);
        out.push('\n');
        out.push_str(&html);
        out
    }

    /// Alias for [`Document::render`].
    pub fn to_html(&self) -> String {
        self.render()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::new("Demo");
        assert_eq!(
            doc.render(),
            "<!DOCTYPE html>\n\
             <html>\n  \
               <head>\n    \
                 <meta charset=\"utf-8\">\n    \
                 <title>Demo</title>\n  \
               </head>\n  \
               <body></body>\n\
             </html>"
        );
    }

    #[test]
    fn test_document_with_content() {
        let mut doc = Document::new("A & B");
        doc.set_lang("en");
        doc.set_content(tags::p().with_text("old"));
        doc.set_content(tags::p().with_text("Hello"));
        assert_eq!(doc.content().len(), 1);
        assert_eq!(
            doc.render(),
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n  \
               <head>\n    \
                 <meta charset=\"utf-8\">\n    \
                 <title>A &amp; B</title>\n  \
               </head>\n  \
               <body>\n    \
                 <p>Hello</p>\n  \
               </body>\n\
             </html>"
        );
    }

    #[test]
    fn test_head_extras() {
        let mut doc = Document::new("Demo");
        doc.add_stylesheet("/site.css");
        doc.add_meta("description", "Bookmarks");
        let html = doc.render();
        assert!(html.contains("    <link href=\"/site.css\" rel=\"stylesheet\">\n"));
        assert!(html.contains("    <meta content=\"Bookmarks\" name=\"description\">\n"));
        assert!(html.find("<title>").unwrap() < html.find("<link").unwrap());
    }

    #[test]
    fn test_append_content() {
        let mut doc = Document::new("Demo");
        doc.append_content(tags::hr());
        doc.append_content(tags::hr());
        assert_eq!(doc.build().children()[1].children().len(), 2);
        assert_eq!(doc.to_string(), doc.to_html());
    }
}

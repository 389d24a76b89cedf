//! Builds a bookmark list page and prints it to stdout.
//!
//! Run with `cargo run --example bookmarks --features tracing` to also see
//! the builder's debug logs on stderr.

use gizmo::tags::{self, HeadingLevel};
use gizmo::{CompositionError, Document, Element};
use tracing::info;

struct Bookmark {
    name: &'static str,
    url: &'static str,
}

const BOOKMARKS: &[Bookmark] = &[
    Bookmark {
        name: "Apple",
        url: "https://apple.com",
    },
    Bookmark {
        name: "Google",
        url: "http://google.com",
    },
    Bookmark {
        name: "Netflix",
        url: "http://netflix.com",
    },
    Bookmark {
        name: "<This> & <That>",
        url: "http://testcase.com",
    },
];

fn bookmark_entry(bookmark: &Bookmark) -> Result<Element, CompositionError> {
    let mut link = tags::a();
    link.add_class("bold");
    link.set_text("here");
    link.set_reference(bookmark.url);
    link.set_target("_blank");

    let mut intro = tags::p();
    intro.set_content(
        &format!("Click @@@ to navigate to the {} website", bookmark.name),
        [link],
    )?;

    let mut entry = tags::div();
    entry.add_class("bookmark");
    entry.append_child(intro);
    entry.append_child(tags::p().with_text("This is another paragraph with no inline elements"));
    Ok(entry)
}

fn bookmark_page(bookmarks: &[Bookmark]) -> Result<Element, CompositionError> {
    let mut content = tags::div();
    content.set_id("content");

    let mut title = tags::heading(HeadingLevel::H1);
    title.set_text("Bookmark List");
    content.append_child(title);

    let mut list = tags::div();
    list.add_class("bookmark-list");
    for bookmark in bookmarks {
        list.append_child(bookmark_entry(bookmark)?);
    }
    content.append_child(list);

    Ok(content)
}

fn main() -> Result<(), CompositionError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut doc = Document::new("Demo");
    doc.set_content(bookmark_page(BOOKMARKS)?);

    info!(bookmarks = BOOKMARKS.len(), "rendering bookmark page");
    println!("{doc}");
    Ok(())
}

//! Tests for page composition helpers.

use wattle_dom::{Render, ToNode, element};
use wattle_pages::{HtmlDocument, View, ViewNode};

fn render(doc: HtmlDocument) -> String {
    doc.to_node().to_html().expect("in-memory render cannot fail")
}

#[test]
fn test_default_document_skeleton() {
    assert_eq!(
        render(HtmlDocument::new()),
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/></head>\
         <body></body></html>"
    );
}

#[test]
fn test_document_with_title_and_body() {
    let doc = HtmlDocument::new()
        .title("Home")
        .add_body(element("h1").add("Welcome"));
    assert_eq!(
        render(doc),
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
         <title>Home</title></head><body><h1>Welcome</h1></body></html>"
    );
}

#[test]
fn test_document_title_is_encoded() {
    let doc = HtmlDocument::new().title("A & B");
    assert!(render(doc).contains("<title>A &amp; B</title>"));
}

#[test]
fn test_empty_language_omits_lang_attribute() {
    let doc = HtmlDocument::new().language("");
    assert!(render(doc).starts_with("<!DOCTYPE html><html><head>"));
}

#[test]
fn test_empty_charset_omits_meta() {
    let doc = HtmlDocument::new().charset("");
    assert_eq!(
        render(doc),
        "<!DOCTYPE html><html lang=\"en\"><head></head><body></body></html>"
    );
}

#[test]
fn test_head_content_follows_charset_and_title() {
    let doc = HtmlDocument::new()
        .title("T")
        .add_head(element("link").set_attribute("href", Some("site.css")));
    assert!(render(doc).contains(
        "<meta charset=\"utf-8\"/><title>T</title><link href=\"site.css\"/>"
    ));
}

#[test]
fn test_view_node_adapter() {
    struct Sidebar;
    impl View for Sidebar {
        fn container(self) -> wattle_dom::Element {
            element("nav.sidebar").add("links")
        }
    }

    let doc = HtmlDocument::new().add_body(ViewNode(Sidebar).to_node());
    assert!(render(doc).contains("<body><nav class=\"sidebar\">links</nav></body>"));
}

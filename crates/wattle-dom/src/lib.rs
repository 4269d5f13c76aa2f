//! In-memory HTML tree construction and rendering.
//!
//! This crate builds HTML programmatically: a tree of nodes (elements,
//! text, fragments, stream-backed content) is assembled with fluent
//! calls, then serialized depth-first into an HTML string or any
//! [`io::Write`](std::io::Write) sink.
//!
//! # Design
//!
//! - Heterogeneous inputs are normalized through the closed [`Content`]
//!   union rather than runtime type inspection; anything the tree cannot
//!   represent is rejected at compile time, and the one dynamic entry
//!   point ([`serde_json` values](Content::from_value)) fails fast.
//! - Ownership runs parent-to-child through the child lists. There are
//!   no parent back-references and no cycle prevention; trees are
//!   single-writer, built then rendered.
//! - Rendering is deterministic: attribute order is insertion order,
//!   text and attribute values are HTML-encoded (`&` `<` `>` `"`), and
//!   void elements (`br`, `img`, ...) always self-close.
//!
//! # Example
//!
//! ```
//! use wattle_dom::{Render, element};
//!
//! let page = element("div.card#intro")
//!     .add(element("h1").add("Hello & welcome"))
//!     .add(element("img").set_attribute("src", Some("logo.png")));
//! assert_eq!(
//!     page.to_html().unwrap(),
//!     "<div class=\"card\" id=\"intro\"><h1>Hello &amp; welcome</h1>\
//!      <img src=\"logo.png\"/></div>"
//! );
//! ```

pub mod content;
pub mod element;
pub mod error;
pub mod fragment;
pub mod node;
pub mod render;
pub mod stream;
pub mod text;

use std::io::{self, Read, Write};

pub use content::Content;
pub use element::{Element, is_void_tag};
pub use error::{Error, Result};
pub use fragment::Fragment;
pub use node::{Node, ToNode};
pub use render::Render;
pub use stream::{DEFAULT_BUFFER_SIZE, StreamNode};
pub use text::Text;

/// Shorthand for [`Element::new`].
#[must_use]
pub fn element(expression: &str) -> Element {
    Element::new(expression)
}

/// Shorthand for an empty [`Fragment`].
#[must_use]
pub fn fragment() -> Fragment {
    Fragment::new()
}

/// Shorthand for an encoded [`Text`] node.
#[must_use]
pub fn text(value: impl Into<String>) -> Text {
    Text::new(value)
}

/// Shorthand for a raw (unencoded) [`Text`] node. Only use this for
/// markup from a trusted source.
#[must_use]
pub fn raw_html(value: impl Into<String>) -> Text {
    Text::raw(value)
}

/// Shorthand for a pull-source [`StreamNode`] with the default transfer
/// buffer.
#[must_use]
pub fn stream_reader(reader: impl Read + 'static) -> StreamNode {
    StreamNode::reader(reader)
}

/// Shorthand for a push-callback [`StreamNode`].
#[must_use]
pub fn stream_writer(
    writer: impl Fn(&mut dyn Write) -> io::Result<()> + 'static,
) -> StreamNode {
    StreamNode::writer(writer)
}

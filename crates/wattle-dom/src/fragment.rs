//! Untagged container nodes.

use std::io::Write;

use crate::content::Content;
use crate::error::Result;
use crate::node::{Node, ToNode};
use crate::render::Render;
use crate::text::Text;

/// An ordered list of child nodes with no tag of its own.
///
/// Use a fragment to batch children without introducing wrapping markup:
/// it renders as the bare concatenation of its children, in insertion
/// order. Children may be of any node type, including other fragments, to
/// arbitrary depth.
#[derive(Debug, Default)]
pub struct Fragment {
    children: Vec<Node>,
}

impl Fragment {
    /// Create an empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add content, wrapping strings as encoded text nodes.
    ///
    /// Accepts anything convertible to [`Content`]: strings, scalars,
    /// nodes, `Option`s (`None` is skipped), and nested collections or
    /// tuples, flattened recursively in encounter order. Empty strings
    /// are skipped silently.
    #[must_use]
    pub fn add(mut self, content: impl Into<Content>) -> Self {
        self.append(content.into(), false);
        self
    }

    /// Add content, wrapping strings as raw text nodes instead of
    /// encoded ones. Traversal and flattening match [`Fragment::add`].
    #[must_use]
    pub fn add_html(mut self, content: impl Into<Content>) -> Self {
        self.append(content.into(), true);
        self
    }

    /// Add a dynamic `serde_json` value through the same flattening
    /// rules; strings are wrapped encoded.
    ///
    /// Takes `&mut self` rather than consuming: a failing call leaves the
    /// fragment and every previously added child untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`](crate::Error::UnsupportedType)
    /// for JSON objects.
    pub fn add_value(&mut self, value: &serde_json::Value) -> Result<()> {
        let content = Content::from_value(value)?;
        self.append(content, false);
        Ok(())
    }

    /// Add the node produced by a renderable value.
    #[must_use]
    pub fn add_view(mut self, view: impl ToNode) -> Self {
        self.children.push(view.to_node());
        self
    }

    /// Append a single node without the fluent wrapper.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// The child nodes, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the fragment has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Flatten `content` into the child list. `raw` selects raw text
    /// wrapping for string values; nodes pass through unchanged either
    /// way.
    pub(crate) fn append(&mut self, content: Content, raw: bool) {
        match content {
            Content::Empty => {}
            Content::Text(value) => {
                if !value.is_empty() {
                    let text = if raw { Text::raw(value) } else { Text::new(value) };
                    self.children.push(text.into());
                }
            }
            Content::Node(node) => self.children.push(node),
            Content::Many(items) => {
                for item in items {
                    self.append(item, raw);
                }
            }
        }
    }
}

impl Render for Fragment {
    fn render_to(&self, sink: &mut dyn Write) -> Result<()> {
        for child in &self.children {
            child.render_to(sink)?;
        }
        Ok(())
    }
}

//! The node tree's unit type.

use std::io::Write;

use crate::element::Element;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::render::Render;
use crate::stream::StreamNode;
use crate::text::Text;

/// Any unit placed in the HTML tree.
///
/// Ownership runs strictly parent-to-child through the child lists; nodes
/// carry no back-reference to their container. A node belongs to exactly
/// one container and is dropped with its owning tree.
#[derive(Debug)]
pub enum Node {
    /// A tagged container with attributes.
    Element(Element),
    /// A text leaf, encoded or raw.
    Text(Text),
    /// An ordered, untagged group of nodes.
    Fragment(Fragment),
    /// A leaf whose text is produced lazily from a reader or callback.
    Stream(StreamNode),
}

impl Render for Node {
    fn render_to(&self, sink: &mut dyn Write) -> Result<()> {
        match self {
            Self::Element(element) => element.render_to(sink),
            Self::Text(text) => text.render_to(sink),
            Self::Fragment(fragment) => fragment.render_to(sink),
            Self::Stream(stream) => stream.render_to(sink),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Fragment> for Node {
    fn from(fragment: Fragment) -> Self {
        Self::Fragment(fragment)
    }
}

impl From<StreamNode> for Node {
    fn from(stream: StreamNode) -> Self {
        Self::Stream(stream)
    }
}

/// The renderable capability: any type that can produce a node.
///
/// Add calls consume implementors through
/// [`add_view`](crate::Element::add_view), letting view objects place
/// themselves in a tree without exposing their internals.
pub trait ToNode {
    /// Produce the node representing this value.
    fn to_node(self) -> Node;
}

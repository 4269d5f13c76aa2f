//! Page and view composition on top of `wattle-dom`.
//!
//! Two conveniences for assembling whole pages from tree fragments:
//!
//! - [`View`], the container-element convention: a view is anything that
//!   builds its markup inside a single container element. The
//!   [`ViewNode`] adapter turns any view into a node for `add_view`.
//! - [`HtmlDocument`], a skeleton for a complete page: doctype, `html`
//!   element with a language attribute, a head carrying charset and
//!   title, and a body.

use wattle_dom::{Content, Element, Fragment, Node, ToNode, fragment};

/// The container-element convention for page modules.
///
/// A view builds all of its markup inside one container element, so
/// callers can place it anywhere in a tree without knowing its internals.
pub trait View {
    /// Build the container element holding this view's markup.
    fn container(self) -> Element;
}

/// Adapter that turns any [`View`] into a node.
///
/// ```
/// use wattle_dom::{Element, Render, element};
/// use wattle_pages::{View, ViewNode};
///
/// struct Greeting(&'static str);
///
/// impl View for Greeting {
///     fn container(self) -> Element {
///         element("div.greeting").add(self.0)
///     }
/// }
///
/// let page = element("body").add_view(ViewNode(Greeting("hi")));
/// assert_eq!(
///     page.to_html().unwrap(),
///     "<body><div class=\"greeting\">hi</div></body>"
/// );
/// ```
pub struct ViewNode<V>(pub V);

impl<V: View> ToNode for ViewNode<V> {
    fn to_node(self) -> Node {
        self.0.container().into()
    }
}

/// A complete HTML page skeleton.
///
/// Renders `<!DOCTYPE html>` followed by an `html` element containing the
/// accumulated head and body. The charset meta tag and the title are
/// emitted only when non-empty, ahead of any other head content; the
/// language attribute likewise.
///
/// ```
/// use wattle_dom::{Render, ToNode};
/// use wattle_pages::HtmlDocument;
///
/// let doc = HtmlDocument::new().title("Home").add_body("welcome");
/// assert_eq!(
///     doc.to_node().to_html().unwrap(),
///     "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
///      <title>Home</title></head><body>welcome</body></html>"
/// );
/// ```
#[derive(Debug)]
pub struct HtmlDocument {
    title: String,
    language: String,
    charset: String,
    head: Fragment,
    body: Element,
}

impl HtmlDocument {
    /// Create an empty document with `lang="en"` and UTF-8 charset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            language: "en".to_string(),
            charset: "utf-8".to_string(),
            head: Fragment::new(),
            body: Element::new("body"),
        }
    }

    /// Set the document title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the `lang` attribute of the `html` element. An empty value
    /// omits the attribute.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the charset emitted in the head's meta tag. An empty value
    /// omits the tag.
    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Append a node to the head, after the charset and title.
    #[must_use]
    pub fn add_head(mut self, node: impl Into<Node>) -> Self {
        self.head.push(node);
        self
    }

    /// Append content to the body, with the same conversions as
    /// [`Element::add`].
    #[must_use]
    pub fn add_body(mut self, content: impl Into<Content>) -> Self {
        self.body = self.body.add(content);
        self
    }
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ToNode for HtmlDocument {
    fn to_node(self) -> Node {
        let charset = (!self.charset.is_empty())
            .then(|| Element::new("meta").set_attribute("charset", Some(self.charset.as_str())));
        let title = (!self.title.is_empty())
            .then(|| Element::new("title").add(self.title.as_str()));
        let head = Element::new("head").add(charset).add(title).add(self.head);
        let html = Element::new("html")
            .set_attribute(
                "lang",
                (!self.language.is_empty()).then_some(self.language.as_str()),
            )
            .add(head)
            .add(self.body);
        fragment().add_html("<!DOCTYPE html>").add(html).into()
    }
}

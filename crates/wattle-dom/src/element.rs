//! Element nodes: tagged containers with attributes.
//!
//! This module carries the two pieces of real machinery in the crate:
//! the tag-expression parser (`div.card#main` style shorthand) and the
//! attribute rules (ordered, case-insensitive upsert; class appending;
//! conditional no-op setting).

use std::io::Write;
use std::str::FromStr;

use strum_macros::EnumString;
use wattle_common::{UrlResolver, rewrite_app_root_url};

use crate::content::Content;
use crate::error::{Error, Result};
use crate::fragment::Fragment;
use crate::node::{Node, ToNode};
use crate::render::{Render, write_encoded};

/// A container node with a tag name and an attribute map.
///
/// The tag name is set once at construction from a tag expression and the
/// attribute map preserves insertion order with case-insensitive keys, so
/// rendering the same element twice yields identical output.
#[derive(Debug, Default)]
pub struct Element {
    tag_name: String,
    attributes: Vec<(String, String)>,
    children: Fragment,
}

impl Element {
    /// Create an element from a tag expression.
    ///
    /// The expression is `name(.class|#id)*`: everything before the first
    /// `.` or `#` is the tag name, each `.token` appends a class, and
    /// each `#token` overwrites the `id` attribute (last one wins). An
    /// expression that begins with a delimiter leaves the tag name empty;
    /// that is accepted, not an error, and no validation is applied to
    /// the name itself.
    ///
    /// ```
    /// use wattle_dom::{Element, Render};
    ///
    /// let el = Element::new("div.card.wide#main");
    /// assert_eq!(
    ///     el.to_html().unwrap(),
    ///     "<div class=\"card wide\" id=\"main\"></div>"
    /// );
    /// ```
    #[must_use]
    pub fn new(expression: &str) -> Self {
        let mut element = Self::default();
        element.apply_tag_expression(expression);
        element
    }

    /// Create an element from a tag expression and a flat list of
    /// attribute name/value pairs.
    ///
    /// ```
    /// use wattle_dom::{Element, Render};
    ///
    /// let el = Element::with_attrs("input", &["type", "text", "name", "q"]).unwrap();
    /// assert_eq!(el.to_html().unwrap(), "<input type=\"text\" name=\"q\"/>");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `pairs` has odd length.
    pub fn with_attrs(expression: &str, pairs: &[&str]) -> Result<Self> {
        Self::with_attr_pairs(expression, pairs, None)
    }

    /// Like [`Element::with_attrs`], but rewrites app-root (`~/`) URLs in
    /// URL-carrying attributes through `resolver`.
    ///
    /// The rewrite applies only to attributes that conventionally hold
    /// URLs (`action`, `cite`, `href`, `rel`, `rev`, `src`) on tags that
    /// carry them (`a`, `img`, `form`, `link`, `script`, and the other
    /// linking tags); everything else is stored untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `pairs` has odd length.
    pub fn with_resolved_attrs(
        expression: &str,
        pairs: &[&str],
        resolver: &dyn UrlResolver,
    ) -> Result<Self> {
        Self::with_attr_pairs(expression, pairs, Some(resolver))
    }

    fn with_attr_pairs(
        expression: &str,
        pairs: &[&str],
        resolver: Option<&dyn UrlResolver>,
    ) -> Result<Self> {
        if pairs.len() % 2 != 0 {
            return Err(Error::InvalidArgument(format!(
                "attribute pairs must come in name/value couples, got {} entries",
                pairs.len()
            )));
        }
        let mut element = Self::new(expression);
        let rewrite_urls = tag_traits(&element.tag_name).url_attrs;
        for pair in pairs.chunks_exact(2) {
            let (name, value) = (pair[0], pair[1]);
            if name.is_empty() {
                continue;
            }
            match resolver {
                Some(resolver) if rewrite_urls && is_url_attribute(name) => {
                    let resolved = rewrite_app_root_url(resolver, value);
                    element.insert_attribute(name, &resolved);
                }
                _ => element.insert_attribute(name, value),
            }
        }
        Ok(element)
    }

    /// The tag name parsed from the construction expression. May be
    /// empty when the expression began with a delimiter.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// The attribute pairs, in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// The attribute value for `name`, compared case-insensitively.
    /// Returns the empty string when the attribute is absent.
    #[must_use]
    pub fn attribute(&self, name: &str) -> &str {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map_or("", |(_, value)| value)
    }

    /// The child nodes, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        self.children.children()
    }

    /// Set an attribute, upserting case-insensitively: setting `Class`
    /// after `class` overwrites the same slot, keeping the first spelling
    /// and position.
    ///
    /// A `None` value or an empty name makes the call a no-op, which
    /// supports conditional attributes inline:
    ///
    /// ```
    /// use wattle_dom::Element;
    ///
    /// let selected = false;
    /// let option = Element::new("option")
    ///     .set_attribute("selected", selected.then_some("selected"));
    /// assert_eq!(option.attribute("selected"), "");
    /// ```
    #[must_use]
    pub fn set_attribute(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value
            && !name.is_empty()
        {
            self.insert_attribute(name, value);
        }
        self
    }

    /// Append a class to the `class` attribute.
    ///
    /// An unset or empty `class` attribute becomes the trimmed name;
    /// otherwise the name is appended space-separated. No deduplication
    /// is performed: adding the same class twice yields a repeated token.
    /// Empty names are skipped silently.
    #[must_use]
    pub fn add_class(mut self, class: &str) -> Self {
        self.append_class(class);
        self
    }

    /// Append each non-empty class name in order; empty entries are
    /// skipped silently.
    #[must_use]
    pub fn add_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for class in classes {
            self.append_class(class.as_ref());
        }
        self
    }

    /// Whether the `class` attribute contains `class` as a whitespace
    /// token. Comparison is case-sensitive.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        let class = class.trim();
        !class.is_empty()
            && self
                .attribute("class")
                .split_ascii_whitespace()
                .any(|token| token == class)
    }

    /// Add content, wrapping strings as encoded text nodes.
    ///
    /// Accepts anything convertible to [`Content`]: strings, scalars,
    /// nodes, `Option`s (`None` is skipped), and nested collections or
    /// tuples, flattened recursively in encounter order.
    ///
    /// ```
    /// use wattle_dom::{Element, Render};
    ///
    /// let list = Element::new("ul").add(vec![
    ///     Element::new("li").add("one"),
    ///     Element::new("li").add(2),
    /// ]);
    /// assert_eq!(
    ///     list.to_html().unwrap(),
    ///     "<ul><li>one</li><li>2</li></ul>"
    /// );
    /// ```
    #[must_use]
    pub fn add(mut self, content: impl Into<Content>) -> Self {
        self.children.append(content.into(), false);
        self
    }

    /// Add content, wrapping strings as raw text nodes instead of
    /// encoded ones. Only use this for markup from a trusted source.
    #[must_use]
    pub fn add_html(mut self, content: impl Into<Content>) -> Self {
        self.children.append(content.into(), true);
        self
    }

    /// Add a dynamic `serde_json` value through the same flattening
    /// rules; strings are wrapped encoded.
    ///
    /// Takes `&mut self` rather than consuming: a failing call leaves the
    /// element and every previously added child untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`](crate::Error::UnsupportedType)
    /// for JSON objects.
    pub fn add_value(&mut self, value: &serde_json::Value) -> Result<()> {
        let content = Content::from_value(value)?;
        self.children.append(content, false);
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
        self.children.push(node);
    }

    fn apply_tag_expression(&mut self, expression: &str) {
        let Some(first) = expression.find(['.', '#']) else {
            self.tag_name = expression.to_string();
            return;
        };
        if first > 0 {
            self.tag_name = expression[..first].to_string();
        }
        let mut rest = &expression[first..];
        while let Some(delimiter) = rest.chars().next() {
            let token_end = rest[1..].find(['.', '#']).map_or(rest.len(), |i| i + 1);
            let token = &rest[1..token_end];
            match delimiter {
                '.' => self.append_class(token),
                '#' => self.insert_attribute("id", token),
                _ => {}
            }
            rest = &rest[token_end..];
        }
    }

    fn append_class(&mut self, class: &str) {
        let class = class.trim();
        let current = self.attribute("class").trim().to_string();
        let combined = if current.is_empty() {
            class.to_string()
        } else if class.is_empty() {
            current
        } else {
            format!("{current} {class}")
        };
        if !combined.is_empty() {
            self.insert_attribute("class", &combined);
        }
    }

    fn insert_attribute(&mut self, name: &str, value: &str) {
        if let Some(slot) = self
            .attributes
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            slot.1 = value.to_string();
        } else {
            self.attributes.push((name.to_string(), value.to_string()));
        }
    }
}

impl Render for Element {
    fn render_to(&self, sink: &mut dyn Write) -> Result<()> {
        sink.write_all(b"<")?;
        sink.write_all(self.tag_name.as_bytes())?;
        for (name, value) in &self.attributes {
            sink.write_all(b" ")?;
            sink.write_all(name.as_bytes())?;
            sink.write_all(b"=\"")?;
            write_encoded(sink, value)?;
            sink.write_all(b"\"")?;
        }
        if tag_traits(&self.tag_name).self_closing {
            // Void elements never render children, even if some were
            // added; misuse is not validated.
            sink.write_all(b"/>")?;
        } else {
            sink.write_all(b">")?;
            self.children.render_to(sink)?;
            sink.write_all(b"</")?;
            sink.write_all(self.tag_name.as_bytes())?;
            sink.write_all(b">")?;
        }
        Ok(())
    }
}

/// Whether `tag` is a void element, rendered self-closed with its
/// children suppressed. The match is case-insensitive.
#[must_use]
pub fn is_void_tag(tag: &str) -> bool {
    tag_traits(tag).self_closing
}

/// Rendering and attribute traits of a tag. Self-closing and URL
/// handling are independent booleans rather than combinable flag bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TagTraits {
    self_closing: bool,
    url_attrs: bool,
}

/// Tags that need handling beyond the default open/children/close shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
enum SpecialTag {
    A,
    Area,
    Blockquote,
    Br,
    Col,
    Del,
    Form,
    Hr,
    Iframe,
    Img,
    Input,
    Ins,
    Link,
    Meta,
    Param,
    Q,
    Script,
}

impl SpecialTag {
    const fn traits(self) -> TagTraits {
        match self {
            Self::Br | Self::Col | Self::Hr | Self::Meta | Self::Param => TagTraits {
                self_closing: true,
                url_attrs: false,
            },
            Self::Area | Self::Img | Self::Input | Self::Link => TagTraits {
                self_closing: true,
                url_attrs: true,
            },
            Self::A
            | Self::Blockquote
            | Self::Del
            | Self::Form
            | Self::Iframe
            | Self::Ins
            | Self::Q
            | Self::Script => TagTraits {
                self_closing: false,
                url_attrs: true,
            },
        }
    }
}

fn tag_traits(tag: &str) -> TagTraits {
    SpecialTag::from_str(tag)
        .map(SpecialTag::traits)
        .unwrap_or_default()
}

/// Attributes that conventionally carry URLs and participate in app-root
/// rewriting.
const URL_ATTRIBUTES: [&str; 6] = ["action", "cite", "href", "rel", "rev", "src"];

fn is_url_attribute(name: &str) -> bool {
    URL_ATTRIBUTES
        .iter()
        .any(|attr| attr.eq_ignore_ascii_case(name))
}

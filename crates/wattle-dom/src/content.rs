//! The closed union of everything an add call accepts.
//!
//! Heterogeneous inputs (strings, scalars, nodes, options, nested
//! collections) are normalized into [`Content`] before insertion, so the
//! tree never inspects types at runtime: each accepted shape has a
//! conversion, and anything else is rejected at compile time. The one
//! dynamic entry point is [`Content::from_value`], which ingests
//! `serde_json` values and fails fast on shapes the tree cannot
//! represent.

use std::borrow::Cow;
use std::fmt::Display;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::fragment::Fragment;
use crate::node::Node;
use crate::stream::StreamNode;
use crate::text::Text;

/// A normalized piece of addable content.
///
/// `Empty` entries vanish on insertion, which is what makes conditional
/// composition like `add(flag.then(|| element("em")))` work without
/// special cases. Nested `Many` values flatten recursively in encounter
/// order.
#[derive(Debug)]
pub enum Content {
    /// Nothing; skipped silently on insertion.
    Empty,
    /// A string value, wrapped as a text node on insertion. Whether it is
    /// encoded or raw is decided by the add call that receives it.
    Text(String),
    /// A node appended as-is.
    Node(Node),
    /// An ordered sequence flattened element by element.
    Many(Vec<Content>),
}

impl Content {
    /// Normalize any displayable scalar into its canonical text form.
    ///
    /// Covers value types without a dedicated conversion, such as dates
    /// or wrapper types from other crates.
    #[must_use]
    pub fn display<T: Display>(value: &T) -> Self {
        Self::Text(value.to_string())
    }

    /// Normalize a dynamic `serde_json` value.
    ///
    /// Null becomes [`Content::Empty`], strings become text, numbers and
    /// booleans take their canonical display form, and arrays flatten
    /// recursively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for objects, carrying the
    /// value's textual form. The tree has no representation for a JSON
    /// object, and dropping one silently would hide an integration
    /// mistake.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Ok(Self::Empty),
            serde_json::Value::Bool(b) => Ok(Self::Text(b.to_string())),
            serde_json::Value::Number(n) => Ok(Self::Text(n.to_string())),
            serde_json::Value::String(s) => Ok(Self::Text(s.clone())),
            serde_json::Value::Array(items) => {
                let mut many = Vec::with_capacity(items.len());
                for item in items {
                    many.push(Self::from_value(item)?);
                }
                Ok(Self::Many(many))
            }
            serde_json::Value::Object(_) => Err(Error::UnsupportedType {
                value: value.to_string(),
                kind: "object",
            }),
        }
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Content {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for Content {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<char> for Content {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Self::Node(element.into())
    }
}

impl From<Text> for Content {
    fn from(text: Text) -> Self {
        Self::Node(text.into())
    }
}

impl From<Fragment> for Content {
    fn from(fragment: Fragment) -> Self {
        Self::Node(fragment.into())
    }
}

impl From<StreamNode> for Content {
    fn from(stream: StreamNode) -> Self {
        Self::Node(stream.into())
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<T: Into<Content>> From<Vec<T>> for Content {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Content>, const N: usize> From<[T; N]> for Content {
    fn from(items: [T; N]) -> Self {
        Self::Many(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! content_from_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Content {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )+
    };
}

content_from_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

macro_rules! content_from_tuple {
    ($(($ty:ident, $item:ident)),+) => {
        impl<$($ty: Into<Content>),+> From<($($ty,)+)> for Content {
            fn from(value: ($($ty,)+)) -> Self {
                let ($($item,)+) = value;
                Self::Many(vec![$($item.into()),+])
            }
        }
    };
}

content_from_tuple!((T1, v1));
content_from_tuple!((T1, v1), (T2, v2));
content_from_tuple!((T1, v1), (T2, v2), (T3, v3));
content_from_tuple!((T1, v1), (T2, v2), (T3, v3), (T4, v4));
content_from_tuple!((T1, v1), (T2, v2), (T3, v3), (T4, v4), (T5, v5));
content_from_tuple!((T1, v1), (T2, v2), (T3, v3), (T4, v4), (T5, v5), (T6, v6));
content_from_tuple!(
    (T1, v1),
    (T2, v2),
    (T3, v3),
    (T4, v4),
    (T5, v5),
    (T6, v6),
    (T7, v7)
);
content_from_tuple!(
    (T1, v1),
    (T2, v2),
    (T3, v3),
    (T4, v4),
    (T5, v5),
    (T6, v6),
    (T7, v7),
    (T8, v8)
);

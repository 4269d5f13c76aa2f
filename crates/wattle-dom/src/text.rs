//! Text leaf nodes.

use std::io::Write;

use crate::error::Result;
use crate::render::{Render, write_encoded};

/// A leaf node holding a string value.
///
/// The value is HTML-encoded on render unless the node was constructed in
/// raw mode, in which case it is emitted verbatim (caller-trusted HTML).
/// Rendering never mutates the stored value, so re-rendering is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    value: String,
    encode: bool,
}

impl Text {
    /// Create a text node whose value is HTML-encoded on render.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            encode: true,
        }
    }

    /// Create a raw text node rendered verbatim, without encoding.
    ///
    /// Only use this for markup from a trusted source.
    #[must_use]
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            encode: false,
        }
    }

    /// Create an encoded text node from several segments joined without a
    /// separator.
    #[must_use]
    pub fn joined<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Self::concat(parts))
    }

    /// Create a raw text node from several segments joined without a
    /// separator.
    #[must_use]
    pub fn joined_raw<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::raw(Self::concat(parts))
    }

    fn concat<I, S>(parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut value = String::new();
        for part in parts {
            value.push_str(part.as_ref());
        }
        value
    }

    /// The stored value, exactly as constructed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value is HTML-encoded on render.
    #[must_use]
    pub const fn is_encoded(&self) -> bool {
        self.encode
    }
}

impl Render for Text {
    fn render_to(&self, sink: &mut dyn Write) -> Result<()> {
        if self.encode {
            write_encoded(sink, &self.value)
        } else {
            sink.write_all(self.value.as_bytes())?;
            Ok(())
        }
    }
}

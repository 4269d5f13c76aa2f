//! Rendering of node trees to HTML text.
//!
//! Rendering is a depth-first, pre-order walk that emits markup into a
//! caller-supplied byte sink. It is non-destructive and repeatable for
//! every in-memory node; the single exception is a pull-source
//! [`StreamNode`](crate::StreamNode), which drains its reader on first
//! render and emits nothing afterwards.
//!
//! Encoding follows the minimal HTML set: `&`, `<`, `>`, and `"` are
//! escaped in text nodes and attribute values; attribute names are
//! emitted verbatim.

use std::io::Write;

use crate::error::Result;

/// Anything that can serialize itself as HTML.
pub trait Render {
    /// Write this node's HTML to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when the sink rejects a
    /// write or a pull-stream source fails while being drained. A
    /// push-callback stream node may surface any I/O error its callback
    /// produces.
    fn render_to(&self, sink: &mut dyn Write) -> Result<()>;

    /// Render into an in-memory buffer and return the HTML as a string.
    ///
    /// Pull-stream sources are byte streams, so the buffer is decoded
    /// lossily; trees without such nodes always produce valid UTF-8 and
    /// round-trip exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) only when a stream node's
    /// source or callback fails; writing to the in-memory buffer itself
    /// cannot fail.
    fn to_html(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.render_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Write `text` to `sink` with the minimal HTML escapes applied.
///
/// `&` `<` `>` `"` become entities; everything else passes through. The
/// same encoder serves text nodes and attribute values.
pub(crate) fn write_encoded(sink: &mut dyn Write, text: &str) -> Result<()> {
    sink.write_all(html_escape::encode_double_quoted_attribute(text).as_bytes())?;
    Ok(())
}

//! Error taxonomy for tree construction and rendering.
//!
//! All errors are raised synchronously at the call that detects them and
//! surface directly to the caller; nothing is retried or recovered
//! internally. A failing call never rolls back children that were already
//! attached.

use std::io;
use thiserror::Error;

/// Errors produced while building or rendering a node tree.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was malformed, such as an odd-length flat
    /// attribute-pair list.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A dynamic value of a shape the tree cannot represent was passed to
    /// an add call. Carries the offending value's textual form and type
    /// name so integration mistakes surface immediately instead of
    /// silently dropping content.
    #[error("unsupported content: {value}, type: {kind}")]
    UnsupportedType {
        /// Textual form of the rejected value.
        value: String,
        /// Name of the rejected value's type.
        kind: &'static str,
    },

    /// A numeric parameter fell outside its valid range, such as a
    /// zero-sized stream transfer buffer.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// The output sink failed during rendering, or a pull-stream source
    /// failed while being drained.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

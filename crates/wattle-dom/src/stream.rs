//! Stream-backed leaf nodes.
//!
//! A [`StreamNode`] renders text produced outside the tree, for content
//! too large to materialize as a string. It is backed by exactly one of:
//!
//! - a **pull source**: a reader drained through a fixed-size transfer
//!   buffer during the write pass, or
//! - a **push callback**: a closure handed the output sink directly.
//!
//! Nothing is buffered in the node beyond the transfer buffer, so a pull
//! source is single-use: rendering drains the reader and a second render
//! emits nothing. Push callbacks and every in-memory node type re-render
//! identically each time.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Read, Write};

use crate::error::{Error, Result};
use crate::render::Render;

/// Transfer-buffer size used when none is given: 32 KiB.
pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

type WriterFn = Box<dyn Fn(&mut dyn Write) -> io::Result<()>>;

enum StreamSource {
    Reader(RefCell<Box<dyn Read>>),
    Writer(WriterFn),
}

/// A node whose text comes from an external reader or writer callback.
pub struct StreamNode {
    source: StreamSource,
    buffer_size: usize,
}

impl StreamNode {
    /// Create a stream node that drains `reader` into the output sink,
    /// using the default transfer-buffer size.
    ///
    /// The reader's bytes are copied through unencoded, like raw text.
    #[must_use]
    pub fn reader(reader: impl Read + 'static) -> Self {
        Self {
            source: StreamSource::Reader(RefCell::new(Box::new(reader))),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Create a pull-source stream node with a custom transfer-buffer
    /// size in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when `buffer_size` is zero.
    pub fn reader_with_buffer(reader: impl Read + 'static, buffer_size: usize) -> Result<Self> {
        if buffer_size == 0 {
            return Err(Error::OutOfRange(
                "stream buffer size must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            source: StreamSource::Reader(RefCell::new(Box::new(reader))),
            buffer_size,
        })
    }

    /// Create a stream node that invokes `writer` with the output sink.
    ///
    /// The callback may be invoked once per render, so repeated rendering
    /// works as long as the callback itself is repeatable.
    #[must_use]
    pub fn writer(writer: impl Fn(&mut dyn Write) -> io::Result<()> + 'static) -> Self {
        Self {
            source: StreamSource::Writer(Box::new(writer)),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// The transfer-buffer size. Only meaningful for pull sources.
    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}

impl Render for StreamNode {
    fn render_to(&self, sink: &mut dyn Write) -> Result<()> {
        match &self.source {
            StreamSource::Writer(writer) => writer(sink)?,
            StreamSource::Reader(reader) => {
                let mut reader = reader.borrow_mut();
                let mut buf = vec![0u8; self.buffer_size];
                loop {
                    let count = reader.read(&mut buf)?;
                    if count == 0 {
                        break;
                    }
                    sink.write_all(&buf[..count])?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for StreamNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            StreamSource::Reader(_) => f
                .debug_struct("StreamNode")
                .field("source", &"reader")
                .field("buffer_size", &self.buffer_size)
                .finish_non_exhaustive(),
            StreamSource::Writer(_) => f
                .debug_struct("StreamNode")
                .field("source", &"writer")
                .finish_non_exhaustive(),
        }
    }
}

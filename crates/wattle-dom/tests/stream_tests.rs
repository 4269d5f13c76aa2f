//! Tests for stream-backed nodes.

use std::io::Cursor;

use wattle_dom::{Error, Render, StreamNode, element, stream_reader, stream_writer};

// ========== pull sources ==========

#[test]
fn test_reader_matches_source_text() {
    let node = stream_reader(Cursor::new("this is a test"));
    assert_eq!(node.to_html().expect("render"), "this is a test");
}

#[test]
fn test_reader_content_is_not_encoded() {
    let node = stream_reader(Cursor::new("<b>&</b>"));
    assert_eq!(node.to_html().expect("render"), "<b>&</b>");
}

#[test]
fn test_reader_with_tiny_buffer_transfers_everything() {
    let node = StreamNode::reader_with_buffer(Cursor::new("chunked transfer"), 1)
        .expect("positive buffer size");
    assert_eq!(node.buffer_size(), 1);
    assert_eq!(node.to_html().expect("render"), "chunked transfer");
}

#[test]
fn test_reader_zero_buffer_is_out_of_range() {
    let err = StreamNode::reader_with_buffer(Cursor::new("x"), 0).expect_err("zero buffer");
    assert!(matches!(err, Error::OutOfRange(_)));
}

#[test]
fn test_reader_is_single_use() {
    let node = stream_reader(Cursor::new("once"));
    assert_eq!(node.to_html().expect("render"), "once");
    // The pull source is exhausted; a second render emits nothing.
    assert_eq!(node.to_html().expect("render"), "");
}

// ========== push callbacks ==========

#[test]
fn test_writer_matches_callback_output() {
    let node = stream_writer(|w| w.write_all(b"this is test 2"));
    assert_eq!(node.to_html().expect("render"), "this is test 2");
}

#[test]
fn test_writer_is_repeatable() {
    let node = stream_writer(|w| w.write_all(b"again"));
    assert_eq!(node.to_html().expect("render"), "again");
    assert_eq!(node.to_html().expect("render"), "again");
}

#[test]
fn test_writer_errors_surface_to_caller() {
    let node = stream_writer(|_| Err(std::io::Error::other("sink gone")));
    let err = node.to_html().expect_err("callback failure");
    assert!(matches!(err, Error::Io(_)));
}

// ========== in a tree ==========

#[test]
fn test_stream_node_inside_element() {
    let d = element("pre")
        .add("head:")
        .add(stream_reader(Cursor::new("large body")));
    assert_eq!(d.to_html().expect("render"), "<pre>head:large body</pre>");
}

#[test]
fn test_stream_writer_receives_the_real_sink() {
    let node = stream_writer(|w| write!(w, "{}-{}", 1, 2));
    let mut sink = Vec::new();
    node.render_to(&mut sink).expect("render");
    assert_eq!(sink, b"1-2");
}

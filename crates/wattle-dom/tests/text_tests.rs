//! Tests for text leaf nodes.

use wattle_dom::{Render, Text, raw_html, text};

#[test]
fn test_text_is_encoded_by_default() {
    let t = text("S & P");
    assert!(t.is_encoded());
    assert_eq!(t.to_html().expect("render"), "S &amp; P");
}

#[test]
fn test_raw_text_is_not_encoded() {
    let t = raw_html("S & P");
    assert!(!t.is_encoded());
    assert_eq!(t.to_html().expect("render"), "S & P");
}

#[test]
fn test_encoding_covers_markup_characters() {
    let t = text("<&>\"");
    assert_eq!(t.to_html().expect("render"), "&lt;&amp;&gt;&quot;");
}

#[test]
fn test_value_is_never_mutated_by_render() {
    let t = text("a & b");
    let first = t.to_html().expect("render");
    let second = t.to_html().expect("render");
    assert_eq!(first, second);
    assert_eq!(t.value(), "a & b");
}

#[test]
fn test_empty_text_renders_nothing() {
    let t = text("");
    assert_eq!(t.to_html().expect("render"), "");
}

#[test]
fn test_joined_segments() {
    let t = Text::joined(["S & P", " and Dow"]);
    assert_eq!(t.to_html().expect("render"), "S &amp; P and Dow");
}

#[test]
fn test_joined_raw_segments() {
    let t = Text::joined_raw(["<b>", "x", "</b>"]);
    assert_eq!(t.to_html().expect("render"), "<b>x</b>");
}

#[test]
fn test_joined_empty_iterator() {
    let t = Text::joined(Vec::<&str>::new());
    assert_eq!(t.value(), "");
}

//! Tests for untagged fragment containers.

use wattle_dom::{Fragment, Node, Render, element, fragment, text};

fn html(f: &Fragment) -> String {
    f.to_html().expect("in-memory render cannot fail")
}

#[test]
fn test_empty_fragment_renders_nothing() {
    assert_eq!(html(&fragment()), "");
}

#[test]
fn test_add_skipped_entries_renders_nothing() {
    let f = fragment().add((None::<&str>, None::<Node>));
    assert_eq!(html(&f), "");
    assert!(f.is_empty());
}

#[test]
fn test_add_string_and_skipped_entries() {
    let f = fragment().add((None::<&str>, "here", None::<&str>));
    assert_eq!(html(&f), "here");
}

#[test]
fn test_add_multi_items() {
    let f = fragment().add((
        text("here"),
        element("div").add("my-div"),
        element("a").add(element("span").add("click me")),
    ));
    assert_eq!(html(&f), "here<div>my-div</div><a><span>click me</span></a>");
}

#[test]
fn test_add_primitives_count() {
    let f = fragment().add((1, 2.5, 3i64));
    assert_eq!(f.len(), 3);
    assert_eq!(html(&f), "12.53");
}

#[test]
fn test_push_preserves_order() {
    let mut f = fragment().add((1, 2, 3));
    f.push(text("a"));
    assert_eq!(html(&f), "123a");
}

#[test]
fn test_nested_fragments_flatten_in_order() {
    let f = fragment()
        .add("a")
        .add(fragment().add("b").add(fragment().add("c")))
        .add("d");
    assert_eq!(html(&f), "abcd");
}

#[test]
fn test_add_html_is_raw() {
    let f = fragment().add_html("<em>x</em>");
    assert_eq!(html(&f), "<em>x</em>");
}

#[test]
fn test_add_value_array() {
    let mut f = fragment();
    f.add_value(&serde_json::json!([null, "a", [1, 2]]))
        .expect("nested arrays flatten");
    assert_eq!(html(&f), "a12");
}

#[test]
fn test_fragment_inside_element_renders_bare() {
    let d = element("div").add(fragment().add("x").add(element("b").add("y")));
    assert_eq!(d.to_html().expect("render"), "<div>x<b>y</b></div>");
}

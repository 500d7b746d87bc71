//! Tests for opening-tag attribute tokenization.

use wombat_html::extract_attributes;

#[test]
fn test_double_quoted_values() {
    let attrs = extract_attributes(r#"id="main" class="nav""#);
    assert_eq!(attrs.get("id").map(String::as_str), Some("main"));
    assert_eq!(attrs.get("class").map(String::as_str), Some("nav"));
}

#[test]
fn test_single_quoted_values() {
    let attrs = extract_attributes("href='/home'");
    assert_eq!(attrs.get("href").map(String::as_str), Some("/home"));
}

#[test]
fn test_boolean_attribute_maps_to_empty_string() {
    let attrs = extract_attributes("disabled");
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs.get("disabled").map(String::as_str), Some(""));
}

#[test]
fn test_last_write_wins() {
    let attrs = extract_attributes(r#"id="a" id="b""#);
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs.get("id").map(String::as_str), Some("b"));
}

#[test]
fn test_insertion_order_is_preserved() {
    let attrs = extract_attributes(r#"c="3" a="1" b="2""#);
    let keys: Vec<&str> = attrs.keys().map(String::as_str).collect();
    assert_eq!(keys, ["c", "a", "b"]);
}

#[test]
fn test_empty_interior() {
    assert!(extract_attributes("").is_empty());
    assert!(extract_attributes("   ").is_empty());
}

#[test]
fn test_names_keep_their_case() {
    let attrs = extract_attributes(r#"ID="a" data-X="b""#);
    assert_eq!(attrs.get("ID").map(String::as_str), Some("a"));
    assert_eq!(attrs.get("data-X").map(String::as_str), Some("b"));
    assert!(!attrs.contains_key("id"));
}

#[test]
fn test_empty_quoted_value() {
    let attrs = extract_attributes(r#"alt="""#);
    assert_eq!(attrs.get("alt").map(String::as_str), Some(""));
}

#[test]
fn test_unquoted_value_is_not_recognized() {
    // Only quoted values are part of the dialect; `type=text` tokenizes as
    // two boolean attributes.
    let attrs = extract_attributes("type=text");
    let keys: Vec<&str> = attrs.keys().map(String::as_str).collect();
    assert_eq!(keys, ["type", "text"]);
    assert!(attrs.values().all(String::is_empty));
}

#[test]
fn test_trailing_slash_is_not_an_attribute() {
    let attrs = extract_attributes(r#"src="x.png" /"#);
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs.get("src").map(String::as_str), Some("x.png"));
}

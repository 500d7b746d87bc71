//! Round-trip, determinism, and termination properties for the
//! parser/serializer pair.

use proptest::prelude::*;
use wombat_dom::serialize;
use wombat_html::parse;

/// Collapse runs of whitespace to single spaces and trim the ends.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn test_round_trip_compact_document() {
    let doc = concat!(
        "<html><head><title>My Page</title></head>",
        r#"<body><h1 class="top">Hello</h1><p>Body text</p><hr>"#,
        r#"<img src="x.png"></body></html>"#,
    );
    assert_eq!(serialize(&parse(doc)), doc);
}

#[test]
fn test_round_trip_with_surrounding_whitespace() {
    let doc = "\n  <p>hello world</p>\n";
    assert_eq!(normalize(&serialize(&parse(doc))), normalize(doc));
}

#[test]
fn test_round_trip_comment_and_boolean_attribute() {
    let doc = r#"<!-- header --><input type="text" required>"#;
    assert_eq!(serialize(&parse(doc)), doc);
}

#[test]
fn test_round_trip_raw_text() {
    let doc = "<script>if (a < b) { x(); }</script>";
    assert_eq!(serialize(&parse(doc)), doc);
}

#[test]
fn test_determinism() {
    let doc = r#"<div id="a"><p>x</p><!-- c --><br></div>"#;
    assert_eq!(parse(doc), parse(doc));
    assert_eq!(serialize(&parse(doc)), serialize(&parse(doc)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Scanning any finite input terminates and never panics.
    #[test]
    fn parse_terminates_on_arbitrary_input(input in ".{0,200}") {
        let nodes = parse(&input);
        let _ = serialize(&nodes);
    }

    /// Markup soup: heavy in the characters the scanner dispatches on.
    #[test]
    fn parse_is_deterministic_on_markup_soup(input in r#"[<>/!"'= a-z-]{0,120}"#) {
        let first = parse(&input);
        let second = parse(&input);
        prop_assert_eq!(first, second);
    }
}

//! Attribute-list tokenization for opening tags.

use once_cell::sync::Lazy;
use regex::Regex;
use wombat_dom::AttributesMap;

/// One attribute token: an identifier, optionally `=` and a quoted value.
static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z0-9_-]+)(?:=(?:"([^"]*)"|'([^']*)'))?"#)
        .expect("attribute pattern is valid")
});

/// Tokenize an opening tag's attribute list into a key→value mapping.
///
/// `tag_interior` is the text between the tag-name token and the closing
/// `>`. Tokens are matched left to right: an identifier, optionally followed
/// by `=` and a single- or double-quoted value. An identifier without a
/// value (a boolean attribute such as `disabled`) maps to the empty string.
/// If the same name appears more than once, the later occurrence overwrites
/// the earlier one. Attribute names are recorded as written.
///
/// Never fails; input matching no token yields an empty map.
#[must_use]
pub fn extract_attributes(tag_interior: &str) -> AttributesMap {
    let mut attrs = AttributesMap::new();
    for caps in ATTRIBUTE.captures_iter(tag_interior) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());
        let _ = attrs.insert(name.to_string(), value.to_string());
    }
    attrs
}

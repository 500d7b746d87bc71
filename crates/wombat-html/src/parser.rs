//! Recursive descent scanner for the wombat dialect.
//!
//! One [`Scanner`] owns the cursor for one invocation; nested element
//! content is parsed by a fresh scanner over the inner span, so scan state
//! is never shared between levels. Every loop iteration advances the cursor
//! by at least one character, so scanning terminates for any finite input.
//! Recursion is bounded by the input's nesting depth; stack usage grows
//! proportionally for deeply nested documents.

use once_cell::sync::Lazy;
use regex::Regex;
use wombat_dom::{ElementData, Node, is_raw_text_element, is_void_element};

use crate::attributes::extract_attributes;
use crate::issue::{IssueKind, ParseIssue};

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// A run of tag-name characters inside a tag interior.
static TAG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new("[A-Za-z0-9_-]+").expect("tag-name pattern is valid"));

/// Parse a document into its top-level node sequence.
///
/// Never fails: malformed input degrades into best-effort text and element
/// nodes instead of producing an error.
///
/// - An unterminated comment is dropped and scanning resumes past its `<`.
/// - An opening `<` with no `>` truncates the document at that point.
/// - A tag with no valid name is skipped without emitting a node.
/// - A non-void element with no matching closing tag gets empty children.
/// - A stray closing tag is skipped past its `<`.
///
/// The matching closing tag is the first occurrence of the literal
/// `</name>` (ASCII case-insensitive) anywhere after the opening tag. The
/// search is not nesting-aware, so same-named nested elements pair with the
/// nearest closing tag rather than the balanced one.
#[must_use]
pub fn parse(document: &str) -> Vec<Node> {
    let (nodes, _) = Scanner::new(document, 0).run();
    nodes
}

/// Like [`parse`], additionally returning the recoveries applied.
///
/// The node sequence is identical to what [`parse`] returns; the issue list
/// is observability only and never affects the tree.
#[must_use]
pub fn parse_with_issues(document: &str) -> (Vec<Node>, Vec<ParseIssue>) {
    Scanner::new(document, 0).run()
}

/// Cursor over one span of the document.
struct Scanner<'a> {
    input: &'a str,
    /// Byte position of the next unconsumed character in `input`.
    pos: usize,
    /// Absolute byte offset of `input` in the original document, so issues
    /// from nested scans stay addressable.
    base: usize,
    nodes: Vec<Node>,
    issues: Vec<ParseIssue>,
}

impl<'a> Scanner<'a> {
    const fn new(input: &'a str, base: usize) -> Self {
        Scanner {
            input,
            pos: 0,
            base,
            nodes: Vec::new(),
            issues: Vec::new(),
        }
    }

    fn run(mut self) -> (Vec<Node>, Vec<ParseIssue>) {
        while self.pos < self.input.len() {
            let rest = self.rest();
            let Some(lt) = rest.find('<') else {
                self.push_text(rest);
                break;
            };
            self.push_text(&rest[..lt]);
            self.pos += lt;
            if self.rest().starts_with(COMMENT_OPEN) {
                self.scan_comment();
            } else if self.rest()[1..].starts_with('/') {
                // The matched closing tag of a well-formed element is
                // consumed by the element scan and never reaches this point.
                self.record(IssueKind::StrayClosingTag);
                self.skip_char();
            } else {
                self.scan_element();
            }
        }
        (self.nodes, self.issues)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn record(&mut self, kind: IssueKind) {
        self.issues.push(ParseIssue::new(kind, self.base + self.pos));
    }

    /// Skip exactly one character: the defensive progress guarantee.
    fn skip_char(&mut self) {
        self.pos += self.rest().chars().next().map_or(1, char::len_utf8);
    }

    /// Emit the trimmed text as a node, unless empty.
    fn push_text(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            self.nodes.push(Node::text(trimmed));
        }
    }

    /// Scan `<!-- ... -->` at the cursor.
    fn scan_comment(&mut self) {
        let body = &self.rest()[COMMENT_OPEN.len()..];
        if let Some(end) = body.find(COMMENT_CLOSE) {
            self.nodes.push(Node::comment(body[..end].trim()));
            self.pos += COMMENT_OPEN.len() + end + COMMENT_CLOSE.len();
        } else {
            self.record(IssueKind::UnterminatedComment);
            self.skip_char();
        }
    }

    /// Scan an opening tag at the cursor and, unless it is self-closing,
    /// its inner span up to the matching closing tag.
    fn scan_element(&mut self) {
        let rest = self.rest();
        let Some(gt) = rest.find('>') else {
            self.record(IssueKind::TruncatedTag);
            self.pos = self.input.len();
            return;
        };
        let interior = &rest[1..gt];
        let Some(name_match) = TAG_NAME.find(interior) else {
            self.record(IssueKind::MissingTagName);
            self.skip_char();
            return;
        };
        let tag_name = name_match.as_str().to_ascii_lowercase();
        let attrs = extract_attributes(&interior[name_match.end()..]);
        let open_end = self.pos + gt + 1;

        if interior.trim_end().ends_with('/') || is_void_element(&tag_name) {
            self.nodes
                .push(Node::element(ElementData::new(tag_name, attrs, Vec::new())));
            self.pos = open_end;
            return;
        }

        // First occurrence wins; the search is not nesting-aware.
        let closing = format!("</{tag_name}>");
        let after_open = &self.input[open_end..];
        let Some(close_at) = after_open.to_ascii_lowercase().find(&closing) else {
            self.record(IssueKind::MissingClosingTag);
            self.nodes
                .push(Node::element(ElementData::new(tag_name, attrs, Vec::new())));
            self.pos = open_end;
            return;
        };

        let inner = &after_open[..close_at];
        let children = if is_raw_text_element(&tag_name) {
            if inner.trim().is_empty() {
                Vec::new()
            } else {
                vec![Node::text(inner)]
            }
        } else {
            let (children, nested) = Scanner::new(inner, self.base + open_end).run();
            self.issues.extend(nested);
            children
        };
        self.nodes
            .push(Node::element(ElementData::new(tag_name, attrs, children)));
        self.pos = open_end + close_at + closing.len();
    }
}

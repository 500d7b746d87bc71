//! Parse diagnostics.
//!
//! The scanner never fails; every malformed construct degrades into a
//! best-effort node or is skipped. Each such recovery is recorded as a
//! [`ParseIssue`], surfaced by [`parse_with_issues`](crate::parse_with_issues)
//! for callers that opt in. The produced tree is identical either way.

use core::fmt;

use strum_macros::Display;

/// The malformed construct a recovery was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IssueKind {
    /// `<!--` with no closing `-->`; the comment was dropped.
    UnterminatedComment,
    /// An opening `<` with no `>` before end of input; scanning stopped and
    /// the remaining input was discarded.
    TruncatedTag,
    /// A tag interior with no run of tag-name characters; the `<` was
    /// skipped and no node emitted.
    MissingTagName,
    /// A non-void element with no matching closing tag anywhere after it;
    /// treated as self-closing.
    MissingClosingTag,
    /// A closing tag where an opening tag or text was expected; the `<` was
    /// skipped.
    StrayClosingTag,
}

/// One recovery applied while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseIssue {
    /// What was recovered.
    pub kind: IssueKind,
    /// Byte offset into the original document where the construct started.
    pub offset: usize,
}

impl ParseIssue {
    /// Create an issue at the given absolute byte offset.
    #[must_use]
    pub const fn new(kind: IssueKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}

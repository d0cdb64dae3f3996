//! Items: the comparable elements of a sequence.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into a source text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub const fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }

    /// Shifts the span right by `by` bytes.
    #[must_use]
    pub const fn shift(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }

    /// Returns true if the two spans share at least one byte.
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the text covered by this span, if it lies on char boundaries.
    #[must_use]
    pub fn text(self, source: &str) -> Option<&str> {
        source.get(self.start..self.end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Syntactic kind of an item.
///
/// The declaration kinds are listed in their fixed precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    /// `import 'polyfill';`
    SideEffect,
    /// `import * as ns from 'x';`
    Namespace,
    /// `import value from 'x';`
    Default,
    /// `import { a, b } from 'x';` or one named specifier.
    Named,
    /// A `name: value` declaration inside a CSS template.
    Property,
    /// One whitespace-delimited class name.
    Token,
}

impl ItemKind {
    /// Rank of the kind among import declaration syntaxes.
    ///
    /// Non-declaration kinds share the last rank.
    #[must_use]
    pub const fn syntax_rank(self) -> usize {
        match self {
            Self::SideEffect => 0,
            Self::Namespace => 1,
            Self::Default => 2,
            Self::Named | Self::Property | Self::Token => 3,
        }
    }
}

/// One comparable element of a sequence.
///
/// Items never own the source text; `span` points back into it and `key`
/// is the string the comparator looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Location of the item text in the source.
    pub span: Span,
    /// Sort key derived from the item content.
    pub key: String,
    /// Syntactic kind.
    pub kind: ItemKind,
    /// Whether a comment is attached directly before or after the item.
    pub has_adjacent_comment: bool,
}

impl Item {
    /// Creates an item without attached comments.
    #[must_use]
    pub fn new(span: Span, key: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            span,
            key: key.into(),
            kind,
            has_adjacent_comment: false,
        }
    }

    /// Marks whether a comment is attached to this item.
    #[must_use]
    pub fn with_adjacent_comment(mut self, attached: bool) -> Self {
        self.has_adjacent_comment = attached;
        self
    }
}

//! Building the text replacement for a reordered sequence.

use serde::{Deserialize, Serialize};

use super::item::{Item, Span};
use super::reorder::Permutation;

/// A single contiguous text replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    /// Start of the replaced range.
    pub start: usize,
    /// Exclusive end of the replaced range.
    pub end: usize,
    /// Replacement text.
    pub text: String,
}

impl Patch {
    /// Creates a patch.
    #[must_use]
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            text: text.into(),
        }
    }

    /// The replaced range.
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Applies the patch to `source`, or returns `None` if the range is invalid.
    #[must_use]
    pub fn apply(&self, source: &str) -> Option<String> {
        let head = source.get(..self.start)?;
        let tail = source.get(self.end..)?;
        let mut out = String::with_capacity(head.len() + self.text.len() + tail.len());
        out.push_str(head);
        out.push_str(&self.text);
        out.push_str(tail);
        Some(out)
    }
}

/// How the text between items is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorPolicy<'s> {
    /// The gap after the item at position `i` stays after whatever item
    /// lands at position `i`.
    Positional,
    /// Every gap becomes the given text.
    Canonical(&'s str),
}

/// Why a patch was not produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsafeReason {
    /// An item has an attached comment that reordering could misplace.
    AttachedComment,
    /// An item span does not lie inside the source on char boundaries.
    InvalidSpan,
}

/// Result of patch construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The replacement to apply.
    Patch(Patch),
    /// Reordering is not safe; report without a fix.
    Unsafe(UnsafeReason),
}

impl PatchOutcome {
    /// Returns the patch if one was produced.
    #[must_use]
    pub fn into_patch(self) -> Option<Patch> {
        match self {
            Self::Patch(patch) => Some(patch),
            Self::Unsafe(_) => None,
        }
    }
}

/// Builds the replacement for the range from the first to the last item.
///
/// Item texts are copied verbatim from `source`; only separators are
/// rebuilt, per `separators`. `items` must be in document order and
/// `target` must index into it.
#[must_use]
pub fn build_patch(
    source: &str,
    items: &[Item],
    target: &Permutation,
    separators: SeparatorPolicy<'_>,
) -> PatchOutcome {
    if items.iter().any(|i| i.has_adjacent_comment) {
        return PatchOutcome::Unsafe(UnsafeReason::AttachedComment);
    }
    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        return PatchOutcome::Unsafe(UnsafeReason::InvalidSpan);
    };

    let mut text = String::new();
    let count = target.len();
    for (pos, item) in target.apply(items).enumerate() {
        let Some(item_text) = item.span.text(source) else {
            return PatchOutcome::Unsafe(UnsafeReason::InvalidSpan);
        };
        text.push_str(item_text);

        if pos + 1 == count {
            break;
        }
        match separators {
            SeparatorPolicy::Canonical(sep) => text.push_str(sep),
            SeparatorPolicy::Positional => {
                let gap = items
                    .get(pos)
                    .zip(items.get(pos + 1))
                    .and_then(|(a, b)| source.get(a.span.end..b.span.start));
                let Some(gap) = gap else {
                    return PatchOutcome::Unsafe(UnsafeReason::InvalidSpan);
                };
                text.push_str(gap);
            }
        }
    }

    PatchOutcome::Patch(Patch::new(
        Span::new(first.span.start, last.span.end),
        text,
    ))
}

//! Sequence ordering engine.
//!
//! Every rule is an instance of one problem: pull comparable items out of a
//! region, find their canonical order, and emit a surgical patch when that
//! is safe.
//!
//! ```text
//! region ──extract──▶ Vec<Item>
//!                        │ classify (Bucket) + compare (KeyOrder)
//!                        ▼
//!                     reorder ──▶ Compliant | Violation { target }
//!                                                 │
//!                                   build_patch ◀─┘
//!                                        ▼
//!                               Patch | Unsafe(reason)
//! ```
//!
//! All functions are pure: no I/O and no state shared between calls.

mod classify;
mod compare;
mod extract;
mod item;
mod patch;
mod reorder;

pub use classify::{
    Bucket, BucketTag, Classify, PatternClassifier, PatternError, PatternList, PriorityTable,
    Unclassified,
};
pub use compare::{collate, Comparator, KeyOrder};
pub use extract::{
    attribute_items, declaration_items, property_records, specifier_items, template_items,
    token_records, Extraction, UnsupportedReason,
};
pub use item::{Item, ItemKind, Span};
pub use patch::{build_patch, Patch, PatchOutcome, SeparatorPolicy, UnsafeReason};
pub use reorder::{reorder, Permutation, Policy, Reordering};

/// Result of running the whole pipeline over one item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceCheck {
    /// Items are in canonical order.
    Compliant,
    /// Items are out of order.
    Violation {
        /// Index of the first misplaced item.
        first_misplaced: usize,
        /// Fix, or the reason none could be built.
        patch: PatchOutcome,
    },
}

/// Reorders `items` under `policy` and builds the patch for a violation.
#[must_use]
pub fn check_sequence(
    source: &str,
    items: &[Item],
    policy: &Policy<'_>,
    separators: SeparatorPolicy<'_>,
) -> SequenceCheck {
    match reorder(items, policy) {
        Reordering::Compliant => SequenceCheck::Compliant,
        Reordering::Violation {
            target,
            first_misplaced,
        } => SequenceCheck::Violation {
            first_misplaced,
            patch: build_patch(source, items, &target, separators),
        },
    }
}

//! Computing the target permutation and deciding violation vs. compliant.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::trace;

use super::classify::Classify;
use super::compare::{Comparator, KeyOrder};
use super::item::Item;

/// An ordering of items, as indices into the original list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// The as-found order of `len` items.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }

    /// Wraps explicit indices.
    #[must_use]
    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Indices in target order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if this is the as-found order of `len` items.
    #[must_use]
    pub fn is_identity_of(&self, len: usize) -> bool {
        self.0.len() == len && self.0.iter().enumerate().all(|(pos, &idx)| pos == idx)
    }

    /// Items in permutation order.
    pub fn apply<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.0.iter().filter_map(move |&idx| items.get(idx))
    }
}

/// The ordering policy of one rule invocation.
#[derive(Clone, Copy)]
pub struct Policy<'a> {
    /// Bucket assignment.
    pub classifier: &'a dyn Classify,
    /// Secondary key order.
    pub order: KeyOrder,
    /// Collapse items with identical keys to their first occurrence.
    pub dedup: bool,
}

impl<'a> Policy<'a> {
    /// Creates a policy without de-duplication.
    #[must_use]
    pub fn new(classifier: &'a dyn Classify, order: KeyOrder) -> Self {
        Self {
            classifier,
            order,
            dedup: false,
        }
    }

    /// Enables or disables de-duplication.
    #[must_use]
    pub fn dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    fn comparator(&self) -> Comparator<'a> {
        Comparator::new(self.classifier, self.order)
    }
}

impl std::fmt::Debug for Policy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Policy")
            .field("order", &self.order)
            .field("dedup", &self.dedup)
            .finish_non_exhaustive()
    }
}

/// Outcome of comparing the as-found order with the canonical one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reordering {
    /// Already in canonical order.
    Compliant,
    /// Out of order (or holding duplicates when de-duplicating).
    Violation {
        /// Canonical order.
        target: Permutation,
        /// Index of the first item found out of place.
        first_misplaced: usize,
    },
}

impl Reordering {
    /// Returns true for a violation.
    #[must_use]
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation { .. })
    }
}

/// Stable-sorts `items` under `policy` and compares against the input order.
///
/// `items` must be in document order. Equal keys keep their relative order,
/// so running this on its own output is always compliant.
#[must_use]
pub fn reorder(items: &[Item], policy: &Policy<'_>) -> Reordering {
    if items.len() < 2 {
        return Reordering::Compliant;
    }

    let comparator = policy.comparator();
    let buckets = comparator.buckets(items);
    let compare = |a: usize, b: usize| {
        comparator.compare_classified((buckets[a], &items[a]), (buckets[b], &items[b]))
    };

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| compare(a, b));

    if policy.dedup {
        let mut seen = HashSet::new();
        order.retain(|&idx| seen.insert(items[idx].key.as_str()));
    }

    let target = Permutation::from_indices(order);
    if target.is_identity_of(items.len()) {
        return Reordering::Compliant;
    }

    let first_misplaced = (1..items.len())
        .find(|&i| compare(i - 1, i) == Ordering::Greater)
        .or_else(|| {
            target
                .indices()
                .iter()
                .enumerate()
                .find(|(pos, idx)| pos != *idx)
                .map(|(pos, _)| pos)
        })
        .unwrap_or(0);

    trace!(
        items = items.len(),
        kept = target.len(),
        first_misplaced,
        "sequence out of order"
    );

    Reordering::Violation {
        target,
        first_misplaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{ItemKind, PatternClassifier, PriorityTable, Span, Unclassified};

    fn items(keys: &[&str], kind: ItemKind) -> Vec<Item> {
        let mut at = 0;
        keys.iter()
            .map(|k| {
                let span = Span::new(at, at + k.len());
                at = span.end + 2;
                Item::new(span, *k, kind)
            })
            .collect()
    }

    fn target(r: &Reordering) -> Vec<usize> {
        match r {
            Reordering::Violation { target, .. } => target.indices().to_vec(),
            Reordering::Compliant => Vec::new(),
        }
    }

    #[test]
    fn sorted_input_is_compliant() {
        let list = items(&["bar", "foo"], ItemKind::Named);
        let policy = Policy::new(&Unclassified, KeyOrder::Ordinal);
        assert_eq!(reorder(&list, &policy), Reordering::Compliant);
    }

    #[test]
    fn unsorted_input_reports_first_misplaced() {
        let list = items(&["foo", "bar", "baz"], ItemKind::Named);
        let policy = Policy::new(&Unclassified, KeyOrder::Ordinal);
        let result = reorder(&list, &policy);
        assert_eq!(target(&result), [1, 2, 0]);
        assert!(matches!(
            result,
            Reordering::Violation {
                first_misplaced: 1,
                ..
            }
        ));
    }

    #[test]
    fn single_item_short_circuits() {
        let list = items(&["foo"], ItemKind::Named);
        let policy = Policy::new(&Unclassified, KeyOrder::Ordinal);
        assert_eq!(reorder(&list, &policy), Reordering::Compliant);
        assert_eq!(reorder(&[], &policy), Reordering::Compliant);
    }

    #[test]
    fn ignore_case_changes_outcome() {
        let list = items(&["Bar", "foo"], ItemKind::Named);
        assert!(!reorder(&list, &Policy::new(&Unclassified, KeyOrder::CaseInsensitive))
            .is_violation());

        let list = items(&["foo", "Bar"], ItemKind::Named);
        let result = reorder(&list, &Policy::new(&Unclassified, KeyOrder::CaseInsensitive));
        assert_eq!(target(&result), [1, 0]);
    }

    #[test]
    fn equal_keys_keep_relative_order() {
        let list = items(&["a", "b", "a"], ItemKind::Named);
        let result = reorder(&list, &Policy::new(&Unclassified, KeyOrder::Ordinal));
        assert_eq!(target(&result), [0, 2, 1]);
    }

    #[test]
    fn dedup_alone_is_a_violation() {
        let list = items(&["flex", "flex", "mt-2"], ItemKind::Token);
        let table = PriorityTable::new(["flex", "mt-2"]);
        let result = reorder(&list, &Policy::new(&table, KeyOrder::Preserve).dedup(true));
        assert_eq!(target(&result), [0, 2]);
        assert!(matches!(
            result,
            Reordering::Violation {
                first_misplaced: 1,
                ..
            }
        ));
    }

    #[test]
    fn unknown_tokens_keep_original_order_after_known() {
        let list = items(&["zz-custom", "mt-2", "aa-custom", "flex"], ItemKind::Token);
        let table = PriorityTable::new(["flex", "mt-2"]);
        let result = reorder(&list, &Policy::new(&table, KeyOrder::Preserve).dedup(true));
        assert_eq!(target(&result), [3, 1, 0, 2]);
    }

    #[test]
    fn earlier_head_pattern_always_first() {
        let list = items(&["a", "zeta-lib", "alpha-lib"], ItemKind::Default);
        let classifier =
            PatternClassifier::from_patterns(["^zeta", "^alpha"], Vec::<&str>::new()).unwrap();
        let result = reorder(&list, &Policy::new(&classifier, KeyOrder::Collated));
        assert_eq!(target(&result), [1, 2, 0]);
    }

    #[test]
    fn default_bucket_orders_by_kind_then_path() {
        let mut list = items(&["b", "a", "c"], ItemKind::Named);
        list[2].kind = ItemKind::Default;
        let classifier = PatternClassifier::new();
        let result = reorder(&list, &Policy::new(&classifier, KeyOrder::Collated));
        assert_eq!(target(&result), [2, 1, 0]);
    }

    #[test]
    fn permutation_identity() {
        assert!(Permutation::identity(3).is_identity_of(3));
        assert!(!Permutation::from_indices(vec![0, 2]).is_identity_of(3));
    }
}

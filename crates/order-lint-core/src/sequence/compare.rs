//! Ordering items within and across buckets.

use std::cmp::Ordering;

use super::classify::{Bucket, Classify};
use super::item::Item;

/// Secondary key comparison applied inside a bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyOrder {
    /// No secondary key: items inside a bucket keep their original order.
    Preserve,
    /// Case-sensitive code point order.
    #[default]
    Ordinal,
    /// Code point order of the lower-cased keys.
    CaseInsensitive,
    /// Locale-style collation, see [`collate`].
    Collated,
}

impl KeyOrder {
    /// Compares two keys.
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Preserve => Ordering::Equal,
            Self::Ordinal => a.cmp(b),
            Self::CaseInsensitive => a.to_lowercase().cmp(&b.to_lowercase()),
            Self::Collated => collate(a, b),
        }
    }
}

/// ASCII punctuation and symbols in collation order.
///
/// Everything listed sorts before digits, digits before letters.
const SYMBOL_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary weight of a character: class first, then position in class.
fn primary_weight(ch: char) -> (u8, u32) {
    if ch.is_whitespace() {
        return (0, 0);
    }
    if let Some(pos) = SYMBOL_ORDER.find(ch) {
        return (1, u32::try_from(pos).unwrap_or(u32::MAX));
    }
    if ch.is_ascii_digit() {
        return (2, u32::from(ch));
    }
    if ch.is_alphabetic() {
        let folded = ch.to_lowercase().next().unwrap_or(ch);
        return (3, u32::from(folded));
    }
    (4, u32::from(ch))
}

/// Compares two strings the way a user-facing sort does.
///
/// Three levels: case-folded primary weights (punctuation before digits
/// before letters), then lowercase before uppercase at the first case
/// difference, then plain code point order so unequal strings never tie.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight));
    if primary != Ordering::Equal {
        return primary;
    }

    let case = a
        .chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map_or(Ordering::Equal, |(x, y)| {
            x.is_uppercase().cmp(&y.is_uppercase())
        });

    case.then_with(|| a.cmp(b))
}

/// Composed comparator: bucket first, key second.
#[derive(Clone, Copy)]
pub struct Comparator<'a> {
    classifier: &'a dyn Classify,
    order: KeyOrder,
}

impl<'a> Comparator<'a> {
    /// Creates a comparator.
    #[must_use]
    pub fn new(classifier: &'a dyn Classify, order: KeyOrder) -> Self {
        Self { classifier, order }
    }

    /// Compares two items.
    #[must_use]
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        self.compare_classified(
            (self.classifier.classify(a), a),
            (self.classifier.classify(b), b),
        )
    }

    /// Compares two items whose buckets are already known.
    #[must_use]
    pub fn compare_classified(&self, a: (Bucket, &Item), b: (Bucket, &Item)) -> Ordering {
        a.0.cmp(&b.0)
            .then_with(|| self.order.compare(&a.1.key, &b.1.key))
    }

    /// Classifies every item once.
    #[must_use]
    pub fn buckets(&self, items: &[Item]) -> Vec<Bucket> {
        items.iter().map(|i| self.classifier.classify(i)).collect()
    }
}

impl std::fmt::Debug for Comparator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparator")
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{ItemKind, PriorityTable, Span, Unclassified};

    #[test]
    fn ordinal_is_case_sensitive() {
        assert_eq!(KeyOrder::Ordinal.compare("Bar", "foo"), Ordering::Less);
        assert_eq!(KeyOrder::Ordinal.compare("foo", "Bar"), Ordering::Greater);
        assert_eq!(KeyOrder::Ordinal.compare("bar", "Foo"), Ordering::Greater);
    }

    #[test]
    fn case_insensitive_lowercases() {
        assert_eq!(
            KeyOrder::CaseInsensitive.compare("bar", "Foo"),
            Ordering::Less
        );
        assert_eq!(
            KeyOrder::CaseInsensitive.compare("Foo", "foo"),
            Ordering::Equal
        );
    }

    #[test]
    fn collate_ignores_case_at_primary_level() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Apple", "banana"), Ordering::Less);
    }

    #[test]
    fn collate_lowercase_first_on_tie() {
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("A", "a"), Ordering::Greater);
        assert_eq!(collate("a", "a"), Ordering::Equal);
    }

    #[test]
    fn collate_punctuation_before_digits_before_letters() {
        assert_eq!(collate("@scope/pkg", "0-lib"), Ordering::Less);
        assert_eq!(collate("0-lib", "axios"), Ordering::Less);
        assert_eq!(collate("./local", "axios"), Ordering::Less);
    }

    #[test]
    fn collate_prefix_sorts_first() {
        assert_eq!(collate("react", "react-dom"), Ordering::Less);
        assert_eq!(collate("border: 0", "border-radius: 3px"), Ordering::Greater);
    }

    #[test]
    fn preserve_never_reorders() {
        assert_eq!(KeyOrder::Preserve.compare("z", "a"), Ordering::Equal);
    }

    #[test]
    fn bucket_is_primary_key() {
        let table = PriorityTable::new(["zeta", "alpha"]);
        let cmp = Comparator::new(&table, KeyOrder::Ordinal);
        let zeta = Item::new(Span::default(), "zeta", ItemKind::Token);
        let alpha = Item::new(Span::default(), "alpha", ItemKind::Token);
        assert_eq!(cmp.compare(&zeta, &alpha), Ordering::Less);

        let cmp = Comparator::new(&Unclassified, KeyOrder::Ordinal);
        assert_eq!(cmp.compare(&zeta, &alpha), Ordering::Greater);
    }
}

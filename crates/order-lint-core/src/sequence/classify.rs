//! Assigning items to ordered buckets.

use std::collections::HashMap;

use regex::Regex;

use super::item::Item;

/// Position of an item's bucket in the canonical order.
///
/// Buckets compare by `rank` first; `sub_rank` orders items inside a bucket
/// before the key comparison (syntax kind in the default import bucket).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bucket {
    /// Primary rank.
    pub rank: usize,
    /// Secondary rank within the bucket.
    pub sub_rank: usize,
}

impl Bucket {
    /// Creates a bucket with no sub-rank.
    #[must_use]
    pub const fn new(rank: usize) -> Self {
        Self { rank, sub_rank: 0 }
    }
}

/// Deterministic item-to-bucket assignment.
pub trait Classify {
    /// Returns the bucket of an item.
    fn classify(&self, item: &Item) -> Bucket;
}

/// Puts every item in the same bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unclassified;

impl Classify for Unclassified {
    fn classify(&self, _item: &Item) -> Bucket {
        Bucket::default()
    }
}

/// Which configured list a pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternList {
    /// Patterns placed before unmatched items.
    Head,
    /// Patterns placed after unmatched items.
    Tail,
}

/// A pattern that matched an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketTag {
    /// Source list.
    pub list: PatternList,
    /// Position within the list.
    pub index: usize,
}

/// Error compiling a configured pattern.
#[derive(Debug, thiserror::Error)]
#[error("invalid {list} pattern '{pattern}': {message}")]
pub struct PatternError {
    /// `head` or `tail`.
    pub list: &'static str,
    /// The offending pattern.
    pub pattern: String,
    /// Regex compiler message.
    pub message: String,
}

/// Head/tail regex classification over item keys.
///
/// Ranks: head patterns `0..h`, unmatched items `h`, tail patterns
/// `h + 1..`. The first matching pattern wins, head before tail, in the
/// order supplied. Unmatched items are sub-ranked by syntax kind.
#[derive(Debug, Clone, Default)]
pub struct PatternClassifier {
    head: Vec<Regex>,
    tail: Vec<Regex>,
}

impl PatternClassifier {
    /// Creates a classifier with no patterns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles head and tail pattern lists.
    ///
    /// # Errors
    ///
    /// Returns the first pattern that is not a valid regular expression.
    pub fn from_patterns<H, T, S>(head: H, tail: T) -> Result<Self, PatternError>
    where
        H: IntoIterator<Item = S>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            head: compile("head", head)?,
            tail: compile("tail", tail)?,
        })
    }

    /// Rank of the default bucket.
    #[must_use]
    pub fn default_rank(&self) -> usize {
        self.head.len()
    }

    /// Every pattern matching the item, head list first.
    pub fn tags<'a>(&'a self, item: &'a Item) -> impl Iterator<Item = BucketTag> + 'a {
        let matching = move |list: PatternList, patterns: &'a [Regex]| {
            patterns
                .iter()
                .enumerate()
                .filter(move |(_, re)| re.is_match(&item.key))
                .map(move |(index, _)| BucketTag { list, index })
        };
        matching(PatternList::Head, &self.head).chain(matching(PatternList::Tail, &self.tail))
    }
}

fn compile<I, S>(list: &'static str, patterns: I) -> Result<Vec<Regex>, PatternError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|p| {
            Regex::new(p.as_ref()).map_err(|e| PatternError {
                list,
                pattern: p.as_ref().to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}

impl Classify for PatternClassifier {
    fn classify(&self, item: &Item) -> Bucket {
        match self.tags(item).next() {
            Some(BucketTag {
                list: PatternList::Head,
                index,
            }) => Bucket::new(index),
            Some(BucketTag {
                list: PatternList::Tail,
                index,
            }) => Bucket::new(self.default_rank() + 1 + index),
            None => Bucket {
                rank: self.default_rank(),
                sub_rank: item.kind.syntax_rank(),
            },
        }
    }
}

/// Fixed token priority table.
///
/// Known tokens rank by their position in the table; unknown tokens share
/// one rank after every known token.
#[derive(Debug, Clone, Default)]
pub struct PriorityTable {
    ranks: HashMap<String, usize>,
}

impl PriorityTable {
    /// Builds a table. A token listed twice keeps its first position.
    #[must_use]
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ranks = HashMap::new();
        for token in tokens {
            let next = ranks.len();
            ranks.entry(token.into()).or_insert(next);
        }
        Self { ranks }
    }

    /// Rank of a known token.
    #[must_use]
    pub fn rank(&self, token: &str) -> Option<usize> {
        self.ranks.get(token).copied()
    }

    /// Number of known tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Returns true if the table knows no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl Classify for PriorityTable {
    fn classify(&self, item: &Item) -> Bucket {
        Bucket::new(self.rank(&item.key).unwrap_or(self.len()))
    }
}

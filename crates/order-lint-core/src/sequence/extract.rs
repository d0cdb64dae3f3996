//! Turning host regions into ordered item lists.
//!
//! Specifier and declaration lists come already delimited by the host.
//! Template properties and class tokens are scanned from a raw string.
//! Regions that cannot be rewritten soundly come back as
//! [`Extraction::Unsupported`].

use std::sync::OnceLock;

use regex::Regex;

use super::item::{Item, ItemKind, Span};
use crate::regions::{ClassAttribute, ImportDecl, TaggedTemplate};

/// Why a region was not turned into items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// The template contains `${...}` substitutions.
    Substitutions,
    /// The attribute value is not a plain string literal.
    NotLiteral,
    /// The CSS contains a nested rule block.
    NestedRule,
    /// A CSS segment is not a complete `name: value` declaration.
    MalformedDeclaration,
}

impl std::fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Substitutions => write!(f, "template contains substitutions"),
            Self::NotLiteral => write!(f, "value is not a string literal"),
            Self::NestedRule => write!(f, "CSS contains a nested rule block"),
            Self::MalformedDeclaration => write!(f, "CSS contains an incomplete declaration"),
        }
    }
}

/// Result of scanning a semi-structured region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Items in document order.
    Extracted(Vec<Item>),
    /// The region cannot be processed safely.
    Unsupported(UnsupportedReason),
}

impl Extraction {
    /// Returns the items, or `None` for unsupported regions.
    #[must_use]
    pub fn into_items(self) -> Option<Vec<Item>> {
        match self {
            Self::Extracted(items) => Some(items),
            Self::Unsupported(_) => None,
        }
    }
}

/// Named specifiers of one declaration, keyed by local name.
///
/// Namespace and default specifiers do not take part and stay in place.
#[must_use]
pub fn specifier_items(decl: &ImportDecl) -> Vec<Item> {
    decl.named_specifiers()
        .map(|s| {
            Item::new(s.span, s.local.clone(), ItemKind::Named)
                .with_adjacent_comment(s.has_adjacent_comment())
        })
        .collect()
}

/// Whole declarations, keyed by module reference.
#[must_use]
pub fn declaration_items(decls: &[ImportDecl]) -> Vec<Item> {
    decls
        .iter()
        .map(|d| {
            Item::new(d.span, d.source.clone(), d.syntax_kind())
                .with_adjacent_comment(d.comment_before || d.comment_after)
        })
        .collect()
}

#[allow(clippy::expect_used)] // constant pattern
fn declaration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)^[A-Za-z0-9-]+\s*:\s*\S").expect("declaration pattern is valid")
    })
}

/// Declaration bodies and block comments of raw CSS text.
struct CssScan {
    bodies: Vec<Span>,
    comments: Vec<Span>,
}

/// Splits `text` into `;`-delimited declarations.
///
/// Delimiters inside comments, strings and parentheses do not count. A
/// comment or string left open runs to the end of the text.
fn scan_declarations(text: &str) -> Result<CssScan, UnsupportedReason> {
    let bytes = text.as_bytes();
    let mut scan = CssScan {
        bodies: Vec::new(),
        comments: Vec::new(),
    };
    let mut segment_start = 0;
    let mut depth = 0usize;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'/' if bytes.get(idx + 1) == Some(&b'*') => {
                let end = text[idx + 2..]
                    .find("*/")
                    .map_or(text.len(), |close| idx + 2 + close + 2);
                scan.comments.push(Span::new(idx, end));
                idx = end;
                continue;
            }
            quote @ (b'"' | b'\'') => {
                idx = text[idx + 1..]
                    .find(char::from(quote))
                    .map_or(text.len(), |close| idx + 1 + close + 1);
                continue;
            }
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b'{' | b'}' if depth == 0 => return Err(UnsupportedReason::NestedRule),
            b';' if depth == 0 => {
                let segment = Span::new(segment_start, idx);
                scan.bodies.extend(declaration_body(text, segment, &scan.comments)?);
                segment_start = idx + 1;
            }
            _ => {}
        }
        idx += 1;
    }
    let rest = Span::new(segment_start, text.len());
    scan.bodies.extend(declaration_body(text, rest, &scan.comments)?);
    Ok(scan)
}

/// The declaration inside one segment, without leading comments or
/// surrounding whitespace. `None` when the segment holds nothing else.
fn declaration_body(
    text: &str,
    segment: Span,
    comments: &[Span],
) -> Result<Option<Span>, UnsupportedReason> {
    let mut start = segment.start;
    loop {
        start += text[start..segment.end].len() - text[start..segment.end].trim_start().len();
        match comments.iter().find(|c| c.start == start) {
            Some(comment) if start < segment.end => start = comment.end.min(segment.end),
            _ => break,
        }
    }
    let end = start + text[start..segment.end].trim_end().len();
    if start >= end {
        return Ok(None);
    }
    if declaration_pattern().is_match(&text[start..end]) {
        Ok(Some(Span::new(start, end)))
    } else {
        Err(UnsupportedReason::MalformedDeclaration)
    }
}

/// Whether a comment travels with the record at `idx` when records move.
///
/// That is any comment between this record and the previous one, or one
/// sharing a line with the record. A comment on its own line before the
/// first record or after the last one stays outside the rewritten range.
fn has_attached_comment(text: &str, bodies: &[Span], idx: usize, comments: &[Span]) -> bool {
    let span = bodies[idx];
    let previous_end = idx.checked_sub(1).map(|prev| bodies[prev].end);
    comments.iter().any(|c| {
        let in_gap = previous_end.is_some_and(|prev| c.start >= prev && c.end <= span.start);
        let before_on_line = c.end <= span.start && !text[c.end..span.start].contains('\n');
        let after_on_line = c.start >= span.end && !text[span.end..c.start].contains('\n');
        in_gap || before_on_line || after_on_line
    })
}

/// Scans `name: value` declarations out of raw CSS text.
///
/// Spans are relative to `text` and exclude the `;` and trailing whitespace.
/// Text containing nested rule blocks, or a segment that is not a complete
/// declaration, comes back [`Extraction::Unsupported`] so that no record
/// is ever moved without the whole of its value.
#[must_use]
pub fn property_records(text: &str) -> Extraction {
    let scan = match scan_declarations(text) {
        Ok(scan) => scan,
        Err(reason) => return Extraction::Unsupported(reason),
    };
    let items = scan
        .bodies
        .iter()
        .enumerate()
        .map(|(idx, span)| {
            Item::new(*span, &text[span.start..span.end], ItemKind::Property)
                .with_adjacent_comment(has_attached_comment(text, &scan.bodies, idx, &scan.comments))
        })
        .collect();
    Extraction::Extracted(items)
}

/// Property records of a template, with spans into the enclosing source.
#[must_use]
pub fn template_items(template: &TaggedTemplate) -> Extraction {
    if template.has_substitutions {
        return Extraction::Unsupported(UnsupportedReason::Substitutions);
    }
    let offset = template.content_span.start;
    match property_records(&template.content) {
        Extraction::Extracted(items) => Extraction::Extracted(
            items
                .into_iter()
                .map(|mut item| {
                    item.span = item.span.shift(offset);
                    item
                })
                .collect(),
        ),
        unsupported @ Extraction::Unsupported(_) => unsupported,
    }
}

/// Whitespace-delimited tokens of `text`, spans relative to `text`.
#[must_use]
pub fn token_records(text: &str) -> Vec<Item> {
    let mut out = Vec::new();
    let mut start = None;
    for (idx, ch) in text.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                out.push(Item::new(Span::new(s, idx), &text[s..idx], ItemKind::Token));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push(Item::new(
            Span::new(s, text.len()),
            &text[s..],
            ItemKind::Token,
        ));
    }
    out
}

/// Class tokens of an attribute, with spans into the enclosing source.
#[must_use]
pub fn attribute_items(attribute: &ClassAttribute) -> Extraction {
    if !attribute.is_literal {
        return Extraction::Unsupported(UnsupportedReason::NotLiteral);
    }
    let offset = attribute.value_span.start;
    Extraction::Extracted(
        token_records(&attribute.value)
            .into_iter()
            .map(|mut item| {
                item.span = item.span.shift(offset);
                item
            })
            .collect(),
    )
}

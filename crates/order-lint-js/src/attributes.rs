//! `class` and `className` JSX attributes.

use order_lint_core::ClassAttribute;
use tree_sitter::Node;

use crate::extractor::{inner_span, span, text, walk_preorder};

/// Attribute names holding class lists.
const CLASS_ATTRIBUTES: &[&str] = &["class", "className"];

/// Class attributes with a value, in document order.
pub(crate) fn collect(root: Node<'_>, src: &str) -> Vec<ClassAttribute> {
    let mut out = Vec::new();
    walk_preorder(root, |node| {
        if node.kind() == "jsx_attribute" {
            out.extend(class_attribute(node, src));
        }
    });
    out
}

fn class_attribute(node: Node<'_>, src: &str) -> Option<ClassAttribute> {
    let mut cursor = node.walk();
    let mut named = node.named_children(&mut cursor);
    let name = named.next()?;
    let value = named.last()?;

    let name = text(&name, src);
    if !CLASS_ATTRIBUTES.contains(&name) {
        return None;
    }

    let is_literal = value.kind() == "string";
    let value_span = if is_literal {
        inner_span(&value)
    } else {
        span(&value)
    };

    Some(ClassAttribute {
        span: span(&node),
        name: name.to_string(),
        value_span,
        value: value_span.text(src).unwrap_or_default().to_string(),
        is_literal,
    })
}

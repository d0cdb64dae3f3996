//! Top-level `import` statements.

use order_lint_core::{ImportDecl, ImportSpecifier, SpecifierKind};
use tree_sitter::Node;

use crate::extractor::{span, text};

/// Import declarations that are direct children of the program, in
/// document order. `import x = require(...)` has no module string and is
/// left out.
pub(crate) fn collect(root: Node<'_>, src: &str) -> Vec<ImportDecl> {
    let mut cursor = root.walk();
    root.children(&mut cursor)
        .filter(|n| n.kind() == "import_statement")
        .filter_map(|n| declaration(n, src))
        .collect()
}

fn declaration(node: Node<'_>, src: &str) -> Option<ImportDecl> {
    let source = node.child_by_field_name("source")?;

    let mut decl = ImportDecl::new(span(&node), unquote(text(&source, src)));
    decl.comment_before = comment_attached_before(node);
    decl.comment_after = comment_trailing(node);

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "import_clause" {
            decl.specifiers = clause_specifiers(child, src);
        }
    }
    Some(decl)
}

fn clause_specifiers(clause: Node<'_>, src: &str) -> Vec<ImportSpecifier> {
    let mut out = Vec::new();
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => out.push(ImportSpecifier::new(
                span(&child),
                SpecifierKind::Default,
                text(&child, src),
            )),
            "namespace_import" => {
                let mut inner = child.walk();
                let local = child
                    .named_children(&mut inner)
                    .filter(|n| n.kind() == "identifier")
                    .last()
                    .map_or("", |n| text(&n, src));
                out.push(ImportSpecifier::new(
                    span(&child),
                    SpecifierKind::Namespace,
                    local,
                ));
            }
            "named_imports" => {
                let mut inner = child.walk();
                out.extend(
                    child
                        .named_children(&mut inner)
                        .filter(|n| n.kind() == "import_specifier")
                        .map(|n| named_specifier(n, src)),
                );
            }
            _ => {}
        }
    }
    out
}

fn named_specifier(node: Node<'_>, src: &str) -> ImportSpecifier {
    let local = node
        .child_by_field_name("alias")
        .or_else(|| node.child_by_field_name("name"))
        .map_or("", |n| text(&n, src));

    let mut specifier = ImportSpecifier::new(span(&node), SpecifierKind::Named, unquote(local));
    specifier.comment_before = node.prev_sibling().is_some_and(|n| n.kind() == "comment");
    specifier.comment_after = node.next_sibling().is_some_and(|n| n.kind() == "comment");
    specifier
}

/// A comment directly above the statement (or before it on the same line)
/// that is not itself trailing an earlier statement.
fn comment_attached_before(node: Node<'_>) -> bool {
    let Some(prev) = node.prev_sibling() else {
        return false;
    };
    if prev.kind() != "comment" || prev.end_position().row + 1 < node.start_position().row {
        return false;
    }
    !prev
        .prev_sibling()
        .is_some_and(|owner| owner.end_position().row == prev.start_position().row)
}

/// A comment starting on the statement's last line.
fn comment_trailing(node: Node<'_>) -> bool {
    node.next_sibling().is_some_and(|next| {
        next.kind() == "comment" && next.start_position().row == node.end_position().row
    })
}

fn unquote(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&open), Some(&close))
            if raw.len() >= 2 && open == close && matches!(open, b'\'' | b'"') =>
        {
            &raw[1..raw.len() - 1]
        }
        _ => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JsExtractor;
    use order_lint_core::sequence::ItemKind;
    use order_lint_core::SourceExtractor;

    fn imports(src: &str) -> Vec<ImportDecl> {
        JsExtractor::javascript().extract(src).unwrap().imports
    }

    fn locals(decl: &ImportDecl) -> Vec<&str> {
        decl.specifiers.iter().map(|s| s.local.as_str()).collect()
    }

    #[test]
    fn extracts_source_and_kind() {
        let src = "import 'polyfill';\nimport * as ns from \"ns\";\nimport React, { useState as useS, useEffect } from 'react';\nimport { b } from './b';\n";
        let decls = imports(src);
        let sources: Vec<&str> = decls.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(sources, ["polyfill", "ns", "react", "./b"]);

        let kinds: Vec<ItemKind> = decls.iter().map(ImportDecl::syntax_kind).collect();
        assert_eq!(
            kinds,
            [
                ItemKind::SideEffect,
                ItemKind::Namespace,
                ItemKind::Default,
                ItemKind::Named
            ]
        );
        assert_eq!(locals(&decls[1]), ["ns"]);
        assert_eq!(locals(&decls[2]), ["React", "useS", "useEffect"]);
    }

    #[test]
    fn spans_cover_statement_and_specifier() {
        let src = "import { foo, bar as baz } from 'm';\n";
        let decl = &imports(src)[0];
        assert_eq!(decl.span.text(src), Some("import { foo, bar as baz } from 'm';"));
        assert_eq!(decl.specifiers[0].span.text(src), Some("foo"));
        assert_eq!(decl.specifiers[1].span.text(src), Some("bar as baz"));
    }

    #[test]
    fn nested_imports_are_ignored() {
        let src = "import a from 'a';\nasync function f() { await import('b'); }\n";
        assert_eq!(imports(src).len(), 1);
    }

    #[test]
    fn specifier_comments_are_attached() {
        let src = "import {\n  foo, // first\n  /* second */ bar,\n  baz\n} from 'm';\n";
        let decl = &imports(src)[0];
        let flags: Vec<(bool, bool)> = decl
            .specifiers
            .iter()
            .map(|s| (s.comment_before, s.comment_after))
            .collect();
        assert_eq!(flags, [(false, false), (true, false), (false, false)]);
        assert!(decl.specifiers[1].has_adjacent_comment());
    }

    #[test]
    fn declaration_comments_are_attached() {
        let src = "// header\nimport a from 'a';\nimport b from 'b'; // why\n\n// loose\n\nimport c from 'c';\n";
        let decls = imports(src);
        assert!(decls[0].comment_before);
        assert!(!decls[0].comment_after);
        assert!(!decls[1].comment_before);
        assert!(decls[1].comment_after);
        assert!(!decls[2].comment_before);
    }

    #[test]
    fn trailing_comment_does_not_attach_to_next_line() {
        let src = "import a from 'a'; // note\nimport b from 'b';\n";
        let decls = imports(src);
        assert!(decls[0].comment_after);
        assert!(!decls[1].comment_before);
    }

    #[test]
    fn typescript_type_imports() {
        let src = "import type { B, A } from './types';\nimport x = require('x');\n";
        let decls = JsExtractor::typescript().extract(src).unwrap().imports;
        assert_eq!(decls.len(), 1);
        assert_eq!(locals(&decls[0]), ["B", "A"]);
    }

    #[test]
    fn unquote_strips_matching_quotes() {
        assert_eq!(unquote("'react'"), "react");
        assert_eq!(unquote("\"react\""), "react");
        assert_eq!(unquote("react"), "react");
        assert_eq!(unquote("'"), "'");
    }
}

//! Tagged template literals.

use order_lint_core::{TaggedTemplate, TemplateTag};
use tree_sitter::Node;

use crate::extractor::{inner_span, span, text, walk_preorder};

/// Every tagged template in the file, outer templates before nested ones.
pub(crate) fn collect(root: Node<'_>, src: &str) -> Vec<TaggedTemplate> {
    let mut out = Vec::new();
    walk_preorder(root, |node| {
        if node.kind() != "call_expression" {
            return;
        }
        let Some(template) = node
            .child_by_field_name("arguments")
            .filter(|a| a.kind() == "template_string")
        else {
            return;
        };
        let tag = node
            .child_by_field_name("function")
            .map_or(TemplateTag::Other, |f| tag_shape(f, src));

        let content_span = inner_span(&template);
        let mut cursor = template.walk();
        let has_substitutions = template
            .named_children(&mut cursor)
            .any(|c| c.kind() == "template_substitution");

        out.push(TaggedTemplate {
            span: span(&node),
            tag,
            content_span,
            content: content_span.text(src).unwrap_or_default().to_string(),
            has_substitutions,
        });
    });
    out
}

/// Classifies the tag expression.
///
/// `styled.div.attrs(...)` and `styled(Button).attrs(...)` both become
/// [`TemplateTag::ChainedCall`] with `styled` as the base.
fn tag_shape(node: Node<'_>, src: &str) -> TemplateTag {
    match node.kind() {
        "identifier" => TemplateTag::Identifier(text(&node, src).to_string()),
        "member_expression" => match identifier_field(node, "object", src) {
            Some(object) => TemplateTag::Member { object },
            None => TemplateTag::Other,
        },
        "call_expression" => {
            let Some(function) = node.child_by_field_name("function") else {
                return TemplateTag::Other;
            };
            match function.kind() {
                "identifier" => TemplateTag::Call {
                    callee: text(&function, src).to_string(),
                },
                "member_expression" => chained_base(function, src)
                    .map_or(TemplateTag::Other, |base| TemplateTag::ChainedCall { base }),
                _ => TemplateTag::Other,
            }
        }
        _ => TemplateTag::Other,
    }
}

/// Base identifier of a method receiver: `styled` in `styled(X).attrs` or
/// `styled.div.attrs`.
fn chained_base(method: Node<'_>, src: &str) -> Option<String> {
    let receiver = method.child_by_field_name("object")?;
    match receiver.kind() {
        "call_expression" => identifier_field(receiver, "function", src),
        "member_expression" => identifier_field(receiver, "object", src),
        _ => None,
    }
}

fn identifier_field(node: Node<'_>, field: &str, src: &str) -> Option<String> {
    node.child_by_field_name(field)
        .filter(|n| n.kind() == "identifier")
        .map(|n| text(&n, src).to_string())
}

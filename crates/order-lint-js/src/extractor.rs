//! The Tree-sitter extractor and shared node helpers.

use order_lint_core::sequence::Span;
use order_lint_core::{ExtractError, ExtractorBox, SourceExtractor, SourceRegions};
use tracing::trace;
use tree_sitter::{Language, Node, Parser};

use crate::{attributes, imports, templates};

/// Source dialect, which picks the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// JavaScript with JSX.
    JavaScript,
    /// TypeScript without JSX.
    TypeScript,
    /// TypeScript with JSX.
    Tsx,
}

impl Dialect {
    /// Every supported dialect.
    pub const ALL: [Self; 3] = [Self::JavaScript, Self::TypeScript, Self::Tsx];

    fn language(self) -> Language {
        match self {
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Language identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        }
    }

    /// File extensions handled by this dialect.
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::JavaScript => &[".js", ".jsx", ".mjs", ".cjs"],
            Self::TypeScript => &[".ts", ".mts", ".cts"],
            Self::Tsx => &[".tsx"],
        }
    }
}

/// Extracts import declarations, tagged templates and class attributes from
/// JavaScript-family source.
pub struct JsExtractor {
    dialect: Dialect,
    language: Language,
}

impl JsExtractor {
    /// Creates an extractor for one dialect.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            language: dialect.language(),
        }
    }

    /// Creates a JavaScript/JSX extractor.
    #[must_use]
    pub fn javascript() -> Self {
        Self::new(Dialect::JavaScript)
    }

    /// Creates a TypeScript extractor.
    #[must_use]
    pub fn typescript() -> Self {
        Self::new(Dialect::TypeScript)
    }

    /// Creates a TSX extractor.
    #[must_use]
    pub fn tsx() -> Self {
        Self::new(Dialect::Tsx)
    }

    /// One boxed extractor per dialect.
    #[must_use]
    pub fn all() -> Vec<ExtractorBox> {
        Dialect::ALL
            .into_iter()
            .map(|d| Box::new(Self::new(d)) as ExtractorBox)
            .collect()
    }

    /// The dialect this extractor parses.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl Default for JsExtractor {
    fn default() -> Self {
        Self::javascript()
    }
}

impl SourceExtractor for JsExtractor {
    fn language_id(&self) -> &'static str {
        self.dialect.id()
    }

    fn extensions(&self) -> &'static [&'static str] {
        self.dialect.extensions()
    }

    fn extract(&self, source: &str) -> Result<SourceRegions, ExtractError> {
        let language = self.language_id();
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ExtractError::Language {
                language,
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or(ExtractError::NoTree { language })?;
        let root = tree.root_node();

        if root.has_error() {
            let line = first_error(root).map_or(1, |n| n.start_position().row + 1);
            return Err(ExtractError::Syntax { language, line });
        }

        let regions = SourceRegions {
            imports: imports::collect(root, source),
            templates: templates::collect(root, source),
            attributes: attributes::collect(root, source),
        };
        trace!(
            language,
            imports = regions.imports.len(),
            templates = regions.templates.len(),
            attributes = regions.attributes.len(),
            "extracted regions"
        );
        Ok(regions)
    }
}

/// Source text of a node.
pub(crate) fn text<'a>(node: &Node<'_>, src: &'a str) -> &'a str {
    src.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

/// Byte span of a node.
pub(crate) fn span(node: &Node<'_>) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}

/// Byte span of a node without its first and last byte (quotes, backticks).
pub(crate) fn inner_span(node: &Node<'_>) -> Span {
    let outer = span(node);
    if outer.len() < 2 {
        return Span::new(outer.start, outer.start);
    }
    Span::new(outer.start + 1, outer.end - 1)
}

/// Visits every node under `root` in document (pre-)order.
pub(crate) fn walk_preorder<'t>(root: Node<'t>, mut visit: impl FnMut(Node<'t>)) {
    let mut cursor = root.walk();
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut found = None;
    walk_preorder(root, |node| {
        if found.is_none() && (node.is_error() || node.is_missing()) {
            found = Some(node);
        }
    });
    found
}

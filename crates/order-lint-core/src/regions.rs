//! Language-agnostic region descriptors and the extractor trait.
//!
//! `SourceExtractor` is the extension point for host languages. An extractor
//! receives raw source text and returns [`SourceRegions`]: the import
//! declarations, tagged templates and attributes the rules care about, each
//! with byte spans into the original text. Rules never see parser node types.

use crate::sequence::{ItemKind, Span};

/// Kind of a single import specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecifierKind {
    /// `* as ns`
    Namespace,
    /// `value`
    Default,
    /// `{ name }` or `{ name as alias }`
    Named,
}

/// One specifier of an import declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    /// Span of the whole specifier (`name as alias` included).
    pub span: Span,
    /// Specifier kind.
    pub kind: SpecifierKind,
    /// Local binding name.
    pub local: String,
    /// A comment sits directly before the specifier.
    pub comment_before: bool,
    /// A comment sits directly after the specifier.
    pub comment_after: bool,
}

impl ImportSpecifier {
    /// Creates a specifier without attached comments.
    #[must_use]
    pub fn new(span: Span, kind: SpecifierKind, local: impl Into<String>) -> Self {
        Self {
            span,
            kind,
            local: local.into(),
            comment_before: false,
            comment_after: false,
        }
    }

    /// Returns true if a comment is attached on either side.
    #[must_use]
    pub fn has_adjacent_comment(&self) -> bool {
        self.comment_before || self.comment_after
    }
}

/// A top-level import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    /// Span of the full statement, terminator included.
    pub span: Span,
    /// Unquoted module reference (`'react'` becomes `react`).
    pub source: String,
    /// Specifiers in document order.
    pub specifiers: Vec<ImportSpecifier>,
    /// A comment is attached directly above or before the statement.
    pub comment_before: bool,
    /// A comment trails the statement on its last line.
    pub comment_after: bool,
}

impl ImportDecl {
    /// Creates a declaration without specifiers or comments.
    #[must_use]
    pub fn new(span: Span, source: impl Into<String>) -> Self {
        Self {
            span,
            source: source.into(),
            specifiers: Vec::new(),
            comment_before: false,
            comment_after: false,
        }
    }

    /// Adds a specifier.
    #[must_use]
    pub fn with_specifier(mut self, specifier: ImportSpecifier) -> Self {
        self.specifiers.push(specifier);
        self
    }

    /// Syntax kind of the declaration, decided by its first specifier.
    #[must_use]
    pub fn syntax_kind(&self) -> ItemKind {
        match self.specifiers.first().map(|s| s.kind) {
            None => ItemKind::SideEffect,
            Some(SpecifierKind::Namespace) => ItemKind::Namespace,
            Some(SpecifierKind::Default) => ItemKind::Default,
            Some(SpecifierKind::Named) => ItemKind::Named,
        }
    }

    /// Named specifiers only, in document order.
    pub fn named_specifiers(&self) -> impl Iterator<Item = &ImportSpecifier> {
        self.specifiers
            .iter()
            .filter(|s| s.kind == SpecifierKind::Named)
    }
}

/// Shape of the tag expression of a tagged template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateTag {
    /// `` css`...` ``
    Identifier(String),
    /// `` styled.div`...` ``, holding the object identifier.
    Member {
        /// Object identifier.
        object: String,
    },
    /// `` styled(Button)`...` ``, holding the callee identifier.
    Call {
        /// Callee identifier.
        callee: String,
    },
    /// `` styled.div.attrs(...)`...` `` or `` styled(Button).attrs(...)`...` ``,
    /// holding the identifier at the base of the receiver.
    ChainedCall {
        /// Base identifier of the method receiver.
        base: String,
    },
    /// Any other tag expression.
    Other,
}

/// A tagged template literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedTemplate {
    /// Span of the full tagged expression.
    pub span: Span,
    /// Tag shape.
    pub tag: TemplateTag,
    /// Span of the template text between the backticks.
    pub content_span: Span,
    /// Raw template text between the backticks.
    pub content: String,
    /// Whether the template contains `${...}` substitutions.
    pub has_substitutions: bool,
}

/// A markup attribute such as `className="flex mt-2"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassAttribute {
    /// Span of the whole attribute.
    pub span: Span,
    /// Attribute name.
    pub name: String,
    /// Span of the value text, quotes excluded.
    pub value_span: Span,
    /// Value text, quotes excluded.
    pub value: String,
    /// Whether the value is a plain string literal.
    pub is_literal: bool,
}

/// Everything the rules need from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRegions {
    /// Top-level import declarations in document order.
    pub imports: Vec<ImportDecl>,
    /// Tagged templates, outer templates before nested ones.
    pub templates: Vec<TaggedTemplate>,
    /// Attributes in document order.
    pub attributes: Vec<ClassAttribute>,
}

impl SourceRegions {
    /// Creates an empty set of regions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.templates.is_empty() && self.attributes.is_empty()
    }
}

/// Errors raised while extracting regions.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The grammar could not be loaded.
    #[error("failed to load {language} grammar: {message}")]
    Language {
        /// Language identifier.
        language: &'static str,
        /// Loader message.
        message: String,
    },

    /// The parser returned no tree.
    #[error("{language} parser produced no syntax tree")]
    NoTree {
        /// Language identifier.
        language: &'static str,
    },

    /// The source does not parse cleanly.
    #[error("{language} syntax error at line {line}")]
    Syntax {
        /// Language identifier.
        language: &'static str,
        /// Line of the first error node (1-indexed).
        line: usize,
    },
}

/// Trait for host-language region extraction.
///
/// Implement this to teach order-lint a new language.
pub trait SourceExtractor: Send + Sync {
    /// Language identifier (e.g., `"javascript"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this extractor handles (e.g., `&[".js", ".jsx"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Extracts regions from source text.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser cannot be set up or yields no tree.
    fn extract(&self, source: &str) -> Result<SourceRegions, ExtractError>;
}

/// Type alias for boxed extractors.
pub type ExtractorBox = Box<dyn SourceExtractor>;

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: SpecifierKind) -> ImportSpecifier {
        ImportSpecifier::new(Span::new(0, 1), kind, "x")
    }

    #[test]
    fn syntax_kind_follows_first_specifier() {
        let decl = ImportDecl::new(Span::new(0, 10), "a");
        assert_eq!(decl.syntax_kind(), ItemKind::SideEffect);

        let decl = ImportDecl::new(Span::new(0, 10), "a")
            .with_specifier(spec(SpecifierKind::Default))
            .with_specifier(spec(SpecifierKind::Named));
        assert_eq!(decl.syntax_kind(), ItemKind::Default);

        let decl =
            ImportDecl::new(Span::new(0, 10), "a").with_specifier(spec(SpecifierKind::Namespace));
        assert_eq!(decl.syntax_kind(), ItemKind::Namespace);
    }

    #[test]
    fn named_specifiers_skip_default() {
        let decl = ImportDecl::new(Span::new(0, 10), "a")
            .with_specifier(spec(SpecifierKind::Default))
            .with_specifier(spec(SpecifierKind::Named))
            .with_specifier(spec(SpecifierKind::Named));
        assert_eq!(decl.named_specifiers().count(), 2);
    }
}

//! Rule to keep the import declarations of a module sorted.
//!
//! # Rationale
//!
//! A predictable import block groups framework imports at the top and
//! project-internal ones at the bottom, and sorts the rest by module path.
//!
//! Declarations fall into buckets:
//!
//! 1. one bucket per `head` pattern, in configured order
//! 2. everything unmatched, sub-sorted by syntax (`import 'x'`,
//!    `import * as x`, `import x`, `import { x }`)
//! 3. one bucket per `tail` pattern, in configured order
//!
//! The first matching pattern wins. Within a bucket, module paths are
//! compared with a locale-style collation.
//!
//! # Configuration
//!
//! - `head`: Regex patterns for modules placed first (default: none)
//! - `tail`: Regex patterns for modules placed last (default: none)
//!
//! # Suppression
//!
//! - `// order-lint: allow(multiline-import-sort)` on or above the first import

use order_lint_core::sequence::{
    check_sequence, declaration_items, KeyOrder, PatternClassifier, PatternError, Policy,
    SeparatorPolicy, SequenceCheck,
};
use order_lint_core::{FileContext, Rule, RuleConfig, Severity, SourceRegions, Violation};

use crate::report;

/// Rule code for multiline-import-sort.
pub const CODE: &str = "OL002";

/// Rule name for multiline-import-sort.
pub const NAME: &str = "multiline-import-sort";

/// Requires the import declarations of a file in bucketed, sorted order.
#[derive(Debug, Clone)]
pub struct MultilineImportSort {
    head: Vec<String>,
    tail: Vec<String>,
    classifier: PatternClassifier,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MultilineImportSort {
    fn default() -> Self {
        Self::new()
    }
}

impl MultilineImportSort {
    /// Creates a new rule without head or tail patterns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            head: Vec::new(),
            tail: Vec::new(),
            classifier: PatternClassifier::new(),
            severity: Severity::Error,
        }
    }

    /// Builds the rule from its `[rules.multiline-import-sort]` table.
    ///
    /// # Errors
    ///
    /// Returns an error if a `head` or `tail` entry is not a valid regex.
    pub fn from_config(config: &RuleConfig) -> Result<Self, PatternError> {
        let rule = Self::new().patterns(config.option_strings("head"), config.option_strings("tail"))?;
        Ok(match config.severity {
            Some(severity) => rule.severity(severity),
            None => rule,
        })
    }

    /// Sets the head and tail patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is not a valid regex.
    pub fn patterns<S: Into<String>>(
        mut self,
        head: impl IntoIterator<Item = S>,
        tail: impl IntoIterator<Item = S>,
    ) -> Result<Self, PatternError> {
        self.head = head.into_iter().map(Into::into).collect();
        self.tail = tail.into_iter().map(Into::into).collect();
        self.classifier = PatternClassifier::from_patterns(&self.head, &self.tail)?;
        Ok(self)
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Configured head patterns.
    #[must_use]
    pub fn head(&self) -> &[String] {
        &self.head
    }

    /// Configured tail patterns.
    #[must_use]
    pub fn tail(&self) -> &[String] {
        &self.tail
    }
}

impl Rule for MultilineImportSort {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the import declarations of a module in grouped, sorted order"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, regions: &SourceRegions) -> Vec<Violation> {
        let Some(first) = regions.imports.first() else {
            return Vec::new();
        };
        let items = declaration_items(&regions.imports);
        let policy = Policy::new(&self.classifier, KeyOrder::Collated);

        match check_sequence(ctx.content, &items, &policy, SeparatorPolicy::Positional) {
            SequenceCheck::Compliant => Vec::new(),
            SequenceCheck::Violation { patch, .. } => vec![report::violation(
                self,
                ctx,
                first.span,
                "Import declarations of the module sort incorrectly",
                "Reorder the import declarations",
                patch,
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::{fix, run};
    use order_lint_core::Config;

    fn rule(head: &[&str], tail: &[&str]) -> MultilineImportSort {
        MultilineImportSort::new()
            .patterns(head.iter().copied(), tail.iter().copied())
            .unwrap()
    }

    #[test]
    fn single_import_passes() {
        assert!(run(&MultilineImportSort::new(), "import React from 'react';\n").is_empty());
    }

    #[test]
    fn sorts_by_module_path_without_patterns() {
        let src = "import React from 'react';\nimport a from 'a';\n";
        let violations = run(&MultilineImportSort::new(), src);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Import declarations of the module sort incorrectly"
        );
        assert_eq!(violations[0].location.line, 1);
        assert_eq!(
            fix(&MultilineImportSort::new(), src),
            "import a from 'a';\nimport React from 'react';\n"
        );
    }

    #[test]
    fn head_patterns_come_first() {
        let rule = rule(&["^react"], &[]);
        assert!(run(&rule, "import React from 'react';\nimport a from 'a';\n").is_empty());
        assert_eq!(
            fix(&rule, "import a from 'a';\nimport React from 'react';\n"),
            "import React from 'react';\nimport a from 'a';\n"
        );
    }

    #[test]
    fn tail_patterns_come_last() {
        let rule = rule(&["^react"], &["^jupiter"]);
        let src = "import a from 'a';\nimport { useTranslation } from 'jupiter-runtime/i18n';\nimport React from 'react';\n";
        assert_eq!(
            fix(&rule, src),
            "import React from 'react';\nimport a from 'a';\nimport { useTranslation } from 'jupiter-runtime/i18n';\n"
        );
    }

    #[test]
    fn default_bucket_sorts_by_syntax_first() {
        let rule = rule(&["^react"], &["^jupiter"]);
        let src = "import { hh } from '@byte/seller';\nimport a from 'a';\nimport { useTranslation } from 'jupiter-runtime/i18n';\nimport React from 'react';\n";
        assert_eq!(
            fix(&rule, src),
            "import React from 'react';\nimport a from 'a';\nimport { hh } from '@byte/seller';\nimport { useTranslation } from 'jupiter-runtime/i18n';\n"
        );
    }

    #[test]
    fn named_imports_sort_by_path() {
        let rule = rule(&["^react"], &[]);
        let src = "import { foo } from 'b';\nimport { bar } from 'a';\nimport React from 'react';\n";
        assert_eq!(
            fix(&rule, src),
            "import React from 'react';\nimport { bar } from 'a';\nimport { foo } from 'b';\n"
        );
    }

    #[test]
    fn side_effect_imports_lead_the_default_bucket() {
        let src = "import a from 'a';\nimport './styles.css';\n";
        assert_eq!(
            fix(&MultilineImportSort::new(), src),
            "import './styles.css';\nimport a from 'a';\n"
        );
    }

    #[test]
    fn attached_comment_prevents_fix() {
        let src = "import b from 'b';\n// why a\nimport a from 'a';\n";
        let violations = run(&MultilineImportSort::new(), src);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].patch().is_none());
    }

    #[test]
    fn config_patterns_are_compiled() {
        let config = Config::parse(
            "[rules.multiline-import-sort]\nhead = [\"^react\"]\ntail = \"^@app\"\n",
        )
        .unwrap();
        let rule = MultilineImportSort::from_config(config.rule(NAME).unwrap()).unwrap();
        assert_eq!(rule.head(), ["^react"]);
        assert_eq!(rule.tail(), ["^@app"]);

        let config = Config::parse("[rules.multiline-import-sort]\nhead = [\"(\"]\n").unwrap();
        let err = MultilineImportSort::from_config(config.rule(NAME).unwrap()).unwrap_err();
        assert_eq!(err.pattern, "(");
    }
}

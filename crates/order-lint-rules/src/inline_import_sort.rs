//! Rule to keep the named members of an import declaration sorted.
//!
//! # Rationale
//!
//! `import { useState, useEffect, useMemo } from 'react'` grows by appending,
//! so members end up in arrival order and merge conflicts pile up on the
//! last line. A fixed order makes diffs minimal and members easy to scan.
//!
//! Members are compared by their local name (the alias when one is given).
//! Default and namespace members stay where they are.
//!
//! # Configuration
//!
//! - `ignore_case`: Compare names case-insensitively (default: false)
//!
//! # Suppression
//!
//! - `// order-lint: allow(inline-import-sort)` on or above the import

use order_lint_core::sequence::{
    check_sequence, specifier_items, KeyOrder, Policy, SeparatorPolicy, SequenceCheck,
    Unclassified,
};
use order_lint_core::{FileContext, Rule, RuleConfig, Severity, SourceRegions, Violation};

use crate::report;

/// Rule code for inline-import-sort.
pub const CODE: &str = "OL001";

/// Rule name for inline-import-sort.
pub const NAME: &str = "inline-import-sort";

/// Requires named import members in alphabetical order.
#[derive(Debug, Clone)]
pub struct InlineImportSort {
    /// Compare local names case-insensitively.
    pub ignore_case: bool,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for InlineImportSort {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineImportSort {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ignore_case: false,
            severity: Severity::Error,
        }
    }

    /// Builds the rule from its `[rules.inline-import-sort]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let rule = Self::new().ignore_case(config.option_bool("ignore_case", false));
        match config.severity {
            Some(severity) => rule.severity(severity),
            None => rule,
        }
    }

    /// Sets case-insensitive comparison.
    #[must_use]
    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn key_order(&self) -> KeyOrder {
        if self.ignore_case {
            KeyOrder::CaseInsensitive
        } else {
            KeyOrder::Ordinal
        }
    }
}

impl Rule for InlineImportSort {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the named members of an import to be sorted alphabetically"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, regions: &SourceRegions) -> Vec<Violation> {
        let policy = Policy::new(&Unclassified, self.key_order());

        regions
            .imports
            .iter()
            .filter_map(|decl| {
                let items = specifier_items(decl);
                let SequenceCheck::Violation {
                    first_misplaced,
                    patch,
                } = check_sequence(ctx.content, &items, &policy, SeparatorPolicy::Positional)
                else {
                    return None;
                };
                let item = items.get(first_misplaced)?;
                Some(report::violation(
                    self,
                    ctx,
                    item.span,
                    format!(
                        "Member '{}' of the import declaration should be sorted alphabetically.",
                        item.key
                    ),
                    "Sort the import members alphabetically",
                    patch,
                ))
            })
            .collect()
    }
}

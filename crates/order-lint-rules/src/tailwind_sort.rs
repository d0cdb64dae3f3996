//! Rule to keep tailwind class names in a fixed order.
//!
//! # Rationale
//!
//! The same set of utilities written in different orders reads as different
//! styling. A single order (layout, box, typography, decoration, motion)
//! makes class lists comparable at a glance and exposes duplicates.
//!
//! Known classes follow the built-in priority table. Unknown classes
//! (project utilities, variants such as `md:flex`) keep their relative order
//! after the known ones. Repeated classes are dropped. Whitespace alone is
//! never reported; a fix joins the classes with single spaces.
//!
//! Only string-literal `class` and `className` attributes are checked.
//!
//! # Configuration
//!
//! None.
//!
//! # Suppression
//!
//! - `// order-lint: allow(tailwind-sort)` on or above the element

use order_lint_core::sequence::{
    attribute_items, check_sequence, KeyOrder, Policy, PriorityTable, SeparatorPolicy,
    SequenceCheck,
};
use order_lint_core::{
    ClassAttribute, FileContext, Rule, RuleConfig, Severity, SourceRegions, Violation,
};

use crate::{report, tailwind_order};

/// Rule code for tailwind-sort.
pub const CODE: &str = "OL004";

/// Rule name for tailwind-sort.
pub const NAME: &str = "tailwind-sort";

/// Requires tailwind class names in priority-table order.
#[derive(Debug, Clone)]
pub struct TailwindSort {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for TailwindSort {
    fn default() -> Self {
        Self::new()
    }
}

impl TailwindSort {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Builds the rule from its `[rules.tailwind-sort]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let rule = Self::new();
        match config.severity {
            Some(severity) => rule.severity(severity),
            None => rule,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn check_attribute(
        &self,
        ctx: &FileContext,
        table: &PriorityTable,
        attribute: &ClassAttribute,
    ) -> Option<Violation> {
        let items = attribute_items(attribute).into_items()?;
        let policy = Policy::new(table, KeyOrder::Preserve).dedup(true);

        match check_sequence(ctx.content, &items, &policy, SeparatorPolicy::Canonical(" ")) {
            SequenceCheck::Compliant => None,
            SequenceCheck::Violation { patch, .. } => Some(report::violation(
                self,
                ctx,
                attribute.span,
                "Invalid order of tailwind class names.",
                "Reorder the class names",
                patch,
            )),
        }
    }
}

impl Rule for TailwindSort {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires tailwind class names in a fixed order without duplicates"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, regions: &SourceRegions) -> Vec<Violation> {
        let table = tailwind_order::default_table();
        regions
            .attributes
            .iter()
            .filter_map(|a| self.check_attribute(ctx, table, a))
            .collect()
    }
}

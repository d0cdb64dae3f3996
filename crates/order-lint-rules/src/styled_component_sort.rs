//! Rule to keep the CSS properties of styled-components sorted.
//!
//! # Rationale
//!
//! Alphabetical declarations make duplicates obvious and let reviewers find
//! a property without reading the whole block.
//!
//! Applies to templates tagged `css`, `styled.x`, `styled(X)` and the
//! `.attrs(...)` forms of both. Each `name: value` record is compared as a
//! whole with a locale-style collation. Templates containing `${...}`
//! substitutions, nested rule blocks or anything that is not a complete
//! declaration are skipped; templates nested inside a substitution are
//! checked on their own. A comment between properties, or on the same line
//! as one, leaves the violation for a manual fix.
//!
//! # Configuration
//!
//! None.
//!
//! # Suppression
//!
//! - `// order-lint: allow(styled-component-sort)` on or above the template

use order_lint_core::sequence::{
    check_sequence, template_items, Extraction, KeyOrder, Policy, SeparatorPolicy,
    SequenceCheck, Unclassified,
};
use order_lint_core::{
    FileContext, Rule, RuleConfig, Severity, SourceRegions, TaggedTemplate, TemplateTag,
    Violation,
};
use tracing::trace;

use crate::report;

/// Rule code for styled-component-sort.
pub const CODE: &str = "OL003";

/// Rule name for styled-component-sort.
pub const NAME: &str = "styled-component-sort";

const STYLED: &str = "styled";
const CSS: &str = "css";

/// Requires the properties of styled-component templates in sorted order.
#[derive(Debug, Clone)]
pub struct StyledComponentSort {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for StyledComponentSort {
    fn default() -> Self {
        Self::new()
    }
}

impl StyledComponentSort {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Builds the rule from its `[rules.styled-component-sort]` table.
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
}

/// Returns true for the tag shapes styled-components accepts.
fn is_styled(tag: &TemplateTag) -> bool {
    match tag {
        TemplateTag::Identifier(name) => name == CSS,
        TemplateTag::Member { object } => object == STYLED,
        TemplateTag::Call { callee } => callee == STYLED,
        TemplateTag::ChainedCall { base } => base == STYLED,
        TemplateTag::Other => false,
    }
}

impl StyledComponentSort {
    fn check_template(&self, ctx: &FileContext, template: &TaggedTemplate) -> Option<Violation> {
        let items = match template_items(template) {
            Extraction::Extracted(items) => items,
            Extraction::Unsupported(reason) => {
                trace!(offset = template.span.start, %reason, "skipping template");
                return None;
            }
        };
        let policy = Policy::new(&Unclassified, KeyOrder::Collated);

        match check_sequence(ctx.content, &items, &policy, SeparatorPolicy::Positional) {
            SequenceCheck::Compliant => None,
            SequenceCheck::Violation { patch, .. } => Some(report::violation(
                self,
                ctx,
                template.span,
                "Invalid order of styled-component CSS properties.",
                "Sort the CSS properties alphabetically",
                patch,
            )),
        }
    }
}

impl Rule for StyledComponentSort {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires styled-component CSS properties in alphabetical order"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, regions: &SourceRegions) -> Vec<Violation> {
        regions
            .templates
            .iter()
            .filter(|t| is_styled(&t.tag))
            .filter_map(|t| self.check_template(ctx, t))
            .collect()
    }
}

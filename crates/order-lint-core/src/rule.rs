//! The [`Rule`] trait implemented by every ordering rule.

use crate::context::FileContext;
use crate::regions::SourceRegions;
use crate::types::{Severity, Violation};

/// A per-file ordering rule.
///
/// Rules never see a syntax tree. A host extractor turns the file into
/// [`SourceRegions`] first; the rule picks the regions it cares about,
/// runs them through the [`sequence`](crate::sequence) engine and turns
/// each violation into a [`Violation`].
///
/// # Example
///
/// ```ignore
/// use order_lint_core::{FileContext, Rule, SourceRegions, Violation};
///
/// pub struct SortedTokens;
///
/// impl Rule for SortedTokens {
///     fn name(&self) -> &'static str { "sorted-tokens" }
///     fn code(&self) -> &'static str { "OL900" }
///
///     fn check(&self, ctx: &FileContext, regions: &SourceRegions) -> Vec<Violation> {
///         regions.attributes.iter().flat_map(|a| check_one(ctx, a)).collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Kebab-case name used in config tables and allow directives.
    fn name(&self) -> &'static str;

    /// Short code such as `OL001`, also accepted by allow directives.
    fn code(&self) -> &'static str;

    /// One-line summary shown by `list-rules`.
    fn description(&self) -> &'static str {
        ""
    }

    /// Severity used unless the rule's config table overrides it.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks the regions of one file. At most one violation per region.
    fn check(&self, ctx: &FileContext, regions: &SourceRegions) -> Vec<Violation>;
}

/// A rule as stored by the analyzer.
pub type RuleBox = Box<dyn Rule>;

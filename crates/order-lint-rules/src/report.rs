//! Turning engine outcomes into violations.

use order_lint_core::sequence::{PatchOutcome, Span, UnsafeReason};
use order_lint_core::{FileContext, Rule, Suggestion, Violation};

/// Builds the violation for an out-of-order region.
///
/// `fix` describes the repair; the suggestion carries the patch when one
/// could be built and says why not otherwise.
pub(crate) fn violation(
    rule: &dyn Rule,
    ctx: &FileContext<'_>,
    span: Span,
    message: impl Into<String>,
    fix: &str,
    patch: PatchOutcome,
) -> Violation {
    let suggestion = match patch {
        PatchOutcome::Patch(patch) => Suggestion::with_fix(fix, patch),
        PatchOutcome::Unsafe(UnsafeReason::AttachedComment) => {
            Suggestion::new(format!("{fix} by hand: comments are attached to the entries"))
        }
        PatchOutcome::Unsafe(UnsafeReason::InvalidSpan) => Suggestion::new(fix),
    };

    Violation::new(
        rule.code(),
        rule.name(),
        rule.default_severity(),
        ctx.location(span),
        message,
    )
    .with_suggestion(suggestion)
}

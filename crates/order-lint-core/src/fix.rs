//! Applying patches to source text.

use crate::sequence::Patch;

/// Result of applying a batch of patches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The patched text.
    pub text: String,
    /// Number of patches applied.
    pub applied: usize,
    /// Number of patches skipped for overlapping an earlier one or for an
    /// invalid range.
    pub skipped: usize,
}

impl FixOutcome {
    /// Returns true if the text changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Applies non-overlapping patches to `source`.
///
/// Patches are taken in start order; one that begins before the end of the
/// previously accepted patch is skipped. Accepted patches are applied back to
/// front so earlier offsets stay valid.
#[must_use]
pub fn apply_fixes<'p, I>(source: &str, patches: I) -> FixOutcome
where
    I: IntoIterator<Item = &'p Patch>,
{
    let mut patches: Vec<&Patch> = patches.into_iter().collect();
    patches.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

    let mut accepted = Vec::with_capacity(patches.len());
    let mut skipped = 0;
    let mut last_end = 0_usize;
    for patch in patches {
        if patch.start < last_end
            || patch.start > patch.end
            || source.get(patch.start..patch.end).is_none()
        {
            skipped += 1;
            continue;
        }
        last_end = patch.end;
        accepted.push(patch);
    }

    let mut text = source.to_string();
    for patch in accepted.iter().rev() {
        text.replace_range(patch.start..patch.end, &patch.text);
    }

    FixOutcome {
        text,
        applied: accepted.len(),
        skipped,
    }
}

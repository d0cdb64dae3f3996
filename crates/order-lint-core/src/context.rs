//! Context types for rule execution.

use std::path::{Path, PathBuf};

use crate::sequence::Span;
use crate::types::Location;

/// Context provided to per-file rules.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    line_starts: Vec<usize>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            path,
            content,
            relative_path,
            line_starts,
        }
    }

    /// Converts a byte offset to a 1-indexed `(line, column)` pair.
    ///
    /// Columns count characters, not bytes. Offsets past the end clamp to
    /// the end of the file.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line_idx).copied().unwrap_or(0);
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |s| s.chars().count());
        (line_idx + 1, column + 1)
    }

    /// Builds the reported location for a span of this file.
    #[must_use]
    pub fn location(&self, span: Span) -> Location {
        let (line, column) = self.line_col(span.start);
        Location::new(self.relative_path.clone(), line, column).with_span(span.start, span.len())
    }

    /// Calculates byte offset for a given line and column.
    ///
    /// Both are 1-indexed. Returns the file length if out of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }
        self.line_starts
            .get(line - 1)
            .map_or(self.content.len(), |start| {
                (start + column.saturating_sub(1)).min(self.content.len())
            })
    }
}

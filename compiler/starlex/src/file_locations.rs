//! Byte offset -> (line, column) mapping for diagnostics.
//!
//! `FileLocations` scans the buffer once for newline positions (via
//! `memchr::memchr_iter`, matching the SIMD-accelerated scanning idiom used
//! elsewhere in this crate pair) and answers `locate()` queries with a
//! binary search. Built once per lexer and shared by every error/comment it
//! records.

use std::sync::Arc;

/// A resolved source location: file, 1-based line, 1-based column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub file: Arc<str>,
    pub line: u32,
    pub column: u32,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Maps byte offsets in a source buffer to `(line, column)` pairs.
///
/// Total function over `[0, len(buffer)]` inclusive: an offset exactly at
/// end-of-buffer is valid (it's the span the EOF token occupies).
#[derive(Clone, Debug)]
pub struct FileLocations {
    file: Arc<str>,
    /// Byte offset of the start of each line. `line_starts[0] == 0`.
    line_starts: Vec<u32>,
}

impl FileLocations {
    /// Scan `buffer` once for `\n` positions and build the offset table.
    #[must_use]
    pub fn new(buffer: &[u8], file: impl Into<Arc<str>>) -> Self {
        let mut line_starts = vec![0u32];
        for pos in memchr::memchr_iter(b'\n', buffer) {
            // Guard against buffers that exceed u32::MAX: later lines simply
            // stop being tracked precisely, matching SourceBuffer's own
            // saturating behavior for oversized files.
            if let Ok(next_line_start) = u32::try_from(pos + 1) {
                line_starts.push(next_line_start);
            } else {
                break;
            }
        }
        Self {
            file: file.into(),
            line_starts,
        }
    }

    /// Resolve a byte offset to a `(line, column)` location.
    ///
    /// `line` and `column` are both 1-based, matching conventional editor
    /// and compiler diagnostic display.
    #[must_use]
    pub fn locate(&self, offset: u32) -> Location {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line_start = self.line_starts[line_idx];
        Location {
            file: Arc::clone(&self.file),
            line: (line_idx as u32) + 1,
            column: offset - line_start + 1,
        }
    }

    /// The file name this table was built for.
    #[must_use]
    pub fn file(&self) -> &Arc<str> {
        &self.file
    }
}

#[cfg(test)]
mod tests;

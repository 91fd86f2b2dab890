//! Source file storage and line-offset bookkeeping.
//!
//! A [`SourceFile`] owns the decoded text of one file plus the byte offset
//! of every line start, so that a byte offset can be converted to a
//! (line, column) pair by binary search instead of a linear rescan.

use std::sync::Arc;

/// One loaded file: its name, its content, and precomputed line starts.
///
/// # Examples
///
/// ```
/// use smlfront_util::source::SourceFile;
///
/// let file = SourceFile::new("a.sml", "val x = 1\nval y = 2\n");
/// assert_eq!(file.line_count(), 3);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file, computing line starts up front.
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::compute_line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn compute_line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts.into()
    }

    /// The file name as it was registered with the [`SourceMap`](super::SourceMap).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full decoded text of the file.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of bytes in the file.
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Total number of lines (always at least 1, even for an empty file).
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where a 0-indexed line starts.
    #[inline]
    pub fn line_start(&self, line0: usize) -> Option<usize> {
        self.line_starts.get(line0).copied()
    }

    /// Convert a byte offset into 1-based (line, column) coordinates.
    ///
    /// Column is measured in bytes from the start of the line, matching the
    /// byte-offset contract the rest of this crate uses.
    pub fn offset_to_line_col(&self, offset: usize) -> (u32, u32) {
        match self.line_starts.binary_search(&offset) {
            Ok(line0) => (line0 as u32 + 1, 1),
            Err(insert_point) => {
                let line0 = insert_point - 1;
                let line_start = self.line_starts.get(line0).copied().unwrap_or(0);
                ((line0 + 1) as u32, (offset - line_start + 1) as u32)
            }
        }
    }

    /// The text of a 1-indexed line, with any trailing newline trimmed.
    pub fn line_at(&self, line: u32) -> Option<&str> {
        let line0 = line.checked_sub(1)? as usize;
        let start = self.line_start(line0)?;
        let end = self.line_start(line0 + 1).unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

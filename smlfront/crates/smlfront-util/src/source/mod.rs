//! Source slices — a byte-indexed view of an immutable loaded file.
//!
//! A [`Source`] is a *view*: a reference-counted handle to a [`SourceFile`]
//! plus a `start`/`len` window into it. Slicing, dropping a prefix, or
//! taking a whole line all produce new `Source` values that share the same
//! underlying buffer — no copying, no reparsing of line starts.
//!
//! # Examples
//!
//! ```
//! use smlfront_util::source::{Source, SourceMap};
//!
//! let mut map = SourceMap::new();
//! let file_id = map.add_file("a.sml", "val x = 1");
//! let whole = Source::whole_file(&map, file_id).unwrap();
//! assert_eq!(whole.as_str(), "val x = 1");
//!
//! let val_kw = whole.slice(0, 3);
//! assert_eq!(val_kw.as_str(), "val");
//! ```

mod source_file;
mod source_map;

pub use source_file::SourceFile;
pub use source_map::{FileId, SourceMap};

use std::sync::Arc;

/// 1-based line and column, matching the rest of this crate's convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// A byte-range view into a loaded [`SourceFile`].
///
/// All offsets exposed on `Source` (`nth`, `slice`, `drop`) are relative to
/// the view's own start, not to the underlying file — `absolute_start_offset`
/// and `absolute_end_offset` give the file-relative positions when needed
/// (for error messages, for example).
#[derive(Clone)]
pub struct Source {
    file: Arc<SourceFile>,
    file_id: FileId,
    start: usize,
    len: usize,
}

impl Source {
    /// A view covering an entire registered file.
    pub fn whole_file(map: &SourceMap, file_id: FileId) -> Option<Source> {
        let file = map.get(file_id)?;
        let len = file.len();
        Some(Source {
            file,
            file_id,
            start: 0,
            len,
        })
    }

    /// Number of bytes in this view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The byte at `index`, relative to this view's start.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn nth(&self, index: usize) -> u8 {
        assert!(index < self.len, "Source::nth index out of range");
        self.file.content().as_bytes()[self.start + index]
    }

    /// A sub-view `[start, start + length)`, relative to this view.
    ///
    /// # Panics
    ///
    /// Panics if the requested range runs past the end of this view.
    pub fn slice(&self, start: usize, length: usize) -> Source {
        assert!(
            start + length <= self.len,
            "Source::slice range out of bounds"
        );
        Source {
            file: Arc::clone(&self.file),
            file_id: self.file_id,
            start: self.start + start,
            len: length,
        }
    }

    /// The view from `offset` (relative to this view) to its current end.
    pub fn drop(&self, offset: usize) -> Source {
        let offset = offset.min(self.len);
        Source {
            file: Arc::clone(&self.file),
            file_id: self.file_id,
            start: self.start + offset,
            len: self.len - offset,
        }
    }

    /// The view covering the whole file this slice came from.
    pub fn whole_file_of(&self) -> Source {
        Source {
            file: Arc::clone(&self.file),
            file_id: self.file_id,
            start: 0,
            len: self.file.len(),
        }
    }

    /// Byte offset of this view's start, relative to the whole file.
    #[inline]
    pub fn absolute_start_offset(&self) -> usize {
        self.start
    }

    /// Byte offset of this view's end (exclusive), relative to the whole file.
    #[inline]
    pub fn absolute_end_offset(&self) -> usize {
        self.start + self.len
    }

    /// (line, column) of this view's first byte.
    pub fn absolute_start(&self) -> LineCol {
        let (line, col) = self.file.offset_to_line_col(self.start);
        LineCol { line, col }
    }

    /// (line, column) of this view's last byte (or its start, if empty).
    pub fn absolute_end(&self) -> LineCol {
        let end = if self.len == 0 {
            self.start
        } else {
            self.start + self.len - 1
        };
        let (line, col) = self.file.offset_to_line_col(end);
        LineCol { line, col }
    }

    /// The whole text of a 1-indexed line, as a view into the same file.
    pub fn whole_line(&self, line_number: u32) -> Option<Source> {
        let line0 = line_number.checked_sub(1)? as usize;
        let start = self.file.line_start(line0)?;
        let end = self
            .file
            .line_start(line0 + 1)
            .unwrap_or(self.file.len())
            .min(self.file.len());
        let end = end.max(start);
        let trimmed_end = self.file.content()[start..end]
            .trim_end_matches(['\n', '\r'])
            .len()
            + start;
        Some(Source {
            file: Arc::clone(&self.file),
            file_id: self.file_id,
            start,
            len: trimmed_end - start,
        })
    }

    /// The file this view belongs to.
    pub fn file_name(&self) -> &str {
        self.file.name()
    }

    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    /// The text this view covers.
    pub fn as_str(&self) -> &str {
        &self.file.content()[self.start..self.start + self.len]
    }
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source")
            .field("file", &self.file.name())
            .field("start", &self.start)
            .field("len", &self.len)
            .field("text", &self.as_str())
            .finish()
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for Source {
    /// Two views are equal when they cover the same bytes of the same file,
    /// not when their text happens to match — two occurrences of `val` at
    /// different offsets are different sources.
    fn eq(&self, other: &Self) -> bool {
        self.file_id == other.file_id && self.start == other.start && self.len == other.len
    }
}
impl Eq for Source {}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(text: &str) -> (SourceMap, Source) {
        let mut map = SourceMap::new();
        let id = map.add_file("t.sml", text.to_string());
        let src = Source::whole_file(&map, id).unwrap();
        (map, src)
    }

    #[test]
    fn whole_file_roundtrips_text() {
        let (_map, src) = source("val x = 1");
        assert_eq!(src.as_str(), "val x = 1");
        assert_eq!(src.len(), 9);
    }

    #[test]
    fn slice_and_drop_compose() {
        let (_map, src) = source("val x = 1");
        assert_eq!(src.slice(0, 3).as_str(), "val");
        assert_eq!(src.drop(4).as_str(), "x = 1");
        assert_eq!(src.drop(4).slice(0, 1).as_str(), "x");
    }

    #[test]
    fn absolute_offsets_are_file_relative() {
        let (_map, src) = source("val x = 1");
        let x = src.slice(4, 1);
        assert_eq!(x.absolute_start_offset(), 4);
        assert_eq!(x.absolute_end_offset(), 5);
    }

    #[test]
    fn line_col_on_multiline_source() {
        let (_map, src) = source("val x =\n  1\n");
        let one = src.drop(10).slice(0, 1);
        assert_eq!(one.as_str(), "1");
        let start = one.absolute_start();
        assert_eq!(start.line, 2);
        assert_eq!(start.col, 3);
    }

    #[test]
    fn whole_line_trims_newline() {
        let (_map, src) = source("val x = 1\nval y = 2\n");
        let line = src.whole_line(2).unwrap();
        assert_eq!(line.as_str(), "val y = 2");
    }

    #[test]
    fn nth_indexes_relative_to_view() {
        let (_map, src) = source("abc");
        let view = src.drop(1);
        assert_eq!(view.nth(0), b'b');
        assert_eq!(view.nth(1), b'c');
    }

    #[test]
    fn equality_is_positional_not_textual() {
        let (_map, src) = source("val val");
        let first = src.slice(0, 3);
        let second = src.slice(4, 3);
        assert_eq!(first.as_str(), second.as_str());
        assert_ne!(first, second);
    }
}

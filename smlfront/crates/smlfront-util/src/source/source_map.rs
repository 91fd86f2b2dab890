//! Registry of loaded files, keyed by a stable [`FileId`].

use std::sync::Arc;

use super::SourceFile;

/// A unique identifier for a file registered with a [`SourceMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    pub const DUMMY: FileId = FileId(0);
}

/// Owns every [`SourceFile`] a run of the tokenizer/parser has loaded.
///
/// # Examples
///
/// ```
/// use smlfront_util::source::SourceMap;
///
/// let mut map = SourceMap::new();
/// let id = map.add_file("a.sml", "val x = 1");
/// assert_eq!(map.get(id).unwrap().name(), "a.sml");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Register a file's content and return its [`FileId`].
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = FileId(self.files.len());
        self.files.push(Arc::new(SourceFile::new(name, content)));
        id
    }

    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_get() {
        let mut map = SourceMap::new();
        let id = map.add_file("a.sml", "val x = 1");
        assert_eq!(map.file_count(), 1);
        assert_eq!(map.get(id).unwrap().content(), "val x = 1");
        assert!(map.get(FileId(7)).is_none());
    }
}

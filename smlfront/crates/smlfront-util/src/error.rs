//! The single error taxonomy produced by tokenizing and parsing.
//!
//! Every fallible entry point in `smlfront-lex` and `smlfront-par` returns
//! `Result<T, LineError>`. There is no diagnostic collector: the first error
//! encountered aborts the call that produced it.

use thiserror::Error;

use crate::source::{Source, SourceMap};

/// Which phase raised a [`LineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineErrorHeader {
    #[error("SYNTAX ERROR")]
    SyntaxError,
    #[error("PARSE ERROR")]
    ParseError,
    #[error("ERROR: NOT YET IMPLEMENTED")]
    NotYetImplemented,
}

/// A single-line, single-cause error anchored to a source position.
///
/// `position` is the offending [`Source`] slice (often a single token);
/// `what` is the one-line complaint; `explain` is an optional second line of
/// detail (e.g. "expected one of: `then`, `else`").
#[derive(Debug, Error)]
#[error("{header}: {what}")]
pub struct LineError {
    pub header: LineErrorHeader,
    pub position: Source,
    pub what: String,
    pub explain: Option<String>,
}

impl LineError {
    pub fn new(header: LineErrorHeader, position: Source, what: impl Into<String>) -> Self {
        Self {
            header,
            position,
            what: what.into(),
            explain: None,
        }
    }

    pub fn syntax(position: Source, what: impl Into<String>) -> Self {
        Self::new(LineErrorHeader::SyntaxError, position, what)
    }

    pub fn parse(position: Source, what: impl Into<String>) -> Self {
        Self::new(LineErrorHeader::ParseError, position, what)
    }

    pub fn not_yet_implemented(position: Source, what: impl Into<String>) -> Self {
        Self::new(LineErrorHeader::NotYetImplemented, position, what)
    }

    pub fn with_explain(mut self, explain: impl Into<String>) -> Self {
        self.explain = Some(explain.into());
        self
    }

    /// Render a source-line-and-caret view of this error, e.g.:
    ///
    /// ```text
    /// PARSE ERROR at a.sml:2:7: expected `then`
    ///   val x = if true 1 else 0
    ///           ^^^^^^^
    /// ```
    pub fn render(&self, _map: &SourceMap) -> String {
        let start = self.position.absolute_start();
        let line = self
            .position
            .whole_line(start.line)
            .map(|l| l.as_str().to_string())
            .unwrap_or_default();
        let caret_len = self.position.len().max(1);
        let caret = " ".repeat(start.col.saturating_sub(1) as usize) + &"^".repeat(caret_len);

        let mut out = format!(
            "{header} at {file}:{line_no}:{col}: {what}\n  {text}\n  {caret}",
            header = self.header,
            file = self.position.file_name(),
            line_no = start.line,
            col = start.col,
            what = self.what,
            text = line,
            caret = caret,
        );
        if let Some(explain) = &self.explain {
            out.push('\n');
            out.push_str(explain);
        }
        out
    }
}

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
    fn render_points_at_the_offending_slice() {
        let (map, src) = source("val x = if true 1 else 0\n");
        let bad = src.slice(16, 1);
        let err = LineError::parse(bad, "expected `then`");
        let rendered = err.render(&map);
        assert!(rendered.contains("PARSE ERROR"));
        assert!(rendered.contains("val x = if true 1 else 0"));
        assert!(rendered.contains('^'));
    }

    #[test]
    fn explain_is_appended_on_its_own_line() {
        let (map, src) = source("val\n");
        let err = LineError::syntax(src.clone(), "unexpected end of file")
            .with_explain("expected an identifier after `val`");
        let rendered = err.render(&map);
        assert!(rendered.ends_with("expected an identifier after `val`"));
    }
}

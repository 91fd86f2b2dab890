//! Generic delimited-sequence helpers named in §4.6: every place the
//! grammar needs "one or more, separated by a fixed token" or "zero or
//! more, stopping when a predicate says so" goes through one of these
//! instead of being hand-rolled per call site.

use smlfront_lex::Reserved;
use smlfront_util::LineError;

use super::core::Parser;

impl Parser {
    /// `elem (delim elem)*` — at least one `elem`, each pair of elements
    /// separated by the reserved token `delim`.
    pub(crate) fn parse_one_or_more_delimited_by_reserved<T>(
        &mut self,
        delim: Reserved,
        mut parse_elem: impl FnMut(&mut Self) -> Result<T, LineError>,
    ) -> Result<(Vec<T>, Vec<smlfront_lex::Token>), LineError> {
        let mut elems = vec![parse_elem(self)?];
        let mut delims = Vec::new();
        while self.is_reserved(delim) {
            delims.push(self.advance());
            elems.push(parse_elem(self)?);
        }
        Ok((elems, delims))
    }

    /// `(elem (delim elem)*)?` — zero or more `elem`s, stopping as soon as
    /// `should_stop` says the next token cannot start another one.
    pub(crate) fn parse_zero_or_more_delimited_by_reserved<T>(
        &mut self,
        delim: Reserved,
        should_stop: impl Fn(&Self) -> bool,
        mut parse_elem: impl FnMut(&mut Self) -> Result<T, LineError>,
    ) -> Result<(Vec<T>, Vec<smlfront_lex::Token>), LineError> {
        if should_stop(self) {
            return Ok((Vec::new(), Vec::new()));
        }
        self.parse_one_or_more_delimited_by_reserved(delim, parse_elem)
    }

    /// Repeats `parse_one` for as long as `continue_while` holds, threading
    /// each result into the accumulator.
    pub(crate) fn parse_while<T>(
        &mut self,
        continue_while: impl Fn(&Self) -> bool,
        mut parse_one: impl FnMut(&mut Self) -> Result<T, LineError>,
    ) -> Result<Vec<T>, LineError> {
        let mut out = Vec::new();
        while continue_while(self) {
            out.push(parse_one(self)?);
        }
        Ok(out)
    }

    /// Parses two productions in sequence and pairs their results — used
    /// where a grammar rule is exactly `a b` with nothing optional between.
    pub(crate) fn parse_two<A, B>(
        &mut self,
        parse_a: impl FnOnce(&mut Self) -> Result<A, LineError>,
        parse_b: impl FnOnce(&mut Self) -> Result<B, LineError>,
    ) -> Result<(A, B), LineError> {
        let a = parse_a(self)?;
        let b = parse_b(self)?;
        Ok((a, b))
    }
}

//! The build-description lexer (§4.3): a second, smaller tokenizer over the
//! same [`Source`] type, with its own reserved-word set ([`MlbReserved`])
//! and its own bare-word class (a file path), but delegating comments and
//! string constants straight to the main lexer.

use smlfront_util::{LineError, Source};

use crate::lexer::Lexer;
use crate::token::{MlbReserved, Token, TokenClass};

/// Tokenizes a build-description [`Source`] one maximal-munch token at a
/// time. Wraps a main [`Lexer`] purely to reuse its comment/string scanning
/// and its span bookkeeping (`token_start`, `make_token`, `syntax_error`) —
/// the two lexers never share keyword or identifier dispatch.
pub struct MlbLexer<'a> {
    inner: Lexer<'a>,
}

impl<'a> MlbLexer<'a> {
    pub fn new(source: &'a Source) -> Self {
        Self {
            inner: Lexer::new(source),
        }
    }

    /// `next(source) → token | none` (§4.3).
    pub fn next(&mut self) -> Result<Option<Token>, LineError> {
        let token = self.next_token()?;
        if token.is_eof() {
            Ok(None)
        } else {
            Ok(Some(token))
        }
    }

    /// `tokens(source) → sequence<token>` (§4.3).
    pub fn tokens(&mut self) -> Result<Vec<Token>, LineError> {
        let mut out = Vec::new();
        while let Some(token) = self.next()? {
            out.push(token);
        }
        Ok(out)
    }

    fn next_token(&mut self) -> Result<Token, LineError> {
        self.skip_whitespace();
        self.inner.token_start = self.inner.cursor.position();

        if self.inner.cursor.is_at_end() {
            return Ok(self.inner.make_token(TokenClass::Eof));
        }

        match self.inner.cursor.current_char() {
            '(' if self.inner.cursor.peek_char(1) == '*' => self.inner.lex_comment(),
            '"' => self.inner.lex_string(),
            c if is_path_valid(c) => self.lex_word_or_path(),
            c => {
                self.inner.cursor.advance();
                Err(self.inner.syntax_error(format!("unexpected character '{c}'")))
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.inner.cursor.is_at_end() && self.inner.cursor.current_char().is_whitespace() {
            self.inner.cursor.advance();
        }
    }

    /// Scans the maximal run of path-valid characters and classifies it.
    ///
    /// Greedy maximal munch already gives the lookahead discipline the
    /// design note asks for: `bas` is the keyword only when the run stops
    /// exactly there, which is exactly "not followed by a path-continuation
    /// character" — `basisfoo` stops only after the whole word, so it never
    /// equals the literal `"basis"` and falls through to the bare-word case.
    fn lex_word_or_path(&mut self) -> Result<Token, LineError> {
        while is_path_valid(self.inner.cursor.current_char()) {
            self.inner.cursor.advance();
        }
        let text = self.inner.cursor.slice_from(self.inner.token_start);

        if let Some(reserved) = classify_reserved(text) {
            return Ok(self.inner.make_token(TokenClass::MlbReserved(reserved)));
        }

        if text.contains('.') || text.contains('/') {
            if !has_recognised_extension(text) {
                return Err(self
                    .inner
                    .syntax_error("Missing or invalid file extension in path."));
            }
            return Ok(self.inner.make_token(TokenClass::Path));
        }

        Ok(self.inner.make_token(TokenClass::Ident { long: false }))
    }
}

fn classify_reserved(text: &str) -> Option<MlbReserved> {
    Some(match text {
        "bas" => MlbReserved::Bas,
        "basis" => MlbReserved::Basis,
        "ann" => MlbReserved::Ann,
        "_prim" => MlbReserved::Prim,
        _ => return None,
    })
}

fn has_recognised_extension(text: &str) -> bool {
    [".mlb", ".sml", ".sig", ".fun"]
        .iter()
        .any(|ext| text.ends_with(ext))
}

fn is_path_valid(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '/' | '_' | '-')
}

#[cfg(test)]
mod tests {
    use smlfront_util::SourceMap;

    use super::*;

    fn lex_all(text: &str) -> Vec<Token> {
        let mut map = SourceMap::new();
        let id = map.add_file("t.mlb", text.to_string());
        let source = Source::whole_file(&map, id).unwrap();
        MlbLexer::new(&source).tokens().unwrap()
    }

    #[test]
    fn bare_path_with_extension() {
        let tokens = lex_all("foo.sml");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].class(), &TokenClass::Path);
        assert_eq!(tokens[0].text(), "foo.sml");
    }

    #[test]
    fn path_without_extension_is_an_error() {
        let mut map = SourceMap::new();
        let id = map.add_file("t.mlb", "foo.xyz".to_string());
        let source = Source::whole_file(&map, id).unwrap();
        assert!(MlbLexer::new(&source).tokens().is_err());
    }

    #[test]
    fn bas_path_is_disambiguated_from_identifier() {
        let tokens = lex_all("bas foo.mlb is");
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].is_mlb_reserved(MlbReserved::Bas));
        assert_eq!(tokens[1].class(), &TokenClass::Path);
        assert_eq!(tokens[1].text(), "foo.mlb");
        assert_eq!(tokens[2].class(), &TokenClass::Ident { long: false });
        assert_eq!(tokens[2].text(), "is");
    }

    #[test]
    fn basis_keyword_requires_an_exact_match() {
        let tokens = lex_all("basis");
        assert!(tokens[0].is_mlb_reserved(MlbReserved::Basis));
    }

    #[test]
    fn basis_prefix_word_is_not_the_keyword() {
        // "basisx" is a longer run than "basis", so the greedy scan never
        // stops at the keyword boundary.
        let tokens = lex_all("basisx.sml");
        assert_eq!(tokens[0].class(), &TokenClass::Path);
    }

    #[test]
    fn ann_and_prim_keywords() {
        let tokens = lex_all("ann _prim");
        assert!(tokens[0].is_mlb_reserved(MlbReserved::Ann));
        assert!(tokens[1].is_mlb_reserved(MlbReserved::Prim));
    }

    #[test]
    fn comments_delegate_to_the_main_lexer() {
        let tokens = lex_all("(* hi *) foo.sml");
        assert!(tokens[0].is_comment());
        assert_eq!(tokens[1].class(), &TokenClass::Path);
    }

    #[test]
    fn strings_delegate_to_the_main_lexer() {
        use crate::token::ConstClass;

        let tokens = lex_all("\"hello\"");
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].class(),
            &TokenClass::Const(ConstClass::Str("hello".to_string()))
        );
    }
}

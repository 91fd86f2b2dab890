//! String and character constants (§4.2) and their shared escape grammar:
//! `\\`, `\"`, `\n`, `\t`, `\^c` control escapes, `\ddd` decimal numeric
//! escapes, `\uXXXX` hex numeric escapes, and string continuation
//! (`\<whitespace>\`) across line breaks.

use smlfront_util::LineError;

use crate::token::{ConstClass, Token, TokenClass};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Called with the cursor on the opening `"`.
    pub(crate) fn lex_string(&mut self) -> Result<Token, LineError> {
        self.cursor.advance();
        let mut content = String::new();

        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                return Err(self.syntax_error("unterminated string literal"));
            }
            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    break;
                }
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.current_char().is_whitespace() {
                        self.skip_string_continuation()?;
                    } else {
                        content.push(self.parse_escape()?);
                    }
                }
                c => {
                    content.push(c);
                    self.cursor.advance();
                }
            }
        }

        Ok(self.make_token(TokenClass::Const(ConstClass::Str(content))))
    }

    /// Called with the cursor on the `#` of a `#"c"` character constant.
    pub(crate) fn lex_char_constant(&mut self) -> Result<Token, LineError> {
        self.cursor.advance(); // '#'
        self.cursor.advance(); // '"'

        if self.cursor.is_at_end() || self.cursor.current_char() == '"' {
            return Err(self.syntax_error("character constant must contain exactly one character"));
        }

        let value = if self.cursor.current_char() == '\\' {
            self.cursor.advance();
            self.parse_escape()?
        } else {
            let c = self.cursor.current_char();
            self.cursor.advance();
            c
        };

        if self.cursor.current_char() != '"' {
            return Err(self.syntax_error("character constant must contain exactly one character"));
        }
        self.cursor.advance();

        Ok(self.make_token(TokenClass::Const(ConstClass::Char(value))))
    }

    /// `\<whitespace>*\` — the whole run between the two backslashes
    /// contributes nothing to the string's value.
    fn skip_string_continuation(&mut self) -> Result<(), LineError> {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\\' {
            if !self.cursor.current_char().is_whitespace() {
                return Err(self.syntax_error("invalid string continuation"));
            }
            self.cursor.advance();
        }
        if self.cursor.is_at_end() {
            return Err(self.syntax_error("unterminated string continuation"));
        }
        self.cursor.advance(); // closing backslash
        Ok(())
    }

    pub(crate) fn parse_escape(&mut self) -> Result<char, LineError> {
        let c = self.cursor.current_char();
        match c {
            'n' => {
                self.cursor.advance();
                Ok('\n')
            }
            't' => {
                self.cursor.advance();
                Ok('\t')
            }
            '\\' => {
                self.cursor.advance();
                Ok('\\')
            }
            '"' => {
                self.cursor.advance();
                Ok('"')
            }
            '^' => {
                self.cursor.advance();
                let ctrl = self.cursor.current_char();
                if !('@'..='_').contains(&ctrl) {
                    return Err(self.syntax_error("invalid control escape"));
                }
                self.cursor.advance();
                Ok(((ctrl as u8) - b'@') as char)
            }
            'u' => {
                self.cursor.advance();
                let mut hex = String::new();
                for _ in 0..4 {
                    let h = self.cursor.current_char();
                    if !h.is_ascii_hexdigit() {
                        return Err(self.syntax_error("hex escape requires exactly 4 hex digits"));
                    }
                    hex.push(h);
                    self.cursor.advance();
                }
                let codepoint = u32::from_str_radix(&hex, 16).unwrap();
                char::from_u32(codepoint).ok_or_else(|| self.syntax_error("invalid unicode escape"))
            }
            c if c.is_ascii_digit() => {
                let mut digits = String::new();
                for _ in 0..3 {
                    let d = self.cursor.current_char();
                    if !d.is_ascii_digit() {
                        return Err(self.syntax_error("decimal escape requires exactly 3 digits"));
                    }
                    digits.push(d);
                    self.cursor.advance();
                }
                let value: u32 = digits.parse().unwrap();
                char::from_u32(value).ok_or_else(|| self.syntax_error("decimal escape out of range"))
            }
            _ => Err(self.syntax_error(format!("unknown escape sequence '\\{c}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use smlfront_util::{Source, SourceMap};

    use super::*;

    fn lex_first(text: &str) -> Result<Token, LineError> {
        let mut map = SourceMap::new();
        let id = map.add_file("t.sml", text.to_string());
        let source = Source::whole_file(&map, id).unwrap();
        let mut lexer = Lexer::new(&source);
        match lexer.next()? {
            Some(token) => Ok(token),
            None => Err(LineError::syntax(source.clone(), "no token produced")),
        }
    }

    fn string_value(text: &str) -> String {
        match lex_first(text).unwrap().class() {
            TokenClass::Const(ConstClass::Str(s)) => s.clone(),
            other => panic!("expected string constant, got {other:?}"),
        }
    }

    #[test]
    fn plain_string() {
        assert_eq!(string_value("\"hello\""), "hello");
    }

    #[test]
    fn string_with_basic_escapes() {
        assert_eq!(string_value("\"a\\nb\\tc\""), "a\nb\tc");
    }

    #[test]
    fn string_spans_a_newline_via_continuation() {
        assert_eq!(string_value("\"a\\   \n   \\b\""), "ab");
    }

    #[test]
    fn string_covers_the_full_source_span() {
        let token = lex_first("\"a\\nb\"").unwrap();
        assert_eq!(token.text(), "\"a\\nb\"");
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(lex_first("\"never closed").is_err());
    }

    #[test]
    fn control_escape_decodes_to_control_code() {
        // \^A is control code 1 (SOH).
        assert_eq!(string_value("\"\\^A\""), "\u{1}");
    }

    #[test]
    fn decimal_escape_decodes_three_digits() {
        assert_eq!(string_value("\"\\065\""), "A");
    }

    #[test]
    fn char_constant_decodes_a_single_character() {
        let token = lex_first("#\"a\"").unwrap();
        assert_eq!(token.class(), &TokenClass::Const(ConstClass::Char('a')));
    }

    #[test]
    fn char_constant_with_more_than_one_char_is_an_error() {
        assert!(lex_first("#\"ab\"").is_err());
    }
}

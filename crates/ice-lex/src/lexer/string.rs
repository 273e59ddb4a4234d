//! String literal lexing.

use ice_util::SyntaxError;

use crate::token::{Literal, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal delimited by matching `"` or `'`.
    ///
    /// Escape sequences `\n`, `\t`, `\"`, `\'` and `\\` decode to their
    /// meaning; any other `\x` decodes to the literal character `x`. The
    /// literal may span lines. An unterminated string is a syntax error
    /// reported at the opening quote.
    pub(crate) fn lex_string(&mut self) -> Result<(), SyntaxError> {
        let quote = self.cursor.current_char();
        self.cursor.advance();

        let mut value = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_at_start("String tidak tertutup"));
            }

            let c = self.cursor.current_char();
            self.cursor.advance();

            if c == quote {
                break;
            }

            if c == '\\' {
                if self.cursor.is_at_end() {
                    return Err(self.error_at_start("String tidak tertutup"));
                }
                let escaped = self.cursor.current_char();
                self.cursor.advance();
                value.push(decode_escape(escaped));
            } else {
                value.push(c);
            }
        }

        self.push_literal(TokenKind::Str, Literal::Str(value));
        Ok(())
    }
}

/// Decodes a single escape character; unknown escapes stand for themselves
/// (which also covers `\"`, `\'` and `\\`).
fn decode_escape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Literal, Token};

    fn lex_one(source: &str) -> Token {
        Lexer::new(source).scan_tokens().unwrap().remove(0)
    }

    fn str_value(source: &str) -> String {
        match lex_one(source).literal {
            Some(Literal::Str(s)) => s,
            other => panic!("bukan literal teks: {other:?}"),
        }
    }

    #[test]
    fn test_double_quoted() {
        assert_eq!(str_value("\"halo\""), "halo");
    }

    #[test]
    fn test_single_quoted() {
        assert_eq!(str_value("'halo'"), "halo");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(str_value("\"\""), "");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(str_value(r#""a\nb\tc""#), "a\nb\tc");
        assert_eq!(str_value(r#""kutip: \" dan \'""#), "kutip: \" dan '");
        assert_eq!(str_value(r#""garis \\ miring""#), "garis \\ miring");
    }

    #[test]
    fn test_unknown_escape_is_literal() {
        assert_eq!(str_value(r#""\q""#), "q");
    }

    #[test]
    fn test_other_quote_kind_inside() {
        assert_eq!(str_value("\"it's\""), "it's");
        assert_eq!(str_value("'kata \"dia\"'"), "kata \"dia\"");
    }

    #[test]
    fn test_multiline_string() {
        assert_eq!(str_value("\"a\nb\""), "a\nb");
    }

    #[test]
    fn test_unterminated_reports_opening_position() {
        let err = Lexer::new("  \"tanpa akhir").scan_tokens().unwrap_err();
        assert_eq!(err.message, "String tidak tertutup");
        assert_eq!((err.line, err.column), (1, 3));
    }

    #[test]
    fn test_lexeme_keeps_raw_spelling() {
        let token = lex_one(r#""a\nb""#);
        assert_eq!(token.lexeme, r#""a\nb""#);
    }
}

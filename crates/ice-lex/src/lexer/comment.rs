//! Comment handling and the slash token.

use ice_util::SyntaxError;

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `/`, `//` line comments, or `/* ... */` block comments.
    ///
    /// Line comments run to the end of the line. Block comments do not nest;
    /// an unterminated block comment is tolerated and simply consumes the
    /// rest of the input.
    pub(crate) fn lex_slash(&mut self) -> Result<(), SyntaxError> {
        self.cursor.advance();

        match self.cursor.current_char() {
            '/' => {
                while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                    self.cursor.advance();
                }
                Ok(())
            },
            '*' => {
                self.cursor.advance();
                while !self.cursor.is_at_end() {
                    if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                        self.cursor.advance();
                        self.cursor.advance();
                        break;
                    }
                    self.cursor.advance();
                }
                Ok(())
            },
            _ => {
                self.push(TokenKind::Slash);
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .scan_tokens()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_line_comment_to_eol() {
        assert_eq!(
            kinds("1; // dua tiga\n2;"),
            vec![
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_line_comment_at_eof() {
        assert_eq!(kinds("// saja"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(
            kinds("1 /* apa\npun */ 2"),
            vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
        );
    }

    #[test]
    fn test_block_comment_does_not_nest() {
        // The first */ closes the comment, leaving `masih */` as tokens.
        let tokens = Lexer::new("/* a /* b */ masih").scan_tokens().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].lexeme, "masih");
    }

    #[test]
    fn test_unterminated_block_comment_is_tolerated() {
        assert_eq!(kinds("1; /* tanpa akhir"), vec![
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_plain_slash_still_divides() {
        assert_eq!(
            kinds("6 / 2"),
            vec![TokenKind::Number, TokenKind::Slash, TokenKind::Number, TokenKind::Eof]
        );
    }
}

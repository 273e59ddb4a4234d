//! Core lexer: the scan loop, token construction and dispatch.

use ice_util::SyntaxError;

use crate::cursor::Cursor;
use crate::token::{Literal, Token, TokenKind};

/// Lexer for ICE source code.
///
/// Consumes the source in a single forward pass and produces the full token
/// vector, ending with an EOF token. The first lexical error aborts the
/// scan.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,

    /// Tokens scanned so far.
    tokens: Vec<Token>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_line: u32,

    /// Column where the current token starts (1-based).
    token_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            token_start: 0,
            token_line: 1,
            token_column: 1,
        }
    }

    /// Scans the whole source into a token vector.
    ///
    /// # Returns
    /// All tokens in source order followed by `Eof`, or the first syntax
    /// error encountered.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, SyntaxError> {
        while !self.cursor.is_at_end() {
            self.token_start = self.cursor.position();
            self.token_line = self.cursor.line();
            self.token_column = self.cursor.column();
            self.scan_token()?;
        }

        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            line: self.cursor.line(),
            column: self.cursor.column(),
        });
        Ok(self.tokens)
    }

    /// Scans a single token (or skips one run of trivia).
    fn scan_token(&mut self) -> Result<(), SyntaxError> {
        match self.cursor.current_char() {
            ' ' | '\t' | '\r' | '\n' => {
                self.cursor.advance();
                Ok(())
            },
            '/' => self.lex_slash(),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Dot),
            '-' => self.single(TokenKind::Minus),
            '+' => self.single(TokenKind::Plus),
            ';' => self.single(TokenKind::Semicolon),
            '*' => self.single(TokenKind::Star),
            '%' => self.single(TokenKind::Percent),
            ':' => self.single(TokenKind::Colon),
            '=' | '!' | '<' | '>' => {
                self.lex_operator();
                Ok(())
            },
            '"' | '\'' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if c.is_ascii_alphabetic() || c == '_' => {
                self.lex_identifier();
                Ok(())
            },
            c => Err(self.error_at_start(format!("Karakter tidak dikenal: {c}"))),
        }
    }

    fn single(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        self.cursor.advance();
        self.push(kind);
        Ok(())
    }

    /// Emits a token spanning from the recorded start to the cursor.
    pub(crate) fn push(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    /// Emits a token with a literal payload.
    pub(crate) fn push_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.push_token(kind, Some(literal));
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.cursor.slice_from(self.token_start).to_string();
        self.tokens.push(Token {
            kind,
            lexeme,
            literal,
            line: self.token_line,
            column: self.token_column,
        });
    }

    /// Builds a syntax error located at the start of the current token.
    pub(crate) fn error_at_start(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.token_line, self.token_column)
    }
}

//! Token definitions for the ICE language.

use std::fmt;

/// The closed set of token kinds.
///
/// Keyword variants carry no payload; the literal payload of `Str` and
/// `Number` tokens lives in [`Token::literal`], and identifier spellings in
/// [`Token::lexeme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Single-character punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    Percent,
    Colon,

    // One- or two-character operators
    Bang,
    BangEq,
    Eq,
    EqEq,
    Gt,
    GtEq,
    Lt,
    LtEq,

    // Literals
    Ident,
    Str,
    Number,

    // Keywords
    Tugas,
    Fungsi,
    Jika,
    Jikalau,
    Kalau,
    Selagi,
    Untuk,
    Dalam,
    Rentang,
    Kembalikan,
    Tampilkan,
    Cetak,
    Benar,
    Salah,
    Kosong,
    Dan,
    Atau,
    Bukan,
    Bilangan,
    Desimal,
    Teks,
    Boolean,
    Kelas,
    Baru,
    Ini,
    Super,
    Properti,
    Get,
    Set,

    Eof,
}

/// Literal payload attached to `Str` and `Number` tokens.
///
/// Numbers split into integers and floats at lex time: the presence of a
/// fractional part decides the kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
}

/// A lexical unit: kind, raw lexeme, optional literal, and the 1-based
/// position of the lexeme's first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({:?}, {:?}, baris={}, kolom={})",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

/// Looks up the keyword kind for an already lowercase-folded word.
pub(crate) fn keyword_kind(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "tugas" => TokenKind::Tugas,
        "fungsi" => TokenKind::Fungsi,
        "jika" => TokenKind::Jika,
        "jikalau" => TokenKind::Jikalau,
        "kalau" => TokenKind::Kalau,
        "selagi" => TokenKind::Selagi,
        "untuk" => TokenKind::Untuk,
        "dalam" => TokenKind::Dalam,
        "rentang" => TokenKind::Rentang,
        "kembalikan" => TokenKind::Kembalikan,
        "tampilkan" => TokenKind::Tampilkan,
        "cetak" => TokenKind::Cetak,
        "benar" => TokenKind::Benar,
        "salah" => TokenKind::Salah,
        "kosong" => TokenKind::Kosong,
        "dan" => TokenKind::Dan,
        "atau" => TokenKind::Atau,
        "bukan" => TokenKind::Bukan,
        "bilangan" => TokenKind::Bilangan,
        "desimal" => TokenKind::Desimal,
        "teks" => TokenKind::Teks,
        "boolean" => TokenKind::Boolean,
        "kelas" => TokenKind::Kelas,
        "baru" => TokenKind::Baru,
        "ini" => TokenKind::Ini,
        "super" => TokenKind::Super,
        "properti" => TokenKind::Properti,
        "get" => TokenKind::Get,
        "set" => TokenKind::Set,
        _ => return None,
    };
    Some(kind)
}

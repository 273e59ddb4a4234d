//! ice-lex - lexical analyzer for ICE source text.
//!
//! Scans UTF-8 source into a flat token stream in a single forward pass.
//! Whitespace and comments are skipped; every other character must start a
//! token or the scan fails with a [`ice_util::SyntaxError`] carrying the
//! offending position. The stream always ends with a synthetic EOF token.
//!
//! Identifier words are lowercase-folded before keyword lookup, so `Jika`
//! and `jika` both produce the `jika` keyword while the token keeps the
//! original spelling in its lexeme.

pub mod cursor;
mod edge_cases;
mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Literal, Token, TokenKind};

//! Core error types shared across the interpreter pipeline.

use thiserror::Error;

/// Error raised by the lexer or parser.
///
/// Always carries the 1-based line and column of the offending character or
/// token. Once a syntax error is raised the pipeline halts; no evaluation
/// takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (baris {line}, kolom {column})")]
pub struct SyntaxError {
    /// Human-readable description, in the language's own (Indonesian) voice.
    pub message: String,
    /// 1-based source line.
    pub line: u32,
    /// 1-based source column.
    pub column: u32,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

/// Error raised during evaluation.
///
/// Runtime errors abort the running program; they are not catchable at the
/// ICE language level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuntimeError {
    pub message: String,
}

impl RuntimeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Either error kind, as surfaced to the embedding caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IceError {
    #[error("{0}")]
    Syntax(#[from] SyntaxError),
    #[error("{0}")]
    Runtime(#[from] RuntimeError),
}

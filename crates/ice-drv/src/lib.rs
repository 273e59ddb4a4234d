//! ice-drv - driver for the ICE interpreter.
//!
//! Orchestrates the pipeline (lex → parse → evaluate) and maps the outcome
//! to the process exit codes the CLI promises:
//!
//! - 0 — success
//! - 2 — input file could not be read
//! - 3 — syntax error (reported as `[Sintaks] …`)
//! - 4 — runtime error (reported as `[Runtime] …`)

use std::fs;
use std::path::Path;

use ice_eval::Interpreter;
use ice_lex::Lexer;
use ice_util::IceError;
use tracing::debug;

/// Debug-dump switches for the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print every scanned token before parsing.
    pub show_tokens: bool,
    /// Print every parsed statement before evaluation.
    pub show_ast: bool,
}

/// Lexes, parses and evaluates `source` against a persistent interpreter.
///
/// The interpreter keeps its globals afterwards, which is what the REPL
/// relies on. A syntax error halts the pipeline before any evaluation.
pub fn run_persistent(interp: &mut Interpreter, source: &str) -> Result<(), IceError> {
    run_persistent_with(interp, source, RunOptions::default())
}

/// [`run_persistent`] with debug dumps.
pub fn run_persistent_with(
    interp: &mut Interpreter,
    source: &str,
    options: RunOptions,
) -> Result<(), IceError> {
    let tokens = Lexer::new(source).scan_tokens()?;
    debug!(count = tokens.len(), "lexed tokens");
    if options.show_tokens {
        for token in &tokens {
            println!("{token}");
        }
    }

    let program = ice_par::parse(tokens)?;
    debug!(count = program.len(), "parsed statements");
    if options.show_ast {
        for stmt in &program {
            println!("{stmt:?}");
        }
    }

    interp.interpret(&program)?;
    debug!("evaluation finished");
    Ok(())
}

/// Runs `source` in a fresh interpreter and returns the exit code.
pub fn run(source: &str) -> i32 {
    run_with(source, RunOptions::default())
}

/// [`run`] with debug dumps.
pub fn run_with(source: &str, options: RunOptions) -> i32 {
    let mut interp = Interpreter::new();
    report(run_persistent_with(&mut interp, source, options))
}

/// Runs a source file; exit code 2 when it cannot be read.
pub fn run_file(path: &Path) -> i32 {
    run_file_with(path, RunOptions::default())
}

/// [`run_file`] with debug dumps.
pub fn run_file_with(path: &Path, options: RunOptions) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(_) => {
            eprintln!("File tidak ditemukan: {}", path.display());
            return 2;
        },
    };
    run_with(&source, options)
}

/// Prints any error in the CLI format and maps the result to an exit code.
pub fn report(result: Result<(), IceError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(IceError::Syntax(err)) => {
            println!(
                "[Sintaks] {} (baris {}, kolom {})",
                err.message, err.line, err.column
            );
            3
        },
        Err(IceError::Runtime(err)) => {
            println!("[Runtime] {}", err.message);
            4
        },
    }
}

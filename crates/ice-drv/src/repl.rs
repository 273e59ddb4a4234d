//! Interactive REPL with brace-depth input buffering.
//!
//! Lines accumulate in a buffer while the net brace depth is positive, so
//! multi-line blocks can be typed naturally. The buffer executes against
//! one persistent interpreter once the depth closes and the line looks
//! complete (empty, or ending in `;` / `}`).

use std::io::{self, BufRead, Write};

use ice_eval::Interpreter;

pub fn run_repl() {
    println!("ICE REPL — ketik 'keluar' untuk berhenti. Baris kosong mengeksekusi buffer.");
    let mut interp = Interpreter::new();
    let stdin = io::stdin();

    let mut buffer: Vec<String> = Vec::new();
    let mut depth: i32 = 0;

    loop {
        let prompt = if depth > 0 || !buffer.is_empty() {
            "... "
        } else {
            "ice> "
        };
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            },
            Ok(_) => {},
            Err(_) => break,
        }
        let line = line.trim_end_matches(['\n', '\r']).to_string();
        if line.trim() == "keluar" {
            break;
        }

        let looks_complete = {
            let trimmed = line.trim();
            trimmed.is_empty() || trimmed.ends_with(';') || trimmed.ends_with('}')
        };
        depth += brace_delta(&line);
        buffer.push(line);

        if depth <= 0 && looks_complete {
            let source = buffer.join("\n");
            buffer.clear();
            depth = 0;
            if source.trim().is_empty() {
                continue;
            }
            if let Err(err) = ice_drv::run_persistent(&mut interp, &source) {
                println!("{err}");
            }
        }
    }
}

/// Net `{` / `}` count with string literals stripped, so braces inside
/// strings don't affect buffering.
fn brace_delta(line: &str) -> i32 {
    let mut delta = 0;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => {
                let quote = c;
                while let Some(inner) = chars.next() {
                    if inner == '\\' {
                        chars.next();
                    } else if inner == quote {
                        break;
                    }
                }
            },
            '{' => delta += 1,
            '}' => delta -= 1,
            _ => {},
        }
    }
    delta
}

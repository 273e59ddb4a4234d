//! The `ice` binary: command-line interface and REPL.

mod repl;

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ice_drv::RunOptions;

/// ICE language runner
#[derive(Parser, Debug)]
#[command(name = "ice")]
#[command(version)]
#[command(about = "ICE language runner", long_about = None)]
struct Cli {
    /// File .ice yang akan dijalankan ('-' untuk stdin)
    file: Option<PathBuf>,

    /// Tampilkan token hasil lexing
    #[arg(short = 't', long)]
    show_tokens: bool,

    /// Tampilkan AST hasil parsing
    #[arg(short = 'a', long)]
    show_ast: bool,

    /// Ukur waktu eksekusi
    #[arg(long)]
    time: bool,

    /// Masuk mode REPL
    #[arg(long)]
    repl: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.repl || cli.file.is_none() {
        repl::run_repl();
        return ExitCode::SUCCESS;
    }

    let options = RunOptions {
        show_tokens: cli.show_tokens,
        show_ast: cli.show_ast,
    };

    let code = match cli.file {
        Some(file) if file.as_os_str() == "-" => match read_stdin() {
            Ok(source) => timed(cli.time, || ice_drv::run_with(&source, options)),
            Err(err) => {
                eprintln!("{err:#}");
                1
            },
        },
        Some(file) => timed(cli.time, || ice_drv::run_file_with(&file, options)),
        None => 0,
    };
    ExitCode::from(code as u8)
}

fn read_stdin() -> anyhow::Result<String> {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("gagal membaca stdin")?;
    Ok(source)
}

fn timed(enabled: bool, run: impl FnOnce() -> i32) -> i32 {
    let started = Instant::now();
    let code = run();
    if enabled {
        println!("Waktu: {:.4}s", started.elapsed().as_secs_f64());
    }
    code
}

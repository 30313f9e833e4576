use std::{
    ffi::OsString,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use tracing::info;
use tracing_subscriber::prelude::*;

mod compiler;
mod config;
mod hex;
mod naming;


use compiler::Compiler;
use config::Config;

/// Compile a shader to SPIR-V and dump the binary as a C array body.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Arguments {
    #[arg()]
    input: PathBuf,
}

const EXIT_USAGE: u8 = 2;
const EXIT_FAILURE: u8 = 1;

/// Why the process stops before running the pipeline.
#[derive(Debug)]
enum EarlyExit {
    /// Help or version output, rendered by clap.
    Clap(clap::Error),
    Usage(u8),
}

/// Parses `argv`. Any argument error other than help/version writes the
/// usage line to `out`.
fn parse_args<I, T>(argv: I, out: &mut impl Write) -> Result<Arguments, EarlyExit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv = argv.into_iter().map(Into::into).collect::<Vec<OsString>>();
    match Arguments::try_parse_from(&argv) {
        Ok(args) => Ok(args),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Err(EarlyExit::Clap(e)),
            _ => {
                let program = argv
                    .first()
                    .map(|x| x.to_string_lossy().into_owned())
                    .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());
                // Nothing useful to do if stdout itself is gone.
                let _ = writeln!(out, "Usage: {program} filename");
                Err(EarlyExit::Usage(EXIT_USAGE))
            }
        },
    }
}

/// Writes a failed run's error chain to `err` and picks the exit code.
fn report(result: Result<PathBuf>, err: &mut impl Write) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {e:?}");
            EXIT_FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Compiles `input` and writes its hex dump next to it. Returns the dump path.
fn run(input: &Path, config: &Config) -> Result<PathBuf> {
    let output = naming::output_path(input)?;
    let spirv = Compiler::new(&config.compiler)
        .compile(input)
        .context("shader compilation failed")?;
    let count = hex::convert_file(&spirv, &output)?;
    info!(bytes = count, output = %output.display(), "wrote shader hex");
    Ok(output)
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args_os(), &mut io::stdout()) {
        Ok(args) => args,
        Err(EarlyExit::Clap(e)) => e.exit(),
        Err(EarlyExit::Usage(code)) => return ExitCode::from(code),
    };
    init_tracing();

    let result = run(&args.input, &Config::default());
    ExitCode::from(report(result, &mut io::stderr()))
}

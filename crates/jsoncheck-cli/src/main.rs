//! `jsoncheck` — determines whether the given input is valid JSON.
//!
//! Accepts one optional path argument; with no argument, reads from standard
//! input. The checker writes nothing to standard output: the verdict is the
//! exit status, `0` for valid JSON and `1` otherwise. Usage and open-failure
//! errors are reported on standard error, also with exit status `1`.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "jsoncheck", version, about = "JSON syntax checker")]
struct Args {
    /// Input file path. Omit to read from standard input.
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage errors exit 1; --help/--version print to stdout and exit 0.
            let failed = err.use_stderr();
            let _ = err.print();
            return if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let buffer = match read_input(args.input.as_deref()) {
        Ok(buffer) => buffer,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };

    if jsoncheck::validate(&buffer) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Reads the whole input source into one owned byte buffer.
fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).map_err(|err| {
            io::Error::new(
                err.kind(),
                format!("can't open \"{}\": {err}", path.display()),
            )
        }),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

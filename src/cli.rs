//! The PSS command-line interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::io::Read;
use std::path::PathBuf;
use std::{fs, io, process};

use clap::Parser;

use crate::cli::args::{Command, PssArgs};
use crate::syntax::parse;
use crate::{repl, server};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = PssArgs::parse();

    // Dispatch to the appropriate subcommand handler.
    let result = match args.command {
        Some(Command::Parse { file, code }) => handle_parse(file, code),
        Some(Command::Serve) => server::run(),
        Some(Command::Repl) | None => repl::run_menu(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Handles the `parse` subcommand: single-shot parse of inline code, a file,
/// or stdin. The JSON envelope always goes to stdout; on failure a miette
/// diagnostic is rendered on stderr and the process exits nonzero.
fn handle_parse(file: Option<PathBuf>, code: Option<String>) -> io::Result<()> {
    let source = match (code, file) {
        (Some(code), _) => code,
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let outcome = parse(&source);
    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to render outcome: {e}");
            process::exit(1);
        }
    }

    if let Some(err) = outcome.error() {
        eprintln!("{:?}", err.to_report(&source));
        process::exit(1);
    }
    Ok(())
}

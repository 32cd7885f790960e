//! Defines the command-line arguments and subcommands for the PSS CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "pss",
    version,
    about = "A parser for the PSS component language."
)]
pub struct PssArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// An enumeration of all available CLI subcommands.
///
/// With no subcommand the CLI drops into the interactive menu.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse PSS code once and print the JSON outcome.
    Parse {
        /// The path to the PSS source file to parse; reads stdin when absent.
        file: Option<PathBuf>,
        /// PSS source passed inline instead of a file or stdin.
        #[arg(long, conflicts_with = "file")]
        code: Option<String>,
    },
    /// Interactive menu: parse from stdin, a file, or a built-in example.
    Repl,
    /// Answer parse requests over stdio, one JSON-RPC request per line.
    Serve,
}

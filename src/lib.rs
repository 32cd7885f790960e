pub use crate::syntax::{parse, ParseError, ParseOutcome};

pub mod ast;
pub mod cli;
pub mod repl;
pub mod server;
pub mod syntax;

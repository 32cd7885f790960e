//! Syntax module for the PSS language.
//!
//! Splits the core into the scanner ([`cursor`]), the recursive-descent
//! grammar rules ([`parser`]), the error types ([`error`]), and the result
//! builder that owns the public entry point ([`outcome`]).

pub mod cursor;
pub mod error;
pub mod outcome;
pub mod parser;

pub use cursor::Cursor;
pub use error::ParseError;
pub use outcome::{parse, ParseOutcome};

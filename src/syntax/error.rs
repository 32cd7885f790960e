//! Parse error types.
//!
//! Exactly two kinds exist. `Syntax` covers every grammar violation and
//! carries the cursor's full position snapshot (byte offset, line, column).
//! `Unexpected` is the defensive catch-all for internal failures and carries
//! only the byte offset; the failure envelope preserves that asymmetry.

use miette::LabeledSpan;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{message}")]
    Syntax {
        message: String,
        position: usize,
        line: usize,
        column: usize,
    },
    #[error("Unexpected error: {message}")]
    Unexpected { message: String, position: usize },
}

impl ParseError {
    /// Byte offset of the failure in the source text.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Syntax { position, .. } => *position,
            ParseError::Unexpected { position, .. } => *position,
        }
    }

    /// Builds a human-facing diagnostic report annotated with the failure
    /// offset in `source`. Used by the CLI; the JSON envelope never goes
    /// through miette.
    pub fn to_report(&self, source: &str) -> miette::Report {
        let offset = self.position().min(source.len());
        let message = self.to_string();
        miette::miette!(
            labels = vec![LabeledSpan::at_offset(offset, "parse failed here")],
            code = "pss::parse",
            "{message}"
        )
        .with_source_code(source.to_string())
    }
}

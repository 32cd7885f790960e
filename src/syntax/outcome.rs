//! Result builder: the public parse entry and its two-shape envelope.
//!
//! `parse` is the crate's single entry point and never raises past this
//! boundary: grammar violations arrive as [`ParseError::Syntax`] values, and
//! any internal panic is trapped into [`ParseError::Unexpected`]. The
//! envelope's JSON shape is a compatibility contract:
//!
//! - success: `{"success": true, "data": <component>}`
//! - syntax failure: `{"success": false, "error", "position", "line", "column"}`
//! - unexpected failure: `{"success": false, "error", "position"}` — the
//!   catch-all deliberately omits `line`/`column`.

use std::panic::{self, AssertUnwindSafe};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::ast::Component;
use crate::syntax::cursor::Cursor;
use crate::syntax::error::ParseError;
use crate::syntax::parser::parse_source;

/// Outcome of one parse call: exactly one of the two shapes, never a hybrid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Success { data: Component },
    Failure(ParseError),
}

impl ParseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success { .. })
    }

    pub fn component(&self) -> Option<&Component> {
        match self {
            ParseOutcome::Success { data } => Some(data),
            ParseOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ParseError> {
        match self {
            ParseOutcome::Success { .. } => None,
            ParseOutcome::Failure(err) => Some(err),
        }
    }
}

/// Parses PSS source text into a [`ParseOutcome`].
///
/// Each call constructs a fresh cursor at offset 0, line 1, column 1; calls
/// are independent and reentrant. This function never panics: an unexpected
/// failure inside the recognizer is trapped and reported as the
/// position-only failure shape.
pub fn parse(source: &str) -> ParseOutcome {
    let mut cursor = Cursor::new(source);
    let result = panic::catch_unwind(AssertUnwindSafe(|| parse_source(&mut cursor)));
    match result {
        Ok(Ok(component)) => ParseOutcome::Success { data: component },
        Ok(Err(err)) => ParseOutcome::Failure(err),
        Err(payload) => ParseOutcome::Failure(ParseError::Unexpected {
            message: panic_message(payload.as_ref()),
            position: cursor.position(),
        }),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "internal parser failure".to_string()
    }
}

impl Serialize for ParseOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParseOutcome::Success { data } => {
                let mut state = serializer.serialize_struct("ParseOutcome", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            ParseOutcome::Failure(err) => match err {
                ParseError::Syntax {
                    position,
                    line,
                    column,
                    ..
                } => {
                    let mut state = serializer.serialize_struct("ParseOutcome", 5)?;
                    state.serialize_field("success", &false)?;
                    state.serialize_field("error", &err.to_string())?;
                    state.serialize_field("position", position)?;
                    state.serialize_field("line", line)?;
                    state.serialize_field("column", column)?;
                    state.end()
                }
                ParseError::Unexpected { position, .. } => {
                    let mut state = serializer.serialize_struct("ParseOutcome", 3)?;
                    state.serialize_field("success", &false)?;
                    state.serialize_field("error", &err.to_string())?;
                    state.serialize_field("position", position)?;
                    state.end()
                }
            },
        }
    }
}

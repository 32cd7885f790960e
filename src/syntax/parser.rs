//! Grammar recognizer for PSS.
//!
//! One function per production, all consuming tokens through a shared
//! [`Cursor`] and failing fast on the first violation:
//!
//! ```text
//! component  := "component" identifier "{" action* "}"
//! action     := "action" identifier "{" activity? "}" ";"?
//! activity   := "activity" "{" doStatement* "}"
//! doStatement:= "do" identifier ";"
//! identifier := (alnum | "_")+
//! ```
//!
//! The rules are purely syntactic: duplicate action names are rejected, but
//! `do` references are not checked against declared actions.

use crate::ast::{Action, Activity, Component, DoStatement};
use crate::syntax::cursor::Cursor;
use crate::syntax::error::ParseError;

/// Recognizes the whole input: leading trivia, exactly one component,
/// trailing trivia, end of input.
pub fn parse_source(cursor: &mut Cursor) -> Result<Component, ParseError> {
    cursor.skip_trivia();
    let component = parse_component(cursor)?;
    cursor.skip_trivia();
    if !cursor.at_end() {
        return Err(cursor.syntax_error(format!(
            "Unexpected trailing content at position {}",
            cursor.position()
        )));
    }
    Ok(component)
}

/// `component <name> { <action>* }`
pub fn parse_component(cursor: &mut Cursor) -> Result<Component, ParseError> {
    cursor.expect("component")?;
    let name = cursor.parse_identifier()?;
    cursor.expect("{")?;

    let mut component = Component::new(name);
    loop {
        cursor.skip_trivia();
        if cursor.current_char() == Some('}') {
            break;
        }
        // Each iteration must consume a full action; a malformed one fails
        // here rather than spinning.
        let action = parse_action(cursor)?;
        if component.contains_action(&action.name) {
            return Err(cursor.syntax_error(format!("Duplicate action '{}'", action.name)));
        }
        component.push_action(action);
    }
    cursor.expect("}")?;

    Ok(component)
}

/// `action <name> { <activity>? } ;?`
pub fn parse_action(cursor: &mut Cursor) -> Result<Action, ParseError> {
    cursor.expect("action")?;
    let name = cursor.parse_identifier()?;
    cursor.expect("{")?;

    // An immediate `}` means the action has no activity at all, not an
    // empty one.
    cursor.skip_trivia();
    let activity = if cursor.current_char() == Some('}') {
        None
    } else {
        Some(parse_activity(cursor)?)
    };

    cursor.expect("}")?;

    // The semicolon after an action body is optional.
    cursor.skip_trivia();
    if cursor.current_char() == Some(';') {
        cursor.advance();
    }

    Ok(Action { name, activity })
}

/// `activity { <doStatement>* }`
pub fn parse_activity(cursor: &mut Cursor) -> Result<Activity, ParseError> {
    cursor.expect("activity")?;
    cursor.expect("{")?;

    let mut sequence = Vec::new();
    loop {
        cursor.skip_trivia();
        if cursor.current_char() == Some('}') {
            break;
        }
        sequence.push(parse_do_statement(cursor)?);
    }
    cursor.expect("}")?;

    Ok(Activity { sequence })
}

/// `do <action_name> ;` — unlike action bodies, the semicolon is mandatory.
pub fn parse_do_statement(cursor: &mut Cursor) -> Result<DoStatement, ParseError> {
    cursor.expect("do")?;
    let action = cursor.parse_identifier()?;
    cursor.expect(";")?;
    Ok(DoStatement { action })
}

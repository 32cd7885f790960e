//! Stdio request/response front ends.
//!
//! Two thin wrappers around the parser's single entry point:
//!
//! - A line-based JSON-RPC stub: one JSON request per line on stdin, one
//!   JSON response per line on stdout. Only the `parse_pss` method exists;
//!   anything else gets a method-not-found error, and undecodable lines get
//!   a parse-error response with a null id.
//! - A tool-call handler that validates the `code` argument is a string
//!   before delegating and flags unsuccessful outcomes as errors.

use std::io::{self, BufRead};

use serde::Deserialize;
use serde_json::{json, Value};

use crate::syntax::parse;

/// An incoming JSON-RPC request. Unknown fields are ignored; a missing id
/// is echoed back as null.
#[derive(Debug, Deserialize)]
struct Request {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    method: String,
    #[serde(default)]
    params: Value,
}

/// A tool-call reply: the response body plus an error flag, mirroring
/// tool-protocol conventions where failures stay in-band but are marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    pub body: Value,
    pub is_error: bool,
}

/// Runs the stdio server loop until stdin closes. Blank lines are skipped.
pub fn run() -> io::Result<()> {
    eprintln!("PSS parser server started on stdio");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        println!("{}", handle_line(&line));
    }
    Ok(())
}

/// Decodes one request line and dispatches on its method name.
pub fn handle_line(line: &str) -> Value {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            return json!({
                "jsonrpc": "2.0",
                "id": Value::Null,
                "error": { "code": -32700, "message": format!("Parse error: {e}") }
            });
        }
    };

    match request.method.as_str() {
        "parse_pss" => json!({
            "jsonrpc": "2.0",
            "id": request.id,
            "result": handle_parse_call(&request.params)
        }),
        other => json!({
            "jsonrpc": "2.0",
            "id": request.id,
            "error": { "code": -32601, "message": format!("Method not found: {other}") }
        }),
    }
}

/// Validates the `code` argument and delegates to the parser. Accepts the
/// legacy `text` parameter name from older clients.
pub fn handle_parse_call(params: &Value) -> Value {
    let code = params.get("code").or_else(|| params.get("text"));
    match code {
        Some(Value::String(code)) => serde_json::to_value(parse(code)).unwrap_or_else(|e| {
            json!({ "success": false, "error": format!("Unexpected error: {e}") })
        }),
        _ => json!({ "success": false, "error": "Parameter 'code' must be a string" }),
    }
}

/// Tool-call entry: dispatches on the tool name and flags failures.
pub fn handle_tool_call(name: &str, arguments: &Value) -> ToolResponse {
    if name != "parse_pss" {
        return ToolResponse {
            body: json!({ "success": false, "error": format!("Unknown tool: {name}") }),
            is_error: true,
        };
    }
    let body = handle_parse_call(arguments);
    let is_error = body.get("success") != Some(&Value::Bool(true));
    ToolResponse { body, is_error }
}

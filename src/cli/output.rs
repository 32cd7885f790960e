//! Handles all user-facing output for the CLI.
//!
//! Centralizes banner framing, colored headings, and JSON rendering of parse
//! outcomes so every command presents results the same way. The JSON printed
//! here is the same envelope the library serializes; nothing is reshaped for
//! display.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::syntax::ParseOutcome;

const BANNER_WIDTH: usize = 70;

/// Prints a banner-framed, bold heading to stdout.
pub fn print_heading(text: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("{text}");
    println!("{}", "=".repeat(BANNER_WIDTH));
    let _ = stdout.reset();
}

/// Pretty-prints a parse outcome framed by banners.
pub fn print_outcome(outcome: &ParseOutcome) {
    println!();
    print_heading("PARSE RESULT (JSON)");
    match serde_json::to_string_pretty(outcome) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to render outcome: {e}"),
    }
    println!("{}", "=".repeat(BANNER_WIDTH));
}

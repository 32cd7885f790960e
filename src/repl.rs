//! Interactive menu front end.
//!
//! A numbered menu over stdin: parse code typed directly (terminated by a
//! lone `END` line), parse a file, parse the built-in example, or exit.
//! Every path funnels through the library's single `parse` entry and prints
//! the same JSON envelope.

use std::fs;
use std::io::{self, BufRead, Write};

use crate::cli::output;
use crate::syntax::parse;

/// Sample program offered by menu option 3.
pub const EXAMPLE_SOURCE: &str = "\
component pss_top {
    action A {};
    action B {};
    action C {
        activity {
            do A;
            do B;
        }
    }
    action D {
        activity {
            do C;
            do C;
        }
    }
    action test {
        activity {
            do A;
            do B;
            do C;
            do D;
        }
    }
}";

/// Runs the interactive menu until the user exits or stdin closes.
pub fn run_menu() -> io::Result<()> {
    output::print_heading("PSS Parser CLI Tool");
    println!();
    println!("Options:");
    println!("  1. Parse PSS code from stdin");
    println!("  2. Parse PSS code from file");
    println!("  3. Parse example");
    println!("  4. Exit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nSelect option (1-4): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF (Ctrl+D)
            println!("\nGoodbye!");
            return Ok(());
        };

        match line?.trim() {
            "1" => {
                println!("\nEnter PSS code (enter 'END' on a new line when done):");
                let mut code_lines = Vec::new();
                loop {
                    match lines.next() {
                        Some(line) => {
                            let line = line?;
                            if line == "END" {
                                break;
                            }
                            code_lines.push(line);
                        }
                        None => break,
                    }
                }
                let code = code_lines.join("\n");
                output::print_outcome(&parse(&code));
            }
            "2" => {
                print!("Enter file path: ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    println!("\nGoodbye!");
                    return Ok(());
                };
                let path = line?;
                match fs::read_to_string(path.trim()) {
                    Ok(code) => output::print_outcome(&parse(&code)),
                    Err(e) => println!("Error: could not read '{}': {e}", path.trim()),
                }
            }
            "3" => {
                println!("\nParsing example PSS code:");
                println!("{EXAMPLE_SOURCE}");
                output::print_outcome(&parse(EXAMPLE_SOURCE));
            }
            "4" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid option. Please select 1-4."),
        }
    }
}

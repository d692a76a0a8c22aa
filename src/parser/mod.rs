//! GCode Parser
//!
//! Recursive descent parser for the supported subset of G-code.
//! Produces an immutable `Program`; nothing here knows about machines.

pub mod ast;
pub mod grammar;
pub mod lexer;

pub use ast::{Decimal, Instruction, Line, Program};
pub use lexer::{Expected, Failure};

use crate::error::ParseError;

/// Parse a complete program text.
///
/// This is the main entry point for parsing. Any failure outside the two
/// optional points of a line aborts the whole parse.
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    match grammar::program(source) {
        Ok((program, rest)) => {
            if !rest.trim().is_empty() {
                log::debug!(
                    "ignoring {} bytes after the closing %",
                    rest.len()
                );
            }
            log::info!(
                "parsed program O{} with {} lines",
                program.number,
                program.lines.len()
            );
            Ok(program)
        }
        Err(failure) => Err(ParseError::at(source, failure.input, failure.to_string())),
    }
}

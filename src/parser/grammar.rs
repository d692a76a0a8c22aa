//! GCode Grammar
//!
//! Recursive descent over the lexer primitives:
//!
//! ```text
//! program        = "%" newline program_number newline { line } "%"
//! program_number = "O" integer
//! line           = [ line_number ] { instruction } newline
//! line_number    = "N" integer [ spaces ]
//! instruction    = letter signed_decimal [ spaces ]
//! newline        = [ spaces ] [ "(" comment ")" ] [ spaces ] "\n"
//! ```
//!
//! The two optional parts (the line number and the words of a line) are
//! attempted and, on failure, the rule carries on from the input it was
//! given.

use crate::parser::ast::{Instruction, Line, Program};
use crate::parser::lexer::{
    Expected, Failure, PResult, alpha, literal, newline_token, optional_spaces, signed_decimal,
    unsigned_integer,
};

/// Parses a complete program. Anything after the closing `%` is returned
/// untouched.
pub fn program(input: &str) -> PResult<'_, Program> {
    let (_, rest) = optional_spaces(input);
    let (_, rest) = literal("%", rest)?;
    let (_, rest) = newline_token(rest)?;
    let (number, rest) = program_number(rest)?;
    let (_, mut rest) = newline_token(rest)?;

    let mut lines = Vec::new();
    while !rest.starts_with('%') {
        let (parsed, tail) = line(rest)?;
        lines.push(parsed);
        rest = tail;
    }

    let (_, rest) = literal("%", rest)?;
    Ok((Program::new(number, lines), rest))
}

/// `O` followed by the program number, which must fit in a `u64`
pub fn program_number(input: &str) -> PResult<'_, u64> {
    let (_, rest) = literal("O", input)?;
    let (digits, tail) = unsigned_integer(rest)?;
    match digits.parse() {
        Ok(number) => Ok((number, tail)),
        Err(_) => Err(Failure::new(rest, Expected::ProgramNumberInRange)),
    }
}

/// `N` followed by the line number digits and optional spaces.
///
/// The digits are returned as written; they are never converted, so any
/// length is accepted.
pub fn line_number(input: &str) -> PResult<'_, &str> {
    let (_, rest) = literal("N", input)?;
    let (digits, rest) = unsigned_integer(rest)?;
    let (_, rest) = optional_spaces(rest);
    Ok((digits, rest))
}

/// One line: optional line number, any number of words, then a line ending.
///
/// The line number is accepted but not kept. Words are taken until one fails
/// to parse; whatever is left must then be a valid line ending.
pub fn line(input: &str) -> PResult<'_, Line> {
    let mut rest = match line_number(input) {
        Ok((number, rest)) => {
            log::trace!("skipping line number N{}", number);
            rest
        }
        Err(_) => input,
    };

    let mut instructions = Vec::new();
    while let Ok((parsed, tail)) = instruction(rest) {
        log::trace!("parsed instruction {}", parsed);
        instructions.push(parsed);
        rest = tail;
    }

    let (_, rest) = newline_token(rest)?;
    Ok((Line::new(instructions), rest))
}

/// A word: uppercase letter, signed decimal, optional spaces
pub fn instruction(input: &str) -> PResult<'_, Instruction> {
    let (letter, rest) = letter(input)?;
    let (argument, rest) =
        signed_decimal(rest).map_err(|failure| Failure::new(input, failure.expected))?;
    let (_, rest) = optional_spaces(rest);

    match Instruction::new(letter, argument) {
        Some(instruction) => Ok((instruction, rest)),
        None => Err(Failure::new(input, Expected::Uppercase)),
    }
}

/// An uppercase letter. Lowercase input is rejected, not normalized.
fn letter(input: &str) -> PResult<'_, char> {
    let (ch, rest) = alpha(input)?;
    if ch.is_ascii_uppercase() {
        Ok((ch, rest))
    } else {
        Err(Failure::new(input, Expected::Uppercase))
    }
}

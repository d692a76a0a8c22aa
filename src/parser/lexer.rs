//! GCode Lexer
//!
//! Character-level primitives for the recursive descent parser.
//!
//! Every primitive takes the unconsumed input and returns the matched token
//! together with the remaining input. A failure carries the slice the
//! primitive was called with, untouched, so a caller can retry another rule
//! on the same input without rewinding anything.

use std::fmt;

use crate::parser::ast::Decimal;

/// What a primitive or grammar rule expected to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// An exact piece of text, like "%" or "O"
    Literal(&'static str),
    /// A single alphabetic character
    Alpha,
    /// A single uppercase letter starting a word
    Uppercase,
    /// A single decimal digit
    Digit,
    /// A program number that fits in a `u64`
    ProgramNumberInRange,
    /// A comment closed by ")" on the same line
    CommentEnd,
    /// A line break, optionally preceded by spaces and a comment
    Newline,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Literal(needle) => write!(f, "Expected {:?}", needle),
            Expected::Alpha => write!(f, "Expected alphabet character"),
            Expected::Uppercase => write!(f, "Expected uppercase letter"),
            Expected::Digit => write!(f, "Expected integer value"),
            Expected::ProgramNumberInRange => {
                write!(f, "Program number out of range (at most {})", u64::MAX)
            }
            Expected::CommentEnd => write!(f, "Expected \")\" closing the comment"),
            Expected::Newline => write!(f, "Expected newline"),
        }
    }
}

/// A failed match, referencing the input the rule was attempted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure<'a> {
    pub input: &'a str,
    pub expected: Expected,
}

impl<'a> Failure<'a> {
    pub fn new(input: &'a str, expected: Expected) -> Self {
        Self { input, expected }
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.input.is_empty() {
            write!(f, "{} (found end of input)", self.expected)
        } else {
            write!(f, "{}", self.expected)
        }
    }
}

/// Result of a primitive: the token and the remaining input
pub type PResult<'a, T> = Result<(T, &'a str), Failure<'a>>;

/// Checks that the input starts with `needle`
pub fn literal<'a>(needle: &'static str, input: &'a str) -> PResult<'a, &'a str> {
    match input.strip_prefix(needle) {
        Some(rest) => Ok((&input[..needle.len()], rest)),
        None => Err(Failure::new(input, Expected::Literal(needle))),
    }
}

fn one_char(input: &str, accept: impl Fn(char) -> bool, expected: Expected) -> PResult<'_, char> {
    let mut chars = input.chars();
    match chars.next() {
        Some(ch) if accept(ch) => Ok((ch, chars.as_str())),
        _ => Err(Failure::new(input, expected)),
    }
}

/// Consumes one alphabetic character
pub fn alpha(input: &str) -> PResult<'_, char> {
    one_char(input, |ch| ch.is_ascii_alphabetic(), Expected::Alpha)
}

/// Consumes one decimal digit
pub fn digit(input: &str) -> PResult<'_, char> {
    one_char(input, |ch| ch.is_ascii_digit(), Expected::Digit)
}

/// Consumes one or more digits, as many as there are
pub fn unsigned_integer(input: &str) -> PResult<'_, &str> {
    let (_, mut rest) = digit(input)?;
    while let Ok((_, tail)) = digit(rest) {
        rest = tail;
    }
    let len = input.len() - rest.len();
    Ok((&input[..len], rest))
}

/// Consumes a signed decimal like `-0.123`, `7` or `123.`
///
/// The integer part is mandatory, the sign and the fraction are optional.
/// A `.` may be followed by no digits at all, in which case the value is
/// integral. Exponents are not supported.
pub fn signed_decimal(input: &str) -> PResult<'_, Decimal> {
    let (negative, rest) = match literal("-", input) {
        Ok((_, rest)) => (true, rest),
        Err(_) => (false, input),
    };

    let (integer, rest) = unsigned_integer(rest).map_err(|_| Failure::new(input, Expected::Digit))?;

    let (fraction, rest) = match literal(".", rest) {
        Ok((_, after_dot)) => match unsigned_integer(after_dot) {
            Ok((fraction, rest)) => (fraction, rest),
            Err(_) => ("", after_dot),
        },
        Err(_) => ("", rest),
    };

    Ok((Decimal::new(negative, integer, fraction), rest))
}

/// Consumes zero or more spaces. Never fails.
pub fn optional_spaces(input: &str) -> (&str, &str) {
    let rest = input.trim_start_matches(' ');
    (&input[..input.len() - rest.len()], rest)
}

/// Consumes a line ending: spaces, an optional `( ... )` comment, spaces and
/// a mandatory `\n`.
///
/// Returns the comment text without its parentheses. Comments cannot nest
/// and cannot span lines.
pub fn newline_token(input: &str) -> PResult<'_, Option<&str>> {
    let (_, rest) = optional_spaces(input);

    let (comment, rest) = match literal("(", rest) {
        Ok((_, body)) => {
            let end = body
                .find([')', '(', '\n'])
                .filter(|&idx| body[idx..].starts_with(')'))
                .ok_or(Failure::new(input, Expected::CommentEnd))?;
            let (_, rest) = optional_spaces(&body[end + 1..]);
            (Some(&body[..end]), rest)
        }
        Err(_) => (None, rest),
    };

    match literal("\n", rest) {
        Ok((_, rest)) => Ok((comment, rest)),
        Err(_) => Err(Failure::new(input, Expected::Newline)),
    }
}

//! Abstract Syntax Tree for GCode
//!
//! Plain data produced by the parser. A `Program` is built once and only
//! read afterwards.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::parser::{grammar, lexer};

/// A whole program between the opening and closing `%`
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Program number from the `O` word
    pub number: u64,
    /// Lines in source order, including empty ones
    pub lines: Vec<Line>,
}

impl Program {
    pub fn new(number: u64, lines: Vec<Line>) -> Self {
        Self { number, lines }
    }
}

/// One block of the program. Word order is significant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub instructions: Vec<Instruction>,
}

impl Line {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single word like `X-1.5`: an uppercase letter and its argument
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    letter: char,
    argument: Decimal,
}

impl Instruction {
    /// Returns `None` unless `letter` is an uppercase ASCII letter.
    pub fn new(letter: char, argument: Decimal) -> Option<Self> {
        letter
            .is_ascii_uppercase()
            .then_some(Self { letter, argument })
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn argument(&self) -> &Decimal {
        &self.argument
    }
}

/// A signed decimal argument.
///
/// Keeps the canonical source text (sign, integer digits and fraction
/// digits, without a dangling `.`) next to its value, so codes like `G00`
/// can be matched on their digits.
#[derive(Debug, Clone, PartialEq)]
pub struct Decimal {
    text: String,
    value: f64,
}

impl Decimal {
    /// `integer` must be non-empty and both digit strings ASCII digits only.
    pub(crate) fn new(negative: bool, integer: &str, fraction: &str) -> Self {
        let mut text = String::with_capacity(integer.len() + fraction.len() + 2);
        if negative {
            text.push('-');
        }
        text.push_str(integer);
        if !fraction.is_empty() {
            text.push('.');
            text.push_str(fraction);
        }
        // digits with an optional sign and fraction always parse
        let value = text.parse().unwrap_or(f64::NAN);
        Self { text, value }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn has_fraction(&self) -> bool {
        self.text.contains('.')
    }

    /// The argument as an integer, if it has no fraction digits and fits.
    pub fn to_integer(&self) -> Option<i64> {
        if self.has_fraction() {
            None
        } else {
            self.text.parse().ok()
        }
    }
}

impl FromStr for Decimal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match lexer::signed_decimal(s) {
            Ok((decimal, "")) => Ok(decimal),
            Ok((_, rest)) => Err(ParseError::at(s, rest, "Unexpected trailing characters")),
            Err(failure) => Err(ParseError::at(s, failure.input, failure.to_string())),
        }
    }
}

impl FromStr for Instruction {
    type Err = ParseError;

    /// Parses a single word such as `G01` or `X-2.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match grammar::instruction(s) {
            Ok((instruction, "")) => Ok(instruction),
            Ok((_, rest)) => Err(ParseError::at(s, rest, "Unexpected trailing characters")),
            Err(failure) => Err(ParseError::at(s, failure.input, failure.to_string())),
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.argument)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, instruction) in self.instructions.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", instruction)?;
        }
        Ok(())
    }
}

impl fmt::Display for Program {
    /// Renders canonical program text, comments and line numbers dropped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "%")?;
        writeln!(f, "O{}", self.number)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        write!(f, "%")
    }
}

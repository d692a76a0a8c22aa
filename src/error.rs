//! Error types
//!
//! One error type per stage: parsing, controller commands, execution and
//! configuration. The binary wraps these with `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

/// A program text could not be parsed.
///
/// There is no partial result: the first unrecovered failure aborts the
/// whole parse.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {line}, column {column}: {message}")]
pub struct ParseError {
    /// What the parser expected at the failure point
    pub message: String,
    /// Byte offset of the failure point in the source
    pub offset: usize,
    /// 1-based line of the failure point
    pub line: usize,
    /// 1-based column (in characters) of the failure point
    pub column: usize,
    /// Unconsumed input at the failure point
    pub remaining: String,
}

impl ParseError {
    /// Build an error for a failure at `remaining`, which must be a suffix of
    /// `source`.
    pub(crate) fn at(source: &str, remaining: &str, message: impl Into<String>) -> Self {
        let offset = source.len().saturating_sub(remaining.len());
        let consumed = &source[..offset];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |idx| idx + 1);
        let column = consumed[line_start..].chars().count() + 1;

        Self {
            message: message.into(),
            offset,
            line,
            column,
            remaining: remaining.to_string(),
        }
    }
}

/// A motion controller failed to carry out a command.
#[derive(Error, Debug)]
pub enum ControllerError {
    /// Writing the command to the output sink failed
    #[error("failed to write command: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the command for the output sink failed
    #[error("failed to encode command: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The controller refused the command
    #[error("controller rejected {command}: {reason}")]
    Rejected { command: String, reason: String },
}

/// Executing a parsed program failed.
///
/// The interpreter does not retry and gives no guarantee about its state
/// after one of these.
#[derive(Error, Debug)]
pub enum ExecError {
    /// An argument could not be converted to the type its handler needs
    #[error("cannot convert {letter}{argument} to {target}")]
    NumericConversion {
        letter: char,
        argument: String,
        target: &'static str,
    },

    /// The motion controller failed
    #[error(transparent)]
    Controller(#[from] ControllerError),
}

/// Loading configuration failed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("precision must be at most {max}, got {value}")]
    Precision { value: usize, max: usize },
}

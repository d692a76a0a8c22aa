//! G-code Interpreter
//!
//! Translates a program written in a small subset of G-code into commands
//! for a CNC motion controller.
//!
//! This library provides:
//! - A recursive descent parser producing an immutable `Program`
//! - An interpreter that keeps machine state and drives a `MotionController`
//! - Controllers that print or record the issued commands
//! - Configuration for the `gcode-run` binary
//!
//! Supported codes: `G00`, `G01`, `G28`, `M06`, `M09`, `M30`, `T`, `S`, `F`
//! and the `X`, `Y`, `Z` axis words. `G54`, `G90`, `G91`, `M03` and `M05`
//! are accepted and ignored, as is any other letter or code.
//!
//! The program number after `O` must fit in a `u64`. Line numbers after `N`
//! may have any number of digits; they are checked and then dropped.

pub mod config;
pub mod error;
pub mod interpreter;
pub mod machine;
pub mod parser;
pub mod runner;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

// Re-exports for clean public API
pub use config::Config;
pub use error::{ControllerError, ExecError, ParseError};
pub use interpreter::{Interpreter, RunState};
pub use machine::{Command, MachineClient, MotionController, RecordingController};
pub use parser::{Program, parse_program};

/// Read and parse a program file
pub fn load_program(path: &Path) -> Result<Program> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_program(&source).with_context(|| format!("failed to parse {}", path.display()))
}

/// Read, parse and execute a program file against `controller`.
///
/// Nothing is executed unless the whole file parses.
pub fn load_and_execute<C: MotionController>(path: &Path, controller: C) -> Result<RunState> {
    let program = load_program(path)?;
    let mut interpreter = Interpreter::new(controller);
    interpreter
        .execute(&program)
        .with_context(|| format!("failed to execute {}", path.display()))
}

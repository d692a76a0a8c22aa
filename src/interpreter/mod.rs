//! Program Interpreter
//!
//! Executes a parsed `Program` against a `MotionController`, keeping the
//! machine state (target, selected tool, pending move) between words.

pub mod codes;
pub mod engine;

pub use codes::{Address, GCode, MCode};
pub use engine::{Flow, Interpreter, RunState};

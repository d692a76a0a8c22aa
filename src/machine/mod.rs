//! Motion Controller
//!
//! The interface the interpreter drives, and the commands it issues.

pub mod client;

pub use client::{MachineClient, OutputFormat, RecordingController};

use std::fmt;

use serde::Serialize;

use crate::error::ControllerError;
use crate::parser::Decimal;

/// Identifier of a tool, as written after `T`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Decimal> for ToolId {
    fn from(argument: &Decimal) -> Self {
        Self(argument.as_str().to_string())
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Absolute machine coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Operations of a CNC motion controller.
///
/// Calls are synchronous. Any error is passed straight back to whoever runs
/// the program.
pub trait MotionController {
    /// Linear move to an absolute target
    fn move_to(&mut self, x: f64, y: f64, z: f64) -> Result<(), ControllerError>;

    /// Return to the machine home position
    fn home(&mut self) -> Result<(), ControllerError>;

    /// Automatic tool change. `None` when no tool was ever selected.
    fn change_tool(&mut self, tool: Option<&ToolId>) -> Result<(), ControllerError>;

    fn set_spindle_speed(&mut self, rpm: i64) -> Result<(), ControllerError>;

    fn set_feed_rate(&mut self, rate: f64) -> Result<(), ControllerError>;

    fn coolant_off(&mut self) -> Result<(), ControllerError>;
}

impl<C: MotionController + ?Sized> MotionController for &mut C {
    fn move_to(&mut self, x: f64, y: f64, z: f64) -> Result<(), ControllerError> {
        (**self).move_to(x, y, z)
    }

    fn home(&mut self) -> Result<(), ControllerError> {
        (**self).home()
    }

    fn change_tool(&mut self, tool: Option<&ToolId>) -> Result<(), ControllerError> {
        (**self).change_tool(tool)
    }

    fn set_spindle_speed(&mut self, rpm: i64) -> Result<(), ControllerError> {
        (**self).set_spindle_speed(rpm)
    }

    fn set_feed_rate(&mut self, rate: f64) -> Result<(), ControllerError> {
        (**self).set_feed_rate(rate)
    }

    fn coolant_off(&mut self) -> Result<(), ControllerError> {
        (**self).coolant_off()
    }
}

/// A command as issued to a controller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Move { x: f64, y: f64, z: f64 },
    Home,
    ChangeTool { tool: Option<ToolId> },
    SetSpindleSpeed { rpm: i64 },
    SetFeedRate { rate: f64 },
    CoolantOff,
}

impl fmt::Display for Command {
    /// Human-readable form. The formatter precision (default 3) applies to
    /// coordinates and feed rate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        match self {
            Command::Move { x, y, z } => write!(
                f,
                "MOVE X{:.*} Y{:.*} Z{:.*}",
                precision, x, precision, y, precision, z
            ),
            Command::Home => write!(f, "HOME"),
            Command::ChangeTool { tool: Some(tool) } => write!(f, "CHANGE TOOL T{}", tool),
            Command::ChangeTool { tool: None } => write!(f, "CHANGE TOOL (none selected)"),
            Command::SetSpindleSpeed { rpm } => write!(f, "SPINDLE SPEED {}", rpm),
            Command::SetFeedRate { rate } => write!(f, "FEED RATE {:.*}", precision, rate),
            Command::CoolantOff => write!(f, "COOLANT OFF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let command = Command::Move { x: 1.0, y: -2.5, z: 0.0 };
        assert_eq!(command.to_string(), "MOVE X1.000 Y-2.500 Z0.000");
        assert_eq!(format!("{:.1}", command), "MOVE X1.0 Y-2.5 Z0.0");

        let command = Command::ChangeTool { tool: Some(ToolId::new("02")) };
        assert_eq!(command.to_string(), "CHANGE TOOL T02");
        assert_eq!(Command::SetSpindleSpeed { rpm: 1200 }.to_string(), "SPINDLE SPEED 1200");
    }

    #[test]
    fn test_command_json() {
        let json = serde_json::to_string(&Command::SetFeedRate { rate: 150.0 }).unwrap();
        assert_eq!(json, r#"{"command":"set_feed_rate","rate":150.0}"#);

        let json = serde_json::to_string(&Command::ChangeTool { tool: Some(ToolId::new("3")) })
            .unwrap();
        assert_eq!(json, r#"{"command":"change_tool","tool":"3"}"#);

        let json = serde_json::to_string(&Command::Home).unwrap();
        assert_eq!(json, r#"{"command":"home"}"#);
    }

    #[test]
    fn test_tool_id_from_argument() {
        let argument: Decimal = "02".parse().unwrap();
        assert_eq!(ToolId::from(&argument).as_str(), "02");
    }
}

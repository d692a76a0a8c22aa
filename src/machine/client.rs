//! Controllers shipped with the crate.
//!
//! `MachineClient` writes every command to an output sink, one per line.
//! `RecordingController` keeps them in memory.

use std::io::Write;

use clap::ValueEnum;
use serde::Deserialize;

use super::{Command, MotionController, Position, ToolId};
use crate::error::ControllerError;

/// How `MachineClient` renders commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per command
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Controller that streams commands to a writer
#[derive(Debug)]
pub struct MachineClient<W: Write> {
    out: W,
    format: OutputFormat,
    precision: usize,
    issued: usize,
}

impl<W: Write> MachineClient<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            precision: 3,
            issued: 0,
        }
    }

    /// Decimal places for coordinates and feed rates in text output
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Number of commands written so far
    pub fn commands_issued(&self) -> usize {
        self.issued
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, command: Command) -> Result<(), ControllerError> {
        log::debug!("issuing {:?}", command);
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{:.*}", self.precision, command)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &command)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        self.issued += 1;
        Ok(())
    }
}

impl<W: Write> MotionController for MachineClient<W> {
    fn move_to(&mut self, x: f64, y: f64, z: f64) -> Result<(), ControllerError> {
        self.emit(Command::Move { x, y, z })
    }

    fn home(&mut self) -> Result<(), ControllerError> {
        self.emit(Command::Home)
    }

    fn change_tool(&mut self, tool: Option<&ToolId>) -> Result<(), ControllerError> {
        if tool.is_none() {
            log::warn!("tool change requested before any tool was selected");
        }
        self.emit(Command::ChangeTool {
            tool: tool.cloned(),
        })
    }

    fn set_spindle_speed(&mut self, rpm: i64) -> Result<(), ControllerError> {
        self.emit(Command::SetSpindleSpeed { rpm })
    }

    fn set_feed_rate(&mut self, rate: f64) -> Result<(), ControllerError> {
        self.emit(Command::SetFeedRate { rate })
    }

    fn coolant_off(&mut self) -> Result<(), ControllerError> {
        self.emit(Command::CoolantOff)
    }
}

/// Controller that records every command in issue order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingController {
    commands: Vec<Command>,
}

impl RecordingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// Targets of all move commands, in order
    pub fn moves(&self) -> Vec<Position> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                Command::Move { x, y, z } => Some(Position::new(*x, *y, *z)),
                _ => None,
            })
            .collect()
    }
}

impl MotionController for RecordingController {
    fn move_to(&mut self, x: f64, y: f64, z: f64) -> Result<(), ControllerError> {
        self.commands.push(Command::Move { x, y, z });
        Ok(())
    }

    fn home(&mut self) -> Result<(), ControllerError> {
        self.commands.push(Command::Home);
        Ok(())
    }

    fn change_tool(&mut self, tool: Option<&ToolId>) -> Result<(), ControllerError> {
        self.commands.push(Command::ChangeTool {
            tool: tool.cloned(),
        });
        Ok(())
    }

    fn set_spindle_speed(&mut self, rpm: i64) -> Result<(), ControllerError> {
        self.commands.push(Command::SetSpindleSpeed { rpm });
        Ok(())
    }

    fn set_feed_rate(&mut self, rate: f64) -> Result<(), ControllerError> {
        self.commands.push(Command::SetFeedRate { rate });
        Ok(())
    }

    fn coolant_off(&mut self) -> Result<(), ControllerError> {
        self.commands.push(Command::CoolantOff);
        Ok(())
    }
}

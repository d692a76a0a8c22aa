//! Interpreter Engine
//!
//! Walks a parsed program line by line and drives a motion controller.
//!
//! Axis words only update the pending target. A `G00`/`G01` anywhere on a
//! line marks it as a move, and the move is issued once, after the last word
//! of the line, with the target as it stands then. The target carries over
//! between lines.

use crate::error::ExecError;
use crate::interpreter::codes::{Address, GCode, MCode};
use crate::machine::{MotionController, Position, ToolId};
use crate::parser::{Decimal, Instruction, Line, Program};

/// Execution state of an interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// Reached `M30`. Terminal.
    Halted,
}

/// Outcome of a single instruction or line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Halt,
}

/// Single-pass interpreter over one controller.
///
/// State is owned by the instance. Run concurrent programs with separate
/// interpreters.
#[derive(Debug)]
pub struct Interpreter<C> {
    controller: C,
    selected_tool: Option<ToolId>,
    target: Position,
    should_move: bool,
    run_state: RunState,
}

impl<C: MotionController> Interpreter<C> {
    pub fn new(controller: C) -> Self {
        Self {
            controller,
            selected_tool: None,
            target: Position::default(),
            should_move: false,
            run_state: RunState::Running,
        }
    }

    /// Runs every line of `program` in order, stopping at `M30`.
    ///
    /// Once halted, further calls return immediately.
    pub fn execute(&mut self, program: &Program) -> Result<RunState, ExecError> {
        if self.run_state == RunState::Halted {
            log::debug!("interpreter already halted, skipping program O{}", program.number);
            return Ok(self.run_state);
        }

        log::info!("executing program O{}", program.number);
        for (index, line) in program.lines.iter().enumerate() {
            log::debug!("block {}: {}", index + 1, line);
            if self.execute_line(line)? == Flow::Halt {
                self.run_state = RunState::Halted;
                log::info!("program O{} ended by M30 in block {}", program.number, index + 1);
                return Ok(self.run_state);
            }
        }

        log::info!("program O{} finished without M30", program.number);
        Ok(self.run_state)
    }

    /// Runs one line. A halt skips the rest of the line and its move.
    fn execute_line(&mut self, line: &Line) -> Result<Flow, ExecError> {
        self.should_move = false;

        for instruction in line {
            if self.dispatch(instruction)? == Flow::Halt {
                return Ok(Flow::Halt);
            }
        }

        if self.should_move {
            let Position { x, y, z } = self.target;
            self.controller.move_to(x, y, z)?;
        }
        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, instruction: &Instruction) -> Result<Flow, ExecError> {
        let argument = instruction.argument();
        match Address::of(instruction.letter()) {
            Address::FeedRate => self.controller.set_feed_rate(argument.value())?,
            Address::Preparatory => self.handle_g(argument)?,
            Address::Miscellaneous => return self.handle_m(argument),
            Address::SpindleSpeed => {
                let rpm = argument
                    .to_integer()
                    .ok_or_else(|| ExecError::NumericConversion {
                        letter: instruction.letter(),
                        argument: argument.to_string(),
                        target: "integer",
                    })?;
                self.controller.set_spindle_speed(rpm)?;
            }
            Address::ToolSelect => self.selected_tool = Some(ToolId::from(argument)),
            Address::AxisX => self.target.x = argument.value(),
            Address::AxisY => self.target.y = argument.value(),
            Address::AxisZ => self.target.z = argument.value(),
            Address::Unassigned => {}
        }
        Ok(Flow::Continue)
    }

    fn handle_g(&mut self, argument: &Decimal) -> Result<(), ExecError> {
        match GCode::from(argument) {
            // both collapse to the controller's single linear move
            GCode::RapidPositioning | GCode::LinearInterpolation => self.should_move = true,
            GCode::ReturnHome => self.controller.home()?,
            GCode::WorkCoordinateSystem
            | GCode::AbsoluteProgramming
            | GCode::IncrementalProgramming => {}
            GCode::Unrecognized => log::warn!("ignoring unsupported code G{}", argument),
        }
        Ok(())
    }

    fn handle_m(&mut self, argument: &Decimal) -> Result<Flow, ExecError> {
        match MCode::from(argument) {
            MCode::SpindleOnClockwise | MCode::SpindleStop => {}
            MCode::ToolChange => self.controller.change_tool(self.selected_tool.as_ref())?,
            MCode::CoolantOff => self.controller.coolant_off()?,
            MCode::EndOfProgram => return Ok(Flow::Halt),
            MCode::Unrecognized => log::warn!("ignoring unsupported code M{}", argument),
        }
        Ok(Flow::Continue)
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Current target, including axis values carried over from earlier lines
    pub fn target(&self) -> Position {
        self.target
    }

    pub fn selected_tool(&self) -> Option<&ToolId> {
        self.selected_tool.as_ref()
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn into_controller(self) -> C {
        self.controller
    }
}

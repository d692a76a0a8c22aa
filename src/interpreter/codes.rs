//! Word addresses and G/M codes understood by the interpreter.
//!
//! Every letter and every code maps to something. Codes that are accepted
//! but not acted upon have their own variants, so they stay visible here.

use crate::parser::Decimal;

/// What the interpreter does with a word, by its letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    /// `F`: feed rate
    FeedRate,
    /// `G`: preparatory code
    Preparatory,
    /// `M`: miscellaneous code
    Miscellaneous,
    /// `S`: spindle speed
    SpindleSpeed,
    /// `T`: tool selection
    ToolSelect,
    AxisX,
    AxisY,
    AxisZ,
    /// Letters with no handler. Ignored.
    Unassigned,
}

use Address::*;

/// Handler for each letter from `A` to `Z`
const DISPATCH_TABLE: [Address; 26] = [
    Unassigned,    // A
    Unassigned,    // B
    Unassigned,    // C
    Unassigned,    // D
    Unassigned,    // E
    FeedRate,      // F
    Preparatory,   // G
    Unassigned,    // H
    Unassigned,    // I
    Unassigned,    // J
    Unassigned,    // K
    Unassigned,    // L
    Miscellaneous, // M
    Unassigned,    // N
    Unassigned,    // O
    Unassigned,    // P
    Unassigned,    // Q
    Unassigned,    // R
    SpindleSpeed,  // S
    ToolSelect,    // T
    Unassigned,    // U
    Unassigned,    // V
    Unassigned,    // W
    AxisX,         // X
    AxisY,         // Y
    AxisZ,         // Z
];

impl Address {
    /// Looks up the handler for a word letter.
    pub fn of(letter: char) -> Self {
        if !letter.is_ascii_uppercase() {
            return Unassigned;
        }
        DISPATCH_TABLE[(letter as u8 - b'A') as usize]
    }
}

/// Preparatory codes, matched on their two-digit text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GCode {
    /// `G00`
    RapidPositioning,
    /// `G01`
    LinearInterpolation,
    /// `G28`
    ReturnHome,
    /// `G54`, work coordinate systems are not implemented
    WorkCoordinateSystem,
    /// `G90`, not implemented
    AbsoluteProgramming,
    /// `G91`, not implemented
    IncrementalProgramming,
    Unrecognized,
}

impl From<&Decimal> for GCode {
    fn from(argument: &Decimal) -> Self {
        match argument.as_str() {
            "00" => GCode::RapidPositioning,
            "01" => GCode::LinearInterpolation,
            "28" => GCode::ReturnHome,
            "54" => GCode::WorkCoordinateSystem,
            "90" => GCode::AbsoluteProgramming,
            "91" => GCode::IncrementalProgramming,
            _ => GCode::Unrecognized,
        }
    }
}

/// Miscellaneous codes, matched on their two-digit text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MCode {
    /// `M03`, not implemented
    SpindleOnClockwise,
    /// `M05`, not implemented
    SpindleStop,
    /// `M06`
    ToolChange,
    /// `M09`
    CoolantOff,
    /// `M30`
    EndOfProgram,
    Unrecognized,
}

impl From<&Decimal> for MCode {
    fn from(argument: &Decimal) -> Self {
        match argument.as_str() {
            "03" => MCode::SpindleOnClockwise,
            "05" => MCode::SpindleStop,
            "06" => MCode::ToolChange,
            "09" => MCode::CoolantOff,
            "30" => MCode::EndOfProgram,
            _ => MCode::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn test_dispatch_table_letters() {
        assert_eq!(Address::of('F'), FeedRate);
        assert_eq!(Address::of('G'), Preparatory);
        assert_eq!(Address::of('M'), Miscellaneous);
        assert_eq!(Address::of('S'), SpindleSpeed);
        assert_eq!(Address::of('T'), ToolSelect);
        assert_eq!(Address::of('X'), AxisX);
        assert_eq!(Address::of('Y'), AxisY);
        assert_eq!(Address::of('Z'), AxisZ);

        let assigned = ('A'..='Z').filter(|&l| Address::of(l) != Unassigned).count();
        assert_eq!(assigned, 8);
        assert_eq!(Address::of('g'), Unassigned);
    }

    #[test]
    fn test_g_codes() {
        assert_eq!(GCode::from(&arg("00")), GCode::RapidPositioning);
        assert_eq!(GCode::from(&arg("01")), GCode::LinearInterpolation);
        assert_eq!(GCode::from(&arg("28")), GCode::ReturnHome);
        assert_eq!(GCode::from(&arg("54")), GCode::WorkCoordinateSystem);
        assert_eq!(GCode::from(&arg("90")), GCode::AbsoluteProgramming);
        assert_eq!(GCode::from(&arg("91")), GCode::IncrementalProgramming);
        assert_eq!(GCode::from(&arg("02")), GCode::Unrecognized);
        // codes are matched on their digits, not their value
        assert_eq!(GCode::from(&arg("1")), GCode::Unrecognized);
        assert_eq!(GCode::from(&arg("01.")), GCode::LinearInterpolation);
    }

    #[test]
    fn test_m_codes() {
        assert_eq!(MCode::from(&arg("03")), MCode::SpindleOnClockwise);
        assert_eq!(MCode::from(&arg("05")), MCode::SpindleStop);
        assert_eq!(MCode::from(&arg("06")), MCode::ToolChange);
        assert_eq!(MCode::from(&arg("09")), MCode::CoolantOff);
        assert_eq!(MCode::from(&arg("30")), MCode::EndOfProgram);
        assert_eq!(MCode::from(&arg("6")), MCode::Unrecognized);
        assert_eq!(MCode::from(&arg("-30")), MCode::Unrecognized);
    }
}

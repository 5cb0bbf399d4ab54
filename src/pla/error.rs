//! Error types for PLA format parsing and writing

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::qm::QmError;

/// Errors related to PLA format parsing and validation
///
/// These errors occur when reading PLA text that does not describe a
/// single-output function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PLAError {
    /// No `.i` directive and no cube to infer the input count from
    MissingInputDirective,
    /// Invalid value in `.i` directive
    InvalidInputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Invalid value in `.o` directive
    InvalidOutputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// More than one output declared
    UnsupportedOutputCount {
        /// The declared output count
        count: usize,
    },
    /// Input count outside the range the minimiser accepts
    InputCountOutOfRange {
        /// The declared input count
        count: usize,
        /// The smallest supported count
        min: usize,
        /// The largest supported count
        max: usize,
    },
    /// Invalid character in input portion of a cube
    InvalidInputCharacter {
        /// The invalid character
        character: char,
        /// 1-based line of the cube
        line: usize,
        /// Position in the input string
        position: usize,
    },
    /// Invalid character in output portion of a cube
    InvalidOutputCharacter {
        /// The invalid character
        character: char,
        /// 1-based line of the cube
        line: usize,
    },
    /// Cube width does not match the declared input count plus one output
    CubeDimensionMismatch {
        /// 1-based line of the cube
        line: usize,
        /// Expected number of inputs
        expected_inputs: usize,
        /// Width of the cube after removing whitespace
        actual_width: usize,
    },
}

impl fmt::Display for PLAError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAError::MissingInputDirective => {
                write!(f, "PLA file missing .i directive and no cubes to infer from")
            }
            PLAError::InvalidInputDirective { value } => {
                write!(f, "Invalid .i directive value: '{}'", value)
            }
            PLAError::InvalidOutputDirective { value } => {
                write!(f, "Invalid .o directive value: '{}'", value)
            }
            PLAError::UnsupportedOutputCount { count } => {
                write!(f, "Only single-output PLA files are supported (found .o {})", count)
            }
            PLAError::InputCountOutOfRange { count, min, max } => write!(
                f,
                "PLA declares {} inputs, supported range is {}..={}",
                count, min, max
            ),
            PLAError::InvalidInputCharacter {
                character,
                line,
                position,
            } => write!(
                f,
                "Invalid input character '{}' at position {} on line {}",
                character, position, line
            ),
            PLAError::InvalidOutputCharacter { character, line } => {
                write!(f, "Invalid output character '{}' on line {}", character, line)
            }
            PLAError::CubeDimensionMismatch {
                line,
                expected_inputs,
                actual_width,
            } => write!(
                f,
                "Cube on line {} has width {}, expected {} inputs and 1 output",
                line, actual_width, expected_inputs
            ),
        }
    }
}

impl std::error::Error for PLAError {}

impl From<PLAError> for io::Error {
    fn from(err: PLAError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading PLA format data
#[derive(Debug)]
pub enum PLAReadError {
    /// PLA format error
    PLA(PLAError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for PLAReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAReadError::PLA(e) => write!(f, "PLA format error: {}", e),
            PLAReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAReadError::PLA(e) => Some(e),
            PLAReadError::Io(e) => Some(e),
        }
    }
}

impl From<QmError> for PLAError {
    fn from(err: QmError) -> Self {
        match err {
            QmError::VariableCount {
                requested,
                min,
                max,
            } => PLAError::InputCountOutOfRange {
                count: requested,
                min,
                max,
            },
        }
    }
}

impl From<PLAError> for PLAReadError {
    fn from(err: PLAError) -> Self {
        PLAReadError::PLA(err)
    }
}

impl From<io::Error> for PLAReadError {
    fn from(err: io::Error) -> Self {
        PLAReadError::Io(err)
    }
}

impl From<PLAReadError> for io::Error {
    fn from(err: PLAReadError) -> Self {
        match err {
            PLAReadError::Io(e) => e,
            PLAReadError::PLA(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

/// Errors that can occur when writing PLA format data
#[derive(Debug)]
pub enum PLAWriteError {
    /// IO error during writing
    Io(io::Error),
}

impl fmt::Display for PLAWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAWriteError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAWriteError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PLAWriteError {
    fn from(err: io::Error) -> Self {
        PLAWriteError::Io(err)
    }
}

impl From<PLAWriteError> for io::Error {
    fn from(err: PLAWriteError) -> Self {
        match err {
            PLAWriteError::Io(e) => e,
        }
    }
}

//! Crate-level error type
//!
//! Each subsystem has its own error enum. [`ToolkitError`] wraps all of them
//! so callers that drive several subsystems (such as the command-line tool)
//! can use a single `Result` type.

use std::fmt;
use std::io;

pub use crate::bits::BitStringError;
pub use crate::expression::ExpressionParseError;
pub use crate::hamming::HammingError;
pub use crate::pla::{PLAError, PLAReadError, PLAWriteError};
pub use crate::qm::QmError;

/// Any error produced by this crate
#[derive(Debug)]
pub enum ToolkitError {
    /// Minimiser rejected its input
    Qm(QmError),
    /// Hamming codec rejected its input
    Hamming(HammingError),
    /// A bit string was malformed
    Bits(BitStringError),
    /// A formula failed to parse or used unknown variables
    Expression(ExpressionParseError),
    /// PLA input could not be read
    PLARead(PLAReadError),
    /// PLA output could not be written
    PLAWrite(PLAWriteError),
    /// Other I/O failure
    Io(io::Error),
}

impl fmt::Display for ToolkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolkitError::Qm(e) => write!(f, "{}", e),
            ToolkitError::Hamming(e) => write!(f, "{}", e),
            ToolkitError::Bits(e) => write!(f, "{}", e),
            ToolkitError::Expression(e) => write!(f, "{}", e),
            ToolkitError::PLARead(e) => write!(f, "{}", e),
            ToolkitError::PLAWrite(e) => write!(f, "{}", e),
            ToolkitError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ToolkitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToolkitError::Qm(e) => Some(e),
            ToolkitError::Hamming(e) => Some(e),
            ToolkitError::Bits(e) => Some(e),
            ToolkitError::Expression(e) => Some(e),
            ToolkitError::PLARead(e) => Some(e),
            ToolkitError::PLAWrite(e) => Some(e),
            ToolkitError::Io(e) => Some(e),
        }
    }
}

impl From<QmError> for ToolkitError {
    fn from(err: QmError) -> Self {
        ToolkitError::Qm(err)
    }
}

impl From<HammingError> for ToolkitError {
    fn from(err: HammingError) -> Self {
        ToolkitError::Hamming(err)
    }
}

impl From<BitStringError> for ToolkitError {
    fn from(err: BitStringError) -> Self {
        ToolkitError::Bits(err)
    }
}

impl From<ExpressionParseError> for ToolkitError {
    fn from(err: ExpressionParseError) -> Self {
        ToolkitError::Expression(err)
    }
}

impl From<PLAReadError> for ToolkitError {
    fn from(err: PLAReadError) -> Self {
        ToolkitError::PLARead(err)
    }
}

impl From<PLAWriteError> for ToolkitError {
    fn from(err: PLAWriteError) -> Self {
        ToolkitError::PLAWrite(err)
    }
}

impl From<io::Error> for ToolkitError {
    fn from(err: io::Error) -> Self {
        ToolkitError::Io(err)
    }
}

impl From<ToolkitError> for io::Error {
    fn from(err: ToolkitError) -> Self {
        match err {
            ToolkitError::Io(e) => e,
            ToolkitError::PLARead(e) => e.into(),
            ToolkitError::PLAWrite(e) => e.into(),
            ToolkitError::Qm(e) => e.into(),
            ToolkitError::Hamming(e) => e.into(),
            ToolkitError::Bits(e) => e.into(),
            ToolkitError::Expression(e) => e.into(),
        }
    }
}

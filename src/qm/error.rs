//! Error types for the tabular minimiser

use std::fmt;
use std::io;

/// Errors related to minimiser input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QmError {
    /// The variable count is outside the supported range
    VariableCount {
        /// The requested number of variables
        requested: usize,
        /// Smallest supported count
        min: usize,
        /// Largest supported count
        max: usize,
    },
}

impl fmt::Display for QmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QmError::VariableCount {
                requested,
                min,
                max,
            } => write!(
                f,
                "Unsupported variable count {} (valid range: {}..={})",
                requested, min, max
            ),
        }
    }
}

impl std::error::Error for QmError {}

impl From<QmError> for io::Error {
    fn from(err: QmError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_count_display() {
        let err = QmError::VariableCount {
            requested: 11,
            min: 2,
            max: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("11"));
        assert!(msg.contains("2..=10"));
    }

    #[test]
    fn test_to_io_error() {
        let err = QmError::VariableCount {
            requested: 1,
            min: 2,
            max: 10,
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}

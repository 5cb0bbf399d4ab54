//! Error types for the Hamming codec

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::bits::BitStringError;

/// Errors raised at the codec's input boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HammingError {
    /// A parity convention other than "even" or "odd"
    UnknownParity {
        /// The rejected text
        value: Arc<str>,
    },
    /// No data bits were supplied to `encode`
    EmptyData,
    /// The bit string itself was malformed
    Bits(BitStringError),
}

impl fmt::Display for HammingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HammingError::UnknownParity { value } => {
                write!(f, "Unknown parity convention '{}' (expected 'even' or 'odd')", value)
            }
            HammingError::EmptyData => write!(f, "At least one data bit is required"),
            HammingError::Bits(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for HammingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HammingError::Bits(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BitStringError> for HammingError {
    fn from(err: BitStringError) -> Self {
        HammingError::Bits(err)
    }
}

impl From<HammingError> for io::Error {
    fn from(err: HammingError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

//! Error types for formula parsing

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised when turning text into a [`Formula`](super::Formula)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// The text is not a well-formed formula
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Optional position in the input where the error occurred
        position: Option<usize>,
    },
    /// The formula names a variable beyond the function's inputs
    VariableOutOfRange {
        /// The offending variable letter
        variable: char,
        /// Number of inputs the function has
        num_vars: usize,
    },
    /// The truth table would exceed the minimiser's variable limit
    TooManyVariables {
        /// Requested number of inputs
        num_vars: usize,
        /// Largest supported number of inputs
        max: usize,
    },
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Failed to parse formula at position {}: {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(f, "Failed to parse formula: {}. Input: {:?}", message, input)
                }
            }
            ExpressionParseError::VariableOutOfRange { variable, num_vars } => {
                write!(
                    f,
                    "Variable {} is not an input of a {}-variable function",
                    variable, num_vars
                )
            }
            ExpressionParseError::TooManyVariables { num_vars, max } => write!(
                f,
                "Cannot tabulate a {}-variable function, at most {} are supported",
                num_vars, max
            ),
        }
    }
}

impl std::error::Error for ExpressionParseError {}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

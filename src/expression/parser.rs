//! Parsing support for formulas

use super::error::ExpressionParseError;
use super::Formula;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/formula.rs"));
}

impl Formula {
    /// Parse a formula from a string
    ///
    /// Supported syntax:
    /// - single upper-case letters `A`..`Z` as variables
    /// - `+` for OR
    /// - `*` or juxtaposition for AND (`AB'C` is `A * B' * C`)
    /// - postfix `'` or prefix `~` / `!` for NOT
    /// - parentheses for grouping, constants `0` and `1`
    pub fn parse(input: &str) -> Result<Self, ExpressionParseError> {
        parser_impl::FormulaParser::new()
            .parse(input)
            .map_err(|e| {
                let message = e.to_string();
                let position = extract_position_from_error(&message);
                ExpressionParseError::InvalidSyntax {
                    message: Arc::from(message.as_str()),
                    input: Arc::from(input),
                    position,
                }
            })
    }
}

impl std::str::FromStr for Formula {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}

/// Pull a byte offset out of a lalrpop error message
///
/// Lalrpop reports locations as `at N` (byte offset) in its messages.
fn extract_position_from_error(error_msg: &str) -> Option<usize> {
    let at_idx = error_msg.rfind(" at ")?;
    let digits: String = error_msg[at_idx + 4..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

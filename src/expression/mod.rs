//! Boolean formulas over single-letter variables
//!
//! A [`Formula`] is a small syntax tree parsed from text such as `AB' + C`
//! or `~(A + B) * C`. It is used to check minimised results against their
//! input specification and to accept functions typed as expressions.
//!
//! Variable `A` is the most significant bit of a minterm index, matching the
//! ordering used by the minimiser and the K-map grid.
//!
//! # Examples
//!
//! ```
//! use kmap_hamming::expression::Formula;
//!
//! # fn main() -> std::io::Result<()> {
//! let f = Formula::parse("B' + D")?;
//! assert!(f.evaluate(0b0000, 4));
//! assert!(!f.evaluate(0b0100, 4));
//! assert_eq!(f.minterms(4)?, vec![0, 1, 2, 3, 5, 7, 8, 9, 10, 11, 13, 15]);
//! assert!(f.minterms(3).is_err());
//! # Ok(())
//! # }
//! ```

mod display;
mod error;
mod eval;
mod parser;

pub use error::ExpressionParseError;

/// A Boolean formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// Variable by alphabet position (`A` = 0)
    Var(usize),
    /// Constant 0 or 1
    Const(bool),
    /// Negation
    Not(Box<Formula>),
    /// Conjunction
    And(Box<Formula>, Box<Formula>),
    /// Disjunction
    Or(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Variable `A` + `index`
    pub fn var(index: usize) -> Self {
        Formula::Var(index)
    }

    /// Highest variable index used, if any
    pub fn max_variable(&self) -> Option<usize> {
        match self {
            Formula::Var(i) => Some(*i),
            Formula::Const(_) => None,
            Formula::Not(e) => e.max_variable(),
            Formula::And(l, r) | Formula::Or(l, r) => l.max_variable().max(r.max_variable()),
        }
    }

    /// Number of inputs needed to evaluate this formula
    pub fn required_vars(&self) -> usize {
        self.max_variable().map_or(0, |i| i + 1)
    }
}

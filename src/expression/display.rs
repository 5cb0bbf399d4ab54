//! Display formatting with minimal parentheses
//!
//! Output uses the same notation the minimiser prints: juxtaposition for AND,
//! ` + ` for OR and a trailing `'` for NOT, so a printed sum-of-products
//! parses back to an equal formula.

use super::eval::variable_letter;
use super::Formula;
use std::fmt;

// Binding strength, loosest first
const PREC_OR: u8 = 0;
const PREC_AND: u8 = 1;

impl Formula {
    fn fmt_with_prec(&self, f: &mut fmt::Formatter<'_>, parent: u8) -> fmt::Result {
        match self {
            Formula::Var(i) => write!(f, "{}", variable_letter(*i)),
            Formula::Const(value) => write!(f, "{}", u8::from(*value)),
            Formula::Not(inner) => match **inner {
                Formula::Var(_) | Formula::Const(_) | Formula::Not(_) => {
                    inner.fmt_with_prec(f, PREC_AND)?;
                    write!(f, "'")
                }
                _ => {
                    write!(f, "(")?;
                    inner.fmt_with_prec(f, PREC_OR)?;
                    write!(f, ")'")
                }
            },
            Formula::And(l, r) => {
                l.fmt_with_prec(f, PREC_AND)?;
                r.fmt_with_prec(f, PREC_AND)
            }
            Formula::Or(l, r) => {
                if parent > PREC_OR {
                    write!(f, "(")?;
                }
                l.fmt_with_prec(f, PREC_OR)?;
                write!(f, " + ")?;
                r.fmt_with_prec(f, PREC_OR)?;
                if parent > PREC_OR {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_prec(f, PREC_OR)
    }
}

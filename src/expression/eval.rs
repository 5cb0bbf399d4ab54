//! Evaluation of formulas over minterm indices

use super::error::ExpressionParseError;
use super::Formula;
use crate::qm::MAX_VARS;

impl Formula {
    /// Evaluate on input combination `index` of a `num_vars`-input function
    ///
    /// Variable `i` reads bit `num_vars - 1 - i` of `index`. Variables at or
    /// beyond `num_vars` read as 0.
    pub fn evaluate(&self, index: usize, num_vars: usize) -> bool {
        match self {
            Formula::Var(i) => *i < num_vars && bit_at(index, num_vars - 1 - i),
            Formula::Const(value) => *value,
            Formula::Not(e) => !e.evaluate(index, num_vars),
            Formula::And(l, r) => l.evaluate(index, num_vars) && r.evaluate(index, num_vars),
            Formula::Or(l, r) => l.evaluate(index, num_vars) || r.evaluate(index, num_vars),
        }
    }

    /// Fail if the formula uses a variable outside the first `num_vars`
    pub fn check_variables(&self, num_vars: usize) -> Result<(), ExpressionParseError> {
        match self.max_variable() {
            Some(i) if i >= num_vars => Err(ExpressionParseError::VariableOutOfRange {
                variable: variable_letter(i),
                num_vars,
            }),
            _ => Ok(()),
        }
    }

    /// Output for every index in `0..2^num_vars`
    ///
    /// At most [`MAX_VARS`] inputs are tabulated.
    pub fn truth_table(&self, num_vars: usize) -> Result<Vec<bool>, ExpressionParseError> {
        if num_vars > MAX_VARS {
            return Err(ExpressionParseError::TooManyVariables {
                num_vars,
                max: MAX_VARS,
            });
        }
        self.check_variables(num_vars)?;
        Ok((0..1usize << num_vars)
            .map(|index| self.evaluate(index, num_vars))
            .collect())
    }

    /// Indices where the formula is true, ascending
    pub fn minterms(&self, num_vars: usize) -> Result<Vec<usize>, ExpressionParseError> {
        Ok(self
            .truth_table(num_vars)?
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| value.then_some(index))
            .collect())
    }

    /// Whether the formula matches a function on every care position
    ///
    /// An index listed in both `ones` and `dont_cares` counts as a one.
    /// Functions wider than [`MAX_VARS`] never agree.
    pub fn agrees_with(&self, num_vars: usize, ones: &[usize], dont_cares: &[usize]) -> bool {
        if num_vars > MAX_VARS {
            return false;
        }
        (0..1usize << num_vars).all(|index| {
            let is_one = ones.contains(&index);
            if !is_one && dont_cares.contains(&index) {
                return true;
            }
            self.evaluate(index, num_vars) == is_one
        })
    }
}

fn bit_at(index: usize, shift: usize) -> bool {
    u32::try_from(shift)
        .ok()
        .and_then(|shift| index.checked_shr(shift))
        .is_some_and(|value| value & 1 == 1)
}

pub(super) fn variable_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|&i| i < 26)
        .map_or('?', |i| (b'A' + i) as char)
}

//! Textual rendering of sum-of-products and product-of-sums forms
//!
//! Variables are written with their letter names; a trailing `'` marks
//! negation. Product terms are concatenated literals (`AB'C`), sums are
//! joined with ` + `.

use std::collections::BTreeSet;

use super::{check_var_count, QmError};
use crate::bits::{num_to_bits, variable_names};

/// Render one pattern as a product term
///
/// Positions set to `None` are omitted; an all-`None` pattern renders as `1`.
///
/// # Examples
///
/// ```
/// use kmap_hamming::qm::implicant_term;
///
/// assert_eq!(implicant_term(&[None, Some(false), None, None]), "B'");
/// assert_eq!(implicant_term(&[Some(true), Some(false)]), "AB'");
/// assert_eq!(implicant_term(&[None, None]), "1");
/// ```
pub fn implicant_term(pattern: &[Option<bool>]) -> String {
    let names = variable_names(pattern.len());
    let term: String = pattern
        .iter()
        .zip(names.iter())
        .filter_map(|(bit, name)| match bit {
            Some(true) => Some(name.to_string()),
            Some(false) => Some(format!("{}'", name)),
            None => None,
        })
        .collect();

    if term.is_empty() {
        "1".to_string()
    } else {
        term
    }
}

/// Join product terms into a sum; an empty selection is constant true
pub(crate) fn join_sop<I: IntoIterator<Item = String>>(terms: I) -> String {
    let terms: Vec<String> = terms.into_iter().collect();
    if terms.is_empty() {
        "1".to_string()
    } else {
        terms.join(" + ")
    }
}

/// Build the product-of-sums form from the off-set
///
/// Every index that is neither a true-minterm nor a don't-care becomes one
/// sum term (bit 1 renders negated, bit 0 plain). An empty off-set renders
/// as `1` and a full off-set as `0`.
///
/// # Examples
///
/// ```
/// use kmap_hamming::qm::build_pos;
///
/// assert_eq!(build_pos(2, &[1, 2, 3], &[]).unwrap(), "(A + B)");
/// assert_eq!(build_pos(2, &[0, 1], &[2, 3]).unwrap(), "1");
/// assert_eq!(build_pos(2, &[], &[]).unwrap(), "0");
/// assert!(build_pos(64, &[], &[]).is_err());
/// ```
pub fn build_pos(
    num_vars: usize,
    ones: &[usize],
    dont_cares: &[usize],
) -> Result<String, QmError> {
    check_var_count(num_vars)?;
    let size = 1usize << num_vars;
    let on_set: BTreeSet<usize> = ones.iter().chain(dont_cares).copied().collect();
    let off_set: Vec<usize> = (0..size).filter(|i| !on_set.contains(i)).collect();

    if off_set.is_empty() {
        return Ok("1".to_string());
    }
    if off_set.len() == size {
        return Ok("0".to_string());
    }

    let names = variable_names(num_vars);
    Ok(off_set
        .iter()
        .map(|&index| {
            let literals: Vec<String> = num_to_bits(index, num_vars)
                .chars()
                .zip(names.iter())
                .map(|(bit, name)| {
                    if bit == '1' {
                        format!("{}'", name)
                    } else {
                        name.to_string()
                    }
                })
                .collect();
            format!("({})", literals.join(" + "))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qm::{MAX_VARS, MIN_VARS};

    #[test]
    fn test_term_rendering() {
        assert_eq!(
            implicant_term(&[Some(false), Some(true), None, Some(false)]),
            "A'BD'"
        );
    }

    #[test]
    fn test_join_sop() {
        assert_eq!(join_sop(Vec::new()), "1");
        assert_eq!(
            join_sop(vec!["B'".to_string(), "D".to_string()]),
            "B' + D"
        );
    }

    #[test]
    fn test_pos_terms() {
        // F = A + B over two variables: off-set is {0}
        assert_eq!(build_pos(2, &[1, 2, 3], &[]).unwrap(), "(A + B)");
        // off-set {1, 2}
        assert_eq!(build_pos(2, &[0, 3], &[]).unwrap(), "(A + B')(A' + B)");
        // don't-cares are excluded from the off-set
        assert_eq!(build_pos(2, &[3], &[1, 2]).unwrap(), "(A + B)");
    }

    #[test]
    fn test_pos_rejects_unsupported_variable_counts() {
        for num_vars in [0, 1, MAX_VARS + 1, 64, usize::MAX] {
            assert_eq!(
                build_pos(num_vars, &[0], &[]),
                Err(QmError::VariableCount {
                    requested: num_vars,
                    min: MIN_VARS,
                    max: MAX_VARS,
                })
            );
        }
    }
}

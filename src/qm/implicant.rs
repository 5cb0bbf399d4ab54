//! Implicant type used by the tabular method
//!
//! An [`Implicant`] pairs a partial assignment over the input variables with
//! the set of minterm indices it was built from.

use std::collections::BTreeSet;
use std::fmt;

/// A product term over `num_vars` inputs together with the minterms it covers
///
/// Pattern positions are ordered most significant variable first:
/// - `Some(false)` - variable must be 0
/// - `Some(true)` - variable must be 1
/// - `None` - merged away (don't care)
///
/// Two implicants are equal iff their patterns and cover sets are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Implicant {
    pub(crate) pattern: Vec<Option<bool>>,
    pub(crate) covers: BTreeSet<usize>,
}

impl Implicant {
    /// Build the fully specified implicant for a single minterm
    pub fn from_minterm(index: usize, num_vars: usize) -> Self {
        let pattern = (0..num_vars)
            .map(|bit| Some((index >> (num_vars - 1 - bit)) & 1 == 1))
            .collect();
        Implicant {
            pattern,
            covers: BTreeSet::from([index]),
        }
    }

    /// Get the pattern of this implicant
    pub fn pattern(&self) -> &[Option<bool>] {
        &self.pattern
    }

    /// Get the minterm indices this implicant covers, in ascending order
    pub fn covers(&self) -> &BTreeSet<usize> {
        &self.covers
    }

    /// Check whether `index` is one of the covered minterms
    pub fn covers_index(&self, index: usize) -> bool {
        self.covers.contains(&index)
    }

    /// Pattern rendered over the alphabet `0`, `1`, `-`
    pub fn mask(&self) -> String {
        self.pattern
            .iter()
            .map(|bit| match bit {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            })
            .collect()
    }

    /// Number of positions fixed to 1 (the grouping key)
    pub fn ones_count(&self) -> usize {
        self.pattern.iter().filter(|&&bit| bit == Some(true)).count()
    }

    /// Number of literals in the rendered product term
    pub fn literal_count(&self) -> usize {
        self.pattern.iter().filter(|bit| bit.is_some()).count()
    }

    /// Check whether the pattern matches the input combination `index`
    pub fn matches(&self, index: usize) -> bool {
        let num_vars = self.pattern.len();
        self.pattern.iter().enumerate().all(|(bit, value)| match value {
            Some(v) => ((index >> (num_vars - 1 - bit)) & 1 == 1) == *v,
            None => true,
        })
    }

    /// Combine two implicants that differ in exactly one specified position
    ///
    /// Returns `None` if the patterns differ in zero or several positions, or
    /// if a `-` in one pattern is not matched by a `-` in the other.
    pub(crate) fn merge(&self, other: &Implicant) -> Option<Implicant> {
        if self.pattern.len() != other.pattern.len() {
            return None;
        }

        let mut differing = None;
        for (position, (a, b)) in self.pattern.iter().zip(other.pattern.iter()).enumerate() {
            if a == b {
                continue;
            }
            if a.is_none() || b.is_none() || differing.is_some() {
                return None;
            }
            differing = Some(position);
        }

        let position = differing?;
        let mut pattern = self.pattern.clone();
        pattern[position] = None;

        Some(Implicant {
            pattern,
            covers: self.covers.union(&other.covers).copied().collect(),
        })
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mask())
    }
}

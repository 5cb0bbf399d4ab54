//! Quine–McCluskey tabular minimisation for single-output functions
//!
//! The minimiser works in three stages:
//!
//! 1. **Prime implicants** - minterms and don't-cares are bucketed by the
//!    number of ones, and implicants in neighbouring buckets that differ in a
//!    single position are merged pass after pass. Whatever is never absorbed
//!    into a larger implicant is prime.
//! 2. **Essential selection** - a prime that is the only cover of some
//!    true-minterm is essential.
//! 3. **Greedy fill** - remaining true-minterms are covered by repeatedly
//!    taking the prime with the largest marginal coverage (first found wins
//!    ties). This is a heuristic, not an exact cover.
//!
//! Run time is exponential in the variable count in the worst case; the
//! supported range is capped at [`MAX_VARS`].
//!
//! # Examples
//!
//! ```
//! use kmap_hamming::qm::simplify;
//!
//! let solution = simplify(4, &[0, 1, 2, 3, 5, 7, 8, 9, 10, 11, 13, 15], &[]).unwrap();
//! assert_eq!(solution.sop(), "B' + D");
//! assert_eq!(solution.essential_indices().len(), 2);
//! ```

mod error;
mod implicant;
mod render;

pub use error::QmError;
pub use implicant::Implicant;
pub use render::{build_pos, implicant_term};

use std::collections::{BTreeMap, BTreeSet, HashSet};

use log::{debug, warn};

use crate::bits::variable_names;
use render::join_sop;

/// Smallest supported variable count
pub const MIN_VARS: usize = 2;
/// Largest supported variable count
pub const MAX_VARS: usize = 10;

/// Result of minimising one function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QmSolution {
    num_vars: usize,
    prime_implicants: Vec<Implicant>,
    essential_indices: Vec<usize>,
    essential_count: usize,
    uncovered: Vec<usize>,
    sop: String,
}

impl QmSolution {
    fn constant_false(num_vars: usize) -> Self {
        QmSolution {
            num_vars,
            prime_implicants: Vec::new(),
            essential_indices: Vec::new(),
            essential_count: 0,
            uncovered: Vec::new(),
            sop: "0".to_string(),
        }
    }

    /// Number of input variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// All prime implicants, in discovery order
    pub fn prime_implicants(&self) -> &[Implicant] {
        &self.prime_implicants
    }

    /// Indices into [`prime_implicants`](Self::prime_implicants) of the chosen cover
    ///
    /// Essential implicants come first, followed by greedy picks in the order
    /// they were taken.
    pub fn essential_indices(&self) -> &[usize] {
        &self.essential_indices
    }

    /// How many leading entries of [`essential_indices`](Self::essential_indices)
    /// are strictly essential
    pub fn essential_count(&self) -> usize {
        self.essential_count
    }

    /// True-minterms the greedy fill could not cover
    pub fn uncovered(&self) -> &[usize] {
        &self.uncovered
    }

    /// The sum-of-products expression
    pub fn sop(&self) -> &str {
        &self.sop
    }

    /// Iterate over the selected implicants
    pub fn selected(&self) -> impl Iterator<Item = &Implicant> + '_ {
        self.essential_indices
            .iter()
            .map(move |&idx| &self.prime_implicants[idx])
    }

    /// Total literals across the selected implicants
    pub fn literal_count(&self) -> usize {
        self.selected().map(Implicant::literal_count).sum()
    }

    /// Product terms of the selected implicants
    pub fn terms(&self) -> Vec<String> {
        self.selected()
            .map(|imp| implicant_term(imp.pattern()))
            .collect()
    }

    /// Evaluate the minimised function on input combination `index`
    pub fn evaluate(&self, index: usize) -> bool {
        self.selected().any(|imp| imp.matches(index))
    }

    /// Human-readable summary of the derivation
    pub fn steps(&self) -> Vec<String> {
        let terms = self.terms();
        let terms_desc = if terms.is_empty() {
            "none".to_string()
        } else {
            terms.join(", ")
        };
        let covers: Vec<String> = self
            .prime_implicants
            .iter()
            .map(|imp| {
                imp.covers()
                    .iter()
                    .map(|m| m.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();

        vec![
            format!("Variables: {}", variable_names(self.num_vars).join(", ")),
            format!("Minterms covered: {}", covers.join(" | ")),
            format!("Essential implicants: {}", terms_desc),
            format!("Total terms: {}", self.essential_indices.len()),
        ]
    }
}

/// Fail unless `num_vars` lies in `MIN_VARS..=MAX_VARS`
///
/// Every entry point that sizes a table as `2^num_vars` calls this first.
pub fn check_var_count(num_vars: usize) -> Result<(), QmError> {
    if (MIN_VARS..=MAX_VARS).contains(&num_vars) {
        Ok(())
    } else {
        Err(QmError::VariableCount {
            requested: num_vars,
            min: MIN_VARS,
            max: MAX_VARS,
        })
    }
}

/// Minimise a function given its true-minterms and don't-cares
///
/// Indices outside `0..2^num_vars` are discarded, repeated indices collapse
/// onto their first occurrence, and an index listed as both a true-minterm
/// and a don't-care is treated as a true-minterm.
///
/// Degenerate inputs short-circuit: no true-minterms gives the constant `0`,
/// and a single true-minterm without don't-cares gives its full product term.
pub fn simplify(
    num_vars: usize,
    ones: &[usize],
    dont_cares: &[usize],
) -> Result<QmSolution, QmError> {
    check_var_count(num_vars)?;

    let (ones, dont_cares) = normalise(num_vars, ones, dont_cares);

    if ones.is_empty() {
        debug!("no true-minterms, function is constant false");
        return Ok(QmSolution::constant_false(num_vars));
    }

    if ones.len() == 1 && dont_cares.is_empty() {
        let only = Implicant::from_minterm(ones[0], num_vars);
        let sop = implicant_term(only.pattern());
        return Ok(QmSolution {
            num_vars,
            prime_implicants: vec![only],
            essential_indices: vec![0],
            essential_count: 1,
            uncovered: Vec::new(),
            sop,
        });
    }

    let prime_implicants = prime_implicants(num_vars, &ones, &dont_cares);
    let cover = select_cover(&prime_implicants, &ones);

    let sop = join_sop(
        cover
            .indices
            .iter()
            .map(|&idx| implicant_term(prime_implicants[idx].pattern())),
    );

    Ok(QmSolution {
        num_vars,
        prime_implicants,
        essential_indices: cover.indices,
        essential_count: cover.essential_count,
        uncovered: cover.uncovered,
        sop,
    })
}

/// Filter out-of-range and repeated indices; true-minterms win overlaps
fn normalise(num_vars: usize, ones: &[usize], dont_cares: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let size = 1usize << num_vars;
    let in_range = |index: usize, kind: &str| {
        if index >= size {
            debug!("discarding {} {} outside 0..{}", kind, index, size);
            false
        } else {
            true
        }
    };

    let mut seen = HashSet::new();
    let ones: Vec<usize> = ones
        .iter()
        .copied()
        .filter(|&index| in_range(index, "minterm") && seen.insert(index))
        .collect();

    let on_set = seen.clone();
    let dont_cares: Vec<usize> = dont_cares
        .iter()
        .copied()
        .filter(|&index| {
            if !in_range(index, "don't-care") {
                return false;
            }
            if on_set.contains(&index) {
                warn!(
                    "index {} is both a minterm and a don't-care; treating as minterm",
                    index
                );
                return false;
            }
            seen.insert(index)
        })
        .collect();

    (ones, dont_cares)
}

/// Compute every prime implicant of the function
///
/// Implicants are grouped by their number of ones; each pass merges pairs
/// from neighbouring groups. An implicant not used as a merge parent in its
/// pass is prime. Duplicates (same pattern and cover set) are removed, keeping
/// the first occurrence.
pub fn prime_implicants(num_vars: usize, ones: &[usize], dont_cares: &[usize]) -> Vec<Implicant> {
    let mut groups: BTreeMap<usize, Vec<Implicant>> = BTreeMap::new();
    for &index in ones.iter().chain(dont_cares) {
        let imp = Implicant::from_minterm(index, num_vars);
        groups.entry(imp.ones_count()).or_default().push(imp);
    }

    let mut primes: Vec<Implicant> = Vec::new();
    let mut pass = 0;

    while !groups.is_empty() {
        pass += 1;
        let keys: Vec<usize> = groups.keys().copied().collect();
        let mut next: BTreeMap<usize, Vec<Implicant>> = BTreeMap::new();
        // (group key, position in group) of every merge parent
        let mut consumed: HashSet<(usize, usize)> = HashSet::new();

        for pair in keys.windows(2) {
            let (low, high) = (pair[0], pair[1]);
            if high != low + 1 {
                continue;
            }
            for (i, left) in groups[&low].iter().enumerate() {
                for (j, right) in groups[&high].iter().enumerate() {
                    if let Some(merged) = left.merge(right) {
                        consumed.insert((low, i));
                        consumed.insert((high, j));
                        let bucket = next.entry(merged.ones_count()).or_default();
                        if !bucket.contains(&merged) {
                            bucket.push(merged);
                        }
                    }
                }
            }
        }

        let before = primes.len();
        for (key, bucket) in groups {
            for (i, imp) in bucket.into_iter().enumerate() {
                if !consumed.contains(&(key, i)) {
                    primes.push(imp);
                }
            }
        }
        debug!(
            "pass {}: {} merged implicants, {} new primes",
            pass,
            next.values().map(Vec::len).sum::<usize>(),
            primes.len() - before
        );

        groups = next;
    }

    let mut unique: Vec<Implicant> = Vec::with_capacity(primes.len());
    for imp in primes {
        if !unique.contains(&imp) {
            unique.push(imp);
        }
    }
    unique
}

/// Outcome of the essential + greedy selection
struct CoverSelection {
    indices: Vec<usize>,
    essential_count: usize,
    uncovered: Vec<usize>,
}

fn select_cover(primes: &[Implicant], ones: &[usize]) -> CoverSelection {
    let on_set: BTreeSet<usize> = ones.iter().copied().collect();
    let mut indices: Vec<usize> = Vec::new();

    for &m in ones {
        let mut covering = primes
            .iter()
            .enumerate()
            .filter(|(_, imp)| imp.covers_index(m))
            .map(|(idx, _)| idx);
        if let (Some(idx), None) = (covering.next(), covering.next()) {
            if !indices.contains(&idx) {
                debug!("minterm {} makes {} essential", m, primes[idx]);
                indices.push(idx);
            }
        }
    }
    let essential_count = indices.len();

    let mut covered: BTreeSet<usize> = indices
        .iter()
        .flat_map(|&idx| primes[idx].covers().iter().copied())
        .collect();
    let mut optional: Vec<usize> = (0..primes.len())
        .filter(|idx| !indices.contains(idx))
        .collect();

    while ones.iter().any(|m| !covered.contains(m)) && !optional.is_empty() {
        let mut best: Option<(usize, usize)> = None;
        for &idx in &optional {
            let gain = primes[idx]
                .covers()
                .iter()
                .filter(|m| on_set.contains(m) && !covered.contains(m))
                .count();
            if best.map_or(true, |(_, best_gain)| gain > best_gain) {
                best = Some((idx, gain));
            }
        }

        match best {
            Some((idx, gain)) if gain > 0 => {
                debug!("greedy pick {} covering {} more", primes[idx], gain);
                indices.push(idx);
                covered.extend(primes[idx].covers().iter().copied());
                optional.retain(|&o| o != idx);
            }
            _ => break,
        }
    }

    let uncovered: Vec<usize> = ones
        .iter()
        .copied()
        .filter(|m| !covered.contains(m))
        .collect();
    if !uncovered.is_empty() {
        warn!("incomplete cover, minterms left uncovered: {:?}", uncovered);
    }

    CoverSelection {
        indices,
        essential_count,
        uncovered,
    }
}

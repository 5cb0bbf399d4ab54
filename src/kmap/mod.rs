//! Karnaugh-map state, input sources and solving
//!
//! [`KmapState`] is a plain value: every operation takes a state and returns
//! a new one (or borrows it), so there is no shared grid between callers.
//! Inputs arrive as an [`InputSource`] and are folded into a state by
//! [`KmapState::from_source`].
//!
//! # Examples
//!
//! ```
//! use kmap_hamming::kmap::{solve, InputSource, KmapState};
//!
//! let state = KmapState::from_source(
//!     3,
//!     InputSource::Minterms { ones: vec![1, 3, 5], dont_cares: vec![7] },
//! )
//! .unwrap();
//! let solution = solve(&state).unwrap();
//! assert_eq!(solution.qm.sop(), "C");
//! ```

mod grid;

pub use grid::KmapGrid;

use std::fmt;

use log::debug;

use crate::qm::{self, QmError, QmSolution};

/// Value of one K-map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellValue {
    /// Function is 0
    #[default]
    Zero,
    /// Function is 1
    One,
    /// Function value is unspecified
    DontCare,
}

impl CellValue {
    /// Next value in the click cycle 0 → 1 → X → 0
    pub fn cycle(self) -> Self {
        match self {
            CellValue::Zero => CellValue::One,
            CellValue::One => CellValue::DontCare,
            CellValue::DontCare => CellValue::Zero,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            CellValue::Zero => '0',
            CellValue::One => '1',
            CellValue::DontCare => 'X',
        };
        write!(f, "{}", c)
    }
}

/// How a function was entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A grid edited cell by cell
    Grid(KmapState),
    /// Explicit true-minterm and don't-care lists
    Minterms {
        /// Indices where the function is 1
        ones: Vec<usize>,
        /// Indices where the function is unspecified
        dont_cares: Vec<usize>,
    },
    /// Explicit false-maxterm and don't-care lists
    Maxterms {
        /// Indices where the function is 0
        maxterms: Vec<usize>,
        /// Indices where the function is unspecified
        dont_cares: Vec<usize>,
    },
    /// Raw truth-table text, one `<bits> <output>` row per line
    TruthTable(String),
}

/// Method reported for a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Grouping shown on a Karnaugh map (up to six variables)
    KarnaughMap,
    /// Tabular method only
    QuineMcCluskey,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::KarnaughMap => write!(f, "K-map"),
            Method::QuineMcCluskey => write!(f, "Quine–McCluskey"),
        }
    }
}

/// Dense cell values for every minterm index of a function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmapState {
    num_vars: usize,
    cells: Vec<CellValue>,
}

impl KmapState {
    /// Create an all-zero state for `num_vars` variables
    ///
    /// Fails with [`QmError::VariableCount`] outside the minimiser's range, so
    /// no grid is ever allocated for a function that cannot be solved.
    pub fn new(num_vars: usize) -> Result<Self, QmError> {
        qm::check_var_count(num_vars)?;
        Ok(KmapState::blank(num_vars))
    }

    /// Build a state from any input source
    ///
    /// Indices outside the domain are ignored. When an index is given both as
    /// a true-minterm and a don't-care, the true-minterm wins. A grid of a
    /// different size is replaced by a blank one.
    pub fn from_source(num_vars: usize, source: InputSource) -> Result<Self, QmError> {
        let mut state = KmapState::new(num_vars)?;
        match source {
            InputSource::Grid(grid) => {
                if grid.num_vars == num_vars {
                    state = grid;
                }
            }
            InputSource::Minterms { ones, dont_cares } => {
                state.fill(&dont_cares, CellValue::DontCare);
                state.fill(&ones, CellValue::One);
            }
            InputSource::Maxterms {
                maxterms,
                dont_cares,
            } => {
                state.cells.fill(CellValue::One);
                state.fill(&maxterms, CellValue::Zero);
                state.fill(&dont_cares, CellValue::DontCare);
            }
            InputSource::TruthTable(text) => {
                for (line, row) in text.lines().enumerate() {
                    let mut parts = row.split_whitespace();
                    let (Some(bits), Some(out)) = (parts.next(), parts.next()) else {
                        continue;
                    };
                    if bits.len() != num_vars || !bits.chars().all(|c| c == '0' || c == '1') {
                        debug!("skipping truth-table line {}: {:?}", line + 1, row);
                        continue;
                    }
                    let Ok(index) = usize::from_str_radix(bits, 2) else {
                        continue;
                    };
                    let value = match out {
                        "1" => CellValue::One,
                        "x" | "X" => CellValue::DontCare,
                        _ => CellValue::Zero,
                    };
                    state.cells[index] = value;
                }
            }
        }
        Ok(state)
    }

    /// Number of input variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Cell values indexed by minterm number
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Value at `index`, if in range
    pub fn get(&self, index: usize) -> Option<CellValue> {
        self.cells.get(index).copied()
    }

    /// Return a copy with `index` set to `value` (out-of-range is a no-op)
    pub fn set(mut self, index: usize, value: CellValue) -> Self {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value;
        }
        self
    }

    /// Return a copy with `index` advanced one step through the click cycle
    pub fn toggle_cell(self, index: usize) -> Self {
        match self.get(index) {
            Some(value) => self.set(index, value.cycle()),
            None => self,
        }
    }

    /// Return an all-zero state of the same size
    pub fn reset(self) -> Self {
        KmapState::blank(self.num_vars)
    }

    /// Indices whose value is 1, ascending
    pub fn minterms(&self) -> Vec<usize> {
        self.indices_of(CellValue::One)
    }

    /// Indices whose value is don't-care, ascending
    pub fn dont_cares(&self) -> Vec<usize> {
        self.indices_of(CellValue::DontCare)
    }

    fn indices_of(&self, wanted: CellValue) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == wanted)
            .map(|(index, _)| index)
            .collect()
    }

    fn fill(&mut self, indices: &[usize], value: CellValue) {
        let size = self.cells.len();
        for &index in indices {
            match self.cells.get_mut(index) {
                Some(cell) => *cell = value,
                None => debug!("ignoring index {} outside 0..{}", index, size),
            }
        }
    }

    fn blank(num_vars: usize) -> Self {
        KmapState {
            num_vars,
            cells: vec![CellValue::Zero; 1 << num_vars],
        }
    }
}

/// Everything produced by one solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmapSolution {
    /// Minimised sum-of-products cover
    pub qm: QmSolution,
    /// Product-of-sums form built from the off-set
    pub pos: String,
    /// Presentation method used for this variable count
    pub method: Method,
}

/// Minimise the function held in `state`
///
/// Maps of up to six variables report [`Method::KarnaughMap`]; larger ones
/// are solved by the tabular method only.
pub fn solve(state: &KmapState) -> Result<KmapSolution, QmError> {
    solve_with_limit(state, grid::MAX_GRID_VARS)
}

/// Same as [`solve`] with an explicit K-map variable cap
pub fn solve_with_limit(state: &KmapState, kmap_max_vars: usize) -> Result<KmapSolution, QmError> {
    let ones = state.minterms();
    let dont_cares = state.dont_cares();
    let qm = qm::simplify(state.num_vars, &ones, &dont_cares)?;
    let pos = qm::build_pos(state.num_vars, &ones, &dont_cares)?;
    let method = if state.num_vars <= kmap_max_vars.min(grid::MAX_GRID_VARS) {
        Method::KarnaughMap
    } else {
        Method::QuineMcCluskey
    };

    Ok(KmapSolution { qm, pos, method })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_cycle() {
        assert_eq!(CellValue::Zero.cycle(), CellValue::One);
        assert_eq!(CellValue::One.cycle(), CellValue::DontCare);
        assert_eq!(CellValue::DontCare.cycle(), CellValue::Zero);
    }

    #[test]
    fn test_toggle_and_reset_are_pure() {
        let blank = KmapState::new(2).unwrap();
        let once = blank.clone().toggle_cell(3);
        let twice = once.clone().toggle_cell(3);
        assert_eq!(blank.get(3), Some(CellValue::Zero));
        assert_eq!(once.get(3), Some(CellValue::One));
        assert_eq!(twice.get(3), Some(CellValue::DontCare));
        assert_eq!(twice.clone().toggle_cell(3).get(3), Some(CellValue::Zero));
        assert_eq!(twice.toggle_cell(99).cells().len(), 4);
        assert_eq!(once.reset(), blank);
    }

    #[test]
    fn test_minterm_source_prefers_ones_and_drops_out_of_range() {
        let state = KmapState::from_source(
            2,
            InputSource::Minterms {
                ones: vec![0, 3, 7],
                dont_cares: vec![3, 1],
            },
        )
        .unwrap();
        assert_eq!(state.minterms(), vec![0, 3]);
        assert_eq!(state.dont_cares(), vec![1]);
    }

    #[test]
    fn test_maxterm_source() {
        let state = KmapState::from_source(
            3,
            InputSource::Maxterms {
                maxterms: vec![0, 4],
                dont_cares: vec![7],
            },
        )
        .unwrap();
        assert_eq!(state.minterms(), vec![1, 2, 3, 5, 6]);
        assert_eq!(state.dont_cares(), vec![7]);
    }

    #[test]
    fn test_truth_table_source_skips_malformed_rows() {
        let text = "00 1\n01 x\n1 1\n10 0\n1a 1\n11 X\n\n   \n011 1\n";
        let state = KmapState::from_source(2, InputSource::TruthTable(text.to_string())).unwrap();
        assert_eq!(state.minterms(), vec![0]);
        assert_eq!(state.dont_cares(), vec![1, 3]);
    }

    #[test]
    fn test_grid_source_keeps_state() {
        let grid = KmapState::new(3).unwrap().set(5, CellValue::One).set(6, CellValue::DontCare);
        let state = KmapState::from_source(3, InputSource::Grid(grid.clone())).unwrap();
        assert_eq!(state, grid);
    }

    #[test]
    fn test_solve_reports_method() {
        let small = KmapState::new(4).unwrap().set(0, CellValue::One);
        assert_eq!(solve(&small).unwrap().method, Method::KarnaughMap);

        let large = KmapState::new(7).unwrap().set(0, CellValue::One);
        let solution = solve(&large).unwrap();
        assert_eq!(solution.method, Method::QuineMcCluskey);
        assert_eq!(solution.qm.sop(), "A'B'C'D'E'F'G'");
    }

    #[test]
    fn test_solve_builds_pos() {
        let state = KmapState::from_source(
            2,
            InputSource::Minterms {
                ones: vec![1, 2, 3],
                dont_cares: vec![],
            },
        )
        .unwrap();
        let solution = solve(&state).unwrap();
        assert_eq!(solution.qm.sop(), "B + A");
        assert_eq!(solution.pos, "(A + B)");
    }

    #[test]
    fn test_unsupported_variable_counts_are_errors() {
        for num_vars in [0, 1, 11, 30, 64, usize::MAX] {
            assert_eq!(
                KmapState::new(num_vars),
                Err(QmError::VariableCount {
                    requested: num_vars,
                    min: qm::MIN_VARS,
                    max: qm::MAX_VARS,
                })
            );
            let source = InputSource::Minterms {
                ones: vec![1],
                dont_cares: vec![],
            };
            assert!(KmapState::from_source(num_vars, source).is_err());
        }
    }

    #[test]
    fn test_grid_of_another_size_is_replaced() {
        let grid = KmapState::new(2).unwrap().set(1, CellValue::One);
        let state = KmapState::from_source(3, InputSource::Grid(grid)).unwrap();
        assert_eq!(state, KmapState::new(3).unwrap());
    }
}

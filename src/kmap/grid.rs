//! Grid layout of a Karnaugh map
//!
//! Variables are split between the column axis (high-order bits) and the row
//! axis (low-order bits); both axes are walked in Gray-code order so that
//! neighbouring cells differ in one variable.

use super::KmapState;
use crate::bits::{gray_code, num_to_bits, variable_names};
use crate::qm::QmSolution;

/// Largest variable count drawn as a grid
pub(crate) const MAX_GRID_VARS: usize = 6;

/// Number of distinct colour groups used for highlighting
pub const GROUP_COLOURS: usize = 5;

/// Axis assignment and cell ordering for one map size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmapGrid {
    column_vars: Vec<&'static str>,
    row_vars: Vec<&'static str>,
    column_codes: Vec<usize>,
    row_codes: Vec<usize>,
}

impl KmapGrid {
    /// Layout for `num_vars` variables, or `None` outside `2..=6`
    ///
    /// | vars | columns | rows  |
    /// |------|---------|-------|
    /// | 2    | A       | B     |
    /// | 3    | AB      | C     |
    /// | 4    | AB      | CD    |
    /// | 5    | ABC     | DE    |
    /// | 6    | ABC     | DEF   |
    pub fn new(num_vars: usize) -> Option<Self> {
        if !(2..=MAX_GRID_VARS).contains(&num_vars) {
            return None;
        }
        let names = variable_names(num_vars);
        let column_bits = (num_vars + 1) / 2;
        let (column_vars, row_vars) = names.split_at(column_bits);

        Some(KmapGrid {
            column_vars: column_vars.to_vec(),
            row_vars: row_vars.to_vec(),
            column_codes: gray_code(column_vars.len()),
            row_codes: gray_code(row_vars.len()),
        })
    }

    /// Layout matching the size of `state`
    pub fn for_state(state: &KmapState) -> Option<Self> {
        Self::new(state.num_vars())
    }

    /// Variables on the column axis
    pub fn column_vars(&self) -> &[&'static str] {
        &self.column_vars
    }

    /// Variables on the row axis
    pub fn row_vars(&self) -> &[&'static str] {
        &self.row_vars
    }

    /// Column header bit strings in display order
    pub fn column_labels(&self) -> Vec<String> {
        self.column_codes
            .iter()
            .map(|&code| num_to_bits(code, self.column_vars.len()))
            .collect()
    }

    /// Row header bit strings in display order
    pub fn row_labels(&self) -> Vec<String> {
        self.row_codes
            .iter()
            .map(|&code| num_to_bits(code, self.row_vars.len()))
            .collect()
    }

    /// Minterm index of the cell at display position (`row`, `column`)
    pub fn index_at(&self, row: usize, column: usize) -> usize {
        (self.column_codes[column] << self.row_vars.len()) | self.row_codes[row]
    }

    /// Minterm indices of every cell, row by row in display order
    pub fn cell_indices(&self) -> Vec<Vec<usize>> {
        (0..self.row_codes.len())
            .map(|row| {
                (0..self.column_codes.len())
                    .map(|column| self.index_at(row, column))
                    .collect()
            })
            .collect()
    }

    /// Colour groups that include minterm `index`
    ///
    /// The `j`-th selected implicant is drawn in colour `j % GROUP_COLOURS`.
    pub fn groups_of(solution: &QmSolution, index: usize) -> Vec<usize> {
        solution
            .selected()
            .enumerate()
            .filter(|(_, imp)| imp.covers_index(index))
            .map(|(j, _)| j % GROUP_COLOURS)
            .collect()
    }

    /// Plain-text rendering of `state` on this grid
    pub fn render(&self, state: &KmapState) -> String {
        let corner = format!("{}\\{}", self.row_vars.join(""), self.column_vars.join(""));
        let width = self.column_vars.len() + 2;
        let mut out = String::new();

        out.push_str(&corner);
        for label in self.column_labels() {
            out.push_str(&format!("{:>w$}", label, w = width));
        }
        out.push('\n');

        for (row, label) in self.row_labels().into_iter().enumerate() {
            out.push_str(&format!("{:>w$}", label, w = corner.len()));
            for column in 0..self.column_codes.len() {
                let value = state
                    .get(self.index_at(row, column))
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                out.push_str(&format!("{:>w$}", value, w = width));
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmap::CellValue;
    use crate::qm::simplify;

    #[test]
    fn test_axis_split() {
        let grid = KmapGrid::new(4).unwrap();
        assert_eq!(grid.column_vars(), &["A", "B"]);
        assert_eq!(grid.row_vars(), &["C", "D"]);

        let grid = KmapGrid::new(5).unwrap();
        assert_eq!(grid.column_vars(), &["A", "B", "C"]);
        assert_eq!(grid.row_vars(), &["D", "E"]);

        assert!(KmapGrid::new(7).is_none());
        assert!(KmapGrid::new(1).is_none());
    }

    #[test]
    fn test_labels_follow_gray_order() {
        let grid = KmapGrid::new(4).unwrap();
        assert_eq!(grid.column_labels(), vec!["00", "01", "11", "10"]);
        assert_eq!(grid.row_labels(), vec!["00", "01", "11", "10"]);
    }

    #[test]
    fn test_cell_indices_cover_domain() {
        for vars in 2..=6 {
            let grid = KmapGrid::new(vars).unwrap();
            let mut all: Vec<usize> = grid.cell_indices().into_iter().flatten().collect();
            all.sort_unstable();
            assert_eq!(all, (0..1 << vars).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_index_at_uses_column_as_high_bits() {
        let grid = KmapGrid::new(3).unwrap();
        // column "11" (A=1, B=1), row "1" (C=1)
        assert_eq!(grid.index_at(1, 2), 0b111);
        // column "10", row "0"
        assert_eq!(grid.index_at(0, 3), 0b100);
    }

    #[test]
    fn test_groups_of() {
        let solution = simplify(4, &[0, 1, 2, 3, 5, 7, 8, 9, 10, 11, 13, 15], &[]).unwrap();
        assert_eq!(KmapGrid::groups_of(&solution, 1), vec![0, 1]);
        assert_eq!(KmapGrid::groups_of(&solution, 0), vec![0]);
        assert_eq!(KmapGrid::groups_of(&solution, 13), vec![1]);
        assert!(KmapGrid::groups_of(&solution, 4).is_empty());
    }

    #[test]
    fn test_render() {
        let state = KmapState::new(2)
            .unwrap()
            .set(3, CellValue::One)
            .set(0, CellValue::DontCare);
        let text = KmapGrid::new(2).unwrap().render(&state);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "B\\A  0  1");
        assert_eq!(lines[1], "  0  X  0");
        assert_eq!(lines[2], "  1  0  1");
    }
}

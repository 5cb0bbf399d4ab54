//! Parity/data bit placement for Hamming codewords

use std::fmt;

/// Role of one 1-based codeword position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The k-th parity bit (position `2^(k-1)`)
    Parity(usize),
    /// The k-th data bit
    Data(usize),
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Parity(k) => write!(f, "p{}", k),
            Role::Data(k) => write!(f, "d{}", k),
        }
    }
}

/// Assignment of roles to the positions `1..=total_bits` of a codeword
///
/// The overall-parity bit of the extended code is not part of the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammingLayout {
    roles: Vec<Role>,
    parity_count: usize,
}

/// Smallest `m` with `2^m >= data_bits + m + 1`
pub fn parity_count_for(data_bits: usize) -> usize {
    let mut m = 0;
    while (1usize << m) < data_bits + m + 1 {
        m += 1;
    }
    m
}

/// Whether `len` is the length of some standard Hamming codeword
///
/// Codeword lengths are exactly the integers from 3 up that are not powers
/// of two, since a power-of-two position is always a parity bit.
pub fn is_code_length(len: usize) -> bool {
    len >= 3 && !len.is_power_of_two()
}

impl HammingLayout {
    /// Layout for a codeword carrying `data_bits` data bits
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_hamming::hamming::HammingLayout;
    ///
    /// let layout = HammingLayout::for_data_bits(4);
    /// assert_eq!(layout.parity_count(), 3);
    /// assert_eq!(layout.total_bits(), 7);
    /// assert_eq!(layout.role(3).unwrap().to_string(), "d1");
    /// ```
    pub fn for_data_bits(data_bits: usize) -> Self {
        Self::for_code_length(data_bits + parity_count_for(data_bits))
    }

    /// Layout covering positions `1..=total_bits`, parity at powers of two
    pub fn for_code_length(total_bits: usize) -> Self {
        let mut data_index = 0;
        let roles: Vec<Role> = (1..=total_bits)
            .map(|position: usize| {
                if position.is_power_of_two() {
                    Role::Parity(position.trailing_zeros() as usize + 1)
                } else {
                    data_index += 1;
                    Role::Data(data_index)
                }
            })
            .collect();
        let parity_count = roles
            .iter()
            .filter(|role| matches!(role, Role::Parity(_)))
            .count();

        HammingLayout {
            roles,
            parity_count,
        }
    }

    /// Number of parity bits (excluding any overall-parity bit)
    pub fn parity_count(&self) -> usize {
        self.parity_count
    }

    /// Number of data bits
    pub fn data_bits(&self) -> usize {
        self.roles.len() - self.parity_count
    }

    /// Number of positions (data + parity)
    pub fn total_bits(&self) -> usize {
        self.roles.len()
    }

    /// Role of a 1-based position
    pub fn role(&self, position: usize) -> Option<Role> {
        position
            .checked_sub(1)
            .and_then(|i| self.roles.get(i))
            .copied()
    }

    /// Roles for positions `1..=total_bits`
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Parity bit positions, ascending
    pub fn parity_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.parity_count).map(|k| 1usize << k)
    }

    /// Two-line table of bit indices and their roles
    pub fn layout_table(&self) -> String {
        format!(
            "Bit index: {}\nRole:      {}",
            self.position_row(),
            self.role_row()
        )
    }

    /// Table showing which positions each parity bit checks
    pub fn coverage_table(&self) -> String {
        let mut out = format!(
            "Bit pos:    {}\nRole:       {}\n\n",
            self.position_row(),
            self.role_row()
        );
        for position in self.parity_positions() {
            let name = format!("p{}", position.trailing_zeros() + 1);
            out.push_str(&format!("{:<11}", name));
            for column in 1..=self.total_bits() {
                out.push_str(if column & position != 0 { "  ✓" } else { "   " });
            }
            out.push('\n');
        }
        out
    }

    fn position_row(&self) -> String {
        (1..=self.total_bits())
            .map(|p| format!("{:>2}", p))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn role_row(&self) -> String {
        self.roles
            .iter()
            .map(|role| format!("{:>2}", role.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_count() {
        assert_eq!(parity_count_for(1), 2);
        assert_eq!(parity_count_for(4), 3);
        assert_eq!(parity_count_for(11), 4);
        assert_eq!(parity_count_for(12), 5);
        assert_eq!(parity_count_for(26), 5);
        assert_eq!(parity_count_for(27), 6);
    }

    #[test]
    fn test_roles_for_seven_four() {
        let layout = HammingLayout::for_data_bits(4);
        let roles: Vec<String> = layout.roles().iter().map(Role::to_string).collect();
        assert_eq!(roles, vec!["p1", "p2", "d1", "p3", "d2", "d3", "d4"]);
        assert_eq!(layout.parity_positions().collect::<Vec<_>>(), vec![1, 2, 4]);
        assert_eq!(layout.data_bits(), 4);
        assert_eq!(layout.role(0), None);
        assert_eq!(layout.role(8), None);
    }

    #[test]
    fn test_code_lengths() {
        let lengths: Vec<usize> = (1..=16).filter(|&n| is_code_length(n)).collect();
        assert_eq!(lengths, vec![3, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15]);
        for data in 1..64 {
            assert!(is_code_length(HammingLayout::for_data_bits(data).total_bits()));
        }
    }

    #[test]
    fn test_layout_table() {
        let table = HammingLayout::for_data_bits(1).layout_table();
        assert_eq!(table, "Bit index:  1  2  3\nRole:      p1 p2 d1");
    }

    #[test]
    fn test_coverage_table() {
        let table = HammingLayout::for_data_bits(1).coverage_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Bit pos:     1  2  3");
        assert!(lines[2].is_empty());
        assert_eq!(lines[3], format!("p1{}✓{}✓", " ".repeat(11), " ".repeat(5)));
        assert_eq!(lines[4], format!("p2{}✓{}✓", " ".repeat(14), " ".repeat(2)));
    }
}

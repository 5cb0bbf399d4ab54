//! # kmap-hamming
//!
//! Two small combinational-logic engines in one crate:
//!
//! - **Boolean minimisation** by the Quine–McCluskey tabular method, with
//!   Karnaugh-map layout data for functions of up to six variables
//! - **Hamming codes**: layout, encoding and syndrome decoding, with an
//!   overall-parity bit for single-error correction and double-error
//!   detection under the even convention
//!
//! ## Minimising a function
//!
//! ```
//! use kmap_hamming::qm::simplify;
//!
//! # fn main() -> std::io::Result<()> {
//! let solution = simplify(4, &[0, 1, 2, 3, 5, 7, 8, 9, 10, 11, 13, 15], &[])?;
//! assert_eq!(solution.sop(), "B' + D");
//! # Ok(())
//! # }
//! ```
//!
//! Functions can also be entered through a [`kmap::KmapState`], which
//! accepts a grid, minterm or maxterm lists, or truth-table text, and
//! [`kmap::solve`] returns both the sum-of-products and product-of-sums
//! forms:
//!
//! ```
//! use kmap_hamming::kmap::{solve, InputSource, KmapState, Method};
//!
//! # fn main() -> std::io::Result<()> {
//! let state = KmapState::from_source(
//!     3,
//!     InputSource::Maxterms { maxterms: vec![0, 4], dont_cares: vec![] },
//! )?;
//! let solution = solve(&state)?;
//! assert_eq!(solution.pos, "(A + B + C)(A' + B + C)");
//! assert_eq!(solution.method, Method::KarnaughMap);
//! # Ok(())
//! # }
//! ```
//!
//! ## Exporting
//!
//! The [`hdl`] module renders a solution as a Verilog module or VHDL entity,
//! and [`pla`] reads and writes Espresso-compatible PLA text.
//!
//! ## Hamming codes
//!
//! ```
//! use kmap_hamming::bits::parse_bits;
//! use kmap_hamming::hamming::{check, encode, CheckOutcome, Classification, Parity};
//!
//! # fn main() -> std::io::Result<()> {
//! let encoded = encode(&parse_bits("1011")?, Parity::Even)?;
//! let mut received = encoded.bits().to_vec();
//! received[1] = !received[1];
//! received[5] = !received[5];
//!
//! if let CheckOutcome::Checked(report) = check(&received, Parity::Even) {
//!     assert_eq!(report.classification(), Classification::DoubleBit);
//! }
//! # Ok(())
//! # }
//! ```

pub mod bits;
pub mod error;
pub mod expression;
pub mod hamming;
pub mod hdl;
pub mod kmap;
pub mod pla;
pub mod qm;

pub use error::ToolkitError;
pub use expression::Formula;
pub use kmap::{solve, InputSource, KmapSolution, KmapState};
pub use qm::{simplify, QmSolution};

/// Names and limits shared by the exporters and the K-map presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolkitConfig {
    /// Module/entity name used for HDL output
    pub module_name: String,
    /// Name of the single output signal (HDL and PLA `.ob`)
    pub output_name: String,
    /// Largest variable count presented as a Karnaugh map
    pub kmap_max_vars: usize,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        ToolkitConfig {
            module_name: "kmap_func".to_string(),
            output_name: "F".to_string(),
            kmap_max_vars: 6,
        }
    }
}

impl ToolkitConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

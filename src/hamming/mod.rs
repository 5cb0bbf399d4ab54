//! Hamming single-error-correcting codes
//!
//! Codewords are addressed by 1-based position. Positions that are powers of
//! two hold parity bits; parity bit `2^k` checks every position whose index
//! has bit `k` set. With [`Parity::Even`] an overall-parity bit is appended,
//! which turns the code into SECDED: single errors are corrected and double
//! errors are detected.
//!
//! # Examples
//!
//! ```
//! use kmap_hamming::bits::{bits_to_string, parse_bits};
//! use kmap_hamming::hamming::{check, encode, CheckOutcome, Classification, Parity};
//!
//! let data = parse_bits("1011").unwrap();
//! let encoded = encode(&data, Parity::Even).unwrap();
//! assert_eq!(encoded.codeword(), "01100110");
//!
//! let mut received = encoded.bits().to_vec();
//! received[4] = !received[4];
//! match check(&received, Parity::Even) {
//!     CheckOutcome::Checked(report) => {
//!         assert_eq!(report.syndrome(), 5);
//!         assert_eq!(report.classification(), Classification::CorrectableSingleBit);
//!         assert_eq!(bits_to_string(report.corrected()), "01100110");
//!     }
//!     CheckOutcome::Invalid { .. } => unreachable!(),
//! }
//! ```

mod error;
mod layout;

pub use error::HammingError;
pub use layout::{is_code_length, parity_count_for, HammingLayout, Role};

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::bits::bits_to_string;

/// Shortest codeword `check` will look at
pub const MIN_CODEWORD_BITS: usize = 3;

/// Parity convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parity {
    /// Even parity plus an overall-parity bit (extended Hamming)
    #[default]
    Even,
    /// Odd parity, standard code only
    Odd,
}

impl Parity {
    /// Longer description used in reports
    pub fn describe(self) -> &'static str {
        match self {
            Parity::Even => "Even parity (extended Hamming)",
            Parity::Odd => "Odd parity (standard Hamming)",
        }
    }

    /// Value every parity group must XOR to
    fn expected(self) -> bool {
        self == Parity::Odd
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

impl FromStr for Parity {
    type Err = HammingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "even" => Ok(Parity::Even),
            "odd" => Ok(Parity::Odd),
            _ => Err(HammingError::UnknownParity { value: s.into() }),
        }
    }
}

/// An encoded codeword together with its layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    bits: Vec<bool>,
    layout: HammingLayout,
    parity: Parity,
}

impl Encoded {
    /// Codeword bits, position 1 first, overall-parity bit last if present
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Codeword as a `0`/`1` string
    pub fn codeword(&self) -> String {
        bits_to_string(&self.bits)
    }

    /// Role layout of the standard part
    pub fn layout(&self) -> &HammingLayout {
        &self.layout
    }

    /// Number of parity bits in the standard part
    pub fn parity_count(&self) -> usize {
        self.layout.parity_count()
    }

    /// Length of the standard part (data + parity)
    pub fn total_bits(&self) -> usize {
        self.layout.total_bits()
    }

    /// Convention used to compute the parity bits
    pub fn parity(&self) -> Parity {
        self.parity
    }

    /// Whether an overall-parity bit follows the standard part
    pub fn has_overall_parity(&self) -> bool {
        self.bits.len() > self.layout.total_bits()
    }
}

/// XOR of every position in `1..=len` checked by `parity_position`
fn group_parity(word: &[bool], parity_position: usize, len: usize) -> bool {
    (1..=len)
        .filter(|position| position & parity_position != 0)
        .fold(false, |acc, position| acc ^ word[position - 1])
}

fn xor_all(bits: &[bool]) -> bool {
    bits.iter().fold(false, |acc, &b| acc ^ b)
}

/// Encode `data` into a Hamming codeword
///
/// Data bits fill the non-power-of-two positions in order. Each parity bit
/// is the XOR of the positions it checks, complemented for odd parity. Even
/// parity also appends the XOR of the whole codeword.
pub fn encode(data: &[bool], parity: Parity) -> Result<Encoded, HammingError> {
    if data.is_empty() {
        return Err(HammingError::EmptyData);
    }

    let layout = HammingLayout::for_data_bits(data.len());
    let total = layout.total_bits();
    let mut word = vec![false; total];

    for (slot, role) in word.iter_mut().zip(layout.roles()) {
        if let Role::Data(k) = *role {
            *slot = data[k - 1];
        }
    }

    // Parity positions never check one another, so order does not matter
    for position in layout.parity_positions() {
        let value = group_parity(&word, position, total) ^ parity.expected();
        word[position - 1] = value;
    }

    if parity == Parity::Even {
        let overall = xor_all(&word);
        word.push(overall);
    }

    debug!(
        "encoded {} data bits as {} ({} parity bits, {})",
        data.len(),
        bits_to_string(&word),
        layout.parity_count(),
        parity
    );

    Ok(Encoded {
        bits: word,
        layout,
        parity,
    })
}

/// State of the overall-parity bit after a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallParity {
    /// Whole word XORs to zero
    Ok,
    /// Whole word XORs to one
    Mismatch,
    /// No overall-parity bit present
    NotApplicable,
}

impl fmt::Display for OverallParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverallParity::Ok => write!(f, "OK"),
            OverallParity::Mismatch => write!(f, "Mismatch"),
            OverallParity::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Diagnosis of a received codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Standard code, syndrome zero
    NoErrorOrUndetectable,
    /// Standard code, syndrome pointed at a bit that was flipped back
    SingleBitCorrected,
    /// Extended code, everything consistent
    NoError,
    /// Extended code, syndrome and overall parity agree on one bad bit
    CorrectableSingleBit,
    /// Extended code, only the overall-parity bit is wrong
    OverallParityBit,
    /// Extended code, syndrome set but overall parity consistent
    DoubleBit,
}

impl Classification {
    /// Whether the received word was changed to produce the corrected one
    pub fn is_corrected(self) -> bool {
        matches!(
            self,
            Classification::SingleBitCorrected
                | Classification::CorrectableSingleBit
                | Classification::OverallParityBit
        )
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Classification::NoErrorOrUndetectable => "No error (or undetectable even-bit error).",
            Classification::SingleBitCorrected => "Single-bit error; corrected.",
            Classification::NoError => "No error.",
            Classification::CorrectableSingleBit => "Correctable single-bit error.",
            Classification::OverallParityBit => "Error in overall parity bit.",
            Classification::DoubleBit => "Detected double-bit error (uncorrectable).",
        };
        write!(f, "{}", message)
    }
}

/// Result of checking a received codeword of plausible length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    parity: Parity,
    layout: HammingLayout,
    syndrome: usize,
    overall: OverallParity,
    classification: Classification,
    corrected: Vec<bool>,
}

impl CheckReport {
    /// Convention the word was checked against
    pub fn parity(&self) -> Parity {
        self.parity
    }

    /// Layout reconstructed from the received length
    pub fn layout(&self) -> &HammingLayout {
        &self.layout
    }

    /// OR of the positions of every failing parity group
    pub fn syndrome(&self) -> usize {
        self.syndrome
    }

    /// Syndrome in binary, `0` when clean
    pub fn syndrome_bits(&self) -> String {
        format!("{:b}", self.syndrome)
    }

    /// Overall-parity status
    pub fn overall(&self) -> OverallParity {
        self.overall
    }

    /// Error diagnosis
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// The corrected codeword (unchanged when nothing was corrected)
    pub fn corrected(&self) -> &[bool] {
        &self.corrected
    }

    /// Corrected codeword as a `0`/`1` string
    pub fn corrected_codeword(&self) -> String {
        bits_to_string(&self.corrected)
    }

    /// Data bits extracted from the corrected codeword
    pub fn data_bits(&self) -> Vec<bool> {
        self.layout
            .roles()
            .iter()
            .zip(&self.corrected)
            .filter(|(role, _)| matches!(role, Role::Data(_)))
            .map(|(_, &bit)| bit)
            .collect()
    }
}

/// Outcome of [`check`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The input cannot be a codeword at all
    Invalid {
        /// Why the input was rejected
        message: String,
    },
    /// The input was checked
    Checked(CheckReport),
}

/// Check a received codeword and correct it where possible
///
/// The layout is reconstructed from the received length. With even parity
/// the last bit is taken as the overall-parity bit whenever the bits before
/// it form a valid standard codeword length; otherwise, and always with odd
/// parity, every bit belongs to the standard code.
pub fn check(received: &[bool], parity: Parity) -> CheckOutcome {
    let n = received.len();
    if n < MIN_CODEWORD_BITS {
        return CheckOutcome::Invalid {
            message: "Too short to be a Hamming code".to_string(),
        };
    }

    let extended = parity == Parity::Even && is_code_length(n - 1);
    let code_len = if extended { n - 1 } else { n };
    let layout = HammingLayout::for_code_length(code_len);

    let syndrome = layout
        .parity_positions()
        .filter(|&position| group_parity(received, position, code_len) != parity.expected())
        .fold(0, |acc, position| acc | position);

    let overall = if !extended {
        OverallParity::NotApplicable
    } else if xor_all(received) {
        OverallParity::Mismatch
    } else {
        OverallParity::Ok
    };

    let mut corrected = received.to_vec();
    let classification = match (overall, syndrome) {
        (OverallParity::NotApplicable, 0) => Classification::NoErrorOrUndetectable,
        (OverallParity::NotApplicable, s) => {
            flip(&mut corrected, s, code_len);
            Classification::SingleBitCorrected
        }
        (OverallParity::Ok, 0) => Classification::NoError,
        (OverallParity::Mismatch, 0) => {
            corrected[n - 1] = !corrected[n - 1];
            Classification::OverallParityBit
        }
        (OverallParity::Mismatch, s) => {
            flip(&mut corrected, s, code_len);
            Classification::CorrectableSingleBit
        }
        (OverallParity::Ok, _) => Classification::DoubleBit,
    };

    debug!(
        "checked {} bits ({}): syndrome {}, overall {}, {}",
        n, parity, syndrome, overall, classification
    );

    CheckOutcome::Checked(CheckReport {
        parity,
        layout,
        syndrome,
        overall,
        classification,
        corrected,
    })
}

/// Flip 1-based `position` if it lies within the standard part
fn flip(word: &mut [bool], position: usize, code_len: usize) {
    if (1..=code_len).contains(&position) {
        word[position - 1] = !word[position - 1];
    } else {
        warn!(
            "syndrome {} points outside the {}-bit codeword, nothing flipped",
            position, code_len
        );
    }
}

#[cfg(test)]
mod tests;

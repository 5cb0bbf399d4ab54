//! Bit and index helpers shared by the minimiser and the Hamming codec
//!
//! These are the small leaf utilities everything else builds on:
//! - [`gray_code`]: reflected binary ordering for Karnaugh-map axes
//! - [`num_to_bits`]: fixed-width big-endian rendering of an index
//! - [`parse_index_list`]: lenient parsing of free-form minterm lists
//! - [`parse_bits`]: strict parsing of `0`/`1` strings

use std::fmt;
use std::io;

/// Variable names used for input columns, most significant bit first
pub const VARIABLE_NAMES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

/// Reflected binary Gray code sequence of length `2^n`
///
/// Element `i` is `i ^ (i >> 1)`, so neighbouring entries (including the
/// wrap-around from last to first) differ in exactly one bit.
///
/// # Examples
///
/// ```
/// use kmap_hamming::bits::gray_code;
///
/// assert_eq!(gray_code(2), vec![0, 1, 3, 2]);
/// assert_eq!(gray_code(0), vec![0]);
/// ```
pub fn gray_code(n: usize) -> Vec<usize> {
    (0..1usize << n).map(|i| i ^ (i >> 1)).collect()
}

/// Render `value` as a zero-padded big-endian binary string of `width` bits
///
/// Callers must keep `value < 2^width`; wider values render with more digits.
///
/// # Examples
///
/// ```
/// use kmap_hamming::bits::num_to_bits;
///
/// assert_eq!(num_to_bits(5, 4), "0101");
/// ```
pub fn num_to_bits(value: usize, width: usize) -> String {
    format!("{:0width$b}", value, width = width)
}

/// Parse a free-form list of indices such as `"1, 2;3  4"`
///
/// Tokens are separated by commas, semicolons or whitespace. Tokens that are
/// not non-negative base-10 integers are dropped rather than reported.
///
/// # Examples
///
/// ```
/// use kmap_hamming::bits::parse_index_list;
///
/// assert_eq!(parse_index_list("1, 2;3  4"), vec![1, 2, 3, 4]);
/// assert_eq!(parse_index_list("a,-1,2"), vec![2]);
/// assert!(parse_index_list("   ").is_empty());
/// ```
pub fn parse_index_list(text: &str) -> Vec<usize> {
    text.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<usize>().ok())
        .collect()
}

/// The first `count` variable names (`A`, `B`, ...), capped at ten
pub fn variable_names(count: usize) -> &'static [&'static str] {
    &VARIABLE_NAMES[..count.min(VARIABLE_NAMES.len())]
}

/// Error raised when a bit string contains something other than `0` or `1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitStringError {
    /// The input was empty after trimming
    Empty,
    /// A character other than `0`/`1` was found
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Zero-based position in the trimmed input
        position: usize,
    },
}

impl fmt::Display for BitStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitStringError::Empty => write!(f, "Bit string is empty"),
            BitStringError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid bit '{}' at position {} (use only 0/1)",
                character, position
            ),
        }
    }
}

impl std::error::Error for BitStringError {}

impl From<BitStringError> for io::Error {
    fn from(err: BitStringError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Parse a `0`/`1` string (surrounding whitespace ignored) into bits
///
/// # Examples
///
/// ```
/// use kmap_hamming::bits::parse_bits;
///
/// assert_eq!(parse_bits(" 101 ").unwrap(), vec![true, false, true]);
/// assert!(parse_bits("10a").is_err());
/// ```
pub fn parse_bits(text: &str) -> Result<Vec<bool>, BitStringError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(BitStringError::Empty);
    }
    text.chars()
        .enumerate()
        .map(|(position, character)| match character {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(BitStringError::InvalidCharacter {
                character,
                position,
            }),
        })
        .collect()
}

/// Render bits back to a `0`/`1` string
pub fn bits_to_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

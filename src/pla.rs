//! PLA (Programmable Logic Array) format support
//!
//! Single-output functions are exchanged with Espresso-style tools as PLA
//! text. Writing produces either the function as given (one row per
//! true-minterm and don't-care) or the minimised cover (one row per selected
//! implicant). Reading accepts any single-output PLA and folds it into a
//! [`KmapState`].
//!
//! ```
//! use kmap_hamming::pla::{pla_string, read_pla_str};
//! use kmap_hamming::ToolkitConfig;
//!
//! let text = pla_string(&ToolkitConfig::default(), 2, &[1, 3], &[0]).unwrap();
//! assert_eq!(text, ".i 2\n.o 1\n.ilb A B\n.ob F\n01 1\n11 1\n00 -\n.e\n");
//!
//! let state = read_pla_str(&text).unwrap();
//! assert_eq!(state.minterms(), vec![1, 3]);
//! assert_eq!(state.dont_cares(), vec![0]);
//! ```

mod error;

pub use error::{PLAError, PLAReadError, PLAWriteError};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Cursor, Write};
use std::path::Path;

use log::debug;

use crate::bits::{num_to_bits, variable_names};
use crate::kmap::{InputSource, KmapState};
use crate::qm::{self, QmSolution};
use crate::ToolkitConfig;

fn write_header<W: Write>(
    writer: &mut W,
    config: &ToolkitConfig,
    num_vars: usize,
) -> Result<(), PLAWriteError> {
    writeln!(writer, ".i {}", num_vars)?;
    writeln!(writer, ".o 1")?;
    writeln!(writer, ".ilb {}", variable_names(num_vars).join(" "))?;
    writeln!(writer, ".ob {}", config.output_name)?;
    Ok(())
}

/// Write a function as PLA text
///
/// Each true-minterm becomes a row with output `1`, each don't-care a row
/// with output `-`.
pub fn write_pla<W: Write>(
    writer: &mut W,
    config: &ToolkitConfig,
    num_vars: usize,
    ones: &[usize],
    dont_cares: &[usize],
) -> Result<(), PLAWriteError> {
    write_header(writer, config, num_vars)?;
    for &m in ones {
        writeln!(writer, "{} 1", num_to_bits(m, num_vars))?;
    }
    for &m in dont_cares {
        writeln!(writer, "{} -", num_to_bits(m, num_vars))?;
    }
    writeln!(writer, ".e")?;
    Ok(())
}

/// Write the selected implicants of `solution` as PLA cube rows
pub fn write_cover_pla<W: Write>(
    writer: &mut W,
    config: &ToolkitConfig,
    solution: &QmSolution,
) -> Result<(), PLAWriteError> {
    write_header(writer, config, solution.num_vars())?;
    writeln!(writer, ".p {}", solution.essential_indices().len())?;
    for imp in solution.selected() {
        writeln!(writer, "{} 1", imp.mask())?;
    }
    writeln!(writer, ".e")?;
    Ok(())
}

fn into_string(buffer: Vec<u8>) -> Result<String, PLAWriteError> {
    String::from_utf8(buffer)
        .map_err(|e| PLAWriteError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// [`write_pla`] into a `String`
pub fn pla_string(
    config: &ToolkitConfig,
    num_vars: usize,
    ones: &[usize],
    dont_cares: &[usize],
) -> Result<String, PLAWriteError> {
    let mut buffer = Vec::new();
    write_pla(&mut buffer, config, num_vars, ones, dont_cares)?;
    into_string(buffer)
}

/// [`write_cover_pla`] into a `String`
pub fn cover_pla_string(
    config: &ToolkitConfig,
    solution: &QmSolution,
) -> Result<String, PLAWriteError> {
    let mut buffer = Vec::new();
    write_cover_pla(&mut buffer, config, solution)?;
    into_string(buffer)
}

/// [`write_pla`] into a file
pub fn write_pla_file<P: AsRef<Path>>(
    path: P,
    config: &ToolkitConfig,
    num_vars: usize,
    ones: &[usize],
    dont_cares: &[usize],
) -> Result<(), PLAWriteError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_pla(&mut writer, config, num_vars, ones, dont_cares)?;
    writer.flush()?;
    Ok(())
}

/// [`write_cover_pla`] into a file
pub fn write_cover_pla_file<P: AsRef<Path>>(
    path: P,
    config: &ToolkitConfig,
    solution: &QmSolution,
) -> Result<(), PLAWriteError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_cover_pla(&mut writer, config, solution)?;
    writer.flush()?;
    Ok(())
}

fn parse_count(value: Option<&&str>) -> Option<usize> {
    value.and_then(|s| s.parse().ok())
}

/// Every minterm index matched by an input pattern, MSB first
fn expand(pattern: &[Option<bool>]) -> Vec<usize> {
    pattern.iter().fold(vec![0], |indices, bit| {
        indices
            .into_iter()
            .flat_map(|v| match bit {
                Some(b) => vec![(v << 1) | usize::from(*b)],
                None => vec![v << 1, (v << 1) | 1],
            })
            .collect()
    })
}

/// Parse single-output PLA text into a K-map state
///
/// Directives may appear in any order; `.ilb`, `.ob`, `.p` and `.type` are
/// accepted and ignored. Input columns take `0`, `1` or `-` (`2` is read as
/// `-`) and expand to every matching minterm. Output `1` marks a
/// true-minterm, `-` or `2` a don't-care, and `0` or `~` is skipped. A
/// minterm that is both a one and a don't-care is a one.
pub fn read_pla<R: BufRead>(reader: R) -> Result<KmapState, PLAReadError> {
    let mut num_inputs: Option<usize> = None;
    let mut rows: Vec<(usize, Vec<char>)> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('.') {
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.first().copied() {
                Some(".i") => {
                    let count = parse_count(parts.get(1)).ok_or_else(|| {
                        PLAError::InvalidInputDirective {
                            value: parts.get(1).copied().unwrap_or("").into(),
                        }
                    })?;
                    num_inputs = Some(count);
                }
                Some(".o") => {
                    let count = parse_count(parts.get(1)).ok_or_else(|| {
                        PLAError::InvalidOutputDirective {
                            value: parts.get(1).copied().unwrap_or("").into(),
                        }
                    })?;
                    if count != 1 {
                        return Err(PLAError::UnsupportedOutputCount { count }.into());
                    }
                }
                Some(".e") | Some(".end") => break,
                Some(other) => debug!("ignoring directive {} on line {}", other, line_no),
                None => {}
            }
            continue;
        }

        let cube: Vec<char> = line
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        rows.push((line_no, cube));
    }

    let num_inputs = match num_inputs {
        Some(n) => n,
        None => rows
            .first()
            .and_then(|(_, cube)| cube.len().checked_sub(1))
            .ok_or(PLAError::MissingInputDirective)?,
    };
    qm::check_var_count(num_inputs).map_err(PLAError::from)?;

    let mut ones = Vec::new();
    let mut dont_cares = Vec::new();
    for (line, cube) in rows {
        if cube.len() != num_inputs + 1 {
            return Err(PLAError::CubeDimensionMismatch {
                line,
                expected_inputs: num_inputs,
                actual_width: cube.len(),
            }
            .into());
        }

        let pattern = cube[..num_inputs]
            .iter()
            .enumerate()
            .map(|(position, &c)| match c {
                '0' => Ok(Some(false)),
                '1' => Ok(Some(true)),
                '-' | '2' => Ok(None),
                character => Err(PLAError::InvalidInputCharacter {
                    character,
                    line,
                    position,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        match cube[num_inputs] {
            '1' => ones.extend(expand(&pattern)),
            '-' | '2' => dont_cares.extend(expand(&pattern)),
            '0' | '~' => {}
            character => return Err(PLAError::InvalidOutputCharacter { character, line }.into()),
        }
    }

    debug!(
        "read PLA with {} inputs: {} ones, {} don't-cares",
        num_inputs,
        ones.len(),
        dont_cares.len()
    );
    Ok(KmapState::from_source(num_inputs, InputSource::Minterms { ones, dont_cares })
        .map_err(PLAError::from)?)
}

/// [`read_pla`] from a string
pub fn read_pla_str(s: &str) -> Result<KmapState, PLAReadError> {
    read_pla(Cursor::new(s.as_bytes()))
}

/// [`read_pla`] from a file
pub fn read_pla_file<P: AsRef<Path>>(path: P) -> Result<KmapState, PLAReadError> {
    read_pla(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmap::CellValue;
    use crate::qm::simplify;

    #[test]
    fn test_expand() {
        assert_eq!(expand(&[Some(true), None, Some(false)]), vec![0b100, 0b110]);
        assert_eq!(expand(&[None, None]), vec![0, 1, 2, 3]);
        assert_eq!(expand(&[]), vec![0]);
    }

    #[test]
    fn test_cover_pla() {
        let solution = simplify(4, &[0, 1, 2, 3, 5, 7, 8, 9, 10, 11, 13, 15], &[]).unwrap();
        let text = cover_pla_string(&ToolkitConfig::default(), &solution).unwrap();
        assert_eq!(
            text,
            ".i 4\n.o 1\n.ilb A B C D\n.ob F\n.p 2\n-0-- 1\n---1 1\n.e\n"
        );

        let state = read_pla_str(&text).unwrap();
        assert_eq!(state.minterms(), vec![0, 1, 2, 3, 5, 7, 8, 9, 10, 11, 13, 15]);
    }

    #[test]
    fn test_read_directives_in_any_order() {
        let text = "# comment\n.ob Y\n.ilb x y z\n.o 1\n.i 3\n1-1 1\n000 2\n010 0\n.e\n111 1\n";
        let state = read_pla_str(text).unwrap();
        assert_eq!(state.minterms(), vec![5, 7]);
        assert_eq!(state.dont_cares(), vec![0]);
    }

    #[test]
    fn test_read_infers_inputs() {
        let state = read_pla_str("10 1\n0- -\n").unwrap();
        assert_eq!(state.num_vars(), 2);
        assert_eq!(state.get(2), Some(CellValue::One));
        assert_eq!(state.dont_cares(), vec![0, 1]);
    }

    #[test]
    fn test_one_wins_over_dont_care() {
        let state = read_pla_str(".i 2\n.o 1\n-1 -\n11 1\n").unwrap();
        assert_eq!(state.minterms(), vec![3]);
        assert_eq!(state.dont_cares(), vec![1]);
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(
            read_pla_str(".i 2\n.o 2\n"),
            Err(PLAReadError::PLA(PLAError::UnsupportedOutputCount { count: 2 }))
        ));
        assert!(matches!(
            read_pla_str(".i x\n"),
            Err(PLAReadError::PLA(PLAError::InvalidInputDirective { .. }))
        ));
        assert!(matches!(
            read_pla_str(".o 1\n"),
            Err(PLAReadError::PLA(PLAError::MissingInputDirective))
        ));
        assert!(matches!(
            read_pla_str(".i 2\n101 1\n"),
            Err(PLAReadError::PLA(PLAError::CubeDimensionMismatch { line: 2, .. }))
        ));
        assert!(matches!(
            read_pla_str(".i 2\n1a 1\n"),
            Err(PLAReadError::PLA(PLAError::InvalidInputCharacter {
                character: 'a',
                position: 1,
                ..
            }))
        ));
        assert!(matches!(
            read_pla_str(".i 2\n11 z\n"),
            Err(PLAReadError::PLA(PLAError::InvalidOutputCharacter { character: 'z', .. }))
        ));
        assert!(matches!(
            read_pla_str(".i 11\n.o 1\n"),
            Err(PLAReadError::PLA(PLAError::InputCountOutOfRange { count: 11, .. }))
        ));
        assert!(matches!(
            read_pla_str(".i 64\n.o 1\n"),
            Err(PLAReadError::PLA(PLAError::InputCountOutOfRange { count: 64, .. }))
        ));
        assert!(matches!(
            read_pla_str("1 1\n"),
            Err(PLAReadError::PLA(PLAError::InputCountOutOfRange {
                count: 1,
                min: 2,
                ..
            }))
        ));
    }
}

//! Verilog and VHDL emission for a minimised function
//!
//! The generated design is a single combinational module whose output is
//! the two-level sum of the selected implicants.
//!
//! # Examples
//!
//! ```
//! use kmap_hamming::hdl::{emit, HdlLanguage};
//! use kmap_hamming::qm::simplify;
//! use kmap_hamming::ToolkitConfig;
//!
//! let solution = simplify(2, &[1, 2], &[]).unwrap();
//! let verilog = emit(&ToolkitConfig::default(), &solution, HdlLanguage::Verilog);
//! assert!(verilog.contains("assign F = (~A & B) | (A & ~B);"));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::bits::variable_names;
use crate::qm::QmSolution;
use crate::ToolkitConfig;

/// Target hardware description language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HdlLanguage {
    /// Verilog-2001
    Verilog,
    /// VHDL with `IEEE.STD_LOGIC_1164`
    Vhdl,
}

impl fmt::Display for HdlLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HdlLanguage::Verilog => write!(f, "verilog"),
            HdlLanguage::Vhdl => write!(f, "vhdl"),
        }
    }
}

impl FromStr for HdlLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verilog" | "v" => Ok(HdlLanguage::Verilog),
            "vhdl" | "vhd" => Ok(HdlLanguage::Vhdl),
            other => Err(format!("unknown HDL '{}'", other)),
        }
    }
}

/// Operator spelling for one language
struct Syntax {
    not: &'static str,
    and: &'static str,
    or: &'static str,
    zero: &'static str,
    one: &'static str,
}

const VERILOG: Syntax = Syntax {
    not: "~",
    and: " & ",
    or: " | ",
    zero: "1'b0",
    one: "1'b1",
};

const VHDL: Syntax = Syntax {
    not: "not ",
    and: " and ",
    or: " or ",
    zero: "'0'",
    one: "'1'",
};

/// Right-hand side driving the output
fn sum_of_products(solution: &QmSolution, syntax: &Syntax) -> String {
    let names = variable_names(solution.num_vars());
    let products: Vec<Vec<String>> = solution
        .selected()
        .map(|imp| {
            imp.pattern()
                .iter()
                .zip(names)
                .filter_map(|(bit, name)| match bit {
                    Some(true) => Some(name.to_string()),
                    Some(false) => Some(format!("{}{}", syntax.not, name)),
                    None => None,
                })
                .collect()
        })
        .collect();

    if products.is_empty() {
        return syntax.zero.to_string();
    }
    if products.iter().any(Vec::is_empty) {
        return syntax.one.to_string();
    }

    let wrap = products.len() > 1;
    products
        .iter()
        .map(|literals| {
            let product = literals.join(syntax.and);
            if wrap && literals.len() > 1 {
                format!("({})", product)
            } else {
                product
            }
        })
        .collect::<Vec<_>>()
        .join(syntax.or)
}

/// Render `solution` as a complete module in `language`
pub fn emit(config: &ToolkitConfig, solution: &QmSolution, language: HdlLanguage) -> String {
    let inputs = variable_names(solution.num_vars());
    let module = &config.module_name;
    let output = &config.output_name;

    let lines: Vec<String> = match language {
        HdlLanguage::Verilog => vec![
            format!("module {}(", module),
            format!("  input {},", inputs.join(", ")),
            format!("  output {}", output),
            ");".to_string(),
            format!("  assign {} = {};", output, sum_of_products(solution, &VERILOG)),
            "endmodule".to_string(),
        ],
        HdlLanguage::Vhdl => {
            let ports: Vec<String> = inputs
                .iter()
                .map(|name| format!("{} : in STD_LOGIC", name))
                .collect();
            vec![
                "library IEEE;".to_string(),
                "use IEEE.STD_LOGIC_1164.ALL;".to_string(),
                String::new(),
                format!("entity {} is", module),
                "  port (".to_string(),
                format!("    {};", ports.join(";\n    ")),
                format!("    {} : out STD_LOGIC", output),
                "  );".to_string(),
                format!("end {};", module),
                String::new(),
                format!("architecture rtl of {} is", module),
                "begin".to_string(),
                format!("  {} <= {};", output, sum_of_products(solution, &VHDL)),
                "end rtl;".to_string(),
            ]
        }
    };
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qm::simplify;

    #[test]
    fn test_verilog_module() {
        let solution = simplify(3, &[1, 3, 5], &[7]).unwrap();
        let text = emit(&ToolkitConfig::default(), &solution, HdlLanguage::Verilog);
        assert_eq!(
            text,
            "module kmap_func(\n  input A, B, C,\n  output F\n);\n  assign F = C;\nendmodule"
        );
    }

    #[test]
    fn test_vhdl_entity() {
        let solution = simplify(2, &[0, 3], &[]).unwrap();
        let text = emit(&ToolkitConfig::default(), &solution, HdlLanguage::Vhdl);
        assert!(text.starts_with("library IEEE;\nuse IEEE.STD_LOGIC_1164.ALL;\n\nentity kmap_func is"));
        assert!(text.contains("    A : in STD_LOGIC;\n    B : in STD_LOGIC;\n    F : out STD_LOGIC\n"));
        assert!(text.contains("  F <= (not A and not B) or (A and B);"));
        assert!(text.ends_with("end rtl;"));
    }

    #[test]
    fn test_constants() {
        let zero = simplify(2, &[], &[]).unwrap();
        let one = simplify(2, &[0, 1, 2, 3], &[]).unwrap();
        let config = ToolkitConfig::default();
        assert!(emit(&config, &zero, HdlLanguage::Verilog).contains("assign F = 1'b0;"));
        assert!(emit(&config, &one, HdlLanguage::Verilog).contains("assign F = 1'b1;"));
        assert!(emit(&config, &zero, HdlLanguage::Vhdl).contains("F <= '0';"));
        assert!(emit(&config, &one, HdlLanguage::Vhdl).contains("F <= '1';"));
    }

    #[test]
    fn test_config_names() {
        let config = ToolkitConfig {
            module_name: "majority".to_string(),
            output_name: "Y".to_string(),
            ..ToolkitConfig::default()
        };
        let solution = simplify(3, &[3, 5, 6, 7], &[]).unwrap();
        let text = emit(&config, &solution, HdlLanguage::Verilog);
        assert!(text.starts_with("module majority("));
        assert!(text.contains("assign Y = "));
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("Verilog".parse::<HdlLanguage>(), Ok(HdlLanguage::Verilog));
        assert_eq!("vhdl".parse::<HdlLanguage>(), Ok(HdlLanguage::Vhdl));
        assert!("systemc".parse::<HdlLanguage>().is_err());
    }
}

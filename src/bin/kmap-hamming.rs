//! kmap-hamming - Command Line Interface
//!
//! Minimise single-output Boolean functions and encode or check Hamming
//! codewords from the terminal.

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use kmap_hamming::bits::{bits_to_string, parse_bits, parse_index_list};
use kmap_hamming::hamming::{self, CheckOutcome, Parity};
use kmap_hamming::hdl::{self, HdlLanguage};
use kmap_hamming::kmap::{self, InputSource, KmapGrid, KmapState, Method};
use kmap_hamming::qm::{self, implicant_term};
use kmap_hamming::{pla, Formula, ToolkitConfig, ToolkitError};
use std::fs;
use std::path::PathBuf;
use std::process;

const DEFAULT_VARS: usize = 4;

#[derive(Parser, Debug)]
#[command(name = "kmap-hamming")]
#[command(about = "Quine-McCluskey minimiser and Hamming code toolkit", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Minimise a Boolean function
    Solve(SolveArgs),
    /// Hamming code operations
    Hamming {
        #[command(subcommand)]
        command: HammingCommand,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Verilog module
    Verilog,
    /// VHDL entity
    Vhdl,
    /// PLA of the input function
    Pla,
    /// PLA of the minimised cover
    CoverPla,
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["minterms", "maxterms", "truth_table", "pla", "expr"])
))]
struct SolveArgs {
    /// Number of input variables, 2 to 10 (ignored for PLA input)
    ///
    /// Defaults to 4, or to the highest variable used by --expr.
    #[arg(short = 'n', long = "vars")]
    vars: Option<usize>,

    /// True-minterm indices, e.g. "0,1,5 7"
    #[arg(short, long)]
    minterms: Option<String>,

    /// False-maxterm indices; every other index is a one
    #[arg(short = 'M', long)]
    maxterms: Option<String>,

    /// Don't-care indices
    #[arg(short, long = "dont-cares", default_value = "")]
    dont_cares: String,

    /// Truth-table file, one "<bits> <0|1|x>" row per line
    #[arg(short, long = "truth-table", value_name = "FILE")]
    truth_table: Option<PathBuf>,

    /// Single-output PLA file
    #[arg(short, long, value_name = "FILE")]
    pla: Option<PathBuf>,

    /// Formula such as "AB' + C"
    #[arg(short, long)]
    expr: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Module/entity name for HDL output
    #[arg(long)]
    module_name: Option<String>,

    /// Output signal name
    #[arg(long)]
    output_name: Option<String>,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum HammingCommand {
    /// Encode data bits into a codeword
    Encode {
        /// Data bits, e.g. 1011
        data: String,
        /// Parity convention
        #[arg(short, long, default_value = "even")]
        parity: Parity,
        /// Print the parity coverage table
        #[arg(long)]
        coverage: bool,
    },
    /// Check and correct a received codeword
    Check {
        /// Received bits
        received: String,
        /// Parity convention
        #[arg(short, long, default_value = "even")]
        parity: Parity,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), ToolkitError> {
    match command {
        Command::Solve(args) => solve(args),
        Command::Hamming { command } => {
            println!("{}", hamming_report(command)?);
            Ok(())
        }
    }
}

fn read_state(args: &SolveArgs) -> Result<KmapState, ToolkitError> {
    if let Some(path) = &args.pla {
        return Ok(pla::read_pla_file(path)?);
    }

    let dont_cares = parse_index_list(&args.dont_cares);

    if let Some(text) = &args.expr {
        let formula = Formula::parse(text)?;
        let vars = args
            .vars
            .unwrap_or_else(|| formula.required_vars().max(qm::MIN_VARS));
        qm::check_var_count(vars)?;
        let source = InputSource::Minterms {
            ones: formula.minterms(vars)?,
            dont_cares,
        };
        return Ok(KmapState::from_source(vars, source)?);
    }

    let vars = args.vars.unwrap_or(DEFAULT_VARS);
    qm::check_var_count(vars)?;

    let source = if let Some(text) = &args.minterms {
        InputSource::Minterms {
            ones: parse_index_list(text),
            dont_cares,
        }
    } else if let Some(text) = &args.maxterms {
        InputSource::Maxterms {
            maxterms: parse_index_list(text),
            dont_cares,
        }
    } else if let Some(path) = &args.truth_table {
        InputSource::TruthTable(fs::read_to_string(path)?)
    } else {
        InputSource::Grid(KmapState::new(vars)?)
    };

    Ok(KmapState::from_source(vars, source)?)
}

fn solve(args: SolveArgs) -> Result<(), ToolkitError> {
    let defaults = ToolkitConfig::default();
    let config = ToolkitConfig {
        module_name: args.module_name.clone().unwrap_or(defaults.module_name),
        output_name: args.output_name.clone().unwrap_or(defaults.output_name),
        ..ToolkitConfig::new()
    };

    let state = read_state(&args)?;
    let solution = kmap::solve_with_limit(&state, config.kmap_max_vars)?;

    let output = match args.format {
        OutputFormat::Text => text_report(&state, &solution),
        OutputFormat::Verilog => hdl::emit(&config, &solution.qm, HdlLanguage::Verilog),
        OutputFormat::Vhdl => hdl::emit(&config, &solution.qm, HdlLanguage::Vhdl),
        OutputFormat::Pla => pla::pla_string(
            &config,
            state.num_vars(),
            &state.minterms(),
            &state.dont_cares(),
        )?,
        OutputFormat::CoverPla => pla::cover_pla_string(&config, &solution.qm)?,
    };

    match &args.output_file {
        Some(path) => fs::write(path, output)?,
        None => println!("{}", output.trim_end()),
    }
    Ok(())
}

fn text_report(state: &KmapState, solution: &kmap::KmapSolution) -> String {
    let qm = &solution.qm;
    let mut lines = vec![
        format!("Method: {}", solution.method),
        format!("SOP: F = {}", qm.sop()),
        format!("POS: F = {}", solution.pos),
        format!(
            "Cost: {} terms, {} literals",
            qm.essential_indices().len(),
            qm.literal_count()
        ),
        String::new(),
        "Prime implicants:".to_string(),
    ];

    for (idx, imp) in qm.prime_implicants().iter().enumerate() {
        let tag = match qm.essential_indices().iter().position(|&i| i == idx) {
            Some(p) if p < qm.essential_count() => "essential",
            Some(_) => "selected",
            None => "",
        };
        let covers: Vec<String> = imp.covers().iter().map(|m| m.to_string()).collect();
        lines.push(format!(
            "  {}  {:<12} ({}) {}",
            imp.mask(),
            implicant_term(imp.pattern()),
            covers.join(","),
            tag
        ));
    }

    lines.push(String::new());
    lines.push("Steps:".to_string());
    lines.extend(qm.steps().into_iter().map(|s| format!("  {}", s)));

    if solution.method == Method::KarnaughMap {
        if let Some(grid) = KmapGrid::for_state(state) {
            lines.push(String::new());
            lines.push(grid.render(state));
        }
    }

    lines.join("\n")
}

fn hamming_report(command: HammingCommand) -> Result<String, ToolkitError> {
    match command {
        HammingCommand::Encode {
            data,
            parity,
            coverage,
        } => {
            let encoded = hamming::encode(&parse_bits(&data)?, parity)?;
            let mut lines = vec![
                format!("Codeword: {}", encoded.codeword()),
                format!(
                    "Parity bits: {} ({})",
                    encoded.parity_count(),
                    parity.describe()
                ),
                format!("Total bits: {}", encoded.bits().len()),
                String::new(),
                encoded.layout().layout_table(),
            ];
            if coverage {
                lines.push(String::new());
                lines.push(encoded.layout().coverage_table());
            }
            Ok(lines.join("\n"))
        }
        HammingCommand::Check { received, parity } => {
            let bits = parse_bits(&received)?;
            Ok(match hamming::check(&bits, parity) {
                CheckOutcome::Invalid { message } => message,
                CheckOutcome::Checked(report) => [
                    report.classification().to_string(),
                    format!("Syndrome: {} ({})", report.syndrome(), report.syndrome_bits()),
                    format!("Overall parity: {}", report.overall()),
                    format!("Corrected: {}", report.corrected_codeword()),
                    format!("Data: {}", bits_to_string(&report.data_bits())),
                ]
                .join("\n"),
            })
        }
    }
}

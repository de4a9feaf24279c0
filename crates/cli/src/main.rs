//! RV32M reference test-vector CLI.
//!
//! This binary provides a single entry point for the reference vectors. It performs:
//! 1. **Listing:** Print the catalog (optionally with instruction encodings) as text or JSON.
//! 2. **Running:** Execute a test program with diagnostic or memory-mapped output.
//! 3. **Checking:** Compare observed results from a JSON file against the catalog.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rvm_vectors::config::{Config, OutputMode};
use rvm_vectors::isa::Instruction;
use rvm_vectors::programs::ProgramKind;
use rvm_vectors::sim::{RunOutcome, Runner};
use rvm_vectors::vectors::{self, CATALOG, Observation, TestCase};

type CliResult = Result<ExitCode, Box<dyn Error>>;

#[derive(Parser, Debug)]
#[command(
    name = "rvmvec",
    author,
    version,
    about = "RV32M reference test vectors",
    long_about = "List, run and check the RV32M multiply/divide reference vectors.\n\nExamples:\n  rvmvec vectors --encode\n  rvmvec run muldiv --mode mmio\n  rvmvec run sequence --config run.json\n  rvmvec check observed.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the curated test-vector catalog.
    Vectors {
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Include the RV32M instruction word for each case.
        #[arg(long)]
        encode: bool,
    },

    /// Run a test program and publish its results.
    Run {
        /// Program to run.
        #[arg(value_enum)]
        program: ProgramArg,

        /// Output mode; overrides the configuration file.
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Report format after the run.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Check observed results (JSON array of {op, a, b, result}) against the catalog.
    Check {
        /// File with the observed results.
        observed: PathBuf,

        /// Report format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProgramArg {
    Muldiv,
    Sequence,
}

impl From<ProgramArg> for ProgramKind {
    fn from(arg: ProgramArg) -> Self {
        match arg {
            ProgramArg::Muldiv => Self::MulDiv,
            ProgramArg::Sequence => Self::Sequence,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Diagnostic,
    Mmio,
}

impl From<ModeArg> for OutputMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Diagnostic => Self::Diagnostic,
            ModeArg::Mmio => Self::MemoryMapped,
        }
    }
}

#[derive(Serialize)]
struct EncodedCase {
    #[serde(flatten)]
    case: TestCase,
    instruction: Instruction,
    word: u32,
    asm: String,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Vectors { format, encode } => cmd_vectors(format, encode),
        Commands::Run {
            program,
            mode,
            config,
            format,
        } => cmd_run(program.into(), mode, config, format),
        Commands::Check { observed, format } => cmd_check(&observed, format),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_vectors(format: Format, encode: bool) -> CliResult {
    let mut out = io::stdout().lock();
    match (format, encode) {
        (Format::Json, false) => {
            serde_json::to_writer_pretty(&mut out, &CATALOG[..])?;
            writeln!(out)?;
        }
        (Format::Json, true) => {
            let encoded: Vec<EncodedCase> = CATALOG
                .iter()
                .map(|case| {
                    let instruction = case.instruction();
                    EncodedCase {
                        case: *case,
                        instruction,
                        word: instruction.encode(),
                        asm: instruction.to_string(),
                    }
                })
                .collect();
            serde_json::to_writer_pretty(&mut out, &encoded)?;
            writeln!(out)?;
        }
        (Format::Text, _) => {
            for (i, case) in CATALOG.iter().enumerate() {
                if encode {
                    let instruction = case.instruction();
                    writeln!(
                        out,
                        "{i:2}  {:#010x}  {:<18}  {case}",
                        instruction.encode(),
                        instruction.to_string()
                    )?;
                } else {
                    writeln!(out, "{i:2}  {case}")?;
                }
            }
            writeln!(out, "accumulator: {:#010x}", vectors::accumulate(&CATALOG))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_run(
    program: ProgramKind,
    mode: Option<ModeArg>,
    config_path: Option<PathBuf>,
    format: Format,
) -> CliResult {
    let mut config = match config_path {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    if let Some(mode) = mode {
        config.general.output = mode.into();
    }
    let runner = Runner::new(config)?;
    info!(?program, mode = ?runner.config().general.output, "run");

    let stdout = io::stdout();
    let outcome = if format == Format::Json {
        // Keep stdout clean for the JSON report.
        runner.run(program, io::sink())?
    } else {
        runner.run(program, stdout.lock())?
    };

    let mut out = stdout.lock();
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &outcome)?;
            writeln!(out)?;
        }
        Format::Text => print_image(&mut out, &outcome)?,
    }
    info!(program = outcome.report.program, done = outcome.report.done, "run finished");
    Ok(ExitCode::SUCCESS)
}

fn print_image(out: &mut impl Write, outcome: &RunOutcome) -> io::Result<()> {
    let Some(image) = &outcome.image else {
        return Ok(());
    };
    let report = &outcome.report;
    for i in 0..report.words.len() {
        if let Some(word) = image.word(i) {
            writeln!(out, "{:#010x}: {word:#010x}", image.base_addr + 4 * i as u64)?;
        }
    }
    for i in 0..report.bytes.len() {
        if let Some(byte) = image.byte(i) {
            writeln!(out, "{:#010x}: {byte:#04x}", image.base_addr + i as u64)?;
        }
    }
    writeln!(out, "{:#010x}: done = {}", image.done_addr, image.done)
}

fn cmd_check(path: &Path, format: Format) -> CliResult {
    let text = fs::read_to_string(path)?;
    let observations: Vec<Observation> = serde_json::from_str(&text)?;
    info!(path = %path.display(), observations = observations.len(), "checking");
    let report = vectors::check_observed(&CATALOG, &observations);
    if !report.passed() {
        warn!(
            mismatches = report.mismatches.len(),
            missing = report.missing.len(),
            "observed results differ from the catalog"
        );
    }

    let mut out = io::stdout().lock();
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        Format::Text => {
            for mismatch in &report.mismatches {
                writeln!(out, "MISMATCH {mismatch}")?;
            }
            for case in &report.missing {
                writeln!(out, "MISSING  {case}")?;
            }
            writeln!(
                out,
                "{} checked, {} mismatched, {} missing",
                report.checked,
                report.mismatches.len(),
                report.missing.len()
            )?;
        }
    }

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

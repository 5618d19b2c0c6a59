//! FPU conformance harness CLI.
//!
//! This binary checks one device family against a reference vector stream. It performs:
//! 1. **Resolution:** Family, rounding-mode selector, and operation name are validated before
//!    any device interaction; a bad selector exits non-zero without touching the device.
//! 2. **Run:** The device is reset, configured, and fed every record of the stream (stdin by
//!    default), with mismatch diagnostics and the `cnt = N error=M` summary on stdout.
//! 3. **Exit status:** 0 when every vector matched, -1 on any mismatch or error.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use fpuconf_core::common::error::FAILURE_EXIT_CODE;
use fpuconf_core::config::{MismatchPolicy, Precision};
use fpuconf_core::dut::models;
use fpuconf_core::fpu::OpFamily;
use fpuconf_core::stats::STATS_SECTIONS;
use fpuconf_core::testbench::report::Reporter;
use fpuconf_core::{HarnessConfig, OperationConfig, Result, Session};

#[derive(Parser, Debug)]
#[command(
    name = "fpuconf",
    author,
    version,
    about = "FPU conformance harness",
    long_about = "Drive an FPU device with reference vectors and compare results and exception flags bit for bit.\n\nRecords are whitespace-separated hex fields, one per line:\n  a b result flags   (fadd, fcmp, fdiv)\n  a result flags     (fptofp, inttofp)\n\nExamples:\n  fpuconf fadd -rnear_even add < f32_add_rne.txt\n  fpuconf fdiv -rminMag sqrt --input f64_sqrt_rtz.txt --precision f64\n  fpuconf fptofp -rmax --input f64_to_f32_rup.txt"
)]
struct Cli {
    /// Device family: fadd, fcmp, fptofp, inttofp, or fdiv.
    family: String,

    /// Rounding mode: -rnear_even, -rminMag, -rmin, -rmax, or -rnear_maxMag.
    #[arg(allow_hyphen_values = true)]
    rounding_mode: String,

    /// Operation within the family (not accepted by fptofp).
    op: Option<String>,

    /// Vector file to read instead of stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON configuration file; command-line flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Datapath precision of the built-in device model.
    #[arg(long, value_enum)]
    precision: Option<PrecisionArg>,

    /// Report every mismatch and finish the stream instead of stopping at the first.
    #[arg(long)]
    collect_all: bool,

    /// Clock periods to wait for output-valid before declaring a handshake device stuck.
    #[arg(long)]
    max_wait_cycles: Option<u64>,

    /// Clock periods with reset asserted.
    #[arg(long)]
    reset_cycles: Option<u32>,

    /// Log port values after every clock period (at trace level).
    #[arg(long)]
    trace: bool,

    /// Print run statistics to stderr; optionally only the named sections.
    #[arg(long, num_args = 0.., value_delimiter = ',', value_parser = clap::builder::PossibleValuesParser::new(STATS_SECTIONS.iter().copied()))]
    stats: Option<Vec<String>>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PrecisionArg {
    F32,
    F64,
}

impl From<PrecisionArg> for Precision {
    fn from(arg: PrecisionArg) -> Self {
        match arg {
            PrecisionArg::F32 => Self::F32,
            PrecisionArg::F64 => Self::F64,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            process::exit(FAILURE_EXIT_CODE);
        }
    };

    init_tracing(&cli);

    if let Err(e) = run(&cli) {
        error!("{e}");
        eprintln!("error: {e}");
        process::exit(e.exit_code());
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v` when set.
fn init_tracing(cli: &Cli) {
    let level = match (cli.verbose, cli.trace) {
        (_, true) | (3.., _) => "trace",
        (0, false) => "warn",
        (1, false) => "info",
        (2, false) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Resolves the invocation, runs the session, and prints optional statistics.
fn run(cli: &Cli) -> Result<()> {
    let family = OpFamily::from_name(&cli.family)?;
    let op = OperationConfig::resolve(family, &cli.rounding_mode, cli.op.as_deref())?;
    let config = load_config(cli)?;
    debug!(?config, %family, "resolved invocation");

    let mut dut = models::build(family, config.precision);
    let mut reporter = Reporter::new(io::stdout().lock());
    let mut session = Session::new(config, op);
    let stats = match &cli.input {
        Some(path) => session.run(
            dut.as_mut(),
            BufReader::new(File::open(path)?),
            &mut reporter,
        ),
        None => session.run(dut.as_mut(), io::stdin().lock(), &mut reporter),
    }?;

    if let Some(sections) = &cli.stats {
        let mut err = io::stderr().lock();
        stats.write_sections(&mut err, sections)?;
        err.flush()?;
    }
    Ok(())
}

/// Defaults, then the JSON file, then command-line overrides.
fn load_config(cli: &Cli) -> Result<HarnessConfig> {
    let mut config = match &cli.config {
        Some(path) => HarnessConfig::from_json_file(path)?,
        None => HarnessConfig::default(),
    };
    if let Some(precision) = cli.precision {
        config.precision = precision.into();
    }
    if cli.collect_all {
        config.policy = MismatchPolicy::CollectAll;
    }
    if let Some(cycles) = cli.max_wait_cycles {
        config.max_wait_cycles = cycles;
    }
    if let Some(cycles) = cli.reset_cycles {
        config.reset_cycles = cycles;
    }
    config.trace_steps |= cli.trace;
    Ok(config)
}

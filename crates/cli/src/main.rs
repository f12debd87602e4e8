//! LS-8 command-line runner.
//!
//! Loads a program listing (one binary byte per line, `#` comments) and runs it
//! to halt. It performs:
//! 1. **Setup:** Optional JSON configuration and logging on stderr.
//! 2. **Load:** Parses the listing into memory; malformed listings never execute.
//! 3. **Run:** Executes until `HLT`, printing `PRN` output on stdout.
//!
//! Exits 0 after a clean halt and 1 on any load, configuration, or execution error.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::sim::loader;
use ls8_core::{Cpu, SimError};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "Run an LS-8 program",
    long_about = "Load an LS-8 program listing into memory and run it to halt.\n\nExamples:\n  ls8 programs/mult.ls8\n  ls8 --trace programs/stack.ls8\n  ls8 --config machine.json --stats programs/print8.ls8"
)]
struct Cli {
    /// Program listing to load.
    program: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log a trace line before every instruction (overrides the configuration).
    #[arg(short, long)]
    trace: bool,

    /// Print execution statistics to stderr after the run.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.trace);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default filter.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

/// Loads the configuration and program, then runs to halt.
///
/// On a trap the CPU state is dumped before the error is returned.
fn run(cli: &Cli) -> Result<(), SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_instructions = true;
    }

    let mut cpu = Cpu::new(&config);
    let len = loader::load_file(&mut cpu, &cli.program)?;
    info!(program = %cli.program.display(), bytes = len, "loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = cpu.run(&mut out);

    if result.as_ref().is_err_and(|e| e.as_trap().is_some()) {
        cpu.dump_state();
    }
    let flushed = out.flush();
    if cli.stats {
        eprintln!("{}", cpu.stats);
    }
    result?;
    flushed.map_err(SimError::from)
}

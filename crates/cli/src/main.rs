//! LS-8 virtual CPU simulator CLI.
//!
//! This binary provides the host layer around the core machine. It performs:
//! 1. **Program run:** Load a textual `.ls8` program and drive it to completion.
//! 2. **Configuration:** Built-in defaults, an optional JSON config file, and
//!    flag overrides for tracing and the instruction budget.
//! 3. **Fault reporting:** Print the fault, dump machine state, and exit nonzero.

use std::path::PathBuf;
use std::{fs, process};

use clap::{Parser, Subcommand};

use ls8_core::config::Config;
use ls8_core::sim::{RunOutcome, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    version,
    about = "LS-8 8-bit virtual CPU simulator",
    long_about = "Run a textual LS-8 program (one binary-encoded cell per line, `#` comments).\n\nExamples:\n  ls8 run -f demos/print8.ls8\n  ls8 run -f demos/mult.ls8 --trace\n  ls8 run -f loop.ls8 --max-instructions 10000"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program to completion.
    Run {
        /// Program file to execute.
        #[arg(short, long)]
        file: PathBuf,

        /// Emit a trace line before every instruction.
        #[arg(long)]
        trace: bool,

        /// JSON config file (all fields optional).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Stop after this many instructions (overrides the config file).
        #[arg(long)]
        max_instructions: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            file,
            trace,
            config,
            max_instructions,
        }) => cmd_run(&file, trace, config, max_instructions),
        None => {
            eprintln!("LS-8 Simulator — pass a subcommand");
            eprintln!();
            eprintln!("  ls8 run -f <program.ls8>   Run a program");
            eprintln!();
            eprintln!("  ls8 --help  for full options");
            process::exit(1);
        }
    }
}

/// Runs a program: builds the simulator, loads the file, and drives the
/// machine. On fault, dumps state and exits with code 1.
fn cmd_run(
    file: &std::path::Path,
    trace: bool,
    config_path: Option<PathBuf>,
    max_instructions: Option<u64>,
) {
    let mut config = config_path.map_or_else(Config::default, |path| load_config(&path));
    if trace {
        config.trace_instructions = true;
    }
    if max_instructions.is_some() {
        config.max_instructions = max_instructions;
    }

    let mut sim = Simulator::new(&config);

    if let Err(e) = sim.load_file(file) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }

    match sim.run() {
        Ok(RunOutcome::Halted) => {
            sim.cpu.stats.print();
        }
        Ok(RunOutcome::BudgetExhausted) => {
            eprintln!(
                "[!] Instruction budget exhausted after {} instructions",
                sim.cpu.stats.instructions
            );
            sim.cpu.stats.print();
            process::exit(2);
        }
        Err(fault) => {
            eprintln!("\n[!] FATAL FAULT: {fault}");
            sim.cpu.dump_state();
            sim.cpu.stats.print();
            process::exit(1);
        }
    }
}

/// Reads and parses a JSON config file; exits with an error message on failure.
fn load_config(path: &std::path::Path) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {e}", path.display());
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {e}", path.display());
        process::exit(1);
    })
}

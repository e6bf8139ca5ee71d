//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains memory, registers, program counter, and flags.
//! 2. **Output:** Owns the injectable sink that `PRN` writes to.
//! 3. **Observability:** Provides trace snapshots and state dumps.
//!
//! All state lives in this one owned struct; instruction handlers receive it
//! by exclusive mutable reference. There is no ambient or singleton state.

/// Instruction execution loop and dispatch.
pub mod execution;

/// Bounds-checked memory access and program loading.
pub mod memory;

use crate::common::constants::MEM_SIZE;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::units::alu::Condition;
use crate::stats::SimStats;

/// Destination for values emitted by `PRN`.
///
/// The machine never decides where output goes; hosts inject a sink at
/// construction. Tests capture values, the CLI prints them.
pub trait OutputSink {
    /// Receives one emitted value.
    fn emit(&mut self, value: u8);
}

/// Sink that prints each value on its own line to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, value: u8) {
        println!("{value}");
    }
}

/// Main CPU structure containing all machine state.
///
/// Memory and registers are allocated at construction and live for the
/// process. The run loop is the sole mutator after loading.
pub struct Cpu {
    /// General-purpose registers (`R7` is the stack pointer).
    pub regs: RegisterFile,
    /// Program counter. In-range invariant holds while the machine runs.
    pub pc: usize,
    /// Condition flag set by `CMP`, consumed by `JEQ`/`JNE`.
    ///
    /// `None` until the first compare; retains its value between compares.
    pub flag: Option<Condition>,
    /// True from construction until `HLT` executes or a fault terminates the run.
    pub running: bool,
    /// Enable per-instruction trace output.
    pub trace_enabled: bool,
    /// Retired-instruction statistics.
    pub stats: SimStats,

    ram: [u8; MEM_SIZE],
    sink: Box<dyn OutputSink>,
}

impl Cpu {
    /// Creates a new CPU with zeroed memory and registers.
    ///
    /// Sets PC from the configuration (0 by default), the stack pointer to
    /// its reserved high-memory slot, and `running` to true.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration (start PC, trace flag).
    /// * `sink` - Destination for `PRN` output.
    pub fn new(config: &Config, sink: Box<dyn OutputSink>) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: config.start_pc,
            flag: None,
            running: true,
            trace_enabled: config.trace_instructions,
            stats: SimStats::default(),
            ram: [0; MEM_SIZE],
            sink,
        }
    }

    /// Emits a value to the output sink.
    pub(crate) fn emit(&mut self, value: u8) {
        self.sink.emit(value);
    }

    /// Produces a one-line human-readable snapshot of the machine.
    ///
    /// Shows the PC, the three memory cells at it, and all eight registers,
    /// in two-digit uppercase hex. Purely observational; reads past the end
    /// of memory render as `00`.
    pub fn trace(&self) -> String {
        let cell = |offset: usize| -> u8 {
            self.ram
                .get(self.pc.wrapping_add(offset))
                .copied()
                .unwrap_or(0)
        };
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            cell(0),
            cell(1),
            cell(2),
        );
        for val in self.regs.snapshot() {
            line.push_str(&format!(" {val:02X}"));
        }
        line
    }

    /// Dumps the current machine state (PC, flag, registers) to stderr.
    pub fn dump_state(&self) {
        eprintln!("PC   = {:#04x}", self.pc);
        eprintln!("FLAG = {:?}", self.flag);
        self.regs.dump();
    }
}

impl std::fmt::Debug for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cpu")
            .field("pc", &self.pc)
            .field("flag", &self.flag)
            .field("running", &self.running)
            .field("regs", &self.regs)
            .finish_non_exhaustive()
    }
}

//! Simulation Host Wrapper.
//!
//! This module owns the glue between a host and the core machine. It performs:
//! 1. **Construction:** Builds a CPU from a [`Config`] with the host's sink.
//! 2. **Loading:** Reads a program file and places it in memory.
//! 3. **Driving:** Steps the CPU to completion, enforcing the optional
//!    instruction budget that guarantees termination for non-halting programs.

use std::path::Path;

use crate::common::error::Fault;
use crate::config::Config;
use crate::core::cpu::{Cpu, OutputSink, StdoutSink};
use crate::sim::loader;

/// Why a driven run stopped without faulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program executed `HLT`.
    Halted,
    /// The configured instruction budget ran out before the program halted.
    ///
    /// A host-level stop, not a machine fault: the machine state is intact
    /// and stepping may resume.
    BudgetExhausted,
}

/// Host wrapper that drives a [`Cpu`] to completion.
#[derive(Debug)]
pub struct Simulator {
    /// The machine being driven.
    pub cpu: Cpu,
    max_instructions: Option<u64>,
}

impl Simulator {
    /// Creates a simulator printing `PRN` output to stdout.
    pub fn new(config: &Config) -> Self {
        Self::with_sink(config, Box::new(StdoutSink))
    }

    /// Creates a simulator with an injected output sink.
    pub fn with_sink(config: &Config, sink: Box<dyn OutputSink>) -> Self {
        Self {
            cpu: Cpu::new(config, sink),
            max_instructions: config.max_instructions,
        }
    }

    /// Loads a program file into machine memory.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::ProgramLoad`] for an unreadable path, a malformed
    /// token, or an image larger than memory.
    pub fn load_file(&mut self, path: &Path) -> Result<(), Fault> {
        let image = loader::read_program(path)?;
        self.cpu.load(&image)
    }

    /// Drives the machine until it halts, faults, or exhausts the budget.
    ///
    /// # Errors
    ///
    /// Propagates the first machine [`Fault`]. Budget exhaustion is not a
    /// fault; it reports as [`RunOutcome::BudgetExhausted`].
    pub fn run(&mut self) -> Result<RunOutcome, Fault> {
        while self.cpu.running {
            if let Some(budget) = self.max_instructions {
                if self.cpu.stats.instructions >= budget {
                    return Ok(RunOutcome::BudgetExhausted);
                }
            }
            self.cpu.step()?;
        }
        Ok(RunOutcome::Halted)
    }
}

//! Simulator Configuration.
//!
//! This module defines the host-facing configuration of the simulator. It provides:
//! 1. **Defaults:** A zero-argument default suitable for running any program.
//! 2. **Deserialization:** Every field is optional in JSON; missing fields
//!    take their default, so partial config files are valid.
//!
//! Configuration belongs to the host: the core machine reads it once at
//! construction and never again.

use serde::Deserialize;

/// Root configuration type.
///
/// Use [`Config::default`] or deserialize from JSON (the CLI's `--config`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Emit a trace line to stderr before every instruction.
    pub trace_instructions: bool,

    /// Stop the simulation after this many retired instructions.
    ///
    /// A host-imposed termination guarantee for non-halting programs; the
    /// core machine itself has no timeout concept. `None` means unbounded.
    pub max_instructions: Option<u64>,

    /// Address the PC starts at. Programs load at address 0, so this is 0
    /// in practice; exposed for debugger-style hosts.
    pub start_pc: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_instructions: None,
            start_pc: 0,
        }
    }
}

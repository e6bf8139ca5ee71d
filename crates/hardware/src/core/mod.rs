//! CPU core of the LS-8 machine.
//!
//! Contains the machine state container ([`cpu::Cpu`]), its execution loop
//! and memory access paths, and the functional units ([`units`]).

/// CPU state, execution loop, and memory access.
pub mod cpu;

/// Functional units (ALU).
pub mod units;

pub use cpu::Cpu;

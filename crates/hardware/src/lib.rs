//! LS-8 virtual CPU simulator library.
//!
//! This crate implements a small, inspectable LS-8 8-bit machine with the following:
//! 1. **Core:** Fetch-decode-execute loop, register file, flags, and the ALU.
//! 2. **ISA:** Opcode definitions, encoding fields, and mnemonic disassembly.
//! 3. **Memory:** A fixed 256-cell byte memory with bounds-checked access.
//! 4. **Simulation:** Program loader, host wrapper with an instruction budget, and configuration.
//! 5. **Observability:** Trace snapshots, state dumps, and retired-instruction statistics.

/// Common types and constants (faults, register file, machine constants).
pub mod common;
/// Simulator configuration (defaults, JSON-deserializable structure).
pub mod config;
/// CPU core (machine state, execution loop, memory access, ALU).
pub mod core;
/// Instruction set (opcodes, encoding fields, disassembly).
pub mod isa;
/// Program loader and simulation host wrapper.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Fault type returned by every fallible machine operation.
pub use crate::common::Fault;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds memory, registers, PC, flags, and the output sink.
pub use crate::core::Cpu;
/// Host wrapper; drives the CPU to completion under an optional budget.
pub use crate::sim::Simulator;

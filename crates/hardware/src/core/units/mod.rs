//! Functional units of the CPU core.

/// Arithmetic Logic Unit.
pub mod alu;

//! Common utilities and types used throughout the LS-8 simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Machine dimensions (memory size, register count, stack conventions).
//! 2. **Error Handling:** The [`Fault`] type covering every way a run can fail.
//! 3. **Register Management:** The eight-slot general-purpose register file.

/// Machine-wide constants.
pub mod constants;

/// Fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEM_SIZE, NUM_REGS, REG_SP, SP_INIT};
pub use error::Fault;
pub use reg::RegisterFile;

//! LS-8 General-Purpose Register File.
//!
//! This module implements the eight-slot register file of the LS-8 machine.
//! It performs the following:
//! 1. **Storage:** Maintains registers `R0`-`R7`, each one byte wide.
//! 2. **Bounds Enforcement:** Operand bytes can name any value 0-255, so every
//!    access is checked against the register count.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use crate::common::constants::{NUM_REGS, REG_SP, SP_INIT};
use crate::common::error::Fault;

/// General-purpose register file.
///
/// Contains eight byte-wide registers. `R7` is reserved as the stack pointer
/// and starts at [`SP_INIT`].
#[derive(Debug, Clone)]
pub struct RegisterFile {
    regs: [u8; NUM_REGS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a new register file with `R0`-`R6` zeroed and `R7` (the stack
    /// pointer) set to [`SP_INIT`].
    pub fn new() -> Self {
        let mut regs = [0; NUM_REGS];
        regs[REG_SP] = SP_INIT;
        Self { regs }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index as a raw operand byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] if `idx` does not name one of the
    /// eight registers.
    pub fn read(&self, idx: u8) -> Result<u8, Fault> {
        self.regs
            .get(usize::from(idx))
            .copied()
            .ok_or(Fault::AddressOutOfRange(usize::from(idx)))
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index as a raw operand byte.
    /// * `val` - The byte value to store.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] if `idx` does not name one of the
    /// eight registers.
    pub fn write(&mut self, idx: u8, val: u8) -> Result<(), Fault> {
        let slot = self
            .regs
            .get_mut(usize::from(idx))
            .ok_or(Fault::AddressOutOfRange(usize::from(idx)))?;
        *slot = val;
        Ok(())
    }

    /// Returns the current stack pointer (`R7`).
    pub fn sp(&self) -> u8 {
        self.regs[REG_SP]
    }

    /// Sets the stack pointer (`R7`).
    pub fn set_sp(&mut self, val: u8) {
        self.regs[REG_SP] = val;
    }

    /// Returns all register values in index order, for snapshots.
    pub fn snapshot(&self) -> [u8; NUM_REGS] {
        self.regs
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Useful for debugging and fault reports.
    pub fn dump(&self) {
        for (i, val) in self.regs.iter().enumerate() {
            eprintln!("R{i} = {val:#04x} ({val})");
        }
    }
}

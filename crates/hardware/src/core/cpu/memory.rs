//! Memory Access and Program Loading.
//!
//! This module implements the memory path of the CPU. It performs the following:
//! 1. **Bounds Checking:** Every read and write validates the address; there
//!    is no wraparound.
//! 2. **Program Loading:** Copies a loader-produced image into memory starting
//!    at address 0, rejecting images larger than memory.

use tracing::debug;

use super::Cpu;
use crate::common::constants::MEM_SIZE;
use crate::common::error::Fault;

impl Cpu {
    /// Reads the memory cell at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] if `addr` is not a valid cell.
    pub fn ram_read(&self, addr: usize) -> Result<u8, Fault> {
        self.ram
            .get(addr)
            .copied()
            .ok_or(Fault::AddressOutOfRange(addr))
    }

    /// Writes `value` to the memory cell at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] if `addr` is not a valid cell.
    pub fn ram_write(&mut self, addr: usize, value: u8) -> Result<(), Fault> {
        let cell = self.ram.get_mut(addr).ok_or(Fault::AddressOutOfRange(addr))?;
        *cell = value;
        Ok(())
    }

    /// Loads a program image into memory starting at address 0.
    ///
    /// Memory beyond the image keeps its prior contents (zero on a fresh
    /// machine). Loading does not reset the PC or registers.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::ProgramLoad`] if the image has more cells than memory.
    pub fn load(&mut self, image: &[u8]) -> Result<(), Fault> {
        if image.len() > MEM_SIZE {
            return Err(Fault::ProgramLoad(format!(
                "image of {} cells exceeds memory capacity of {MEM_SIZE}",
                image.len()
            )));
        }
        self.ram[..image.len()].copy_from_slice(image);
        debug!(cells = image.len(), "program image loaded");
        Ok(())
    }
}

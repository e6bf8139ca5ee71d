//! Fault Definitions.
//!
//! This module defines the error handling mechanism for the simulator. It provides:
//! 1. **Fault Representation:** One variant per way a load or a run can fail.
//! 2. **Propagation:** Every fault surfaces as an `Err` to the caller of
//!    `load`/`run`/`step`; nothing is swallowed or printed-and-continued.
//! 3. **Host Recovery:** Each kind is distinct, so a host can match on it and
//!    decide whether to log, exit, or resume after patching machine state.

use thiserror::Error;

use crate::core::units::alu::AluOp;

/// Faults raised by the machine or the program loader.
///
/// A fault terminates the current `run` cleanly: state mutated before the
/// fault is kept, nothing after it happens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The fetched instruction byte is not in the instruction table.
    ///
    /// Carries the offending opcode and the program counter at which it was
    /// fetched, so the host can pinpoint the bad cell.
    #[error("unknown opcode {opcode:#010b} at pc {pc:#04x}")]
    UnknownOpcode {
        /// The unrecognized opcode byte.
        opcode: u8,
        /// Program counter at the time of the fetch.
        pc: usize,
    },

    /// The ALU was invoked with an operation tag it does not implement.
    #[error("unsupported ALU operation {0}")]
    UnsupportedAluOperation(AluOp),

    /// A `DIV` instruction named a divisor register holding zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A memory or register access fell outside valid bounds.
    ///
    /// Covers stray loads and stores, the PC running off the end of memory,
    /// and stack overflow/underflow through `PUSH`/`POP`/`CALL`/`RET`.
    #[error("address {0:#x} out of range")]
    AddressOutOfRange(usize),

    /// The program source could not be read, parsed, or fitted into memory.
    #[error("program load failed: {0}")]
    ProgramLoad(String),
}

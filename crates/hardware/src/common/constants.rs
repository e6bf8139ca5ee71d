//! Machine-Wide Constants.
//!
//! This module defines the fixed dimensions of the LS-8 machine. It includes:
//! 1. **Memory Constants:** Addressable memory size.
//! 2. **Register Constants:** Register count and the stack-pointer convention.
//! 3. **Encoding Constants:** Bit fields of the LS-8 opcode byte.

/// Number of addressable memory cells. Each cell holds one byte.
pub const MEM_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGS: usize = 8;

/// Index of the register reserved as the stack pointer (`R7`).
pub const REG_SP: usize = 7;

/// Initial stack pointer value. Cells `0xF5`-`0xFF` above it are reserved
/// for machine use; the stack grows downward from here.
pub const SP_INIT: u8 = 0xF4;

/// Shift for the operand-count field (`AA` in `AABCDDDD`) of an opcode byte.
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit flagging an opcode as an ALU operation (`B` in `AABCDDDD`).
pub const ALU_OP_BIT: u8 = 0b0010_0000;

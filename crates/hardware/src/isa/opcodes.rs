//! Raw LS-8 Opcode Encodings.
//!
//! Byte values follow the LS-8 layout `AABCDDDD`: `AA` = operand count,
//! `B` = ALU-operation bit, `DDDD` = instruction identifier.

/// `HLT` - halt the machine.
pub const HLT: u8 = 0b0000_0001;

/// `RET` - return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// `PUSH Ra` - push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// `POP Ra` - pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// `PRN Ra` - emit a register value to the output sink.
pub const PRN: u8 = 0b0100_0111;

/// `CALL Ra` - call the subroutine at the address in a register.
pub const CALL: u8 = 0b0101_0000;

/// `JMP Ra` - unconditional jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;

/// `JEQ Ra` - jump if the Equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// `JNE Ra` - jump if the Equal flag is not set.
pub const JNE: u8 = 0b0101_0110;

/// `LDI Ra, imm` - load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;

/// `ADD Ra, Rb` - add `Rb` into `Ra`.
pub const ADD: u8 = 0b1010_0000;

/// `SUB Ra, Rb` - subtract `Rb` from `Ra`.
pub const SUB: u8 = 0b1010_0001;

/// `MUL Ra, Rb` - multiply `Ra` by `Rb`.
pub const MUL: u8 = 0b1010_0010;

/// `DIV Ra, Rb` - divide `Ra` by `Rb`.
pub const DIV: u8 = 0b1010_0011;

/// `CMP Ra, Rb` - compare `Ra` with `Rb` and set a condition flag.
pub const CMP: u8 = 0b1010_0111;

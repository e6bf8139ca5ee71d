//! LS-8 Instruction Set.
//!
//! This module defines the instruction set of the machine. It provides:
//! 1. **Opcode Constants:** The raw byte encodings ([`opcodes`]).
//! 2. **Opcode Enum:** A closed, exhaustively matchable instruction table.
//! 3. **Disassembly:** Mnemonic rendering for traces and fault reports ([`disasm`]).
//!
//! An LS-8 opcode byte is laid out `AABCDDDD`: `AA` is the operand count,
//! `B` flags an ALU operation, and `DDDD` identifies the instruction.

/// Mnemonic rendering of instructions.
pub mod disasm;

/// Raw opcode byte encodings.
pub mod opcodes;

use crate::common::constants::{ALU_OP_BIT, OPERAND_COUNT_SHIFT};

/// The instruction table of the machine.
///
/// The set is closed: an opcode byte either maps to exactly one variant or
/// the fetch faults. Dispatch is a `match` over this enum, never dynamic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// Halt the machine.
    Hlt,
    /// Load an immediate into a register.
    Ldi,
    /// Emit a register value to the output sink.
    Prn,
    /// Add one register into another.
    Add,
    /// Subtract one register from another.
    Sub,
    /// Multiply one register into another.
    Mul,
    /// Divide one register by another.
    Div,
    /// Push a register value onto the stack.
    Push,
    /// Pop the top of the stack into a register.
    Pop,
    /// Call the subroutine whose address a register holds.
    Call,
    /// Return from a subroutine.
    Ret,
    /// Compare two registers and set exactly one condition flag.
    Cmp,
    /// Jump to the address a register holds.
    Jmp,
    /// Jump if the Equal flag is set.
    Jeq,
    /// Jump if the Equal flag is not set.
    Jne,
}

impl Opcode {
    /// Looks up an opcode byte in the instruction table.
    ///
    /// Returns `None` for bytes outside the table; the caller turns that into
    /// an unknown-opcode fault carrying the PC.
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            opcodes::HLT => Some(Self::Hlt),
            opcodes::LDI => Some(Self::Ldi),
            opcodes::PRN => Some(Self::Prn),
            opcodes::ADD => Some(Self::Add),
            opcodes::SUB => Some(Self::Sub),
            opcodes::MUL => Some(Self::Mul),
            opcodes::DIV => Some(Self::Div),
            opcodes::PUSH => Some(Self::Push),
            opcodes::POP => Some(Self::Pop),
            opcodes::CALL => Some(Self::Call),
            opcodes::RET => Some(Self::Ret),
            opcodes::CMP => Some(Self::Cmp),
            opcodes::JMP => Some(Self::Jmp),
            opcodes::JEQ => Some(Self::Jeq),
            opcodes::JNE => Some(Self::Jne),
            _ => None,
        }
    }

    /// Returns the raw encoding of this opcode.
    pub const fn encoding(self) -> u8 {
        match self {
            Self::Hlt => opcodes::HLT,
            Self::Ldi => opcodes::LDI,
            Self::Prn => opcodes::PRN,
            Self::Add => opcodes::ADD,
            Self::Sub => opcodes::SUB,
            Self::Mul => opcodes::MUL,
            Self::Div => opcodes::DIV,
            Self::Push => opcodes::PUSH,
            Self::Pop => opcodes::POP,
            Self::Call => opcodes::CALL,
            Self::Ret => opcodes::RET,
            Self::Cmp => opcodes::CMP,
            Self::Jmp => opcodes::JMP,
            Self::Jeq => opcodes::JEQ,
            Self::Jne => opcodes::JNE,
        }
    }

    /// Returns the number of operand bytes this instruction uses (0-2).
    ///
    /// Decoded from the `AA` field of the encoding. The fetch stage always
    /// reads two operand cells regardless; this count only affects rendering.
    pub const fn operand_count(self) -> u8 {
        self.encoding() >> OPERAND_COUNT_SHIFT
    }

    /// Returns `true` if this instruction routes through the ALU.
    pub const fn is_alu_op(self) -> bool {
        self.encoding() & ALU_OP_BIT != 0
    }

    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Cmp => "CMP",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        }
    }
}

//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU of the LS-8 machine. It is a pure
//! function of its operands: it holds no state and touches no memory.
//!
//! The operation tag set covers the full LS-8 ALU mnemonic space. This
//! machine implements the value-producing operations `ADD`/`SUB`/`MUL`/`DIV`
//! and the flag-producing `CMP` (via [`Alu::compare`]); every other tag is
//! rejected with a typed fault rather than succeeding silently.
//!
//! All values are 8-bit unsigned; arithmetic that overflows the width wraps
//! modulo 2^8.

use std::fmt;

use crate::common::error::Fault;

/// ALU operation tags.
///
/// Tags beyond `Add`/`Sub`/`Mul`/`Div` name LS-8 ALU operations this machine
/// does not implement; passing one to [`Alu::execute`] returns
/// [`Fault::UnsupportedAluOperation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication.
    Mul,
    /// Integer division; faults on a zero divisor.
    Div,
    /// Modulo (unimplemented).
    Mod,
    /// Bitwise AND (unimplemented).
    And,
    /// Bitwise OR (unimplemented).
    Or,
    /// Bitwise XOR (unimplemented).
    Xor,
    /// Bitwise NOT (unimplemented).
    Not,
    /// Shift left (unimplemented).
    Shl,
    /// Shift right (unimplemented).
    Shr,
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        };
        f.write_str(name)
    }
}

/// Condition produced by a compare. Exactly one holds for any operand pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The operands are equal.
    Equal,
    /// The first operand is less than the second.
    Less,
    /// The first operand is greater than the second.
    Greater,
}

/// Arithmetic Logic Unit for 8-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a value-producing ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation tag.
    /// * `a` - First operand.
    /// * `b` - Second operand.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::DivisionByZero`] for `Div` with `b == 0`, and
    /// [`Fault::UnsupportedAluOperation`] for any tag this machine does not
    /// implement.
    pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, Fault> {
        match op {
            AluOp::Add => Ok(a.wrapping_add(b)),
            AluOp::Sub => Ok(a.wrapping_sub(b)),
            AluOp::Mul => Ok(a.wrapping_mul(b)),
            AluOp::Div => {
                if b == 0 {
                    Err(Fault::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
            unsupported => Err(Fault::UnsupportedAluOperation(unsupported)),
        }
    }

    /// Compares two operands, producing exactly one [`Condition`].
    pub fn compare(a: u8, b: u8) -> Condition {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Condition::Less,
            std::cmp::Ordering::Equal => Condition::Equal,
            std::cmp::Ordering::Greater => Condition::Greater,
        }
    }
}

//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the instruction byte at the PC plus two operand cells
//!    (instruction slots are a fixed three cells; operands are always read).
//! 2. **Decode:** Looks the instruction byte up in the instruction table;
//!    a miss is a typed unknown-opcode fault, never a silent continue.
//! 3. **Execute:** Dispatches to the handler, which reports how far to
//!    advance the PC and whether the machine is still running.
//!
//! Handlers that set the PC explicitly (jumps, call, return) report an
//! advance of zero.

use tracing::trace;

use super::Cpu;
use crate::common::error::Fault;
use crate::core::units::alu::{Alu, AluOp, Condition};
use crate::isa::{Opcode, disasm};

/// Handler outcome: cells to advance the PC by, and whether to keep running.
type Step = (usize, bool);

impl Cpu {
    /// Runs the machine until it halts or faults.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Fault`] raised by any cycle; the run stops
    /// there and no further cells are executed.
    pub fn run(&mut self) -> Result<(), Fault> {
        while self.running {
            self.step()?;
        }
        Ok(())
    }

    /// Executes exactly one fetch-decode-execute cycle.
    ///
    /// Intended for debugger-style hosts as well as the run loop itself.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] raised by the fetch, decode, or handler.
    pub fn step(&mut self) -> Result<(), Fault> {
        let pc = self.pc;
        let ir = self.ram_read(pc)?;
        let operand_a = self.ram_read(pc + 1)?;
        let operand_b = self.ram_read(pc + 2)?;

        let opcode = Opcode::from_u8(ir).ok_or(Fault::UnknownOpcode { opcode: ir, pc })?;

        if self.trace_enabled {
            eprintln!("{}", self.trace());
        }
        trace!(pc, instruction = %disasm::disassemble(opcode, operand_a, operand_b), "execute");

        let (pc_advance, still_running) = self.execute(opcode, operand_a, operand_b)?;
        self.running = still_running;
        if still_running {
            self.pc += pc_advance;
        }
        self.stats.instructions += 1;
        Ok(())
    }

    /// Dispatches one decoded instruction.
    fn execute(&mut self, opcode: Opcode, operand_a: u8, operand_b: u8) -> Result<Step, Fault> {
        match opcode {
            Opcode::Hlt => Ok((0, false)),
            Opcode::Ldi => {
                self.regs.write(operand_a, operand_b)?;
                Ok((3, true))
            }
            Opcode::Prn => {
                let value = self.regs.read(operand_a)?;
                self.emit(value);
                Ok((2, true))
            }
            Opcode::Add => self.alu_binary(AluOp::Add, operand_a, operand_b),
            Opcode::Sub => self.alu_binary(AluOp::Sub, operand_a, operand_b),
            Opcode::Mul => self.alu_binary(AluOp::Mul, operand_a, operand_b),
            Opcode::Div => self.alu_binary(AluOp::Div, operand_a, operand_b),
            Opcode::Push => {
                let value = self.regs.read(operand_a)?;
                self.push(value)?;
                Ok((2, true))
            }
            Opcode::Pop => {
                let value = self.pop()?;
                self.regs.write(operand_a, value)?;
                Ok((2, true))
            }
            Opcode::Call => {
                // Return address is the cell past the CALL's own operand.
                let ret = self.pc + 2;
                let ret = u8::try_from(ret).map_err(|_| Fault::AddressOutOfRange(ret))?;
                self.push(ret)?;
                self.pc = usize::from(self.regs.read(operand_a)?);
                Ok((0, true))
            }
            Opcode::Ret => {
                let ret = self.pop()?;
                self.pc = usize::from(ret);
                Ok((0, true))
            }
            Opcode::Cmp => {
                let a = self.regs.read(operand_a)?;
                let b = self.regs.read(operand_b)?;
                self.flag = Some(Alu::compare(a, b));
                Ok((3, true))
            }
            Opcode::Jmp => {
                self.pc = usize::from(self.regs.read(operand_a)?);
                Ok((0, true))
            }
            Opcode::Jeq => self.branch_if(self.flag == Some(Condition::Equal), operand_a),
            Opcode::Jne => self.branch_if(self.flag != Some(Condition::Equal), operand_a),
        }
    }

    /// Runs a two-register ALU instruction, writing the result back to `Ra`.
    fn alu_binary(&mut self, op: AluOp, reg_a: u8, reg_b: u8) -> Result<Step, Fault> {
        let a = self.regs.read(reg_a)?;
        let b = self.regs.read(reg_b)?;
        let result = Alu::execute(op, a, b)?;
        self.regs.write(reg_a, result)?;
        Ok((3, true))
    }

    /// Conditional jump: sets the PC from `Ra` when `taken`, otherwise falls
    /// through past the operand cell.
    fn branch_if(&mut self, taken: bool, reg_a: u8) -> Result<Step, Fault> {
        if taken {
            self.pc = usize::from(self.regs.read(reg_a)?);
            Ok((0, true))
        } else {
            Ok((2, true))
        }
    }

    /// Pushes `value` onto the descending stack.
    ///
    /// The stack pointer moves first; a push below address zero surfaces as
    /// an out-of-range write. The SP register only updates once the write
    /// has succeeded.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), Fault> {
        let new_sp = usize::from(self.regs.sp()).wrapping_sub(1);
        self.ram_write(new_sp, value)?;
        self.regs.set_sp(new_sp as u8);
        Ok(())
    }

    /// Pops the top of the descending stack.
    ///
    /// Popping past the top of memory surfaces as an out-of-range stack
    /// pointer once the increment no longer fits an address byte.
    pub(crate) fn pop(&mut self) -> Result<u8, Fault> {
        let sp = usize::from(self.regs.sp());
        let value = self.ram_read(sp)?;
        let new_sp = u8::try_from(sp + 1).map_err(|_| Fault::AddressOutOfRange(sp + 1))?;
        self.regs.set_sp(new_sp);
        Ok(value)
    }
}

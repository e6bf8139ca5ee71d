//! Instruction Disassembly.
//!
//! Renders a fetched instruction slot as assembly text for traces and fault
//! reports. Operand bytes beyond the instruction's operand count are ignored.

use super::Opcode;

/// Renders one instruction slot as assembly text.
///
/// Register operands print as `R<n>`; the `LDI` immediate prints as a decimal
/// literal, matching how LS-8 programs are written.
///
/// # Arguments
///
/// * `opcode` - The decoded instruction.
/// * `operand_a` - First operand cell (always fetched).
/// * `operand_b` - Second operand cell (always fetched).
pub fn disassemble(opcode: Opcode, operand_a: u8, operand_b: u8) -> String {
    let mnemonic = opcode.mnemonic();
    match opcode.operand_count() {
        0 => mnemonic.to_string(),
        1 => format!("{mnemonic} R{operand_a}"),
        _ => {
            if opcode == Opcode::Ldi {
                format!("{mnemonic} R{operand_a}, {operand_b}")
            } else {
                format!("{mnemonic} R{operand_a}, R{operand_b}")
            }
        }
    }
}

//! # Load Instructions
//!
//! - LDI: Load Immediate

use crate::cpu::Cpu;
use crate::opcodes::Opcode;
use crate::output::OutputSink;
use crate::MachineError;

/// Executes the LDI (Load Immediate) instruction.
///
/// Stores the immediate operand byte into the named register:
/// `registers[reg] = value`.
///
/// Width: 3 bytes. Advances pc by 3.
pub(crate) fn execute_ldi<S: OutputSink>(
    cpu: &mut Cpu<S>,
    reg: u8,
    value: u8,
) -> Result<(), MachineError> {
    cpu.registers.set(reg, value)?;

    cpu.pc += Opcode::Ldi.size();

    Ok(())
}

//! # Control Flow Instructions
//!
//! - CALL: call the subroutine whose address is held in a register
//! - RET: return from a subroutine
//!
//! CALL pushes the return address - the address of the instruction
//! immediately after the 2-byte CALL - onto the stack, then jumps to the
//! address in the named register. RET pops that address back into pc.
//! The stored address needs no adjustment on return: CALL already pushed
//! pc + 2.
//!
//! Both instructions set pc absolutely and never advance it relatively.

use crate::cpu::Cpu;
use crate::opcodes::Opcode;
use crate::output::OutputSink;
use crate::MachineError;

/// Executes the CALL instruction.
///
/// `sp -= 1; memory[sp] = pc + 2; pc = registers[reg]`
pub(crate) fn execute_call<S: OutputSink>(
    cpu: &mut Cpu<S>,
    reg: u8,
) -> Result<(), MachineError> {
    let target = cpu.registers.get(reg)?;

    // Return addresses are stored as single bytes, so the instruction
    // after the CALL must itself be addressable in one byte.
    let return_addr = cpu.pc + Opcode::Call.size();
    let return_byte = u8::try_from(return_addr)
        .map_err(|_| MachineError::OutOfBounds { addr: return_addr })?;

    cpu.push_byte(return_byte)?;
    cpu.pc = target as u16;

    Ok(())
}

/// Executes the RET instruction.
///
/// `pc = memory[sp]; sp += 1`
pub(crate) fn execute_ret<S: OutputSink>(cpu: &mut Cpu<S>) -> Result<(), MachineError> {
    let return_addr = cpu.pop_byte()?;
    cpu.pc = return_addr as u16;

    Ok(())
}

//! # Stack Operations
//!
//! - PUSH: push a register's value onto the stack
//! - POP: pop the top of stack into a register
//!
//! The stack lives in main memory and grows downward from just below the
//! top; the stack pointer is register R7 and is read and written through
//! the ordinary register interface. PUSH decrements the pointer and
//! stores at the new address; POP reads at the pointer and increments.
//!
//! The pointer leaving `[0, 256)` is a fatal error (overflow below 0 on
//! push, underflow above 255 on pop), checked before any state changes.

use crate::cpu::Cpu;
use crate::opcodes::Opcode;
use crate::output::OutputSink;
use crate::MachineError;

/// Executes the PUSH instruction.
///
/// `sp -= 1; memory[sp] = registers[reg]`
///
/// Width: 2 bytes. Advances pc by 2.
pub(crate) fn execute_push<S: OutputSink>(
    cpu: &mut Cpu<S>,
    reg: u8,
) -> Result<(), MachineError> {
    let value = cpu.registers.get(reg)?;
    cpu.push_byte(value)?;

    cpu.pc += Opcode::Push.size();

    Ok(())
}

/// Executes the POP instruction.
///
/// `registers[reg] = memory[sp]; sp += 1`
///
/// Width: 2 bytes. Advances pc by 2.
pub(crate) fn execute_pop<S: OutputSink>(
    cpu: &mut Cpu<S>,
    reg: u8,
) -> Result<(), MachineError> {
    // Validate the destination before moving the stack pointer so a bad
    // register index leaves the stack untouched.
    cpu.registers.get(reg)?;

    let value = cpu.pop_byte()?;
    cpu.registers.set(reg, value)?;

    cpu.pc += Opcode::Pop.size();

    Ok(())
}

//! # Output Instructions
//!
//! - PRN: Print Register
//!
//! PRN is the machine's only observable output. The emitted value goes
//! to the CPU's [`OutputSink`](crate::OutputSink); emission is
//! fire-and-forget and cannot fail the run.

use crate::cpu::Cpu;
use crate::opcodes::Opcode;
use crate::output::OutputSink;
use crate::MachineError;

/// Executes the PRN (Print Register) instruction.
///
/// Emits `registers[reg]` as a decimal value on the observation channel.
///
/// Width: 2 bytes. Advances pc by 2.
pub(crate) fn execute_prn<S: OutputSink>(
    cpu: &mut Cpu<S>,
    reg: u8,
) -> Result<(), MachineError> {
    let value = cpu.registers.get(reg)?;
    cpu.output.emit(value);

    cpu.pc += Opcode::Prn.size();

    Ok(())
}

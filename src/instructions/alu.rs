//! # ALU Instructions
//!
//! Register-to-register arithmetic dispatched through the ALU:
//! - ADD: add source register into destination register
//! - MUL: multiply destination register by source register
//!
//! Results wrap modulo 256. Both instructions are 3 bytes wide and
//! advance pc by 3.

use crate::alu::{self, AluOp};
use crate::cpu::Cpu;
use crate::opcodes::Opcode;
use crate::output::OutputSink;
use crate::MachineError;

/// Executes the ADD instruction: `registers[reg_a] += registers[reg_b]`,
/// wrapping.
pub(crate) fn execute_add<S: OutputSink>(
    cpu: &mut Cpu<S>,
    reg_a: u8,
    reg_b: u8,
) -> Result<(), MachineError> {
    alu::apply(&mut cpu.registers, AluOp::Add, reg_a, reg_b)?;

    cpu.pc += Opcode::Add.size();

    Ok(())
}

/// Executes the MUL instruction: `registers[reg_a] *= registers[reg_b]`,
/// wrapping.
pub(crate) fn execute_mul<S: OutputSink>(
    cpu: &mut Cpu<S>,
    reg_a: u8,
    reg_b: u8,
) -> Result<(), MachineError> {
    alu::apply(&mut cpu.registers, AluOp::Mul, reg_a, reg_b)?;

    cpu.pc += Opcode::Mul.size();

    Ok(())
}

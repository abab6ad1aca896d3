//! Execution loop tests.
//!
//! Verifies the fetch-decode-execute cycle end to end: full programs,
//! decode failure classification, and runaway fetches.

use libls8::{opcodes, Cpu, MachineError, State};

#[test]
fn test_mult_program_emits_72() {
    let mut cpu = Cpu::with_captured_output();

    // LDI R0,8 / LDI R1,9 / MUL R0,R1 / PRN R0 / HLT
    cpu.load_program(&[
        opcodes::LDI,
        0,
        8,
        opcodes::LDI,
        1,
        9,
        opcodes::MUL,
        0,
        1,
        opcodes::PRN,
        0,
        opcodes::HLT,
    ])
    .unwrap();

    cpu.run().unwrap();

    assert_eq!(cpu.output().values(), &[72]);
    assert_eq!(cpu.state(), State::Halted);
}

#[test]
fn test_unknown_opcode_is_explicit_error() {
    let mut cpu = Cpu::with_captured_output();

    // 0xC1 has two operand bits set but names no instruction
    cpu.load_program(&[opcodes::LDI, 0, 1, 0xC1]).unwrap();

    assert_eq!(
        cpu.run(),
        Err(MachineError::UnknownOpcode {
            opcode: 0xC1,
            pc: 3
        })
    );
}

#[test]
fn test_unsupported_alu_opcode_is_classified() {
    let mut cpu = Cpu::with_captured_output();

    // ALU-class byte (bit 5 set) that is neither ADD nor MUL
    cpu.load_program(&[0b1010_0001, 0, 1]).unwrap();

    assert_eq!(
        cpu.run(),
        Err(MachineError::UnsupportedAluOp {
            opcode: 0b1010_0001,
            pc: 0
        })
    );
}

#[test]
fn test_empty_memory_faults_at_address_zero() {
    // No program loaded: cell 0 holds 0, which is not an instruction
    let mut cpu = Cpu::with_captured_output();

    assert_eq!(
        cpu.run(),
        Err(MachineError::UnknownOpcode { opcode: 0, pc: 0 })
    );
}

#[test]
fn test_over_fetch_reads_trailing_zeros_harmlessly() {
    // A 1-byte program: the fetch stage still reads the two cells after
    // HLT, which are zero-initialized and never consumed.
    let mut cpu = Cpu::with_captured_output();
    cpu.load_program(&[opcodes::HLT]).unwrap();

    assert_eq!(cpu.step().unwrap(), State::Halted);
}

#[test]
fn test_machine_state_reflects_work_before_fault() {
    let mut cpu = Cpu::with_captured_output();

    // LDI executes, then the bad opcode faults; the load must stick
    cpu.load_program(&[opcodes::LDI, 0, 7, 0xFF]).unwrap();

    assert!(cpu.run().is_err());
    assert_eq!(cpu.registers().get(0).unwrap(), 7);
    assert_eq!(cpu.pc(), 3);
    assert_eq!(cpu.state(), State::Running);
}

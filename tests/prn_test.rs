//! Tests for the PRN (Print Register) instruction.
//!
//! PRN emits the register's value on the observation channel and
//! advances pc by 2. It is the machine's only observable output.

use libls8::{opcodes, Cpu, MachineError};

#[test]
fn test_prn_emits_register_value() {
    let mut cpu = Cpu::with_captured_output();
    cpu.load_program(&[opcodes::LDI, 0, 72, opcodes::PRN, 0]).unwrap();

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.output().values(), &[72]);
    assert_eq!(cpu.pc(), 5);
}

#[test]
fn test_prn_of_untouched_register_emits_zero() {
    let mut cpu = Cpu::with_captured_output();
    cpu.load_program(&[opcodes::PRN, 3]).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.output().values(), &[0]);
    assert_eq!(cpu.pc(), 2);
}

#[test]
fn test_prn_emission_order() {
    let mut cpu = Cpu::with_captured_output();
    cpu.load_program(&[
        opcodes::LDI,
        0,
        1,
        opcodes::LDI,
        1,
        2,
        opcodes::PRN,
        1,
        opcodes::PRN,
        0,
        opcodes::HLT,
    ])
    .unwrap();

    cpu.run().unwrap();

    assert_eq!(cpu.output().values(), &[2, 1]);
}

#[test]
fn test_prn_invalid_register() {
    let mut cpu = Cpu::with_captured_output();
    cpu.load_program(&[opcodes::PRN, 200]).unwrap();

    assert_eq!(
        cpu.step(),
        Err(MachineError::InvalidRegister { index: 200 })
    );

    // Nothing was emitted on the failed cycle
    assert!(cpu.output().values().is_empty());
}

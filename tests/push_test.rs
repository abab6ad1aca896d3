//! Tests for the PUSH instruction.
//!
//! PUSH decrements the stack pointer and stores the register's value at
//! the new address, advancing pc by 2. Moving the pointer below address
//! 0 is a stack overflow.

use libls8::{opcodes, Cpu, MachineError, SP, SP_INIT};

#[test]
fn test_push_basic_operation() {
    let mut cpu = Cpu::with_captured_output();
    cpu.load_program(&[opcodes::LDI, 0, 0x42, opcodes::PUSH, 0])
        .unwrap();

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.sp(), SP_INIT - 1);
    assert_eq!(cpu.memory().read((SP_INIT - 1) as u16).unwrap(), 0x42);
    assert_eq!(cpu.pc(), 5);
}

#[test]
fn test_push_twice_grows_downward() {
    let mut cpu = Cpu::with_captured_output();
    cpu.load_program(&[
        opcodes::LDI,
        0,
        1,
        opcodes::LDI,
        1,
        2,
        opcodes::PUSH,
        0,
        opcodes::PUSH,
        1,
        opcodes::HLT,
    ])
    .unwrap();

    cpu.run().unwrap();

    assert_eq!(cpu.sp(), SP_INIT - 2);
    assert_eq!(cpu.memory().read((SP_INIT - 1) as u16).unwrap(), 1);
    assert_eq!(cpu.memory().read((SP_INIT - 2) as u16).unwrap(), 2);
}

#[test]
fn test_push_stack_overflow() {
    let mut cpu = Cpu::with_captured_output();
    cpu.load_program(&[opcodes::PUSH, 0]).unwrap();

    // Force the stack pointer to the bottom of memory
    cpu.registers_mut().set(SP, 0).unwrap();

    assert_eq!(cpu.step(), Err(MachineError::StackOverflow { sp: 0 }));

    // Failed push leaves the pointer where it was
    assert_eq!(cpu.sp(), 0);
}

#[test]
fn test_push_invalid_register() {
    let mut cpu = Cpu::with_captured_output();
    cpu.load_program(&[opcodes::PUSH, 8]).unwrap();

    assert_eq!(
        cpu.step(),
        Err(MachineError::InvalidRegister { index: 8 })
    );

    // The stack pointer is untouched on the failed cycle
    assert_eq!(cpu.sp(), SP_INIT);
}

//! # LS-8 Emulator Core
//!
//! An emulator for the LS-8, an 8-bit register machine with 256 bytes of
//! memory, eight general-purpose registers, and a small fixed instruction
//! set.
//!
//! This crate provides the machine state structures, a closed instruction
//! set with an exhaustively-matched decoder, bounds-checked memory and
//! register access, and a text program loader.
//!
//! ## Quick Start
//!
//! ```rust
//! use libls8::{BufferSink, Cpu};
//!
//! // LDI R0, 8 / PRN R0 / HLT
//! let program = [0b10000010, 0, 8, 0b01000111, 0, 0b00000001];
//!
//! let mut cpu = Cpu::with_output(BufferSink::new());
//! cpu.load_program(&program).unwrap();
//! cpu.run().unwrap();
//!
//! assert_eq!(cpu.output().values(), &[8]);
//! ```
//!
//! ## Architecture
//!
//! The emulator follows a modular architecture adhering to these principles:
//!
//! - **Closed instruction set**: opcodes decode into an `Opcode` enum and
//!   dispatch through an exhaustive match, so the compiler checks coverage
//! - **Defined failure modes**: every memory, register, and stack access is
//!   bounds-checked and surfaces a `MachineError` instead of panicking
//! - **Handler-driven control flow**: the run loop never advances the
//!   program counter itself; each instruction handler advances it by the
//!   instruction's encoded width or sets it absolutely
//! - **Pluggable observation**: the PRN instruction emits through the
//!   `OutputSink` trait, so output can go to stdout or be captured
//!
//! ## Modules
//!
//! - `cpu` - machine state and the fetch-decode-execute loop
//! - `memory` - 256-byte flat store with bounds-checked access
//! - `registers` - register file and the reserved stack pointer
//! - `alu` - register-to-register arithmetic
//! - `opcodes` - opcode encoding, constants, and the decoder
//! - `loader` - text program format parser
//! - `output` - observation channel for PRN

pub mod alu;
pub mod cpu;
pub mod loader;
pub mod memory;
pub mod opcodes;
pub mod output;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use alu::AluOp;
pub use cpu::{Cpu, State};
pub use loader::{load_file, parse_program, LoadError};
pub use memory::{Memory, MEMORY_SIZE};
pub use opcodes::Opcode;
pub use output::{BufferSink, OutputSink, StdoutSink};
pub use registers::{RegisterFile, NUM_REGISTERS, SP, SP_INIT};

/// Errors that can occur during machine execution.
///
/// Every variant is fatal to the current run: the engine has no retry or
/// recovery policy, and each variant carries the failing address, index,
/// or opcode so the fault can be diagnosed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// Memory access outside `[0, 256)`.
    OutOfBounds { addr: u16 },

    /// Register index outside `[0, 8)`.
    InvalidRegister { index: u8 },

    /// Fetched opcode byte has no instruction associated with it.
    UnknownOpcode { opcode: u8, pc: u16 },

    /// Opcode byte is ALU-class but names no supported ALU operation.
    UnsupportedAluOp { opcode: u8, pc: u16 },

    /// A push would move the stack pointer below address 0.
    StackOverflow { sp: u8 },

    /// A pop would move the stack pointer above address 255.
    StackUnderflow { sp: u8 },
}

impl std::fmt::Display for MachineError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MachineError::OutOfBounds { addr } => {
                write!(f, "memory address 0x{:04X} is out of bounds", addr)
            }
            MachineError::InvalidRegister { index } => {
                write!(f, "register index {} is invalid (valid: 0-7)", index)
            }
            MachineError::UnknownOpcode { opcode, pc } => {
                write!(f, "unknown opcode 0x{:02X} at pc 0x{:02X}", opcode, pc)
            }
            MachineError::UnsupportedAluOp { opcode, pc } => {
                write!(
                    f,
                    "unsupported ALU operation 0x{:02X} at pc 0x{:02X}",
                    opcode, pc
                )
            }
            MachineError::StackOverflow { sp } => {
                write!(f, "stack overflow (sp = 0x{:02X})", sp)
            }
            MachineError::StackUnderflow { sp } => {
                write!(f, "stack underflow (sp = 0x{:02X})", sp)
            }
        }
    }
}

impl std::error::Error for MachineError {}

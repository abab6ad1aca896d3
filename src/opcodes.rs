//! # Opcode Encoding and Decoding
//!
//! This module is the single source of truth for the LS-8 instruction
//! encoding. Each opcode is one byte with the bit layout `AABCDDDD`:
//!
//! - `AA` (bits 7-6): number of operand bytes following the opcode (0-2)
//! - `B` (bit 5): instruction is handled by the ALU
//! - `C` (bit 4): instruction sets the program counter absolutely
//! - `DDDD` (bits 3-0): instruction identifier
//!
//! The total encoded width of an instruction is therefore `1 + AA` bytes,
//! derivable from the opcode byte alone.
//!
//! Decoding produces the closed [`Opcode`] enum rather than going through
//! a runtime lookup table, so dispatch is an exhaustive `match` the
//! compiler can check.

use crate::MachineError;

/// HLT - halt the machine.
pub const HLT: u8 = 0b0000_0001;
/// RET - return from subroutine.
pub const RET: u8 = 0b0001_0001;
/// PUSH - push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;
/// POP - pop the top of stack into a register.
pub const POP: u8 = 0b0100_0110;
/// PRN - print a register's value as a decimal line.
pub const PRN: u8 = 0b0100_0111;
/// CALL - call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;
/// LDI - load an immediate value into a register.
pub const LDI: u8 = 0b1000_0010;
/// ADD - add one register into another.
pub const ADD: u8 = 0b1010_0000;
/// MUL - multiply one register into another.
pub const MUL: u8 = 0b1010_0010;

/// Mask for the operand-count field (bits 7-6).
const OPERAND_COUNT_MASK: u8 = 0b1100_0000;
/// Bit marking an instruction as ALU-class.
const ALU_CLASS_BIT: u8 = 0b0010_0000;

/// The closed LS-8 instruction set.
///
/// Every instruction the machine can execute is a variant here. The
/// engine dispatches by matching exhaustively on this enum, so adding an
/// instruction forces every dispatch site to handle it.
///
/// # Examples
///
/// ```
/// use libls8::{opcodes, Opcode};
///
/// let op = Opcode::decode(opcodes::LDI).unwrap();
/// assert_eq!(op, Opcode::Ldi);
/// assert_eq!(op.mnemonic(), "LDI");
/// assert_eq!(op.operand_count(), 2);
/// assert_eq!(op.size(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Hlt,
    Ldi,
    Prn,
    Mul,
    Add,
    Push,
    Pop,
    Call,
    Ret,
}

impl Opcode {
    /// Decodes an opcode byte, or `None` if the byte names no
    /// instruction.
    pub fn decode(byte: u8) -> Option<Opcode> {
        match byte {
            HLT => Some(Opcode::Hlt),
            LDI => Some(Opcode::Ldi),
            PRN => Some(Opcode::Prn),
            MUL => Some(Opcode::Mul),
            ADD => Some(Opcode::Add),
            PUSH => Some(Opcode::Push),
            POP => Some(Opcode::Pop),
            CALL => Some(Opcode::Call),
            RET => Some(Opcode::Ret),
            _ => None,
        }
    }

    /// Decodes an opcode byte fetched at `pc`, classifying failures.
    ///
    /// An undecodable byte with the ALU-class bit set fails with
    /// [`MachineError::UnsupportedAluOp`] (the byte claims to be an ALU
    /// operation the ALU does not support); any other undecodable byte
    /// fails with [`MachineError::UnknownOpcode`].
    pub fn decode_at(byte: u8, pc: u16) -> Result<Opcode, MachineError> {
        match Opcode::decode(byte) {
            Some(op) => Ok(op),
            None if byte & ALU_CLASS_BIT != 0 => {
                Err(MachineError::UnsupportedAluOp { opcode: byte, pc })
            }
            None => Err(MachineError::UnknownOpcode { opcode: byte, pc }),
        }
    }

    /// Returns the encoded opcode byte.
    pub fn byte(self) -> u8 {
        match self {
            Opcode::Hlt => HLT,
            Opcode::Ldi => LDI,
            Opcode::Prn => PRN,
            Opcode::Mul => MUL,
            Opcode::Add => ADD,
            Opcode::Push => PUSH,
            Opcode::Pop => POP,
            Opcode::Call => CALL,
            Opcode::Ret => RET,
        }
    }

    /// Returns the instruction mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Ldi => "LDI",
            Opcode::Prn => "PRN",
            Opcode::Mul => "MUL",
            Opcode::Add => "ADD",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
        }
    }

    /// Number of operand bytes, taken from bits 7-6 of the encoding.
    pub fn operand_count(self) -> u8 {
        (self.byte() & OPERAND_COUNT_MASK) >> 6
    }

    /// Total encoded width in bytes (opcode plus operands).
    pub fn size(self) -> u16 {
        1 + self.operand_count() as u16
    }

    /// Whether the instruction sets the program counter absolutely
    /// (bit 4 of the encoding). These instructions never advance the
    /// program counter relatively.
    pub fn sets_pc(self) -> bool {
        matches!(self, Opcode::Call | Opcode::Ret)
    }
}

//! # ALU (Arithmetic Logic Unit)
//!
//! Register-to-register arithmetic. The supported operation set is closed
//! and expressed as the [`AluOp`] enum; the decoder maps ALU-class opcode
//! bytes onto it, so asking the ALU to perform an operation it does not
//! support is unrepresentable here and surfaces during decode instead
//! (see [`MachineError::UnsupportedAluOp`](crate::MachineError::UnsupportedAluOp)).
//!
//! Registers are 8-bit and all arithmetic wraps modulo 256.

use crate::registers::RegisterFile;
use crate::MachineError;

/// An ALU operation over two registers.
///
/// The result is written back to the first (destination) register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// `registers[dest] += registers[src]`, wrapping.
    Add,

    /// `registers[dest] *= registers[src]`, wrapping.
    Mul,
}

/// Applies `op` to the registers at `dest` and `src`, storing the result
/// in `dest`.
///
/// # Errors
///
/// Returns [`MachineError::InvalidRegister`] if either index is not in
/// `[0, 8)`.
///
/// # Examples
///
/// ```
/// use libls8::{alu, AluOp, RegisterFile};
///
/// let mut regs = RegisterFile::new();
/// regs.set(0, 8).unwrap();
/// regs.set(1, 9).unwrap();
///
/// alu::apply(&mut regs, AluOp::Mul, 0, 1).unwrap();
/// assert_eq!(regs.get(0).unwrap(), 72);
/// ```
pub fn apply(
    regs: &mut RegisterFile,
    op: AluOp,
    dest: u8,
    src: u8,
) -> Result<(), MachineError> {
    let a = regs.get(dest)?;
    let b = regs.get(src)?;

    let result = match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Mul => a.wrapping_mul(b),
    };

    regs.set(dest, result)
}

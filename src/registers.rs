//! # Register File
//!
//! The LS-8 has eight 8-bit general-purpose registers, R0 through R7.
//! R7 is reserved as the stack pointer. It is not structurally distinct
//! from the other registers - instruction handlers that touch the stack
//! read and write it through the same checked interface.
//!
//! Register values are `u8`; arithmetic on them wraps modulo 256 (see the
//! [`alu`](crate::alu) module).

use crate::MachineError;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Index of the register reserved as the stack pointer.
pub const SP: u8 = 7;

/// Power-on value of the stack pointer.
///
/// The stack grows downward from just below the top of memory, leaving
/// the cells at `0xF4..=0xFF` free for memory-mapped use.
pub const SP_INIT: u8 = 0xF4;

/// The eight-slot register file.
///
/// # Examples
///
/// ```
/// use libls8::{RegisterFile, SP, SP_INIT};
///
/// let mut regs = RegisterFile::new();
///
/// // All registers start at zero except the stack pointer
/// assert_eq!(regs.get(0).unwrap(), 0);
/// assert_eq!(regs.get(SP).unwrap(), SP_INIT);
///
/// regs.set(3, 0x42).unwrap();
/// assert_eq!(regs.get(3).unwrap(), 0x42);
///
/// // Index 8 and above is a defined error
/// assert!(regs.get(8).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RegisterFile {
    values: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file in the power-on state: all registers zero,
    /// stack pointer at [`SP_INIT`].
    pub fn new() -> Self {
        let mut values = [0; NUM_REGISTERS];
        values[SP as usize] = SP_INIT;
        Self { values }
    }

    /// Returns the value of the register at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::InvalidRegister`] if `index` is not in
    /// `[0, 8)`.
    pub fn get(&self, index: u8) -> Result<u8, MachineError> {
        self.values
            .get(index as usize)
            .copied()
            .ok_or(MachineError::InvalidRegister { index })
    }

    /// Sets the register at `index` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::InvalidRegister`] if `index` is not in
    /// `[0, 8)`.
    pub fn set(&mut self, index: u8, value: u8) -> Result<(), MachineError> {
        match self.values.get_mut(index as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MachineError::InvalidRegister { index }),
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

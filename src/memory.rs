//! # Memory
//!
//! The LS-8 address space is a single flat array of 256 byte-wide cells.
//! Programs are loaded starting at address 0 and the stack grows downward
//! from just below the top of memory.
//!
//! ## Design Principles
//!
//! Unlike hardware buses that silently return garbage for bad addresses,
//! every access here is bounds-checked and returns an explicit
//! [`MachineError::OutOfBounds`](crate::MachineError::OutOfBounds) result.
//! This turns latent out-of-range bugs in a loaded program into defined,
//! testable failures.

use crate::MachineError;

/// Number of addressable cells in LS-8 memory.
pub const MEMORY_SIZE: usize = 256;

/// Flat 256-byte memory store.
///
/// All cells are initialized to zero. Addresses are taken as `u16` so that
/// an over-advanced program counter (e.g. `pc + 2` past the top of memory)
/// is representable and rejected rather than silently wrapped.
///
/// # Examples
///
/// ```
/// use libls8::Memory;
///
/// let mut mem = Memory::new();
///
/// mem.write(0x12, 0x42).unwrap();
/// assert_eq!(mem.read(0x12).unwrap(), 0x42);
///
/// // Out-of-range access is a defined error, not a panic
/// assert!(mem.read(0x100).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Memory {
    data: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates a new memory instance with all cells initialized to zero.
    pub fn new() -> Self {
        Self {
            data: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at the specified address.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::OutOfBounds`] if `addr` is not in `[0, 256)`.
    pub fn read(&self, addr: u16) -> Result<u8, MachineError> {
        self.data
            .get(addr as usize)
            .copied()
            .ok_or(MachineError::OutOfBounds { addr })
    }

    /// Writes a byte to the specified address.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::OutOfBounds`] if `addr` is not in `[0, 256)`.
    pub fn write(&mut self, addr: u16, value: u8) -> Result<(), MachineError> {
        match self.data.get_mut(addr as usize) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(MachineError::OutOfBounds { addr }),
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

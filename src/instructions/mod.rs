//! # LS-8 Instruction Implementations
//!
//! One handler per opcode, grouped by category. Each handler is a
//! standalone function over `&mut Cpu` taking the operand bytes it
//! consumes, and is solely responsible for advancing the program counter
//! (by the instruction's encoded width, or absolutely for control
//! transfers). HLT is recognized by the engine itself and has no handler.
//!
//! ## Categories
//!
//! - **load_store**: LDI
//! - **alu**: ADD, MUL (arithmetic through the ALU)
//! - **stack**: PUSH, POP
//! - **control**: CALL, RET
//! - **io**: PRN (observation channel)

pub(crate) mod alu;
pub(crate) mod control;
pub(crate) mod io;
pub(crate) mod load_store;
pub(crate) mod stack;

//! # Machine State and Execution
//!
//! This module contains the [`Cpu`] struct representing the full LS-8
//! machine state and the fetch-decode-execute loop.
//!
//! ## Machine State
//!
//! The CPU owns:
//! - **Memory**: the 256-byte flat store
//! - **Register file**: R0-R7, with R7 reserved as the stack pointer
//! - **Program counter** (pc): address of the next instruction
//! - **Run state**: `Running` or `Halted`
//! - **Output sink**: destination of PRN emissions
//!
//! ## Execution Model
//!
//! Each [`step`](Cpu::step) performs one fetch-decode-execute cycle:
//!
//! 1. Read the opcode byte and both operand bytes at `pc`, `pc + 1`, and
//!    `pc + 2`. Operands are read unconditionally regardless of how many
//!    the instruction actually uses; this simplifies the fetch stage, and
//!    over-reads past the loaded program land in zero-initialized cells
//!    that zero- and one-operand instructions never consume.
//! 2. Decode the opcode byte into the closed [`Opcode`] enum. An
//!    undecodable byte is a fatal error.
//! 3. Dispatch through an exhaustive match. The handler alone advances
//!    `pc` - by the instruction's encoded width, or absolutely for CALL
//!    and RET. HLT transitions the machine to `Halted`.
//!
//! [`run`](Cpu::run) repeats `step` until the machine halts or an error
//! aborts the run.

use crate::instructions;
use crate::memory::Memory;
use crate::opcodes::Opcode;
use crate::output::{BufferSink, OutputSink, StdoutSink};
use crate::registers::{RegisterFile, NUM_REGISTERS, SP};
use crate::MachineError;

/// Run state of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The machine will execute the instruction at `pc` on the next step.
    Running,

    /// A HLT instruction was executed; the machine is stopped and `pc`
    /// no longer advances.
    Halted,
}

/// LS-8 machine state and execution context.
///
/// The CPU owns all machine state. It is generic over the PRN output
/// destination via the [`OutputSink`] trait.
///
/// # Examples
///
/// ```
/// use libls8::{BufferSink, Cpu, State};
///
/// // LDI R0, 8 / LDI R1, 9 / MUL R0, R1 / PRN R0 / HLT
/// let program = [
///     0b10000010, 0, 8,
///     0b10000010, 1, 9,
///     0b10100010, 0, 1,
///     0b01000111, 0,
///     0b00000001,
/// ];
///
/// let mut cpu = Cpu::with_output(BufferSink::new());
/// cpu.load_program(&program).unwrap();
/// cpu.run().unwrap();
///
/// assert_eq!(cpu.state(), State::Halted);
/// assert_eq!(cpu.output().values(), &[72]);
/// ```
pub struct Cpu<S: OutputSink> {
    /// The 256-byte memory.
    pub(crate) memory: Memory,

    /// The eight general-purpose registers (R7 = stack pointer).
    pub(crate) registers: RegisterFile,

    /// Program counter (address of the next instruction).
    ///
    /// Kept as u16 so an over-advanced pc is caught on the next fetch
    /// instead of wrapping silently.
    pub(crate) pc: u16,

    /// Run state.
    pub(crate) state: State,

    /// Destination for PRN emissions.
    pub(crate) output: S,
}

impl Cpu<StdoutSink> {
    /// Creates a machine in the power-on state with PRN printing to
    /// standard output.
    ///
    /// Power-on state: `pc = 0`, all registers zero except the stack
    /// pointer at 0xF4, all memory cells zero, state `Running`.
    pub fn new() -> Self {
        Self::with_output(StdoutSink)
    }
}

impl Default for Cpu<StdoutSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu<BufferSink> {
    /// Creates a machine whose PRN output is captured in a
    /// [`BufferSink`]. Convenience for tests and embedding.
    pub fn with_captured_output() -> Self {
        Self::with_output(BufferSink::new())
    }
}

impl<S: OutputSink> Cpu<S> {
    /// Creates a machine in the power-on state emitting PRN output to
    /// the given sink.
    pub fn with_output(output: S) -> Self {
        Self {
            memory: Memory::new(),
            registers: RegisterFile::new(),
            pc: 0,
            state: State::Running,
            output,
        }
    }

    /// Writes a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::OutOfBounds`] if the program is longer
    /// than memory (256 bytes).
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), MachineError> {
        for (addr, &byte) in program.iter().enumerate() {
            self.memory.write(addr as u16, byte)?;
        }
        Ok(())
    }

    /// Executes one fetch-decode-execute cycle.
    ///
    /// Stepping a halted machine is a no-op that returns
    /// [`State::Halted`].
    ///
    /// # Errors
    ///
    /// Any [`MachineError`] aborts the cycle; the machine state reflects
    /// the work done before the fault.
    pub fn step(&mut self) -> Result<State, MachineError> {
        if self.state == State::Halted {
            return Ok(State::Halted);
        }

        // Fetch. Both operand bytes are read unconditionally.
        let byte = self.memory.read(self.pc)?;
        let operand_a = self.memory.read(self.pc + 1)?;
        let operand_b = self.memory.read(self.pc + 2)?;

        // Decode into the closed instruction set.
        let opcode = Opcode::decode_at(byte, self.pc)?;

        // Execute. Handlers advance pc themselves.
        match opcode {
            Opcode::Hlt => self.state = State::Halted,
            Opcode::Ldi => instructions::load_store::execute_ldi(self, operand_a, operand_b)?,
            Opcode::Prn => instructions::io::execute_prn(self, operand_a)?,
            Opcode::Add => instructions::alu::execute_add(self, operand_a, operand_b)?,
            Opcode::Mul => instructions::alu::execute_mul(self, operand_a, operand_b)?,
            Opcode::Push => instructions::stack::execute_push(self, operand_a)?,
            Opcode::Pop => instructions::stack::execute_pop(self, operand_a)?,
            Opcode::Call => instructions::control::execute_call(self, operand_a)?,
            Opcode::Ret => instructions::control::execute_ret(self)?,
        }

        Ok(self.state)
    }

    /// Runs the fetch-decode-execute loop until the machine halts.
    ///
    /// # Errors
    ///
    /// Returns the first [`MachineError`] encountered. A program that
    /// never executes HLT and never faults loops forever; that is a
    /// property of the loaded program, not guarded against here.
    pub fn run(&mut self) -> Result<(), MachineError> {
        while self.state == State::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Pushes a byte onto the downward-growing stack.
    ///
    /// Fails with [`MachineError::StackOverflow`] if the stack pointer
    /// would move below address 0. Checked before any state changes.
    pub(crate) fn push_byte(&mut self, value: u8) -> Result<(), MachineError> {
        let sp = self.registers.get(SP)?;
        if sp == 0 {
            return Err(MachineError::StackOverflow { sp });
        }

        let new_sp = sp - 1;
        self.memory.write(new_sp as u16, value)?;
        self.registers.set(SP, new_sp)
    }

    /// Pops a byte off the stack.
    ///
    /// Fails with [`MachineError::StackUnderflow`] if the stack pointer
    /// would move above address 255. Checked before any state changes.
    pub(crate) fn pop_byte(&mut self) -> Result<u8, MachineError> {
        let sp = self.registers.get(SP)?;
        if sp == u8::MAX {
            return Err(MachineError::StackUnderflow { sp });
        }

        let value = self.memory.read(sp as u16)?;
        self.registers.set(SP, sp + 1)?;
        Ok(value)
    }

    // ========== State Accessors ==========

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer (the value of R7).
    pub fn sp(&self) -> u8 {
        // SP is a fixed in-range index, so the lookup cannot fail.
        self.registers.get(SP).unwrap_or(0)
    }

    /// Returns the run state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns a reference to the register file.
    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// Returns a mutable reference to the register file.
    pub fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.registers
    }

    /// Returns a reference to memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Returns a mutable reference to memory.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Returns a reference to the output sink.
    pub fn output(&self) -> &S {
        &self.output
    }

    /// Returns a mutable reference to the output sink.
    pub fn output_mut(&mut self) -> &mut S {
        &mut self.output
    }

    /// Formats the current machine state as a one-line trace:
    /// program counter, the three bytes at the fetch window, and all
    /// eight registers, in hex.
    ///
    /// Purely diagnostic; bytes outside memory render as zero.
    pub fn trace(&self) -> String {
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.memory.read(self.pc).unwrap_or(0),
            self.memory.read(self.pc + 1).unwrap_or(0),
            self.memory.read(self.pc + 2).unwrap_or(0),
        );

        for index in 0..NUM_REGISTERS as u8 {
            let value = self.registers.get(index).unwrap_or(0);
            line.push_str(&format!(" {:02X}", value));
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes;
    use crate::registers::SP_INIT;

    #[test]
    fn test_power_on_state() {
        let cpu = Cpu::with_captured_output();

        assert_eq!(cpu.pc(), 0);
        assert_eq!(cpu.sp(), SP_INIT);
        assert_eq!(cpu.state(), State::Running);

        for index in 0..SP {
            assert_eq!(cpu.registers().get(index).unwrap(), 0);
        }
    }

    #[test]
    fn test_step_halts_on_hlt() {
        let mut cpu = Cpu::with_captured_output();
        cpu.load_program(&[opcodes::HLT]).unwrap();

        assert_eq!(cpu.step().unwrap(), State::Halted);

        // pc does not advance past a HLT
        assert_eq!(cpu.pc(), 0);
    }

    #[test]
    fn test_step_after_halt_is_noop() {
        let mut cpu = Cpu::with_captured_output();
        cpu.load_program(&[opcodes::HLT]).unwrap();

        cpu.step().unwrap();
        let pc = cpu.pc();

        assert_eq!(cpu.step().unwrap(), State::Halted);
        assert_eq!(cpu.pc(), pc);
    }

    #[test]
    fn test_step_unknown_opcode() {
        let mut cpu = Cpu::with_captured_output();
        cpu.load_program(&[0xFF]).unwrap();

        assert_eq!(
            cpu.step(),
            Err(MachineError::UnknownOpcode {
                opcode: 0xFF,
                pc: 0
            })
        );
    }

    #[test]
    fn test_fetch_past_top_of_memory() {
        let mut cpu = Cpu::with_captured_output();
        cpu.pc = 0xFF;

        // The unconditional operand reads run past address 255.
        assert_eq!(
            cpu.step(),
            Err(MachineError::OutOfBounds { addr: 0x100 })
        );
    }

    #[test]
    fn test_load_program_too_large() {
        let mut cpu = Cpu::with_captured_output();
        let image = vec![0u8; 257];

        assert_eq!(
            cpu.load_program(&image),
            Err(MachineError::OutOfBounds { addr: 256 })
        );
    }

    #[test]
    fn test_trace_format() {
        let mut cpu = Cpu::with_captured_output();
        cpu.load_program(&[opcodes::LDI, 0, 8]).unwrap();

        let line = cpu.trace();
        assert!(line.starts_with("TRACE: 00 | 82 00 08 |"));

        // Eight register fields follow, SP last
        assert!(line.ends_with("F4"));
    }
}

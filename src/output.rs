//! # Observation Channel
//!
//! The PRN instruction is the machine's only user-visible output: it
//! emits a register's value as a decimal line. The [`OutputSink`] trait
//! decouples the engine from where those lines go, the same way the
//! memory and register interfaces decouple it from storage.
//!
//! Emission is fire-and-forget: the engine offers no backpressure and a
//! sink must not fail the run. [`StdoutSink`] writes to standard output
//! best-effort; [`BufferSink`] captures values for inspection in tests.

use std::io::Write;

/// Destination for values emitted by the PRN instruction.
pub trait OutputSink {
    /// Receives one emitted register value.
    ///
    /// Implementations must not panic; emission is best-effort and a
    /// failed write is dropped silently.
    fn emit(&mut self, value: u8);
}

/// Sink that prints each value as a decimal line on standard output.
///
/// Write errors (e.g. a closed pipe) are ignored.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, value: u8) {
        let _ = writeln!(std::io::stdout(), "{}", value);
    }
}

/// Sink that records emitted values in order.
///
/// # Examples
///
/// ```
/// use libls8::{BufferSink, OutputSink};
///
/// let mut sink = BufferSink::new();
/// sink.emit(72);
/// sink.emit(3);
///
/// assert_eq!(sink.values(), &[72, 3]);
/// ```
#[derive(Debug, Default)]
pub struct BufferSink {
    values: Vec<u8>,
}

impl BufferSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the values emitted so far, oldest first.
    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

impl OutputSink for BufferSink {
    fn emit(&mut self, value: u8) {
        self.values.push(value);
    }
}

//! # Program Loader
//!
//! LS-8 programs are plain text: one instruction byte per non-empty line,
//! written in base 2. A `#` starts a comment that runs to the end of the
//! line; blank and comment-only lines are ignored. Bytes are placed in
//! memory sequentially starting at address 0, in file order.
//!
//! ```text
//! # mult.ls8: print 8 * 9
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! ...
//! 00000001 # HLT
//! ```
//!
//! Parsing happens entirely before execution: a malformed line fails the
//! load with [`LoadError::InvalidEncoding`] and nothing runs.

use std::fs;
use std::path::Path;

/// Errors that can occur while loading a program text.
#[derive(Debug)]
pub enum LoadError {
    /// A non-comment, non-blank line is not a valid base-2 byte literal.
    InvalidEncoding { line: usize, text: String },

    /// The program file could not be read.
    Io(std::io::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LoadError::InvalidEncoding { line, text } => {
                write!(
                    f,
                    "line {}: '{}' is not a valid base-2 byte literal",
                    line, text
                )
            }
            LoadError::Io(err) => write!(f, "could not read program: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Parses a program text into the raw bytes to load at address 0.
///
/// # Errors
///
/// Returns [`LoadError::InvalidEncoding`] (with the 1-indexed line
/// number and offending text) for any line that is not a base-2 integer
/// fitting in one byte.
///
/// # Examples
///
/// ```
/// use libls8::parse_program;
///
/// let source = "\
/// ## print 8
/// 10000010 # LDI R0,8
/// 00000000
/// 00001000
///
/// 01000111 # PRN R0
/// 00000000
/// 00000001 # HLT
/// ";
///
/// let bytes = parse_program(source).unwrap();
/// assert_eq!(bytes, [0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut bytes = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        // Strip trailing comment, then surrounding whitespace.
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let byte = u8::from_str_radix(text, 2).map_err(|_| LoadError::InvalidEncoding {
            line: index + 1,
            text: text.to_string(),
        })?;
        bytes.push(byte);
    }

    Ok(bytes)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`LoadError::InvalidEncoding`] if any line fails to parse.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let source = fs::read_to_string(path)?;
    parse_program(&source)
}

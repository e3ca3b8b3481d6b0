//! Text program loader.
//!
//! Programs come as plain text with one 8-bit binary literal per line.
//! Everything from `#` to the end of a line is a comment, and blank
//! lines are skipped:
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 00000001 # HLT
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::processor::ram::MEMORY_SIZE;

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// A non-comment line was not an 8-bit binary literal.
    BadLiteral { line: usize, text: String },
    /// More bytes than the machine has memory.
    TooLong { len: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read program: {}", err),
            LoadError::BadLiteral { line, text } => {
                write!(f, "line {}: {:?} is not an 8-bit binary literal", line, text)
            }
            LoadError::TooLong { len } => {
                write!(f, "program is {} bytes, ram holds {}", len, MEMORY_SIZE)
            }
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

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> LoadError {
        LoadError::Io(err)
    }
}

/// Parses program text into the byte image to hand to the machine.
pub fn parse(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();

    for (number, line) in source.lines().enumerate() {
        let text = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let byte = u8::from_str_radix(text, 2).map_err(|_| LoadError::BadLiteral {
            line: number + 1,
            text: text.to_string(),
        })?;
        program.push(byte);
    }

    if program.len() > MEMORY_SIZE {
        return Err(LoadError::TooLong { len: program.len() });
    }

    Ok(program)
}

/// Reads and parses a program file.
pub fn read_program<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let source = fs::read_to_string(path)?;
    parse(&source)
}

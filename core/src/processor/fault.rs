use std::fmt;
use std::io;

use super::instruction::Opcode;

/// Every way a machine step can go wrong. A fault stops the clock; the
/// machine stays inspectable but refuses further steps until `reset`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fault {
    /// A memory access landed outside the 256-byte address space.
    OutOfBounds { addr: u16 },
    /// A register index outside 0..=7 reached the register file.
    InvalidRegister { index: u8 },
    /// The ALU was asked for an operation it does not implement.
    UnsupportedOperation(Opcode),
    /// Fetch pulled a byte that is not a known instruction.
    UnrecognizedOpcode { opcode: u8, pc: u16 },
    /// PRN could not write to the output sink.
    Output(io::ErrorKind),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::OutOfBounds { addr } => {
                write!(f, "address {:#06x} is outside ram", addr)
            }
            Fault::InvalidRegister { index } => {
                write!(f, "register index {} out of range", index)
            }
            Fault::UnsupportedOperation(op) => {
                write!(f, "alu does not implement {}", op.mnemonic())
            }
            Fault::UnrecognizedOpcode { opcode, pc } => {
                write!(f, "unknown instruction {:#010b} at {:#04x}", opcode, pc)
            }
            Fault::Output(kind) => {
                write!(f, "output write failed: {:?}", kind)
            }
        }
    }
}

impl std::error::Error for Fault {}

mod flags;

pub use self::flags::Flags;

use std::fmt;

use super::fault::Fault;

/// Number of general-purpose register slots.
pub const NUM_REGISTERS: usize = 8;

/// Power-on value of the stack pointer. The stack grows downward from
/// here, one byte per push.
pub const SP_INIT: u8 = 0xF4;

const SP: usize = 7;

/// The register file: eight one-byte slots, the program counter and the
/// flags register. Slot 7 holds the stack pointer; it is an ordinary
/// register and programs may overwrite it like any other.
pub struct Register {
    gp: [u8; NUM_REGISTERS],
    pub pc: u16,
    pub fl: Flags,
}

impl Register {
    pub fn new() -> Register {
        let mut gp = [0; NUM_REGISTERS];
        gp[SP] = SP_INIT;

        Register {
            gp,
            pc: 0,
            fl: Flags::new(),
        }
    }

    /// Reads slot `index`, faulting when the index is 8 or more.
    pub fn get(&self, index: u8) -> Result<u8, Fault> {
        self.gp
            .get(index as usize)
            .copied()
            .ok_or(Fault::InvalidRegister { index })
    }

    /// Writes slot `index`, faulting when the index is 8 or more.
    pub fn set(&mut self, index: u8, value: u8) -> Result<(), Fault> {
        match self.gp.get_mut(index as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Fault::InvalidRegister { index }),
        }
    }

    pub fn sp(&self) -> u8 {
        self.gp[SP]
    }

    pub fn set_sp(&mut self, value: u8) {
        self.gp[SP] = value;
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for value in self.gp {
            write!(f, "{}{:02X}", sep, value)?;
            sep = " ";
        }
        Ok(())
    }
}

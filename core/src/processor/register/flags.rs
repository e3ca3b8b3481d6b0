/// Condition bits written by CMP and read by the conditional jumps.
/// Only the low three bits are meaningful; CMP always leaves exactly
/// one of them set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Flags {
    fl: u8,
}

impl Flags {
    /// CMP operands were equal.
    pub const EQUAL: u8 = 0b001;
    /// First CMP operand was greater.
    pub const GREATER: u8 = 0b010;
    /// First CMP operand was less.
    pub const LESS: u8 = 0b100;

    pub fn new() -> Flags {
        Flags { fl: 0 }
    }

    pub fn get(&self) -> u8 {
        self.fl
    }

    pub fn set(&mut self, fl: u8) {
        self.fl = fl;
    }

    /// True when every bit of `mask` is set.
    pub fn test(&self, mask: u8) -> bool {
        (self.fl & mask) == mask
    }
}

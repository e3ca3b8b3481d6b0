mod opcode;

pub use self::opcode::Opcode;

/// A fetched instruction byte together with the table entries the step
/// loop needs: which operation it is and how many operand bytes follow.
#[derive(Copy, Clone, Debug)]
pub struct Instruction {
    pub opcode: Opcode,
    pub raw: u8,
    pub operands: u16,
}

impl Instruction {
    /// Decodes one instruction byte. Returns `None` for bytes that are
    /// not part of the instruction set.
    pub fn decode(byte: u8) -> Option<Instruction> {
        let opcode = Opcode::from_byte(byte)?;

        Some(Instruction {
            opcode,
            raw: byte,
            operands: opcode.operand_count(),
        })
    }
}

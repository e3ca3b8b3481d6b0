/// Instruction set of the machine.
///
/// Each variant's discriminant is its wire encoding. The encoding packs
/// metadata into the byte as `AABCDDDD`:
///
/// - `AA`   operand bytes following the instruction (0 to 2)
/// - `B`    instruction is carried out by the ALU
/// - `C`    instruction writes the PC itself
/// - `DDDD` instruction identifier
///
/// Execution never decodes these fields bit by bit; it dispatches on the
/// whole byte and consults [`Opcode::operand_count`], [`Opcode::is_alu_op`]
/// and [`Opcode::sets_pc`] instead. Tests keep those tables in agreement
/// with the packed layout.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Opcode {
    // load and output
    LDI = 0b1000_0010,
    PRN = 0b0100_0111,

    // alu
    ADD = 0b1010_0000,
    MUL = 0b1010_0010,
    CMP = 0b1010_0111,

    // stack
    PUSH = 0b0100_0101,
    POP = 0b0100_0110,

    // subroutines and jumps
    CALL = 0b0101_0000,
    RET = 0b0001_0001,
    JMP = 0b0101_0100,
    JEQ = 0b0101_0101,
    JNE = 0b0101_0110,

    HLT = 0b0000_0001,
}

impl Opcode {
    pub const fn byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(byte: u8) -> Option<Opcode> {
        match byte {
            0b1000_0010 => Some(Opcode::LDI),
            0b0100_0111 => Some(Opcode::PRN),
            0b1010_0000 => Some(Opcode::ADD),
            0b1010_0010 => Some(Opcode::MUL),
            0b1010_0111 => Some(Opcode::CMP),
            0b0100_0101 => Some(Opcode::PUSH),
            0b0100_0110 => Some(Opcode::POP),
            0b0101_0000 => Some(Opcode::CALL),
            0b0001_0001 => Some(Opcode::RET),
            0b0101_0100 => Some(Opcode::JMP),
            0b0101_0101 => Some(Opcode::JEQ),
            0b0101_0110 => Some(Opcode::JNE),
            0b0000_0001 => Some(Opcode::HLT),
            _ => None,
        }
    }

    /// Operand bytes following the instruction byte.
    pub const fn operand_count(self) -> u16 {
        match self {
            Opcode::LDI | Opcode::ADD | Opcode::MUL | Opcode::CMP => 2,
            Opcode::PRN
            | Opcode::PUSH
            | Opcode::POP
            | Opcode::CALL
            | Opcode::JMP
            | Opcode::JEQ
            | Opcode::JNE => 1,
            Opcode::RET | Opcode::HLT => 0,
        }
    }

    /// True for instructions that write the PC themselves. The step loop
    /// skips its shared increment for these.
    pub const fn sets_pc(self) -> bool {
        matches!(
            self,
            Opcode::CALL | Opcode::RET | Opcode::JMP | Opcode::JEQ | Opcode::JNE
        )
    }

    /// True for instructions carrying the ALU bit of the encoding.
    pub const fn is_alu_op(self) -> bool {
        matches!(self, Opcode::ADD | Opcode::MUL | Opcode::CMP)
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::LDI => "LDI",
            Opcode::PRN => "PRN",
            Opcode::ADD => "ADD",
            Opcode::MUL => "MUL",
            Opcode::CMP => "CMP",
            Opcode::PUSH => "PUSH",
            Opcode::POP => "POP",
            Opcode::CALL => "CALL",
            Opcode::RET => "RET",
            Opcode::JMP => "JMP",
            Opcode::JEQ => "JEQ",
            Opcode::JNE => "JNE",
            Opcode::HLT => "HLT",
        }
    }
}

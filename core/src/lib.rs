mod processor;

pub mod loader;

pub use processor::core::Ls8;
pub use processor::fault::Fault;
pub use processor::instruction::{Instruction, Opcode};
pub use processor::ram::Ram;
pub use processor::register::{Flags, Register};

pub const MEMORY_SIZE: usize = processor::ram::MEMORY_SIZE;
pub const NUM_REGISTERS: usize = processor::register::NUM_REGISTERS;
pub const SP_INIT: u8 = processor::register::SP_INIT;

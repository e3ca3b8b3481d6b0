pub mod alu;
pub mod core;
pub mod fault;
pub mod instruction;
pub mod ram;
pub mod register;

use super::fault::Fault;
use super::instruction::Opcode;

/// Applies an arithmetic operation to two register values.
///
/// The ALU is stateless: both operands come in by value and the result
/// goes back to the caller. Arithmetic wraps modulo 256. Only ADD and
/// MUL are implemented; anything else is rejected.
pub fn apply(op: Opcode, a: u8, b: u8) -> Result<u8, Fault> {
    match op {
        Opcode::ADD => Ok(a.wrapping_add(b)),
        Opcode::MUL => Ok(a.wrapping_mul(b)),
        _ => Err(Fault::UnsupportedOperation(op)),
    }
}

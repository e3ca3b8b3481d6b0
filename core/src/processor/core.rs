use std::fmt;
use std::io;
use std::io::Write;

use super::alu;
use super::fault::Fault;
use super::instruction::{Instruction, Opcode};
use super::ram::Ram;
use super::register::{Flags, Register};

/// The LS-8 machine: register file, memory and the clock that drives the
/// fetch, decode, execute loop. Each instance owns its whole state, so
/// several machines can run side by side.
///
/// PRN output goes to the sink passed to [`Ls8::with_output`]; plain
/// [`Ls8::new`] wires it to stdout.
pub struct Ls8 {
    pub reg: Register,
    pub ram: Ram,
    out: Box<dyn Write>,
    running: bool,
}

impl Ls8 {
    pub fn new() -> Ls8 {
        Ls8::with_output(Box::new(io::stdout()))
    }

    pub fn with_output(out: Box<dyn Write>) -> Ls8 {
        Ls8 {
            reg: Register::new(),
            ram: Ram::new(),
            out,
            running: true,
        }
    }

    pub fn new_with_program(program: &[u8]) -> Result<Ls8, Fault> {
        let mut machine = Ls8::new();
        machine.load(program)?;
        Ok(machine)
    }

    /// Copies a program image into memory starting at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<(), Fault> {
        self.ram.load(0, program)
    }

    /// Returns the machine to its power-on state: memory zeroed, PC and
    /// flags cleared, SP back at the top of the stack, clock running.
    pub fn reset(&mut self) {
        self.reg = Register::new();
        self.ram = Ram::new();
        self.running = true;
    }

    /// False once HLT or a fault has stopped the clock.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Executes the instruction at the PC. Any fault stops the clock and
    /// is passed back to the caller. Once the clock has stopped, stepping
    /// does nothing until `reset`.
    pub fn step(&mut self) -> Result<(), Fault> {
        if !self.running {
            return Ok(());
        }

        match self.dispatch() {
            Ok(()) => Ok(()),
            Err(fault) => {
                self.running = false;
                Err(fault)
            }
        }
    }

    /// Runs until HLT or a fault, then flushes the output sink.
    pub fn run(&mut self) -> Result<(), Fault> {
        while self.running {
            self.step()?;
        }
        self.out.flush().map_err(|err| Fault::Output(err.kind()))
    }

    fn dispatch(&mut self) -> Result<(), Fault> {
        let pc = self.reg.pc;
        let raw = self.ram.read(pc)?;
        let inst = Instruction::decode(raw).ok_or(Fault::UnrecognizedOpcode { opcode: raw, pc })?;

        log::debug!("op: {}, {}", inst.opcode.mnemonic(), self);

        match inst.opcode {
            Opcode::LDI => {
                let index = self.ram.read(pc + 1)?;
                let value = self.ram.read(pc + 2)?;
                self.reg.set(index, value)?;
            }
            Opcode::PRN => {
                let index = self.ram.read(pc + 1)?;
                let value = self.reg.get(index)?;
                writeln!(self.out, "{}", value).map_err(|err| Fault::Output(err.kind()))?;
            }
            Opcode::ADD | Opcode::MUL => {
                let index_a = self.ram.read(pc + 1)?;
                let index_b = self.ram.read(pc + 2)?;
                let a = self.reg.get(index_a)?;
                let b = self.reg.get(index_b)?;
                let result = alu::apply(inst.opcode, a, b)?;
                self.reg.set(index_a, result)?;
            }
            Opcode::CMP => {
                let a = self.reg.get(self.ram.read(pc + 1)?)?;
                let b = self.reg.get(self.ram.read(pc + 2)?)?;
                let fl = if a < b {
                    Flags::LESS
                } else if a > b {
                    Flags::GREATER
                } else {
                    Flags::EQUAL
                };
                self.reg.fl.set(fl);
            }
            Opcode::PUSH => {
                let index = self.ram.read(pc + 1)?;
                let value = self.reg.get(index)?;
                self.push(value)?;
            }
            Opcode::POP => {
                let index = self.ram.read(pc + 1)?;
                let value = self.pop()?;
                self.reg.set(index, value)?;
            }
            // Control transfers write the PC themselves and return early,
            // skipping the shared increment below.
            Opcode::CALL => {
                let index = self.ram.read(pc + 1)?;
                let target = self.reg.get(index)?;
                let ret = pc + 2;
                let ret = u8::try_from(ret).map_err(|_| Fault::OutOfBounds { addr: ret })?;
                self.push(ret)?;
                self.reg.pc = target as u16;
                return Ok(());
            }
            Opcode::RET => {
                let ret = self.pop()?;
                self.reg.pc = ret as u16;
                return Ok(());
            }
            Opcode::JMP => {
                let index = self.ram.read(pc + 1)?;
                self.reg.pc = self.reg.get(index)? as u16;
                return Ok(());
            }
            Opcode::JEQ => {
                let index = self.ram.read(pc + 1)?;
                if self.reg.fl.test(Flags::EQUAL) {
                    self.reg.pc = self.reg.get(index)? as u16;
                    return Ok(());
                }
            }
            Opcode::JNE => {
                let index = self.ram.read(pc + 1)?;
                if !self.reg.fl.test(Flags::EQUAL) {
                    self.reg.pc = self.reg.get(index)? as u16;
                    return Ok(());
                }
            }
            Opcode::HLT => {
                self.running = false;
            }
        }

        self.reg.pc = pc + 1 + inst.operands;
        Ok(())
    }

    // The stack grows downward: SP moves before a push lands, after a
    // pop leaves. SP itself wraps modulo 256 like every register.
    fn push(&mut self, value: u8) -> Result<(), Fault> {
        let sp = self.reg.sp().wrapping_sub(1);
        self.reg.set_sp(sp);
        self.ram.write(sp as u16, value)
    }

    fn pop(&mut self) -> Result<u8, Fault> {
        let sp = self.reg.sp();
        let value = self.ram.read(sp as u16)?;
        self.reg.set_sp(sp.wrapping_add(1));
        Ok(value)
    }
}

impl fmt::Display for Ls8 {
    /// One trace line: PC, the next three memory bytes and all eight
    /// registers, in hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TRACE: {:02X} |", self.reg.pc)?;
        for offset in 0..3 {
            let byte = self
                .reg
                .pc
                .checked_add(offset)
                .and_then(|addr| self.ram.get(addr));
            match byte {
                Some(byte) => write!(f, " {:02X}", byte)?,
                None => write!(f, " --")?,
            }
        }
        write!(f, " | {}", self.reg)
    }
}

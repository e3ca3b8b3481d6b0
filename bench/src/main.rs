use std::time::SystemTime;

use ls8_core::{Ls8, Opcode};

const COUNT_UPPER: usize = 1000;
const COUNT_PITCH: usize = 10000;

// Endless counting loop: R0 += R1, jump back, forever.
const PROGRAM: [u8; 14] = [
    Opcode::LDI.byte(), 0, 0,
    Opcode::LDI.byte(), 1, 1,
    Opcode::LDI.byte(), 3, 9,
    Opcode::ADD.byte(), 0, 1,
    Opcode::JMP.byte(), 3,
];

fn main() {
    let mut machine = Ls8::new_with_program(&PROGRAM).unwrap();

    let mut times = Vec::new();
    let mut recv: u8 = 0;
    for _ in 0..COUNT_UPPER {
        let before = SystemTime::now();
        for _ in 0..COUNT_PITCH {
            machine.step().unwrap();
        }
        unsafe { std::ptr::write_volatile(&mut recv, machine.reg.get(0).unwrap()); }
        let duration = before.elapsed().unwrap();
        times.push(duration);
    }

    let average = times.iter().map(|d| d.as_micros()).sum::<u128>() / COUNT_UPPER as u128;
    println!("average: {} us", average);
}

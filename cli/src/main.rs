use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use ls8_core::{loader, Fault, Ls8};

#[derive(Parser, Debug)]
struct Args {
    /// Stop after this many instructions instead of running until HLT.
    #[arg(short, long)]
    max_steps: Option<u64>,

    /// Program file: one 8-bit binary literal per line, `#` starts a comment.
    file: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::builder()
        .format(|buf, record| {
            writeln!(buf, "{}: {}", record.level(), record.args())
        })
        .init();
    log::info!("env logger initialized");

    let program = match loader::read_program(&args.file) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("{}: {}", args.file, err);
            return ExitCode::FAILURE;
        }
    };
    log::info!("loaded {} bytes from {}", program.len(), args.file);

    let mut machine = match Ls8::new_with_program(&program) {
        Ok(machine) => machine,
        Err(fault) => {
            eprintln!("{}: {}", args.file, fault);
            return ExitCode::FAILURE;
        }
    };

    match execute(&mut machine, args.max_steps) {
        Ok(()) => ExitCode::SUCCESS,
        Err(fault) => {
            eprintln!("{}", fault);
            ExitCode::FAILURE
        }
    }
}

fn execute(machine: &mut Ls8, max_steps: Option<u64>) -> Result<(), Fault> {
    match max_steps {
        None => machine.run(),
        Some(bound) => {
            let mut steps = 0;
            while machine.running() && steps < bound {
                machine.step()?;
                steps += 1;
            }
            if machine.running() {
                log::warn!("stopped after {} steps without reaching HLT", bound);
            }
            Ok(())
        }
    }
}

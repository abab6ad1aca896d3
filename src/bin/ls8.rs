//! LS-8 runner
//!
//! Loads a program file and runs it to completion, printing PRN output
//! to stdout. With `--trace`, prints the machine state to stderr before
//! each step.
//!
//! Usage: `ls8 [--trace] <program.ls8>`

use std::env;
use std::process;

use libls8::{load_file, Cpu, State};

fn main() {
    let mut trace = false;
    let mut path = None;

    for arg in env::args().skip(1) {
        if arg == "--trace" {
            trace = true;
        } else if arg == "--help" || arg == "-h" {
            println!("Usage: ls8 [--trace] <program.ls8>");
            return;
        } else if path.is_none() {
            path = Some(arg);
        } else {
            eprintln!("ls8: unexpected argument '{}'", arg);
            process::exit(2);
        }
    }

    let path = match path {
        Some(path) => path,
        None => {
            eprintln!("Usage: ls8 [--trace] <program.ls8>");
            process::exit(2);
        }
    };

    let program = match load_file(&path) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("ls8: {}: {}", path, err);
            process::exit(1);
        }
    };

    let mut cpu = Cpu::new();
    if let Err(err) = cpu.load_program(&program) {
        eprintln!("ls8: {}: {}", path, err);
        process::exit(1);
    }

    let result = if trace {
        loop {
            eprintln!("{}", cpu.trace());
            match cpu.step() {
                Ok(State::Running) => continue,
                Ok(State::Halted) => break Ok(()),
                Err(err) => break Err(err),
            }
        }
    } else {
        cpu.run()
    };

    if let Err(err) = result {
        eprintln!("ls8: {}", err);
        process::exit(1);
    }
}

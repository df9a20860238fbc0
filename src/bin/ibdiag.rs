//! src/bin/ibdiag.rs
//! Entry point of the `ibdiag` harness binary.

#![deny(unsafe_code)]

use mimalloc::MiMalloc;

/// High-performance memory allocator for improved allocation throughput.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;

use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    cli::run_with(env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}

use clap::Parser;
use getseq::{Args, getseq};
use log::info;
use simple_logger::init_with_level;

use std::{
    io::{self, Write},
    process::ExitCode,
};

fn main() -> ExitCode {
    let args = Args::parse();

    init_with_level(args.level).unwrap_or_else(|e| panic!("{}", e));
    info!("Starting getseq with args: {}", args);

    let text = match getseq(&args) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
        // a closed pipe (e.g. `| head`) ends output silently
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("ERROR: cannot write output: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

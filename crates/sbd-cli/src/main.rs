mod cli;

use crate::cli::CliCommand;

fn main() {
    // Parse CLI, initialize logging, and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("sbd error: {:#}", err);
        std::process::exit(1);
    }
}

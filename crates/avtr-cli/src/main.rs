use avtr_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; a read-only state dir must not stop URL output.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("avtr error: {:#}", err);
        std::process::exit(1);
    }
}

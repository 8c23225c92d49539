use std::io;
use urlsplit_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; a read-only state dir must not break scripts.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    let code = cli::exit_code(Cli::run_from_args(), &mut io::stderr());
    if code != 0 {
        std::process::exit(code);
    }
}

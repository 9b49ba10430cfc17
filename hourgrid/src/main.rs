mod commands;
mod handlers;
mod output;

use clap::Parser;
use commands::Cli;
use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use handlers::handle_command;
use output::print_error;

fn init_logging(verbose: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = if verbose {
        Logger::try_with_str("debug")?
    } else {
        Logger::try_with_env_or_str("warn")?
    };
    logger.log_to_stderr().start()
}

fn main() {
    let cli = Cli::parse();
    // Dropping the handle shuts the logger down.
    let _logger = match init_logging(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(err) => {
            print_error(&format!("Failed to start logger: {err}"));
            None
        }
    };

    if let Err(err) = handle_command(cli) {
        print_error(&err.to_string());
        std::process::exit(1);
    }
}

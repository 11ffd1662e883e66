//! fsflow - Entry Point
//!
//! Routes one filesystem request through the workflow and prints the result.

use clap::Parser;
use log::info;
use std::process::ExitCode;

use fsflow::cli::{self, Cli};
use fsflow::config::FlowConfig;
use fsflow::error::FlowError;
use fsflow::error::handlers::{exit_code, handle_error};
use fsflow::utils::logging::setup_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging comes up before config errors are reported, so fall back to info
    let loaded = FlowConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|config| config.log_level.as_str())
        .unwrap_or("info");
    setup_logging(log_level);

    info!("Launching fsflow...");

    match loaded
        .map_err(FlowError::from)
        .and_then(|config| cli::execute(&cli, &config))
    {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            handle_error(&err);
            eprintln!("Error: {}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

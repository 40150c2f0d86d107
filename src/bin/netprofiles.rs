// EN: src/bin/netprofiles.rs

use clap::Parser;
use colored::*;
use netprofiles::{
    cli::{Cli, CliError, dispatcher},
    t,
};
use std::io::ErrorKind;

/// The main entry point of the `netprofiles` application.
/// It sets up logging, parses arguments, dispatches to the action handler,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("CLI args parsed: {:?}", cli);

    if let Err(e) = dispatcher::dispatch(cli.args) {
        // A dismissed or interrupted prompt exits like an interrupted shell command.
        if is_cancellation(&e) {
            eprintln!("\n{}", t!("common.info.operation_cancelled").yellow());
            std::process::exit(130);
        }

        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        if matches!(
            e.downcast_ref::<CliError>(),
            Some(CliError::MissingConfigPath | CliError::UnknownAction(_))
        ) {
            eprintln!("{}", t!("cli.usage_hint").dimmed());
        }
        std::process::exit(1);
    }
}

fn is_cancellation(e: &anyhow::Error) -> bool {
    if matches!(e.downcast_ref::<CliError>(), Some(CliError::Cancelled)) {
        return true;
    }
    match e.downcast_ref::<dialoguer::Error>() {
        Some(dialoguer::Error::IO(io_err)) => io_err.kind() == ErrorKind::Interrupted,
        _ => false,
    }
}

use anyhow::Result;
use clap::CommandFactory;

use crate::cli::Cli;

/// Prints the usage text. Reads no settings and never touches the config file.
pub fn handle(_args: Vec<String>) -> Result<()> {
    let mut command = Cli::command();
    println!("{}", command.render_help());
    Ok(())
}

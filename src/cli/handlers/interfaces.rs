use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use super::commons;
use crate::cli::AppContext;

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Lists the network services a profile can target."
)]
struct InterfacesArgs {
    /// List hardware device names (en0, en1, ...) instead of service names.
    #[arg(long)]
    hardware: bool,
}

/// Prints the services (or devices) reported by the OS. Never touches the config file.
pub fn handle(context: &AppContext, args: Vec<String>) -> Result<()> {
    let Some(interfaces_args) = commons::parse_args::<InterfacesArgs>(&args)? else {
        return Ok(());
    };

    let (header, names) = if interfaces_args.hardware {
        let devices = context
            .configurator
            .list_hardware_ports()
            .context(t!("interfaces.error.list_failed"))?;
        (t!("interfaces.header.hardware"), devices)
    } else {
        let services = context
            .configurator
            .list_interfaces()
            .context(t!("interfaces.error.list_failed"))?;
        (t!("interfaces.header.services"), services)
    };

    println!("\n--- {} ---", header);
    if names.is_empty() {
        println!("  {}", t!("interfaces.info.none_found").yellow());
        return Ok(());
    }
    for name in names {
        println!("  - {}", name.cyan());
    }
    Ok(())
}

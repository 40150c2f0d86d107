use anyhow::{Result, anyhow};
use clap::Parser;
use colored::*;
use dialoguer::{Input, theme::ColorfulTheme};

use super::commons;
use crate::{cli::AppContext, core::profile_store};

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Deletes the first profile with the given name."
)]
struct DeleteArgs {
    /// The name of the profile to delete. If not provided, will be asked interactively.
    name: Option<String>,
}

/// The main handler for the `delete` command.
pub fn handle(context: &AppContext, args: Vec<String>) -> Result<()> {
    // 1. Parse arguments and load the config.
    let Some(delete_args) = commons::parse_args::<DeleteArgs>(&args)? else {
        return Ok(());
    };
    let mut state = commons::open_or_create(&context.config_path)?;

    // 2. Resolve the target name.
    let name = match delete_args.name {
        Some(name) => name,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("delete.prompt.name"))
            .interact_text()?,
    };
    let name = name.trim().to_string();

    // 3. Remove in memory, then persist.
    let (updated, removed) = profile_store::remove_by_name(&state, &name);
    if !removed {
        return Err(anyhow!(t!("delete.error.not_found"), name = name));
    }
    *state = updated;

    log::info!("Deleting profile '{}' from '{}'", name, state.path().display());
    state.commit()?;

    println!(
        "\n{} {}",
        t!("common.success").green().bold(),
        format!(t!("delete.success"), name = name)
    );
    if state.find(&name).is_some() {
        println!(
            "  - {}",
            format!(t!("delete.warning.duplicate_remains"), name = name).yellow()
        );
    }

    Ok(())
}

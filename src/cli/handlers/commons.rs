// src/cli/handlers/commons.rs

// Shared functions used by multiple handlers.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, error::ErrorKind};
use colored::Colorize;
use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use std::path::Path;

use crate::{
    cli::CliError,
    core::{applier::ApplyReport, profile_store::{self, StoreError}},
    models::{Config, NetworkProfile},
    state::ProfileState,
    system::executor::ExecutionError,
};

/// Parses the arguments of an action.
///
/// Returns `None` when `--help` was requested and already printed.
pub fn parse_args<T: Parser>(args: &[String]) -> Result<Option<T>> {
    match T::try_parse_from(args) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Loads the config, creating an empty one first if the file does not exist.
pub fn open_or_create(path: &Path) -> Result<ProfileState> {
    match ProfileState::load(path) {
        Err(StoreError::NotFound { .. }) => create_and_load(path),
        Err(e @ StoreError::Parse { .. }) => Err(malformed(e)),
        other => Ok(other?),
    }
}

/// Like [`open_or_create`], but a malformed file may be replaced by an empty
/// one after the user confirms, since that discards everything in it.
pub fn open_for_update(path: &Path, interactive: bool) -> Result<ProfileState> {
    match ProfileState::load(path) {
        Err(StoreError::NotFound { .. }) => create_and_load(path),
        Err(e @ StoreError::Parse { .. }) => {
            println!("{}", e.to_string().red());
            let recreate = interactive
                && Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(t!("store.prompt.recreate"))
                    .default(false)
                    .interact()?;
            if !recreate {
                return Err(malformed(e));
            }
            log::warn!("Recreating malformed config file '{}'", path.display());
            create_and_load(path)
        }
        other => Ok(other?),
    }
}

fn create_and_load(path: &Path) -> Result<ProfileState> {
    println!(
        "{}",
        format!(t!("store.info.creating_empty"), path = path.display()).yellow()
    );
    profile_store::create_empty(path)
        .with_context(|| format!(t!("store.error.create_failed"), path = path.display()))?;
    Ok(ProfileState::load(path)?)
}

fn malformed(e: StoreError) -> anyhow::Error {
    anyhow!(e).context(t!("store.error.malformed_hint"))
}

/// Asks the user to pick a profile. Returns `None` if the prompt was dismissed.
pub fn choose_profile(config: &Config) -> Result<Option<&NetworkProfile>> {
    let items: Vec<String> = config
        .profiles
        .iter()
        .map(|p| format!("{} ({}, {})", p.profile_name, p.mode, p.interface_name))
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("apply.prompt.select_profile"))
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.and_then(|index| config.profiles.get(index)))
}

/// Fails with a uniform message when a value is missing and prompting is disabled.
pub fn require_interactive(interactive: bool, field: &str) -> Result<()> {
    if interactive {
        Ok(())
    } else {
        Err(anyhow!(t!("create.error.missing_value"), field = field))
    }
}

/// Prints one line per executed command, with the error details of failures.
pub fn print_apply_report(report: &ApplyReport) {
    for result in &report.results {
        match &result.outcome {
            Ok(_) => println!("  {} {}", "✔".green(), result.command),
            Err(e) => {
                println!("  {} {}", "✘".red(), result.command);
                println!("    {}", e.to_string().red());
                if let ExecutionError::NonZeroExitStatus { stderr, .. } = e {
                    if !stderr.trim().is_empty() {
                        println!("    {}", stderr.trim().dimmed());
                    }
                }
            }
        }
    }
}

/// Prints the outcome of an apply and turns command failures into an error.
pub fn finish_apply(report: &ApplyReport) -> Result<()> {
    print_apply_report(report);

    let total = report.results.len();
    let failed = report.failures().count();
    if failed == 0 {
        println!(
            "\n{} {}",
            t!("common.success").green().bold(),
            format!(t!("apply.success"), name = report.profile.profile_name)
        );
        return Ok(());
    }
    Err(anyhow!(
        t!("apply.error.commands_failed"),
        name = report.profile.profile_name,
        failed = failed,
        total = total
    ))
}

/// Maps a dismissed prompt to the cancellation error.
pub fn cancelled<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| CliError::Cancelled.into())
}

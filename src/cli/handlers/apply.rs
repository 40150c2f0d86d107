use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use super::commons;
use crate::{cli::AppContext, core::applier};

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Applies a profile. Without a name, asks which one to apply."
)]
struct ApplyArgs {
    /// The profile to apply. If omitted, it is chosen interactively.
    name: Option<String>,
}

/// The main handler for `apply`, and for a bare `<config-path>`.
pub fn handle(context: &AppContext, args: Vec<String>) -> Result<()> {
    let Some(apply_args) = commons::parse_args::<ApplyArgs>(&args)? else {
        return Ok(());
    };
    let policy = context.settings.execution_policy();

    // A named profile is re-resolved against the file, never a cached copy.
    if let Some(name) = apply_args.name {
        println!("{}", format!(t!("apply.info.applying"), name = name).dimmed());
        let report = applier::apply_by_name(
            &context.config_path,
            &name,
            context.configurator.as_ref(),
            policy,
        )?;
        return commons::finish_apply(&report);
    }

    let state = commons::open_or_create(&context.config_path)?;
    if state.profiles.is_empty() {
        println!("{}", t!("common.info.no_profiles").yellow());
        return Ok(());
    }

    let Some(profile) = commons::choose_profile(&state)? else {
        println!("\n{}", t!("apply.info.selection_cancelled"));
        return Ok(());
    };

    println!(
        "{}",
        format!(t!("apply.info.applying"), name = profile.profile_name).dimmed()
    );
    let report = applier::apply_profile(profile, context.configurator.as_ref(), policy)?;
    commons::finish_apply(&report)
}

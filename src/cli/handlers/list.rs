use anyhow::Result;
use clap::Parser;
use colored::*;

use super::commons;
use crate::{cli::AppContext, models::NetworkProfile};

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, about = "Lists the stored profiles in file order.")]
struct ListArgs {}

/// Prints every stored profile, creating an empty config if there is none.
pub fn handle(context: &AppContext, args: Vec<String>) -> Result<()> {
    let Some(_list_args) = commons::parse_args::<ListArgs>(&args)? else {
        return Ok(());
    };
    let state = commons::open_or_create(&context.config_path)?;

    println!(
        "\n--- {} '{}' ---",
        t!("list.header"),
        context.config_path.display().to_string().yellow()
    );
    if state.profiles.is_empty() {
        println!("  {}", t!("common.info.no_profiles").dimmed());
        return Ok(());
    }

    for (index, profile) in state.profiles.iter().enumerate() {
        print_profile(index + 1, profile);
    }
    Ok(())
}

fn print_profile(position: usize, profile: &NetworkProfile) {
    println!(
        "\n  {}. {} {}",
        position,
        profile.profile_name.cyan().bold(),
        format!("({})", profile.mode).dimmed()
    );
    println!(
        "     {:<12} {}",
        t!("list.label.interface").blue(),
        profile.interface_name
    );

    let addresses = [
        (t!("list.label.ipv4"), &profile.ipv4_address),
        (t!("list.label.subnet_mask"), &profile.subnet_mask),
        (t!("list.label.router"), &profile.router),
    ];
    for (label, value) in addresses {
        if let Some(value) = value {
            println!("     {:<12} {}", label.blue(), value);
        }
    }

    let dns = if profile.dns_servers.is_empty() {
        t!("list.label.dns_none").dimmed().to_string()
    } else {
        profile.dns_servers.join(", ")
    };
    println!("     {:<12} {}", t!("list.label.dns").blue(), dns);
}

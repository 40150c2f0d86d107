// EN: src/cli/handlers/create.rs

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use super::commons::{self, require_interactive};
use crate::{
    cli::AppContext,
    core::{profile_store, validator},
    models::{ProfileDraft, ProfileMode},
};

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Creates a network profile. Missing values are asked interactively."
)]
struct CreateArgs {
    /// The name of the new profile.
    name: Option<String>,

    /// `manual` for a static address, `dhcp` otherwise.
    #[arg(long)]
    mode: Option<String>,

    /// The network service to configure (see `list-interfaces`).
    #[arg(long, short)]
    interface: Option<String>,

    /// Static IPv4 address (manual mode).
    #[arg(long)]
    ipv4: Option<String>,

    /// Router / gateway address (manual mode).
    #[arg(long)]
    router: Option<String>,

    /// Subnet mask, e.g. 255.255.255.0 (manual mode).
    #[arg(long)]
    subnet_mask: Option<String>,

    /// DNS servers, comma separated.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    dns: Option<Vec<String>>,

    /// Do not ask for user input; fail if a required value is missing.
    #[arg(long)]
    no_input: bool,
}

/// The main handler for the `create` command.
pub fn handle(context: &AppContext, args: Vec<String>) -> Result<()> {
    // 1. Parse arguments and load the config.
    let Some(create_args) = commons::parse_args::<CreateArgs>(&args)? else {
        return Ok(());
    };
    let interactive = !create_args.no_input;
    let mut state = commons::open_for_update(&context.config_path, interactive)?;

    // 2. The service list decides which interfaces are acceptable.
    let interfaces = context
        .configurator
        .list_interfaces()
        .context(t!("create.error.list_interfaces"))?;
    if interfaces.is_empty() {
        return Err(anyhow!(t!("create.error.no_interfaces")));
    }

    // 3. Collect the raw fields from flags or prompts.
    let profile_name = resolve_name(&create_args, interactive)?;
    if state.find(profile_name.trim()).is_some() {
        println!(
            "{}",
            format!(t!("create.warning.duplicate_name"), name = profile_name.trim()).yellow()
        );
    }
    let mode = resolve_mode(&create_args, interactive)?;
    let interface_name = resolve_interface(&create_args, &interfaces, interactive)?;

    let (ipv4_address, router, subnet_mask) =
        if validator::parse_mode(&mode) == Ok(ProfileMode::Manual) {
            (
                Some(resolve_address(create_args.ipv4.clone(), "ipv4Address", t!("create.prompt.ipv4"), interactive)?),
                Some(resolve_address(create_args.router.clone(), "router", t!("create.prompt.router"), interactive)?),
                Some(resolve_address(create_args.subnet_mask.clone(), "subnetMask", t!("create.prompt.subnet_mask"), interactive)?),
            )
        } else {
            (None, None, None)
        };
    let dns_servers = resolve_dns(&create_args, interactive)?;

    // 4. Validate everything together; this is the authoritative check.
    let draft = ProfileDraft {
        profile_name,
        mode,
        interface_name,
        ipv4_address,
        router,
        subnet_mask,
        dns_servers,
    };
    let profile = validator::validate(&draft, &interfaces)?;

    // 5. Append and save.
    log::info!(
        "Creating profile '{}' ({}) in '{}'",
        profile.profile_name,
        profile.mode,
        state.path().display()
    );
    let name = profile.profile_name.clone();
    *state = profile_store::append(&state, profile);
    state.commit()?;

    println!(
        "\n{} {}",
        t!("common.success").green().bold(),
        format!(t!("create.success"), name = name)
    );
    println!(
        "  {}",
        format!(t!("create.info.saved_to"), path = context.config_path.display()).dimmed()
    );
    Ok(())
}

// --- Helper Functions ---

fn resolve_name(args: &CreateArgs, interactive: bool) -> Result<String> {
    if let Some(name) = &args.name {
        return Ok(name.clone());
    }
    require_interactive(interactive, "name")?;
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("create.prompt.name"))
        .validate_with(|input: &String| -> Result<(), String> {
            validator::check_name(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?)
}

fn resolve_mode(args: &CreateArgs, interactive: bool) -> Result<String> {
    if let Some(mode) = &args.mode {
        return Ok(mode.clone());
    }
    require_interactive(interactive, "mode")?;
    let modes = [ProfileMode::Dhcp, ProfileMode::Manual];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("create.prompt.mode"))
        .items(modes.iter().map(|m| m.as_str()))
        .default(0)
        .interact_opt()?;
    let index = commons::cancelled(selection)?;
    modes
        .get(index)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| anyhow!("Invalid mode selection: {}", index))
}

fn resolve_interface(
    args: &CreateArgs,
    interfaces: &[String],
    interactive: bool,
) -> Result<String> {
    if let Some(interface) = &args.interface {
        return Ok(interface.clone());
    }
    require_interactive(interactive, "interface")?;
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("create.prompt.interface"))
        .items(interfaces)
        .default(0)
        .interact_opt()?;
    let index = commons::cancelled(selection)?;
    interfaces
        .get(index)
        .cloned()
        .ok_or_else(|| anyhow!("Invalid interface selection: {}", index))
}

/// Takes the flag value as is (the validator reports problems), or prompts
/// until a well-formed address is typed.
fn resolve_address(
    flag: Option<String>,
    field: &'static str,
    prompt: &str,
    interactive: bool,
) -> Result<String> {
    if let Some(value) = flag {
        return Ok(value);
    }
    require_interactive(interactive, field)?;
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), String> {
            validator::check_ipv4(field, input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?)
}

fn resolve_dns(args: &CreateArgs, interactive: bool) -> Result<Vec<String>> {
    if let Some(servers) = &args.dns {
        return Ok(servers.clone());
    }
    if !interactive {
        return Ok(Vec::new());
    }
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("create.prompt.dns"))
        .allow_empty(true)
        .interact_text()?;
    Ok(validator::split_dns_input(&input))
}

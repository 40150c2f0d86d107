//! Command-line front end: argument parsing, context and action handlers.

use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::{
    core::paths,
    models::Settings,
    system::{
        networksetup::{NetworkConfigurator, Networksetup},
        settings,
    },
};

/// Routes the command line to an action handler.
pub mod dispatcher;
/// One handler per action.
pub mod handlers;

/// Errors raised by the argument dispatcher itself, before any handler runs.
#[derive(Error, Debug)]
pub enum CliError {
    /// The first positional argument is missing.
    #[error("No config file path given.")]
    MissingConfigPath,
    /// The action is not in the registry.
    #[error("Unknown action: '{0}'")]
    UnknownAction(String),
    /// A prompt was dismissed or interrupted.
    #[error("Operation cancelled by user.")]
    Cancelled,
}

/// Everything a handler needs: where the profiles live, the tool settings,
/// and the OS capability used to list services and run commands.
pub struct AppContext {
    /// The config path with `~` and variables expanded.
    pub config_path: PathBuf,
    /// Loaded `settings.toml`, or the defaults.
    pub settings: Settings,
    /// Lists services and runs configuration commands.
    pub configurator: Box<dyn NetworkConfigurator>,
}

impl AppContext {
    /// Builds the context for a config path typed on the command line.
    pub fn from_cli_path(raw_path: &str) -> anyhow::Result<Self> {
        let config_path = paths::expand_config_path(raw_path)?;
        let settings = settings::load_settings()?;
        let configurator = Box::new(Networksetup::new(settings.networksetup_path.clone()));
        Ok(Self {
            config_path,
            settings,
            configurator,
        })
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("config_path", &self.config_path)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Builds the color-aware help string at runtime.
fn build_help_string() -> String {
    // A mini-renderer for the semantic help template: tags like `<title>`
    // become ANSI styles, or nothing when colors are disabled.
    let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();

    let template = t!("cli.help.template");

    let title = if use_colors { "\x1b[1;33m" } else { "" }; // Bold Yellow
    let hl = if use_colors { "\x1b[1;36m" } else { "" }; // Bold Cyan (for highlights)
    let cmd = if use_colors { "\x1b[36m" } else { "" }; // Cyan (for commands)
    let group = if use_colors { "\x1b[1;32m" } else { "" }; // Bold Green
    let dim = if use_colors { "\x1b[2m" } else { "" }; // Dim
    let reset = if use_colors { "\x1b[0m" } else { "" };

    template
        .replace("<title>", title)
        .replace("</title>", reset)
        .replace("<hl>", hl)
        .replace("</hl>", reset)
        .replace("<cmd>", cmd)
        .replace("</cmd>", reset)
        .replace("<group>", group)
        .replace("</group>", reset)
        .replace("<dim>", dim)
        .replace("</dim>", reset)
}

/// netprofiles: named network profiles applied through networksetup.
#[derive(Parser, Debug)]
#[command(
    name = "netprofiles",
    author,
    version,
    about,
    help_template = build_help_string(),
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
// `help` is one of our actions, not clap's subcommand.
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// `<config-path> [action] [args...]`, routed by the dispatcher.
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

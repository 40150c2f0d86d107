use anyhow::Result;

use crate::cli::{AppContext, CliError, handlers};

// --- Command Definition and Registry ---

/// How an action is invoked.
#[derive(Clone, Copy)]
enum Handler {
    /// Needs the expanded config path, the settings and the configurator.
    WithContext(fn(&AppContext, Vec<String>) -> Result<()>),
    /// Runs before any context is built, so it cannot fail on bad settings.
    Standalone(fn(Vec<String>) -> Result<()>),
}

/// Defines an action, its aliases, and its handler.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: Handler,
}

/// The single source of truth for all actions.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "apply",
        aliases: &[],
        handler: Handler::WithContext(handlers::apply::handle),
    },
    CommandDefinition {
        name: "create",
        aliases: &["new"],
        handler: Handler::WithContext(handlers::create::handle),
    },
    CommandDefinition {
        name: "delete",
        aliases: &["del", "rm"],
        handler: Handler::WithContext(handlers::delete::handle),
    },
    CommandDefinition {
        name: "help",
        aliases: &[],
        handler: Handler::Standalone(handlers::help::handle),
    },
    CommandDefinition {
        name: "list",
        aliases: &["ls"],
        handler: Handler::WithContext(handlers::list::handle),
    },
    CommandDefinition {
        name: "list-interfaces",
        aliases: &["interfaces"],
        handler: Handler::WithContext(handlers::interfaces::handle),
    },
];

/// The action used when only a config path is given: select and apply.
const DEFAULT_ACTION: &str = "apply";

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Routes `<config-path> [action] [args...]` to the matching handler.
pub fn dispatch(all_args: Vec<String>) -> Result<()> {
    log::debug!("Dispatching args: {:?}", all_args);

    let mut args = all_args.into_iter();
    let raw_path = args.next().ok_or(CliError::MissingConfigPath)?;
    let action = args.next();
    let handler_args: Vec<String> = args.collect();

    let command = match action.as_deref() {
        None => find_command(DEFAULT_ACTION),
        Some(name) => find_command(name),
    }
    .ok_or_else(|| CliError::UnknownAction(action.clone().unwrap_or_default()))?;

    match command.handler {
        Handler::Standalone(handler) => {
            log::debug!("Running '{}' without context", command.name);
            handler(handler_args)
        }
        Handler::WithContext(handler) => {
            let context = AppContext::from_cli_path(&raw_path)?;
            log::debug!("Running '{}' with {:?}", command.name, context);
            handler(&context, handler_args)
        }
    }
}

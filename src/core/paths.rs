// src/core/paths.rs

//! Config directory lookup and path expansion.

use crate::constants::{CONFIG_DIR_NAME, SETTINGS_FILENAME};
use std::path::PathBuf;
use thiserror::Error;

/// Errors resolving the tool's own paths.
#[derive(Error, Debug)]
pub enum PathError {
    /// The platform has no config directory for this user.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// `~` or a `$VAR` in the path could not be expanded.
    #[error("Failed to expand path '{template}': {message}")]
    Expansion {
        /// The path as typed.
        template: String,
        /// Why expansion failed.
        message: String,
    },
}

/// Returns the tool's configuration directory (e.g. `~/.config/netprofiles`).
///
/// The directory is not created; nothing is written there implicitly.
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or(PathError::ConfigDirNotFound)
}

/// Returns the path to the tool's `settings.toml`.
pub fn get_settings_path() -> Result<PathBuf, PathError> {
    get_config_dir().map(|dir| dir.join(SETTINGS_FILENAME))
}

/// Expands `~` and environment variables in a config path given on the command line.
pub fn expand_config_path(template: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        template: template.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

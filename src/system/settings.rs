// src/system/settings.rs

//! The optional `settings.toml` for the tool itself.

use std::{env, fs, path::PathBuf};
use thiserror::Error;

use crate::{
    constants::SETTINGS_PATH_ENV,
    core::paths::{self, PathError},
    models::Settings,
    system::executor::ExecutionPolicy,
};

/// Errors loading `settings.toml`.
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum SettingsError {
    #[error("Filesystem Error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse '{path}': {source}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Path(#[from] PathError),
}

impl Settings {
    /// The executor policy these settings ask for.
    pub fn execution_policy(&self) -> ExecutionPolicy {
        if self.stop_on_failure {
            ExecutionPolicy::StopOnFailure
        } else {
            ExecutionPolicy::ContinueOnFailure
        }
    }
}

/// Where the settings file is read from: `$NETPROFILES_SETTINGS`, or
/// `settings.toml` in the tool's config directory.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
    match env::var_os(SETTINGS_PATH_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(paths::get_settings_path()?),
    }
}

/// Loads the settings file. A missing file yields the defaults and is not created.
pub fn load_settings() -> Result<Settings, SettingsError> {
    let path = settings_path()?;
    if !path.exists() {
        log::debug!(
            "No settings file at '{}', using defaults.",
            path.display()
        );
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(&path).map_err(|e| SettingsError::Io {
        path: path.clone(),
        source: e,
    })?;
    let settings: Settings =
        toml::from_str(&content).map_err(|e| SettingsError::TomlParse { path, source: e })?;
    log::debug!("Loaded settings: {:?}", settings);
    Ok(settings)
}

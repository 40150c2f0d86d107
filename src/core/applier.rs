//! # Apply pipeline
//!
//! Ties the four parts together: the OS reports its network services, the
//! profile is validated against them, translated into commands, and the
//! commands are executed. Front ends (the CLI here, or any view) only call
//! [`snapshot`], [`apply_profile`] and [`apply_by_name`].

use crate::{
    core::{
        profile_store::{self, StoreError},
        translator,
        validator::{self, ValidationError},
    },
    models::{Config, NetworkProfile},
    system::{
        executor::{self, ExecutionError, ExecutionPolicy, ExecutionResult},
        networksetup::NetworkConfigurator,
    },
};
use std::path::Path;
use thiserror::Error;

/// Reasons an apply stops before any command is issued.
#[derive(Error, Debug)]
pub enum ApplyError {
    /// The config file could not be loaded.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The stored profile no longer passes validation.
    #[error("Profile '{name}' is not valid: {source}")]
    Validation {
        /// Name of the rejected profile.
        name: String,
        /// What the validator rejected.
        #[source]
        source: ValidationError,
    },
    /// The OS could not report its network services.
    #[error("Could not list network services: {0}")]
    ListInterfaces(#[source] ExecutionError),
    /// No profile has the requested name.
    #[error("No profile named '{0}'.")]
    ProfileNotFound(String),
}

/// Everything that happened while applying one profile.
#[derive(Debug)]
pub struct ApplyReport {
    /// The profile as validated just before translation.
    pub profile: NetworkProfile,
    /// One entry per issued command, in order.
    pub results: Vec<ExecutionResult>,
}

impl ApplyReport {
    /// True when every issued command succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(ExecutionResult::succeeded)
    }

    /// The results of the commands that failed.
    pub fn failures(&self) -> impl Iterator<Item = &ExecutionResult> {
        self.results.iter().filter(|r| !r.succeeded())
    }
}

/// An immutable copy of the profiles currently on disk.
pub fn snapshot(path: &Path) -> Result<Config, StoreError> {
    profile_store::load(path)
}

/// Re-validates `profile` against the live service list, then translates and executes it.
///
/// Command failures do not make this an error; they are in the report.
pub fn apply_profile(
    profile: &NetworkProfile,
    configurator: &dyn NetworkConfigurator,
    policy: ExecutionPolicy,
) -> Result<ApplyReport, ApplyError> {
    let interfaces = configurator
        .list_interfaces()
        .map_err(ApplyError::ListInterfaces)?;
    let validated =
        validator::revalidate(profile, &interfaces).map_err(|e| ApplyError::Validation {
            name: profile.profile_name.clone(),
            source: e,
        })?;

    let commands = translator::translate(&validated);
    log::info!(
        "Applying profile '{}' ({} command(s))",
        validated.profile_name,
        commands.len()
    );
    let results = executor::execute(&commands, configurator, policy);

    Ok(ApplyReport {
        profile: validated,
        results,
    })
}

/// Loads the config afresh and applies the first profile named `name`.
pub fn apply_by_name(
    path: &Path,
    name: &str,
    configurator: &dyn NetworkConfigurator,
    policy: ExecutionPolicy,
) -> Result<ApplyReport, ApplyError> {
    // Stored names are trimmed by the validator.
    let name = name.trim();
    let config = profile_store::load(path)?;
    let profile = config
        .find(name)
        .ok_or_else(|| ApplyError::ProfileNotFound(name.to_string()))?;
    apply_profile(profile, configurator, policy)
}

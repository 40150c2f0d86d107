// src/state.rs

use crate::core::profile_store::{self, StoreError};
use crate::models::Config;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

/// Represents the state of the loaded config.
/// It holds the current state and, once a mutation was requested, a snapshot
/// of the original.
#[derive(Debug)]
enum ConfigState {
    /// No mutable access has been requested yet.
    Pristine(Config),
    /// Mutable access was handed out at least once.
    Dirty { original: Config, current: Config },
}

/// The config owned by one CLI invocation, together with the file it came from.
///
/// Reads go through `Deref`. The first `DerefMut` records the original so
/// that [`ProfileState::commit`] only writes when something actually changed.
#[derive(Debug)]
pub struct ProfileState {
    path: PathBuf,
    state: ConfigState,
}

impl ProfileState {
    /// Wraps an already loaded config.
    pub fn new(path: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            path: path.into(),
            state: ConfigState::Pristine(config),
        }
    }

    /// Loads `path` through the profile store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        Ok(Self::new(path, profile_store::load(path)?))
    }

    /// The file `commit` writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks if the config differs from what was loaded.
    pub fn needs_saving(&self) -> bool {
        match &self.state {
            ConfigState::Pristine(_) => false,
            ConfigState::Dirty { original, current } => original != current,
        }
    }

    /// Saves the config if it changed. Returns whether the file was written.
    ///
    /// On failure the file is left untouched and the in-memory state stays dirty.
    pub fn commit(&mut self) -> Result<bool, StoreError> {
        if !self.needs_saving() {
            log::debug!("No changes to save for '{}'", self.path.display());
            return Ok(false);
        }
        profile_store::save(&**self, &self.path)?;

        let saved = std::mem::take(&mut **self);
        self.state = ConfigState::Pristine(saved);
        Ok(true)
    }
}

impl Deref for ProfileState {
    type Target = Config;

    fn deref(&self) -> &Config {
        match &self.state {
            ConfigState::Pristine(config) => config,
            ConfigState::Dirty { current, .. } => current,
        }
    }
}

impl DerefMut for ProfileState {
    fn deref_mut(&mut self) -> &mut Config {
        // First mutable access: the single clone of the original happens here.
        if matches!(self.state, ConfigState::Pristine(_)) {
            self.state = match std::mem::replace(
                &mut self.state,
                ConfigState::Pristine(Config::default()),
            ) {
                ConfigState::Pristine(config) => ConfigState::Dirty {
                    original: config.clone(),
                    current: config,
                },
                dirty => dirty,
            };
        }

        match &mut self.state {
            ConfigState::Dirty { current, .. } => current,
            ConfigState::Pristine(config) => config,
        }
    }
}

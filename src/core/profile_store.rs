//! # Profile Store
//!
//! Reads and writes the JSON config file, and provides the pure list
//! operations (`append`, `remove_by_name`) callers use before saving.

use crate::models::{Config, NetworkProfile};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Represents errors that can occur while reading or writing a config file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The config file does not exist. Recoverable with [`create_empty`].
    #[error("Config file not found: '{path}'")]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },
    /// The file exists but is not valid JSON or does not match the config schema.
    #[error("Config file '{path}' is malformed: {source}")]
    Parse {
        /// The offending file.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// A filesystem I/O error occurred.
    #[error("Filesystem error on '{path}': {source}")]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The temporary file could not be moved over the target.
    #[error("Could not replace '{path}': {source}")]
    Persist {
        /// The file that should have been replaced.
        path: PathBuf,
        /// The underlying persist error.
        #[source]
        source: tempfile::PersistError,
    },
}

type StoreResult<T> = Result<T, StoreError>;

/// Loads a config file. Profiles keep the order they have in the file.
pub fn load(path: &Path) -> StoreResult<Config> {
    log::debug!("Loading profiles from '{}'", path.display());
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let config: Config = serde_json::from_slice(&bytes).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::debug!("Loaded {} profile(s)", config.profiles.len());
    Ok(config)
}

/// Writes `config` as pretty-printed JSON.
///
/// The content goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers see either the old file or the new one.
pub fn save(config: &Config, path: &Path) -> StoreResult<()> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut json = serde_json::to_vec_pretty(config).map_err(|e| io_err(e.into()))?;
    json.push(b'\n');

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(io_err)?;

    let mut temp = NamedTempFile::new_in(&parent).map_err(io_err)?;
    // The temp file is created 0600; an existing file keeps its own mode.
    match fs::metadata(path) {
        Ok(existing) => temp
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(io_err)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(io_err(e)),
    }
    temp.write_all(&json).map_err(io_err)?;
    temp.as_file().sync_all().map_err(io_err)?;
    temp.persist(path).map_err(|e| StoreError::Persist {
        path: path.to_path_buf(),
        source: e,
    })?;

    log::debug!(
        "Saved {} profile(s) to '{}'",
        config.profiles.len(),
        path.display()
    );
    Ok(())
}

/// Writes a config with no profiles to `path`.
pub fn create_empty(path: &Path) -> StoreResult<()> {
    log::info!("Creating empty config file at '{}'", path.display());
    save(&Config::default(), path)
}

/// Returns a new config with `profile` added at the end. Does not persist.
pub fn append(config: &Config, profile: NetworkProfile) -> Config {
    let mut profiles = config.profiles.clone();
    profiles.push(profile);
    Config { profiles }
}

/// Returns a config without the first profile named `name`, and whether one was removed.
///
/// Later profiles with the same name are left in place.
pub fn remove_by_name(config: &Config, name: &str) -> (Config, bool) {
    let mut profiles = config.profiles.clone();
    match profiles.iter().position(|p| p.profile_name == name) {
        Some(index) => {
            profiles.remove(index);
            (Config { profiles }, true)
        }
        None => (Config { profiles }, false),
    }
}

//! Named network profiles stored in a JSON file and applied through the
//! operating system's network configuration tool.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
/// Fixed names and defaults.
pub mod constants;
pub mod core;
pub mod models;
/// Change tracking for a loaded config.
pub mod state;
pub mod system;

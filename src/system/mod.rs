//! # System Interaction Layer
//!
//! Boundary between the profile logic and the operating system.
//!
//! ## Modules
//!
//! - **`executor`**: runs configuration commands one at a time, capturing exit
//!   status and output, and reports one result per command.
//! - **`networksetup`**: the `NetworkConfigurator` capability and its
//!   implementation on top of the macOS `networksetup` tool.
//! - **`settings`**: loads the optional `settings.toml` for the tool itself.

pub mod executor;
pub mod networksetup;
pub mod settings;

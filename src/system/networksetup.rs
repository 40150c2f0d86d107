// src/system/networksetup.rs

//! The OS capability behind every apply.

use crate::models::CommandOutput;
use crate::system::executor::{self, ExecutionError};
use std::path::{Path, PathBuf};

/// The operating system capability the core depends on: enumerate network
/// services and run one configuration command.
///
/// `argv` never includes the program name; the implementation decides which
/// binary receives it.
pub trait NetworkConfigurator {
    /// Network services that can be configured, in the order the OS reports them.
    fn list_interfaces(&self) -> Result<Vec<String>, ExecutionError>;

    /// Hardware device names (`en0`, `en1`, ...).
    fn list_hardware_ports(&self) -> Result<Vec<String>, ExecutionError>;

    /// Runs one configuration command and waits for it to finish.
    fn run_config_command(&self, argv: &[String]) -> Result<CommandOutput, ExecutionError>;
}

/// [`NetworkConfigurator`] backed by the macOS `networksetup` tool.
#[derive(Debug, Clone)]
pub struct Networksetup {
    program: PathBuf,
}

impl Networksetup {
    /// Uses the binary at `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The binary commands are sent to.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl NetworkConfigurator for Networksetup {
    fn list_interfaces(&self) -> Result<Vec<String>, ExecutionError> {
        let output = executor::run_captured(
            &self.program,
            &["-listallnetworkservices".to_string()],
        )?;
        log::trace!("-listallnetworkservices output:\n{}", output.stdout);
        Ok(parse_network_services(&output.stdout))
    }

    fn list_hardware_ports(&self) -> Result<Vec<String>, ExecutionError> {
        let output =
            executor::run_captured(&self.program, &["-listallhardwareports".to_string()])?;
        log::trace!("-listallhardwareports output:\n{}", output.stdout);
        Ok(parse_hardware_ports(&output.stdout))
    }

    fn run_config_command(&self, argv: &[String]) -> Result<CommandOutput, ExecutionError> {
        executor::run_captured(&self.program, argv)
    }
}

/// Extracts service names from `networksetup -listallnetworkservices`.
///
/// The first line is a legend ("An asterisk (*) denotes that a network
/// service is disabled."); disabled services are prefixed with `*`. Both are
/// skipped, as are blank lines.
pub fn parse_network_services(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains('*'))
        .map(str::to_string)
        .collect()
}

/// Extracts device names from `networksetup -listallhardwareports`.
pub fn parse_hardware_ports(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.trim().strip_prefix("Device:"))
        .map(str::trim)
        .filter(|device| !device.is_empty())
        .map(str::to_string)
        .collect()
}

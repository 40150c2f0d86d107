// src/models.rs

//! Data shared across the store, validator, translator and executor.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::constants::{DEFAULT_NETWORKSETUP_PATH, DNS_CLEAR_SENTINEL};

// --- `profiles.json` MODELS ---

/// Whether a profile configures a static address or asks DHCP for one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProfileMode {
    /// Static IPv4 address, subnet mask and router.
    Manual,
    /// Address assigned by the network's DHCP server.
    Dhcp,
}

impl ProfileMode {
    /// The lowercase name used in the JSON file and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Dhcp => "dhcp",
        }
    }
}

impl fmt::Display for ProfileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named network configuration, as stored in the config file.
///
/// Field order here is the field order on disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworkProfile {
    /// Display name, also the key for `apply` and `delete`.
    pub profile_name: String,
    /// Static address; only set for manual profiles.
    #[serde(default)]
    pub ipv4_address: Option<String>,
    /// Gateway address; only set for manual profiles.
    #[serde(default)]
    pub router: Option<String>,
    /// Subnet mask in dotted-quad form; only set for manual profiles.
    #[serde(default)]
    pub subnet_mask: Option<String>,
    /// Older files omit this field or write `null`; both read as an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dns_servers: Vec<String>,
    /// The network service the profile configures, e.g. `Wi-Fi`.
    pub interface_name: String,
    /// Static or DHCP.
    pub mode: ProfileMode,
}

/// The persisted root object of a config file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Profiles in file order.
    pub profiles: Vec<NetworkProfile>,
}

impl Config {
    /// Finds the first profile with the given name.
    pub fn find(&self, name: &str) -> Option<&NetworkProfile> {
        self.profiles.iter().find(|p| p.profile_name == name)
    }

    /// Profile names in file order.
    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles
            .iter()
            .map(|p| p.profile_name.as_str())
            .collect()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Raw, unvalidated profile fields as typed by a user or given as flags.
///
/// The validator is the only way to turn a draft into a `NetworkProfile`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ProfileDraft {
    pub profile_name: String,
    /// Not yet parsed; `manual` or `dhcp` in any case.
    pub mode: String,
    pub interface_name: String,
    pub ipv4_address: Option<String>,
    pub router: Option<String>,
    pub subnet_mask: Option<String>,
    pub dns_servers: Vec<String>,
}

impl From<&NetworkProfile> for ProfileDraft {
    fn from(profile: &NetworkProfile) -> Self {
        Self {
            profile_name: profile.profile_name.clone(),
            mode: profile.mode.as_str().to_string(),
            interface_name: profile.interface_name.clone(),
            ipv4_address: profile.ipv4_address.clone(),
            router: profile.router.clone(),
            subnet_mask: profile.subnet_mask.clone(),
            dns_servers: profile.dns_servers.clone(),
        }
    }
}

// --- COMMAND MODELS ---

/// A single invocation of the network configuration tool.
///
/// Each variant renders to an argument vector; nothing is ever passed
/// through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `-setmanual <service> <address> <subnet mask> <router>`
    SetManual {
        /// Network service name.
        service: String,
        /// Static IPv4 address.
        address: String,
        /// Subnet mask.
        subnet_mask: String,
        /// Gateway address.
        router: String,
    },
    /// `-setdhcp <service>`
    SetDhcp {
        /// Network service name.
        service: String,
    },
    /// `-setdnsservers <service> <server>...`, or the clear sentinel when `servers` is empty.
    SetDnsServers {
        /// Network service name.
        service: String,
        /// DNS servers in priority order.
        servers: Vec<String>,
    },
}

impl ShellCommand {
    /// The argument vector handed to the configuration tool (program name excluded).
    pub fn to_argv(&self) -> Vec<String> {
        match self {
            Self::SetManual {
                service,
                address,
                subnet_mask,
                router,
            } => vec![
                "-setmanual".to_string(),
                service.clone(),
                address.clone(),
                subnet_mask.clone(),
                router.clone(),
            ],
            Self::SetDhcp { service } => vec!["-setdhcp".to_string(), service.clone()],
            Self::SetDnsServers { service, servers } => {
                let mut argv = vec!["-setdnsservers".to_string(), service.clone()];
                if servers.is_empty() {
                    argv.push(DNS_CLEAR_SENTINEL.to_string());
                } else {
                    argv.extend(servers.iter().cloned());
                }
                argv
            }
        }
    }
}

impl fmt::Display for ShellCommand {
    /// Shell-quoted rendering, for display and logs only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let argv = self.to_argv();
        match shlex::try_join(argv.iter().map(String::as_str)) {
            Ok(joined) => f.write_str(&joined),
            Err(_) => f.write_str(&argv.join(" ")),
        }
    }
}

/// Exit status and captured streams of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

// --- SETTINGS MODELS (settings.toml) ---

/// Tool-level settings, independent of any profile file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Location of the `networksetup` binary.
    pub networksetup_path: PathBuf,
    /// Stop issuing commands once one of them fails.
    pub stop_on_failure: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            networksetup_path: PathBuf::from(DEFAULT_NETWORKSETUP_PATH),
            stop_on_failure: false,
        }
    }
}

// src/constants.rs

/// Default location of the macOS network configuration tool.
pub const DEFAULT_NETWORKSETUP_PATH: &str = "/usr/sbin/networksetup";

/// Argument `networksetup -setdnsservers` accepts to clear all DNS servers.
pub const DNS_CLEAR_SENTINEL: &str = "empty";

/// The name of the tool's directory inside the system config directory.
pub const CONFIG_DIR_NAME: &str = "netprofiles";

/// The name of the optional settings file (inside the config directory).
pub const SETTINGS_FILENAME: &str = "settings.toml";

/// Environment variable that overrides the settings file location.
pub const SETTINGS_PATH_ENV: &str = "NETPROFILES_SETTINGS";

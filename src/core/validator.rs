// src/core/validator.rs

//! Field rules a profile must pass before it is stored or applied.

use crate::models::{NetworkProfile, ProfileDraft, ProfileMode};
use std::net::Ipv4Addr;
use thiserror::Error;

/// Why a set of profile fields was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is empty after trimming.
    #[error("Profile name cannot be empty.")]
    EmptyName,
    /// The mode is neither `manual` nor `dhcp`.
    #[error("Invalid mode '{0}'. Expected 'manual' or 'dhcp'.")]
    InvalidMode(String),
    /// The interface is not one of the services the OS reports.
    #[error("Unknown network service '{0}'.")]
    UnknownInterface(String),
    /// A manual profile lacks an address, router or subnet mask.
    #[error("Manual mode requires the '{0}' field.")]
    MissingManualField(&'static str),
    /// An address field is not a dotted-quad IPv4 address.
    #[error("'{value}' is not a valid IPv4 address for '{field}'.")]
    MalformedAddress {
        /// JSON name of the field.
        field: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// Checks the raw fields of a profile and builds the validated profile.
///
/// Rules are applied in order and the first failure is returned:
/// 1. The name must not be empty.
/// 2. The mode must be `manual` or `dhcp`.
/// 3. The interface must be one of `available_interfaces`.
/// 4. Manual profiles need an address, router and subnet mask, each a dotted-quad IPv4.
/// 5. DNS entries are trimmed; blank entries are dropped.
///
/// Address fields of DHCP profiles are discarded.
pub fn validate(
    draft: &ProfileDraft,
    available_interfaces: &[String],
) -> Result<NetworkProfile, ValidationError> {
    let profile_name = check_name(&draft.profile_name)?;
    let mode = parse_mode(&draft.mode)?;
    let interface_name = check_interface(&draft.interface_name, available_interfaces)?;

    let (ipv4_address, router, subnet_mask) = match mode {
        ProfileMode::Manual => (
            Some(required_ipv4("ipv4Address", draft.ipv4_address.as_deref())?),
            Some(required_ipv4("router", draft.router.as_deref())?),
            Some(required_ipv4("subnetMask", draft.subnet_mask.as_deref())?),
        ),
        ProfileMode::Dhcp => (None, None, None),
    };

    Ok(NetworkProfile {
        profile_name,
        ipv4_address,
        router,
        subnet_mask,
        dns_servers: clean_dns_servers(&draft.dns_servers),
        interface_name,
        mode,
    })
}

/// Runs [`validate`] again on a stored profile, e.g. one read from a hand-edited file.
pub fn revalidate(
    profile: &NetworkProfile,
    available_interfaces: &[String],
) -> Result<NetworkProfile, ValidationError> {
    validate(&ProfileDraft::from(profile), available_interfaces)
}

/// Returns the trimmed name, or `EmptyName`.
pub fn check_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Parses `manual` / `dhcp`, ignoring case and surrounding whitespace.
pub fn parse_mode(raw: &str) -> Result<ProfileMode, ValidationError> {
    match raw.trim().to_lowercase().as_str() {
        "manual" => Ok(ProfileMode::Manual),
        "dhcp" => Ok(ProfileMode::Dhcp),
        _ => Err(ValidationError::InvalidMode(raw.trim().to_string())),
    }
}

/// Structural dotted-quad check. No reachability or subnet consistency checks.
pub fn check_ipv4(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    value
        .parse::<Ipv4Addr>()
        .map(|_| value.to_string())
        .map_err(|_| ValidationError::MalformedAddress {
            field,
            value: value.to_string(),
        })
}

/// Splits a comma separated list of DNS servers, as typed at a prompt.
pub fn split_dns_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims every entry and drops the blank ones, keeping order.
pub fn clean_dns_servers(servers: &[String]) -> Vec<String> {
    servers
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn check_interface(raw: &str, available: &[String]) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() || !available.iter().any(|a| a == name) {
        return Err(ValidationError::UnknownInterface(name.to_string()));
    }
    Ok(name.to_string())
}

fn required_ipv4(field: &'static str, raw: Option<&str>) -> Result<String, ValidationError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => check_ipv4(field, value),
        _ => Err(ValidationError::MissingManualField(field)),
    }
}

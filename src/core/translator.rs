// src/core/translator.rs

//! Profile to `networksetup` command translation.

use crate::core::validator::clean_dns_servers;
use crate::models::{NetworkProfile, ProfileMode, ShellCommand};

/// Converts a validated profile into the ordered commands that apply it.
///
/// Manual profiles always end with a DNS command, clearing DNS when the list
/// is empty. DHCP profiles only get a DNS command when servers are listed,
/// otherwise DHCP-provided DNS stays in effect.
///
/// Expects a profile that passed the validator; a manual profile without
/// address fields yields only the DNS command.
pub fn translate(profile: &NetworkProfile) -> Vec<ShellCommand> {
    let service = profile.interface_name.clone();
    let dns_servers = clean_dns_servers(&profile.dns_servers);
    let mut commands = Vec::with_capacity(2);

    match profile.mode {
        ProfileMode::Manual => {
            if let (Some(address), Some(subnet_mask), Some(router)) = (
                profile.ipv4_address.clone(),
                profile.subnet_mask.clone(),
                profile.router.clone(),
            ) {
                commands.push(ShellCommand::SetManual {
                    service: service.clone(),
                    address,
                    subnet_mask,
                    router,
                });
            } else {
                log::warn!(
                    "Profile '{}' is manual but incomplete; skipping address command.",
                    profile.profile_name
                );
            }
            commands.push(ShellCommand::SetDnsServers {
                service,
                servers: dns_servers,
            });
        }
        ProfileMode::Dhcp => {
            commands.push(ShellCommand::SetDhcp {
                service: service.clone(),
            });
            if !dns_servers.is_empty() {
                commands.push(ShellCommand::SetDnsServers {
                    service,
                    servers: dns_servers,
                });
            }
        }
    }

    commands
}

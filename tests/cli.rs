//! End-to-end tests of the `netprofiles` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const OFFICE_CONFIG: &str = r#"{
  "profiles": [
    {
      "profileName": "Office",
      "ipv4Address": "192.168.1.50",
      "router": "192.168.1.1",
      "subnetMask": "255.255.255.0",
      "dnsServers": ["8.8.8.8"],
      "interfaceName": "Wi-Fi",
      "mode": "manual"
    },
    {
      "profileName": "Home",
      "ipv4Address": null,
      "router": null,
      "subnetMask": null,
      "dnsServers": [],
      "interfaceName": "Wi-Fi",
      "mode": "dhcp"
    }
  ]
}
"#;

/// A scratch directory with a config path and an isolated settings file location.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("profiles.json")
    }

    fn settings_path(&self) -> PathBuf {
        self.dir.path().join("settings.toml")
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).unwrap();
    }

    fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_netprofiles"));
        cmd.env("NO_COLOR", "1")
            .env("NETPROFILES_SETTINGS", self.settings_path())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Installs a fake `networksetup` that lists Wi-Fi and Ethernet, records
    /// every configuration command and fails the ones starting with `fail_verb`.
    #[cfg(unix)]
    fn install_fake_networksetup(&self, fail_verb: Option<&str>) {
        use std::os::unix::fs::PermissionsExt;

        let script_path = self.dir.path().join("networksetup");
        let fail_case = match fail_verb {
            Some(verb) => format!(
                "  {verb}) printf '%s\\n' \"$*\" >> '{log}'; echo '** Error: invalid' >&2; exit 4 ;;\n",
                log = self.log_path().display()
            ),
            None => String::new(),
        };
        let script = format!(
            "#!/bin/sh\n\
             case \"$1\" in\n\
             \x20 -listallnetworkservices) printf 'An asterisk (*) denotes that a network service is disabled.\\nWi-Fi\\nEthernet\\n*Thunderbolt Bridge\\n' ;;\n\
             \x20 -listallhardwareports) printf 'Hardware Port: Wi-Fi\\nDevice: en0\\n\\nHardware Port: Ethernet\\nDevice: en1\\n' ;;\n\
             {fail_case}\
             \x20 *) printf '%s\\n' \"$*\" >> '{log}' ;;\n\
             esac\n",
            log = self.log_path().display()
        );
        fs::write(&script_path, script).unwrap();
        fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();

        fs::write(
            self.settings_path(),
            format!("networksetup_path = '{}'\n", script_path.display()),
        )
        .unwrap();
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn profile_names(path: &Path) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    value["profiles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["profileName"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_no_arguments_fails_with_usage() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No config file path given."))
        .stderr(predicate::str::contains("Usage: netprofiles"));
}

#[test]
fn test_version_flag() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_action_has_no_side_effects() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list-interfaces"));
    assert!(!sandbox.config_path().exists());
}

#[test]
fn test_unknown_action_fails_without_touching_the_file() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .arg("explode")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown action: 'explode'"));
    assert!(!sandbox.config_path().exists());
}

#[test]
fn test_list_creates_missing_config() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles found."));
    assert_eq!(sandbox.read_config(), "{\n  \"profiles\": []\n}\n");
}

#[test]
fn test_list_prints_profiles_in_order() {
    let sandbox = Sandbox::new();
    sandbox.write_config(OFFICE_CONFIG);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)1\. Office.*192\.168\.1\.50.*2\. Home").unwrap());
}

#[test]
fn test_list_malformed_config_fails_and_keeps_file() {
    let sandbox = Sandbox::new();
    sandbox.write_config("{ not json");
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a valid profiles file"));
    assert_eq!(sandbox.read_config(), "{ not json");
}

#[test]
fn test_delete_existing_profile() {
    let sandbox = Sandbox::new();
    sandbox.write_config(OFFICE_CONFIG);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["delete", "Office"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile 'Office' deleted."));
    assert_eq!(profile_names(&sandbox.config_path()), vec!["Home"]);
}

#[test]
fn test_delete_missing_profile_fails_and_keeps_file() {
    let sandbox = Sandbox::new();
    sandbox.write_config(OFFICE_CONFIG);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["rm", "Cafe"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No profile named 'Cafe' was found."));
    assert_eq!(sandbox.read_config(), OFFICE_CONFIG);
}

#[test]
fn test_action_help_flag_prints_action_usage() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--subnet-mask"));
}

#[cfg(unix)]
#[test]
fn test_list_interfaces_skips_disabled_services() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_networksetup(None);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .arg("list-interfaces")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wi-Fi"))
        .stdout(predicate::str::contains("Ethernet"))
        .stdout(predicate::str::contains("Thunderbolt").not());
    assert!(!sandbox.config_path().exists());
}

#[cfg(unix)]
#[test]
fn test_list_interfaces_hardware() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_networksetup(None);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["interfaces", "--hardware"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en0"))
        .stdout(predicate::str::contains("en1"));
}

#[cfg(unix)]
#[test]
fn test_create_without_input_requires_values() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_networksetup(None);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["create", "Cafe", "--no-input"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing value for 'mode'"));
    assert_eq!(sandbox.read_config(), "{\n  \"profiles\": []\n}\n");
}

#[cfg(unix)]
#[test]
fn test_create_manual_profile_from_flags() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_networksetup(None);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args([
            "create",
            "Office",
            "--mode",
            "manual",
            "--interface",
            "Wi-Fi",
            "--ipv4",
            "192.168.1.50",
            "--router",
            "192.168.1.1",
            "--subnet-mask",
            "255.255.255.0",
            "--dns",
            "8.8.8.8",
            "--no-input",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile 'Office' created."));

    let value: serde_json::Value = serde_json::from_str(&sandbox.read_config()).unwrap();
    let profile = &value["profiles"][0];
    assert_eq!(profile["profileName"], "Office");
    assert_eq!(profile["mode"], "manual");
    assert_eq!(profile["interfaceName"], "Wi-Fi");
    assert_eq!(profile["subnetMask"], "255.255.255.0");
    assert_eq!(profile["dnsServers"], serde_json::json!(["8.8.8.8"]));
    // Creating never applies.
    assert!(sandbox.calls().is_empty());
}

#[cfg(unix)]
#[test]
fn test_create_rejects_unknown_interface() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_networksetup(None);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args([
            "create",
            "Cafe",
            "--mode",
            "dhcp",
            "--interface",
            "Bluetooth PAN",
            "--no-input",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Bluetooth PAN"));
    assert!(profile_names(&sandbox.config_path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_create_rejects_malformed_address() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_networksetup(None);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args([
            "create",
            "Lab",
            "--mode",
            "manual",
            "-i",
            "Ethernet",
            "--ipv4",
            "10.0.0.300",
            "--router",
            "10.0.0.1",
            "--subnet-mask",
            "255.0.0.0",
            "--no-input",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("10.0.0.300"));
    assert!(profile_names(&sandbox.config_path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_apply_manual_profile_by_name() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_networksetup(None);
    sandbox.write_config(OFFICE_CONFIG);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["apply", "Office"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile 'Office' applied."));
    assert_eq!(
        sandbox.calls(),
        vec![
            "-setmanual Wi-Fi 192.168.1.50 255.255.255.0 192.168.1.1",
            "-setdnsservers Wi-Fi 8.8.8.8",
        ]
    );
    // Applying never rewrites the file.
    assert_eq!(sandbox.read_config(), OFFICE_CONFIG);
}

#[cfg(unix)]
#[test]
fn test_apply_dhcp_without_dns_issues_one_command() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_networksetup(None);
    sandbox.write_config(OFFICE_CONFIG);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["apply", "Home"])
        .assert()
        .success();
    assert_eq!(sandbox.calls(), vec!["-setdhcp Wi-Fi"]);
}

#[cfg(unix)]
#[test]
fn test_apply_reports_failed_command_and_continues() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_networksetup(Some("-setmanual"));
    sandbox.write_config(OFFICE_CONFIG);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["apply", "Office"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1 of 2 command(s) failed"));
    assert_eq!(sandbox.calls().len(), 2);
}

#[cfg(unix)]
#[test]
fn test_apply_stop_on_failure_setting() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_networksetup(Some("-setmanual"));
    let mut settings = fs::read_to_string(sandbox.settings_path()).unwrap();
    settings.push_str("stop_on_failure = true\n");
    fs::write(sandbox.settings_path(), settings).unwrap();
    sandbox.write_config(OFFICE_CONFIG);

    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["apply", "Office"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1 of 1 command(s) failed"));
    assert_eq!(sandbox.calls().len(), 1);
}

#[cfg(unix)]
#[test]
fn test_apply_unknown_profile_fails() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_networksetup(None);
    sandbox.write_config(OFFICE_CONFIG);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["apply", "Cafe"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cafe"));
    assert!(sandbox.calls().is_empty());
}

#[test]
fn test_help_ignores_malformed_settings() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.settings_path(), "bogus = 1\n").unwrap();
    sandbox
        .cmd()
        .arg(sandbox.dir.path().join("missing").join("profiles.json"))
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list-interfaces"));
}

#[test]
fn test_help_ignores_unexpandable_config_path() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .env_remove("NETPROFILES_UNSET_DIR")
        .arg("$NETPROFILES_UNSET_DIR/profiles.json")
        .arg("help")
        .assert()
        .success();
}

#[test]
fn test_list_fails_on_malformed_settings() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.settings_path(), "bogus = 1\n").unwrap();
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("settings.toml"));
    assert!(!sandbox.config_path().exists());
}

#[test]
fn test_create_malformed_config_without_input_keeps_file() {
    let sandbox = Sandbox::new();
    sandbox.write_config("{ broken");
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["create", "Cafe", "--mode", "dhcp", "-i", "Wi-Fi", "--no-input"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a valid profiles file"));
    assert_eq!(sandbox.read_config(), "{ broken");
}

#[cfg(unix)]
#[test]
fn test_delete_keeps_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let sandbox = Sandbox::new();
    sandbox.write_config(OFFICE_CONFIG);
    fs::set_permissions(sandbox.config_path(), fs::Permissions::from_mode(0o644)).unwrap();
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["delete", "Home"])
        .assert()
        .success();
    let mode = fs::metadata(sandbox.config_path()).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}

#[cfg(unix)]
#[test]
fn test_apply_trims_profile_name() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_networksetup(None);
    sandbox.write_config(OFFICE_CONFIG);
    sandbox
        .cmd()
        .arg(sandbox.config_path())
        .args(["apply", " Home "])
        .assert()
        .success();
    assert_eq!(sandbox.calls(), vec!["-setdhcp Wi-Fi"]);
}

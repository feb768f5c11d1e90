//! `vagrant ssh-config` binding
//!
//! The interesting part here is the response: vagrant ships each machine's
//! settings as one `ssh-config` record whose payload is an OpenSSH-style
//! config block, so the parser walks `Key value` lines within the block.

use indexmap::IndexMap;
use vagabond_core::{ArgumentBuilder, FromOutput, Record};

use super::Subcommand;
use crate::arguments::MachineSelector;
use crate::client::Client;

/// Options and execution for `vagrant ssh-config`.
#[derive(Debug)]
pub struct SshConfigCommand<'a> {
    client: &'a Client,
    machine: MachineSelector,
}

impl<'a> SshConfigCommand<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            machine: MachineSelector::default(),
        }
    }

    /// Query a single machine's connection settings.
    #[must_use]
    pub fn machine(mut self, name: impl Into<String>) -> Self {
        self.machine = MachineSelector::name(name);
        self
    }
}

impl Subcommand for SshConfigCommand<'_> {
    type Response = SshConfigResponse;

    fn name(&self) -> &'static str {
        "ssh-config"
    }

    fn client(&self) -> &Client {
        self.client
    }

    fn build_args(&self) -> Vec<String> {
        self.machine.build_args()
    }
}

/// OpenSSH connection settings for one machine.
///
/// Fields not present in the block stay `None`; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshConfig {
    /// `Host` alias vagrant assigned, usually the machine name.
    pub host: String,
    /// `HostName` — address to connect to.
    pub host_name: Option<String>,
    /// `User`.
    pub user: Option<String>,
    /// `Port`.
    pub port: Option<u16>,
    /// `UserKnownHostsFile`.
    pub user_known_hosts_file: Option<String>,
    /// `StrictHostKeyChecking`.
    pub strict_host_key_checking: Option<bool>,
    /// `PasswordAuthentication`.
    pub password_authentication: Option<bool>,
    /// `IdentityFile`, with surrounding quotes stripped.
    pub identity_file: Option<String>,
    /// `IdentitiesOnly`.
    pub identities_only: Option<bool>,
    /// `LogLevel`.
    pub log_level: Option<String>,
}

impl SshConfig {
    fn parse_block(block: &str) -> Option<Self> {
        let mut config = Self::default();

        for line in block.lines() {
            let mut parts = line.trim().splitn(2, char::is_whitespace);
            let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
                continue;
            };
            let value = value.trim();

            match key {
                "Host" => config.host = value.to_string(),
                "HostName" => config.host_name = Some(value.to_string()),
                "User" => config.user = Some(value.to_string()),
                "Port" => config.port = value.parse().ok(),
                "UserKnownHostsFile" => {
                    config.user_known_hosts_file = Some(unquote(value).to_string());
                }
                "StrictHostKeyChecking" => config.strict_host_key_checking = yes_no(value),
                "PasswordAuthentication" => config.password_authentication = yes_no(value),
                "IdentityFile" => config.identity_file = Some(unquote(value).to_string()),
                "IdentitiesOnly" => config.identities_only = yes_no(value),
                "LogLevel" => config.log_level = Some(value.to_string()),
                _ => {}
            }
        }

        if config.host.is_empty() {
            return None;
        }
        Some(config)
    }
}

/// Response of `vagrant ssh-config`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshConfigResponse {
    /// Machine name → connection settings, in output order.
    pub configs: IndexMap<String, SshConfig>,
}

impl FromOutput for SshConfigResponse {
    fn from_output(records: &[Record]) -> Self {
        let mut configs = IndexMap::new();
        for record in records {
            if record.kind == "ssh-config"
                && let Some(block) = record.first()
                && let Some(config) = SshConfig::parse_block(block)
            {
                // Prefer the record's target; single-machine environments may
                // leave it empty, in which case the Host alias names the key.
                let key = record.target.clone().unwrap_or_else(|| config.host.clone());
                configs.insert(key, config);
            }
        }
        Self { configs }
    }
}

fn yes_no(value: &str) -> Option<bool> {
    match value {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Vagrant quotes paths containing spaces.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use vagabond_core::parse_stream;

    const BLOCK: &str = "Host default\\n  HostName 192.168.121.68\\n  User vagrant\\n  Port 22\\n  UserKnownHostsFile /dev/null\\n  StrictHostKeyChecking no\\n  PasswordAuthentication no\\n  IdentityFile \"/home/user/My Keys/private_key\"\\n  IdentitiesOnly yes\\n  LogLevel FATAL\\n";

    #[test]
    fn test_ssh_config_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::with_binary("vagrant", dir.path()).unwrap();
        assert_eq!(
            client.ssh_config().machine("web").arguments(),
            vec!["ssh-config", "web", "--machine-readable"]
        );
    }

    #[test]
    fn test_response_parses_full_block() {
        let line = format!("1645487495,default,ssh-config,{BLOCK}");
        let response = SshConfigResponse::from_output(&parse_stream(&line));
        let config = &response.configs["default"];

        assert_eq!(config.host, "default");
        assert_eq!(config.host_name.as_deref(), Some("192.168.121.68"));
        assert_eq!(config.user.as_deref(), Some("vagrant"));
        assert_eq!(config.port, Some(22));
        assert_eq!(config.user_known_hosts_file.as_deref(), Some("/dev/null"));
        assert_eq!(config.strict_host_key_checking, Some(false));
        assert_eq!(config.password_authentication, Some(false));
        assert_eq!(
            config.identity_file.as_deref(),
            Some("/home/user/My Keys/private_key")
        );
        assert_eq!(config.identities_only, Some(true));
        assert_eq!(config.log_level.as_deref(), Some("FATAL"));
    }

    #[test]
    fn test_response_keys_by_target_per_machine() {
        let out = "\
1,web,ssh-config,Host web\\n  HostName 10.0.0.2\\n
1,db,ssh-config,Host db\\n  HostName 10.0.0.3\\n
";
        let response = SshConfigResponse::from_output(&parse_stream(out));
        assert_eq!(response.configs.len(), 2);
        assert_eq!(response.configs["web"].host_name.as_deref(), Some("10.0.0.2"));
        assert_eq!(response.configs["db"].host_name.as_deref(), Some("10.0.0.3"));
    }

    #[test]
    fn test_block_without_host_is_dropped() {
        let response =
            SshConfigResponse::from_output(&parse_stream("1,,ssh-config,  HostName 10.0.0.2\\n"));
        assert!(response.configs.is_empty());
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"/a b/c\""), "/a b/c");
        assert_eq!(unquote("/plain/path"), "/plain/path");
        assert_eq!(unquote("\"unterminated"), "\"unterminated");
    }
}

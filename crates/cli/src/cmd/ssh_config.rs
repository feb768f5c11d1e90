//! Ssh-config command implementation
//!
//! Prints connection settings back out as OpenSSH config blocks, suitable
//! for appending to `~/.ssh/config`.

use clap::Args;
use vagabond_client::Subcommand;
use vagabond_client::commands::SshConfig;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Ssh-config command
#[derive(Debug, Args)]
pub struct SshConfigCommand {
    /// Machine to query (default: all machines)
    pub machine: Option<String>,
}

impl Command for SshConfigCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let mut cmd = context.client.ssh_config();
        if let Some(machine) = &self.machine {
            cmd = cmd.machine(machine);
        }
        let response = cmd.run()?;

        for config in response.configs.values() {
            print_block(config);
            println!();
        }
        Ok(())
    }
}

fn print_block(config: &SshConfig) {
    println!("Host {}", config.host);
    let entry = |key: &str, value: &Option<String>| {
        if let Some(value) = value {
            println!("  {key} {value}");
        }
    };
    let flag = |key: &str, value: Option<bool>| {
        if let Some(value) = value {
            println!("  {key} {}", if value { "yes" } else { "no" });
        }
    };

    entry("HostName", &config.host_name);
    entry("User", &config.user);
    if let Some(port) = config.port {
        println!("  Port {port}");
    }
    entry("UserKnownHostsFile", &config.user_known_hosts_file);
    flag("StrictHostKeyChecking", config.strict_host_key_checking);
    flag("PasswordAuthentication", config.password_authentication);
    entry("IdentityFile", &config.identity_file);
    flag("IdentitiesOnly", config.identities_only);
    entry("LogLevel", &config.log_level);
}

//! Provision command implementation

use clap::Args;
use owo_colors::OwoColorize;
use vagabond_client::Subcommand;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Provision command
#[derive(Debug, Args)]
pub struct ProvisionCommand {
    /// Machine to provision (default: all machines)
    pub machine: Option<String>,

    /// Run only these provisioners, in order (comma-separated)
    #[arg(long = "provision-with", value_delimiter = ',', value_name = "NAMES")]
    pub provision_with: Vec<String>,
}

impl Command for ProvisionCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let mut cmd = context.client.provision();
        if let Some(machine) = &self.machine {
            cmd = cmd.machine(machine);
        }
        if !self.provision_with.is_empty() {
            cmd = cmd.provisioners(self.provision_with.iter().cloned());
        }

        let () = cmd.run()?;
        println!("{} provisioning complete", "✓".green());
        Ok(())
    }
}

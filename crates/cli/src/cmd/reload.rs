//! Reload command implementation

use clap::Args;
use owo_colors::OwoColorize;
use vagabond_client::Subcommand;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Reload command
#[derive(Debug, Args)]
pub struct ReloadCommand {
    /// Machine to reload (default: all machines)
    pub machine: Option<String>,

    /// Skip provisioning after the restart
    #[arg(long, conflicts_with = "provision")]
    pub no_provision: bool,

    /// Force provisioning after the restart
    #[arg(long)]
    pub provision: bool,

    /// Run only these provisioners, in order (comma-separated)
    #[arg(long = "provision-with", value_delimiter = ',', value_name = "NAMES")]
    pub provision_with: Vec<String>,
}

impl Command for ReloadCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let mut cmd = context.client.reload();
        if let Some(machine) = &self.machine {
            cmd = cmd.machine(machine);
        }
        if self.no_provision {
            cmd = cmd.provisioning(false);
        }
        if self.provision {
            cmd = cmd.provisioning(true);
        }
        if !self.provision_with.is_empty() {
            cmd = cmd.provisioners(self.provision_with.iter().cloned());
        }

        let () = cmd.run()?;
        println!("{} reload complete", "✓".green());
        Ok(())
    }
}

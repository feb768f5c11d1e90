//! Up command implementation

use clap::Args;
use owo_colors::OwoColorize;
use vagabond_client::Subcommand;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Up command
#[derive(Debug, Args)]
pub struct UpCommand {
    /// Machine to bring up (default: all machines)
    pub machine: Option<String>,

    /// Skip provisioning
    #[arg(long, conflicts_with = "provision")]
    pub no_provision: bool,

    /// Force provisioning, even if the machine was already provisioned
    #[arg(long)]
    pub provision: bool,

    /// Run only these provisioners, in order (comma-separated)
    #[arg(long = "provision-with", value_delimiter = ',', value_name = "NAMES")]
    pub provision_with: Vec<String>,

    /// Back machines with the named provider
    #[arg(long, value_name = "NAME")]
    pub provider: Option<String>,

    /// Start machines in parallel, if the provider supports it
    #[arg(long)]
    pub parallel: bool,
}

impl Command for UpCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let mut cmd = context.client.up();
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
        if let Some(provider) = &self.provider {
            cmd = cmd.provider(provider);
        }
        if self.parallel {
            cmd = cmd.parallel(true);
        }

        let response = cmd.run()?;
        for (machine, info) in &response.machines {
            println!("{} {} ({})", "✓".green(), machine.bold(), info.provider);
        }
        Ok(())
    }
}

//! Resume command implementation

use clap::Args;
use owo_colors::OwoColorize;
use vagabond_client::Subcommand;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Resume command
#[derive(Debug, Args)]
pub struct ResumeCommand {
    /// Machine to resume (default: all machines)
    pub machine: Option<String>,

    /// Skip provisioning after resuming
    #[arg(long)]
    pub no_provision: bool,
}

impl Command for ResumeCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let mut cmd = context.client.resume();
        if let Some(machine) = &self.machine {
            cmd = cmd.machine(machine);
        }
        if self.no_provision {
            cmd = cmd.provisioning(false);
        }

        let () = cmd.run()?;
        println!("{} resumed", "✓".green());
        Ok(())
    }
}

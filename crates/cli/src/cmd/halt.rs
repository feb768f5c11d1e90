//! Halt command implementation

use clap::Args;
use owo_colors::OwoColorize;
use vagabond_client::Subcommand;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Halt command
#[derive(Debug, Args)]
pub struct HaltCommand {
    /// Machine to halt (default: all machines)
    pub machine: Option<String>,

    /// Power off immediately instead of shutting down gracefully
    #[arg(short, long)]
    pub force: bool,
}

impl Command for HaltCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let mut cmd = context.client.halt().force(self.force);
        if let Some(machine) = &self.machine {
            cmd = cmd.machine(machine);
        }

        let () = cmd.run()?;
        println!("{} halted", "✓".green());
        Ok(())
    }
}

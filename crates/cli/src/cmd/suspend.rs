//! Suspend command implementation

use clap::Args;
use owo_colors::OwoColorize;
use vagabond_client::Subcommand;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Suspend command
#[derive(Debug, Args)]
pub struct SuspendCommand {
    /// Machine to suspend (default: all machines)
    pub machine: Option<String>,
}

impl Command for SuspendCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let mut cmd = context.client.suspend();
        if let Some(machine) = &self.machine {
            cmd = cmd.machine(machine);
        }

        let () = cmd.run()?;
        println!("{} suspended", "✓".green());
        Ok(())
    }
}

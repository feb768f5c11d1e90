//! Destroy command implementation

use clap::Args;
use owo_colors::OwoColorize;
use vagabond_client::Subcommand;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Destroy command
#[derive(Debug, Args)]
pub struct DestroyCommand {
    /// Machine to destroy (default: all machines)
    pub machine: Option<String>,

    /// Destroy without vagrant's confirmation prompt
    #[arg(short, long)]
    pub force: bool,

    /// Destroy machines in parallel, if the provider supports it
    #[arg(long)]
    pub parallel: bool,
}

impl Command for DestroyCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        // The library forces by default; the CLI mirrors vagrant itself and
        // only skips the prompt when asked to.
        let mut cmd = context.client.destroy().force(self.force);
        if let Some(machine) = &self.machine {
            cmd = cmd.machine(machine);
        }
        if self.parallel {
            cmd = cmd.parallel(true);
        }

        let () = cmd.run()?;
        println!("{} destroyed", "✓".green());
        Ok(())
    }
}

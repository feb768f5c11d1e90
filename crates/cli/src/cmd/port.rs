//! Port command implementation

use clap::Args;
use comfy_table::Table;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use vagabond_client::Subcommand;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Port command
#[derive(Debug, Args)]
pub struct PortCommand {
    /// Machine to query (default: all machines)
    pub machine: Option<String>,
}

impl Command for PortCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let mut cmd = context.client.port();
        if let Some(machine) = &self.machine {
            cmd = cmd.machine(machine);
        }
        let response = cmd.run()?;

        if response.forwarded_ports.is_empty() {
            println!("no forwarded ports");
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["GUEST", "HOST"]);
        for forwarding in &response.forwarded_ports {
            table.add_row(vec![
                forwarding.guest.to_string(),
                forwarding.host.to_string(),
            ]);
        }
        println!("{table}");
        Ok(())
    }
}

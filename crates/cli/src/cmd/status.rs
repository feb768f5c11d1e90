//! Status command implementation
//!
//! Show machine states as a table or as JSON.

use clap::Args;
use comfy_table::Table;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use owo_colors::OwoColorize;
use vagabond_client::Subcommand;
use vagabond_client::commands::MachineState;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Status command
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Machine to query (default: all machines)
    pub machine: Option<String>,

    /// Output in JSON format (default: table format)
    #[arg(long)]
    pub json: bool,
}

impl Command for StatusCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let mut cmd = context.client.status();
        if let Some(machine) = &self.machine {
            cmd = cmd.machine(machine);
        }
        let response = cmd.run()?;

        if self.json {
            let map: serde_json::Map<String, serde_json::Value> = response
                .states
                .iter()
                .map(|(machine, state)| (machine.clone(), state.as_str().into()))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
            return Ok(());
        }

        if response.states.is_empty() {
            println!("no machines defined");
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["MACHINE", "STATE"]);
        for (machine, state) in &response.states {
            table.add_row(vec![machine.clone(), colorize(state)]);
        }
        println!("{table}");
        Ok(())
    }
}

fn colorize(state: &MachineState) -> String {
    match state {
        MachineState::Running => state.as_str().green().to_string(),
        MachineState::PowerOff | MachineState::Aborted => state.as_str().red().to_string(),
        MachineState::Saved => state.as_str().yellow().to_string(),
        MachineState::NotCreated => state.as_str().dimmed().to_string(),
        MachineState::Other(_) => state.as_str().to_string(),
    }
}

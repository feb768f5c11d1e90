//! Version command implementation
//!
//! Reports the vagrant installation's versions plus vagabond's own build
//! metadata.

use clap::Args;
use owo_colors::OwoColorize;
use vagabond_client::Subcommand;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

const UNKNOWN: &str = "unknown";

/// Version command
#[derive(Debug, Args)]
pub struct VersionCommand {
    /// Show build details (rustc, commit, timestamp)
    #[arg(long)]
    pub all: bool,
}

impl Command for VersionCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let response = context.client.version().run()?;

        println!(
            "Vagrant Installed Version: {}",
            response.installed.as_deref().unwrap_or(UNKNOWN)
        );
        if let Some(latest) = &response.latest {
            println!("Vagrant Latest Version:    {latest}");
        }
        if response.upgrade_available() {
            println!("{}", "A newer vagrant version is available.".yellow());
        }

        println!("Vagabond Version:          {}", env!("CARGO_PKG_VERSION"));
        if self.all {
            print_build_info();
        }
        Ok(())
    }
}

fn print_build_info() {
    let row = |label: &str, value: Option<&str>| {
        println!("  {label}: {}", value.unwrap_or(UNKNOWN));
    };
    row("rustc", option_env!("VERGEN_RUSTC_SEMVER"));
    row("built", option_env!("VERGEN_BUILD_TIMESTAMP"));
    row("commit", option_env!("VERGEN_GIT_SHA"));
    row("branch", option_env!("VERGEN_GIT_BRANCH"));
}

//! Vagabond CLI library
//!
//! This library contains all the CLI logic for vagabond, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;
pub mod config;
pub mod error;
pub mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use command::Command;
use common::RuntimeContext;
use error::Result;

/// Vagabond - drive Vagrant machines from the command line
#[derive(Parser)]
#[command(name = "vagabond")]
#[command(about = "Drive Vagrant machines from the command line")]
#[command(version)]
#[command(long_about = "Drive Vagrant machines from the command line

A thin CLI over the vagabond client library. Every subcommand shells out to
the external `vagrant` tool with machine-readable output and renders the
parsed result.

The Vagrantfile directory defaults to the current directory; override it
with --dir, the VAGABOND_DIR environment variable, or the config file at
~/.config/vagabond/config.toml.")]
pub struct Cli {
    /// Directory containing the Vagrantfile (default: current directory)
    #[arg(short = 'C', long, env = "VAGABOND_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Path to the vagrant executable (default: discovered on PATH)
    #[arg(long, env = "VAGABOND_BINARY", value_name = "PATH")]
    pub binary: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, env = "VAGABOND_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Abort the underlying vagrant invocation after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "VAGABOND_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the vagabond CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create and boot machines
    Up(cmd::up::UpCommand),

    /// Run provisioners on running machines
    Provision(cmd::provision::ProvisionCommand),

    /// Restart machines, picking up Vagrantfile changes
    Reload(cmd::reload::ReloadCommand),

    /// Resume suspended machines
    Resume(cmd::resume::ResumeCommand),

    /// Stop machines
    Halt(cmd::halt::HaltCommand),

    /// Destroy machines and their resources
    Destroy(cmd::destroy::DestroyCommand),

    /// Suspend machines
    Suspend(cmd::suspend::SuspendCommand),

    /// Show machine states
    Status(cmd::status::StatusCommand),

    /// Show forwarded ports
    Port(cmd::port::PortCommand),

    /// Show OpenSSH connection settings
    #[command(name = "ssh-config")]
    SshConfig(cmd::ssh_config::SshConfigCommand),

    /// Show vagrant and vagabond version information
    Version(cmd::version::VersionCommand),
}

/// Main entry point for the CLI logic
///
/// # Errors
///
/// Returns an error if:
/// - Logging initialization fails
/// - Configuration loading fails
/// - The client cannot be constructed (no vagrant binary, bad directory)
/// - Command execution fails
pub fn run(cli: Cli) -> Result<()> {
    // Initialize logging based on verbosity
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let config = config::Config::load(cli.config.as_deref())?;
    let context = RuntimeContext::new(
        config,
        cli.dir.as_deref(),
        cli.binary.as_deref(),
        cli.timeout,
    )?;

    execute_command(cli.command, &context)
}

/// Execute the command based on the command type
fn execute_command(command: Commands, context: &RuntimeContext) -> Result<()> {
    match command {
        Commands::Up(cmd) => cmd.execute(context),
        Commands::Provision(cmd) => cmd.execute(context),
        Commands::Reload(cmd) => cmd.execute(context),
        Commands::Resume(cmd) => cmd.execute(context),
        Commands::Halt(cmd) => cmd.execute(context),
        Commands::Destroy(cmd) => cmd.execute(context),
        Commands::Suspend(cmd) => cmd.execute(context),
        Commands::Status(cmd) => cmd.execute(context),
        Commands::Port(cmd) => cmd.execute(context),
        Commands::SshConfig(cmd) => cmd.execute(context),
        Commands::Version(cmd) => cmd.execute(context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::parse_from(["vagabond", "status"]);
        assert!(matches!(cli.command, Commands::Status(_)));

        let cli = Cli::parse_from(["vagabond", "-C", "/srv/machines", "up", "web"]);
        assert_eq!(cli.dir.as_deref(), Some(std::path::Path::new("/srv/machines")));
        assert!(matches!(cli.command, Commands::Up(_)));

        let cli = Cli::parse_from(["vagabond", "ssh-config", "web"]);
        assert!(matches!(cli.command, Commands::SshConfig(_)));
    }
}

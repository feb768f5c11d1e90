//! Subcommand bindings
//!
//! One module per vagrant subcommand, all with the same shape: an options
//! struct created from a [`Client`] factory, capability values for its
//! arguments, and execution through the shared runner via [`Subcommand`].
//!
//! Commands are single-use. `run()` and `start()` consume the value, so a
//! command cannot be executed twice, and `wait()` exists only on the
//! [`Running`] handle that `start()` returns — waiting without starting is
//! unrepresentable.

pub mod destroy;
pub mod halt;
pub mod port;
pub mod provision;
pub mod reload;
pub mod resume;
pub mod ssh_config;
pub mod status;
pub mod suspend;
pub mod up;
pub mod version;

pub use destroy::DestroyCommand;
pub use halt::HaltCommand;
pub use port::{ForwardedPort, PortCommand, PortResponse};
pub use provision::ProvisionCommand;
pub use reload::ReloadCommand;
pub use resume::ResumeCommand;
pub use ssh_config::{SshConfig, SshConfigCommand, SshConfigResponse};
pub use status::{MachineState, StatusCommand, StatusResponse};
pub use suspend::SuspendCommand;
pub use up::{MachineInfo, UpCommand, UpResponse};
pub use version::{VersionCommand, VersionResponse};

use vagabond_core::{FromOutput, Result};

use crate::client::Client;
use crate::runner::{Invocation, Running, compose_argv};

/// Uniform execution contract for one subcommand binding.
///
/// Implementors supply the subcommand name, the client they were created
/// from, and their option arguments; execution is provided.
pub trait Subcommand: Sized {
    /// Typed response produced from a successful run.
    type Response: FromOutput;

    /// The subcommand name passed to vagrant, e.g. `"provision"`.
    fn name(&self) -> &'static str;

    /// The client this command was created from.
    fn client(&self) -> &Client;

    /// Build this command's option arguments, in order.
    ///
    /// Pure and idempotent; called exactly once when execution begins.
    fn build_args(&self) -> Vec<String>;

    /// The full argument vector this command will execute with.
    ///
    /// Inspection only; identical to what `run()`/`start()` will pass to the
    /// spawned process.
    fn arguments(&self) -> Vec<String> {
        compose_argv(self.name(), self.build_args())
    }

    /// Execute and block until the external process exits.
    ///
    /// Equivalent to `start()` followed by `wait()`.
    fn run(self) -> Result<Self::Response> {
        self.start()?.wait()
    }

    /// Begin execution without blocking.
    ///
    /// Call [`Running::wait`] on the returned handle to reap the process and
    /// obtain the terminal result.
    fn start(self) -> Result<Running<Self::Response>> {
        Invocation::prepare(self.client(), self.name(), self.build_args()).start()
    }
}

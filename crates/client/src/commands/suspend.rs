//! `vagrant suspend` binding

use vagabond_core::ArgumentBuilder;

use super::Subcommand;
use crate::arguments::MachineSelector;
use crate::client::Client;

/// Options and execution for `vagrant suspend`.
#[derive(Debug)]
pub struct SuspendCommand<'a> {
    client: &'a Client,
    machine: MachineSelector,
}

impl<'a> SuspendCommand<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            machine: MachineSelector::default(),
        }
    }

    /// Suspend a single machine instead of all of them.
    #[must_use]
    pub fn machine(mut self, name: impl Into<String>) -> Self {
        self.machine = MachineSelector::name(name);
        self
    }
}

impl Subcommand for SuspendCommand<'_> {
    type Response = ();

    fn name(&self) -> &'static str {
        "suspend"
    }

    fn client(&self) -> &Client {
        self.client
    }

    fn build_args(&self) -> Vec<String> {
        self.machine.build_args()
    }
}

//! `vagrant halt` binding

use vagabond_core::ArgumentBuilder;

use super::Subcommand;
use crate::arguments::MachineSelector;
use crate::client::Client;

/// Options and execution for `vagrant halt`.
///
/// Shuts machines down gracefully by default; `force(true)` pulls the plug
/// instead of asking the guest OS to stop.
#[derive(Debug)]
pub struct HaltCommand<'a> {
    client: &'a Client,
    machine: MachineSelector,
    force: bool,
}

impl<'a> HaltCommand<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            machine: MachineSelector::default(),
            force: false,
        }
    }

    /// Halt a single machine instead of all of them.
    #[must_use]
    pub fn machine(mut self, name: impl Into<String>) -> Self {
        self.machine = MachineSelector::name(name);
        self
    }

    /// Power off immediately instead of shutting down gracefully.
    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

impl Subcommand for HaltCommand<'_> {
    type Response = ();

    fn name(&self) -> &'static str {
        "halt"
    }

    fn client(&self) -> &Client {
        self.client
    }

    fn build_args(&self) -> Vec<String> {
        let mut args = self.machine.build_args();
        if self.force {
            args.push("--force".to_string());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_halt_is_graceful_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::with_binary("vagrant", dir.path()).unwrap();
        assert_eq!(client.halt().arguments(), vec!["halt", "--machine-readable"]);
    }

    #[test]
    fn test_halt_force() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::with_binary("vagrant", dir.path()).unwrap();
        assert_eq!(
            client.halt().machine("web").force(true).arguments(),
            vec!["halt", "web", "--force", "--machine-readable"]
        );
    }
}

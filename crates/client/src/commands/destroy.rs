//! `vagrant destroy` binding

use vagabond_core::ArgumentBuilder;

use super::Subcommand;
use crate::arguments::MachineSelector;
use crate::client::Client;

/// Options and execution for `vagrant destroy`.
///
/// Removes machines and everything the provider created for them. Force
/// defaults to on: a library cannot answer vagrant's interactive
/// confirmation prompt, so the non-interactive path is the usable default.
#[derive(Debug)]
pub struct DestroyCommand<'a> {
    client: &'a Client,
    machine: MachineSelector,
    force: bool,
    parallel: Option<bool>,
}

impl<'a> DestroyCommand<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            machine: MachineSelector::default(),
            force: true,
            parallel: None,
        }
    }

    /// Destroy a single machine instead of all of them.
    #[must_use]
    pub fn machine(mut self, name: impl Into<String>) -> Self {
        self.machine = MachineSelector::name(name);
        self
    }

    /// Skip (default) or require vagrant's confirmation prompt.
    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Destroy machines in parallel, for providers that support it.
    #[must_use]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = Some(enabled);
        self
    }
}

impl Subcommand for DestroyCommand<'_> {
    type Response = ();

    fn name(&self) -> &'static str {
        "destroy"
    }

    fn client(&self) -> &Client {
        self.client
    }

    fn build_args(&self) -> Vec<String> {
        let mut args = self.machine.build_args();
        if self.force {
            args.push("--force".to_string());
        }
        match self.parallel {
            Some(true) => args.push("--parallel".to_string()),
            Some(false) => args.push("--no-parallel".to_string()),
            None => {}
        }
        args
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_destroy_forces_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::with_binary("vagrant", dir.path()).unwrap();
        assert_eq!(
            client.destroy().arguments(),
            vec!["destroy", "--force", "--machine-readable"]
        );
    }

    #[test]
    fn test_destroy_opt_out_of_force() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::with_binary("vagrant", dir.path()).unwrap();
        assert_eq!(
            client.destroy().machine("db").force(false).parallel(true).arguments(),
            vec!["destroy", "db", "--parallel", "--machine-readable"]
        );
    }
}

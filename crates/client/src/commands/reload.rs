//! `vagrant reload` binding

use vagabond_core::ArgumentBuilder;

use super::Subcommand;
use crate::arguments::{MachineSelector, ProvisionToggle, ProvisionerList};
use crate::client::Client;

/// Options and execution for `vagrant reload`.
///
/// Halts and restarts machines so Vagrantfile changes take effect.
#[derive(Debug)]
pub struct ReloadCommand<'a> {
    client: &'a Client,
    machine: MachineSelector,
    provisioning: ProvisionToggle,
    provisioners: ProvisionerList,
}

impl<'a> ReloadCommand<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            machine: MachineSelector::default(),
            provisioning: ProvisionToggle::default(),
            provisioners: ProvisionerList::default(),
        }
    }

    /// Reload a single machine instead of all of them.
    #[must_use]
    pub fn machine(mut self, name: impl Into<String>) -> Self {
        self.machine = MachineSelector::name(name);
        self
    }

    /// Force provisioning on or off after the restart.
    #[must_use]
    pub fn provisioning(mut self, enabled: bool) -> Self {
        self.provisioning.set(enabled);
        self
    }

    /// Run only the named provisioners, in the given order.
    #[must_use]
    pub fn provisioners<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provisioners.extend(names);
        self
    }
}

impl Subcommand for ReloadCommand<'_> {
    type Response = ();

    fn name(&self) -> &'static str {
        "reload"
    }

    fn client(&self) -> &Client {
        self.client
    }

    fn build_args(&self) -> Vec<String> {
        let mut args = self.machine.build_args();
        args.extend(self.provisioning.build_args());
        args.extend(self.provisioners.build_args());
        args
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_reload_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::with_binary("vagrant", dir.path()).unwrap();
        let cmd = client
            .reload()
            .machine("db")
            .provisioning(true)
            .provisioners(["shell"]);
        assert_eq!(
            cmd.arguments(),
            vec![
                "reload",
                "db",
                "--provision",
                "--provision-with",
                "shell",
                "--machine-readable"
            ]
        );
    }
}

//! `vagrant provision` binding

use vagabond_core::ArgumentBuilder;

use super::Subcommand;
use crate::arguments::{MachineSelector, ProvisionerList};
use crate::client::Client;

/// Options and execution for `vagrant provision`.
///
/// Runs configured provisioners against already-running machines. After
/// setting options as appropriate, call `run()`, or `start()` followed by
/// `wait()` on the returned handle. With no provisioners selected, vagrant
/// runs all of them.
#[derive(Debug)]
pub struct ProvisionCommand<'a> {
    client: &'a Client,
    machine: MachineSelector,
    provisioners: ProvisionerList,
}

impl<'a> ProvisionCommand<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            machine: MachineSelector::default(),
            provisioners: ProvisionerList::default(),
        }
    }

    /// Provision a single machine instead of all of them.
    #[must_use]
    pub fn machine(mut self, name: impl Into<String>) -> Self {
        self.machine = MachineSelector::name(name);
        self
    }

    /// Run only the named provisioner. May be called repeatedly; the
    /// configured order is preserved.
    #[must_use]
    pub fn provisioner(mut self, name: impl Into<String>) -> Self {
        self.provisioners.push(name);
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

impl Subcommand for ProvisionCommand<'_> {
    type Response = ();

    fn name(&self) -> &'static str {
        "provision"
    }

    fn client(&self) -> &Client {
        self.client
    }

    fn build_args(&self) -> Vec<String> {
        let mut args = self.machine.build_args();
        args.extend(self.provisioners.build_args());
        args
    }
}

//! `vagrant up` binding

use indexmap::IndexMap;
use vagabond_core::{ArgumentBuilder, FromOutput, Record};

use super::Subcommand;
use crate::arguments::{MachineSelector, ProvisionToggle, ProvisionerList};
use crate::client::Client;

/// Options and execution for `vagrant up`.
///
/// Creates and boots machines. Unset toggles defer to vagrant's own
/// defaults, so a bare `up()` behaves exactly like running `vagrant up` in a
/// shell.
#[derive(Debug)]
pub struct UpCommand<'a> {
    client: &'a Client,
    machine: MachineSelector,
    provisioning: ProvisionToggle,
    provisioners: ProvisionerList,
    destroy_on_error: Option<bool>,
    install_provider: Option<bool>,
    parallel: Option<bool>,
    provider: Option<String>,
}

impl<'a> UpCommand<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            machine: MachineSelector::default(),
            provisioning: ProvisionToggle::default(),
            provisioners: ProvisionerList::default(),
            destroy_on_error: None,
            install_provider: None,
            parallel: None,
            provider: None,
        }
    }

    /// Bring up a single machine instead of all of them.
    #[must_use]
    pub fn machine(mut self, name: impl Into<String>) -> Self {
        self.machine = MachineSelector::name(name);
        self
    }

    /// Force provisioning on or off.
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

    /// Destroy (or keep) a machine whose bring-up fails.
    #[must_use]
    pub fn destroy_on_error(mut self, enabled: bool) -> Self {
        self.destroy_on_error = Some(enabled);
        self
    }

    /// Install (or refuse to install) the provider if it is missing.
    #[must_use]
    pub fn install_provider(mut self, enabled: bool) -> Self {
        self.install_provider = Some(enabled);
        self
    }

    /// Start machines in parallel, for providers that support it.
    #[must_use]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = Some(enabled);
        self
    }

    /// Back machines with the named provider.
    #[must_use]
    pub fn provider(mut self, name: impl Into<String>) -> Self {
        self.provider = Some(name.into());
        self
    }
}

fn toggle(args: &mut Vec<String>, value: Option<bool>, on: &str, off: &str) {
    match value {
        Some(true) => args.push(on.to_string()),
        Some(false) => args.push(off.to_string()),
        None => {}
    }
}

impl Subcommand for UpCommand<'_> {
    type Response = UpResponse;

    fn name(&self) -> &'static str {
        "up"
    }

    fn client(&self) -> &Client {
        self.client
    }

    fn build_args(&self) -> Vec<String> {
        let mut args = self.machine.build_args();
        args.extend(self.provisioning.build_args());
        args.extend(self.provisioners.build_args());
        toggle(
            &mut args,
            self.destroy_on_error,
            "--destroy-on-error",
            "--no-destroy-on-error",
        );
        toggle(
            &mut args,
            self.install_provider,
            "--install-provider",
            "--no-install-provider",
        );
        toggle(&mut args, self.parallel, "--parallel", "--no-parallel");
        if let Some(provider) = &self.provider {
            args.push("--provider".to_string());
            args.push(provider.clone());
        }
        args
    }
}

/// Per-machine information reported during bring-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineInfo {
    /// Provider backing the machine, e.g. `virtualbox` or `libvirt`.
    pub provider: String,
}

/// Response of `vagrant up`: which machines came up, and on what provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpResponse {
    /// Machine name → provider info, in output order.
    pub machines: IndexMap<String, MachineInfo>,
}

impl FromOutput for UpResponse {
    fn from_output(records: &[Record]) -> Self {
        let mut machines = IndexMap::new();
        for record in records {
            if record.kind == "metadata"
                && record.first() == Some("provider")
                && let (Some(target), Some(provider)) = (&record.target, record.data.get(1))
            {
                machines.insert(
                    target.clone(),
                    MachineInfo {
                        provider: provider.clone(),
                    },
                );
            }
        }
        Self { machines }
    }
}

//! `vagrant port` binding

use vagabond_core::{ArgumentBuilder, FromOutput, Record};

use super::Subcommand;
use crate::arguments::MachineSelector;
use crate::client::Client;

/// Options and execution for `vagrant port`.
#[derive(Debug)]
pub struct PortCommand<'a> {
    client: &'a Client,
    machine: MachineSelector,
}

impl<'a> PortCommand<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            machine: MachineSelector::default(),
        }
    }

    /// Query a single machine's forwarded ports.
    #[must_use]
    pub fn machine(mut self, name: impl Into<String>) -> Self {
        self.machine = MachineSelector::name(name);
        self
    }
}

impl Subcommand for PortCommand<'_> {
    type Response = PortResponse;

    fn name(&self) -> &'static str {
        "port"
    }

    fn client(&self) -> &Client {
        self.client
    }

    fn build_args(&self) -> Vec<String> {
        self.machine.build_args()
    }
}

/// One guest→host port forwarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardedPort {
    /// Port inside the guest.
    pub guest: u16,
    /// Port on the host it is reachable at.
    pub host: u16,
}

/// Response of `vagrant port`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortResponse {
    /// Forwardings in output order.
    pub forwarded_ports: Vec<ForwardedPort>,
}

impl FromOutput for PortResponse {
    fn from_output(records: &[Record]) -> Self {
        let mut forwarded_ports = Vec::new();
        for record in records {
            // Records carry the pair as two decimal fields; anything that
            // does not parse as a port is provider noise and skipped.
            if record.kind == "forwarded_port"
                && let (Some(guest), Some(host)) = (record.data.first(), record.data.get(1))
                && let (Ok(guest), Ok(host)) = (guest.parse(), host.parse())
            {
                forwarded_ports.push(ForwardedPort { guest, host });
            }
        }
        Self { forwarded_ports }
    }
}

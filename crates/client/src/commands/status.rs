//! `vagrant status` binding

use std::fmt;

use indexmap::IndexMap;
use vagabond_core::{ArgumentBuilder, FromOutput, Record};

use super::Subcommand;
use crate::arguments::MachineSelector;
use crate::client::Client;

/// Options and execution for `vagrant status`.
#[derive(Debug)]
pub struct StatusCommand<'a> {
    client: &'a Client,
    machine: MachineSelector,
}

impl<'a> StatusCommand<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            machine: MachineSelector::default(),
        }
    }

    /// Query a single machine instead of all of them.
    #[must_use]
    pub fn machine(mut self, name: impl Into<String>) -> Self {
        self.machine = MachineSelector::name(name);
        self
    }
}

impl Subcommand for StatusCommand<'_> {
    type Response = StatusResponse;

    fn name(&self) -> &'static str {
        "status"
    }

    fn client(&self) -> &Client {
        self.client
    }

    fn build_args(&self) -> Vec<String> {
        self.machine.build_args()
    }
}

/// A machine state as reported by vagrant's `state` records.
///
/// The well-known identifiers get their own variants; anything else
/// (provider-specific states like libvirt's `shutoff`) is preserved verbatim
/// in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineState {
    /// `not_created` — the machine has never been brought up.
    NotCreated,
    /// `running`.
    Running,
    /// `poweroff` — halted.
    PowerOff,
    /// `saved` — suspended to disk.
    Saved,
    /// `aborted` — the process died out from under vagrant.
    Aborted,
    /// Any state identifier this library does not recognize.
    Other(String),
}

impl MachineState {
    /// The vagrant state identifier, verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotCreated => "not_created",
            Self::Running => "running",
            Self::PowerOff => "poweroff",
            Self::Saved => "saved",
            Self::Aborted => "aborted",
            Self::Other(state) => state,
        }
    }

    /// True if the machine is up and reachable.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl From<&str> for MachineState {
    fn from(state: &str) -> Self {
        match state {
            "not_created" => Self::NotCreated,
            "running" => Self::Running,
            "poweroff" => Self::PowerOff,
            "saved" => Self::Saved,
            "aborted" => Self::Aborted,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response of `vagrant status`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusResponse {
    /// Machine name → state, in output order.
    pub states: IndexMap<String, MachineState>,
}

impl FromOutput for StatusResponse {
    fn from_output(records: &[Record]) -> Self {
        let mut states = IndexMap::new();
        for record in records {
            if record.kind == "state"
                && let (Some(target), Some(state)) = (&record.target, record.first())
            {
                states.insert(target.clone(), MachineState::from(state));
            }
        }
        Self { states }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use vagabond_core::parse_stream;

    #[test]
    fn test_status_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::with_binary("vagrant", dir.path()).unwrap();
        assert_eq!(
            client.status().machine("web").arguments(),
            vec!["status", "web", "--machine-readable"]
        );
    }

    #[test]
    fn test_response_maps_states_per_machine() {
        let out = "\
1645487495,web,metadata,provider,virtualbox
1645487495,web,state,running
1645487495,web,state-human-short,running
1645487495,db,state,poweroff
";
        let response = StatusResponse::from_output(&parse_stream(out));
        assert_eq!(response.states.len(), 2);
        assert_eq!(response.states["web"], MachineState::Running);
        assert!(response.states["web"].is_running());
        assert_eq!(response.states["db"], MachineState::PowerOff);
    }

    #[test]
    fn test_unknown_state_is_preserved() {
        let response =
            StatusResponse::from_output(&parse_stream("1645487495,web,state,shutoff\n"));
        assert_eq!(
            response.states["web"],
            MachineState::Other("shutoff".to_string())
        );
        assert_eq!(response.states["web"].as_str(), "shutoff");
    }

    #[test]
    fn test_state_display_round_trips_identifier() {
        for state in ["not_created", "running", "poweroff", "saved", "aborted"] {
            assert_eq!(MachineState::from(state).to_string(), state);
        }
    }
}

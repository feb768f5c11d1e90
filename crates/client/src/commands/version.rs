//! `vagrant version` binding

use vagabond_core::{FromOutput, Record};

use super::Subcommand;
use crate::client::Client;

/// Options and execution for `vagrant version`.
#[derive(Debug)]
pub struct VersionCommand<'a> {
    client: &'a Client,
}

impl<'a> VersionCommand<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }
}

impl Subcommand for VersionCommand<'_> {
    type Response = VersionResponse;

    fn name(&self) -> &'static str {
        "version"
    }

    fn client(&self) -> &Client {
        self.client
    }

    fn build_args(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Response of `vagrant version`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionResponse {
    /// Version of the local installation.
    pub installed: Option<String>,
    /// Newest released version, when vagrant could reach its update check.
    pub latest: Option<String>,
}

impl VersionResponse {
    /// True if an upgrade is known to be available.
    #[must_use]
    pub fn upgrade_available(&self) -> bool {
        match (&self.installed, &self.latest) {
            (Some(installed), Some(latest)) => installed != latest,
            _ => false,
        }
    }
}

impl FromOutput for VersionResponse {
    fn from_output(records: &[Record]) -> Self {
        let mut response = Self::default();
        for record in records {
            match record.kind.as_str() {
                "version-installed" => {
                    response.installed = record.first().map(ToString::to_string);
                }
                "version-latest" => {
                    response.latest = record.first().map(ToString::to_string);
                }
                _ => {}
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use vagabond_core::parse_stream;

    #[test]
    fn test_version_takes_no_options() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::with_binary("vagrant", dir.path()).unwrap();
        assert_eq!(
            client.version().arguments(),
            vec!["version", "--machine-readable"]
        );
    }

    #[test]
    fn test_response_reads_both_versions() {
        let out = "\
1645487495,,ui,output,Installed Version: 2.2.19
1645487495,,version-installed,2.2.19
1645487496,,version-latest,2.4.1
";
        let response = VersionResponse::from_output(&parse_stream(out));
        assert_eq!(response.installed.as_deref(), Some("2.2.19"));
        assert_eq!(response.latest.as_deref(), Some("2.4.1"));
        assert!(response.upgrade_available());
    }

    #[test]
    fn test_missing_latest_is_not_an_upgrade() {
        let response =
            VersionResponse::from_output(&parse_stream("1645487495,,version-installed,2.2.19\n"));
        assert_eq!(response.installed.as_deref(), Some("2.2.19"));
        assert!(response.latest.is_none());
        assert!(!response.upgrade_available());
    }
}

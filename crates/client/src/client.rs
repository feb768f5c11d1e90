//! Client handle for the external vagrant tool
//!
//! A [`Client`] is constructed once per Vagrantfile directory and hands out
//! unexecuted command values. It is immutable after construction, so it can
//! be shared freely across threads; each command carries its own state and
//! never shares mutable data with another.

use std::path::{Path, PathBuf};
use std::time::Duration;

use indexmap::IndexMap;
use vagabond_core::{Error, Result};

use crate::commands::{
    DestroyCommand, HaltCommand, PortCommand, ProvisionCommand, ReloadCommand, ResumeCommand,
    SshConfigCommand, StatusCommand, SuspendCommand, UpCommand, VersionCommand,
};

/// Name of the executable discovered on PATH by [`Client::new`].
pub const DEFAULT_BINARY: &str = "vagrant";

/// Handle to a vagrant installation and one Vagrantfile directory.
#[derive(Debug, Clone)]
pub struct Client {
    binary: PathBuf,
    working_dir: PathBuf,
    env: IndexMap<String, String>,
    timeout: Option<Duration>,
}

impl Client {
    /// Create a client for the Vagrantfile in `working_dir`, discovering the
    /// `vagrant` binary on PATH.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BinaryNotFound`] if no `vagrant` executable is on
    /// PATH, or [`Error::WorkingDirNotFound`] if the directory is missing.
    pub fn new(working_dir: impl Into<PathBuf>) -> Result<Self> {
        let binary = which::which(DEFAULT_BINARY).map_err(|_| Error::BinaryNotFound {
            name: DEFAULT_BINARY.to_string(),
        })?;
        Self::with_binary(binary, working_dir)
    }

    /// Create a client with an explicit binary path.
    ///
    /// The path is not validated here; a bad path surfaces as a launch error
    /// when a command executes.
    pub fn with_binary(binary: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Result<Self> {
        let working_dir = working_dir.into();
        if !working_dir.is_dir() {
            return Err(Error::WorkingDirNotFound { path: working_dir });
        }

        Ok(Self {
            binary: binary.into(),
            working_dir,
            env: IndexMap::new(),
            timeout: None,
        })
    }

    /// Add an environment variable for every spawned process.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set a deadline applied to every command run through this client.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolved path of the vagrant binary.
    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// The Vagrantfile directory commands execute in.
    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub(crate) fn env_vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.env.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn deadline(&self) -> Option<Duration> {
        self.timeout
    }

    /// Bring machines up (`vagrant up`).
    #[must_use]
    pub fn up(&self) -> UpCommand<'_> {
        UpCommand::new(self)
    }

    /// Run provisioners on running machines (`vagrant provision`).
    #[must_use]
    pub fn provision(&self) -> ProvisionCommand<'_> {
        ProvisionCommand::new(self)
    }

    /// Restart machines, reloading the Vagrantfile (`vagrant reload`).
    #[must_use]
    pub fn reload(&self) -> ReloadCommand<'_> {
        ReloadCommand::new(self)
    }

    /// Resume suspended machines (`vagrant resume`).
    #[must_use]
    pub fn resume(&self) -> ResumeCommand<'_> {
        ResumeCommand::new(self)
    }

    /// Stop machines (`vagrant halt`).
    #[must_use]
    pub fn halt(&self) -> HaltCommand<'_> {
        HaltCommand::new(self)
    }

    /// Destroy machines and their resources (`vagrant destroy`).
    #[must_use]
    pub fn destroy(&self) -> DestroyCommand<'_> {
        DestroyCommand::new(self)
    }

    /// Suspend machines (`vagrant suspend`).
    #[must_use]
    pub fn suspend(&self) -> SuspendCommand<'_> {
        SuspendCommand::new(self)
    }

    /// Query machine states (`vagrant status`).
    #[must_use]
    pub fn status(&self) -> StatusCommand<'_> {
        StatusCommand::new(self)
    }

    /// Query forwarded ports (`vagrant port`).
    #[must_use]
    pub fn port(&self) -> PortCommand<'_> {
        PortCommand::new(self)
    }

    /// Query OpenSSH connection settings (`vagrant ssh-config`).
    #[must_use]
    pub fn ssh_config(&self) -> SshConfigCommand<'_> {
        SshConfigCommand::new(self)
    }

    /// Query installed and latest versions (`vagrant version`).
    #[must_use]
    pub fn version(&self) -> VersionCommand<'_> {
        VersionCommand::new(self)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_with_binary_rejects_missing_working_dir() {
        let err = Client::with_binary("/usr/bin/vagrant", "/definitely/not/a/dir").unwrap_err();
        assert!(matches!(err, Error::WorkingDirNotFound { .. }));
    }

    #[test]
    fn test_with_binary_accepts_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::with_binary("/usr/bin/vagrant", dir.path()).unwrap();
        assert_eq!(client.working_dir(), dir.path());
        assert_eq!(client.binary(), Path::new("/usr/bin/vagrant"));
    }

    #[test]
    fn test_env_and_timeout_builders() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::with_binary("vagrant", dir.path())
            .unwrap()
            .env("VAGRANT_LOG", "warn")
            .env("VAGRANT_CHECKPOINT_DISABLE", "1")
            .timeout(Duration::from_secs(30));

        let vars: Vec<_> = client.env_vars().collect();
        assert_eq!(
            vars,
            vec![
                ("VAGRANT_LOG", "warn"),
                ("VAGRANT_CHECKPOINT_DISABLE", "1"),
            ]
        );
        assert_eq!(client.deadline(), Some(Duration::from_secs(30)));
    }
}

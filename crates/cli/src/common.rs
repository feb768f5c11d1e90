//! Common utilities and types shared across CLI commands

use std::path::Path;
use std::time::Duration;

use vagabond_client::Client;

use crate::config::Config;
use crate::error::{CommandError, Result};

/// Runtime context for CLI commands
///
/// Holds the loaded configuration and the [`Client`] every command executes
/// through, so commands receive one context instead of a parameter list.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Loaded configuration (file defaults, possibly empty)
    pub config: Config,
    /// Client constructed from flags, environment, and config
    pub client: Client,
}

impl RuntimeContext {
    /// Build the context from CLI-level overrides and the loaded config.
    ///
    /// Resolution per setting is flag > config file > default: the working
    /// directory falls back to the current directory, the binary to PATH
    /// discovery.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined, the
    /// Vagrantfile directory is missing, or the vagrant binary cannot be
    /// found.
    pub fn new(
        config: Config,
        dir: Option<&Path>,
        binary: Option<&Path>,
        timeout: Option<u64>,
    ) -> Result<Self> {
        let working_dir = match dir.or(config.dir.as_deref()) {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().map_err(CommandError::WorkingDir)?,
        };

        let mut client = match binary.or(config.binary.as_deref()) {
            Some(binary) => Client::with_binary(binary, &working_dir)?,
            None => Client::new(&working_dir)?,
        };

        for (key, value) in &config.env {
            client = client.env(key, value);
        }
        if let Some(seconds) = timeout.or(config.timeout) {
            client = client.timeout(Duration::from_secs(seconds));
        }

        Ok(Self { config, client })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            binary: Some(PathBuf::from("/from/config/vagrant")),
            timeout: Some(600),
            ..Config::default()
        };

        let context = RuntimeContext::new(
            config,
            Some(dir.path()),
            Some(Path::new("/from/flag/vagrant")),
            Some(30),
        )
        .unwrap();

        assert_eq!(context.client.binary(), Path::new("/from/flag/vagrant"));
        assert_eq!(context.client.working_dir(), dir.path());
    }

    #[test]
    fn test_config_binary_used_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            binary: Some(PathBuf::from("/from/config/vagrant")),
            dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };

        let context = RuntimeContext::new(config, None, None, None).unwrap();
        assert_eq!(context.client.binary(), Path::new("/from/config/vagrant"));
    }

    #[test]
    fn test_missing_working_dir_fails() {
        let err = RuntimeContext::new(
            Config::default(),
            Some(Path::new("/definitely/not/here")),
            Some(Path::new("/usr/bin/vagrant")),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CommandError::Client(vagabond_client::Error::WorkingDirNotFound { .. })
        ));
    }
}

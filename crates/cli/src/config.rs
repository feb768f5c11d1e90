//! Configuration file support
//!
//! Optional TOML config at `~/.config/vagabond/config.toml`. A missing file
//! is fine (everything has a flag or a default); a file that exists but does
//! not parse is an error, since silently ignoring it would be worse.
//!
//! Precedence for every setting: CLI flag > environment variable > config
//! file > discovery/default.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{CommandError, Result};

/// Settings read from the config file. All optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Path to the vagrant binary, overriding PATH discovery.
    pub binary: Option<PathBuf>,
    /// Default Vagrantfile directory when `--dir` is not given.
    pub dir: Option<PathBuf>,
    /// Deadline in seconds applied to every vagrant invocation.
    pub timeout: Option<u64>,
    /// Extra environment variables for every vagrant invocation.
    pub env: IndexMap<String, String>,
}

impl Config {
    /// Default config file location: `~/.config/vagabond/config.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("vagabond").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist and parse. Without one,
    /// the default location is tried and a missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if required {
                return Err(CommandError::config(
                    path.clone(),
                    std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                ));
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text =
            fs::read_to_string(&path).map_err(|e| CommandError::config(path.clone(), e))?;
        let config = toml::from_str(&text).map_err(|e| CommandError::config(path.clone(), e))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
binary = "/opt/vagrant/bin/vagrant"
dir = "/srv/machines"
timeout = 600

[env]
VAGRANT_DEFAULT_PROVIDER = "libvirt"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(
            config.binary.as_deref(),
            Some(Path::new("/opt/vagrant/bin/vagrant"))
        );
        assert_eq!(config.dir.as_deref(), Some(Path::new("/srv/machines")));
        assert_eq!(config.timeout, Some(600));
        assert_eq!(
            config.env.get("VAGRANT_DEFAULT_PROVIDER").map(String::as_str),
            Some("libvirt")
        );
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout = \"not a number\"").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }
}

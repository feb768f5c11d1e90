//! Shared process runner for subcommand bindings
//!
//! Every binding funnels through the same path: build the argument vector,
//! spawn `vagrant` via duct with captured output, reap it, feed the record
//! stream to the error sink, and either return the typed response or the
//! populated failure.

use std::marker::PhantomData;
use std::time::Duration;

use vagabond_core::{Error, ErrorResponse, FromOutput, Result, parse_stream};

use crate::client::Client;

/// The machine-readable flag is part of the runner contract: every
/// invocation appends it so the output stream is parseable.
const MACHINE_READABLE: &str = "--machine-readable";

/// Compose the full argument vector for a subcommand invocation.
///
/// Pure, so commands can expose it for pre-execution inspection: the vector
/// returned here is exactly what the spawned process receives.
pub(crate) fn compose_argv(subcommand: &str, args: Vec<String>) -> Vec<String> {
    let mut argv = Vec::with_capacity(args.len() + 2);
    argv.push(subcommand.to_string());
    argv.extend(args);
    argv.push(MACHINE_READABLE.to_string());
    argv
}

/// A prepared, not-yet-started invocation.
pub(crate) struct Invocation<'a> {
    client: &'a Client,
    argv: Vec<String>,
}

impl<'a> Invocation<'a> {
    pub(crate) fn prepare(client: &'a Client, subcommand: &str, args: Vec<String>) -> Self {
        Self {
            client,
            argv: compose_argv(subcommand, args),
        }
    }

    /// Spawn the process without blocking.
    ///
    /// A spawn failure (missing or non-executable binary) is a local
    /// preparation error: the external tool never ran and the error sink
    /// stays empty.
    pub(crate) fn start<R: FromOutput>(self) -> Result<Running<R>> {
        let program = self.client.binary();

        tracing::debug!(
            program = %program.display(),
            args = ?self.argv,
            dir = %self.client.working_dir().display(),
            "starting vagrant"
        );

        let mut expression = duct::cmd(program, &self.argv)
            .dir(self.client.working_dir())
            .stdout_capture()
            .stderr_capture()
            .unchecked();
        for (key, value) in self.client.env_vars() {
            expression = expression.env(key, value);
        }

        let handle = expression.start().map_err(|source| Error::Launch {
            program: program.display().to_string(),
            source,
        })?;

        Ok(Running {
            handle,
            timeout: self.client.deadline(),
            _response: PhantomData,
        })
    }
}

/// A started vagrant process.
///
/// Obtained from a command's `start()`; call [`wait`](Running::wait) to reap
/// the process and obtain the terminal result. Dropping the handle without
/// waiting leaves the process running to completion on its own.
pub struct Running<R> {
    handle: duct::Handle,
    timeout: Option<Duration>,
    _response: PhantomData<R>,
}

impl<R: FromOutput> Running<R> {
    /// Block until the process exits, then classify and parse.
    ///
    /// Failure classification order: timeout, then `error-exit` records,
    /// then a non-zero exit status. Only a zero exit with no error records
    /// produces a response.
    pub fn wait(self) -> Result<R> {
        let (stdout, stderr, status) = match self.timeout {
            Some(limit) => match self.handle.wait_timeout(limit) {
                Ok(Some(output)) => (
                    output.stdout.clone(),
                    output.stderr.clone(),
                    output.status,
                ),
                Ok(None) => {
                    // Deadline passed with the process still alive; reap it
                    // so nothing lingers.
                    let _ = self.handle.kill();
                    return Err(Error::Timeout {
                        seconds: limit.as_secs(),
                    });
                }
                Err(source) => return Err(Error::Io(source)),
            },
            None => {
                let output = self.handle.wait().map_err(Error::Io)?;
                (
                    output.stdout.clone(),
                    output.stderr.clone(),
                    output.status,
                )
            }
        };

        let stdout = String::from_utf8_lossy(&stdout);
        let records = parse_stream(&stdout);

        let mut sink = ErrorResponse::default();
        for record in &records {
            sink.observe(record);
        }

        // An error-exit record is authoritative even on a zero exit status.
        if !status.success() || !sink.is_empty() {
            sink.exit_code = status.code();
            sink.stderr = String::from_utf8_lossy(&stderr).into_owned();
            tracing::debug!(error = %sink, "vagrant reported failure");
            return Err(Error::Command(sink));
        }

        tracing::debug!(records = records.len(), "vagrant completed");
        Ok(R::from_output(&records))
    }

    /// Terminate the process without waiting for it to finish.
    pub fn kill(self) -> Result<()> {
        self.handle.kill().map_err(Error::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_argv_bare_subcommand() {
        assert_eq!(
            compose_argv("provision", Vec::new()),
            vec!["provision", "--machine-readable"]
        );
    }

    #[test]
    fn test_compose_argv_keeps_argument_order() {
        let args = vec!["web".to_string(), "--provision-with".to_string(), "a,b".to_string()];
        assert_eq!(
            compose_argv("up", args),
            vec!["up", "web", "--provision-with", "a,b", "--machine-readable"]
        );
    }

    #[test]
    fn test_compose_argv_has_no_empty_tokens() {
        for token in compose_argv("status", Vec::new()) {
            assert!(!token.is_empty());
        }
    }
}

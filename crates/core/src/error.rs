//! Base error types for vagabond
//!
//! Two failure classes exist when driving an external tool: local
//! preparation failures (the process never ran) and remote execution
//! failures (the process ran and reported an error). Preparation failures
//! are the `BinaryNotFound`/`WorkingDirNotFound`/`Launch` variants; execution
//! failures surface as `Command`, carrying the [`ErrorResponse`] sink
//! populated from the run.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::machine::Record;

/// Base error type for vagabond operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The vagrant executable could not be found on PATH
    #[error("`{name}` executable not found on PATH")]
    BinaryNotFound { name: String },

    /// The Vagrantfile directory does not exist
    #[error("working directory not found: {}", path.display())]
    WorkingDirNotFound { path: PathBuf },

    /// The external process could not be started
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external process ran and reported failure
    #[error("vagrant command failed: {0}")]
    Command(ErrorResponse),

    /// The external process exceeded the configured deadline
    #[error("vagrant command timed out after {seconds} seconds")]
    Timeout { seconds: u64 },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Structured failure information captured from a vagrant run.
///
/// This is the output sink of an invocation: it starts empty, absorbs
/// `error-exit` records while output is consumed, and is completed with the
/// exit code and captured stderr when the process is reaped. A run that
/// failed before the process started leaves the sink empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Vagrant error class from the `error-exit` record,
    /// e.g. `Vagrant::Errors::VMNotCreated`.
    pub kind: Option<String>,
    /// Human-readable error text, unescaped.
    pub message: Option<String>,
    /// Process exit code, if the process exited normally.
    pub exit_code: Option<i32>,
    /// Captured stderr, verbatim.
    pub stderr: String,
}

impl ErrorResponse {
    /// Absorb one machine-readable record.
    ///
    /// Only `error-exit` and `error` records contribute; everything else is
    /// ignored. The first record sets `kind`/`message`; messages from later
    /// error records are appended.
    pub fn observe(&mut self, record: &Record) {
        match record.kind.as_str() {
            "error-exit" => {
                if self.kind.is_none() {
                    self.kind = record.first().map(ToString::to_string);
                }
                if let Some(text) = record.data.get(1) {
                    self.push_message(text);
                }
            }
            "error" => {
                if let Some(text) = record.first() {
                    self.push_message(text);
                }
            }
            _ => {}
        }
    }

    /// True if nothing has been recorded, the state after a preparation
    /// failure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.message.is_none()
            && self.exit_code.is_none()
            && self.stderr.is_empty()
    }

    fn push_message(&mut self, text: &str) {
        match &mut self.message {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(text);
            }
            None => self.message = Some(text.to_string()),
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Render the most specific information available.
        if let Some(kind) = &self.kind {
            write!(f, "{kind}: ")?;
        }
        if let Some(message) = &self.message {
            return write!(f, "{}", message.trim_end());
        }
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return write!(f, "{stderr}");
        }
        match self.exit_code {
            Some(code) => write!(f, "exited with status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn record(line: &str) -> Record {
        Record::parse(line).unwrap()
    }

    #[test]
    fn test_fresh_sink_is_empty() {
        assert!(ErrorResponse::default().is_empty());
    }

    #[test]
    fn test_observe_error_exit() {
        let mut sink = ErrorResponse::default();
        sink.observe(&record(
            "1,default,error-exit,Vagrant::Errors::VMNotCreated,The machine has not been created",
        ));

        assert_eq!(sink.kind.as_deref(), Some("Vagrant::Errors::VMNotCreated"));
        assert_eq!(
            sink.message.as_deref(),
            Some("The machine has not been created")
        );
        assert!(!sink.is_empty());
    }

    #[test]
    fn test_observe_keeps_first_kind_appends_messages() {
        let mut sink = ErrorResponse::default();
        sink.observe(&record("1,default,error-exit,Kind::First,first message"));
        sink.observe(&record("2,default,error-exit,Kind::Second,second message"));

        assert_eq!(sink.kind.as_deref(), Some("Kind::First"));
        assert_eq!(
            sink.message.as_deref(),
            Some("first message\nsecond message")
        );
    }

    #[test]
    fn test_observe_ignores_unrelated_records() {
        let mut sink = ErrorResponse::default();
        sink.observe(&record("1,default,state,running"));
        sink.observe(&record("1,default,ui,output,hello"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_display_prefers_message_over_stderr() {
        let sink = ErrorResponse {
            kind: Some("Vagrant::Errors::Example".into()),
            message: Some("it broke".into()),
            exit_code: Some(1),
            stderr: "noise".into(),
        };
        assert_eq!(sink.to_string(), "Vagrant::Errors::Example: it broke");
    }

    #[test]
    fn test_display_falls_back_to_stderr_then_status() {
        let sink = ErrorResponse {
            stderr: "  something went wrong\n".into(),
            exit_code: Some(1),
            ..ErrorResponse::default()
        };
        assert_eq!(sink.to_string(), "something went wrong");

        let sink = ErrorResponse {
            exit_code: Some(127),
            ..ErrorResponse::default()
        };
        assert_eq!(sink.to_string(), "exited with status 127");

        let sink = ErrorResponse::default();
        assert_eq!(sink.to_string(), "terminated by signal");
    }

    #[test]
    fn test_command_error_wraps_response() {
        let sink = ErrorResponse {
            message: Some("boom".into()),
            ..ErrorResponse::default()
        };
        let err = Error::Command(sink);
        assert!(err.to_string().contains("boom"));
    }
}

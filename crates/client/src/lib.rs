//! Client library for the HashiCorp Vagrant CLI
//!
//! Drives the external `vagrant` tool by shelling out to it with
//! `--machine-readable`, capturing the record stream and stderr, and parsing
//! per-subcommand structured responses.
//!
//! A [`Client`] holds everything an invocation needs (binary path, the
//! Vagrantfile directory, environment, optional timeout) and hands out one
//! unexecuted command value per subcommand. Commands are single-use: both
//! execution modes consume the value.
//!
//! ```no_run
//! use vagabond_client::{Client, commands::Subcommand};
//!
//! let client = Client::new("/path/to/vagrantfile-dir")?;
//!
//! // Blocking execution.
//! let status = client.status().run()?;
//! for (machine, state) in &status.states {
//!     println!("{machine}: {state}");
//! }
//!
//! // Split execution: start, do other work, then reap.
//! let running = client.provision().provisioner("shell").start()?;
//! let () = running.wait()?;
//! # Ok::<(), vagabond_client::Error>(())
//! ```

pub mod arguments;
pub mod client;
pub mod commands;
mod runner;

pub use client::Client;
pub use commands::Subcommand;
pub use runner::Running;

// The core crate owns the shared error and wire types; re-export them so
// dependents only need this crate.
pub use vagabond_core::{
    ArgumentBuilder, Error, ErrorResponse, FromOutput, Record, Result, parse_stream,
};

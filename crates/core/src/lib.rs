//! Core types for the vagabond Vagrant client
//!
//! This is the foundation crate (Layer 0) that the client and CLI crates
//! depend on. It provides:
//! - Base error types and the `ErrorResponse` output sink
//! - The machine-readable wire format (`Record` parsing and unescaping)
//! - Capability traits (`ArgumentBuilder`, `FromOutput`)
//!
//! This crate has no dependencies on other vagabond crates and performs no
//! I/O: everything here is pure data handling.

pub mod error;
pub mod machine;
pub mod traits;

pub use error::{Error, ErrorResponse, Result};
pub use machine::{Record, parse_stream};
pub use traits::{ArgumentBuilder, FromOutput};

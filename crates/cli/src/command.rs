//! Command trait for vagabond CLI
//!
//! All CLI subcommands implement this trait, giving them a uniform execution
//! interface over a shared [`RuntimeContext`].

use crate::common::RuntimeContext;
use crate::error::Result;

/// Trait for all vagabond CLI commands
///
/// The `execute` method receives a [`RuntimeContext`] with the loaded
/// configuration and the constructed client. Commands specify their return
/// type via the `Output` associated type; most return `()`.
pub trait Command {
    /// The type returned by this command
    type Output;

    /// Execute the command with the given runtime context
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` if the command fails. Error messages should
    /// be descriptive enough for the user to understand what went wrong.
    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output>;
}

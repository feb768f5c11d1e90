//! Capability traits for command bindings
//!
//! A subcommand binding is composed from two small capabilities: building its
//! argument fragment and turning the captured record stream into a typed
//! response. Both are defined as explicit traits so bindings state their
//! capabilities instead of inheriting them structurally.

use crate::machine::Record;

/// Builds a command-line argument fragment.
///
/// Implementations must be pure: no side effects, and repeated calls before
/// execution produce identical output. This is what makes pre-execution
/// inspection of a command's arguments trustworthy.
pub trait ArgumentBuilder {
    /// Produce this capability's contribution to the argument list.
    ///
    /// An unconfigured capability contributes nothing (an empty vector),
    /// never empty tokens.
    fn build_args(&self) -> Vec<String>;
}

impl<T: ArgumentBuilder> ArgumentBuilder for &T {
    fn build_args(&self) -> Vec<String> {
        (*self).build_args()
    }
}

/// Builds a typed response from a captured record stream.
///
/// Construction is pure and total: unknown or missing records produce a
/// default-shaped response rather than an error, since execution failures
/// are reported separately through the error sink.
pub trait FromOutput: Sized {
    /// Build the response from the records of a successful run.
    fn from_output(records: &[Record]) -> Self;
}

/// Commands without a structured response.
impl FromOutput for () {
    fn from_output(_records: &[Record]) -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<String>);

    impl ArgumentBuilder for Fixed {
        fn build_args(&self) -> Vec<String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_build_args_through_reference() {
        let fixed = Fixed(vec!["--force".to_string()]);
        let by_ref: &Fixed = &fixed;
        assert_eq!(by_ref.build_args(), vec!["--force"]);
    }

    #[test]
    fn test_unit_response_ignores_records() {
        let records = crate::machine::parse_stream("1,default,state,running\n");
        let () = <() as FromOutput>::from_output(&records);
    }
}

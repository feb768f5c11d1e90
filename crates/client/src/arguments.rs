//! Argument-builder capabilities shared across subcommand bindings
//!
//! Each capability holds a small piece of configurable state and translates
//! it into command-line tokens at prepare time. Builders are pure: repeated
//! calls produce identical output, and an unconfigured capability contributes
//! nothing.

use vagabond_core::ArgumentBuilder;

/// Ordered selection of named provisioners.
///
/// Translates into `--provision-with name,name,...`. Names are kept exactly
/// as configured: order preserved, duplicates kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionerList {
    names: Vec<String>,
}

impl ProvisionerList {
    /// Append one provisioner name to the selection.
    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Append several provisioner names, in the given order.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
    }

    /// The configured names, in order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// True if no provisioner has been selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ArgumentBuilder for ProvisionerList {
    fn build_args(&self) -> Vec<String> {
        if self.names.is_empty() {
            return Vec::new();
        }
        vec!["--provision-with".to_string(), self.names.join(",")]
    }
}

/// Tri-state provisioning toggle.
///
/// Unset defers to vagrant's own default for the subcommand; set translates
/// into `--provision` or `--no-provision`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProvisionToggle(Option<bool>);

impl ProvisionToggle {
    /// Force provisioning on or off.
    pub fn set(&mut self, enabled: bool) {
        self.0 = Some(enabled);
    }
}

impl ArgumentBuilder for ProvisionToggle {
    fn build_args(&self) -> Vec<String> {
        match self.0 {
            Some(true) => vec!["--provision".to_string()],
            Some(false) => vec!["--no-provision".to_string()],
            None => Vec::new(),
        }
    }
}

/// Optional target machine, appended as a positional name token.
///
/// Unset means the subcommand applies to every machine in the Vagrantfile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineSelector(Option<String>);

impl MachineSelector {
    /// Select a single machine by name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    /// The selected machine name, if any.
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl ArgumentBuilder for MachineSelector {
    fn build_args(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provisioner_list_empty_contributes_nothing() {
        let list = ProvisionerList::default();
        assert!(list.build_args().is_empty());
    }

    #[test]
    fn test_provisioner_list_keeps_order_and_duplicates() {
        let mut list = ProvisionerList::default();
        list.push("shell");
        list.extend(["ansible", "shell"]);
        assert_eq!(list.names(), ["shell", "ansible", "shell"]);
        assert_eq!(
            list.build_args(),
            vec!["--provision-with", "shell,ansible,shell"]
        );
    }

    #[test]
    fn test_provisioner_list_is_idempotent() {
        let mut list = ProvisionerList::default();
        list.push("chef");
        assert_eq!(list.build_args(), list.build_args());
    }

    #[test]
    fn test_provision_toggle_states() {
        let mut toggle = ProvisionToggle::default();
        assert!(toggle.build_args().is_empty());

        toggle.set(true);
        assert_eq!(toggle.build_args(), vec!["--provision"]);

        toggle.set(false);
        assert_eq!(toggle.build_args(), vec!["--no-provision"]);
    }

    #[test]
    fn test_machine_selector() {
        assert!(MachineSelector::default().build_args().is_empty());
        assert!(MachineSelector::default().get().is_none());

        let selector = MachineSelector::name("web");
        assert_eq!(selector.get(), Some("web"));
        assert_eq!(selector.build_args(), vec!["web"]);
    }
}

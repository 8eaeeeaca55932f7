//! Registry mapping suite names to ordered check entries
//!
//! The registry is an explicitly owned value: the application builds one at
//! startup, registers every check into the suites it belongs to, and hands a
//! reference to the runner per request. Registration order within a suite is
//! preserved and defines report and log ordering.

use indexmap::IndexMap;

use crate::check::Check;

/// A check registered into a suite, under a human-readable description
pub struct RegisteredCheck {
    /// Description shown in reports and consolidated log records
    pub description: String,
    /// The probe itself
    pub check: Box<dyn Check>,
}

/// Ordered collection of named check suites
#[derive(Default)]
pub struct CheckRegistry {
    suites: IndexMap<String, Vec<RegisteredCheck>>,
}

impl CheckRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a check to the named suite, creating the suite if absent
    ///
    /// No duplicate detection is performed: registering the same check twice
    /// runs it twice.
    pub fn register(
        &mut self,
        suite: impl Into<String>,
        description: impl Into<String>,
        check: impl Check + 'static,
    ) {
        self.suites
            .entry(suite.into())
            .or_default()
            .push(RegisteredCheck {
                description: description.into(),
                check: Box::new(check),
            });
    }

    /// Returns the entries of the named suite in registration order
    ///
    /// Unknown suite names yield an empty slice, never an error.
    pub fn entries_for(&self, suite: &str) -> &[RegisteredCheck] {
        self.suites.get(suite).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the registered suite names in registration order
    pub fn suite_names(&self) -> impl Iterator<Item = &str> {
        self.suites.keys().map(String::as_str)
    }

    /// Clears every suite
    ///
    /// Intended for test teardown, not production use: after a reset every
    /// suite name is unknown until re-populated.
    pub fn reset(&mut self) {
        self.suites.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Severity;

    struct NoopCheck;

    impl Check for NoopCheck {
        fn check(&self) -> anyhow::Result<(Severity, String)> {
            Ok((Severity::Ok, String::new()))
        }
    }

    #[test]
    fn register_preserves_order() {
        let mut registry = CheckRegistry::new();
        registry.register("health", "first", NoopCheck);
        registry.register("health", "second", NoopCheck);
        registry.register("health", "third", NoopCheck);

        let descriptions: Vec<&str> = registry
            .entries_for("health")
            .iter()
            .map(|entry| entry.description.as_str())
            .collect();
        assert_eq!(descriptions, ["first", "second", "third"]);
    }

    #[test]
    fn unknown_suite_is_empty_not_an_error() {
        let registry = CheckRegistry::new();
        assert!(registry.entries_for("nope").is_empty());
    }

    #[test]
    fn reset_forgets_every_suite() {
        let mut registry = CheckRegistry::new();
        registry.register("health", "probe", NoopCheck);
        registry.register("smoke", "probe", NoopCheck);

        registry.reset();

        assert!(registry.entries_for("health").is_empty());
        assert!(registry.entries_for("smoke").is_empty());
        assert_eq!(registry.suite_names().count(), 0);
    }

    #[test]
    fn re_registration_appends() {
        let mut registry = CheckRegistry::new();
        registry.register("health", "probe", NoopCheck);
        registry.register("health", "probe", NoopCheck);
        assert_eq!(registry.entries_for("health").len(), 2);
    }
}

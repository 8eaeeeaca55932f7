//! Core check contract: severity levels, results, and the probe trait

use serde::{Deserialize, Serialize};

/// Severity of a single check outcome
///
/// The derived ordering (`Ok < Warning < Error`) is what suite aggregation
/// reduces over: the overall severity of a run is the maximum across results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Check passed
    Ok,
    /// Check passed but found something worth surfacing
    Warning,
    /// Check failed
    Error,
}

impl Severity {
    /// Returns true if this severity does not fail a run (Ok or Warning)
    pub fn is_ok(&self) -> bool {
        matches!(self, Severity::Ok | Severity::Warning)
    }

    /// Returns true if this severity fails a run
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns the severity as an uppercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Returns the severity as a colored label for terminal output
    pub fn as_colored_str(&self) -> String {
        use colored::Colorize;
        match self {
            Severity::Ok => "OK".green().to_string(),
            Severity::Warning => "WARNING".yellow().to_string(),
            Severity::Error => "ERROR".red().to_string(),
        }
    }
}

/// Result of running a single registered check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Description the check was registered under
    pub description: String,
    /// The severity of the outcome
    pub severity: Severity,
    /// Message describing the outcome
    pub message: String,
}

impl CheckResult {
    /// Creates a result for the given registered description
    pub fn new(
        description: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            severity,
            message: message.into(),
        }
    }
}

/// Trait for health probes
///
/// A probe either returns an outcome (severity plus message) or fails with an
/// error. The runner never lets that error escape: a faulting check is
/// recorded as an [`Severity::Error`] result and the rest of the suite still
/// runs.
pub trait Check: Send + Sync {
    /// Perform the probe
    fn check(&self) -> anyhow::Result<(Severity, String)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_ok_below_warning_below_error() {
        assert!(Severity::Ok < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert_eq!(
            [Severity::Warning, Severity::Ok, Severity::Error]
                .into_iter()
                .max(),
            Some(Severity::Error)
        );
    }

    #[test]
    fn severity_labels() {
        assert_eq!(Severity::Ok.as_str(), "OK");
        assert_eq!(Severity::Warning.as_str(), "WARNING");
        assert_eq!(Severity::Error.as_str(), "ERROR");
        assert!(Severity::Warning.is_ok());
        assert!(Severity::Error.is_error());
    }
}

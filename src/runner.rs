//! Runner orchestrating suite execution and result aggregation

use crate::check::{CheckResult, Severity};
use crate::registry::CheckRegistry;

/// Results from running a suite, reduced to one overall severity
#[derive(Debug, Clone)]
pub struct SuiteReport {
    /// Individual check results in registration order
    pub results: Vec<CheckResult>,
    /// Maximum severity across results; `Ok` for an empty suite
    pub overall: Severity,
    /// Total number of checks run
    pub total: usize,
    /// Number of `Ok` results
    pub passed: usize,
    /// Number of `Warning` results
    pub warned: usize,
    /// Number of `Error` results
    pub failed: usize,
}

impl SuiteReport {
    /// Builds a report from an ordered result list
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let mut passed = 0;
        let mut warned = 0;
        let mut failed = 0;

        for result in &results {
            match result.severity {
                Severity::Ok => passed += 1,
                Severity::Warning => warned += 1,
                Severity::Error => failed += 1,
            }
        }

        let overall = results
            .iter()
            .map(|result| result.severity)
            .max()
            .unwrap_or(Severity::Ok);

        let total = results.len();

        Self {
            results,
            overall,
            total,
            passed,
            warned,
            failed,
        }
    }

    /// Returns true if no check failed (warnings allowed)
    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    /// Returns true if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Returns the results carrying the given severity, in registration order
    pub fn results_with(&self, severity: Severity) -> impl Iterator<Item = &CheckResult> {
        self.results
            .iter()
            .filter(move |result| result.severity == severity)
    }

    /// Returns the HTTP status for this report
    ///
    /// `Ok` maps to 200; any warning or error maps to the configured error
    /// status.
    pub fn http_status(&self, error_code: u16) -> u16 {
        if self.overall == Severity::Ok {
            200
        } else {
            error_code
        }
    }

    /// Returns the appropriate process exit code for this report
    /// 0 = all ok, 1 = any error, 2 = any warning (but no error)
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            1
        } else if self.warned > 0 {
            2
        } else {
            0
        }
    }
}

/// Executes every check of a named suite
pub struct CheckRunner;

impl CheckRunner {
    /// Runs the named suite and aggregates the results
    ///
    /// Checks run sequentially in registration order. A check that returns an
    /// error instead of an outcome is recorded as an `Error` result with the
    /// error's description as message; the remaining checks still run.
    pub fn run(registry: &CheckRegistry, suite: &str) -> SuiteReport {
        let mut results = Vec::new();

        for entry in registry.entries_for(suite) {
            let result = match entry.check.check() {
                Ok((severity, message)) => {
                    CheckResult::new(&entry.description, severity, message)
                }
                Err(fault) => {
                    CheckResult::new(&entry.description, Severity::Error, format!("{fault:#}"))
                }
            };
            results.push(result);
        }

        SuiteReport::from_results(results)
    }
}

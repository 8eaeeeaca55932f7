//! Selective, consolidated logging of suite results
//!
//! Operators tune noise independently for warnings and errors through two
//! opt-in switches. A run emits at most one log record per non-OK severity
//! present, most severe first, no matter how many checks share a severity.

use crate::check::Severity;
use crate::runner::SuiteReport;

/// Level of an emitted log record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// A suite produced warnings
    Warning,
    /// A suite produced errors
    Alert,
}

/// Sink for consolidated suite log records
pub trait LogSink {
    /// Accepts one consolidated record
    fn log(&mut self, level: LogLevel, message: &str);
}

/// Sink forwarding records to the `tracing` backend
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&mut self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Alert => tracing::error!(target: "healthgate", "{message}"),
            LogLevel::Warning => tracing::warn!(target: "healthgate", "{message}"),
        }
    }
}

/// Log emission switches, both off by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogPolicy {
    /// Emit a warning record when a run produced warnings
    pub log_on_warning: bool,
    /// Emit an alert record when a run produced errors
    pub log_on_error: bool,
}

impl LogPolicy {
    /// Creates a policy with both switches off
    pub fn new(log_on_warning: bool, log_on_error: bool) -> Self {
        Self {
            log_on_warning,
            log_on_error,
        }
    }

    /// Emits consolidated records for the report, most severe first
    ///
    /// OK results never log. Each enabled severity present in the report
    /// yields exactly one record summarizing all matching checks, so a suite
    /// with many failing checks produces one alert, not a flood.
    pub fn emit(&self, report: &SuiteReport, sink: &mut dyn LogSink) {
        let passes = [
            (Severity::Error, self.log_on_error, LogLevel::Alert),
            (Severity::Warning, self.log_on_warning, LogLevel::Warning),
        ];

        for (severity, enabled, level) in passes {
            if !enabled {
                continue;
            }

            let lines: Vec<String> = report
                .results_with(severity)
                .map(|result| format!("{}: {}", result.description, result.message))
                .collect();

            if lines.is_empty() {
                continue;
            }

            sink.log(level, &lines.join("; "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckResult;

    /// Records every call instead of logging
    pub struct RecordingSink {
        pub records: Vec<(LogLevel, String)>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }
    }

    impl LogSink for RecordingSink {
        fn log(&mut self, level: LogLevel, message: &str) {
            self.records.push((level, message.to_string()));
        }
    }

    fn report(severities: &[(Severity, &str)]) -> SuiteReport {
        SuiteReport::from_results(
            severities
                .iter()
                .enumerate()
                .map(|(i, (severity, message))| {
                    CheckResult::new(format!("check-{i}"), *severity, *message)
                })
                .collect(),
        )
    }

    #[test]
    fn nothing_logs_when_both_switches_off() {
        let report = report(&[(Severity::Error, "down"), (Severity::Warning, "slow")]);
        let mut sink = RecordingSink::new();

        LogPolicy::default().emit(&report, &mut sink);

        assert!(sink.records.is_empty());
    }

    #[test]
    fn ok_results_never_log() {
        let report = report(&[(Severity::Ok, "fine"), (Severity::Ok, "also fine")]);
        let mut sink = RecordingSink::new();

        LogPolicy::new(true, true).emit(&report, &mut sink);

        assert!(sink.records.is_empty());
    }

    #[test]
    fn one_consolidated_record_per_severity_most_severe_first() {
        let report = report(&[
            (Severity::Warning, "slow"),
            (Severity::Error, "down"),
            (Severity::Error, "also down"),
            (Severity::Warning, "also slow"),
        ]);
        let mut sink = RecordingSink::new();

        LogPolicy::new(true, true).emit(&report, &mut sink);

        assert_eq!(sink.records.len(), 2);
        assert_eq!(sink.records[0].0, LogLevel::Alert);
        assert_eq!(sink.records[1].0, LogLevel::Warning);
        assert!(sink.records[0].1.contains("check-1: down"));
        assert!(sink.records[0].1.contains("check-2: also down"));
        assert!(sink.records[1].1.contains("check-0: slow"));
        assert!(sink.records[1].1.contains("check-3: also slow"));
    }

    #[test]
    fn warning_switch_alone_ignores_errors() {
        let report = report(&[(Severity::Warning, "slow"), (Severity::Error, "down")]);
        let mut sink = RecordingSink::new();

        LogPolicy::new(true, false).emit(&report, &mut sink);

        assert_eq!(sink.records.len(), 1);
        assert_eq!(sink.records[0].0, LogLevel::Warning);
    }

    #[test]
    fn error_switch_alone_ignores_warnings() {
        let report = report(&[(Severity::Warning, "slow"), (Severity::Error, "down")]);
        let mut sink = RecordingSink::new();

        LogPolicy::new(false, true).emit(&report, &mut sink);

        assert_eq!(sink.records.len(), 1);
        assert_eq!(sink.records[0].0, LogLevel::Alert);
    }
}

//! Entry point composing the gate, runner, logging policy, and reporter
//!
//! A denied request is answered before any check runs; nothing about the
//! suite's results leaks past the gate.

use crate::gate::{AccessDecision, AccessGate, DenyKind, GateRequest};
use crate::logging::{LogPolicy, LogSink};
use crate::registry::CheckRegistry;
use crate::reporter;
use crate::runner::CheckRunner;

/// Authentication scheme named in a challenge response
pub const CHALLENGE_SCHEME: &str = "Basic";

/// Response of the health-check entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointResponse {
    /// Checks ran; render the report with the given status
    Report {
        /// 200 when the suite is fully OK, the configured error code otherwise
        code: u16,
        /// Plain-text rendering of the suite report
        body: String,
    },
    /// Denied; the caller must retry with the named credential scheme
    Unauthorized {
        /// Scheme for the WWW-Authenticate header
        scheme: &'static str,
    },
    /// Denied; the caller must authenticate through the session login flow
    Redirect {
        /// Login location to redirect to
        location: String,
    },
}

impl EndpointResponse {
    /// Returns the HTTP status this response maps to
    pub fn status_code(&self) -> u16 {
        match self {
            EndpointResponse::Report { code, .. } => *code,
            EndpointResponse::Unauthorized { .. } => 401,
            EndpointResponse::Redirect { .. } => 302,
        }
    }
}

/// The health-check entry point for one named suite
#[derive(Debug, Clone)]
pub struct HealthEndpoint {
    suite: String,
    title: String,
    error_code: u16,
    login_path: String,
}

impl HealthEndpoint {
    /// Creates an entry point for the named suite
    pub fn new(suite: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            title: title.into(),
            error_code: 500,
            login_path: "/login".to_string(),
        }
    }

    /// Sets the status returned when the suite is not fully OK
    pub fn with_error_code(mut self, code: u16) -> Self {
        self.error_code = code;
        self
    }

    /// Sets the login location used in redirect denials
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Returns the suite this entry point runs
    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Handles one request: gate first, then run, log, and render
    pub fn handle(
        &self,
        gate: &AccessGate,
        request: &GateRequest,
        registry: &CheckRegistry,
        policy: LogPolicy,
        sink: &mut dyn LogSink,
    ) -> EndpointResponse {
        match gate.decide(request) {
            AccessDecision::Deny(DenyKind::Challenge) => {
                tracing::debug!(suite = %self.suite, "health check denied, challenging");
                EndpointResponse::Unauthorized {
                    scheme: CHALLENGE_SCHEME,
                }
            }
            AccessDecision::Deny(DenyKind::Redirect) => {
                tracing::debug!(suite = %self.suite, "health check denied, redirecting to login");
                EndpointResponse::Redirect {
                    location: self.login_path.clone(),
                }
            }
            AccessDecision::Allow => {
                let report = CheckRunner::run(registry, &self.suite);
                policy.emit(&report, sink);
                EndpointResponse::Report {
                    code: report.http_status(self.error_code),
                    body: reporter::format_plain(&self.title, &report),
                }
            }
        }
    }
}

//! healthgate
//!
//! Named health-check suites with severity aggregation, selective logging,
//! and an entry point guarded by a multi-path access decision. An application
//! registers probes into suites at startup, then runs a suite on demand:
//!
//! ```no_run
//! use healthgate::{CheckRegistry, CheckRunner, checks::*};
//!
//! let mut registry = CheckRegistry::new();
//! registry.register("health", "Disk space", DiskSpaceCheck::new());
//! registry.register("health", "Temp dir writable", FileWritableCheck::new(std::env::temp_dir()));
//! registry.register("health", "Outbound mail", SmtpConnectCheck::new());
//!
//! let report = CheckRunner::run(&registry, "health");
//! if report.is_healthy() {
//!     println!("All systems operational!");
//! }
//! ```
//!
//! The HTTP entry point never runs checks for a denied caller; see
//! [`gate::AccessGate`] for the decision rules.

/// Core check contract: severity, results, and the probe trait
pub mod check;

/// Built-in probes (SMTP, disk space, file writability)
pub mod checks;

/// Configuration loading (profiles, env overrides)
pub mod config;

/// Entry point composition: gate, run, log, render
pub mod endpoint;

/// Access decision engine guarding the entry point
pub mod gate;

/// Axum adapter for the entry point
pub mod http;

/// Selective consolidated logging of suite results
pub mod logging;

/// Suite registry
pub mod registry;

/// Report rendering
pub mod reporter;

/// Suite execution and aggregation
pub mod runner;

pub use check::{Check, CheckResult, Severity};
pub use config::AppConfig;
pub use endpoint::{EndpointResponse, HealthEndpoint};
pub use gate::{
    AccessDecision, AccessGate, BasicCredentials, DenyKind, DeploymentMode, EnvCredentials,
    ExecutionContext, GateRequest, Session,
};
pub use logging::{LogLevel, LogPolicy, LogSink, TracingSink};
pub use registry::CheckRegistry;
pub use reporter::{format_plain, format_report, print_report};
pub use runner::{CheckRunner, SuiteReport};

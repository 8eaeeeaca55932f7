//! Access gate guarding the health-check entry point
//!
//! The gate merges four independent trust signals into a single allow/deny
//! decision: how the invocation reached the application, the deployment mode,
//! the requester's session, and an operator-configured credential pair
//! sourced from the environment. Denials come in two shapes. `Challenge`
//! means the caller should retry with the configured basic credentials;
//! `Redirect` means the caller should go through the normal session login.
//! Which shape applies depends only on whether the credential pair is fully
//! configured, never on what the requester supplied.

use crate::config;

/// How the invocation reached the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Local command-line invocation (operator scripts, cron)
    Cli,
    /// Network request
    Http,
}

/// Deployment mode of the running application
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    /// Local development
    Dev,
    /// Staging / test
    Test,
    /// Production
    Live,
}

/// The requester's session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    /// No authenticated session
    Anonymous,
    /// Authenticated session, with or without the administrative permission
    LoggedIn {
        /// Whether the session holds the administrative permission
        admin: bool,
    },
}

/// A username/password pair supplied with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Operator-configured credential values sourced from the environment
///
/// The pair counts as configured only when both values are present and
/// non-empty. Construct it once (usually via [`EnvCredentials::from_env`])
/// and inject it into the gate; the decision function itself never touches
/// the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl EnvCredentials {
    /// Reads the pair from `HEALTHGATE_USERNAME` / `HEALTHGATE_PASSWORD`
    pub fn from_env() -> Self {
        Self {
            username: std::env::var(config::ENV_USERNAME).ok(),
            password: std::env::var(config::ENV_PASSWORD).ok(),
        }
    }

    /// Returns the expected pair when both values are present and non-empty
    pub fn configured(&self) -> Option<BasicCredentials> {
        match (&self.username, &self.password) {
            (Some(username), Some(password))
                if !username.is_empty() && !password.is_empty() =>
            {
                Some(BasicCredentials::new(username, password))
            }
            _ => None,
        }
    }
}

/// The trust signals of one request, gathered by the host application
#[derive(Debug, Clone)]
pub struct GateRequest {
    /// How the invocation reached the application
    pub execution: ExecutionContext,
    /// Current deployment mode
    pub mode: DeploymentMode,
    /// The requester's session
    pub session: Session,
    /// Basic credentials carried by the request, if any
    pub credentials: Option<BasicCredentials>,
}

/// Shape of a denial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyKind {
    /// Retry with the configured credential scheme (HTTP 401)
    Challenge,
    /// Authenticate through the normal session login flow (HTTP 302)
    Redirect,
}

/// Outcome of a gate decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(DenyKind),
}

/// Decision engine guarding the health-check entry point
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    env: EnvCredentials,
}

impl AccessGate {
    /// Creates a gate with the given environment credential pair
    pub fn new(env: EnvCredentials) -> Self {
        Self { env }
    }

    /// Creates a gate from the process environment
    pub fn from_env() -> Self {
        Self::new(EnvCredentials::from_env())
    }

    /// Decides whether the request may run checks
    ///
    /// Rules are evaluated top to bottom, first match wins:
    /// 1. CLI execution is always allowed; operational scripts must never be
    ///    locked out.
    /// 2. Dev mode is always allowed.
    /// 3. An admin session is always allowed, even alongside wrong or absent
    ///    credentials.
    /// 4. With the credential pair configured, the supplied pair must match
    ///    exactly; otherwise the caller is challenged. Without a configured
    ///    pair, any authenticated session is allowed and anonymous callers
    ///    are redirected to login.
    pub fn decide(&self, request: &GateRequest) -> AccessDecision {
        if request.execution == ExecutionContext::Cli {
            return AccessDecision::Allow;
        }

        if request.mode == DeploymentMode::Dev {
            return AccessDecision::Allow;
        }

        if matches!(request.session, Session::LoggedIn { admin: true }) {
            return AccessDecision::Allow;
        }

        match self.env.configured() {
            Some(expected) => match &request.credentials {
                Some(supplied) if *supplied == expected => AccessDecision::Allow,
                _ => AccessDecision::Deny(DenyKind::Challenge),
            },
            None => match request.session {
                Session::LoggedIn { .. } => AccessDecision::Allow,
                Session::Anonymous => AccessDecision::Deny(DenyKind::Redirect),
            },
        }
    }
}

//! Axum adapter exposing a [`HealthEndpoint`] as a route
//!
//! Session wiring belongs to the host application: the adapter treats every
//! request as anonymous unless the host swaps in its own session lookup when
//! building the [`GateRequest`]. Basic credentials are decoded from the
//! Authorization header so the gate's credential path works out of the box.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use base64::Engine;

use crate::endpoint::{EndpointResponse, HealthEndpoint};
use crate::gate::{AccessGate, BasicCredentials, DeploymentMode, ExecutionContext, GateRequest, Session};
use crate::logging::{LogPolicy, TracingSink};
use crate::registry::CheckRegistry;

/// Shared state backing the health route
pub struct HealthState {
    /// Registered check suites, populated at startup
    pub registry: CheckRegistry,
    /// Gate holding the environment credential pair
    pub gate: AccessGate,
    /// The entry point to serve
    pub endpoint: HealthEndpoint,
    /// Log emission switches
    pub policy: LogPolicy,
    /// Current deployment mode
    pub mode: DeploymentMode,
}

/// Builds a router serving the endpoint at `/health`
pub fn router(state: Arc<HealthState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(state)
}

async fn health(State(state): State<Arc<HealthState>>, headers: HeaderMap) -> Response {
    let request = GateRequest {
        execution: ExecutionContext::Http,
        mode: state.mode,
        session: Session::Anonymous,
        credentials: basic_credentials(&headers),
    };

    state
        .endpoint
        .handle(
            &state.gate,
            &request,
            &state.registry,
            state.policy,
            &mut TracingSink,
        )
        .into_response()
}

impl IntoResponse for EndpointResponse {
    fn into_response(self) -> Response {
        match self {
            EndpointResponse::Report { code, body } => (
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                body,
            )
                .into_response(),
            EndpointResponse::Unauthorized { scheme } => (
                StatusCode::UNAUTHORIZED,
                [(
                    header::WWW_AUTHENTICATE,
                    format!("{scheme} realm=\"Health check\""),
                )],
            )
                .into_response(),
            EndpointResponse::Redirect { location } => {
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
        }
    }
}

/// Decodes basic credentials from the Authorization header, if present
fn basic_credentials(headers: &HeaderMap) -> Option<BasicCredentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some(BasicCredentials::new(username, password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn decodes_well_formed_basic_credentials() {
        // "ops:secret"
        let headers = headers_with_auth("Basic b3BzOnNlY3JldA==");
        assert_eq!(
            basic_credentials(&headers),
            Some(BasicCredentials::new("ops", "secret"))
        );
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert_eq!(basic_credentials(&HeaderMap::new()), None);
        assert_eq!(
            basic_credentials(&headers_with_auth("Bearer token")),
            None
        );
        assert_eq!(
            basic_credentials(&headers_with_auth("Basic not-base64!!")),
            None
        );
    }

    #[test]
    fn password_may_contain_colons() {
        // "ops:a:b"
        let headers = headers_with_auth("Basic b3BzOmE6Yg==");
        assert_eq!(
            basic_credentials(&headers),
            Some(BasicCredentials::new("ops", "a:b"))
        );
    }
}

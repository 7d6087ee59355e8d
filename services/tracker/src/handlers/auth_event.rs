use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::domain::types::{AuthEvent, AuthEventKind, ClientInfo};
use crate::error::TrackerServiceError;
use crate::state::AppState;

pub const X_DEVTRACK_INTERNAL_TOKEN: &str = "x-devtrack-internal-token";

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventKindRequest {
    Login,
    Logout,
}

#[derive(Debug, Deserialize)]
pub struct AuthEventRequest {
    pub kind: AuthEventKindRequest,
    pub user_id: Uuid,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl From<AuthEventRequest> for AuthEvent {
    fn from(req: AuthEventRequest) -> Self {
        Self {
            kind: match req.kind {
                AuthEventKindRequest::Login => AuthEventKind::Login,
                AuthEventKindRequest::Logout => AuthEventKind::Logout,
            },
            user_id: req.user_id,
            client: ClientInfo {
                ip_address: req.ip_address.unwrap_or_default(),
                user_agent: req.user_agent.unwrap_or_default(),
            },
        }
    }
}

/// True when `headers` carry the shared intake token.
pub fn has_internal_token(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(X_DEVTRACK_INTERNAL_TOKEN)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|token| !expected.is_empty() && token == expected)
}

// ── POST /internal/auth-events ───────────────────────────────────────────────

pub async fn receive_auth_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<AuthEventRequest>,
) -> Result<StatusCode, TrackerServiceError> {
    if !has_internal_token(&headers, &state.auth_events_token) {
        return Err(TrackerServiceError::Unauthorized);
    }
    let receivers = state.auth_events.publish(body.into());
    debug!(receivers, "auth event accepted");
    Ok(StatusCode::ACCEPTED)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(token: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            headers.insert(X_DEVTRACK_INTERNAL_TOKEN, HeaderValue::from_static(token));
        }
        headers
    }

    #[test]
    fn should_accept_matching_token() {
        assert!(has_internal_token(&headers(Some("s3cret")), "s3cret"));
    }

    #[test]
    fn should_reject_missing_or_wrong_token() {
        assert!(!has_internal_token(&headers(None), "s3cret"));
        assert!(!has_internal_token(&headers(Some("nope")), "s3cret"));
    }

    #[test]
    fn should_reject_everything_when_expected_token_is_empty() {
        assert!(!has_internal_token(&headers(Some("")), ""));
    }

    #[test]
    fn should_default_missing_client_fields_to_empty() {
        let req: AuthEventRequest = serde_json::from_value(serde_json::json!({
            "kind": "logout",
            "user_id": Uuid::nil(),
        }))
        .unwrap();
        let event = AuthEvent::from(req);
        assert_eq!(event.kind, AuthEventKind::Logout);
        assert_eq!(event.client, ClientInfo::default());
    }
}

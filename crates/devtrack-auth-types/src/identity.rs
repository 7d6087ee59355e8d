//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::request::Parts;
use http::{HeaderMap, StatusCode};
use uuid::Uuid;

pub const X_DEVTRACK_USER_ID: &str = "x-devtrack-user-id";
pub const X_DEVTRACK_USER_ROLE: &str = "x-devtrack-user-role";

/// User identity injected by the gateway via `x-devtrack-user-id` and `x-devtrack-user-role` headers.
///
/// Returns 401 if either header is absent or malformed.
/// Role enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub user_role: u8,
}

impl IdentityHeaders {
    /// Read the identity without rejecting. `None` means the request is anonymous.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let user_id = headers
            .get(X_DEVTRACK_USER_ID)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok())?;
        let user_role = headers
            .get(X_DEVTRACK_USER_ROLE)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u8>().ok())?;
        Some(Self { user_id, user_role })
    }
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // Extract synchronously and return a 'static future; `async fn` here trips
    // E0195 under precise capturing.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = Self::from_headers(&parts.headers);
        async move { identity.ok_or(StatusCode::UNAUTHORIZED) }
    }
}

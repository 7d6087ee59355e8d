//! Mock auth helpers for integration tests.
//!
//! Services behind the gateway receive `x-devtrack-user-id` + `x-devtrack-user-role`
//! headers injected by the gateway. In tests, `MockAuth` produces these headers
//! directly so no real gateway is needed.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use devtrack_auth_types::identity::{X_DEVTRACK_USER_ID, X_DEVTRACK_USER_ROLE};
use devtrack_domain::user::UserRole;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub user_role: UserRole,
}

impl MockAuth {
    pub fn new(user_id: Uuid, user_role: UserRole) -> Self {
        Self { user_id, user_role }
    }

    pub fn staff() -> Self {
        Self::new(Uuid::new_v4(), UserRole::Staff)
    }

    pub fn superuser() -> Self {
        Self::new(Uuid::new_v4(), UserRole::Superuser)
    }

    /// Header pairs as if the gateway injected them.
    pub fn header_pairs(&self) -> [(HeaderName, HeaderValue); 2] {
        [
            (
                HeaderName::from_static(X_DEVTRACK_USER_ID),
                HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
            ),
            (
                HeaderName::from_static(X_DEVTRACK_USER_ROLE),
                HeaderValue::from(u16::from(self.user_role.as_u8())),
            ),
        ]
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        self.header_pairs().into_iter().collect()
    }
}

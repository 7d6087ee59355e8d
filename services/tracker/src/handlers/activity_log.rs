use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use devtrack_auth_types::identity::IdentityHeaders;
use devtrack_domain::activity::{ActionType, ContentType};
use devtrack_domain::pagination::PageRequest;

use crate::domain::types::{ActivityLog, ActivityLogFilter, ActivityLogSortBy};
use crate::error::TrackerServiceError;
use crate::state::AppState;
use crate::usecase::activity::{DeleteActivityLogUseCase, ListActivityLogsUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ActivityLogResponse {
    pub id: i64,
    pub user_id: Uuid,
    pub action_type: ActionType,
    pub content_type: ContentType,
    pub object_id: Option<i64>,
    pub description: String,
    pub ip_address: String,
    pub user_agent: String,
    #[serde(serialize_with = "devtrack_core::serde::to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
}

impl From<ActivityLog> for ActivityLogResponse {
    fn from(log: ActivityLog) -> Self {
        Self {
            id: log.id,
            user_id: log.user_id,
            action_type: log.action_type,
            content_type: log.content_type,
            object_id: log.object_id,
            description: log.description,
            ip_address: log.ip_address,
            user_agent: log.user_agent,
            timestamp: log.timestamp,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ActivityLogListQuery {
    pub user_id: Option<Uuid>,
    pub action_type: Option<String>,
    pub content_type: Option<String>,
    pub sort_by: Option<String>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl ActivityLogListQuery {
    /// Unknown enum values are rejected rather than silently matching everything.
    fn filter(&self) -> Result<ActivityLogFilter, TrackerServiceError> {
        let action_type = self
            .action_type
            .as_deref()
            .map(str::parse::<ActionType>)
            .transpose()
            .map_err(|_| TrackerServiceError::MissingData)?;
        let content_type = self
            .content_type
            .as_deref()
            .map(str::parse::<ContentType>)
            .transpose()
            .map_err(|_| TrackerServiceError::MissingData)?;
        Ok(ActivityLogFilter {
            user_id: self.user_id,
            action_type,
            content_type,
        })
    }
}

// ── GET /activity-logs/ ──────────────────────────────────────────────────────

pub async fn get_activity_logs(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<ActivityLogListQuery>,
) -> Result<Json<Vec<ActivityLogResponse>>, TrackerServiceError> {
    let sort_by = query
        .sort_by
        .as_deref()
        .and_then(ActivityLogSortBy::from_kebab_case)
        .unwrap_or_default();
    let defaults = PageRequest::default();
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(defaults.per_page),
        page: query.page.unwrap_or(defaults.page),
    };

    let usecase = ListActivityLogsUseCase {
        repo: state.activity_log_repo(),
    };
    let logs = usecase
        .execute(identity.user_role, query.filter()?, sort_by, page)
        .await?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

// ── DELETE /activity-logs/{pk}/ ──────────────────────────────────────────────

pub async fn delete_activity_log(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(pk): Path<i64>,
) -> Result<StatusCode, TrackerServiceError> {
    let usecase = DeleteActivityLogUseCase {
        repo: state.activity_log_repo(),
    };
    usecase.execute(identity.user_role, pk).await?;
    Ok(StatusCode::NO_CONTENT)
}

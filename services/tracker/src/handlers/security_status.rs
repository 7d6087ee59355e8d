use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use devtrack_auth_types::identity::IdentityHeaders;

use crate::domain::types::{DeviceSecurityStatus, SecurityStatusDraft};
use crate::error::TrackerServiceError;
use crate::handlers::PageQuery;
use crate::handlers::arrival::ImportResponse;
use crate::state::AppState;
use crate::usecase::security_status::{
    CreateSecurityStatusUseCase, DeleteSecurityStatusUseCase, ExportSecurityStatusesUseCase,
    GetSecurityStatusUseCase, ImportSecurityStatusesUseCase, ListSecurityStatusesUseCase,
    UpdateSecurityStatusUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SecurityStatusRequest {
    pub network_element_name: String,
    #[serde(default = "default_is_online")]
    pub is_online: bool,
    pub asset_serial_number: String,
    pub check_date: Option<NaiveDate>,
}

fn default_is_online() -> bool {
    true
}

impl From<SecurityStatusRequest> for SecurityStatusDraft {
    fn from(req: SecurityStatusRequest) -> Self {
        Self {
            network_element_name: req.network_element_name,
            is_online: req.is_online,
            asset_serial_number: req.asset_serial_number,
            check_date: req.check_date,
        }
    }
}

#[derive(Serialize)]
pub struct SecurityStatusResponse {
    pub id: i32,
    pub network_element_name: String,
    pub is_online: bool,
    pub asset_serial_number: String,
    pub check_date: Option<NaiveDate>,
    #[serde(serialize_with = "devtrack_core::serde::to_rfc3339_ms")]
    pub last_check_time: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    #[serde(serialize_with = "devtrack_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "devtrack_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<DeviceSecurityStatus> for SecurityStatusResponse {
    fn from(s: DeviceSecurityStatus) -> Self {
        Self {
            id: s.id,
            network_element_name: s.network_element_name,
            is_online: s.is_online,
            asset_serial_number: s.asset_serial_number,
            check_date: s.check_date,
            last_check_time: s.last_check_time,
            created_by: s.created_by,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

// ── GET /device-security-status/ ─────────────────────────────────────────────

pub async fn get_security_statuses(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<SecurityStatusResponse>>, TrackerServiceError> {
    let usecase = ListSecurityStatusesUseCase {
        repo: state.security_status_repo(),
    };
    let statuses = usecase.execute(query.page_request()).await?;
    Ok(Json(statuses.into_iter().map(Into::into).collect()))
}

// ── POST /device-security-status/ ────────────────────────────────────────────

pub async fn create_security_status(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<SecurityStatusRequest>,
) -> Result<(StatusCode, Json<SecurityStatusResponse>), TrackerServiceError> {
    let usecase = CreateSecurityStatusUseCase {
        repo: state.security_status_repo(),
    };
    let status = usecase.execute(identity.user_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(status.into())))
}

// ── GET /device-security-status/{pk}/ ────────────────────────────────────────

pub async fn get_security_status(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(pk): Path<i32>,
) -> Result<Json<SecurityStatusResponse>, TrackerServiceError> {
    let usecase = GetSecurityStatusUseCase {
        repo: state.security_status_repo(),
    };
    Ok(Json(usecase.execute(pk).await?.into()))
}

// ── PUT /device-security-status/{pk}/ ────────────────────────────────────────

pub async fn update_security_status(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(pk): Path<i32>,
    Json(body): Json<SecurityStatusRequest>,
) -> Result<Json<SecurityStatusResponse>, TrackerServiceError> {
    let usecase = UpdateSecurityStatusUseCase {
        repo: state.security_status_repo(),
    };
    Ok(Json(usecase.execute(pk, body.into()).await?.into()))
}

// ── DELETE /device-security-status/{pk}/ ─────────────────────────────────────

pub async fn delete_security_status(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(pk): Path<i32>,
) -> Result<StatusCode, TrackerServiceError> {
    let usecase = DeleteSecurityStatusUseCase {
        repo: state.security_status_repo(),
    };
    usecase.execute(pk).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /device-security-status/export/ ──────────────────────────────────────

pub async fn export_security_statuses(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<SecurityStatusResponse>>, TrackerServiceError> {
    let usecase = ExportSecurityStatusesUseCase {
        repo: state.security_status_repo(),
    };
    let statuses = usecase.execute().await?;
    Ok(Json(statuses.into_iter().map(Into::into).collect()))
}

// ── POST /device-security-status/import/ ─────────────────────────────────────

pub async fn import_security_statuses(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<Vec<SecurityStatusRequest>>,
) -> Result<Json<ImportResponse>, TrackerServiceError> {
    let usecase = ImportSecurityStatusesUseCase {
        repo: state.security_status_repo(),
    };
    let imported = usecase
        .execute(identity.user_id, body.into_iter().map(Into::into).collect())
        .await?;
    Ok(Json(ImportResponse { imported }))
}

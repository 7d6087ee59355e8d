use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use devtrack_auth_types::identity::IdentityHeaders;

use crate::domain::types::{ArrivalDraft, DeviceArrival};
use crate::error::TrackerServiceError;
use crate::handlers::PageQuery;
use crate::state::AppState;
use crate::usecase::arrival::{
    CreateArrivalUseCase, DeleteArrivalUseCase, ExportArrivalsUseCase, GetArrivalUseCase,
    ImportArrivalsUseCase, ListArrivalsUseCase, UpdateArrivalUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ArrivalRequest {
    pub project_name: String,
    pub arrival_date: NaiveDate,
    pub device_model: String,
    pub barcode: String,
}

impl From<ArrivalRequest> for ArrivalDraft {
    fn from(req: ArrivalRequest) -> Self {
        Self {
            project_name: req.project_name,
            arrival_date: req.arrival_date,
            device_model: req.device_model,
            barcode: req.barcode,
        }
    }
}

#[derive(Serialize)]
pub struct ArrivalResponse {
    pub id: i32,
    pub project_name: String,
    pub arrival_date: NaiveDate,
    pub device_model: String,
    pub barcode: String,
    pub created_by: Option<Uuid>,
    #[serde(serialize_with = "devtrack_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "devtrack_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<DeviceArrival> for ArrivalResponse {
    fn from(a: DeviceArrival) -> Self {
        Self {
            id: a.id,
            project_name: a.project_name,
            arrival_date: a.arrival_date,
            device_model: a.device_model,
            barcode: a.barcode,
            created_by: a.created_by,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct ImportResponse {
    pub imported: u64,
}

// ── GET /device-arrival/ ─────────────────────────────────────────────────────

pub async fn get_arrivals(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<ArrivalResponse>>, TrackerServiceError> {
    let usecase = ListArrivalsUseCase {
        repo: state.arrival_repo(),
    };
    let arrivals = usecase.execute(query.page_request()).await?;
    Ok(Json(arrivals.into_iter().map(Into::into).collect()))
}

// ── POST /device-arrival/ ────────────────────────────────────────────────────

pub async fn create_arrival(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<ArrivalRequest>,
) -> Result<(StatusCode, Json<ArrivalResponse>), TrackerServiceError> {
    let usecase = CreateArrivalUseCase {
        repo: state.arrival_repo(),
    };
    let arrival = usecase.execute(identity.user_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(arrival.into())))
}

// ── GET /device-arrival/{pk}/ ────────────────────────────────────────────────

pub async fn get_arrival(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(pk): Path<i32>,
) -> Result<Json<ArrivalResponse>, TrackerServiceError> {
    let usecase = GetArrivalUseCase {
        repo: state.arrival_repo(),
    };
    Ok(Json(usecase.execute(pk).await?.into()))
}

// ── PUT /device-arrival/{pk}/ ────────────────────────────────────────────────

pub async fn update_arrival(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(pk): Path<i32>,
    Json(body): Json<ArrivalRequest>,
) -> Result<Json<ArrivalResponse>, TrackerServiceError> {
    let usecase = UpdateArrivalUseCase {
        repo: state.arrival_repo(),
    };
    Ok(Json(usecase.execute(pk, body.into()).await?.into()))
}

// ── DELETE /device-arrival/{pk}/ ─────────────────────────────────────────────

pub async fn delete_arrival(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(pk): Path<i32>,
) -> Result<StatusCode, TrackerServiceError> {
    let usecase = DeleteArrivalUseCase {
        repo: state.arrival_repo(),
    };
    usecase.execute(pk).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /device-arrival/export/ ──────────────────────────────────────────────

pub async fn export_arrivals(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<ArrivalResponse>>, TrackerServiceError> {
    let usecase = ExportArrivalsUseCase {
        repo: state.arrival_repo(),
    };
    let arrivals = usecase.execute().await?;
    Ok(Json(arrivals.into_iter().map(Into::into).collect()))
}

// ── POST /device-arrival/import/ ─────────────────────────────────────────────

pub async fn import_arrivals(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<Vec<ArrivalRequest>>,
) -> Result<Json<ImportResponse>, TrackerServiceError> {
    let usecase = ImportArrivalsUseCase {
        repo: state.arrival_repo(),
    };
    let imported = usecase
        .execute(identity.user_id, body.into_iter().map(Into::into).collect())
        .await?;
    Ok(Json(ImportResponse { imported }))
}

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use devtrack_auth_types::identity::IdentityHeaders;

use crate::domain::types::{DeliveryDraft, DeviceDelivery};
use crate::error::TrackerServiceError;
use crate::handlers::PageQuery;
use crate::handlers::arrival::ImportResponse;
use crate::state::AppState;
use crate::usecase::delivery::{
    CreateDeliveryUseCase, DeleteDeliveryUseCase, ExportDeliveriesUseCase, GetDeliveryUseCase,
    ImportDeliveriesUseCase, ListDeliveriesUseCase, UpdateDeliveryUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DeliveryRequest {
    pub delivery_date: NaiveDate,
    pub barcode: String,
    pub device_model: String,
    pub recipient_unit: String,
    pub recipient: String,
}

impl From<DeliveryRequest> for DeliveryDraft {
    fn from(req: DeliveryRequest) -> Self {
        Self {
            delivery_date: req.delivery_date,
            barcode: req.barcode,
            device_model: req.device_model,
            recipient_unit: req.recipient_unit,
            recipient: req.recipient,
        }
    }
}

#[derive(Serialize)]
pub struct DeliveryResponse {
    pub id: i32,
    pub delivery_date: NaiveDate,
    pub barcode: String,
    pub device_model: String,
    pub recipient_unit: String,
    pub recipient: String,
    pub created_by: Option<Uuid>,
    #[serde(serialize_with = "devtrack_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "devtrack_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<DeviceDelivery> for DeliveryResponse {
    fn from(d: DeviceDelivery) -> Self {
        Self {
            id: d.id,
            delivery_date: d.delivery_date,
            barcode: d.barcode,
            device_model: d.device_model,
            recipient_unit: d.recipient_unit,
            recipient: d.recipient,
            created_by: d.created_by,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

// ── GET /device-delivery/ ────────────────────────────────────────────────────

pub async fn get_deliveries(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<DeliveryResponse>>, TrackerServiceError> {
    let usecase = ListDeliveriesUseCase {
        repo: state.delivery_repo(),
    };
    let deliveries = usecase.execute(query.page_request()).await?;
    Ok(Json(deliveries.into_iter().map(Into::into).collect()))
}

// ── POST /device-delivery/ ───────────────────────────────────────────────────

pub async fn create_delivery(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<DeliveryRequest>,
) -> Result<(StatusCode, Json<DeliveryResponse>), TrackerServiceError> {
    let usecase = CreateDeliveryUseCase {
        repo: state.delivery_repo(),
    };
    let delivery = usecase.execute(identity.user_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(delivery.into())))
}

// ── GET /device-delivery/{pk}/ ───────────────────────────────────────────────

pub async fn get_delivery(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(pk): Path<i32>,
) -> Result<Json<DeliveryResponse>, TrackerServiceError> {
    let usecase = GetDeliveryUseCase {
        repo: state.delivery_repo(),
    };
    Ok(Json(usecase.execute(pk).await?.into()))
}

// ── PUT /device-delivery/{pk}/ ───────────────────────────────────────────────

pub async fn update_delivery(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(pk): Path<i32>,
    Json(body): Json<DeliveryRequest>,
) -> Result<Json<DeliveryResponse>, TrackerServiceError> {
    let usecase = UpdateDeliveryUseCase {
        repo: state.delivery_repo(),
    };
    Ok(Json(usecase.execute(pk, body.into()).await?.into()))
}

// ── DELETE /device-delivery/{pk}/ ────────────────────────────────────────────

pub async fn delete_delivery(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(pk): Path<i32>,
) -> Result<StatusCode, TrackerServiceError> {
    let usecase = DeleteDeliveryUseCase {
        repo: state.delivery_repo(),
    };
    usecase.execute(pk).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /device-delivery/export/ ─────────────────────────────────────────────

pub async fn export_deliveries(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<DeliveryResponse>>, TrackerServiceError> {
    let usecase = ExportDeliveriesUseCase {
        repo: state.delivery_repo(),
    };
    let deliveries = usecase.execute().await?;
    Ok(Json(deliveries.into_iter().map(Into::into).collect()))
}

// ── POST /device-delivery/import/ ────────────────────────────────────────────

pub async fn import_deliveries(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<Vec<DeliveryRequest>>,
) -> Result<Json<ImportResponse>, TrackerServiceError> {
    let usecase = ImportDeliveriesUseCase {
        repo: state.delivery_repo(),
    };
    let imported = usecase
        .execute(identity.user_id, body.into_iter().map(Into::into).collect())
        .await?;
    Ok(Json(ImportResponse { imported }))
}

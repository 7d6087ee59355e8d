use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use devtrack_auth_types::identity::IdentityHeaders;
use devtrack_domain::device::DeviceBucket;

use crate::domain::types::ClassifiedDevice;
use crate::error::TrackerServiceError;
use crate::state::AppState;
use crate::usecase::dashboard::{Dashboard, DashboardInput, GetDashboardUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeviceResponse {
    Online {
        barcode: String,
        device_model: String,
        project_name: String,
        network_element_name: String,
        is_online: bool,
        check_date: Option<NaiveDate>,
    },
    Offline {
        barcode: String,
        device_model: String,
        project_name: String,
        arrival_date: NaiveDate,
    },
    Unmatched {
        serial: String,
        network_element_name: String,
        is_online: bool,
        check_date: Option<NaiveDate>,
    },
}

impl From<ClassifiedDevice> for DeviceResponse {
    fn from(device: ClassifiedDevice) -> Self {
        match device {
            ClassifiedDevice::Online {
                barcode,
                device_model,
                project_name,
                network_element_name,
                is_online,
                check_date,
            } => Self::Online {
                barcode,
                device_model,
                project_name,
                network_element_name,
                is_online,
                check_date,
            },
            ClassifiedDevice::Offline {
                barcode,
                device_model,
                project_name,
                arrival_date,
            } => Self::Offline {
                barcode,
                device_model,
                project_name,
                arrival_date,
            },
            ClassifiedDevice::Unmatched {
                serial,
                network_element_name,
                is_online,
                check_date,
            } => Self::Unmatched {
                serial,
                network_element_name,
                is_online,
                check_date,
            },
        }
    }
}

#[derive(Serialize)]
pub struct TotalsResponse {
    pub online: u64,
    pub offline: u64,
    pub other: u64,
}

#[derive(Serialize)]
pub struct TodayResponse {
    pub date: NaiveDate,
    pub online: u64,
    pub offline: u64,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub bucket: &'static str,
    pub devices: Vec<DeviceResponse>,
    pub page: u64,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u64,
    pub totals: TotalsResponse,
    pub today: TodayResponse,
    #[serde(serialize_with = "devtrack_core::serde::to_rfc3339_ms")]
    pub window_start: DateTime<Utc>,
    #[serde(serialize_with = "devtrack_core::serde::to_rfc3339_ms")]
    pub window_end: DateTime<Utc>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(d: Dashboard) -> Self {
        let window = d.devices.window;
        Self {
            bucket: d.bucket.as_str(),
            devices: d.devices.items.into_iter().map(Into::into).collect(),
            page: window.page,
            per_page: window.per_page,
            total_items: window.total_items,
            total_pages: window.total_pages,
            totals: TotalsResponse {
                online: d.totals.online,
                offline: d.totals.offline,
                other: d.totals.other,
            },
            today: TodayResponse {
                date: d.today.date,
                online: d.today.online,
                offline: d.today.offline,
            },
            window_start: d.window_start,
            window_end: d.window_end,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

/// Kept as raw strings: malformed values fall back instead of rejecting.
#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct DashboardQuery {
    pub bucket: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl DashboardQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }

    pub fn per_page(&self, default: u32) -> u32 {
        self.per_page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(default)
            .clamp(1, 100)
    }
}

// ── GET /dashboard/ ──────────────────────────────────────────────────────────

pub async fn get_dashboard(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, TrackerServiceError> {
    let usecase = GetDashboardUseCase {
        repo: state.snapshot_repo(),
    };
    let dashboard = usecase
        .execute(DashboardInput {
            bucket: DeviceBucket::from_query(query.bucket.as_deref()),
            page: query.page(),
            per_page: query.per_page(state.dashboard_page_size),
            now: Utc::now(),
            window: state.dashboard_window,
        })
        .await?;
    Ok(Json(dashboard.into()))
}

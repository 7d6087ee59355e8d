use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use devtrack_domain::activity::{ActionType, ContentType};
use devtrack_domain::pagination::Sort;

/// A device received on site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceArrival {
    pub id: i32,
    pub project_name: String,
    pub arrival_date: NaiveDate,
    pub device_model: String,
    pub barcode: String,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable fields of a [`DeviceArrival`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalDraft {
    pub project_name: String,
    pub arrival_date: NaiveDate,
    pub device_model: String,
    pub barcode: String,
}

/// A device handed out to a recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDelivery {
    pub id: i32,
    pub delivery_date: NaiveDate,
    pub barcode: String,
    pub device_model: String,
    pub recipient_unit: String,
    pub recipient: String,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable fields of a [`DeviceDelivery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryDraft {
    pub delivery_date: NaiveDate,
    pub barcode: String,
    pub device_model: String,
    pub recipient_unit: String,
    pub recipient: String,
}

/// Latest installation/online check for a network element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSecurityStatus {
    pub id: i32,
    pub network_element_name: String,
    pub is_online: bool,
    pub asset_serial_number: String,
    pub check_date: Option<NaiveDate>,
    pub last_check_time: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable fields of a [`DeviceSecurityStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityStatusDraft {
    pub network_element_name: String,
    pub is_online: bool,
    pub asset_serial_number: String,
    pub check_date: Option<NaiveDate>,
}

/// Device identifiers are compared trimmed; blank ones never participate.
pub fn normalize_identifier(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

// ── Reconciliation projections ───────────────────────────────────────────────

/// Fields of an arrival needed to classify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalSnapshot {
    pub barcode: String,
    pub device_model: String,
    pub project_name: String,
    pub arrival_date: NaiveDate,
}

/// Fields of an installation check needed to classify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationSnapshot {
    pub asset_serial_number: String,
    pub network_element_name: String,
    pub is_online: bool,
    pub check_date: Option<NaiveDate>,
}

/// A device placed into exactly one reconciliation bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedDevice {
    /// Barcode present in both arrivals and installations.
    Online {
        barcode: String,
        device_model: String,
        project_name: String,
        network_element_name: String,
        is_online: bool,
        check_date: Option<NaiveDate>,
    },
    /// Barcode present in arrivals only.
    Offline {
        barcode: String,
        device_model: String,
        project_name: String,
        arrival_date: NaiveDate,
    },
    /// Serial present in installations only.
    Unmatched {
        serial: String,
        network_element_name: String,
        is_online: bool,
        check_date: Option<NaiveDate>,
    },
}

/// Sizes of the three reconciliation identifier sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketTotals {
    pub online: u64,
    pub offline: u64,
    pub other: u64,
}

/// Installation checks dated on one calendar day, split by online state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCheckSummary {
    pub date: NaiveDate,
    pub online: u64,
    pub offline: u64,
}

// ── Activity audit ───────────────────────────────────────────────────────────

/// Request metadata copied verbatim into audit entries. Missing values are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip_address: String,
    pub user_agent: String,
}

/// An audit entry about to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivityLog {
    pub user_id: Uuid,
    pub action_type: ActionType,
    pub content_type: ContentType,
    pub object_id: Option<i64>,
    pub description: String,
    pub ip_address: String,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
}

/// A persisted audit entry. Never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    pub id: i64,
    pub user_id: Uuid,
    pub action_type: ActionType,
    pub content_type: ContentType,
    pub object_id: Option<i64>,
    pub description: String,
    pub ip_address: String,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
}

/// Field filters for browsing the audit store. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLogFilter {
    pub user_id: Option<Uuid>,
    pub action_type: Option<ActionType>,
    pub content_type: Option<ContentType>,
}

/// Sort options for activity log list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLogSortBy {
    Timestamp(Sort),
}

impl Default for ActivityLogSortBy {
    fn default() -> Self {
        Self::Timestamp(Sort::Desc)
    }
}

impl ActivityLogSortBy {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "timestamp-desc" => Some(Self::Timestamp(Sort::Desc)),
            "timestamp-asc" => Some(Self::Timestamp(Sort::Asc)),
            _ => None,
        }
    }
}

/// Authentication lifecycle signal published by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEventKind {
    Login,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEvent {
    pub kind: AuthEventKind,
    pub user_id: Uuid,
    pub client: ClientInfo,
}

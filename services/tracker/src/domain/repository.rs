#![allow(async_fn_in_trait)]

use std::future::Future;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use devtrack_domain::pagination::PageRequest;

use crate::domain::types::{
    ActivityLog, ActivityLogFilter, ActivityLogSortBy, ArrivalDraft, ArrivalSnapshot,
    DailyCheckSummary, DeliveryDraft, DeviceArrival, DeviceDelivery, DeviceSecurityStatus,
    InstallationSnapshot, NewActivityLog, SecurityStatusDraft,
};
use crate::error::TrackerServiceError;

/// Repository for device arrival records.
pub trait ArrivalRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<DeviceArrival>, TrackerServiceError>;

    async fn list_all(&self) -> Result<Vec<DeviceArrival>, TrackerServiceError>;

    async fn get(&self, id: i32) -> Result<Option<DeviceArrival>, TrackerServiceError>;

    /// Fails with `BarcodeAlreadyExists` when the barcode is taken.
    async fn create(
        &self,
        draft: &ArrivalDraft,
        created_by: Uuid,
    ) -> Result<DeviceArrival, TrackerServiceError>;

    /// Returns `None` when no arrival has this id.
    async fn update(
        &self,
        id: i32,
        draft: &ArrivalDraft,
    ) -> Result<Option<DeviceArrival>, TrackerServiceError>;

    /// Delete an arrival. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError>;

    /// Insert or update by barcode. Drafts must have distinct barcodes.
    async fn upsert_many(
        &self,
        drafts: &[ArrivalDraft],
        created_by: Uuid,
    ) -> Result<u64, TrackerServiceError>;
}

/// Repository for device delivery records.
pub trait DeliveryRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<DeviceDelivery>, TrackerServiceError>;

    async fn list_all(&self) -> Result<Vec<DeviceDelivery>, TrackerServiceError>;

    async fn get(&self, id: i32) -> Result<Option<DeviceDelivery>, TrackerServiceError>;

    async fn create(
        &self,
        draft: &DeliveryDraft,
        created_by: Uuid,
    ) -> Result<DeviceDelivery, TrackerServiceError>;

    async fn update(
        &self,
        id: i32,
        draft: &DeliveryDraft,
    ) -> Result<Option<DeviceDelivery>, TrackerServiceError>;

    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError>;

    async fn insert_many(
        &self,
        drafts: &[DeliveryDraft],
        created_by: Uuid,
    ) -> Result<u64, TrackerServiceError>;
}

/// Repository for installation/security status records.
pub trait SecurityStatusRepository: Send + Sync {
    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<Vec<DeviceSecurityStatus>, TrackerServiceError>;

    async fn list_all(&self) -> Result<Vec<DeviceSecurityStatus>, TrackerServiceError>;

    async fn get(&self, id: i32) -> Result<Option<DeviceSecurityStatus>, TrackerServiceError>;

    async fn create(
        &self,
        draft: &SecurityStatusDraft,
        created_by: Uuid,
    ) -> Result<DeviceSecurityStatus, TrackerServiceError>;

    async fn update(
        &self,
        id: i32,
        draft: &SecurityStatusDraft,
    ) -> Result<Option<DeviceSecurityStatus>, TrackerServiceError>;

    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError>;

    async fn insert_many(
        &self,
        drafts: &[SecurityStatusDraft],
        created_by: Uuid,
    ) -> Result<u64, TrackerServiceError>;
}

/// Read-only projections feeding device reconciliation.
pub trait DeviceSnapshotRepository: Send + Sync {
    /// Arrivals with `start <= created_at < end`.
    async fn arrivals_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ArrivalSnapshot>, TrackerServiceError>;

    /// Installations with `start <= created_at < end`, oldest check first.
    async fn installations_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<InstallationSnapshot>, TrackerServiceError>;

    /// Online/offline counts of installation checks dated `date`.
    async fn count_checks_on(
        &self,
        date: NaiveDate,
    ) -> Result<DailyCheckSummary, TrackerServiceError>;
}

/// Append-only audit store.
///
/// Futures are `Send` so the recorder can run inside middleware and spawned
/// listener tasks without knowing the concrete store.
pub trait ActivityLogRepository: Send + Sync {
    fn append(
        &self,
        entry: &NewActivityLog,
    ) -> impl Future<Output = Result<(), TrackerServiceError>> + Send;

    fn list(
        &self,
        filter: &ActivityLogFilter,
        sort_by: ActivityLogSortBy,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<ActivityLog>, TrackerServiceError>> + Send;

    /// Delete an entry. Returns `true` if a row was deleted.
    fn delete(&self, id: i64) -> impl Future<Output = Result<bool, TrackerServiceError>> + Send;
}

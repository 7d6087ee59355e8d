use anyhow::Context as _;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel as _, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    SqlErr, sea_query::OnConflict,
};
use uuid::Uuid;

use devtrack_domain::activity::{ActionType, ContentType};
use devtrack_domain::pagination::{PageRequest, Sort};
use devtrack_tracker_schema::{
    device_arrivals, device_deliveries, device_security_statuses, user_activity_logs,
};

use crate::domain::repository::{
    ActivityLogRepository, ArrivalRepository, DeliveryRepository, DeviceSnapshotRepository,
    SecurityStatusRepository,
};
use crate::domain::types::{
    ActivityLog, ActivityLogFilter, ActivityLogSortBy, ArrivalDraft, ArrivalSnapshot,
    DailyCheckSummary, DeliveryDraft, DeviceArrival, DeviceDelivery, DeviceSecurityStatus,
    InstallationSnapshot, NewActivityLog, SecurityStatusDraft,
};
use crate::error::TrackerServiceError;

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Map a write error, surfacing barcode collisions as a domain error.
fn write_error(err: DbErr, what: &'static str) -> TrackerServiceError {
    if is_unique_violation(&err) {
        TrackerServiceError::BarcodeAlreadyExists
    } else {
        anyhow::Error::new(err).context(what).into()
    }
}

// ── Arrival repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbArrivalRepository {
    pub db: DatabaseConnection,
}

impl ArrivalRepository for DbArrivalRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<DeviceArrival>, TrackerServiceError> {
        let models = device_arrivals::Entity::find()
            .order_by_desc(device_arrivals::Column::CreatedAt)
            .order_by_desc(device_arrivals::Column::Id)
            .offset(page.offset())
            .limit(u64::from(page.clamped().per_page))
            .all(&self.db)
            .await
            .context("list device arrivals")?;
        Ok(models.into_iter().map(arrival_from_model).collect())
    }

    async fn list_all(&self) -> Result<Vec<DeviceArrival>, TrackerServiceError> {
        let models = device_arrivals::Entity::find()
            .order_by_asc(device_arrivals::Column::Id)
            .all(&self.db)
            .await
            .context("list all device arrivals")?;
        Ok(models.into_iter().map(arrival_from_model).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<DeviceArrival>, TrackerServiceError> {
        let model = device_arrivals::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("get device arrival")?;
        Ok(model.map(arrival_from_model))
    }

    async fn create(
        &self,
        draft: &ArrivalDraft,
        created_by: Uuid,
    ) -> Result<DeviceArrival, TrackerServiceError> {
        let now = Utc::now();
        let model = device_arrivals::ActiveModel {
            project_name: Set(draft.project_name.clone()),
            arrival_date: Set(draft.arrival_date),
            device_model: Set(draft.device_model.clone()),
            barcode: Set(draft.barcode.clone()),
            created_by: Set(Some(created_by)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "create device arrival"))?;
        Ok(arrival_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        draft: &ArrivalDraft,
    ) -> Result<Option<DeviceArrival>, TrackerServiceError> {
        let Some(model) = device_arrivals::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find device arrival for update")?
        else {
            return Ok(None);
        };
        let mut am = model.into_active_model();
        am.project_name = Set(draft.project_name.clone());
        am.arrival_date = Set(draft.arrival_date);
        am.device_model = Set(draft.device_model.clone());
        am.barcode = Set(draft.barcode.clone());
        am.updated_at = Set(Utc::now());
        let model = am
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "update device arrival"))?;
        Ok(Some(arrival_from_model(model)))
    }

    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError> {
        let result = device_arrivals::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete device arrival")?;
        Ok(result.rows_affected > 0)
    }

    async fn upsert_many(
        &self,
        drafts: &[ArrivalDraft],
        created_by: Uuid,
    ) -> Result<u64, TrackerServiceError> {
        let now = Utc::now();
        let models = drafts.iter().map(|draft| device_arrivals::ActiveModel {
            project_name: Set(draft.project_name.clone()),
            arrival_date: Set(draft.arrival_date),
            device_model: Set(draft.device_model.clone()),
            barcode: Set(draft.barcode.clone()),
            created_by: Set(Some(created_by)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        });
        let affected = device_arrivals::Entity::insert_many(models)
            .on_conflict(
                OnConflict::column(device_arrivals::Column::Barcode)
                    .update_columns([
                        device_arrivals::Column::ProjectName,
                        device_arrivals::Column::ArrivalDate,
                        device_arrivals::Column::DeviceModel,
                        device_arrivals::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert device arrivals")?;
        Ok(affected)
    }
}

fn arrival_from_model(model: device_arrivals::Model) -> DeviceArrival {
    DeviceArrival {
        id: model.id,
        project_name: model.project_name,
        arrival_date: model.arrival_date,
        device_model: model.device_model,
        barcode: model.barcode,
        created_by: model.created_by,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Delivery repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDeliveryRepository {
    pub db: DatabaseConnection,
}

impl DeliveryRepository for DbDeliveryRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<DeviceDelivery>, TrackerServiceError> {
        let models = device_deliveries::Entity::find()
            .order_by_desc(device_deliveries::Column::CreatedAt)
            .order_by_desc(device_deliveries::Column::Id)
            .offset(page.offset())
            .limit(u64::from(page.clamped().per_page))
            .all(&self.db)
            .await
            .context("list device deliveries")?;
        Ok(models.into_iter().map(delivery_from_model).collect())
    }

    async fn list_all(&self) -> Result<Vec<DeviceDelivery>, TrackerServiceError> {
        let models = device_deliveries::Entity::find()
            .order_by_asc(device_deliveries::Column::Id)
            .all(&self.db)
            .await
            .context("list all device deliveries")?;
        Ok(models.into_iter().map(delivery_from_model).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<DeviceDelivery>, TrackerServiceError> {
        let model = device_deliveries::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("get device delivery")?;
        Ok(model.map(delivery_from_model))
    }

    async fn create(
        &self,
        draft: &DeliveryDraft,
        created_by: Uuid,
    ) -> Result<DeviceDelivery, TrackerServiceError> {
        let now = Utc::now();
        let model = delivery_active_model(draft, created_by, now)
            .insert(&self.db)
            .await
            .context("create device delivery")?;
        Ok(delivery_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        draft: &DeliveryDraft,
    ) -> Result<Option<DeviceDelivery>, TrackerServiceError> {
        let Some(model) = device_deliveries::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find device delivery for update")?
        else {
            return Ok(None);
        };
        let mut am = model.into_active_model();
        am.delivery_date = Set(draft.delivery_date);
        am.barcode = Set(draft.barcode.clone());
        am.device_model = Set(draft.device_model.clone());
        am.recipient_unit = Set(draft.recipient_unit.clone());
        am.recipient = Set(draft.recipient.clone());
        am.updated_at = Set(Utc::now());
        let model = am
            .update(&self.db)
            .await
            .context("update device delivery")?;
        Ok(Some(delivery_from_model(model)))
    }

    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError> {
        let result = device_deliveries::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete device delivery")?;
        Ok(result.rows_affected > 0)
    }

    async fn insert_many(
        &self,
        drafts: &[DeliveryDraft],
        created_by: Uuid,
    ) -> Result<u64, TrackerServiceError> {
        let now = Utc::now();
        let models = drafts
            .iter()
            .map(|draft| delivery_active_model(draft, created_by, now));
        let inserted = device_deliveries::Entity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .context("insert device deliveries")?;
        Ok(inserted)
    }
}

fn delivery_active_model(
    draft: &DeliveryDraft,
    created_by: Uuid,
    now: DateTime<Utc>,
) -> device_deliveries::ActiveModel {
    device_deliveries::ActiveModel {
        delivery_date: Set(draft.delivery_date),
        barcode: Set(draft.barcode.clone()),
        device_model: Set(draft.device_model.clone()),
        recipient_unit: Set(draft.recipient_unit.clone()),
        recipient: Set(draft.recipient.clone()),
        created_by: Set(Some(created_by)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn delivery_from_model(model: device_deliveries::Model) -> DeviceDelivery {
    DeviceDelivery {
        id: model.id,
        delivery_date: model.delivery_date,
        barcode: model.barcode,
        device_model: model.device_model,
        recipient_unit: model.recipient_unit,
        recipient: model.recipient,
        created_by: model.created_by,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Security status repository ───────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSecurityStatusRepository {
    pub db: DatabaseConnection,
}

impl SecurityStatusRepository for DbSecurityStatusRepository {
    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<Vec<DeviceSecurityStatus>, TrackerServiceError> {
        let models = device_security_statuses::Entity::find()
            .order_by_desc(device_security_statuses::Column::LastCheckTime)
            .order_by_desc(device_security_statuses::Column::Id)
            .offset(page.offset())
            .limit(u64::from(page.clamped().per_page))
            .all(&self.db)
            .await
            .context("list device security statuses")?;
        Ok(models.into_iter().map(security_status_from_model).collect())
    }

    async fn list_all(&self) -> Result<Vec<DeviceSecurityStatus>, TrackerServiceError> {
        let models = device_security_statuses::Entity::find()
            .order_by_asc(device_security_statuses::Column::Id)
            .all(&self.db)
            .await
            .context("list all device security statuses")?;
        Ok(models.into_iter().map(security_status_from_model).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<DeviceSecurityStatus>, TrackerServiceError> {
        let model = device_security_statuses::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("get device security status")?;
        Ok(model.map(security_status_from_model))
    }

    async fn create(
        &self,
        draft: &SecurityStatusDraft,
        created_by: Uuid,
    ) -> Result<DeviceSecurityStatus, TrackerServiceError> {
        let model = security_status_active_model(draft, created_by, Utc::now())
            .insert(&self.db)
            .await
            .context("create device security status")?;
        Ok(security_status_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        draft: &SecurityStatusDraft,
    ) -> Result<Option<DeviceSecurityStatus>, TrackerServiceError> {
        let Some(model) = device_security_statuses::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find device security status for update")?
        else {
            return Ok(None);
        };
        let now = Utc::now();
        let mut am = model.into_active_model();
        am.network_element_name = Set(draft.network_element_name.clone());
        am.is_online = Set(draft.is_online);
        am.asset_serial_number = Set(draft.asset_serial_number.clone());
        am.check_date = Set(draft.check_date);
        am.last_check_time = Set(now);
        am.updated_at = Set(now);
        let model = am
            .update(&self.db)
            .await
            .context("update device security status")?;
        Ok(Some(security_status_from_model(model)))
    }

    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError> {
        let result = device_security_statuses::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete device security status")?;
        Ok(result.rows_affected > 0)
    }

    async fn insert_many(
        &self,
        drafts: &[SecurityStatusDraft],
        created_by: Uuid,
    ) -> Result<u64, TrackerServiceError> {
        let now = Utc::now();
        let models = drafts
            .iter()
            .map(|draft| security_status_active_model(draft, created_by, now));
        let inserted = device_security_statuses::Entity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .context("insert device security statuses")?;
        Ok(inserted)
    }
}

/// `last_check_time` is stamped with the write time.
fn security_status_active_model(
    draft: &SecurityStatusDraft,
    created_by: Uuid,
    now: DateTime<Utc>,
) -> device_security_statuses::ActiveModel {
    device_security_statuses::ActiveModel {
        network_element_name: Set(draft.network_element_name.clone()),
        is_online: Set(draft.is_online),
        asset_serial_number: Set(draft.asset_serial_number.clone()),
        check_date: Set(draft.check_date),
        last_check_time: Set(now),
        created_by: Set(Some(created_by)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn security_status_from_model(model: device_security_statuses::Model) -> DeviceSecurityStatus {
    DeviceSecurityStatus {
        id: model.id,
        network_element_name: model.network_element_name,
        is_online: model.is_online,
        asset_serial_number: model.asset_serial_number,
        check_date: model.check_date,
        last_check_time: model.last_check_time,
        created_by: model.created_by,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Device snapshot repository ───────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDeviceSnapshotRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct ArrivalSnapshotRow {
    barcode: String,
    device_model: String,
    project_name: String,
    arrival_date: NaiveDate,
}

#[derive(Debug, FromQueryResult)]
struct InstallationSnapshotRow {
    asset_serial_number: String,
    network_element_name: String,
    is_online: bool,
    check_date: Option<NaiveDate>,
}

impl DeviceSnapshotRepository for DbDeviceSnapshotRepository {
    async fn arrivals_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ArrivalSnapshot>, TrackerServiceError> {
        let rows = device_arrivals::Entity::find()
            .select_only()
            .columns([
                device_arrivals::Column::Barcode,
                device_arrivals::Column::DeviceModel,
                device_arrivals::Column::ProjectName,
                device_arrivals::Column::ArrivalDate,
            ])
            .filter(device_arrivals::Column::CreatedAt.gte(start))
            .filter(device_arrivals::Column::CreatedAt.lt(end))
            .into_model::<ArrivalSnapshotRow>()
            .all(&self.db)
            .await
            .context("select arrival snapshots")?;
        Ok(rows
            .into_iter()
            .map(|row| ArrivalSnapshot {
                barcode: row.barcode,
                device_model: row.device_model,
                project_name: row.project_name,
                arrival_date: row.arrival_date,
            })
            .collect())
    }

    async fn installations_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<InstallationSnapshot>, TrackerServiceError> {
        let rows = device_security_statuses::Entity::find()
            .select_only()
            .columns([
                device_security_statuses::Column::AssetSerialNumber,
                device_security_statuses::Column::NetworkElementName,
                device_security_statuses::Column::IsOnline,
                device_security_statuses::Column::CheckDate,
            ])
            .filter(device_security_statuses::Column::CreatedAt.gte(start))
            .filter(device_security_statuses::Column::CreatedAt.lt(end))
            .order_by_asc(device_security_statuses::Column::LastCheckTime)
            .order_by_asc(device_security_statuses::Column::Id)
            .into_model::<InstallationSnapshotRow>()
            .all(&self.db)
            .await
            .context("select installation snapshots")?;
        Ok(rows
            .into_iter()
            .map(|row| InstallationSnapshot {
                asset_serial_number: row.asset_serial_number,
                network_element_name: row.network_element_name,
                is_online: row.is_online,
                check_date: row.check_date,
            })
            .collect())
    }

    async fn count_checks_on(
        &self,
        date: NaiveDate,
    ) -> Result<DailyCheckSummary, TrackerServiceError> {
        let count = |is_online: bool| {
            device_security_statuses::Entity::find()
                .filter(device_security_statuses::Column::CheckDate.eq(date))
                .filter(device_security_statuses::Column::IsOnline.eq(is_online))
                .count(&self.db)
        };
        let online = count(true).await.context("count online checks")?;
        let offline = count(false).await.context("count offline checks")?;
        Ok(DailyCheckSummary {
            date,
            online,
            offline,
        })
    }
}

// ── Activity log repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActivityLogRepository {
    pub db: DatabaseConnection,
}

impl ActivityLogRepository for DbActivityLogRepository {
    async fn append(&self, entry: &NewActivityLog) -> Result<(), TrackerServiceError> {
        let model = user_activity_logs::ActiveModel {
            user_id: Set(entry.user_id),
            action_type: Set(entry.action_type.as_str().to_owned()),
            content_type: Set(entry.content_type.as_str().to_owned()),
            object_id: Set(entry.object_id),
            description: Set(entry.description.clone()),
            ip_address: Set(entry.ip_address.clone()),
            user_agent: Set(entry.user_agent.clone()),
            timestamp: Set(entry.timestamp),
            ..Default::default()
        };
        user_activity_logs::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .context("append activity log")?;
        Ok(())
    }

    async fn list(
        &self,
        filter: &ActivityLogFilter,
        sort_by: ActivityLogSortBy,
        page: PageRequest,
    ) -> Result<Vec<ActivityLog>, TrackerServiceError> {
        let mut query = user_activity_logs::Entity::find();
        if let Some(user_id) = filter.user_id {
            query = query.filter(user_activity_logs::Column::UserId.eq(user_id));
        }
        if let Some(action_type) = filter.action_type {
            query = query.filter(user_activity_logs::Column::ActionType.eq(action_type.as_str()));
        }
        if let Some(content_type) = filter.content_type {
            query = query.filter(user_activity_logs::Column::ContentType.eq(content_type.as_str()));
        }
        query = match sort_by {
            ActivityLogSortBy::Timestamp(Sort::Desc) => query
                .order_by_desc(user_activity_logs::Column::Timestamp)
                .order_by_desc(user_activity_logs::Column::Id),
            ActivityLogSortBy::Timestamp(Sort::Asc) => query
                .order_by_asc(user_activity_logs::Column::Timestamp)
                .order_by_asc(user_activity_logs::Column::Id),
        };
        let models = query
            .offset(page.offset())
            .limit(u64::from(page.clamped().per_page))
            .all(&self.db)
            .await
            .context("list activity logs")?;
        models.into_iter().map(activity_log_from_model).collect()
    }

    async fn delete(&self, id: i64) -> Result<bool, TrackerServiceError> {
        let result = user_activity_logs::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete activity log")?;
        Ok(result.rows_affected > 0)
    }
}

fn activity_log_from_model(
    model: user_activity_logs::Model,
) -> Result<ActivityLog, TrackerServiceError> {
    Ok(ActivityLog {
        id: model.id,
        user_id: model.user_id,
        action_type: model
            .action_type
            .parse::<ActionType>()
            .context("decode stored action type")?,
        content_type: model
            .content_type
            .parse::<ContentType>()
            .context("decode stored content type")?,
        object_id: model.object_id,
        description: model.description,
        ip_address: model.ip_address,
        user_agent: model.user_agent,
        timestamp: model.timestamp,
    })
}

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use devtrack_domain::pagination::PageRequest;
use devtrack_tracker::domain::audit::ClassificationRules;
use devtrack_tracker::domain::repository::{ActivityLogRepository, DeviceSnapshotRepository};
use devtrack_tracker::domain::types::{
    ActivityLog, ActivityLogFilter, ActivityLogSortBy, ArrivalSnapshot, DailyCheckSummary,
    InstallationSnapshot, NewActivityLog,
};
use devtrack_tracker::error::TrackerServiceError;
use devtrack_tracker::infra::event_bus::AuthEventBus;
use devtrack_tracker::state::AppState;
use devtrack_tracker::usecase::activity::ActivityRecorder;

pub const TEST_AUTH_EVENTS_TOKEN: &str = "test-internal-token";

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// State whose database is never reached by the routes under test.
pub fn offline_state() -> AppState {
    AppState {
        db: DatabaseConnection::Disconnected,
        auth_events: AuthEventBus::new(8),
        auth_events_token: TEST_AUTH_EVENTS_TOKEN.to_owned(),
        dashboard_window: Duration::hours(24),
        dashboard_page_size: 20,
        rules: Arc::new(ClassificationRules::default()),
    }
}

// ── MockActivityLogRepo ──────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockActivityLogRepo {
    pub entries: Arc<Mutex<Vec<NewActivityLog>>>,
    pub stored: Vec<ActivityLog>,
    pub fail_appends: bool,
    pub panic_appends: bool,
    pub delete_returns: bool,
}

impl MockActivityLogRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose appends always fail.
    pub fn failing() -> Self {
        Self {
            fail_appends: true,
            ..Self::default()
        }
    }

    /// A store that panics mid-write.
    pub fn panicking() -> Self {
        Self {
            panic_appends: true,
            ..Self::default()
        }
    }

    /// Returns a shared handle to appended entries for post-execution inspection.
    pub fn entries_handle(&self) -> Arc<Mutex<Vec<NewActivityLog>>> {
        Arc::clone(&self.entries)
    }

    pub fn recorder(&self) -> ActivityRecorder<MockActivityLogRepo> {
        ActivityRecorder::new(Arc::new(ClassificationRules::default()), self.clone())
    }
}

impl ActivityLogRepository for MockActivityLogRepo {
    async fn append(&self, entry: &NewActivityLog) -> Result<(), TrackerServiceError> {
        if self.panic_appends {
            panic!("activity store connection lost");
        }
        if self.fail_appends {
            return Err(anyhow::anyhow!("connection refused").into());
        }
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn list(
        &self,
        filter: &ActivityLogFilter,
        _sort_by: ActivityLogSortBy,
        _page: PageRequest,
    ) -> Result<Vec<ActivityLog>, TrackerServiceError> {
        Ok(self
            .stored
            .iter()
            .filter(|log| filter.user_id.is_none_or(|id| id == log.user_id))
            .filter(|log| filter.action_type.is_none_or(|a| a == log.action_type))
            .filter(|log| filter.content_type.is_none_or(|c| c == log.content_type))
            .cloned()
            .collect())
    }

    async fn delete(&self, _id: i64) -> Result<bool, TrackerServiceError> {
        Ok(self.delete_returns)
    }
}

// ── MockSnapshotRepo ─────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockSnapshotRepo {
    pub arrivals: Vec<ArrivalSnapshot>,
    pub installations: Vec<InstallationSnapshot>,
    pub online_today: u64,
    pub offline_today: u64,
    pub windows: Arc<Mutex<Vec<(DateTime<Utc>, DateTime<Utc>)>>>,
    pub counted_dates: Arc<Mutex<Vec<NaiveDate>>>,
}

impl DeviceSnapshotRepository for MockSnapshotRepo {
    async fn arrivals_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ArrivalSnapshot>, TrackerServiceError> {
        self.windows.lock().unwrap().push((start, end));
        Ok(self.arrivals.clone())
    }

    async fn installations_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<InstallationSnapshot>, TrackerServiceError> {
        self.windows.lock().unwrap().push((start, end));
        Ok(self.installations.clone())
    }

    async fn count_checks_on(
        &self,
        date: NaiveDate,
    ) -> Result<DailyCheckSummary, TrackerServiceError> {
        self.counted_dates.lock().unwrap().push(date);
        Ok(DailyCheckSummary {
            date,
            online: self.online_today,
            offline: self.offline_today,
        })
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn arrival(barcode: &str) -> ArrivalSnapshot {
    ArrivalSnapshot {
        barcode: barcode.to_owned(),
        device_model: "AAU-5613".to_owned(),
        project_name: "Metro 5G".to_owned(),
        arrival_date: date(2024, 5, 31),
    }
}

pub fn installation(serial: &str) -> InstallationSnapshot {
    InstallationSnapshot {
        asset_serial_number: serial.to_owned(),
        network_element_name: format!("NE-{serial}"),
        is_online: true,
        check_date: Some(date(2024, 6, 1)),
    }
}

pub fn stored_log(
    id: i64,
    user_id: Uuid,
    action_type: devtrack_domain::activity::ActionType,
    content_type: devtrack_domain::activity::ContentType,
) -> ActivityLog {
    ActivityLog {
        id,
        user_id,
        action_type,
        content_type,
        object_id: None,
        description: String::new(),
        ip_address: String::new(),
        user_agent: String::new(),
        timestamp: fixed_now(),
    }
}

use std::sync::Arc;

use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::domain::audit::ClassificationRules;
use crate::infra::db::{
    DbActivityLogRepository, DbArrivalRepository, DbDeliveryRepository, DbDeviceSnapshotRepository,
    DbSecurityStatusRepository,
};
use crate::infra::event_bus::AuthEventBus;
use crate::usecase::activity::ActivityRecorder;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth_events: AuthEventBus,
    /// Shared secret the gateway presents on the auth-event intake.
    pub auth_events_token: String,
    pub dashboard_window: Duration,
    pub dashboard_page_size: u32,
    pub rules: Arc<ClassificationRules>,
}

impl AppState {
    pub fn arrival_repo(&self) -> DbArrivalRepository {
        DbArrivalRepository {
            db: self.db.clone(),
        }
    }

    pub fn delivery_repo(&self) -> DbDeliveryRepository {
        DbDeliveryRepository {
            db: self.db.clone(),
        }
    }

    pub fn security_status_repo(&self) -> DbSecurityStatusRepository {
        DbSecurityStatusRepository {
            db: self.db.clone(),
        }
    }

    pub fn snapshot_repo(&self) -> DbDeviceSnapshotRepository {
        DbDeviceSnapshotRepository {
            db: self.db.clone(),
        }
    }

    pub fn activity_log_repo(&self) -> DbActivityLogRepository {
        DbActivityLogRepository {
            db: self.db.clone(),
        }
    }

    pub fn activity_recorder(&self) -> ActivityRecorder<DbActivityLogRepository> {
        ActivityRecorder::new(Arc::clone(&self.rules), self.activity_log_repo())
    }
}

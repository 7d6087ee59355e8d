use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use devtrack_domain::pagination::PageRequest;
use devtrack_domain::user::UserRole;

use crate::domain::audit::{Classification, ClassificationRules, RequestFacts};
use crate::domain::repository::ActivityLogRepository;
use crate::domain::types::{
    ActivityLog, ActivityLogFilter, ActivityLogSortBy, AuthEvent, ClientInfo, NewActivityLog,
};
use crate::error::TrackerServiceError;

// ── ActivityRecorder ─────────────────────────────────────────────────────────

/// Classifies interactions and appends audit entries.
///
/// Store failures are logged and swallowed; recording never fails the caller.
#[derive(Clone)]
pub struct ActivityRecorder<R: ActivityLogRepository> {
    rules: Arc<ClassificationRules>,
    repo: R,
}

impl<R> ActivityRecorder<R>
where
    R: ActivityLogRepository + Clone + 'static,
{
    pub fn new(rules: Arc<ClassificationRules>, repo: R) -> Self {
        Self { rules, repo }
    }

    pub fn rules(&self) -> &ClassificationRules {
        &self.rules
    }

    /// Record one finished request. Returns `true` if an entry was stored.
    pub async fn record_request(
        &self,
        user_id: Option<Uuid>,
        facts: &RequestFacts,
        client: &ClientInfo,
    ) -> bool {
        let Some(user_id) = user_id else {
            return false;
        };
        let Some(classification) = self.rules.classify(facts) else {
            return false;
        };
        self.append(user_id, classification, client).await
    }

    pub async fn record_auth_event(&self, event: &AuthEvent) -> bool {
        let classification = Classification::for_auth_event(event.kind);
        self.append(event.user_id, classification, &event.client)
            .await
    }

    async fn append(
        &self,
        user_id: Uuid,
        classification: Classification,
        client: &ClientInfo,
    ) -> bool {
        let entry = NewActivityLog {
            user_id,
            action_type: classification.action_type,
            content_type: classification.content_type,
            object_id: classification.object_id,
            description: classification.description,
            ip_address: client.ip_address.clone(),
            user_agent: client.user_agent.clone(),
            timestamp: Utc::now(),
        };
        let (action_type, content_type) = (entry.action_type, entry.content_type);
        // The write runs on its own task so a panicking store stays contained.
        let repo = self.repo.clone();
        let written = tokio::spawn(async move { repo.append(&entry).await }).await;
        match written {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                error!(
                    error = %e,
                    %user_id,
                    %action_type,
                    %content_type,
                    "failed to write activity log"
                );
                false
            }
            Err(e) => {
                error!(
                    error = %e,
                    %user_id,
                    %action_type,
                    %content_type,
                    "activity log write aborted"
                );
                false
            }
        }
    }
}

/// Append one entry per auth event until the bus closes.
pub fn spawn_auth_event_listener<R>(
    recorder: ActivityRecorder<R>,
    mut events: broadcast::Receiver<AuthEvent>,
) -> JoinHandle<()>
where
    R: ActivityLogRepository + Clone + 'static,
{
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    recorder.record_auth_event(&event).await;
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "auth event listener lagged; events dropped");
                }
                Err(RecvError::Closed) => {
                    info!("auth event bus closed; listener stopping");
                    break;
                }
            }
        }
    })
}

// ── ListActivityLogs ─────────────────────────────────────────────────────────

pub struct ListActivityLogsUseCase<R: ActivityLogRepository> {
    pub repo: R,
}

impl<R: ActivityLogRepository> ListActivityLogsUseCase<R> {
    pub async fn execute(
        &self,
        user_role: u8,
        filter: ActivityLogFilter,
        sort_by: ActivityLogSortBy,
        page: PageRequest,
    ) -> Result<Vec<ActivityLog>, TrackerServiceError> {
        if !UserRole::Admin.is_granted_to(user_role) {
            return Err(TrackerServiceError::Forbidden);
        }
        self.repo.list(&filter, sort_by, page.clamped()).await
    }
}

// ── DeleteActivityLog ────────────────────────────────────────────────────────

pub struct DeleteActivityLogUseCase<R: ActivityLogRepository> {
    pub repo: R,
}

impl<R: ActivityLogRepository> DeleteActivityLogUseCase<R> {
    pub async fn execute(&self, user_role: u8, id: i64) -> Result<(), TrackerServiceError> {
        if !UserRole::Superuser.is_granted_to(user_role) {
            return Err(TrackerServiceError::Forbidden);
        }
        if !self.repo.delete(id).await? {
            return Err(TrackerServiceError::ActivityLogNotFound);
        }
        Ok(())
    }
}

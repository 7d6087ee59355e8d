use uuid::Uuid;

use devtrack_domain::pagination::PageRequest;

use crate::domain::repository::SecurityStatusRepository;
use crate::domain::types::{DeviceSecurityStatus, SecurityStatusDraft};
use crate::error::TrackerServiceError;
use crate::usecase::require_identifier;

fn validate(draft: SecurityStatusDraft) -> Result<SecurityStatusDraft, TrackerServiceError> {
    Ok(SecurityStatusDraft {
        asset_serial_number: require_identifier(&draft.asset_serial_number)?,
        ..draft
    })
}

// ── ListSecurityStatuses ─────────────────────────────────────────────────────

pub struct ListSecurityStatusesUseCase<R: SecurityStatusRepository> {
    pub repo: R,
}

impl<R: SecurityStatusRepository> ListSecurityStatusesUseCase<R> {
    pub async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<Vec<DeviceSecurityStatus>, TrackerServiceError> {
        self.repo.list(page.clamped()).await
    }
}

// ── GetSecurityStatus ────────────────────────────────────────────────────────

pub struct GetSecurityStatusUseCase<R: SecurityStatusRepository> {
    pub repo: R,
}

impl<R: SecurityStatusRepository> GetSecurityStatusUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<DeviceSecurityStatus, TrackerServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or(TrackerServiceError::SecurityStatusNotFound)
    }
}

// ── CreateSecurityStatus ─────────────────────────────────────────────────────

pub struct CreateSecurityStatusUseCase<R: SecurityStatusRepository> {
    pub repo: R,
}

impl<R: SecurityStatusRepository> CreateSecurityStatusUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        draft: SecurityStatusDraft,
    ) -> Result<DeviceSecurityStatus, TrackerServiceError> {
        let draft = validate(draft)?;
        self.repo.create(&draft, user_id).await
    }
}

// ── UpdateSecurityStatus ─────────────────────────────────────────────────────

pub struct UpdateSecurityStatusUseCase<R: SecurityStatusRepository> {
    pub repo: R,
}

impl<R: SecurityStatusRepository> UpdateSecurityStatusUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        draft: SecurityStatusDraft,
    ) -> Result<DeviceSecurityStatus, TrackerServiceError> {
        let draft = validate(draft)?;
        self.repo
            .update(id, &draft)
            .await?
            .ok_or(TrackerServiceError::SecurityStatusNotFound)
    }
}

// ── DeleteSecurityStatus ─────────────────────────────────────────────────────

pub struct DeleteSecurityStatusUseCase<R: SecurityStatusRepository> {
    pub repo: R,
}

impl<R: SecurityStatusRepository> DeleteSecurityStatusUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), TrackerServiceError> {
        if !self.repo.delete(id).await? {
            return Err(TrackerServiceError::SecurityStatusNotFound);
        }
        Ok(())
    }
}

// ── ImportSecurityStatuses ───────────────────────────────────────────────────

pub struct ImportSecurityStatusesUseCase<R: SecurityStatusRepository> {
    pub repo: R,
}

impl<R: SecurityStatusRepository> ImportSecurityStatusesUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        drafts: Vec<SecurityStatusDraft>,
    ) -> Result<u64, TrackerServiceError> {
        let rows = drafts
            .into_iter()
            .map(validate)
            .collect::<Result<Vec<_>, _>>()?;
        if rows.is_empty() {
            return Ok(0);
        }
        self.repo.insert_many(&rows, user_id).await
    }
}

// ── ExportSecurityStatuses ───────────────────────────────────────────────────

pub struct ExportSecurityStatusesUseCase<R: SecurityStatusRepository> {
    pub repo: R,
}

impl<R: SecurityStatusRepository> ExportSecurityStatusesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<DeviceSecurityStatus>, TrackerServiceError> {
        self.repo.list_all().await
    }
}
